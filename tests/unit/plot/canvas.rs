use super::*;
use crate::data::city::Coordinates;
use crate::foundation::error::CalendarError;
use crate::layers::{MonthsLayer, ScalarBandLayer, TwilightKind, TwilightLayer};
use crate::test_support::{flat_sun, settings};

fn small_settings() -> Settings {
    let mut s = settings();
    s.poster.dpi = 10.0;
    s
}

fn oslo() -> Coordinates {
    Coordinates {
        latitude: 59.9139,
        longitude: 10.7522,
    }
}

fn fonts() -> FontBook {
    FontBook::from_database(usvg::fontdb::Database::new(), "Body", "Title")
}

fn dawn_layers() -> Vec<Box<dyn Layer>> {
    vec![
        Box::new(TwilightLayer::new(TwilightKind::Dawn, flat_sun(365))),
        Box::new(MonthsLayer),
    ]
}

struct Broken;

impl Layer for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn plot(&self, _: &mut Scene, _: &LayerContext<'_>, _: &Derived) -> CalendarResult<()> {
        Err(CalendarError::render("boom"))
    }
}

#[test]
fn setup_fixes_the_range_from_the_layers() {
    let s = small_settings();
    let canvas = CalendarCanvas::setup(&s, dawn_layers(), Placement::Poster, oslo()).unwrap();
    assert_eq!(canvas.range(), HourRange::new(4.5, 6.25).unwrap());
    assert!(canvas.scene().is_empty());
    assert_eq!(canvas.page().kind, LayoutKind::Poster);
}

#[test]
fn draw_paints_background_layers_then_title() {
    let s = small_settings();
    let drawn = CalendarCanvas::setup(&s, dawn_layers(), Placement::Poster, oslo())
        .unwrap()
        .draw()
        .unwrap();
    let ops = drawn.scene().ops();
    assert_eq!(ops[0].z, z::BACKGROUND);
    assert_eq!(ops[1].z, z::DIAL);
    let titles: Vec<&str> = ops
        .iter()
        .filter_map(|op| match &op.kind {
            DrawKind::FigureText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, ["2025", "Testville", "59.913900°N,   10.752200°E"]);
}

#[test]
fn wallpaper_leaves_the_dial_transparent() {
    let s = settings();
    let drawn = CalendarCanvas::setup(
        &s,
        dawn_layers(),
        Placement::Wallpaper { rotation: 0.0 },
        oslo(),
    )
    .unwrap()
    .draw()
    .unwrap();
    assert!(drawn.scene().ops().iter().all(|op| op.z != z::DIAL));
}

#[test]
fn finish_adds_footers_and_rasterizes() {
    let s = small_settings();
    let drawn = CalendarCanvas::setup(&s, dawn_layers(), Placement::Poster, oslo())
        .unwrap()
        .draw()
        .unwrap();
    let before = drawn.scene().len();
    let axes = drawn.page().figure.axes;
    let rendered = drawn.finish(&fonts()).unwrap();

    // five legend entries: swatch, label, description
    assert_eq!(rendered.scene.len(), before + 15);
    assert_eq!((rendered.image.width, rendered.image.height), (240, 300));
    assert!(rendered.svg.starts_with("<svg"));
    assert_eq!(rendered.pixel_at(Point::new(1.0, 1.0)), Some([255, 255, 255, 255]));

    let civil = rendered.pixel_at(axes.to_px(0.3, 5.75 / 24.0)).unwrap();
    assert_eq!(civil, s.colors.civil.to_rgba8());
}

#[test]
fn a_failing_layer_aborts_the_render() {
    let s = small_settings();
    let mut layers = dawn_layers();
    layers.push(Box::new(Broken));
    let err = CalendarCanvas::setup(&s, layers, Placement::Poster, oslo())
        .unwrap()
        .draw()
        .unwrap_err();
    assert_eq!(err.kind(), "render");
}

#[test]
fn export_writes_png_and_svg_for_posters() {
    let s = small_settings();
    let rendered = CalendarCanvas::setup(&s, dawn_layers(), Placement::Poster, oslo())
        .unwrap()
        .draw()
        .unwrap()
        .finish(&fonts())
        .unwrap();
    let dir = Path::new("target/unit-canvas");
    let written = rendered.export(dir, "Testville_Dawn").unwrap();
    assert_eq!(
        written,
        [
            dir.join("png/Testville_Dawn.png"),
            dir.join("svg/Testville_Dawn.svg")
        ]
    );
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn layers_without_data_get_no_footer_row() {
    let s = small_settings();
    let render = |layers: Vec<Box<dyn Layer>>| {
        CalendarCanvas::setup(&s, layers, Placement::Poster, oslo())
            .unwrap()
            .draw()
            .unwrap()
            .finish(&fonts())
            .unwrap()
    };
    let mut with_empty_ring = dawn_layers();
    with_empty_ring.push(Box::new(ScalarBandLayer::precipitation(Vec::new())));

    let baseline = render(dawn_layers());
    let rendered = render(with_empty_ring);
    assert_eq!(rendered.scene.len(), baseline.scene.len());
    assert_eq!(rendered.svg, baseline.svg);
}

#[test]
fn failed_svg_export_leaves_no_png_behind() {
    let s = small_settings();
    let rendered = CalendarCanvas::setup(&s, dawn_layers(), Placement::Poster, oslo())
        .unwrap()
        .draw()
        .unwrap()
        .finish(&fonts())
        .unwrap();
    let dir = Path::new("target/unit-canvas-blocked");
    let _ = std::fs::remove_dir_all(dir);
    std::fs::create_dir_all(dir).unwrap();
    // a regular file where the svg directory should go
    std::fs::write(dir.join("svg"), b"").unwrap();

    let err = rendered.export(dir, "Testville_Dawn").unwrap_err();
    assert_eq!(err.kind(), "export");
    assert!(!dir.join("png/Testville_Dawn.png").exists());
}
