use super::*;

#[test]
fn rasterizes_a_filled_rect() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2" viewBox="0 0 4 2">
<rect x="0" y="0" width="2" height="2" fill="#ff0000"/>
</svg>"##;
    let img = rasterize_svg(svg, &usvg::Options::default(), Canvas::new(4, 2).unwrap()).unwrap();
    assert_eq!(img.data.len(), 4 * 2 * 4);
    assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(img.pixel(3, 1).map(|p| p[3]), Some(0));
    assert_eq!(img.pixel(4, 0), None);
}

#[test]
fn malformed_svg_is_a_render_error() {
    let err = rasterize_svg("<svg", &usvg::Options::default(), Canvas::new(1, 1).unwrap())
        .unwrap_err();
    assert_eq!(err.kind(), "render");
}

#[test]
fn writes_png_creating_directories() {
    let img = RasterImage {
        width: 1,
        height: 1,
        data: vec![1, 2, 3, 255],
    };
    let path = std::path::Path::new("target/unit-raster/nested/out.png");
    let _ = std::fs::remove_file(path);
    write_png(path, &img).unwrap();
    let back = image::open(path).unwrap().to_rgba8();
    assert_eq!(back.get_pixel(0, 0).0, [1, 2, 3, 255]);
}
