use super::*;

#[test]
fn paint_order_is_z_then_insertion() {
    let mut scene = Scene::new();
    let style = TextStyle::new(8.0, Color::BLACK);
    scene.polar_text(10, 0.0, 0.5, "a", style);
    scene.polar_text(2, 0.0, 0.5, "b", style);
    scene.polar_text(10, 0.0, 0.5, "c", style);
    scene.polar_text(2, 0.0, 0.5, "d", style);

    let texts: Vec<&str> = scene
        .paint_order()
        .into_iter()
        .map(|op| match &op.kind {
            DrawKind::PolarText { text, .. } => text.as_str(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(texts, ["b", "d", "a", "c"]);
}

#[test]
fn text_style_builders() {
    let s = TextStyle::new(22.0, Color::WHITE)
        .bold()
        .align(HAlign::Right)
        .rotated(-90.0)
        .title();
    assert!(s.bold);
    assert_eq!(s.align, HAlign::Right);
    assert_eq!(s.rotation_deg, -90.0);
    assert_eq!(s.role, FontRole::Title);
}
