use super::*;

#[test]
fn empty_database_falls_back_to_generic_family() {
    let book = FontBook::from_database(usvg::fontdb::Database::new(), "Arvo", "Arvo");
    assert_eq!(book.family(FontRole::Body), "sans-serif");
    assert_eq!(book.family(FontRole::Title), "sans-serif");
    assert_eq!(book.face_count(), 0);
}

#[test]
fn missing_font_files_do_not_fail() {
    let settings = FontSettings {
        dir: "target/definitely/no-fonts".into(),
        files: vec!["Nope-Regular.ttf".into()],
        title_family: "Nope".into(),
        family: "Nope".into(),
    };
    let book = FontBook::load(&settings);
    assert_eq!(book.family(FontRole::Title), book.family(FontRole::Body));
}
