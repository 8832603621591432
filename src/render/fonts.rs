use std::path::Path;
use std::sync::Arc;

use crate::config::settings::FontSettings;
use crate::render::scene::FontRole;

const GENERIC_FALLBACK: &str = "sans-serif";

/// Font database plus the family names written into the SVG.
///
/// Families are resolved once, when the book is built: a configured family that no
/// loaded face provides falls back to the body family, then to the generic `sans-serif`.
#[derive(Clone)]
pub struct FontBook {
    db: Arc<usvg::fontdb::Database>,
    body: String,
    title: String,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .field("body", &self.body)
            .field("title", &self.title)
            .finish()
    }
}

impl FontBook {
    /// System fonts plus every configured font file that exists.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load(settings: &FontSettings) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for file in &settings.files {
            let path = if file.is_absolute() {
                file.clone()
            } else {
                settings.dir.join(file)
            };
            load_font_file(&mut db, &path);
        }
        Self::from_database(db, &settings.family, &settings.title_family)
    }

    /// Build from an existing database.
    pub fn from_database(mut db: usvg::fontdb::Database, body: &str, title: &str) -> Self {
        let body = resolve_family(&db, body, &[]);
        let title = resolve_family(&db, title, &[body.as_str()]);
        if body != GENERIC_FALLBACK {
            db.set_sans_serif_family(body.clone());
        }
        Self {
            db: Arc::new(db),
            body,
            title,
        }
    }

    /// Family written for `role`.
    pub fn family(&self, role: FontRole) -> &str {
        match role {
            FontRole::Body => &self.body,
            FontRole::Title => &self.title,
        }
    }

    /// Number of loaded faces.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Parse options sharing this database.
    pub fn options(&self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: Arc::clone(&self.db),
            font_resolver: fallback_resolver(self.body.clone()),
            ..Default::default()
        }
    }
}

fn load_font_file(db: &mut usvg::fontdb::Database, path: &Path) {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "font file not found, using fallback font");
        return;
    }
    if let Err(e) = db.load_font_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "failed to load font file");
    }
}

fn has_family(db: &usvg::fontdb::Database, family: &str) -> bool {
    db.faces()
        .any(|f| f.families.iter().any(|(name, _)| name.eq_ignore_ascii_case(family)))
}

fn resolve_family(db: &usvg::fontdb::Database, wanted: &str, fallbacks: &[&str]) -> String {
    if has_family(db, wanted) {
        return wanted.to_owned();
    }
    let chosen = fallbacks
        .iter()
        .copied()
        .find(|f| *f == GENERIC_FALLBACK || has_family(db, f))
        .unwrap_or(GENERIC_FALLBACK);
    tracing::warn!(wanted, chosen, "font family not installed, falling back");
    chosen.to_owned()
}

/// Resolver that always finds a face: the requested families, then the body family, then
/// any generic family, then the first face in the database.
fn fallback_resolver(body: String) -> usvg::FontResolver<'static> {
    use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

    usvg::FontResolver {
        select_font: Box::new(move |font, fontdb| {
            let mut families: Vec<Family<'_>> = font
                .families()
                .iter()
                .map(|family| match family {
                    usvg::FontFamily::Serif => Family::Serif,
                    usvg::FontFamily::SansSerif => Family::SansSerif,
                    usvg::FontFamily::Cursive => Family::Cursive,
                    usvg::FontFamily::Fantasy => Family::Fantasy,
                    usvg::FontFamily::Monospace => Family::Monospace,
                    usvg::FontFamily::Named(s) => Family::Name(s),
                })
                .collect();
            families.push(Family::Name(&body));
            families.push(Family::SansSerif);
            families.push(Family::Serif);

            let style = match font.style() {
                usvg::FontStyle::Normal => Style::Normal,
                usvg::FontStyle::Italic => Style::Italic,
                usvg::FontStyle::Oblique => Style::Oblique,
            };
            let query = Query {
                families: &families,
                weight: Weight(font.weight()),
                stretch: Stretch::Normal,
                style,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
