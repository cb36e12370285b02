use std::path::Path;
use std::sync::Arc;

use usvg::fontdb;

/// Family name handed to the SVG text engine when no installed face can be found at all.
///
/// Text drawn with it renders no glyphs, but layout still succeeds.
pub const GENERIC_FAMILY: &str = "sans-serif";

/// How the requested font was (or was not) honored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontResolution {
    /// The requested font file or installed family was found.
    Loaded {
        /// Family name text is rendered with.
        family: String,
    },
    /// The request could not be honored; the default face is used instead.
    Fallback {
        /// Family of the default face, `None` when no font is installed.
        family: Option<String>,
        /// Why the requested font was not used.
        reason: String,
    },
}

impl FontResolution {
    /// `true` when the default face stands in for the requested one.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A font ready for text rasterization: the face database plus the family to select.
#[derive(Clone)]
pub struct ResolvedFont {
    db: Arc<fontdb::Database>,
    family: String,
    resolution: FontResolution,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("faces", &self.db.len())
            .field("family", &self.family)
            .field("resolution", &self.resolution)
            .finish()
    }
}

impl ResolvedFont {
    /// Family name used in rendered text.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Whether the requested font was loaded or a fallback is in use.
    pub fn resolution(&self) -> &FontResolution {
        &self.resolution
    }

    /// Shared face database.
    pub fn database(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.db)
    }

    /// A font without any installed faces. Text renders nothing; useful for tests and headless
    /// environments where the system font scan is unwanted.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(fontdb::Database::new()),
            family: GENERIC_FAMILY.to_string(),
            resolution: FontResolution::Fallback {
                family: None,
                reason: "no fonts loaded".to_string(),
            },
        }
    }
}

/// Resolve a font request against a font file or the installed system fonts.
///
/// `source` may name a font file (`.ttf`, `.otf`, `.ttc`) or an installed family. When it is
/// `None`, unreadable, or unknown, the default sans-serif face is used and the returned
/// [`FontResolution`] says so. This never fails.
pub fn resolve_font(source: Option<&str>) -> ResolvedFont {
    let mut db = fontdb::Database::new();

    let requested = match source.map(str::trim) {
        None | Some("") => Err("no font requested".to_string()),
        Some(src) if Path::new(src).is_file() => load_font_file(&mut db, Path::new(src)),
        Some(src) => Ok(src.to_string()),
    };

    db.load_system_fonts();

    let resolution = match requested {
        Ok(name) => match find_family(&db, &name) {
            Some(family) => FontResolution::Loaded { family },
            None => FontResolution::Fallback {
                family: default_family(&db),
                reason: format!("font '{name}' is not installed"),
            },
        },
        Err(reason) => FontResolution::Fallback {
            family: default_family(&db),
            reason,
        },
    };

    match &resolution {
        FontResolution::Loaded { family } => {
            tracing::debug!(%family, faces = db.len(), "font loaded");
        }
        FontResolution::Fallback { family, reason } if source.is_some() => {
            tracing::warn!(?family, %reason, "font unavailable, using default font");
        }
        FontResolution::Fallback { family, .. } => {
            tracing::debug!(?family, "using default font");
        }
    }

    let family = match &resolution {
        FontResolution::Loaded { family } => family.clone(),
        FontResolution::Fallback { family, .. } => family
            .clone()
            .unwrap_or_else(|| GENERIC_FAMILY.to_string()),
    };

    ResolvedFont {
        db: Arc::new(db),
        family,
        resolution,
    }
}

/// Load one font file and return the family of its first face.
fn load_font_file(db: &mut fontdb::Database, path: &Path) -> Result<String, String> {
    let before = db.len();
    db.load_font_file(path)
        .map_err(|e| format!("read font file '{}': {e}", path.display()))?;
    if db.len() == before {
        return Err(format!(
            "font file '{}' contains no usable faces",
            path.display()
        ));
    }
    db.faces()
        .skip(before)
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| format!("font file '{}' has no family name", path.display()))
}

/// Case-insensitive family lookup returning the installed spelling.
fn find_family(db: &fontdb::Database, name: &str) -> Option<String> {
    db.faces()
        .flat_map(|face| face.families.iter())
        .find(|(family, _)| family.eq_ignore_ascii_case(name))
        .map(|(family, _)| family.clone())
}

fn default_family(db: &fontdb::Database) -> Option<String> {
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..Default::default()
    };
    let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id))?;
    db.face(id)
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
