use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct EmbeddedAssets;

/// Reads assets from the configured directory first and falls back to the
/// copies compiled into the binary. Unknown paths load as nothing.
#[derive(Clone)]
pub struct Assets {
    dir: PathBuf,
}

impl Assets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.dir.join(path).is_file() || EmbeddedAssets::get(path).is_some()
    }
}

impl gpui::AssetSource for Assets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        if let Ok(bytes) = std::fs::read(self.dir.join(path)) {
            return Ok(Some(Cow::Owned(bytes)));
        }
        if let Some(file) = EmbeddedAssets::get(path) {
            return Ok(Some(file.data));
        }
        tracing::debug!(path, "asset not found");
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<gpui::SharedString>> {
        Ok(EmbeddedAssets::iter()
            .filter(|p| p.starts_with(path))
            .map(|p| gpui::SharedString::from(p.to_string()))
            .collect())
    }
}
