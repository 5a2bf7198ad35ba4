use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;

use super::DocumentSource;
use crate::foundation::error::{BannerError, BannerResult};

/// Documents stored as `<root>/<id>.json`.
#[derive(Clone, Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a document id maps to. Ids that could escape the root are rejected.
    pub fn path_for(&self, id: &str) -> BannerResult<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !id.starts_with('.');
        if !valid {
            return Err(BannerError::not_found(format!("'{id}' is not a valid document id")));
        }
        Ok(self.root.join(format!("{id}.json")))
    }
}

impl DocumentSource for FsSource {
    fn fetch(&self, id: &str) -> BannerResult<Value> {
        let path = self.path_for(id)?;
        if !path.is_file() {
            return Err(BannerError::not_found(format!(
                "no document '{id}' under '{}'",
                self.root.display()
            )));
        }
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read '{}'", path.display()))?;
        serde_json::from_slice(&bytes).map_err(|e| BannerError::from_decode(id, e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/fs.rs"]
mod tests;
