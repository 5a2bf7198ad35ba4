use url::Url;

use crate::foundation::error::{BannerError, BannerResult};

/// Knobs of a resolution pass. Passed explicitly; nothing is read from the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Base that relative media references are joined onto.
    pub asset_base_url: Option<Url>,
}

impl ResolveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset base. A base without a trailing slash is treated as a directory.
    pub fn with_asset_base_url(mut self, mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        self.asset_base_url = Some(base);
        self
    }

    /// Map a media reference from a document to the url an adapter should load.
    ///
    /// Absolute urls (including `data:`) pass through untouched, as does everything when no
    /// base is configured.
    pub fn resolve_asset(&self, reference: &str) -> BannerResult<String> {
        if reference.is_empty() || Url::parse(reference).is_ok() {
            return Ok(reference.to_string());
        }
        let Some(base) = &self.asset_base_url else {
            return Ok(reference.to_string());
        };
        base.join(reference).map(String::from).map_err(|e| {
            BannerError::schema_mismatch(format!(
                "asset reference '{reference}' cannot be joined onto '{base}': {e}"
            ))
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
