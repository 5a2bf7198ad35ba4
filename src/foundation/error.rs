/// Convenience result type used across bannerkit.
pub type BannerResult<T> = Result<T, BannerError>;

/// Top-level error taxonomy used by the schema, resolvers and collaborators.
#[derive(thiserror::Error, Debug)]
pub enum BannerError {
    /// A value matches no known variant at a position where one is required.
    #[error("schema mismatch error: {0}")]
    SchemaMismatch(String),

    /// A field with no documented default is absent.
    #[error("missing required field error: {0}")]
    MissingRequiredField(String),

    /// A numeric value lies outside its valid domain.
    #[error("invalid range error: {0}")]
    InvalidRange(String),

    /// The retrieval collaborator has no document for the requested identifier.
    #[error("not found error: {0}")]
    NotFound(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Data-only projection of [`BannerError`], used where errors are recorded rather than raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// See [`BannerError::SchemaMismatch`].
    SchemaMismatch,
    /// See [`BannerError::MissingRequiredField`].
    MissingRequiredField,
    /// See [`BannerError::InvalidRange`].
    InvalidRange,
    /// See [`BannerError::NotFound`].
    NotFound,
    /// See [`BannerError::Serde`].
    Serde,
    /// See [`BannerError::Other`].
    Other,
}

impl BannerError {
    /// Build a [`BannerError::SchemaMismatch`] value.
    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    /// Build a [`BannerError::MissingRequiredField`] value.
    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingRequiredField(msg.into())
    }

    /// Build a [`BannerError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`BannerError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`BannerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Kind tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SchemaMismatch(_) => ErrorKind::SchemaMismatch,
            Self::MissingRequiredField(_) => ErrorKind::MissingRequiredField,
            Self::InvalidRange(_) => ErrorKind::InvalidRange,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Serde(_) => ErrorKind::Serde,
            Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Classify a serde decoding failure at `context`.
    ///
    /// serde_json reports absent fields as `missing field `name``; everything else at a
    /// structural position is a variant or type mismatch.
    pub(crate) fn from_decode(context: &str, err: serde_json::Error) -> Self {
        let msg = err.to_string();
        if msg.starts_with("missing field") {
            Self::missing_field(format!("{context}: {msg}"))
        } else if err.is_syntax() || err.is_eof() || err.is_io() {
            Self::serde(format!("{context}: {msg}"))
        } else {
            Self::schema_mismatch(format!("{context}: {msg}"))
        }
    }
}

impl From<std::fmt::Error> for BannerError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Other(anyhow::Error::new(err).context("formatting output"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
