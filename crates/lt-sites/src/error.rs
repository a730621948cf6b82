//! Site configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("i/o error reading site configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed site configuration: {0}")]
    Parse(String),

    #[error("site '{site}' has fewer than 3 polygon vertices")]
    EmptyPolygon { site: String },

    #[error("duplicate site id '{0}'")]
    DuplicateSite(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
