use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("unknown fallback mode '{0}', expected 'preserve' or 'legacy-drop'")]
    UnknownFallbackMode(String),
}
