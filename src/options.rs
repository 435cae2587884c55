use std::str::FromStr;

use crate::error::RewriteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMode {
    PreserveInput,
    LegacyDrop,
}

impl FromStr for FallbackMode {
    type Err = RewriteError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        match spec.trim() {
            "preserve" => Ok(Self::PreserveInput),
            "legacy-drop" => Ok(Self::LegacyDrop),
            other => Err(RewriteError::UnknownFallbackMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    pub fallback: FallbackMode,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            fallback: FallbackMode::PreserveInput,
        }
    }
}
