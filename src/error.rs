
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrimoireError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Load error: {0}")]
    Load(String),
    #[error("Malformed inquiry: {0}")]
    MalformedInquiry(String),
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, GrimoireError>;

// Helper conversions
impl From<serde_json::Error> for GrimoireError {
    fn from(e: serde_json::Error) -> Self {
        Self::Load(e.to_string())
    }
}

impl From<std::io::Error> for GrimoireError {
    fn from(e: std::io::Error) -> Self {
        Self::Load(e.to_string())
    }
}
