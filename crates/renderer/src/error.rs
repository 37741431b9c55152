use thiserror::Error;

use league_common::LeagueError;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to allocate {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("Failed to build region path")]
    Path,

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl From<RenderError> for LeagueError {
    fn from(err: RenderError) -> Self {
        LeagueError::RenderError(err.to_string())
    }
}
