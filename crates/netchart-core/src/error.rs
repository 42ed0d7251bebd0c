// File: crates/netchart-core/src/error.rs
// Summary: Typed errors for color parsing, option loading and raster surfaces.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color `{0}`")]
    Hex(String),
    #[error("invalid color function `{0}`")]
    Function(String),
    #[error("unknown color `{0}`")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid chart options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("maxPoints must be at least 1")]
    ZeroWindow,
    #[error("padding must be finite and non-negative, got {0}")]
    Padding(f32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown axis `{0}`, expected `left` or `right`")]
pub struct ParseAxisError(pub String);

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to allocate {width}x{height} raster surface")]
    Allocate { width: u32, height: u32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error("pixel readback failed")]
    ReadPixels,
}
