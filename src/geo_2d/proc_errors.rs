/// Geometry error type.
#[derive(Debug)]
pub enum GeoError {
    /// Heron radicand came out negative (nearly collinear points or impossible side lengths).
    NegativeRadicand(f32),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::NegativeRadicand(radicand) => write!(f, "- Heron radicand is negative ({:e}); the triangle is degenerate", radicand),
            GeoError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Result type for the `geo_2d` module.
pub type ProcResult<T> = std::result::Result<T, GeoError>;

/// Create a `GeoError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(GeoError::StringOnly(error_str.to_string()))
}
