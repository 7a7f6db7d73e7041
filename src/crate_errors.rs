use crate::{
    args,
    geo_2d,
    report,
};

/// Exit code for bad arguments or options.
pub const EXIT_ARGUMENT: i32 = 2;
/// Exit code for a numeric-domain failure.
pub const EXIT_NUMERIC: i32 = 3;
/// Exit code for output failures.
pub const EXIT_OTHER: i32 = 1;

/// Error-type enum for the `heron` crate.
#[derive(Debug)]
pub enum HeronError {
    ArgError(args::ArgError),
    GeoError(geo_2d::GeoError),
    ReportError(report::ReportError),
}
impl HeronError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HeronError::ArgError(_) => EXIT_ARGUMENT,
            HeronError::GeoError(_) => EXIT_NUMERIC,
            HeronError::ReportError(_) => EXIT_OTHER,
        }
    }
}
impl std::fmt::Display for HeronError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeronError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            HeronError::GeoError(error) => write!(f, "! NUMERIC ERROR:\n{}", error),
            HeronError::ReportError(error) => write!(f, "! OUTPUT ERROR:\n{}", error),
        }
    }
}
impl From<args::ArgError> for HeronError {
    fn from(error: args::ArgError) -> Self {
        HeronError::ArgError(error)
    }
}
impl From<geo_2d::GeoError> for HeronError {
    fn from(error: geo_2d::GeoError) -> Self {
        HeronError::GeoError(error)
    }
}
impl From<report::ReportError> for HeronError {
    fn from(error: report::ReportError) -> Self {
        HeronError::ReportError(error)
    }
}

/// Result type for the `heron` crate.
pub type HeronResult<T> = std::result::Result<T, HeronError>;
