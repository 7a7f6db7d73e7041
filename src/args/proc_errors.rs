/// Argument parsing error type.
#[derive(Debug)]
pub enum ArgError {
    /// IO error (config file).
    IoError(crate::io::IoError),
    /// Wrong number of coordinates.
    Arity {
        expected: usize,
        received: usize,
    },
    /// A coordinate that is not a finite number.
    Parse {
        name: &'static str,
        token: String,
        reason: String,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgError::IoError(error) => write!(f, "- Config Error:\n{}", error),
            ArgError::Arity{expected, received} => write!(f, "- Expected {} inputs; received {}", expected, received),
            ArgError::Parse{name, token, reason} => write!(f, "- Could not parse {} = \"{}\" as a number: {}", name, token, reason),
            ArgError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for ArgError {
    fn from(error: crate::io::IoError) -> Self {
        ArgError::IoError(error)
    }
}

/// Result type for the `args` module.
pub type ProcResult<T> = std::result::Result<T, ArgError>;

/// Create a `ArgError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(ArgError::StringOnly(error_str.to_string()))
}
