use itertools::Itertools;
use log::debug;

/// Extensions accepted by `read_cfg_file`.
pub const SUPPORTED_CFG_EXTENSIONS: &[&str] = &["json", "toml", "yaml", "yml"];

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Deserialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Verbose IO error, carrying the offending file when there is one.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

fn file_err(path: &str, cause: IoErrorType) -> IoError {
    IoError{file: Some(path.to_string()), cause}
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| file_err(path, IoErrorType::File(error)))
}

/// Read a whole file to a string with verbose errors.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| file_err(path, IoErrorType::File(error)))
}

/// Read in cfg files from the supported filetypes, picked by extension.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    debug!("Reading config file: {}", path);
    match path.rsplit('.').next() {
        Some("json") => {
            serde_json::from_reader(open(path)?)
                .map_err(|error| file_err(path, IoErrorType::SerdeJson(error)))
        },
        Some("toml") => {
            toml::from_str(&read_to_string(path)?)
                .map_err(|error| file_err(path, IoErrorType::TomlDe(error)))
        },
        Some("yaml") | Some("yml") => {
            serde_yaml::from_reader(open(path)?)
                .map_err(|error| file_err(path, IoErrorType::SerdeYaml(error)))
        },
        _ => {
            let error_string = format!(
                "Unsupported filetype for config file: {}\nSupported filetypes: {}",
                path,
                SUPPORTED_CFG_EXTENSIONS.iter().join(", "),
            );
            Err(file_err(path, IoErrorType::StringOnly(error_string)))
        },
    }
}
