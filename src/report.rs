mod writers;

use std::io::Write;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{
    self,
    DegeneratePolicy,
    Point,
    Triangle,
};

pub use writers::{
    ReportWriter,
    WriterChoice,
    Text,
    Json,
    Yaml,
    Toml,
};

/// Report output error type.
#[derive(Debug)]
pub enum ReportError {
    /// Writing to stdout failed.
    IoError(std::io::Error),
    /// Serde JSON error.
    SerdeJsonError(serde_json::Error),
    /// Serde YAML error.
    SerdeYamlError(serde_yaml::Error),
    /// TOML serialization error.
    TomlSerError(toml::ser::Error),
}
impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            ReportError::SerdeJsonError(error) => write!(f, "- JSON Serialization Error:\n{}", error),
            ReportError::SerdeYamlError(error) => write!(f, "- YAML Serialization Error:\n{}", error),
            ReportError::TomlSerError(error) => write!(f, "- TOML Serialization Error:\n{}", error),
        }
    }
}
impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError(error)
    }
}
impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::SerdeJsonError(error)
    }
}
impl From<serde_yaml::Error> for ReportError {
    fn from(error: serde_yaml::Error) -> Self {
        ReportError::SerdeYamlError(error)
    }
}
impl From<toml::ser::Error> for ReportError {
    fn from(error: toml::ser::Error) -> Self {
        ReportError::TomlSerError(error)
    }
}

/// Result type for the `report` module.
pub type ProcResult<T> = std::result::Result<T, ReportError>;

/// Side lengths of the triangle, named by the points they join.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Sides {
    pub s12: f32,
    pub s23: f32,
    pub s13: f32,
}

/// Everything computed for one triangle.
/// Field order keeps plain values ahead of tables for TOML.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AreaReport {
    pub area: f32,
    pub sides: Sides,
    pub points: [Point; 3],
}
impl AreaReport {
    /// Compute the sides and area of a triangle.
    pub fn new(triangle: &Triangle, policy: DegeneratePolicy) -> geo_2d::ProcResult<Self> {
        let [s12, s23, s13] = triangle.sides();
        log::debug!("Side lengths: s12 = {}, s23 = {}, s13 = {}", s12, s23, s13);
        let area = geo_2d::checked_triangle_area(s12, s23, s13, policy)?;
        Ok(AreaReport{
            area,
            sides: Sides{s12, s23, s13},
            points: triangle.points,
        })
    }
}

/// The one-line human-readable result.
pub fn output_message(report: &AreaReport, precision: usize) -> String {
    let [p1, p2, p3] = &report.points;
    format!(
        "The area of the triangle formed by points {:.*}, {:.*}, and {:.*} is: {:.*}",
        precision, p1,
        precision, p2,
        precision, p3,
        precision, report.area,
    )
}

/// Render the report with the chosen writer and write it to stdout.
pub fn emit(writer: &WriterChoice, report: &AreaReport) -> ProcResult<()> {
    let rendered = writer.render(report)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", rendered)?;
    handle.flush()?;
    Ok(())
}
