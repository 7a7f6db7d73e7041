mod proc_errors;

use clap::{
    Args,
    Parser,
    ValueEnum,
};
use log::debug;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{
    DegeneratePolicy,
    Point,
    Triangle,
};

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Number of command-line coordinates: three points, two coordinates each.
pub const EXPECTED_ARG_COUNT: usize = 6;

/// Positional names of the coordinates, for error messages.
const COORD_NAMES: [&str; EXPECTED_ARG_COUNT] = ["x1", "y1", "x2", "y2", "x3", "y3"];

/// Compute the area of a triangle from three Cartesian points using Heron's formula.
#[derive(Debug, Parser)]
#[command(name = "heron", version)]
pub struct HeronCli {
    #[arg(value_name = "COORD", allow_negative_numbers = true)]
    /// Corner coordinates, in order: x1 y1 x2 y2 x3 y3.
    pub coords: Vec<String>,

    #[command(flatten)]
    pub options: RunOptions,
}

/// Output and numeric options, shared with the config file. Compiled with clap.
#[derive(Debug, Default, Args)]
pub struct RunOptions {
    #[arg(short, long, value_enum)]
    /// Output format [default: text].
    pub format: Option<Format>,

    #[arg(short, long)]
    /// Digits after the decimal point in text output [default: 6].
    pub precision: Option<usize>,

    #[arg(short, long, value_enum)]
    /// What to do with a negative Heron radicand [default: clamp].
    pub degenerate: Option<DegeneratePolicy>,

    #[arg(short, long = "config")]
    /// Path to an options file (.json, .toml, .yaml/.yml). Flags override it.
    pub config_path: Option<String>,

    #[arg(short, long)]
    /// Log debug details to stderr.
    pub verbose: bool,
}

/// Output format of the area report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, strum::Display, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// One human-readable line.
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

/// Parse the command line arguments for the heron binary.
/// Uses the `clap` crate; usage errors, help and version exit from here.
pub fn parse_cli_args() -> HeronCli {
    HeronCli::parse()
}

/// Parse a single coordinate token.
fn parse_coord(name: &'static str, token: &str) -> ProcResult<f32> {
    let value: f32 = token.trim().parse().map_err(|error: std::num::ParseFloatError| ArgError::Parse{
        name,
        token: token.to_string(),
        reason: error.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ArgError::Parse{
            name,
            token: token.to_string(),
            reason: "not a finite number".to_string(),
        });
    }
    Ok(value)
}

/// Turn the six coordinate tokens into a triangle.
/// The count is checked before anything is parsed.
pub fn parse_triangle(coords: &[String]) -> ProcResult<Triangle> {
    if coords.len() != EXPECTED_ARG_COUNT {
        return Err(ArgError::Arity{expected: EXPECTED_ARG_COUNT, received: coords.len()});
    }

    let mut values = [0.0f32; EXPECTED_ARG_COUNT];
    for (value, (name, token)) in values.iter_mut().zip(COORD_NAMES.iter().zip(coords.iter())) {
        *value = parse_coord(*name, token)?;
    }
    let [x1, y1, x2, y2, x3, y3] = values;

    let triangle = Triangle::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3));
    debug!("Parsed points: {}, {}, {}", triangle.points[0], triangle.points[1], triangle.points[2]);
    Ok(triangle)
}
