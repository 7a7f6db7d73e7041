/*!
 * Report writers.
 *
 * New output formats need:
 * - A struct implementing `ReportWriter`
 * - An enum variant containing that struct in `WriterChoice`
 * - A `Format` variant in `args` and its arm in `WriterChoice::from_cfg`
 */

use enum_dispatch::enum_dispatch;

use crate::args::Format;
use crate::cfg::RunCfg;
use crate::report::{
    self,
    AreaReport,
};

/// Report writer trait.
#[enum_dispatch]
pub trait ReportWriter {
    /// Get the name of the writer.
    fn get_writer_name(&self) -> String;

    /// Render the report, without a trailing newline.
    fn render(&self, report: &AreaReport) -> report::ProcResult<String>;
}

/// Report writers enum.
#[derive(Debug)]
#[enum_dispatch(ReportWriter)]
pub enum WriterChoice {
    Text(Text),
    Json(Json),
    Yaml(Yaml),
    Toml(Toml),
}
impl WriterChoice {
    /// Pick the writer for a run config.
    pub fn from_cfg(cfg: &RunCfg) -> Self {
        match cfg.format {
            Format::Text => Text{precision: cfg.precision}.into(),
            Format::Json => Json.into(),
            Format::Yaml => Yaml.into(),
            Format::Toml => Toml.into(),
        }
    }
}

/// One human-readable line.
#[derive(Debug)]
pub struct Text {
    pub precision: usize,
}
impl ReportWriter for Text {
    fn get_writer_name(&self) -> String {
        "text".to_string()
    }

    fn render(&self, report: &AreaReport) -> report::ProcResult<String> {
        Ok(report::output_message(report, self.precision))
    }
}

/// Pretty-printed JSON.
#[derive(Debug)]
pub struct Json;
impl ReportWriter for Json {
    fn get_writer_name(&self) -> String {
        "json".to_string()
    }

    fn render(&self, report: &AreaReport) -> report::ProcResult<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[derive(Debug)]
pub struct Yaml;
impl ReportWriter for Yaml {
    fn get_writer_name(&self) -> String {
        "yaml".to_string()
    }

    fn render(&self, report: &AreaReport) -> report::ProcResult<String> {
        Ok(serde_yaml::to_string(report)?.trim_end().to_string())
    }
}

#[derive(Debug)]
pub struct Toml;
impl ReportWriter for Toml {
    fn get_writer_name(&self) -> String {
        "toml".to_string()
    }

    fn render(&self, report: &AreaReport) -> report::ProcResult<String> {
        Ok(toml::to_string_pretty(report)?.trim_end().to_string())
    }
}
