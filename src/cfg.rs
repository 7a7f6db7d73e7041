use log::debug;
use serde::{Serialize, Deserialize};

use crate::args::{
    self,
    Format,
    RunOptions,
};
use crate::geo_2d::DegeneratePolicy;

/// Default digits after the decimal point, matching C's `%f`.
pub const DEFAULT_PRECISION: usize = 6;
/// Largest precision accepted for text output.
pub const MAX_PRECISION: usize = 16;

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// Run configuration.
/// Loaded from an options file if one is given, then overridden by CLI flags.
/// Points never come from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunCfg {
    /// Output format.
    #[serde(default)]
    pub format: Format,

    /// Digits after the decimal point in text output.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Negative radicand policy.
    #[serde(default, alias = "policy")]
    pub degenerate: DegeneratePolicy,
}
impl Default for RunCfg {
    fn default() -> Self {
        RunCfg{
            format: Format::default(),
            precision: DEFAULT_PRECISION,
            degenerate: DegeneratePolicy::default(),
        }
    }
}
impl RunCfg {
    /// Load a run config from a file (json, toml, or yaml).
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let cfg: RunCfg = crate::io::read_cfg_file(cfg_file)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build the run config from the CLI options.
    /// Flags win over values from the options file.
    pub fn from_options(options: &RunOptions) -> args::ProcResult<Self> {
        let mut cfg = match options.config_path.as_deref() {
            Some(cfg_file) => {
                debug!("Loading options file: {}", cfg_file);
                RunCfg::from_cfg_file(cfg_file)?
            },
            None => RunCfg::default(),
        };

        if let Some(format) = options.format {
            cfg.format = format;
        }
        if let Some(precision) = options.precision {
            cfg.precision = precision;
        }
        if let Some(degenerate) = options.degenerate {
            cfg.degenerate = degenerate;
        }

        cfg.validate()?;
        debug!("Run config: format = {}, precision = {}, degenerate = {}", cfg.format, cfg.precision, cfg.degenerate);
        Ok(cfg)
    }

    fn validate(&self) -> args::ProcResult<()> {
        if self.precision > MAX_PRECISION {
            return args::err_str(&format!("Precision must be at most {}, got {}", MAX_PRECISION, self.precision));
        }
        Ok(())
    }
}
