use crate::output::OutputFormat;
use crate::search::SearchMode;

/// Settings for one run of the processor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: SearchMode,
    pub format: OutputFormat,
    /// Time every query and log a percentile summary
    pub latency: bool,
}

impl Config {
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_latency(mut self, latency: bool) -> Self {
        self.latency = latency;
        self
    }
}
