use crate::error::{TargetFaceError, TfResult};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub scorer: ScorerParams,
    #[command(flatten)]
    pub timing: AnimationTiming,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerParams {
    #[arg(long, default_value_t = 6)]
    pub arrows_per_end: usize,

    #[arg(long, default_value_t = false)]
    pub triple_spot: bool,

    // Precise placement historically skipped the end-capacity guard.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub enforce_precise_limit: bool,
}

impl Default for ScorerParams {
    fn default() -> Self {
        Self {
            arrows_per_end: 6,
            triple_spot: false,
            enforce_precise_limit: true,
        }
    }
}

/// Delays driving the triple-spot face transitions, in milliseconds.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    #[arg(long, default_value_t = 650.0)]
    pub scroll_duration_ms: f64,
    #[arg(long, default_value_t = 40.0)]
    pub snap_restore_ms: f64,
    #[arg(long, default_value_t = 60.0)]
    pub queue_delay_ms: f64,
    #[arg(long, default_value_t = 180.0)]
    pub auto_advance_ms: f64,
    #[arg(long, default_value_t = 60.0)]
    pub reset_settle_ms: f64,
    #[arg(long, default_value_t = 10)]
    pub haptic_pulse_ms: u32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            scroll_duration_ms: 650.0,
            snap_restore_ms: 40.0,
            queue_delay_ms: 60.0,
            auto_advance_ms: 180.0,
            reset_settle_ms: 60.0,
            haptic_pulse_ms: 10,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TargetFaceError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Copies over only the values typed on the command line, leaving file values intact.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(scorer, arrows_per_end);
        update_if_present!(scorer, triple_spot);
        update_if_present!(scorer, enforce_precise_limit);

        update_if_present!(timing, scroll_duration_ms);
        update_if_present!(timing, snap_restore_ms);
        update_if_present!(timing, queue_delay_ms);
        update_if_present!(timing, auto_advance_ms);
        update_if_present!(timing, reset_settle_ms);
        update_if_present!(timing, haptic_pulse_ms);
    }

    pub fn validate(&self) -> TfResult<()> {
        if self.scorer.arrows_per_end == 0 {
            return Err(TargetFaceError::Validation(
                "arrows_per_end must be greater than zero".to_string(),
            ));
        }

        let delays = [
            ("scroll_duration_ms", self.timing.scroll_duration_ms),
            ("snap_restore_ms", self.timing.snap_restore_ms),
            ("queue_delay_ms", self.timing.queue_delay_ms),
            ("auto_advance_ms", self.timing.auto_advance_ms),
            ("reset_settle_ms", self.timing.reset_settle_ms),
        ];
        for (name, value) in delays {
            if !value.is_finite() || value < 0.0 {
                return Err(TargetFaceError::Validation(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
