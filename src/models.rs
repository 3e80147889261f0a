// src/models.rs

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

// --- RUN CONFIGURATION ---

/// The build-affecting options selected on the command line.
/// Immutable once parsed; threaded through the builder and the output namer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Comma- or space-delimited feature names, forwarded verbatim to cargo.
    pub features: String,
    /// Disable the package's default feature set.
    pub no_default_features: bool,
}

impl RunConfig {
    /// Returns `true` when extra features were requested.
    pub fn has_features(&self) -> bool {
        !self.features.trim().is_empty()
    }
}

// --- TIMING DATA ---

/// Why a pair of durations is not a valid timing.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    /// The total duration is negative or not finite.
    #[error("duration must be a finite, non-negative number of seconds (got {0})")]
    InvalidDuration(f64),
    /// The metadata duration is negative or not finite.
    #[error("metadata duration must be a finite, non-negative number of seconds (got {0})")]
    InvalidMetadataDuration(f64),
    /// Metadata was reported after the target finished.
    #[error("metadata duration ({metadata}s) exceeds total duration ({duration}s)")]
    MetadataExceedsDuration {
        /// Total seconds.
        duration: f64,
        /// Metadata seconds.
        metadata: f64,
    },
}

/// The build timing of a single target.
///
/// Always satisfies `0 <= metadata_duration <= duration`; the constructor is the
/// only way to obtain one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    duration: f64,
    metadata_duration: f64,
}

impl TimingRecord {
    /// Builds a record, rejecting durations that break the invariant.
    pub fn new(duration: f64, metadata_duration: f64) -> Result<Self, RecordError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(RecordError::InvalidDuration(duration));
        }
        if !metadata_duration.is_finite() || metadata_duration < 0.0 {
            return Err(RecordError::InvalidMetadataDuration(metadata_duration));
        }
        if metadata_duration > duration {
            return Err(RecordError::MetadataExceedsDuration {
                duration,
                metadata: metadata_duration,
            });
        }
        Ok(Self {
            duration,
            metadata_duration,
        })
    }

    /// Total seconds spent producing the target.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds until the target's metadata was available to dependents.
    pub fn metadata_duration(&self) -> f64 {
        self.metadata_duration
    }
}

/// Target name -> timing, for one invocation.
pub type Timings = HashMap<String, TimingRecord>;

// --- BUILD OUTPUT RECORDS ---
// Mirrors the subset of cargo's `timing-info` JSON lines we rely on.

#[derive(Deserialize, Debug, Clone)]
pub struct TimingInfoTarget {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TimingInfoLine {
    pub target: TimingInfoTarget,
    pub duration: f64,
    pub rmeta_time: f64,
}

// --- PROJECT SETTINGS (FOR TOML) ---
// These are what the user writes in `timings.toml`. Every key is optional.

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct TomlSettings {
    pub toolchain: Option<String>,
    pub base_name: Option<String>,
    pub assets_dir: Option<String>,
    pub title: Option<String>,
    pub order: Option<Vec<Vec<String>>>,
    #[serde(default)]
    pub colors: TomlColors,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct TomlColors {
    pub total: Option<String>,
    pub metadata: Option<String>,
}

// --- RESOLVED SETTINGS ---

/// A fully specified RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors and captions used when rendering the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub title: String,
    pub total_color: Rgb,
    pub metadata_color: Rgb,
}

/// The hand-specified dependency order of the chart.
///
/// Each tier is a group of targets drawn from the same starting offset; the
/// offset then advances by the longest duration in the tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationOrder {
    pub tiers: Vec<Vec<String>>,
}

/// Project settings with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub toolchain: String,
    pub base_name: String,
    pub assets_dir: String,
    pub order: PresentationOrder,
    pub style: PlotStyle,
}
