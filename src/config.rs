use serde::Deserialize;

use crate::events::EventFilters;

const DEFAULT_CONFIG_PATH: &str = "callstats.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    /// Initial filter state; hosts pass their own per call.
    #[serde(default = "EventFilters::all_enabled")]
    pub filters: EventFilters,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stats: StatsConfig::default(),
            timeline: TimelineConfig::default(),
            filters: EventFilters::all_enabled(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Samples further apart than this are separated by a gap marker.
    #[serde(default = "default_gap_threshold_ms")]
    pub gap_threshold_ms: i64,
    /// Rates above this (bits/s) are dropped as anomalies.
    #[serde(default = "default_max_rate_bps")]
    pub max_rate_bps: f64,
    #[serde(default = "default_min_interval_secs")]
    pub min_interval_secs: f64,
    /// Bucket for snapshots without a connection id.
    #[serde(default = "default_connection_id")]
    pub default_connection_id: String,
    /// Report types describing candidates/certificates rather than metrics.
    #[serde(default = "default_descriptor_types")]
    pub descriptor_types: Vec<String>,
    #[serde(default = "default_ignored_fields")]
    pub ignored_fields: Vec<String>,
    /// Cumulative byte counters that get a derived `<field>_in_bits/s` series.
    #[serde(default = "default_rate_fields")]
    pub rate_fields: Vec<String>,
    /// Quantized fields rendered as hold-then-jump steps.
    #[serde(default = "default_step_fields")]
    pub step_fields: Vec<String>,
    #[serde(default = "default_visible_series")]
    pub visible_by_default: Vec<String>,
}

fn default_gap_threshold_ms() -> i64 {
    20_000
}

fn default_max_rate_bps() -> f64 {
    1_000_000_000.0
}

fn default_min_interval_secs() -> f64 {
    0.001
}

fn default_connection_id() -> String {
    "default".into()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_descriptor_types() -> Vec<String> {
    strings(&[
        "local-candidate",
        "remote-candidate",
        "localcandidate",
        "remotecandidate",
        "certificate",
    ])
}

fn default_ignored_fields() -> Vec<String> {
    strings(&["timestamp"])
}

fn default_rate_fields() -> Vec<String> {
    strings(&[
        "bytesSent",
        "bytesReceived",
        "headerBytesSent",
        "headerBytesReceived",
        "retransmittedBytesSent",
        "retransmittedBytesReceived",
    ])
}

fn default_step_fields() -> Vec<String> {
    strings(&["frameWidth", "frameHeight"])
}

fn default_visible_series() -> Vec<String> {
    strings(&[
        "bytesReceived_in_bits/s",
        "bytesSent_in_bits/s",
        "targetBitrate",
        "packetsLost",
        "fractionLost",
        "jitter",
        "availableOutgoingBitrate",
        "availableIncomingBitrate",
        "currentRoundTripTime",
        "roundTripTime",
    ])
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            gap_threshold_ms: default_gap_threshold_ms(),
            max_rate_bps: default_max_rate_bps(),
            min_interval_secs: default_min_interval_secs(),
            default_connection_id: default_connection_id(),
            descriptor_types: default_descriptor_types(),
            ignored_fields: default_ignored_fields(),
            rate_fields: default_rate_fields(),
            step_fields: default_step_fields(),
            visible_by_default: default_visible_series(),
        }
    }
}

impl StatsConfig {
    pub fn is_descriptor_type(&self, report_type: &str) -> bool {
        self.descriptor_types.iter().any(|t| t == report_type)
    }

    pub fn is_rate_field(&self, field: &str) -> bool {
        self.rate_fields.iter().any(|f| f == field)
    }

    pub fn is_step_field(&self, field: &str) -> bool {
        self.step_fields.iter().any(|f| f == field)
    }

    pub fn is_visible_by_default(&self, field: &str) -> bool {
        self.visible_by_default.iter().any(|f| f == field)
    }
}

/// Fixed timeline geometry, in pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineConfig {
    /// Drawable width right of the label margin.
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_left_margin")]
    pub left_margin: f64,
    #[serde(default = "default_track_height")]
    pub track_height: f64,
    #[serde(default = "default_track_spacing")]
    pub track_spacing: f64,
    #[serde(default = "default_outer_margin")]
    pub top_margin: f64,
    #[serde(default = "default_outer_margin")]
    pub bottom_margin: f64,
    /// Offset of session bars and intervals from the track top.
    #[serde(default = "default_bar_offset")]
    pub bar_offset: f64,
    #[serde(default = "default_bar_height")]
    pub bar_height: f64,
    /// Join/leave markers sit near the top of the band.
    #[serde(default = "default_join_marker_offset")]
    pub join_marker_offset: f64,
    #[serde(default = "default_event_marker_offset")]
    pub event_marker_offset: f64,
}

fn default_width() -> f64 {
    1000.0
}

fn default_left_margin() -> f64 {
    150.0
}

fn default_track_height() -> f64 {
    30.0
}

fn default_track_spacing() -> f64 {
    10.0
}

fn default_outer_margin() -> f64 {
    20.0
}

fn default_bar_offset() -> f64 {
    10.0
}

fn default_bar_height() -> f64 {
    10.0
}

fn default_join_marker_offset() -> f64 {
    4.0
}

fn default_event_marker_offset() -> f64 {
    26.0
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            left_margin: default_left_margin(),
            track_height: default_track_height(),
            track_spacing: default_track_spacing(),
            top_margin: default_outer_margin(),
            bottom_margin: default_outer_margin(),
            bar_offset: default_bar_offset(),
            bar_height: default_bar_height(),
            join_marker_offset: default_join_marker_offset(),
            event_marker_offset: default_event_marker_offset(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Like `load`, but falls back to defaults when no CONFIG_FILE is set and
    /// the default config file does not exist.
    pub fn load_or_default() -> anyhow::Result<Self> {
        if std::env::var_os("CONFIG_FILE").is_none()
            && !std::path::Path::new(DEFAULT_CONFIG_PATH).exists()
        {
            tracing::debug!("no config file; using defaults");
            return Ok(Self::default());
        }
        Self::load()
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.stats.gap_threshold_ms > 0,
            "stats.gap_threshold_ms must be > 0, got {}",
            self.stats.gap_threshold_ms
        );
        anyhow::ensure!(
            self.stats.max_rate_bps > 0.0,
            "stats.max_rate_bps must be > 0, got {}",
            self.stats.max_rate_bps
        );
        anyhow::ensure!(
            self.stats.min_interval_secs >= 0.0,
            "stats.min_interval_secs must be >= 0, got {}",
            self.stats.min_interval_secs
        );
        anyhow::ensure!(
            !self.stats.default_connection_id.is_empty(),
            "stats.default_connection_id must be non-empty"
        );
        anyhow::ensure!(
            self.timeline.width > 0.0,
            "timeline.width must be > 0, got {}",
            self.timeline.width
        );
        anyhow::ensure!(
            self.timeline.left_margin >= 0.0,
            "timeline.left_margin must be >= 0, got {}",
            self.timeline.left_margin
        );
        anyhow::ensure!(
            self.timeline.track_height > 0.0,
            "timeline.track_height must be > 0, got {}",
            self.timeline.track_height
        );
        anyhow::ensure!(
            self.timeline.track_spacing >= 0.0,
            "timeline.track_spacing must be >= 0, got {}",
            self.timeline.track_spacing
        );
        Ok(())
    }
}
