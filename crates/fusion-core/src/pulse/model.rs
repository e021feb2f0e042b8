//! Insight pulse record.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Direction of a synthetic signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Steady,
}

/// A fabricated telemetry "insight".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightPulse {
    pub id: String,
    pub title: String,
    pub signal: String,
    pub trend: Trend,
    /// Signed percentage text such as "+4.2%", "-1.3%" or "±0.6%"
    pub delta: String,
    pub source: String,
}

impl InsightPulse {
    pub fn new(
        title: impl Into<String>,
        signal: impl Into<String>,
        trend: Trend,
        delta: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            signal: signal.into(),
            trend,
            delta: delta.into(),
            source: source.into(),
        }
    }
}
