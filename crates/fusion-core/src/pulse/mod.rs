//! Telemetry pulse feed.
//!
//! Pulses are fabricated "insights": one is prepended per user submission and
//! a periodic tick recalibrates the newest one.

mod feed;
mod model;

pub use feed::{
    FEED_CAPACITY, PulseFeed, TITLE_PREFIX_CHARS, delta_for, normalize_delta, pulse_title,
    weighted_trend,
};
pub use model::{InsightPulse, Trend};
