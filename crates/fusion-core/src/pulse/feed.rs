use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::model::{InsightPulse, Trend};

/// Maximum number of pulses kept; the oldest is evicted first.
pub const FEED_CAPACITY: usize = 6;

/// Number of prompt characters quoted in a pulse title.
pub const TITLE_PREFIX_CHARS: usize = 24;

const SIGNALS: &[&str] = &[
    "Consensus forming across all three agents",
    "Research depth trending above baseline",
    "Risk surface narrowing after cross-checks",
    "Execution confidence climbing with each pass",
    "Novel angle detected in the latest exchange",
];

const SOURCES: &[&str] = &["Claude", "Gemini", "ChatGPT", "Fusion Core"];

/// Builds the title for a pulse triggered by a prompt.
///
/// Quotes at most [`TITLE_PREFIX_CHARS`] characters, followed by an ellipsis
/// when the prompt was longer.
pub fn pulse_title(prompt: &str) -> String {
    let mut chars = prompt.chars();
    let prefix: String = chars.by_ref().take(TITLE_PREFIX_CHARS).collect();
    if chars.next().is_some() {
        format!("Signal unlocked by \"{prefix}…\"")
    } else {
        format!("Signal unlocked by \"{prefix}\"")
    }
}

/// Picks a trend: up 55%, steady 30%, down 15%.
pub fn weighted_trend<R: Rng + ?Sized>(rng: &mut R) -> Trend {
    match rng.gen_range(0..100) {
        0..55 => Trend::Up,
        55..85 => Trend::Steady,
        _ => Trend::Down,
    }
}

/// Renders a random delta whose sign matches the trend.
pub fn delta_for<R: Rng + ?Sized>(trend: Trend, rng: &mut R) -> String {
    let whole = rng.gen_range(1..=9);
    let tenth = rng.gen_range(0..=9);
    match trend {
        Trend::Up => format!("+{whole}.{tenth}%"),
        Trend::Down => format!("-{whole}.{tenth}%"),
        Trend::Steady => format!("±0.{tenth}%"),
    }
}

/// Ensures the delta carries a `+` marker.
pub fn normalize_delta(delta: &str) -> String {
    if delta.contains('+') {
        return delta.to_string();
    }
    let magnitude = delta
        .strip_prefix('-')
        .or_else(|| delta.strip_prefix('±'))
        .unwrap_or(delta);
    format!("+{magnitude}")
}

/// Bounded newest-first feed of insight pulses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseFeed {
    pulses: VecDeque<InsightPulse>,
}

impl PulseFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// A feed holding the three canned startup pulses.
    pub fn seeded() -> Self {
        let mut feed = Self::new();
        for pulse in [
            InsightPulse::new(
                "Agent mesh calibrated",
                "All three agents responding within baseline latency",
                Trend::Steady,
                "±0.4%",
                "Fusion Core",
            ),
            InsightPulse::new(
                "Research coverage expanded",
                "Gemini indexed fresh market signals",
                Trend::Up,
                "+3.1%",
                "Gemini",
            ),
            InsightPulse::new(
                "Reasoning depth holding",
                "Claude flagged two assumptions for review",
                Trend::Up,
                "+1.8%",
                "Claude",
            ),
        ] {
            feed.push_front(pulse);
        }
        feed
    }

    /// Prepends a pulse and evicts beyond [`FEED_CAPACITY`].
    pub fn push_front(&mut self, pulse: InsightPulse) {
        self.pulses.push_front(pulse);
        self.pulses.truncate(FEED_CAPACITY);
    }

    /// Creates and prepends the pulse for a new prompt.
    pub fn record_prompt<R: Rng + ?Sized>(&mut self, prompt: &str, rng: &mut R) -> &InsightPulse {
        let trend = weighted_trend(rng);
        let delta = delta_for(trend, rng);
        let signal = SIGNALS.choose(rng).copied().unwrap_or_default();
        let source = SOURCES.choose(rng).copied().unwrap_or_default();

        self.push_front(InsightPulse::new(
            pulse_title(prompt),
            signal,
            trend,
            delta,
            source,
        ));
        &self.pulses[0]
    }

    /// Recalibrates the head pulse in place.
    ///
    /// The delta gains a `+` marker, a `down` trend becomes `up` and the
    /// signal is stamped with the time. Returns `None` on an empty feed.
    pub fn recalibrate_head(&mut self, at: DateTime<Utc>) -> Option<&InsightPulse> {
        let head = self.pulses.front_mut()?;
        head.delta = normalize_delta(&head.delta);
        if head.trend == Trend::Down {
            head.trend = Trend::Up;
        }
        head.signal
            .push_str(&format!(" · recalibrated {}", at.format("%H:%M:%S")));
        Some(&*head)
    }

    pub fn head(&self) -> Option<&InsightPulse> {
        self.pulses.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InsightPulse> {
        self.pulses.iter()
    }

    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pulse_title_truncates_on_chars() {
        assert_eq!(
            pulse_title("Launch Q3 roadmap"),
            "Signal unlocked by \"Launch Q3 roadmap\""
        );
        let long = "Rebuild the onboarding funnel for enterprise";
        assert_eq!(
            pulse_title(long),
            "Signal unlocked by \"Rebuild the onboarding f…\""
        );
        // exactly 24 chars is not truncated
        let exact = "a".repeat(TITLE_PREFIX_CHARS);
        assert_eq!(pulse_title(&exact), format!("Signal unlocked by \"{exact}\""));
        // multi-byte characters count as one
        let wide = "é".repeat(30);
        assert!(pulse_title(&wide).contains(&format!("{}…", "é".repeat(24))));
    }

    #[test]
    fn test_delta_sign_matches_trend() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(delta_for(Trend::Up, &mut rng).starts_with('+'));
        assert!(delta_for(Trend::Down, &mut rng).starts_with('-'));
        assert!(delta_for(Trend::Steady, &mut rng).starts_with("±0."));
    }

    #[test]
    fn test_weighted_trend_hits_every_variant() {
        let mut rng = StdRng::seed_from_u64(99);
        let trends: Vec<Trend> = (0..500).map(|_| weighted_trend(&mut rng)).collect();
        let ups = trends.iter().filter(|t| **t == Trend::Up).count();
        let downs = trends.iter().filter(|t| **t == Trend::Down).count();
        assert!(trends.contains(&Trend::Steady));
        assert!(downs > 0);
        assert!(ups > downs);
    }

    #[test]
    fn test_normalize_delta() {
        assert_eq!(normalize_delta("+2.0%"), "+2.0%");
        assert_eq!(normalize_delta("-1.5%"), "+1.5%");
        assert_eq!(normalize_delta("±0.3%"), "+0.3%");
        assert_eq!(normalize_delta("0.9%"), "+0.9%");
    }

    #[test]
    fn test_feed_is_capped() {
        let mut feed = PulseFeed::seeded();
        let mut rng = StdRng::seed_from_u64(5);
        for i in 0..10 {
            feed.record_prompt(&format!("prompt {i}"), &mut rng);
            assert!(feed.len() <= FEED_CAPACITY);
        }
        assert_eq!(feed.len(), FEED_CAPACITY);
        assert_eq!(feed.head().unwrap().title, "Signal unlocked by \"prompt 9\"");
    }

    #[test]
    fn test_recalibrate_head_only() {
        let mut feed = PulseFeed::new();
        feed.push_front(InsightPulse::new("older", "s", Trend::Down, "-2.0%", "Claude"));
        feed.push_front(InsightPulse::new("newer", "s", Trend::Down, "-1.0%", "Gemini"));
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 15).unwrap();

        let head = feed.recalibrate_head(at).unwrap();
        assert_eq!(head.trend, Trend::Up);
        assert_eq!(head.delta, "+1.0%");
        assert_eq!(head.signal, "s · recalibrated 09:30:15");

        let older = feed.iter().nth(1).unwrap();
        assert_eq!(older.trend, Trend::Down);
        assert_eq!(older.delta, "-2.0%");
    }

    #[test]
    fn test_recalibrate_keeps_steady() {
        let mut feed = PulseFeed::new();
        feed.push_front(InsightPulse::new("t", "s", Trend::Steady, "±0.2%", "Claude"));
        let head = feed.recalibrate_head(Utc::now()).unwrap();
        assert_eq!(head.trend, Trend::Steady);
        assert_eq!(head.delta, "+0.2%");
    }

    #[test]
    fn test_recalibrate_empty_feed() {
        let mut feed = PulseFeed::new();
        assert!(feed.recalibrate_head(Utc::now()).is_none());
        assert!(feed.is_empty());
    }
}
