//! Sentiment analyzer: momentum, 52-week position, volume confirmation and
//! volatility-trend classifications.
//!
//! Momentum and price position depend only on quote scalars and stay
//! available even when the series is too short for the history-based fields.

use crate::config::{AnalysisConfig, MomentumThresholds, PositionBands, VolatilityTrendBands};
use crate::model::{
    DataError, PricePoint, QuoteContext, SentimentSnapshot, NA_ANALYSIS_ERROR, NA_DATA_ERROR,
    NA_INSUFFICIENT,
};
use crate::normalizer::{normalize, NormalizedSeries};
use crate::stats;
use tracing::warn;

pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Always returns a full snapshot; degraded fields carry their documented
    /// fallback label.
    pub fn classify(
        &self,
        quote: &QuoteContext,
        series: &[PricePoint],
        cfg: &AnalysisConfig,
    ) -> SentimentSnapshot {
        let normalized = match normalize(series) {
            Ok(n) => Ok(n),
            Err(e @ DataError::Insufficient { .. }) => {
                warn!("sentiment history unavailable: {e}");
                Err(NA_INSUFFICIENT)
            }
            Err(e) => {
                warn!("sentiment history degraded: {e}");
                Err(NA_ANALYSIS_ERROR)
            }
        };

        SentimentSnapshot {
            momentum: momentum_label(quote.change_percent, &cfg.momentum),
            price_position: position_label(quote, &cfg.position),
            volume_pattern: normalized
                .as_ref()
                .map(|n| volume_pattern_label(n))
                .unwrap_or_else(|&label| label.to_string()),
            volatility_trend: normalized
                .as_ref()
                .map(|n| volatility_trend_label(&n.closes, &cfg.volatility_trend))
                .unwrap_or_else(|&label| label.to_string()),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn momentum_label(change_percent: f64, m: &MomentumThresholds) -> String {
    if !change_percent.is_finite() {
        return NA_ANALYSIS_ERROR.to_string();
    }
    let bucket = if change_percent > m.very_strong_up {
        "very strong upward"
    } else if change_percent > m.up {
        "upward"
    } else if change_percent > m.neutral {
        "neutral"
    } else if change_percent > m.down {
        "downward"
    } else {
        "very strong downward"
    };
    format!("{bucket} ({change_percent:+.1}%)")
}

/// Where the current price sits within its trailing 52-week range. An equal
/// high and low is a degenerate range, reported as a data error instead of a
/// division failure.
fn position_label(quote: &QuoteContext, p: &PositionBands) -> String {
    let range = quote.week52_high - quote.week52_low;
    if !range.is_finite() || !quote.current_price.is_finite() {
        return NA_ANALYSIS_ERROR.to_string();
    }
    if range <= f64::EPSILON {
        return NA_DATA_ERROR.to_string();
    }
    let position = (quote.current_price - quote.week52_low) / range * 100.0;

    if position > p.near_high {
        format!("near 52-week high ({position:.1}%)")
    } else if position > p.upper {
        format!("upper range ({position:.1}%)")
    } else if position > p.middle {
        format!("middle range ({position:.1}%)")
    } else if position > p.lower {
        format!("lower range ({position:.1}%)")
    } else {
        format!("near 52-week low ({position:.1}%)")
    }
}

/// Checks whether volume confirms recent up-days over the last five sessions.
fn volume_pattern_label(series: &NormalizedSeries) -> String {
    if series.len() < 5 {
        return NA_INSUFFICIENT.to_string();
    }
    // chronological orientation, oldest of the five first
    let closes: Vec<f64> = series.closes[..5].iter().rev().copied().collect();
    let volumes: Vec<f64> = series.volumes[..5].iter().rev().copied().collect();

    let mut up_day_volume_deltas = Vec::new();
    for i in 1..5 {
        if closes[i] > closes[i - 1] {
            up_day_volume_deltas.push(volumes[i] - volumes[i - 1]);
        }
    }

    if up_day_volume_deltas.is_empty() {
        "no recent up-day".to_string()
    } else if stats::mean(&up_day_volume_deltas) > 0.0 {
        "healthy rally (volume confirms)".to_string()
    } else {
        "weak rally (volume diverges)".to_string()
    }
}

/// Percent change of dispersion between the most-recent ten closes and the
/// ten before them.
fn volatility_trend_label(closes: &[f64], bands: &VolatilityTrendBands) -> String {
    if closes.len() < 20 {
        return NA_INSUFFICIENT.to_string();
    }
    let recent = stats::std_dev(&closes[..10]);
    let prior = stats::std_dev(&closes[10..20]);
    if prior <= f64::EPSILON {
        return NA_DATA_ERROR.to_string();
    }
    let change = (recent - prior) / prior * 100.0;
    if !change.is_finite() {
        return NA_ANALYSIS_ERROR.to_string();
    }

    let bucket = if change >= bands.surge {
        "surging"
    } else if change >= bands.rising {
        "rising"
    } else if change >= bands.stable {
        "stable"
    } else if change >= bands.falling {
        "falling"
    } else {
        "collapsing"
    };
    format!("{bucket} ({change:+.1}%)")
}
