//! Indicator engine: converts a normalized price series into discrete,
//! human-readable technical classifications.
//!
//! Every sub-computation is independent and total: missing data resolves to
//! an explicit "N/A" label, never an error, so the report pipeline around
//! this crate keeps running.

use crate::config::{AnalysisConfig, StrengthThresholds, TrendThresholds, VolatilityThresholds};
use crate::model::{
    DataError, PricePoint, QuoteContext, TechnicalSnapshot, NA_ANALYSIS_ERROR, NA_DATA_ERROR,
    NA_INSUFFICIENT,
};
use crate::normalizer::normalize;
use crate::stats;
use tracing::warn;

pub struct IndicatorEngine;

impl IndicatorEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classifies trend, strength, volatility, moving-average relation,
    /// support/resistance position and volume ratio. Always returns a full
    /// snapshot; degraded fields carry their documented fallback label.
    pub fn classify(
        &self,
        series: &[PricePoint],
        quote: &QuoteContext,
        cfg: &AnalysisConfig,
    ) -> TechnicalSnapshot {
        let normalized = match normalize(series) {
            Ok(n) => n,
            Err(DataError::Insufficient { .. }) => {
                return TechnicalSnapshot::unavailable(NA_INSUFFICIENT);
            }
            Err(e) => {
                warn!("technical classification degraded: {e}");
                return TechnicalSnapshot::unavailable(NA_ANALYSIS_ERROR);
            }
        };

        if !quote.current_price.is_finite() {
            warn!("technical classification degraded: non-finite current price");
            return TechnicalSnapshot::unavailable(NA_ANALYSIS_ERROR);
        }

        let closes = &normalized.closes;
        TechnicalSnapshot {
            short_trend: trend_label(closes, cfg.trend.short_window, &cfg.trend),
            medium_trend: trend_label(closes, cfg.trend.medium_window, &cfg.trend),
            long_trend: trend_label(closes, closes.len(), &cfg.trend),
            trend_strength: strength_label(closes, &cfg.strength),
            volatility_level: volatility_label(closes, &cfg.volatility),
            price_vs_ma: ma_relation_label(closes, quote.current_price),
            support_resistance: support_resistance_label(closes, quote.current_price),
            volume_ratio: volume_ratio_label(&normalized.volumes),
        }
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent change between the oldest and newest close of the most-recent
/// `window` observations, bucketed into five labels.
fn trend_label(closes: &[f64], window: usize, t: &TrendThresholds) -> String {
    let w = window.min(closes.len());
    if w < 2 {
        return NA_INSUFFICIENT.to_string();
    }
    let newest = closes[0];
    let oldest = closes[w - 1];
    let pct = match stats::percent_change(oldest, newest) {
        Some(pct) if pct.is_finite() => pct,
        Some(_) => return NA_ANALYSIS_ERROR.to_string(),
        None => return NA_DATA_ERROR.to_string(),
    };

    let bucket = if pct > t.strong_up {
        "strong upward"
    } else if pct > t.up {
        "upward"
    } else if pct > t.flat {
        "flat"
    } else if pct > t.down {
        "downward"
    } else {
        "strong downward"
    };
    format!("{bucket} ({pct:+.1}%)")
}

/// Ratio of the mean absolute daily move to price dispersion over the
/// most-recent closes. Zero dispersion resolves to "weak" rather than a
/// division by zero.
fn strength_label(closes: &[f64], s: &StrengthThresholds) -> String {
    let w = s.window.min(closes.len());
    if w < s.min_points {
        return NA_INSUFFICIENT.to_string();
    }
    let recent = &closes[..w];
    let avg_move = stats::mean_abs_change(recent);
    let dispersion = stats::std_dev(recent);
    if dispersion <= f64::EPSILON {
        return "weak (0.00)".to_string();
    }
    let ratio = avg_move / dispersion;
    if !ratio.is_finite() {
        return NA_ANALYSIS_ERROR.to_string();
    }

    let bucket = if ratio > s.very_strong {
        "very strong"
    } else if ratio > s.strong {
        "strong"
    } else if ratio > s.moderate {
        "moderate"
    } else {
        "weak"
    };
    format!("{bucket} ({ratio:.2})")
}

/// Coefficient of variation over the most-recent closes, as a percentage.
fn volatility_label(closes: &[f64], v: &VolatilityThresholds) -> String {
    if closes.len() < v.window {
        return NA_INSUFFICIENT.to_string();
    }
    let cv = match stats::coefficient_of_variation(&closes[..v.window]) {
        Some(cv) if cv.is_finite() => cv,
        Some(_) => return NA_ANALYSIS_ERROR.to_string(),
        None => return NA_DATA_ERROR.to_string(),
    };

    let bucket = if cv > v.high {
        "high"
    } else if cv > v.moderate {
        "moderate"
    } else {
        "low"
    };
    format!("{bucket} ({cv:.1}%)")
}

/// Relative ordering of the current price against the 5- and 20-day moving
/// averages.
fn ma_relation_label(closes: &[f64], current: f64) -> String {
    if closes.len() < 20 {
        return NA_INSUFFICIENT.to_string();
    }
    let ma5 = stats::mean(&closes[..5]);
    let ma20 = stats::mean(&closes[..20]);

    if current > ma5 && ma5 > ma20 {
        "bullish alignment".to_string()
    } else if current > ma5 && current > ma20 {
        "uptrend".to_string()
    } else if current < ma5 && ma5 < ma20 {
        "bearish alignment".to_string()
    } else if current < ma5 && current < ma20 {
        "downtrend".to_string()
    } else {
        "mixed/crossing".to_string()
    }
}

/// Position of the current price within the 20-day low/high range.
fn support_resistance_label(closes: &[f64], current: f64) -> String {
    if closes.len() < 20 {
        return NA_INSUFFICIENT.to_string();
    }
    let recent = &closes[..20];
    let low = recent.iter().copied().fold(f64::INFINITY, f64::min);
    let high = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if high - low <= f64::EPSILON {
        return NA_DATA_ERROR.to_string();
    }
    let position = (current - low) / (high - low) * 100.0;
    if !position.is_finite() {
        return NA_ANALYSIS_ERROR.to_string();
    }

    if position > 80.0 {
        format!("near resistance ({position:.1}%)")
    } else if position < 20.0 {
        format!("near support ({position:.1}%)")
    } else {
        format!("mid-range ({position:.1}%)")
    }
}

/// Most recent volume against the mean of the prior nine sessions, excluding
/// zero-volume sessions from the baseline.
fn volume_ratio_label(volumes: &[f64]) -> String {
    if volumes.len() < 10 {
        return NA_INSUFFICIENT.to_string();
    }
    let baseline: Vec<f64> = volumes[1..10].iter().copied().filter(|&v| v > 0.0).collect();
    if baseline.is_empty() {
        return NA_DATA_ERROR.to_string();
    }
    let ratio = volumes[0] / stats::mean(&baseline);
    if !ratio.is_finite() {
        return NA_ANALYSIS_ERROR.to_string();
    }

    let bucket = if ratio > 2.0 {
        "very high"
    } else if ratio > 1.5 {
        "high"
    } else if ratio > 0.7 {
        "normal"
    } else {
        "low"
    };
    format!("{bucket} ({ratio:.1}x)")
}
