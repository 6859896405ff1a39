//! Policy constants for every classification and the projection simulation.
//!
//! All thresholds are plain data so they can be overridden from a JSON file
//! or constructed in tests; defaults reproduce the shipped behavior.

use crate::model::ConfigError;
use crate::projection::sector::Sector;
use serde::Deserialize;
use std::fs;

/// Percent-change buckets for trend classification. Comparisons are strict
/// (`>`), so a change of exactly `strong_up` falls into the next bucket down.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrendThresholds {
    pub strong_up: f64,
    pub up: f64,
    pub flat: f64,
    pub down: f64,
    pub short_window: usize,
    pub medium_window: usize,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            strong_up: 2.0,
            up: 0.5,
            flat: -0.5,
            down: -2.0,
            short_window: 5,
            medium_window: 20,
        }
    }
}

/// Buckets for the ratio of mean absolute daily move to price dispersion.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrengthThresholds {
    pub very_strong: f64,
    pub strong: f64,
    pub moderate: f64,
    pub window: usize,
    pub min_points: usize,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            very_strong: 1.5,
            strong: 1.0,
            moderate: 0.5,
            window: 10,
            min_points: 3,
        }
    }
}

/// Coefficient-of-variation buckets for the volatility level.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VolatilityThresholds {
    pub high: f64,
    pub moderate: f64,
    pub window: usize,
}

impl Default for VolatilityThresholds {
    fn default() -> Self {
        Self {
            high: 5.0,
            moderate: 2.0,
            window: 10,
        }
    }
}

/// Volatility-driven window selection policy. CV above `high_cv` widens the
/// price window for stability; CV below `low_cv` widens it to surface the
/// trend; both boundaries fall in the standard bucket.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowPolicy {
    pub high_cv: f64,
    pub low_cv: f64,
    pub high_news_days: u32,
    pub normal_news_days: u32,
    pub low_news_days: u32,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            high_cv: 8.0,
            low_cv: 4.0,
            high_news_days: 10,
            normal_news_days: 7,
            low_news_days: 14,
        }
    }
}

/// Change-percent buckets for momentum classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MomentumThresholds {
    pub very_strong_up: f64,
    pub up: f64,
    pub neutral: f64,
    pub down: f64,
}

impl Default for MomentumThresholds {
    fn default() -> Self {
        Self {
            very_strong_up: 3.0,
            up: 1.0,
            neutral: -1.0,
            down: -3.0,
        }
    }
}

/// 52-week position bands, in percent of the trailing range.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PositionBands {
    pub near_high: f64,
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl Default for PositionBands {
    fn default() -> Self {
        Self {
            near_high: 90.0,
            upper: 70.0,
            middle: 30.0,
            lower: 10.0,
        }
    }
}

/// Bands for the percent change of recent volatility vs the prior window.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VolatilityTrendBands {
    pub surge: f64,
    pub rising: f64,
    pub stable: f64,
    pub falling: f64,
}

impl Default for VolatilityTrendBands {
    fn default() -> Self {
        Self {
            surge: 20.0,
            rising: 5.0,
            stable: -5.0,
            falling: -20.0,
        }
    }
}

/// How short/medium/long trend estimates are blended for one sector class.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrendWeights {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

/// Per-sector projection tuning: blend weights, the fallback daily-return
/// volatility used when no history is available, and the uncertainty-band
/// multiplier.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorPolicy {
    pub weights: TrendWeights,
    pub default_volatility: f64,
    pub band_multiplier: f64,
}

/// Tuning for the stochastic forward-path simulation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectionPolicy {
    pub horizon: usize,
    pub min_points: usize,
    pub short_window: usize,
    pub medium_window: usize,
    pub long_window: usize,
    pub strong_threshold: f64,
    pub moderate_threshold: f64,
    pub strong_multiplier: f64,
    pub moderate_multiplier: f64,
    pub weak_multiplier: f64,
    pub strong_confidence: f64,
    pub moderate_confidence: f64,
    pub weak_confidence: f64,
    pub history_weight: f64,
    pub trend_weight: f64,
    pub return_lookback: usize,
    pub step_clip: f64,
    pub band_window: usize,
    pub band_growth: f64,
    pub technology: SectorPolicy,
    pub defensive: SectorPolicy,
    pub general: SectorPolicy,
}

impl ProjectionPolicy {
    pub fn for_sector(&self, sector: Sector) -> &SectorPolicy {
        match sector {
            Sector::Technology => &self.technology,
            Sector::Defensive => &self.defensive,
            Sector::General => &self.general,
        }
    }
}

impl Default for ProjectionPolicy {
    fn default() -> Self {
        Self {
            horizon: 30,
            min_points: 10,
            short_window: 5,
            medium_window: 15,
            long_window: 30,
            strong_threshold: 0.5,
            moderate_threshold: 0.2,
            strong_multiplier: 1.2,
            moderate_multiplier: 1.0,
            weak_multiplier: 0.7,
            strong_confidence: 0.8,
            moderate_confidence: 0.6,
            weak_confidence: 0.4,
            history_weight: 0.3,
            trend_weight: 0.7,
            return_lookback: 20,
            step_clip: 0.1,
            band_window: 20,
            band_growth: 0.05,
            technology: SectorPolicy {
                weights: TrendWeights {
                    short: 0.6,
                    medium: 0.3,
                    long: 0.1,
                },
                default_volatility: 0.035,
                band_multiplier: 1.3,
            },
            defensive: SectorPolicy {
                weights: TrendWeights {
                    short: 0.2,
                    medium: 0.4,
                    long: 0.4,
                },
                default_volatility: 0.015,
                band_multiplier: 0.7,
            },
            general: SectorPolicy {
                weights: TrendWeights {
                    short: 0.5,
                    medium: 0.3,
                    long: 0.2,
                },
                default_volatility: 0.025,
                band_multiplier: 1.0,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub trend: TrendThresholds,
    pub strength: StrengthThresholds,
    pub volatility: VolatilityThresholds,
    pub window: WindowPolicy,
    pub momentum: MomentumThresholds,
    pub position: PositionBands,
    pub volatility_trend: VolatilityTrendBands,
    pub projection: ProjectionPolicy,
}

pub fn load_config(path: &str) -> Result<AnalysisConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AnalysisConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_policy() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.trend.strong_up, 2.0);
        assert_eq!(cfg.window.high_cv, 8.0);
        assert_eq!(cfg.projection.horizon, 30);
        assert_eq!(cfg.projection.technology.weights.short, 0.6);
        assert_eq!(cfg.projection.defensive.default_volatility, 0.015);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let cfg: AnalysisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.volatility.high, 5.0);
        assert_eq!(cfg.projection.step_clip, 0.1);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg: AnalysisConfig =
            serde_json::from_str(r#"{"trend": {"strong_up": 3.0}}"#).unwrap();
        assert_eq!(cfg.trend.strong_up, 3.0);
        assert_eq!(cfg.trend.up, 0.5);
        assert_eq!(cfg.momentum.very_strong_up, 3.0);
    }
}
