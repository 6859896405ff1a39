//! Stochastic forward-path generator for charting.
//!
//! Extrapolates a plausible 30-step price path from blended multi-horizon
//! trends and historical return statistics, with a per-entity deterministic
//! random walk and an uncertainty band that widens with the horizon. Charts
//! are optional enrichment: every failure is reported as a [`ProjectionError`]
//! and the surrounding report continues without one.

pub mod sector;

use crate::config::AnalysisConfig;
use crate::model::{DataError, PricePoint, ProjectionError, ProjectionPath, TrendDirection};
use crate::normalizer::normalize;
use crate::stats;
use chrono::Duration;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use sector::{DefaultSectorTable, SectorLookup};
use tracing::warn;

/// Stable seed for an entity: FNV-1a over the trimmed, lowercased key.
/// Documented so the reproducibility contract survives reimplementation;
/// repeated calls for the same entity replay the same path.
pub fn entity_seed(entity_key: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in entity_key.trim().to_lowercase().bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

pub struct ProjectionGenerator<S: SectorLookup = DefaultSectorTable> {
    sectors: S,
}

impl ProjectionGenerator<DefaultSectorTable> {
    pub fn new() -> Self {
        Self {
            sectors: DefaultSectorTable::default(),
        }
    }
}

impl Default for ProjectionGenerator<DefaultSectorTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SectorLookup> ProjectionGenerator<S> {
    pub fn with_sectors(sectors: S) -> Self {
        Self { sectors }
    }

    pub fn project(
        &self,
        series: &[PricePoint],
        current_price: f64,
        entity_key: &str,
        cfg: &AnalysisConfig,
    ) -> Result<ProjectionPath, ProjectionError> {
        let p = &cfg.projection;

        let normalized = normalize(series).map_err(|e| match e {
            DataError::Insufficient { got, .. } => ProjectionError::InsufficientHistory {
                needed: p.min_points,
                got,
            },
            DataError::Degenerate(msg) => ProjectionError::DegenerateData(msg),
        })?;
        let closes = &normalized.closes;
        if closes.len() < p.min_points {
            return Err(ProjectionError::InsufficientHistory {
                needed: p.min_points,
                got: closes.len(),
            });
        }
        if !current_price.is_finite() || current_price < 0.0 {
            return Err(ProjectionError::DegenerateData(
                "invalid current price".to_string(),
            ));
        }

        let sector = self.sectors.sector(entity_key);
        let policy = p.for_sector(sector);

        // multi-horizon trend estimates, each as (last - first) / window
        let short = window_trend(closes, p.short_window);
        let medium_window = if closes.len() >= p.medium_window {
            p.medium_window
        } else {
            p.min_points
        };
        let medium = window_trend(closes, medium_window);
        let long = window_trend(closes, p.long_window);

        let weights = &policy.weights;
        let weighted_trend = short * weights.short + medium * weights.medium + long * weights.long;

        // strong trends are amplified, weak ones damped, to avoid
        // over-extrapolating noisy signals
        let recent_volatility = stats::std_dev(&closes[..10.min(closes.len())]);
        let trend_strength = weighted_trend.abs() / (recent_volatility + 1e-6);
        let (multiplier, confidence, confidence_label) = if trend_strength > p.strong_threshold {
            (p.strong_multiplier, p.strong_confidence, "high confidence")
        } else if trend_strength > p.moderate_threshold {
            (
                p.moderate_multiplier,
                p.moderate_confidence,
                "medium confidence",
            )
        } else {
            (p.weak_multiplier, p.weak_confidence, "low confidence")
        };
        let scaled_trend = weighted_trend * multiplier;

        let returns = stats::daily_returns(closes, p.return_lookback);
        let (avg_return, return_std) = if returns.is_empty() {
            (0.0, policy.default_volatility)
        } else {
            (stats::mean(&returns), stats::std_dev(&returns))
        };

        let trend_daily_return = if current_price != 0.0 {
            scaled_trend / current_price
        } else {
            0.0
        };
        let drift = avg_return * p.history_weight + trend_daily_return * p.trend_weight;
        if !drift.is_finite() || !return_std.is_finite() {
            return Err(ProjectionError::Simulation(
                "non-finite drift or volatility".to_string(),
            ));
        }

        let step_distribution = Normal::new(drift, return_std)
            .map_err(|e| ProjectionError::Simulation(e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(entity_seed(entity_key));

        let mut future_prices = Vec::with_capacity(p.horizon);
        let mut last = current_price;
        for _ in 0..p.horizon {
            // circuit-breaker against pathological draws
            let step = step_distribution
                .sample(&mut rng)
                .clamp(-p.step_clip, p.step_clip);
            last *= 1.0 + step;
            future_prices.push(last);
        }

        let last_date = series
            .iter()
            .map(|point| point.date)
            .max()
            .ok_or_else(|| ProjectionError::Simulation("empty series".to_string()))?;
        let future_dates: Vec<_> = (1..=p.horizon as i64)
            .map(|i| last_date + Duration::days(i))
            .collect();

        // uncertainty widens linearly with the step index
        let band_source = &closes[..p.band_window.min(closes.len())];
        let base_volatility = stats::std_dev(band_source) * policy.band_multiplier;
        let mut upper_band = Vec::with_capacity(p.horizon);
        let mut lower_band = Vec::with_capacity(p.horizon);
        for (i, price) in future_prices.iter().enumerate() {
            let width = base_volatility * (1.0 + i as f64 * p.band_growth);
            upper_band.push(price + width);
            lower_band.push(price - width);
        }

        let direction = if weighted_trend > 0.0 {
            TrendDirection::Up
        } else if weighted_trend < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        Ok(ProjectionPath {
            future_dates,
            future_prices,
            upper_band,
            lower_band,
            direction,
            confidence,
            confidence_label: confidence_label.to_string(),
        })
    }

    /// Convenience wrapper for callers that treat the chart as optional:
    /// failures are logged and collapse to `None`.
    pub fn project_opt(
        &self,
        series: &[PricePoint],
        current_price: f64,
        entity_key: &str,
        cfg: &AnalysisConfig,
    ) -> Option<ProjectionPath> {
        match self.project(series, current_price, entity_key, cfg) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("projection unavailable for {entity_key}: {e}");
                None
            }
        }
    }
}

/// Average per-step move over the most recent `window` closes, oriented
/// chronologically (newest minus oldest).
fn window_trend(closes_newest_first: &[f64], window: usize) -> f64 {
    let w = window.min(closes_newest_first.len());
    (closes_newest_first[0] - closes_newest_first[w - 1]) / w as f64
}
