//! Adaptive window selector: picks how much price history and news lookback
//! to analyze from the measured volatility of the recent series.

use crate::config::AnalysisConfig;
use crate::model::{AnalysisWindow, PricePeriod, PricePoint};
use crate::normalizer::normalize;
use crate::stats;

pub struct WindowSelector;

impl WindowSelector {
    pub fn new() -> Self {
        Self
    }

    /// Pure function of the series' recent coefficient of variation. Series
    /// too short to score fall back to the standard window. Callers may
    /// re-fetch history with the returned period and re-run classification;
    /// that feedback loop lives outside this component.
    pub fn select(&self, series: &[PricePoint], cfg: &AnalysisConfig) -> AnalysisWindow {
        let normalized = match normalize(series) {
            Ok(n) => n,
            Err(_) => return Self::default_window(cfg),
        };
        if normalized.len() < cfg.volatility.window {
            return Self::default_window(cfg);
        }

        let cv = match stats::coefficient_of_variation(&normalized.closes[..cfg.volatility.window])
        {
            Some(cv) if cv.is_finite() => cv,
            _ => return Self::default_window(cfg),
        };

        if cv > cfg.window.high_cv {
            AnalysisWindow {
                price_period: PricePeriod::TwoMonths,
                news_lookback_days: cfg.window.high_news_days,
                volatility_score: cv,
                rationale: "high volatility; widening price window for stability".to_string(),
            }
        } else if cv < cfg.window.low_cv {
            AnalysisWindow {
                price_period: PricePeriod::ThreeMonths,
                news_lookback_days: cfg.window.low_news_days,
                volatility_score: cv,
                rationale: "low volatility; widening price window to surface the trend"
                    .to_string(),
            }
        } else {
            AnalysisWindow {
                price_period: PricePeriod::OneMonth,
                news_lookback_days: cfg.window.normal_news_days,
                volatility_score: cv,
                rationale: "normal volatility regime".to_string(),
            }
        }
    }

    fn default_window(cfg: &AnalysisConfig) -> AnalysisWindow {
        AnalysisWindow {
            price_period: PricePeriod::OneMonth,
            news_lookback_days: cfg.window.normal_news_days,
            volatility_score: 0.0,
            rationale: "insufficient history; default window".to_string(),
        }
    }
}

impl Default for WindowSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: start + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000.0,
            })
            .collect()
    }

    // ten closes with mean 100 and population std `target_cv`
    fn series_with_cv(target_cv: f64) -> Vec<PricePoint> {
        let mut closes = vec![100.0 + target_cv; 5];
        closes.extend(vec![100.0 - target_cv; 5]);
        series(&closes)
    }

    #[test]
    fn high_volatility_widens_for_stability() {
        let selector = WindowSelector::new();
        let cfg = AnalysisConfig::default();
        let window = selector.select(&series_with_cv(12.0), &cfg);
        assert_eq!(window.price_period, PricePeriod::TwoMonths);
        assert_eq!(window.news_lookback_days, 10);
        assert!(window.volatility_score > 8.0);
    }

    #[test]
    fn low_volatility_widens_to_surface_trend() {
        let selector = WindowSelector::new();
        let cfg = AnalysisConfig::default();
        let window = selector.select(&series_with_cv(1.0), &cfg);
        assert_eq!(window.price_period, PricePeriod::ThreeMonths);
        assert_eq!(window.news_lookback_days, 14);
    }

    #[test]
    fn boundaries_fall_in_standard_bucket() {
        let selector = WindowSelector::new();
        let cfg = AnalysisConfig::default();
        // cv exactly 8.0 and exactly 4.0 both stay on the standard window
        for cv in [8.0, 4.0, 6.0] {
            let window = selector.select(&series_with_cv(cv), &cfg);
            assert_eq!(window.price_period, PricePeriod::OneMonth);
            assert_eq!(window.news_lookback_days, 7);
        }
    }

    #[test]
    fn short_series_gets_default_window() {
        let selector = WindowSelector::new();
        let cfg = AnalysisConfig::default();
        let window = selector.select(&series(&[100.0; 9]), &cfg);
        assert_eq!(window.price_period, PricePeriod::OneMonth);
        assert_eq!(window.news_lookback_days, 7);
        assert_eq!(window.volatility_score, 0.0);
        assert!(window.rationale.contains("insufficient"));
    }

    #[test]
    fn selection_is_pure() {
        let selector = WindowSelector::new();
        let cfg = AnalysisConfig::default();
        let points = series_with_cv(6.0);
        let a = selector.select(&points, &cfg);
        let b = selector.select(&points, &cfg);
        assert_eq!(a.price_period, b.price_period);
        assert_eq!(a.news_lookback_days, b.news_lookback_days);
        assert_eq!(a.volatility_score, b.volatility_score);
    }

    #[test]
    fn period_strings_match_provider_vocabulary() {
        assert_eq!(PricePeriod::OneMonth.as_str(), "1mo");
        assert_eq!(PricePeriod::TwoMonths.as_str(), "2mo");
        assert_eq!(PricePeriod::ThreeMonths.as_str(), "3mo");
    }
}
