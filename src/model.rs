// Core structs: price series, quote context, classification snapshots.
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Label used when a computation has fewer points than it requires.
pub const NA_INSUFFICIENT: &str = "N/A (insufficient data)";
/// Label used for degenerate inputs (zero denominators, flat ranges).
pub const NA_DATA_ERROR: &str = "N/A (data error)";
/// Label used when a computation fails for any other reason.
pub const NA_ANALYSIS_ERROR: &str = "N/A (analysis error)";

/// One trading period of OHLCV data. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Scalar quote snapshot supplied alongside the series. The current price may
/// be intraday and differ from the series' last close, so it is not derived
/// from the series.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuoteContext {
    pub current_price: f64,
    pub week52_high: f64,
    pub week52_low: f64,
    pub change_percent: f64,
}

/// Technical classification of a price series. Pure value object, recomputed
/// on demand; every field falls back to an explicit "N/A (...)" label instead
/// of failing.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalSnapshot {
    pub short_trend: String,
    pub medium_trend: String,
    pub long_trend: String,
    pub trend_strength: String,
    pub volatility_level: String,
    pub price_vs_ma: String,
    pub support_resistance: String,
    pub volume_ratio: String,
}

impl TechnicalSnapshot {
    /// Uniform snapshot used when the whole classification degrades at once.
    pub fn unavailable(label: &str) -> Self {
        Self {
            short_trend: label.to_string(),
            medium_trend: label.to_string(),
            long_trend: label.to_string(),
            trend_strength: label.to_string(),
            volatility_level: label.to_string(),
            price_vs_ma: label.to_string(),
            support_resistance: label.to_string(),
            volume_ratio: label.to_string(),
        }
    }
}

/// Sentiment classification derived from quote scalars and recent history.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentSnapshot {
    pub momentum: String,
    pub price_position: String,
    pub volume_pattern: String,
    pub volatility_trend: String,
}

impl SentimentSnapshot {
    pub fn unavailable(label: &str) -> Self {
        Self {
            momentum: label.to_string(),
            price_position: label.to_string(),
            volume_pattern: label.to_string(),
            volatility_trend: label.to_string(),
        }
    }
}

/// Price lookback period understood by the market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PricePeriod {
    OneMonth,
    TwoMonths,
    ThreeMonths,
}

impl PricePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricePeriod::OneMonth => "1mo",
            PricePeriod::TwoMonths => "2mo",
            PricePeriod::ThreeMonths => "3mo",
        }
    }
}

/// Recommended analysis window, derived from measured volatility.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisWindow {
    pub price_period: PricePeriod,
    pub news_lookback_days: u32,
    pub volatility_score: f64,
    pub rationale: String,
}

/// Direction of the blended trend, used by the renderer for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Flat => "flat",
        }
    }
}

/// Simulated forward price path with a widening uncertainty band.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionPath {
    pub future_dates: Vec<NaiveDate>,
    pub future_prices: Vec<f64>,
    pub upper_band: Vec<f64>,
    pub lower_band: Vec<f64>,
    pub direction: TrendDirection,
    pub confidence: f64,
    pub confidence_label: String,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("insufficient data: need {needed} points, got {got}")]
    Insufficient { needed: usize, got: usize },
    #[error("degenerate input: {0}")]
    Degenerate(String),
}

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("insufficient history: need {needed} points, got {got}")]
    InsufficientHistory { needed: usize, got: usize },
    #[error("degenerate price data: {0}")]
    DegenerateData(String),
    #[error("simulation failed: {0}")]
    Simulation(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
