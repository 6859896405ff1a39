//! tickerlens turns a raw OHLCV price history for a single equity into a
//! compact set of classified signals and a simulated forward price path:
//!
//! - [`IndicatorEngine`]: trend, trend strength, volatility regime,
//!   moving-average relation, support/resistance position, volume ratio;
//! - [`SentimentAnalyzer`]: momentum, 52-week position, volume confirmation,
//!   volatility trend;
//! - [`WindowSelector`]: adaptive (price lookback, news lookback) window;
//! - [`ProjectionGenerator`]: per-entity deterministic forward path with a
//!   widening uncertainty band.
//!
//! All computation is synchronous and side-effect-free; market data, news,
//! text generation and rendering belong to external collaborators. Every
//! classification is total: missing or degenerate data resolves to explicit
//! "N/A (...)" labels instead of errors.

pub mod analyzer;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod projection;
pub mod stats;

pub use analyzer::{IndicatorEngine, SentimentAnalyzer, WindowSelector};
pub use config::{load_config, AnalysisConfig};
pub use model::{
    AnalysisWindow, PricePeriod, PricePoint, ProjectionError, ProjectionPath, QuoteContext,
    SentimentSnapshot, TechnicalSnapshot, TrendDirection,
};
pub use projection::sector::{DefaultSectorTable, Sector, SectorLookup};
pub use projection::ProjectionGenerator;
