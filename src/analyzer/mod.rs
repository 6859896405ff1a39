// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod indicators;
pub mod sentiment;
pub mod window;

pub use indicators::IndicatorEngine;
pub use sentiment::SentimentAnalyzer;
pub use window::WindowSelector;
