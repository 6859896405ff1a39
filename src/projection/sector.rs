//! Coarse sector classification used to tune projection heuristics.
//!
//! The sector decides trend blend weights, the fallback volatility used when
//! no return history exists, and the uncertainty-band multiplier. It is a
//! named heuristic table, not a learned model, and it is injectable so the
//! simulation logic stays independent of any particular name list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    /// Short-term momentum dominates; higher default volatility.
    Technology,
    /// Long-term trend dominates; lower default volatility.
    Defensive,
    General,
}

/// Maps an entity identifier to a coarse sector class.
pub trait SectorLookup: Send + Sync {
    fn sector(&self, entity_key: &str) -> Sector;
}

/// Default keyword table, matched case-insensitively against the entity key.
/// Technology keywords win over defensive ones when both match.
#[derive(Debug, Clone)]
pub struct DefaultSectorTable {
    technology: Vec<String>,
    defensive: Vec<String>,
}

impl DefaultSectorTable {
    pub fn new(technology: Vec<String>, defensive: Vec<String>) -> Self {
        Self {
            technology: technology.into_iter().map(|k| k.to_lowercase()).collect(),
            defensive: defensive.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

impl Default for DefaultSectorTable {
    fn default() -> Self {
        Self::new(
            vec![
                "electronics".to_string(),
                "semiconductor".to_string(),
                "software".to_string(),
                "internet".to_string(),
                "telecom".to_string(),
                "tech".to_string(),
            ],
            vec![
                "bank".to_string(),
                "financial".to_string(),
                "insurance".to_string(),
                "utility".to_string(),
                "power".to_string(),
                "holdings".to_string(),
            ],
        )
    }
}

impl SectorLookup for DefaultSectorTable {
    fn sector(&self, entity_key: &str) -> Sector {
        let key = entity_key.trim().to_lowercase();
        if self.technology.iter().any(|k| key.contains(k.as_str())) {
            Sector::Technology
        } else if self.defensive.iter().any(|k| key.contains(k.as_str())) {
            Sector::Defensive
        } else {
            Sector::General
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let table = DefaultSectorTable::default();
        assert_eq!(table.sector("Acme Semiconductor"), Sector::Technology);
        assert_eq!(table.sector("FIRST NATIONAL BANK"), Sector::Defensive);
        assert_eq!(table.sector("Generic Industries"), Sector::General);
    }

    #[test]
    fn technology_wins_on_double_match() {
        let table = DefaultSectorTable::default();
        assert_eq!(table.sector("Fintech Insurance Software"), Sector::Technology);
    }

    #[test]
    fn custom_table_overrides_defaults() {
        let table = DefaultSectorTable::new(vec!["rocket".to_string()], vec![]);
        assert_eq!(table.sector("Rocket Labs"), Sector::Technology);
        assert_eq!(table.sector("Acme Software"), Sector::General);
    }
}
