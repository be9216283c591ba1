//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema the model was trained on.**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Rename feature → increment FEATURE_VERSION (the model matches by name)

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Column names in the exact order the model expects them
pub const FEATURE_LAYOUT: &[&str] = &[
    "Energy_Usage",      // 0: kWh, real
    "Waste_Generation",  // 1: tons, real
    "Renewable_Usage",   // 2: percent, integer
    "Carbon_Emission",   // 3: kg, integer
];

/// Total number of features
/// Must match FEATURE_LAYOUT.len()
pub const FEATURE_COUNT: usize = 4;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of version + ordered feature names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout description reported alongside model info
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True when `names` lists exactly the layout columns in layout order
    pub fn matches(&self, names: &[String]) -> bool {
        self.feature_names == names
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_stable() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("Energy_Usage"), Some(0));
        assert_eq!(feature_index("Carbon_Emission"), Some(3));
        assert_eq!(feature_index("energy_usage"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(1), Some("Waste_Generation"));
        assert_eq!(feature_name(4), None);
    }

    #[test]
    fn test_layout_info_matches() {
        let info = LayoutInfo::current();
        assert_eq!(info.feature_count, 4);

        let same: Vec<String> = FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        assert!(info.matches(&same));

        let mut swapped = same.clone();
        swapped.swap(0, 1);
        assert!(!info.matches(&swapped));
    }
}
