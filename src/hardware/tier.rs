//! Performance tier — the ordinal S–F scale derived from the hardware
//! category. Pure lookup, no computation.

use serde::{Deserialize, Serialize};

use super::classify::HardwareCategory;

/// Ordinal performance tier. `Ord` follows quality: F < D < C < B < A < S,
/// so "tier never decreases" properties read naturally as `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    /// Incompatible — terminal. All derived ranges collapse to zero.
    F,
    /// Minimal — old Intel Macs, low-memory cloud GPUs, mid CPU-only boxes.
    D,
    /// Entry level.
    C,
    /// Mid-range.
    B,
    /// High-end consumer.
    A,
    /// Professional/enterprise.
    S,
}

impl PerformanceTier {
    /// Single-letter label for display ("S".."F").
    pub fn label(self) -> &'static str {
        match self {
            PerformanceTier::S => "S",
            PerformanceTier::A => "A",
            PerformanceTier::B => "B",
            PerformanceTier::C => "C",
            PerformanceTier::D => "D",
            PerformanceTier::F => "F",
        }
    }
}

/// Map a hardware category to its performance tier.
///
/// The `match` is exhaustive on purpose: adding a category without a tier is
/// a compile error, so this table can never silently fall back.
pub fn tier_of(category: HardwareCategory) -> PerformanceTier {
    use HardwareCategory::*;
    match category {
        // S — professional/enterprise
        CloudGpuHigh | NvidiaGpuHigh | AppleSiliconUltra => PerformanceTier::S,
        // A — high-end consumer
        CloudGpuMid | NvidiaGpuMid | AppleSiliconMax => PerformanceTier::A,
        // B — mid-range
        NvidiaGpuLow | AppleSiliconPro | IntelMacModern => PerformanceTier::B,
        // C — entry level
        NvidiaGpuLegacy | AppleSiliconBase | IntelMacCapable | CpuOnlyHigh => PerformanceTier::C,
        // D — minimal
        CloudGpuLow | IntelMacOld | CpuOnlyMid => PerformanceTier::D,
        // F — incompatible/terminal
        CpuOnlyLow | LegacyMacIncompatible | Incompatible => PerformanceTier::F,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_tier() {
        for category in HardwareCategory::ALL {
            // tier_of is an exhaustive match; this pins the table at runtime
            // too, against ALL drifting out of sync with the enum.
            let _ = tier_of(category);
        }
    }

    #[test]
    fn tier_ordering_follows_quality() {
        assert!(PerformanceTier::S > PerformanceTier::A);
        assert!(PerformanceTier::A > PerformanceTier::B);
        assert!(PerformanceTier::B > PerformanceTier::C);
        assert!(PerformanceTier::C > PerformanceTier::D);
        assert!(PerformanceTier::D > PerformanceTier::F);
    }

    #[test]
    fn terminal_categories_map_to_f() {
        assert_eq!(tier_of(HardwareCategory::Incompatible), PerformanceTier::F);
        assert_eq!(
            tier_of(HardwareCategory::LegacyMacIncompatible),
            PerformanceTier::F
        );
        assert_eq!(tier_of(HardwareCategory::CpuOnlyLow), PerformanceTier::F);
    }

    #[test]
    fn representative_lookups() {
        assert_eq!(tier_of(HardwareCategory::CloudGpuHigh), PerformanceTier::S);
        assert_eq!(tier_of(HardwareCategory::AppleSiliconMax), PerformanceTier::A);
        assert_eq!(tier_of(HardwareCategory::IntelMacModern), PerformanceTier::B);
        assert_eq!(tier_of(HardwareCategory::CpuOnlyHigh), PerformanceTier::C);
        assert_eq!(tier_of(HardwareCategory::CloudGpuLow), PerformanceTier::D);
    }
}
