//! Adjustable-range calculator — min/max/recommended bounds for the
//! user-tunable generation parameters, per performance tier.
//!
//! The recommended values come from the resolved category's settings, not
//! from the tier table, so the calculator takes both. Tier F collapses every
//! range to zero and attaches an explanatory message instead.

use serde::{Deserialize, Serialize};

use super::settings::GenerationSettings;
use super::tier::PerformanceTier;

/// One slider-shaped parameter range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange<T> {
    pub min: T,
    pub max: T,
    pub recommended: T,
    pub step: T,
}

/// User-adjustable bounds handed to the UI layer.
#[derive(Debug, Clone, Serialize)]
pub struct AdjustableRanges {
    pub resolution: ParamRange<u32>,
    pub steps: ParamRange<u32>,
    pub guidance_scale: ParamRange<f64>,
    pub control_strength: ParamRange<f64>,
    /// Set only when the ranges are collapsed (tier F).
    pub message: Option<&'static str>,
}

// Per-tier resolution and step bounds. S..D only; F never reaches the table.
fn bounds(tier: PerformanceTier) -> (u32, u32, u32, u32) {
    match tier {
        PerformanceTier::S => (512, 2048, 20, 100),
        PerformanceTier::A => (384, 1536, 15, 75),
        PerformanceTier::B => (256, 1024, 12, 50),
        PerformanceTier::C => (256, 768, 10, 40),
        PerformanceTier::D | PerformanceTier::F => (128, 512, 8, 30),
    }
}

/// Compute the adjustable ranges for a tier, anchored on the resolved
/// settings for the category that produced it.
pub fn ranges_for(tier: PerformanceTier, settings: &GenerationSettings) -> AdjustableRanges {
    if tier == PerformanceTier::F {
        let zero_u = ParamRange {
            min: 0,
            max: 0,
            recommended: 0,
            step: 0,
        };
        let zero_f = ParamRange {
            min: 0.0,
            max: 0.0,
            recommended: 0.0,
            step: 0.0,
        };
        return AdjustableRanges {
            resolution: zero_u,
            steps: zero_u,
            guidance_scale: zero_f,
            control_strength: zero_f,
            message: Some("Incompatible hardware"),
        };
    }

    let (res_min, res_max, steps_min, steps_max) = bounds(tier);

    AdjustableRanges {
        resolution: ParamRange {
            min: res_min,
            max: res_max,
            recommended: settings.resolution,
            step: 128,
        },
        steps: ParamRange {
            min: steps_min,
            max: steps_max,
            recommended: settings.steps,
            step: 1,
        },
        guidance_scale: ParamRange {
            min: 5.0,
            max: 15.0,
            recommended: 7.0,
            step: 0.5,
        },
        control_strength: ParamRange {
            min: 0.5,
            max: 1.0,
            recommended: 0.85,
            step: 0.05,
        },
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::classify::HardwareCategory;
    use crate::hardware::settings::settings_for;
    use crate::hardware::tier::tier_of;

    #[test]
    fn f_tier_collapses_to_zero_with_message() {
        let settings = settings_for(HardwareCategory::Incompatible);
        let ranges = ranges_for(PerformanceTier::F, settings);
        assert_eq!(ranges.resolution.max, 0);
        assert_eq!(ranges.steps.max, 0);
        assert_eq!(ranges.guidance_scale.max, 0.0);
        assert_eq!(ranges.control_strength.max, 0.0);
        assert!(ranges.message.is_some());
    }

    #[test]
    fn recommended_values_come_from_settings() {
        let settings = settings_for(HardwareCategory::NvidiaGpuMid);
        let ranges = ranges_for(PerformanceTier::A, settings);
        assert_eq!(ranges.resolution.recommended, settings.resolution);
        assert_eq!(ranges.steps.recommended, settings.steps);
    }

    #[test]
    fn recommended_always_inside_bounds_for_non_f_categories() {
        for category in HardwareCategory::ALL {
            let tier = tier_of(category);
            if tier == PerformanceTier::F {
                continue;
            }
            let settings = settings_for(category);
            let ranges = ranges_for(tier, settings);
            assert!(
                ranges.resolution.min <= ranges.resolution.recommended
                    && ranges.resolution.recommended <= ranges.resolution.max,
                "{category:?} resolution"
            );
            assert!(
                ranges.steps.min <= ranges.steps.recommended
                    && ranges.steps.recommended <= ranges.steps.max,
                "{category:?} steps"
            );
        }
    }

    #[test]
    fn fixed_guidance_and_control_ranges() {
        let settings = settings_for(HardwareCategory::CloudGpuHigh);
        let ranges = ranges_for(PerformanceTier::S, settings);
        assert_eq!(ranges.guidance_scale.min, 5.0);
        assert_eq!(ranges.guidance_scale.max, 15.0);
        assert_eq!(ranges.guidance_scale.recommended, 7.0);
        assert_eq!(ranges.control_strength.min, 0.5);
        assert_eq!(ranges.control_strength.max, 1.0);
        assert_eq!(ranges.control_strength.recommended, 0.85);
    }

    #[test]
    fn higher_tiers_allow_wider_bounds() {
        let s = ranges_for(PerformanceTier::S, settings_for(HardwareCategory::CloudGpuHigh));
        let d = ranges_for(PerformanceTier::D, settings_for(HardwareCategory::CpuOnlyMid));
        assert!(s.resolution.max > d.resolution.max);
        assert!(s.steps.max > d.steps.max);
    }
}
