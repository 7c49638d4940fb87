//! Static lighting catalog — 12 named profiles over a fixed Kelvin scale.
//!
//! Read-only data, constructed at compile time, never mutated. Profiles are
//! looked up by their stable `id`; display names are free-form.

use serde::Serialize;

/// Standard color temperatures in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorTemperature {
    /// Candlelight.
    Candle,
    /// Dim incandescent.
    WarmDim,
    /// Standard incandescent / warm.
    Warm,
    /// Halogen / soft white.
    SoftWhite,
    Neutral,
    /// Cool white fluorescent.
    CoolWhite,
    Daylight,
    BrightDaylight,
    CloudySky,
    BlueSky,
}

impl ColorTemperature {
    pub fn kelvin(self) -> u32 {
        match self {
            ColorTemperature::Candle => 1850,
            ColorTemperature::WarmDim => 2200,
            ColorTemperature::Warm => 2700,
            ColorTemperature::SoftWhite => 3000,
            ColorTemperature::Neutral => 3500,
            ColorTemperature::CoolWhite => 4000,
            ColorTemperature::Daylight => 5000,
            ColorTemperature::BrightDaylight => 5500,
            ColorTemperature::CloudySky => 6500,
            ColorTemperature::BlueSky => 10000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Dim,
    Medium,
    Bright,
}

/// Dominant light direction in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Natural,
    Overhead,
    Accent,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Midday,
    Afternoon,
    Evening,
    Night,
}

/// Catalog grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileCategory {
    Natural,
    Artificial,
    Mixed,
    Special,
}

/// One predefined lighting setup.
#[derive(Debug, Clone, Serialize)]
pub struct LightingProfile {
    /// Stable lookup key, e.g. "natural_golden_hour".
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub primary_temp: ColorTemperature,
    pub secondary_temp: Option<ColorTemperature>,
    pub intensity: Intensity,
    pub direction: Direction,
    pub time_of_day: TimeOfDay,
    pub category: ProfileCategory,
    /// Ordered prompt phrases; order is part of the contract.
    pub prompt_keywords: &'static [&'static str],
}

/// All lighting profiles known to the catalog.
static PROFILES: &[LightingProfile] = &[
    // ── Natural ─────────────────────────────────────────────────────────
    LightingProfile {
        id: "natural_morning",
        name: "Natural Morning",
        description: "Soft morning light, warm tones",
        primary_temp: ColorTemperature::SoftWhite,
        secondary_temp: None,
        intensity: Intensity::Medium,
        direction: Direction::Natural,
        time_of_day: TimeOfDay::Morning,
        category: ProfileCategory::Natural,
        prompt_keywords: &[
            "morning sunlight",
            "soft natural light",
            "3000K warm glow",
            "gentle shadows",
            "east-facing window light",
        ],
    },
    LightingProfile {
        id: "natural_midday",
        name: "Natural Midday",
        description: "Bright daylight, neutral tones",
        primary_temp: ColorTemperature::Daylight,
        secondary_temp: None,
        intensity: Intensity::Bright,
        direction: Direction::Natural,
        time_of_day: TimeOfDay::Midday,
        category: ProfileCategory::Natural,
        prompt_keywords: &[
            "bright daylight",
            "natural sunlight",
            "5000K daylight",
            "crisp shadows",
            "clear sky lighting",
        ],
    },
    LightingProfile {
        id: "natural_golden_hour",
        name: "Golden Hour",
        description: "Warm sunset, golden light",
        primary_temp: ColorTemperature::Warm,
        secondary_temp: None,
        intensity: Intensity::Medium,
        direction: Direction::Natural,
        time_of_day: TimeOfDay::Afternoon,
        category: ProfileCategory::Natural,
        prompt_keywords: &[
            "golden hour",
            "warm sunset light",
            "2700K amber glow",
            "long soft shadows",
            "late afternoon sunlight",
        ],
    },
    // ── Artificial ──────────────────────────────────────────────────────
    LightingProfile {
        id: "artificial_warm_cozy",
        name: "Warm Cozy Ambience",
        description: "Warm living-room lighting, inviting",
        primary_temp: ColorTemperature::Warm,
        secondary_temp: Some(ColorTemperature::WarmDim),
        intensity: Intensity::Dim,
        direction: Direction::Mixed,
        time_of_day: TimeOfDay::Evening,
        category: ProfileCategory::Artificial,
        prompt_keywords: &[
            "warm ambient lighting",
            "cozy 2700K incandescent",
            "table lamps",
            "warm glow",
            "intimate lighting",
        ],
    },
    LightingProfile {
        id: "artificial_neutral_work",
        name: "Neutral Work",
        description: "Neutral lighting for offices and kitchens",
        primary_temp: ColorTemperature::Neutral,
        secondary_temp: Some(ColorTemperature::CoolWhite),
        intensity: Intensity::Bright,
        direction: Direction::Overhead,
        time_of_day: TimeOfDay::Midday,
        category: ProfileCategory::Artificial,
        prompt_keywords: &[
            "neutral white lighting",
            "3500K-4000K LEDs",
            "overhead lighting",
            "bright even illumination",
            "task lighting",
        ],
    },
    LightingProfile {
        id: "artificial_cool_modern",
        name: "Cool Modern",
        description: "Cool gallery or bathroom lighting",
        primary_temp: ColorTemperature::CoolWhite,
        secondary_temp: None,
        intensity: Intensity::Bright,
        direction: Direction::Overhead,
        time_of_day: TimeOfDay::Midday,
        category: ProfileCategory::Artificial,
        prompt_keywords: &[
            "cool white lighting",
            "4000K LED",
            "modern lighting",
            "gallery lighting",
            "bright white",
        ],
    },
    // ── Mixed ───────────────────────────────────────────────────────────
    LightingProfile {
        id: "mixed_scandinavian",
        name: "Scandinavian Mix",
        description: "Natural plus warm artificial (Nordic style)",
        primary_temp: ColorTemperature::Daylight,
        secondary_temp: Some(ColorTemperature::Warm),
        intensity: Intensity::Medium,
        direction: Direction::Mixed,
        time_of_day: TimeOfDay::Afternoon,
        category: ProfileCategory::Mixed,
        prompt_keywords: &[
            "scandinavian lighting",
            "natural daylight with warm accents",
            "5000K daylight mixed with 2700K lamps",
            "hygge atmosphere",
            "soft mixed lighting",
        ],
    },
    LightingProfile {
        id: "mixed_restaurant",
        name: "Restaurant/Bar",
        description: "Accent lighting with atmosphere",
        primary_temp: ColorTemperature::WarmDim,
        secondary_temp: Some(ColorTemperature::Warm),
        intensity: Intensity::Dim,
        direction: Direction::Accent,
        time_of_day: TimeOfDay::Evening,
        category: ProfileCategory::Mixed,
        prompt_keywords: &[
            "restaurant lighting",
            "dim 2200K accent lights",
            "pendant lamps",
            "dramatic shadows",
            "intimate dining atmosphere",
        ],
    },
    LightingProfile {
        id: "mixed_boutique",
        name: "Boutique/Retail",
        description: "Commercial lighting with accents",
        primary_temp: ColorTemperature::Neutral,
        secondary_temp: Some(ColorTemperature::BrightDaylight),
        intensity: Intensity::Bright,
        direction: Direction::Accent,
        time_of_day: TimeOfDay::Midday,
        category: ProfileCategory::Mixed,
        prompt_keywords: &[
            "retail lighting",
            "3500K track lighting",
            "accent spotlights",
            "product highlighting",
            "commercial bright lighting",
        ],
    },
    // ── Special ─────────────────────────────────────────────────────────
    LightingProfile {
        id: "dramatic_studio",
        name: "Dramatic Studio",
        description: "Professional photography lighting",
        primary_temp: ColorTemperature::Daylight,
        secondary_temp: Some(ColorTemperature::Neutral),
        intensity: Intensity::Bright,
        direction: Direction::Accent,
        time_of_day: TimeOfDay::Midday,
        category: ProfileCategory::Special,
        prompt_keywords: &[
            "studio lighting",
            "professional photography lighting",
            "5000K key light",
            "dramatic shadows",
            "architectural photography lighting",
        ],
    },
    LightingProfile {
        id: "sunset_interior",
        name: "Interior Sunset",
        description: "Sunset light coming through windows",
        primary_temp: ColorTemperature::Warm,
        secondary_temp: Some(ColorTemperature::WarmDim),
        intensity: Intensity::Medium,
        direction: Direction::Natural,
        time_of_day: TimeOfDay::Evening,
        category: ProfileCategory::Special,
        prompt_keywords: &[
            "sunset through windows",
            "warm 2700K sunset glow",
            "orange hour",
            "warm interior atmosphere",
            "dusk lighting",
        ],
    },
    LightingProfile {
        id: "night_ambient",
        name: "Night Ambience",
        description: "Soft nighttime lighting",
        primary_temp: ColorTemperature::WarmDim,
        secondary_temp: Some(ColorTemperature::Candle),
        intensity: Intensity::Dim,
        direction: Direction::Accent,
        time_of_day: TimeOfDay::Night,
        category: ProfileCategory::Special,
        prompt_keywords: &[
            "night ambient lighting",
            "dim 2200K warm glow",
            "candlelight",
            "moonlight through window",
            "nighttime cozy atmosphere",
        ],
    },
];

/// All profiles, in catalog order.
pub fn all_profiles() -> &'static [LightingProfile] {
    PROFILES
}

/// Look up a profile by its stable id.
pub fn find_profile(id: &str) -> Option<&'static LightingProfile> {
    PROFILES.iter().find(|p| p.id == id)
}

/// Profiles in one catalog grouping, in catalog order.
pub fn profiles_in(category: ProfileCategory) -> Vec<&'static LightingProfile> {
    PROFILES.iter().filter(|p| p.category == category).collect()
}
