//! Hardware domain — capability snapshot, classification, and derived
//! generation configuration.
//!
//! Everything downstream of the snapshot is a pure, deterministic function:
//! `classify` → `tier_of` → `settings_for` → `advisories` / `ranges_for`.
//! `HardwareProfile` runs the whole chain once and holds the results.

mod advisories;
mod classify;
mod collector;
mod profile;
mod ranges;
mod settings;
mod snapshot;
mod tier;

pub use advisories::{advisories, Advisory, AdvisoryLevel};
pub use classify::classify;
pub use collector::{collect, CloudProbe, MetadataProbe};
pub use profile::{HardwareProfile, UsageRecommendations, Workflow};
pub use ranges::{ranges_for, AdjustableRanges, ParamRange};
pub use settings::{settings_for, Device, GenerationSettings, Precision};
pub use snapshot::{
    AppleSiliconVariant, CapabilitySnapshot, CloudInfo, CloudProvider, CpuFamily, CpuInfo,
    GpuInfo, GpuKind,
};
pub use tier::{tier_of, PerformanceTier};
pub use classify::HardwareCategory;
