//! Interior Render — hardware-tiered configuration engine.
//!
//! Converts a one-shot machine capability snapshot into a concrete set of
//! generation parameters for a diffusion-based interior render pipeline:
//! - Hardware domain (hardware/): snapshot collection, classification into
//!   fine-grained categories, S–F performance tiers, per-category settings,
//!   advisories, and user-adjustable parameter ranges.
//! - Lighting domain (lighting/): static catalog of lighting profiles and the
//!   prompt fragments built from them.
//!
//! The actual image generation, edge detection, persistence, and UI are
//! external collaborators — they consume the records produced here and are
//! never called from this crate.

pub mod error;
pub mod hardware;
pub mod lighting;

pub use error::ProfileStoreError;
pub use hardware::{
    advisories, classify, collect, ranges_for, settings_for, tier_of, Advisory, AdvisoryLevel,
    CapabilitySnapshot, CloudProbe, HardwareCategory, HardwareProfile, MetadataProbe,
    PerformanceTier,
};
pub use lighting::{build_prompt, find_profile, recommend, LightingProfile};
