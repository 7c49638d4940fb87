//! Lighting domain — the static profile catalog and the prompt fragments
//! built from it. The composed fragment is concatenated downstream with the
//! material/style prompt owned by the preset collaborator.

mod catalog;
mod composer;

pub use catalog::{
    all_profiles, find_profile, profiles_in, ColorTemperature, Direction, Intensity,
    LightingProfile, ProfileCategory, TimeOfDay,
};
pub use composer::{build_prompt, metadata, recommend};
