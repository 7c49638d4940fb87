//! Advisory engine — user-facing notes derived from the snapshot and the
//! resolved category.
//!
//! Rules are independent and evaluated in a fixed order; the output order
//! matches the rule order and duplicates are not collapsed. The "error" path
//! for incompatible hardware is represented here as a critical advisory, not
//! as a Rust error.

use serde::{Deserialize, Serialize};

use super::classify::HardwareCategory;
use super::snapshot::{CapabilitySnapshot, GpuKind};
use super::tier::{tier_of, PerformanceTier};

/// Severity of an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryLevel {
    Info,
    Warning,
    Critical,
}

/// One user-facing advisory: what is wrong (or notable), and what to do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub message: String,
    pub suggestion: String,
}

/// Produce the advisory list for a snapshot and its resolved category.
///
/// Deterministic; may be empty. Recomputed on every detection, never
/// persisted.
pub fn advisories(snapshot: &CapabilitySnapshot, category: HardwareCategory) -> Vec<Advisory> {
    let tier = tier_of(category);
    let mut out = Vec::new();

    // Incompatible hardware: one critical advisory, with the instruction-set
    // case called out specifically.
    if tier == PerformanceTier::F {
        if !snapshot.cpu.supports_required_instructions {
            out.push(Advisory {
                level: AdvisoryLevel::Critical,
                message: format!(
                    "Incompatible CPU: {} lacks the SSSE3/SSE4.2 instructions required by the inference runtime.",
                    snapshot.cpu.name
                ),
                suggestion: "Use a client-server setup, or move to hardware newer than 2010."
                    .to_string(),
            });
        } else {
            out.push(Advisory {
                level: AdvisoryLevel::Critical,
                message: "Hardware detected as incompatible.".to_string(),
                suggestion: "Check the minimum system requirements.".to_string(),
            });
        }
    }

    // Low RAM.
    if snapshot.ram_gb < 8.0 {
        out.push(Advisory {
            level: AdvisoryLevel::Warning,
            message: format!(
                "Insufficient RAM: {:.1} GB (16 GB+ recommended)",
                snapshot.ram_gb
            ),
            suggestion: "Close other applications during generation, or upgrade the RAM."
                .to_string(),
        });
    } else if snapshot.ram_gb < 16.0
        && matches!(tier, PerformanceTier::A | PerformanceTier::B)
    {
        out.push(Advisory {
            level: AdvisoryLevel::Info,
            message: format!(
                "Limited RAM: {:.1} GB. Optimal performance needs 16 GB+",
                snapshot.ram_gb
            ),
            suggestion: "Lower the batch size or resolution if you hit out-of-memory errors."
                .to_string(),
        });
    }

    // CUDA present: suggest the fused-attention acceleration library.
    if snapshot.gpu.available && snapshot.gpu.kind == GpuKind::DiscreteCuda {
        out.push(Advisory {
            level: AdvisoryLevel::Info,
            message: "Install the xformers acceleration library to speed up generation by up to 30%".to_string(),
            suggestion: "Enable the fused-attention backend in the generation environment."
                .to_string(),
        });
    }

    // Low tiers: set expectations about generation times.
    if matches!(tier, PerformanceTier::C | PerformanceTier::D) {
        out.push(Advisory {
            level: AdvisoryLevel::Info,
            message: format!(
                "Hardware detected as tier {} - expect longer generation times",
                tier.label()
            ),
            suggestion: "Use low resolutions (384-512px) and few steps (12-20) for a better experience.".to_string(),
        });
    }

    out
}
