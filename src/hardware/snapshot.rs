//! Capability snapshot — the one-shot, immutable record of detected machine
//! capabilities. Sole input to all classification logic.
//!
//! Every field that can be undetectable has an explicit "unknown" sentinel
//! (`CpuFamily::Unknown`, `GpuKind::None`, `None` options) so the classifier
//! never has to deal with missing data, only conservative data.

use serde::{Deserialize, Serialize};

/// CPU family, the coarse axis of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuFamily {
    /// M-series unified-memory Macs.
    AppleSilicon,
    /// Pre-2020 Intel Macs.
    IntelMac,
    /// Generic Linux/Windows x86.
    GenericX86,
    /// Could not be determined — routed to the most conservative branch.
    Unknown,
}

/// Apple Silicon variant marker parsed from the CPU brand string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppleSiliconVariant {
    Base,
    Pro,
    Max,
    Ultra,
}

/// Detected CPU facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Marketing name, e.g. "Apple M2 Max" or "Intel(R) Core(TM) i7-4770".
    pub name: String,
    pub family: CpuFamily,
    pub physical_cores: u32,
    pub logical_threads: u32,
    /// Architecture string from the OS (x86_64, aarch64, ...).
    pub architecture: String,
    /// SSSE3 + SSE4.2 gate required by the inference runtime. The single
    /// hard-compatibility gate: false forces tier F on non-GPU paths.
    pub supports_required_instructions: bool,
    /// Intel Core generation (4 for i7-4770). None when unparseable.
    pub generation: Option<u32>,
    /// Pro/Max/Ultra marker for Apple Silicon. None on other families.
    pub variant: Option<AppleSiliconVariant>,
}

/// GPU kind — only the kinds the generation backend can actually target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuKind {
    None,
    /// NVIDIA discrete GPU reachable via CUDA.
    DiscreteCuda,
    /// Apple unified-memory GPU reachable via Metal.
    UnifiedMetal,
}

/// Detected GPU facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuInfo {
    pub available: bool,
    pub kind: GpuKind,
    pub name: Option<String>,
    /// VRAM for discrete GPUs; total system RAM for unified memory.
    pub memory_gb: f64,
    pub device_count: u32,
    /// CUDA compute capability, e.g. "8.6". None for non-CUDA devices.
    pub compute_capability: Option<String>,
}

impl GpuInfo {
    /// Sentinel for "no usable GPU detected".
    pub fn none() -> Self {
        Self {
            available: false,
            kind: GpuKind::None,
            name: None,
            memory_gb: 0.0,
            device_count: 0,
            compute_capability: None,
        }
    }
}

/// Cloud provider, when detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Gcp,
    Azure,
}

/// Cloud environment facts. Probe failures degrade to `not_cloud()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudInfo {
    pub is_cloud: bool,
    pub provider: Option<CloudProvider>,
    pub instance_type: Option<String>,
}

impl CloudInfo {
    pub fn not_cloud() -> Self {
        Self {
            is_cloud: false,
            provider: None,
            instance_type: None,
        }
    }
}

/// Full capability snapshot. Captured once at startup; every derived value
/// (category, tier, settings, ranges, advisories) is a pure function of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilitySnapshot {
    pub os: String,
    pub cpu: CpuInfo,
    pub gpu: GpuInfo,
    pub ram_gb: f64,
    pub cloud: CloudInfo,
}
