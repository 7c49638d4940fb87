//! Settings resolver — the per-category generation parameter table.
//!
//! One static record per hardware category, resolved by exhaustive lookup.
//! Numbers are tuned per device class: resolutions are multiples of 128 (the
//! generation step later snaps aspect-ratio-resized dimensions to multiples
//! of 8 itself), fp16 only where the device handles it, and the memory
//! optimization flags get more aggressive as the tier drops. Tier-F entries
//! are zeroed and carry an explicit warning string.

use serde::{Deserialize, Serialize};

use super::classify::HardwareCategory;

/// Compute device the generation backend should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cuda,
    Mps,
    Cpu,
}

impl Device {
    pub fn as_str(self) -> &'static str {
        match self {
            Device::Cuda => "cuda",
            Device::Mps => "mps",
            Device::Cpu => "cpu",
        }
    }
}

/// Numeric precision for model weights and activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Fp16,
    Fp32,
}

impl Precision {
    pub fn as_str(self) -> &'static str {
        match self {
            Precision::Fp16 => "fp16",
            Precision::Fp32 => "fp32",
        }
    }
}

/// Complete generation configuration for one hardware category.
///
/// Handed to the image-generation collaborator as-is; nothing here is
/// mutated after resolution. Serialize-only: the table is the source of
/// truth, saved profiles are never read back.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSettings {
    pub device: Device,
    /// Base square resolution in pixels. Always a multiple of 128 for non-F
    /// categories; 0 for tier-F categories.
    pub resolution: u32,
    pub steps: u32,
    pub batch_size: u32,
    pub precision: Precision,
    /// Fused-attention backend (xformers). Only worthwhile on CUDA.
    pub enable_xformers: bool,
    pub enable_attention_slicing: bool,
    pub enable_vae_slicing: bool,
    /// Sequential CPU offload for memory-starved devices.
    pub cpu_offload: bool,
    pub estimated_time_per_render: &'static str,
    pub max_recommended_resolution: u32,
    /// Non-empty exactly for the tier-F categories.
    pub warning: Option<&'static str>,
}

// ── S tier ──────────────────────────────────────────────────────────────

/// A100/V100-class cloud instances.
static CLOUD_GPU_HIGH: GenerationSettings = GenerationSettings {
    device: Device::Cuda,
    resolution: 1024,
    steps: 50,
    batch_size: 8,
    precision: Precision::Fp16,
    enable_xformers: true,
    enable_attention_slicing: false,
    enable_vae_slicing: false,
    cpu_offload: false,
    estimated_time_per_render: "30-60 seconds",
    max_recommended_resolution: 2048,
    warning: None,
};

/// RTX 4090/3090/A5000 class.
static NVIDIA_GPU_HIGH: GenerationSettings = GenerationSettings {
    device: Device::Cuda,
    resolution: 1024,
    steps: 40,
    batch_size: 4,
    precision: Precision::Fp16,
    enable_xformers: true,
    enable_attention_slicing: false,
    enable_vae_slicing: false,
    cpu_offload: false,
    estimated_time_per_render: "1-2 min",
    max_recommended_resolution: 1536,
    warning: None,
};

/// M-series Ultra, or Max with 64 GB+ unified memory.
static APPLE_SILICON_ULTRA: GenerationSettings = GenerationSettings {
    device: Device::Mps,
    resolution: 1024,
    steps: 35,
    batch_size: 4,
    precision: Precision::Fp16,
    enable_xformers: false,
    enable_attention_slicing: false,
    enable_vae_slicing: false,
    cpu_offload: false,
    estimated_time_per_render: "1-3 min",
    max_recommended_resolution: 1536,
    warning: None,
};

// ── A tier ──────────────────────────────────────────────────────────────

/// T4/P100-class cloud instances.
static CLOUD_GPU_MID: GenerationSettings = GenerationSettings {
    device: Device::Cuda,
    resolution: 768,
    steps: 30,
    batch_size: 2,
    precision: Precision::Fp16,
    enable_xformers: true,
    enable_attention_slicing: true,
    enable_vae_slicing: false,
    cpu_offload: false,
    estimated_time_per_render: "2-4 min",
    max_recommended_resolution: 1024,
    warning: None,
};

/// RTX 4070/3070/2080 class.
static NVIDIA_GPU_MID: GenerationSettings = GenerationSettings {
    device: Device::Cuda,
    resolution: 768,
    steps: 30,
    batch_size: 2,
    precision: Precision::Fp16,
    enable_xformers: true,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "2-5 min",
    max_recommended_resolution: 1024,
    warning: None,
};

static APPLE_SILICON_MAX: GenerationSettings = GenerationSettings {
    device: Device::Mps,
    resolution: 768,
    steps: 30,
    batch_size: 2,
    precision: Precision::Fp16,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "3-6 min",
    max_recommended_resolution: 1024,
    warning: None,
};

// ── B tier ──────────────────────────────────────────────────────────────

/// RTX 3060/2060/1660 class.
static NVIDIA_GPU_LOW: GenerationSettings = GenerationSettings {
    device: Device::Cuda,
    resolution: 512,
    steps: 25,
    batch_size: 1,
    precision: Precision::Fp16,
    enable_xformers: true,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "4-8 min",
    max_recommended_resolution: 768,
    warning: None,
};

static APPLE_SILICON_PRO: GenerationSettings = GenerationSettings {
    device: Device::Mps,
    resolution: 512,
    steps: 25,
    batch_size: 1,
    precision: Precision::Fp16,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "5-10 min",
    max_recommended_resolution: 768,
    warning: None,
};

/// 8th-gen+ Intel Macs run on CPU only.
static INTEL_MAC_MODERN: GenerationSettings = GenerationSettings {
    device: Device::Cpu,
    resolution: 512,
    steps: 20,
    batch_size: 1,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "8-15 min",
    max_recommended_resolution: 512,
    warning: None,
};

// ── C tier ──────────────────────────────────────────────────────────────

/// GTX 1050/960 class — fp16 is unreliable this far back.
static NVIDIA_GPU_LEGACY: GenerationSettings = GenerationSettings {
    device: Device::Cuda,
    resolution: 384,
    steps: 20,
    batch_size: 1,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: true,
    estimated_time_per_render: "8-12 min",
    max_recommended_resolution: 512,
    warning: None,
};

/// Base M-series with 8 GB — offload to keep unified memory headroom.
static APPLE_SILICON_BASE: GenerationSettings = GenerationSettings {
    device: Device::Mps,
    resolution: 512,
    steps: 20,
    batch_size: 1,
    precision: Precision::Fp16,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: true,
    estimated_time_per_render: "7-12 min",
    max_recommended_resolution: 768,
    warning: None,
};

static INTEL_MAC_CAPABLE: GenerationSettings = GenerationSettings {
    device: Device::Cpu,
    resolution: 384,
    steps: 15,
    batch_size: 1,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "10-18 min",
    max_recommended_resolution: 512,
    warning: None,
};

static CPU_ONLY_HIGH: GenerationSettings = GenerationSettings {
    device: Device::Cpu,
    resolution: 512,
    steps: 20,
    batch_size: 1,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "10-20 min",
    max_recommended_resolution: 768,
    warning: None,
};

// ── D tier ──────────────────────────────────────────────────────────────

/// K80-class cloud instances.
static CLOUD_GPU_LOW: GenerationSettings = GenerationSettings {
    device: Device::Cuda,
    resolution: 384,
    steps: 15,
    batch_size: 1,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: true,
    estimated_time_per_render: "6-10 min",
    max_recommended_resolution: 512,
    warning: None,
};

static INTEL_MAC_OLD: GenerationSettings = GenerationSettings {
    device: Device::Cpu,
    resolution: 384,
    steps: 12,
    batch_size: 1,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "12-20 min",
    max_recommended_resolution: 384,
    warning: None,
};

static CPU_ONLY_MID: GenerationSettings = GenerationSettings {
    device: Device::Cpu,
    resolution: 384,
    steps: 12,
    batch_size: 1,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: true,
    enable_vae_slicing: true,
    cpu_offload: false,
    estimated_time_per_render: "15-25 min",
    max_recommended_resolution: 384,
    warning: None,
};

// ── F tier ──────────────────────────────────────────────────────────────
// Terminal entries: zeroed numerics plus an explicit warning. The UI renders
// the warning instead of a settings panel.

static LEGACY_MAC_INCOMPATIBLE: GenerationSettings = GenerationSettings {
    device: Device::Cpu,
    resolution: 0,
    steps: 0,
    batch_size: 0,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: false,
    enable_vae_slicing: false,
    cpu_offload: false,
    estimated_time_per_render: "N/A - incompatible",
    max_recommended_resolution: 0,
    warning: Some("Incompatible hardware - requires a CPU with SSSE3/SSE4.2 instructions"),
};

static CPU_ONLY_LOW: GenerationSettings = GenerationSettings {
    device: Device::Cpu,
    resolution: 0,
    steps: 0,
    batch_size: 0,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: false,
    enable_vae_slicing: false,
    cpu_offload: false,
    estimated_time_per_render: "N/A - incompatible",
    max_recommended_resolution: 0,
    warning: Some("Insufficient memory for generation - 16 GB+ RAM recommended"),
};

static INCOMPATIBLE: GenerationSettings = GenerationSettings {
    device: Device::Cpu,
    resolution: 0,
    steps: 0,
    batch_size: 0,
    precision: Precision::Fp32,
    enable_xformers: false,
    enable_attention_slicing: false,
    enable_vae_slicing: false,
    cpu_offload: false,
    estimated_time_per_render: "N/A",
    max_recommended_resolution: 0,
    warning: Some("Unsupported hardware"),
};

/// Resolve the generation settings for a hardware category.
///
/// Exhaustive match — every category has exactly one entry, checked at
/// compile time.
pub fn settings_for(category: HardwareCategory) -> &'static GenerationSettings {
    use HardwareCategory::*;
    match category {
        CloudGpuHigh => &CLOUD_GPU_HIGH,
        CloudGpuMid => &CLOUD_GPU_MID,
        CloudGpuLow => &CLOUD_GPU_LOW,
        NvidiaGpuHigh => &NVIDIA_GPU_HIGH,
        NvidiaGpuMid => &NVIDIA_GPU_MID,
        NvidiaGpuLow => &NVIDIA_GPU_LOW,
        NvidiaGpuLegacy => &NVIDIA_GPU_LEGACY,
        AppleSiliconUltra => &APPLE_SILICON_ULTRA,
        AppleSiliconMax => &APPLE_SILICON_MAX,
        AppleSiliconPro => &APPLE_SILICON_PRO,
        AppleSiliconBase => &APPLE_SILICON_BASE,
        IntelMacModern => &INTEL_MAC_MODERN,
        IntelMacCapable => &INTEL_MAC_CAPABLE,
        IntelMacOld => &INTEL_MAC_OLD,
        LegacyMacIncompatible => &LEGACY_MAC_INCOMPATIBLE,
        CpuOnlyHigh => &CPU_ONLY_HIGH,
        CpuOnlyMid => &CPU_ONLY_MID,
        CpuOnlyLow => &CPU_ONLY_LOW,
        Incompatible => &INCOMPATIBLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::tier::{tier_of, PerformanceTier};

    #[test]
    fn every_category_has_settings() {
        for category in HardwareCategory::ALL {
            let settings = settings_for(category);
            assert!(!settings.estimated_time_per_render.is_empty());
        }
    }

    #[test]
    fn non_f_resolutions_are_positive_multiples_of_128() {
        for category in HardwareCategory::ALL {
            if tier_of(category) == PerformanceTier::F {
                continue;
            }
            let settings = settings_for(category);
            assert!(settings.resolution > 0, "{category:?}");
            assert_eq!(settings.resolution % 128, 0, "{category:?}");
        }
    }

    #[test]
    fn f_tier_entries_are_zeroed_with_warnings() {
        for category in HardwareCategory::ALL {
            let settings = settings_for(category);
            if tier_of(category) == PerformanceTier::F {
                assert_eq!(settings.resolution, 0, "{category:?}");
                assert_eq!(settings.steps, 0, "{category:?}");
                assert_eq!(settings.batch_size, 0, "{category:?}");
                assert!(
                    settings.warning.map_or(false, |w| !w.is_empty()),
                    "{category:?} must carry a warning"
                );
            } else {
                assert!(settings.warning.is_none(), "{category:?}");
            }
        }
    }

    #[test]
    fn fp16_only_on_gpu_devices() {
        for category in HardwareCategory::ALL {
            let settings = settings_for(category);
            if settings.precision == Precision::Fp16 {
                assert_ne!(settings.device, Device::Cpu, "{category:?}");
            }
        }
    }

    #[test]
    fn xformers_only_on_cuda() {
        for category in HardwareCategory::ALL {
            let settings = settings_for(category);
            if settings.enable_xformers {
                assert_eq!(settings.device, Device::Cuda, "{category:?}");
            }
        }
    }

    #[test]
    fn base_resolution_never_exceeds_max_recommended() {
        for category in HardwareCategory::ALL {
            let settings = settings_for(category);
            assert!(
                settings.resolution <= settings.max_recommended_resolution
                    || settings.max_recommended_resolution == 0,
                "{category:?}"
            );
        }
    }

    #[test]
    fn top_cloud_entry_is_batch_8_at_1024() {
        let s = settings_for(HardwareCategory::CloudGpuHigh);
        assert_eq!(s.device, Device::Cuda);
        assert_eq!(s.resolution, 1024);
        assert_eq!(s.steps, 50);
        assert_eq!(s.batch_size, 8);
        assert_eq!(s.precision, Precision::Fp16);
    }
}
