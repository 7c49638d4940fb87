//! Hardware classifier — maps a capability snapshot to a hardware category.
//!
//! Total and deterministic: unrecognized combinations fall through to
//! `Incompatible`, never an error. Decision order is significant and
//! first-match-wins: cloud CUDA, local CUDA, Apple Silicon, Intel Mac,
//! generic CPU-only. GPU checks deliberately precede the Apple-Silicon
//! check, so a Mac that reports a discrete CUDA device classifies through
//! the NVIDIA branch.

use serde::{Deserialize, Serialize};

use super::snapshot::{AppleSiliconVariant, CapabilitySnapshot, CpuFamily, GpuKind};

/// Fine-grained hardware bucket. This is the key for settings lookup; the
/// coarser S–F tier is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareCategory {
    // Cloud instances with discrete NVIDIA GPUs (A100/V100 down to K80).
    CloudGpuHigh,
    CloudGpuMid,
    CloudGpuLow,
    // Local NVIDIA GPUs (RTX 4090 down to GTX 1050 class).
    NvidiaGpuHigh,
    NvidiaGpuMid,
    NvidiaGpuLow,
    NvidiaGpuLegacy,
    // Apple Silicon, bucketed by variant and unified memory.
    AppleSiliconUltra,
    AppleSiliconMax,
    AppleSiliconPro,
    AppleSiliconBase,
    // Intel Macs, bucketed by Core generation.
    IntelMacModern,
    IntelMacCapable,
    IntelMacOld,
    /// Intel Mac without SSSE3/SSE4.2 — terminal, tier F.
    LegacyMacIncompatible,
    // Generic CPU-only machines, bucketed by RAM.
    CpuOnlyHigh,
    CpuOnlyMid,
    CpuOnlyLow,
    /// Fallthrough for anything else — terminal, tier F.
    Incompatible,
}

impl HardwareCategory {
    /// Every category, in declaration order. Tests iterate this to prove the
    /// tier and settings tables are exhaustive.
    pub const ALL: [HardwareCategory; 19] = [
        HardwareCategory::CloudGpuHigh,
        HardwareCategory::CloudGpuMid,
        HardwareCategory::CloudGpuLow,
        HardwareCategory::NvidiaGpuHigh,
        HardwareCategory::NvidiaGpuMid,
        HardwareCategory::NvidiaGpuLow,
        HardwareCategory::NvidiaGpuLegacy,
        HardwareCategory::AppleSiliconUltra,
        HardwareCategory::AppleSiliconMax,
        HardwareCategory::AppleSiliconPro,
        HardwareCategory::AppleSiliconBase,
        HardwareCategory::IntelMacModern,
        HardwareCategory::IntelMacCapable,
        HardwareCategory::IntelMacOld,
        HardwareCategory::LegacyMacIncompatible,
        HardwareCategory::CpuOnlyHigh,
        HardwareCategory::CpuOnlyMid,
        HardwareCategory::CpuOnlyLow,
        HardwareCategory::Incompatible,
    ];
}

/// Classify a snapshot into its hardware category.
///
/// First match wins; every branch threshold comes from observed device
/// classes (16 GB VRAM ≈ A100/4090 class, 8 GB ≈ T4/3070 class, ...).
pub fn classify(snapshot: &CapabilitySnapshot) -> HardwareCategory {
    let cpu = &snapshot.cpu;
    let gpu = &snapshot.gpu;

    // 1. Cloud instance with a discrete CUDA GPU.
    if snapshot.cloud.is_cloud && gpu.available && gpu.kind == GpuKind::DiscreteCuda {
        return if gpu.memory_gb >= 16.0 {
            HardwareCategory::CloudGpuHigh
        } else if gpu.memory_gb >= 8.0 {
            HardwareCategory::CloudGpuMid
        } else {
            HardwareCategory::CloudGpuLow
        };
    }

    // 2. Local discrete CUDA GPU (gaming/workstation PC).
    if gpu.available && gpu.kind == GpuKind::DiscreteCuda {
        return if gpu.memory_gb >= 16.0 {
            HardwareCategory::NvidiaGpuHigh
        } else if gpu.memory_gb >= 8.0 {
            HardwareCategory::NvidiaGpuMid
        } else if gpu.memory_gb >= 4.0 {
            HardwareCategory::NvidiaGpuLow
        } else {
            HardwareCategory::NvidiaGpuLegacy
        };
    }

    // 3. Apple Silicon — variant marker and unified memory jointly decide.
    if cpu.family == CpuFamily::AppleSilicon {
        let variant = cpu.variant.unwrap_or(AppleSiliconVariant::Base);
        let ram = snapshot.ram_gb;

        return if variant == AppleSiliconVariant::Ultra
            || (variant == AppleSiliconVariant::Max && ram >= 64.0)
        {
            HardwareCategory::AppleSiliconUltra
        } else if variant == AppleSiliconVariant::Max || ram >= 32.0 {
            HardwareCategory::AppleSiliconMax
        } else if variant == AppleSiliconVariant::Pro || ram >= 16.0 {
            HardwareCategory::AppleSiliconPro
        } else {
            HardwareCategory::AppleSiliconBase
        };
    }

    // 4. Intel Mac — instruction gate first, then Core generation.
    if cpu.family == CpuFamily::IntelMac {
        if !cpu.supports_required_instructions {
            return HardwareCategory::LegacyMacIncompatible;
        }
        return match cpu.generation {
            Some(gen) if gen >= 8 => HardwareCategory::IntelMacModern,
            Some(gen) if gen >= 4 => HardwareCategory::IntelMacCapable,
            Some(_) => HardwareCategory::IntelMacOld,
            // Generation unparseable — assume a capable mid-2010s machine.
            None => HardwareCategory::IntelMacCapable,
        };
    }

    // 5. Generic CPU-only (Linux/Windows, or unknown family).
    if cpu.supports_required_instructions {
        return if snapshot.ram_gb >= 32.0 {
            HardwareCategory::CpuOnlyHigh
        } else if snapshot.ram_gb >= 16.0 {
            HardwareCategory::CpuOnlyMid
        } else {
            HardwareCategory::CpuOnlyLow
        };
    }

    HardwareCategory::Incompatible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::snapshot::{CloudInfo, CpuInfo, GpuInfo};
    use crate::hardware::tier::{tier_of, PerformanceTier};

    fn cpu(family: CpuFamily) -> CpuInfo {
        CpuInfo {
            name: "test cpu".into(),
            family,
            physical_cores: 4,
            logical_threads: 8,
            architecture: "x86_64".into(),
            supports_required_instructions: true,
            generation: None,
            variant: None,
        }
    }

    fn cuda_gpu(memory_gb: f64) -> GpuInfo {
        GpuInfo {
            available: true,
            kind: GpuKind::DiscreteCuda,
            name: Some("NVIDIA test".into()),
            memory_gb,
            device_count: 1,
            compute_capability: Some("8.6".into()),
        }
    }

    fn snapshot(cpu: CpuInfo, gpu: GpuInfo, ram_gb: f64, is_cloud: bool) -> CapabilitySnapshot {
        CapabilitySnapshot {
            os: "linux".into(),
            cpu,
            gpu,
            ram_gb,
            cloud: if is_cloud {
                CloudInfo {
                    is_cloud: true,
                    provider: Some(crate::hardware::snapshot::CloudProvider::Gcp),
                    instance_type: None,
                }
            } else {
                CloudInfo::not_cloud()
            },
        }
    }

    #[test]
    fn cloud_cuda_buckets_by_vram() {
        for (vram, expected) in [
            (24.0, HardwareCategory::CloudGpuHigh),
            (16.0, HardwareCategory::CloudGpuHigh),
            (12.0, HardwareCategory::CloudGpuMid),
            (8.0, HardwareCategory::CloudGpuMid),
            (4.0, HardwareCategory::CloudGpuLow),
        ] {
            let snap = snapshot(cpu(CpuFamily::GenericX86), cuda_gpu(vram), 32.0, true);
            assert_eq!(classify(&snap), expected, "vram={vram}");
        }
    }

    #[test]
    fn local_cuda_buckets_by_vram() {
        for (vram, expected) in [
            (24.0, HardwareCategory::NvidiaGpuHigh),
            (10.0, HardwareCategory::NvidiaGpuMid),
            (6.0, HardwareCategory::NvidiaGpuLow),
            (2.0, HardwareCategory::NvidiaGpuLegacy),
        ] {
            let snap = snapshot(cpu(CpuFamily::GenericX86), cuda_gpu(vram), 32.0, false);
            assert_eq!(classify(&snap), expected, "vram={vram}");
        }
    }

    #[test]
    fn local_cuda_tier_never_decreases_with_more_vram() {
        let mut last = PerformanceTier::F;
        for vram in [3.0, 5.0, 9.0, 17.0] {
            let snap = snapshot(cpu(CpuFamily::GenericX86), cuda_gpu(vram), 32.0, false);
            let tier = tier_of(classify(&snap));
            assert!(tier >= last, "tier regressed at {vram} GB");
            last = tier;
        }
    }

    #[test]
    fn apple_silicon_variant_and_ram_jointly_bucket() {
        use AppleSiliconVariant::*;
        for (variant, ram, expected) in [
            (Some(Ultra), 64.0, HardwareCategory::AppleSiliconUltra),
            (Some(Max), 64.0, HardwareCategory::AppleSiliconUltra),
            (Some(Max), 40.0, HardwareCategory::AppleSiliconMax),
            (Some(Pro), 36.0, HardwareCategory::AppleSiliconMax), // ram >= 32 wins
            (Some(Pro), 18.0, HardwareCategory::AppleSiliconPro),
            (None, 16.0, HardwareCategory::AppleSiliconPro),
            (Some(Base), 8.0, HardwareCategory::AppleSiliconBase),
            (None, 8.0, HardwareCategory::AppleSiliconBase),
        ] {
            let mut c = cpu(CpuFamily::AppleSilicon);
            c.variant = variant;
            let mut gpu = GpuInfo::none();
            gpu.available = true;
            gpu.kind = GpuKind::UnifiedMetal;
            gpu.memory_gb = ram;
            let snap = snapshot(c, gpu, ram, false);
            assert_eq!(classify(&snap), expected, "variant={variant:?} ram={ram}");
        }
    }

    // Scenario pinned by the requirements: M-series "Max" with 40 GB lands in
    // the Max bucket (tier A) even though the Ultra condition needs 64 GB.
    #[test]
    fn m_series_max_40gb_is_max_tier_a() {
        let mut c = cpu(CpuFamily::AppleSilicon);
        c.variant = Some(AppleSiliconVariant::Max);
        let mut gpu = GpuInfo::none();
        gpu.available = true;
        gpu.kind = GpuKind::UnifiedMetal;
        gpu.memory_gb = 40.0;
        let snap = snapshot(c, gpu, 40.0, false);
        let category = classify(&snap);
        assert_eq!(category, HardwareCategory::AppleSiliconMax);
        assert_eq!(tier_of(category), PerformanceTier::A);
    }

    #[test]
    fn egpu_cuda_on_apple_hardware_takes_the_nvidia_branch() {
        // Declared precedence: GPU checks run before the Apple-Silicon check.
        let mut c = cpu(CpuFamily::AppleSilicon);
        c.variant = Some(AppleSiliconVariant::Ultra);
        let snap = snapshot(c, cuda_gpu(10.0), 64.0, false);
        assert_eq!(classify(&snap), HardwareCategory::NvidiaGpuMid);
    }

    #[test]
    fn intel_mac_without_required_instructions_is_terminal() {
        let mut c = cpu(CpuFamily::IntelMac);
        c.supports_required_instructions = false;
        c.generation = Some(9); // ignored — the gate comes first
        let snap = snapshot(c, GpuInfo::none(), 64.0, false);
        assert_eq!(classify(&snap), HardwareCategory::LegacyMacIncompatible);
    }

    #[test]
    fn intel_mac_buckets_by_generation() {
        for (gen, expected) in [
            (Some(10), HardwareCategory::IntelMacModern),
            (Some(8), HardwareCategory::IntelMacModern),
            (Some(6), HardwareCategory::IntelMacCapable),
            (Some(4), HardwareCategory::IntelMacCapable),
            (Some(3), HardwareCategory::IntelMacOld),
            (None, HardwareCategory::IntelMacCapable),
        ] {
            let mut c = cpu(CpuFamily::IntelMac);
            c.generation = gen;
            let snap = snapshot(c, GpuInfo::none(), 16.0, false);
            assert_eq!(classify(&snap), expected, "gen={gen:?}");
        }
    }

    #[test]
    fn cpu_only_buckets_by_ram() {
        for (ram, expected) in [
            (64.0, HardwareCategory::CpuOnlyHigh),
            (32.0, HardwareCategory::CpuOnlyHigh),
            (16.0, HardwareCategory::CpuOnlyMid),
            (8.0, HardwareCategory::CpuOnlyLow),
            (4.0, HardwareCategory::CpuOnlyLow),
        ] {
            let snap = snapshot(cpu(CpuFamily::GenericX86), GpuInfo::none(), ram, false);
            assert_eq!(classify(&snap), expected, "ram={ram}");
        }
    }

    #[test]
    fn unsupported_instructions_without_gpu_is_incompatible() {
        let mut c = cpu(CpuFamily::GenericX86);
        c.supports_required_instructions = false;
        let snap = snapshot(c, GpuInfo::none(), 128.0, false);
        assert_eq!(classify(&snap), HardwareCategory::Incompatible);
        assert_eq!(tier_of(classify(&snap)), PerformanceTier::F);
    }

    #[test]
    fn cloud_flag_without_cuda_falls_through_to_cpu_branches() {
        // A cloud box with no GPU should still classify by CPU/RAM.
        let snap = snapshot(cpu(CpuFamily::GenericX86), GpuInfo::none(), 32.0, true);
        assert_eq!(classify(&snap), HardwareCategory::CpuOnlyHigh);
    }

    #[test]
    fn classify_is_total_over_enum_combinations() {
        // Fuzz every enum axis × RAM bucket; classify must always land in ALL.
        let families = [
            CpuFamily::AppleSilicon,
            CpuFamily::IntelMac,
            CpuFamily::GenericX86,
            CpuFamily::Unknown,
        ];
        let kinds = [GpuKind::None, GpuKind::DiscreteCuda, GpuKind::UnifiedMetal];
        let variants = [
            None,
            Some(AppleSiliconVariant::Base),
            Some(AppleSiliconVariant::Pro),
            Some(AppleSiliconVariant::Max),
            Some(AppleSiliconVariant::Ultra),
        ];

        for family in families {
            for kind in kinds {
                for variant in variants {
                    for supports in [true, false] {
                        for is_cloud in [true, false] {
                            for ram in [2.0, 8.0, 16.0, 32.0, 64.0] {
                                for vram in [0.0, 3.0, 6.0, 12.0, 24.0] {
                                    let mut c = cpu(family);
                                    c.variant = variant;
                                    c.supports_required_instructions = supports;
                                    let gpu = GpuInfo {
                                        available: kind != GpuKind::None,
                                        kind,
                                        name: None,
                                        memory_gb: vram,
                                        device_count: 1,
                                        compute_capability: None,
                                    };
                                    let snap = snapshot(c, gpu, ram, is_cloud);
                                    let category = classify(&snap);
                                    assert!(HardwareCategory::ALL.contains(&category));
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
