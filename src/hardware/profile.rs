//! Hardware profile — the aggregate of everything derived from one
//! snapshot: category, tier, settings, advisories, adjustable ranges, and
//! per-tier usage recommendations. Computed once, held immutably, and
//! optionally persisted as JSON under the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::advisories::{advisories, Advisory};
use super::classify::{classify, HardwareCategory};
use super::ranges::{ranges_for, AdjustableRanges};
use super::settings::{settings_for, GenerationSettings};
use super::snapshot::CapabilitySnapshot;
use super::tier::{tier_of, PerformanceTier};
use crate::error::ProfileStoreError;

/// Suggested working mode for the detected tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workflow {
    ProductionHighQuality,
    ProductionBalanced,
    DevelopmentIteration,
    MvpTesting,
    MinimalViable,
    Incompatible,
}

/// Per-tier usage guidance shown alongside the settings.
#[derive(Debug, Clone, Serialize)]
pub struct UsageRecommendations {
    pub workflow: Workflow,
    pub tips: Vec<&'static str>,
}

fn recommendations_for(tier: PerformanceTier) -> UsageRecommendations {
    match tier {
        PerformanceTier::S => UsageRecommendations {
            workflow: Workflow::ProductionHighQuality,
            tips: vec![
                "High resolutions (1024px+) are no problem on this hardware",
                "Batch processing recommended (4-8 images at once)",
                "Experiment with high step counts (40-50) for maximum quality",
            ],
        },
        PerformanceTier::A => UsageRecommendations {
            workflow: Workflow::ProductionBalanced,
            tips: vec![
                "768px is the sweet spot for this hardware",
                "Batches of 2 images make good use of the GPU",
                "30 steps give an excellent quality/speed balance",
            ],
        },
        PerformanceTier::B => UsageRecommendations {
            workflow: Workflow::DevelopmentIteration,
            tips: vec![
                "Use 512px while iterating, 768px for final renders",
                "Run large jobs overnight or in small batches",
                "20-25 steps are enough for good results",
            ],
        },
        PerformanceTier::C => UsageRecommendations {
            workflow: Workflow::MvpTesting,
            tips: vec![
                "Keep the resolution at 384-512px",
                "Queue important renders for overnight runs",
                "15-20 steps are an acceptable balance",
            ],
        },
        PerformanceTier::D => UsageRecommendations {
            workflow: Workflow::MinimalViable,
            tips: vec![
                "Use 384px at most",
                "Leave jobs running overnight or over a weekend",
                "Generate few variations and pick the best",
            ],
        },
        PerformanceTier::F => UsageRecommendations {
            workflow: Workflow::Incompatible,
            tips: vec![
                "This hardware cannot run the generation pipeline",
                "Consider a client-server setup",
                "Or move to a more recent machine",
            ],
        },
    }
}

/// Everything the rest of the application needs to know about the machine.
/// Serialize-only: the saved profile is a report, never read back.
#[derive(Debug, Clone, Serialize)]
pub struct HardwareProfile {
    pub snapshot: CapabilitySnapshot,
    pub category: HardwareCategory,
    pub tier: PerformanceTier,
    pub settings: GenerationSettings,
    pub advisories: Vec<Advisory>,
    pub ranges: AdjustableRanges,
    pub recommendations: UsageRecommendations,
}

impl HardwareProfile {
    /// Run the full derivation chain over a snapshot.
    pub fn from_snapshot(snapshot: CapabilitySnapshot) -> Self {
        let category = classify(&snapshot);
        let tier = tier_of(category);
        let settings = settings_for(category);
        let advisories = advisories(&snapshot, category);
        let ranges = ranges_for(tier, settings);
        let recommendations = recommendations_for(tier);

        log::info!(
            "[PROFILE] category={:?} tier={} device={}",
            category,
            tier.label(),
            settings.device.as_str()
        );

        Self {
            snapshot,
            category,
            tier,
            settings: settings.clone(),
            advisories,
            ranges,
            recommendations,
        }
    }

    /// Whether the machine can run the generation pipeline at all.
    pub fn is_compatible(&self) -> bool {
        self.tier != PerformanceTier::F
    }

    /// Human-readable multi-line detection report.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let s = &self.settings;
        let cpu = &self.snapshot.cpu;
        let gpu = &self.snapshot.gpu;

        out.push_str(&format!("OS: {}\n", self.snapshot.os));
        out.push_str(&format!(
            "CPU: {} ({:?}, {} cores / {} threads, {})\n",
            cpu.name, cpu.family, cpu.physical_cores, cpu.logical_threads, cpu.architecture
        ));
        out.push_str(&format!("RAM: {:.1} GB\n", self.snapshot.ram_gb));
        if gpu.available {
            out.push_str(&format!(
                "GPU: {} ({:?}, {:.1} GB x{})\n",
                gpu.name.as_deref().unwrap_or("unknown"),
                gpu.kind,
                gpu.memory_gb,
                gpu.device_count
            ));
        } else {
            out.push_str("GPU: none - using CPU\n");
        }
        if self.snapshot.cloud.is_cloud {
            out.push_str(&format!(
                "Cloud: {:?} {}\n",
                self.snapshot.cloud.provider,
                self.snapshot.cloud.instance_type.as_deref().unwrap_or("")
            ));
        }
        out.push_str(&format!(
            "Category: {:?} (tier {})\n",
            self.category,
            self.tier.label()
        ));
        out.push_str(&format!(
            "Recommended: {}px, {} steps, batch {}, {} on {}, ~{}\n",
            s.resolution,
            s.steps,
            s.batch_size,
            s.precision.as_str(),
            s.device.as_str(),
            s.estimated_time_per_render
        ));
        for advisory in &self.advisories {
            out.push_str(&format!(
                "[{:?}] {} -> {}\n",
                advisory.level, advisory.message, advisory.suggestion
            ));
        }
        for tip in &self.recommendations.tips {
            out.push_str(&format!("tip: {tip}\n"));
        }
        out
    }

    /// Save the profile as pretty JSON into `dir`, returning the file path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, ProfileStoreError> {
        std::fs::create_dir_all(dir).map_err(|source| ProfileStoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join("hardware_profile.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|source| ProfileStoreError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("[PROFILE] Saved to {}", path.display());
        Ok(path)
    }

    /// Save under the platform config directory
    /// (e.g. `~/.config/interior-render/` on Linux).
    pub fn save_default(&self) -> Result<PathBuf, ProfileStoreError> {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("interior-render");
        self.save(&dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::snapshot::{
        AppleSiliconVariant, CloudInfo, CpuFamily, CpuInfo, GpuInfo, GpuKind,
    };

    fn m2_max_snapshot() -> CapabilitySnapshot {
        CapabilitySnapshot {
            os: "macos".into(),
            cpu: CpuInfo {
                name: "Apple M2 Max".into(),
                family: CpuFamily::AppleSilicon,
                physical_cores: 12,
                logical_threads: 12,
                architecture: "aarch64".into(),
                supports_required_instructions: true,
                generation: None,
                variant: Some(AppleSiliconVariant::Max),
            },
            gpu: GpuInfo {
                available: true,
                kind: GpuKind::UnifiedMetal,
                name: Some("Apple GPU (Metal)".into()),
                memory_gb: 40.0,
                device_count: 1,
                compute_capability: None,
            },
            ram_gb: 40.0,
            cloud: CloudInfo::not_cloud(),
        }
    }

    fn core2_mac_snapshot() -> CapabilitySnapshot {
        CapabilitySnapshot {
            os: "macos".into(),
            cpu: CpuInfo {
                name: "Intel Core 2 Duo".into(),
                family: CpuFamily::IntelMac,
                physical_cores: 2,
                logical_threads: 2,
                architecture: "x86_64".into(),
                supports_required_instructions: false,
                generation: None,
                variant: None,
            },
            gpu: GpuInfo::none(),
            ram_gb: 4.0,
            cloud: CloudInfo::not_cloud(),
        }
    }

    #[test]
    fn profile_derives_the_full_chain() {
        let profile = HardwareProfile::from_snapshot(m2_max_snapshot());
        assert_eq!(profile.category, HardwareCategory::AppleSiliconMax);
        assert_eq!(profile.tier, PerformanceTier::A);
        assert_eq!(profile.settings.resolution, 768);
        assert_eq!(profile.ranges.resolution.recommended, 768);
        assert_eq!(profile.recommendations.workflow, Workflow::ProductionBalanced);
        assert!(profile.is_compatible());
    }

    #[test]
    fn incompatible_profile_reports_itself() {
        let profile = HardwareProfile::from_snapshot(core2_mac_snapshot());
        assert_eq!(profile.category, HardwareCategory::LegacyMacIncompatible);
        assert!(!profile.is_compatible());
        assert_eq!(profile.settings.resolution, 0);
        assert_eq!(profile.recommendations.workflow, Workflow::Incompatible);
        assert!(profile.ranges.message.is_some());
    }

    #[test]
    fn summary_mentions_the_essentials() {
        let profile = HardwareProfile::from_snapshot(m2_max_snapshot());
        let summary = profile.summary();
        assert!(summary.contains("Apple M2 Max"));
        assert!(summary.contains("tier A"));
        assert!(summary.contains("768px"));
    }

    #[test]
    fn save_writes_valid_json_with_the_key_fields() {
        let profile = HardwareProfile::from_snapshot(m2_max_snapshot());
        let dir = std::env::temp_dir().join(format!(
            "interior-render-test-{}",
            std::process::id()
        ));
        let path = profile.save(&dir).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["category"], "apple_silicon_max");
        assert_eq!(value["tier"], "A");
        assert_eq!(value["settings"]["resolution"], 768);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
