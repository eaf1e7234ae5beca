//! Orchestrator CPU/memory limits to provider vCPU and MB.

use hyperlet_core::config::ResourceDefaults;
use hyperlet_core::provider::PodResource;

use crate::model::ResourceLimits;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Translate limits into a pod resource request.
///
/// Unset or non-positive limits fall back to `defaults`. CPU rounds half up
/// and never goes below one vCPU; memory truncates to whole megabytes.
///
/// Memory has no floor: a positive limit under 1 MiB truncates to 0 MB.
pub fn translate_resources(limits: &ResourceLimits, defaults: &ResourceDefaults) -> PodResource {
    let vcpu = match limits.cpu {
        Some(cpu) if cpu > 0.0 => ((cpu + 0.5).floor() as i32).max(1),
        _ => defaults.vcpu,
    };

    let memory = match limits.memory {
        Some(bytes) if bytes > 0.0 => (bytes / BYTES_PER_MB).floor() as i32,
        _ => defaults.memory_mb,
    };

    PodResource { vcpu, memory }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(cpu: Option<f64>, memory: Option<f64>) -> PodResource {
        translate_resources(&ResourceLimits { cpu, memory }, &ResourceDefaults::default())
    }

    #[test]
    fn test_unset_limits_use_defaults() {
        assert_eq!(translate(None, None), PodResource { vcpu: 1, memory: 128 });
    }

    #[test]
    fn test_small_cpu_clamped_to_one() {
        assert_eq!(translate(Some(0.4), Some(0.0)), PodResource { vcpu: 1, memory: 128 });
    }

    #[test]
    fn test_cpu_rounds_half_up() {
        assert_eq!(translate(Some(2.6), None).vcpu, 3);
        assert_eq!(translate(Some(2.5), None).vcpu, 3);
        assert_eq!(translate(Some(2.49), None).vcpu, 2);
        assert_eq!(translate(Some(0.5), None).vcpu, 1);
    }

    #[test]
    fn test_memory_truncates_to_megabytes() {
        let mb = 1024.0 * 1024.0;
        assert_eq!(translate(Some(2.6), Some(300.0 * mb)), PodResource { vcpu: 3, memory: 300 });
        assert_eq!(translate(None, Some(300.0 * mb + 1023.0)).memory, 300);
    }

    #[test]
    fn test_memory_below_one_megabyte_truncates_to_zero() {
        assert_eq!(translate(None, Some(1000.0)).memory, 0);
    }

    #[test]
    fn test_negative_limits_use_defaults() {
        assert_eq!(translate(Some(-1.0), Some(-5.0)), PodResource { vcpu: 1, memory: 128 });
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = ResourceDefaults { vcpu: 2, memory_mb: 512 };
        let resource = translate_resources(&ResourceLimits::default(), &defaults);
        assert_eq!(resource, PodResource { vcpu: 2, memory: 512 });
    }
}
