//! Device capability detection
//!
//! The engine never sniffs its runtime. Instead the host hands it an
//! [`Environment`] at construction time:
//!
//! - [`HeadlessEnvironment`] for servers, tests and pre-rendering. Always
//!   resolves to [`DeviceCapabilities::HEADLESS`].
//! - [`HostEnvironment`] for interactive hosts, filled with whatever raw
//!   signals the UI runtime exposes (backdrop-filter probe, reduced-motion
//!   preference, device memory, network type).
//!
//! Detection runs once per engine. Capabilities that change mid-session
//! (e.g. the user toggling reduced motion) are not picked up.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Coarse device performance class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Effective network connection type as reported by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
}

impl NetworkType {
    /// Parse the `effectiveType` naming (`slow-2g`, `2g`, `3g`, `4g`)
    pub fn from_effective_type(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "slow-2g" => Some(NetworkType::Slow2g),
            "2g" => Some(NetworkType::TwoG),
            "3g" => Some(NetworkType::ThreeG),
            "4g" => Some(NetworkType::FourG),
            _ => None,
        }
    }
}

/// Snapshot of what the current device can render well
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCapabilities {
    pub supports_backdrop_filter: bool,
    pub performance_level: PerformanceLevel,
    pub reduced_motion: bool,
}

impl DeviceCapabilities {
    /// Deterministic snapshot for non-interactive environments
    pub const HEADLESS: DeviceCapabilities = DeviceCapabilities {
        supports_backdrop_filter: true,
        performance_level: PerformanceLevel::Medium,
        reduced_motion: false,
    };

    pub fn is_low_performance(&self) -> bool {
        self.performance_level == PerformanceLevel::Low
    }
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self::HEADLESS
    }
}

/// Source of raw capability signals
///
/// Every probe may answer `None` when the host cannot tell; detection then
/// falls back to the headless answer for that signal.
pub trait Environment: Send + Sync {
    /// Whether the host is interactive at all; headless hosts skip probing
    fn is_interactive(&self) -> bool;

    /// Result of a `backdrop-filter` feature probe
    fn supports_backdrop_filter(&self) -> Option<bool>;

    /// `prefers-reduced-motion: reduce`
    fn prefers_reduced_motion(&self) -> Option<bool>;

    /// Approximate device memory in gigabytes
    fn device_memory_gb(&self) -> Option<f32>;

    /// Effective network connection type
    fn network_type(&self) -> Option<NetworkType>;
}

/// Environment with no device to probe
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessEnvironment;

impl Environment for HeadlessEnvironment {
    fn is_interactive(&self) -> bool {
        false
    }

    fn supports_backdrop_filter(&self) -> Option<bool> {
        None
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        None
    }

    fn device_memory_gb(&self) -> Option<f32> {
        None
    }

    fn network_type(&self) -> Option<NetworkType> {
        None
    }
}

/// Signals collected by an interactive host runtime
///
/// ```rust
/// use vitrine_glass::capabilities::{detect_device_capabilities, HostEnvironment, PerformanceLevel};
///
/// let env = HostEnvironment::new()
///     .backdrop_filter(false)
///     .device_memory_gb(2.0);
///
/// let caps = detect_device_capabilities(&env);
/// assert!(!caps.supports_backdrop_filter);
/// assert_eq!(caps.performance_level, PerformanceLevel::Low);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostEnvironment {
    pub backdrop_filter: Option<bool>,
    pub reduced_motion: Option<bool>,
    pub device_memory_gb: Option<f32>,
    pub network: Option<NetworkType>,
}

impl HostEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backdrop_filter(mut self, supported: bool) -> Self {
        self.backdrop_filter = Some(supported);
        self
    }

    pub fn reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = Some(reduced);
        self
    }

    pub fn device_memory_gb(mut self, gigabytes: f32) -> Self {
        self.device_memory_gb = Some(gigabytes);
        self
    }

    pub fn network(mut self, network: NetworkType) -> Self {
        self.network = Some(network);
        self
    }
}

impl Environment for HostEnvironment {
    fn is_interactive(&self) -> bool {
        true
    }

    fn supports_backdrop_filter(&self) -> Option<bool> {
        self.backdrop_filter
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.reduced_motion
    }

    fn device_memory_gb(&self) -> Option<f32> {
        self.device_memory_gb
    }

    fn network_type(&self) -> Option<NetworkType> {
        self.network
    }
}

/// Below this much memory the device is classified as low performance
pub const LOW_MEMORY_GB: f32 = 4.0;

/// At or above this much memory the device is classified as high performance
pub const HIGH_MEMORY_GB: f32 = 8.0;

/// Take a capability snapshot from `env`
pub fn detect_device_capabilities(env: &dyn Environment) -> DeviceCapabilities {
    if !env.is_interactive() {
        debug!("headless environment, using default device capabilities");
        return DeviceCapabilities::HEADLESS;
    }

    let capabilities = DeviceCapabilities {
        supports_backdrop_filter: env
            .supports_backdrop_filter()
            .unwrap_or(DeviceCapabilities::HEADLESS.supports_backdrop_filter),
        performance_level: classify_performance(env.device_memory_gb(), env.network_type()),
        reduced_motion: env
            .prefers_reduced_motion()
            .unwrap_or(DeviceCapabilities::HEADLESS.reduced_motion),
    };

    debug!(
        "detected device capabilities: backdrop_filter={} performance={:?} reduced_motion={}",
        capabilities.supports_backdrop_filter,
        capabilities.performance_level,
        capabilities.reduced_motion
    );

    capabilities
}

/// Memory signal wins when it is decisive, then the network signal
pub fn classify_performance(
    memory_gb: Option<f32>,
    network: Option<NetworkType>,
) -> PerformanceLevel {
    match memory_gb {
        Some(memory) if memory < LOW_MEMORY_GB => return PerformanceLevel::Low,
        Some(memory) if memory >= HIGH_MEMORY_GB => return PerformanceLevel::High,
        _ => {}
    }

    match network {
        Some(NetworkType::Slow2g | NetworkType::TwoG) => PerformanceLevel::Low,
        Some(NetworkType::FourG) => PerformanceLevel::High,
        Some(NetworkType::ThreeG) | None => PerformanceLevel::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_defaults() {
        let caps = detect_device_capabilities(&HeadlessEnvironment);
        assert_eq!(caps, DeviceCapabilities::HEADLESS);
        assert!(caps.supports_backdrop_filter);
        assert_eq!(caps.performance_level, PerformanceLevel::Medium);
        assert!(!caps.reduced_motion);
    }

    #[test]
    fn test_host_without_signals_matches_headless() {
        let caps = detect_device_capabilities(&HostEnvironment::new());
        assert_eq!(caps, DeviceCapabilities::HEADLESS);
    }

    #[test]
    fn test_host_signals() {
        let env = HostEnvironment::new()
            .backdrop_filter(false)
            .reduced_motion(true)
            .network(NetworkType::FourG);

        let caps = detect_device_capabilities(&env);
        assert!(!caps.supports_backdrop_filter);
        assert!(caps.reduced_motion);
        assert_eq!(caps.performance_level, PerformanceLevel::High);
    }

    #[test]
    fn test_memory_takes_precedence() {
        assert_eq!(
            classify_performance(Some(2.0), Some(NetworkType::FourG)),
            PerformanceLevel::Low
        );
        assert_eq!(
            classify_performance(Some(16.0), Some(NetworkType::Slow2g)),
            PerformanceLevel::High
        );
    }

    #[test]
    fn test_network_fallback() {
        assert_eq!(
            classify_performance(Some(4.0), Some(NetworkType::TwoG)),
            PerformanceLevel::Low
        );
        assert_eq!(
            classify_performance(None, Some(NetworkType::FourG)),
            PerformanceLevel::High
        );
        assert_eq!(
            classify_performance(None, Some(NetworkType::ThreeG)),
            PerformanceLevel::Medium
        );
        assert_eq!(classify_performance(None, None), PerformanceLevel::Medium);
    }

    #[test]
    fn test_effective_type_names() {
        assert_eq!(
            NetworkType::from_effective_type("slow-2g"),
            Some(NetworkType::Slow2g)
        );
        assert_eq!(NetworkType::from_effective_type("4G"), Some(NetworkType::FourG));
        assert_eq!(NetworkType::from_effective_type("5g"), None);
    }
}
