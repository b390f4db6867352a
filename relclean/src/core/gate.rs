//! Configuration and CI gating for destructive build steps.

/// Build configuration name that enables destructive actions.
pub const RELEASE: &str = "Release";

/// Whether a continuous-integration marker was present in the environment.
///
/// Detected once at startup and passed down explicitly, so gating stays
/// testable without mutating the real process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiStatus {
    Detected,
    NotDetected,
}

/// Gating decision for a destructive build step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Release build outside CI; go ahead.
    Proceed,
    /// CI marker present; leave everything alone.
    SkipCi,
    /// Configuration is not `Release`; leave everything alone.
    SkipConfiguration,
}

/// Gate for pre-build cleanup: skips under CI and for non-Release builds.
pub fn clear_gate(configuration: &str, ci: CiStatus) -> Gate {
    if ci == CiStatus::Detected {
        return Gate::SkipCi;
    }
    publish_gate(configuration)
}

/// Gate for post-build publish: skips for non-Release builds only.
pub fn publish_gate(configuration: &str) -> Gate {
    if configuration == RELEASE {
        Gate::Proceed
    } else {
        Gate::SkipConfiguration
    }
}
