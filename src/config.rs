//! Library configuration.
//!
//! Centralizes the constants shared across modules.

// =============================================================================
// Formatting
// =============================================================================

/// Money formatting defaults.
pub mod money {
    /// Fractional digits used when the caller does not pick a precision.
    pub const DEFAULT_DIGITS: usize = 2;
    /// Largest precision accepted by fixed-point rendering.
    pub const MAX_DIGITS: usize = 100;
    /// Separator inserted between integer digit groups.
    pub const GROUP_SEPARATOR: char = ',';
    /// Number of integer digits per group.
    pub const GROUP_SIZE: usize = 3;
}

// =============================================================================
// Platform detection
// =============================================================================

/// Case-insensitive user-agent patterns, one per platform family.
pub mod os_patterns {
    pub const ANDROID: &str = r"(?i)android";
    pub const IOS: &str = r"(?i)(ipad|iphone|ipod)";
    pub const WECHAT: &str = r"(?i)MicroMessenger";
}

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the `tracing` filter on native targets.
pub const LOG_ENV_VAR: &str = "BEST_UTILS_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Target of the per-call trace emitted by the license-plate validator.
pub const PLATE_TRACE_TARGET: &str = "best_utils::plate";

// =============================================================================
// Timers
// =============================================================================

/// Largest delay the browser's `setTimeout` accepts (2^31 - 1 ms).
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;
