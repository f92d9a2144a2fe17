// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compiler options and environment variable configuration.
//!
//! - `RMW_METASTRING_UNBOUNDED_MAX`: maximum emitted for unbounded sequences
//!   (default: 128). Zero or unparsable values are ignored.
//! - `RMW_METASTRING_LOG_LEVEL`: logging level for tools embedding the
//!   compiler (default: "info"). `RUST_LOG` wins when set.
//!
//! # Example
//!
//! ```bash
//! export RMW_METASTRING_UNBOUNDED_MAX=256
//! export RMW_METASTRING_LOG_LEVEL=debug
//! ```

use std::env;

pub const ENV_UNBOUNDED_MAX: &str = "RMW_METASTRING_UNBOUNDED_MAX";
pub const ENV_LOG_LEVEL: &str = "RMW_METASTRING_LOG_LEVEL";

/// Maximum advertised for sequences declared without a bound.
pub const DEFAULT_UNBOUNDED_SEQUENCE_MAXIMUM: usize = 128;

/// Knobs for a single compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Emitted as `maximum=` for members with `array_size == 0`.
    pub unbounded_sequence_maximum: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            unbounded_sequence_maximum: DEFAULT_UNBOUNDED_SEQUENCE_MAXIMUM,
        }
    }
}

/// Runtime configuration from environment variables
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Override for the unbounded sequence maximum
    pub unbounded_sequence_maximum: Option<usize>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            unbounded_sequence_maximum: None,
            log_level: "info".to_string(),
        }
    }
}

impl EnvConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let unbounded_sequence_maximum = env::var(ENV_UNBOUNDED_MAX)
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&max| max > 0);

        let log_level = env::var(ENV_LOG_LEVEL)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            unbounded_sequence_maximum,
            log_level,
        }
    }

    /// Check if any custom configuration was provided
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.unbounded_sequence_maximum.is_some() || self.log_level != "info"
    }

    /// Compiler options with environment overrides applied.
    #[must_use]
    pub fn compiler_options(&self) -> CompilerOptions {
        let mut options = CompilerOptions::default();
        if let Some(max) = self.unbounded_sequence_maximum {
            options.unbounded_sequence_maximum = max;
        }
        options
    }

    /// Apply log level to the logging subsystem
    pub fn apply_log_level(&self) {
        if let Err(e) = env::var("RUST_LOG") {
            // Only set if RUST_LOG is not already set
            if e == env::VarError::NotPresent {
                env::set_var("RUST_LOG", &self.log_level);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvConfig::default();
        assert!(config.unbounded_sequence_maximum.is_none());
        assert_eq!(config.log_level, "info");
        assert!(!config.is_custom());
        assert_eq!(
            config.compiler_options().unbounded_sequence_maximum,
            DEFAULT_UNBOUNDED_SEQUENCE_MAXIMUM
        );
    }

    // Single test so the env mutations never race each other.
    #[test]
    fn test_from_env_overrides() {
        let prev_max = env::var(ENV_UNBOUNDED_MAX).ok();
        let prev_level = env::var(ENV_LOG_LEVEL).ok();

        env::set_var(ENV_UNBOUNDED_MAX, "256");
        env::set_var(ENV_LOG_LEVEL, "debug");
        let config = EnvConfig::from_env();
        assert_eq!(config.unbounded_sequence_maximum, Some(256));
        assert_eq!(config.log_level, "debug");
        assert!(config.is_custom());
        assert_eq!(config.compiler_options().unbounded_sequence_maximum, 256);

        env::set_var(ENV_UNBOUNDED_MAX, "0");
        env::set_var(ENV_LOG_LEVEL, "");
        let config = EnvConfig::from_env();
        assert!(config.unbounded_sequence_maximum.is_none());
        assert_eq!(config.log_level, "info");

        env::set_var(ENV_UNBOUNDED_MAX, "lots");
        assert!(EnvConfig::from_env().unbounded_sequence_maximum.is_none());

        // Restore
        if let Some(v) = prev_max {
            env::set_var(ENV_UNBOUNDED_MAX, v);
        } else {
            env::remove_var(ENV_UNBOUNDED_MAX);
        }
        if let Some(v) = prev_level {
            env::set_var(ENV_LOG_LEVEL, v);
        } else {
            env::remove_var(ENV_LOG_LEVEL);
        }
    }

    #[test]
    fn test_is_custom() {
        let mut config = EnvConfig::default();
        assert!(!config.is_custom());

        config.unbounded_sequence_maximum = Some(64);
        assert!(config.is_custom());

        config.unbounded_sequence_maximum = None;
        config.log_level = "trace".to_string();
        assert!(config.is_custom());
    }
}
