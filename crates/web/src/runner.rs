use std::sync::Arc;

use adgorithm_domain::ChatTimings;

use crate::ports::outbound::PlatformPort;
use crate::state::Platform;

/// Configuration types for the web runner.
pub mod config {
    use std::str::FromStr;

    use thiserror::Error;

    pub const SHELL_VAR: &str = "ADGORITHM_SHELL";
    pub const REPLY_DELAY_VAR: &str = "ADGORITHM_REPLY_DELAY_PERCENT";
    pub const MAX_REPLY_DELAY_PERCENT: u32 = 1000;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum ShellKind {
        #[default]
        Desktop,
        Mobile,
    }

    impl FromStr for ShellKind {
        type Err = ConfigError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(ConfigError::UnknownShell(other.to_string())),
            }
        }
    }

    #[derive(Debug, Error, Clone, PartialEq, Eq)]
    pub enum ConfigError {
        #[error("unknown shell kind: {0}")]
        UnknownShell(String),

        #[error("{REPLY_DELAY_VAR} must be an integer between 0 and {MAX_REPLY_DELAY_PERCENT}, got `{0}`")]
        InvalidReplyDelay(String),
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        /// Scales every assistant reply delay; 100 keeps the defaults
        pub reply_delay_percent: u32,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                shell: ShellKind::default(),
                reply_delay_percent: 100,
            }
        }
    }

    impl RunnerConfig {
        /// Build from a variable lookup.
        ///
        /// Invalid values keep their default and are returned alongside the
        /// config so the caller can report them.
        pub fn from_vars<F>(lookup: F) -> (Self, Vec<ConfigError>)
        where
            F: Fn(&str) -> Option<String>,
        {
            let mut config = Self::default();
            let mut errors = Vec::new();

            if let Some(raw) = lookup(SHELL_VAR) {
                match raw.parse() {
                    Ok(shell) => config.shell = shell,
                    Err(e) => errors.push(e),
                }
            }

            if let Some(raw) = lookup(REPLY_DELAY_VAR) {
                match raw.trim().parse::<u32>() {
                    Ok(percent) if percent <= MAX_REPLY_DELAY_PERCENT => {
                        config.reply_delay_percent = percent
                    }
                    _ => errors.push(ConfigError::InvalidReplyDelay(raw)),
                }
            }

            (config, errors)
        }

        /// Read the process environment, logging and skipping bad values
        pub fn from_env() -> Self {
            let (config, errors) = Self::from_vars(|key| std::env::var(key).ok());
            for error in errors {
                tracing::warn!("{}; using default", error);
            }
            config
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn test_defaults_when_unset() {
            let (config, errors) = RunnerConfig::from_vars(vars(&[]));
            assert_eq!(config, RunnerConfig::default());
            assert!(errors.is_empty());
        }

        #[test]
        fn test_reads_both_variables() {
            let (config, errors) = RunnerConfig::from_vars(vars(&[
                (SHELL_VAR, " Mobile "),
                (REPLY_DELAY_VAR, "0"),
            ]));
            assert_eq!(config.shell, ShellKind::Mobile);
            assert_eq!(config.reply_delay_percent, 0);
            assert!(errors.is_empty());
        }

        #[test]
        fn test_invalid_values_fall_back() {
            let (config, errors) = RunnerConfig::from_vars(vars(&[
                (SHELL_VAR, "tablet"),
                (REPLY_DELAY_VAR, "5000"),
            ]));
            assert_eq!(config, RunnerConfig::default());
            assert_eq!(
                errors,
                vec![
                    ConfigError::UnknownShell("tablet".to_string()),
                    ConfigError::InvalidReplyDelay("5000".to_string()),
                ]
            );
        }
    }
}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Platform,
    pub config: RunnerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { platform, config } = deps;

    // Wrap Platform in Arc<dyn PlatformPort> for UI layer abstraction
    let platform_port: Arc<dyn PlatformPort> = Arc::new(platform);

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("adgorithm");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    // Convert runner's ShellKind to the UI's ShellKind for context
    let ui_shell = match config.shell {
        config::ShellKind::Desktop => crate::ui::ShellKind::Desktop,
        config::ShellKind::Mobile => crate::ui::ShellKind::Mobile,
    };

    tracing::info!(
        shell = ?config.shell,
        reply_delay_percent = config.reply_delay_percent,
        "Launching adgorithm"
    );

    builder
        .with_context(platform_port)
        .with_context(ui_shell)
        .with_context(ChatTimings::scaled(config.reply_delay_percent))
        .launch(crate::ui::app);
}
