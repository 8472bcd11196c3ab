use crate::config::{Config, RustEnv};
use log::{info, LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Dependencies whose logs are suppressed unless running at Trace level.
const FILTERED_MODULES: &[&str] = &[
    "sqlx",
    "sea_orm",
    "tower",
    "hyper",
    "axum",
    "tungstenite",
];

pub struct Logger {}

impl Logger {
    /// Installs the global terminal logger.
    ///
    /// Dependency modules are hidden below Trace. Production output is never
    /// colored so that log collectors receive plain text.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let level = config.log_level_filter;
        let apply_filters = Self::should_filter_dependencies(level);

        TermLogger::init(
            level,
            Self::build_log_config(apply_filters),
            TerminalMode::Mixed,
            Self::color_choice(&config.runtime_env),
        )?;

        info!(
            "Logging at {level} for the {} environment (dependency logs {})",
            config.runtime_env,
            if apply_filters { "hidden" } else { "shown" }
        );

        Ok(())
    }

    fn should_filter_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn color_choice(runtime_env: &RustEnv) -> ColorChoice {
        match runtime_env {
            RustEnv::Production => ColorChoice::Never,
            RustEnv::Development | RustEnv::Staging => ColorChoice::Auto,
        }
    }

    fn build_log_config(apply_filters: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if apply_filters {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_websocket_stacks_are_filtered() {
        for module in ["sqlx", "sea_orm", "hyper", "axum", "tungstenite"] {
            assert!(
                FILTERED_MODULES.contains(&module),
                "{module} should be filtered"
            );
        }
    }

    #[test]
    fn only_trace_level_shows_dependency_logs() {
        assert!(!Logger::should_filter_dependencies(LevelFilter::Trace));
        assert!(Logger::should_filter_dependencies(LevelFilter::Debug));
        assert!(Logger::should_filter_dependencies(LevelFilter::Info));
    }

    #[test]
    fn production_output_is_uncolored() {
        assert_eq!(Logger::color_choice(&RustEnv::Production), ColorChoice::Never);
        assert_eq!(Logger::color_choice(&RustEnv::Development), ColorChoice::Auto);
        assert_eq!(Logger::color_choice(&RustEnv::Staging), ColorChoice::Auto);
    }

    #[test]
    fn log_config_builds_with_and_without_filters() {
        let _filtered = Logger::build_log_config(true);
        let _unfiltered = Logger::build_log_config(false);
    }
}
