//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, load_config_file,
    load_config_with_precedence, log_dir_under, merge_config, resolve_config, ConfigError,
    ConfigFile, ResolvedConfig, CONFIG_ENV, DEFAULT_LOG_LEVEL, LOG_DIR_ENV,
};
