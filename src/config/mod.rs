//! # Config
//!
//! Each demo reads a [DemoConfig] from `<exe dir>/<demo name>.ron` when it starts. Every field is optional in the file,
//! and a missing file gets the demo's defaults written to it so there's something to edit
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result as Res, WrapErr};
use color_eyre::{Help, Report, SectionExt};
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::helper::file_helper::app_current_directory;
use crate::helper::logging::event_targets::RESOURCE_LOAD;
use crate::helper::logging::format_error;
use crate::ui::fonts::FontSettings;
use crate::ui::ui_data::{Rgba8, DEFAULT_BACKGROUND};
use crate::FallibleFn;

pub mod tracing_config;
pub mod window_config;

use tracing_config::TracingConfig;
use window_config::WindowConfig;

/// Extension used for config files
pub const CONFIG_FILE_EXTENSION: &str = "ron";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    /// How many times per second the UI is redrawn
    pub frame_rate: u32,
    pub font: FontSettings,
    /// Folder that font and image paths are relative to. Looked up next to the executable, then in the working directory
    pub resources_path: PathBuf,
    /// Icon shown on the image button, relative to [resources_path](DemoConfig::resources_path)
    pub image: Option<PathBuf>,
    /// Background colour when the demo starts
    pub initial_background: Rgba8,
    pub tracing: TracingConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            frame_rate: 30,
            font: FontSettings::default(),
            resources_path: PathBuf::from("assets"),
            image: None,
            initial_background: DEFAULT_BACKGROUND,
            tracing: TracingConfig::default(),
        }
    }
}

/// Where the config that a demo is running with came from
///
/// Config is loaded before [tracing] is set up (it configures tracing), so this is kept and logged afterwards with [ConfigSource::log]
#[derive(Debug)]
pub enum ConfigSource {
    /// Read from the file at this path
    Loaded(PathBuf),
    /// No file existed, so the defaults were used and written to this path
    CreatedDefault(PathBuf),
    /// The file couldn't be used (or the defaults couldn't be saved), so the defaults were used
    DefaultAfterError(Report),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::Loaded(path) => info!(target: RESOURCE_LOAD, ?path, "loaded config"),
            ConfigSource::CreatedDefault(path) => {
                info!(target: RESOURCE_LOAD, ?path, "no config file found, saved default config")
            }
            ConfigSource::DefaultAfterError(report) => {
                warn!(target: RESOURCE_LOAD, report = format_error(report), "using default config")
            }
        }
    }
}

/// Path of the config file for the demo with the given name
pub fn config_path(demo_name: &str) -> Res<PathBuf> {
    Ok(app_current_directory()?.join(format!("{demo_name}.{CONFIG_FILE_EXTENSION}")))
}

/// Deserialises a config from RON text
pub fn parse_config(data: &str) -> Res<DemoConfig> {
    ron::from_str::<DemoConfig>(data)
        .wrap_err("failed to deserialise config")
        .section(data.to_string().header("Config Data:"))
}

/// Attempts to save a config to disk
pub fn save_config_to_disk(path: &Path, config: &DemoConfig) -> FallibleFn {
    let serialised = to_string_pretty(config, PrettyConfig::default().struct_names(true))
        .wrap_err("couldn't serialise config")?;
    fs::write(path, serialised).wrap_err_with(|| format!("couldn't save serialised config to {path:?}"))?;
    Ok(())
}

/// Loads the config at `path`. [None] if there is no file there
pub fn load_config_from_disk(path: &Path) -> Res<Option<DemoConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path).wrap_err_with(|| format!("could not read config file at {path:?}"))?;
    parse_config(&data).map(Some)
}

/// Loads the config at `path`, falling back to `defaults` (and saving them if there was no file)
pub fn load_or_init_at(path: &Path, defaults: DemoConfig) -> (DemoConfig, ConfigSource) {
    match load_config_from_disk(path) {
        Ok(Some(config)) => (config, ConfigSource::Loaded(path.to_path_buf())),
        Ok(None) => match save_config_to_disk(path, &defaults) {
            Ok(()) => (defaults, ConfigSource::CreatedDefault(path.to_path_buf())),
            Err(report) => (defaults, ConfigSource::DefaultAfterError(report)),
        },
        Err(report) => (
            defaults,
            ConfigSource::DefaultAfterError(report.note("delete the file to have the defaults written again")),
        ),
    }
}

/// [load_or_init_at] for the demo's config file next to the executable
pub fn load_or_init(demo_name: &str, defaults: DemoConfig) -> (DemoConfig, ConfigSource) {
    match config_path(demo_name) {
        Ok(path) => load_or_init_at(&path, defaults),
        Err(report) => (defaults, ConfigSource::DefaultAfterError(report)),
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::tracing_config::ErrorLogStyle;

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("widget_demos_config_{}_{name}.ron", std::process::id()))
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse_config("(frame_rate: 60, window: (title: \"Hi\"))").expect("valid config");
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.window.title, "Hi");
        assert_eq!(config.window.width, WindowConfig::default().width);
        assert_eq!(config.initial_background, DEFAULT_BACKGROUND);
        assert_eq!(config.tracing.error_style, ErrorLogStyle::ShortWithCause);
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(parse_config("(frame_rate: \"fast\")").is_err());
    }

    #[test]
    fn missing_file_writes_defaults() {
        let path = scratch_path("missing");
        fs::remove_file(&path).ok();

        let defaults = DemoConfig { frame_rate: 12, ..DemoConfig::default() };
        let (config, source) = load_or_init_at(&path, defaults.clone());
        assert_eq!(config, defaults);
        assert!(matches!(source, ConfigSource::CreatedDefault(_)));

        // Second run reads back what the first one wrote
        let (reloaded, source) = load_or_init_at(&path, DemoConfig::default());
        assert_eq!(reloaded, defaults);
        assert!(matches!(source, ConfigSource::Loaded(_)));

        fs::remove_file(path).ok();
    }

    #[test]
    fn broken_file_falls_back_to_defaults_without_overwriting() {
        let path = scratch_path("broken");
        fs::write(&path, "(frame_rate: ").expect("could not write file");

        let (config, source) = load_or_init_at(&path, DemoConfig::default());
        assert_eq!(config, DemoConfig::default());
        assert!(matches!(source, ConfigSource::DefaultAfterError(_)));
        assert_eq!(fs::read_to_string(&path).expect("file should still exist"), "(frame_rate: ");

        fs::remove_file(path).ok();
    }
}
