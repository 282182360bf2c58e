use serde::{Deserialize, Serialize};

use crate::helper::logging::event_targets::*;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct TracingConfig {
    /// Controls how errors are logged in the app
    ///
    /// For a demo/example, see the [color_eyre::eyre::Report] documentation
    pub error_style: ErrorLogStyle,

    /// Directive used when `RUST_LOG` isn't set, e.g. `"info"` or `"widget_demos=trace"`
    pub default_directive: String,

    /// Vec of log filters, that control what log targets will be logged
    ///
    /// By creating a log filter, you can ignore events from certain log targets (such as [UI_PERFRAME_SPAMMY])
    ///
    /// Only the first matching filter will be used (the rest will be skipped), and if none match then the event will be logged by default.
    pub target_filters: Vec<LogTargetFilter>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            error_style: ErrorLogStyle::ShortWithCause,
            default_directive: "debug".to_string(),
            target_filters: vec![
                // Once per frame at 30Hz, far too noisy to have on by default
                LogTargetFilter::new(UI_PERFRAME_SPAMMY, false),
            ],
        }
    }
}

impl TracingConfig {
    /// Checks the [target_filters](TracingConfig::target_filters) for an event target. Returns `true` if the target should be logged
    pub fn target_enabled(&self, target: &str) -> bool {
        self.target_filters
            .iter()
            .find(|filter| target.starts_with(filter.target.as_str()))
            .map_or(true, |filter| filter.enabled)
    }
}

/// Holds the start of an event's target, and a [bool] that indicates whether that target should be enabled or disabled
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct LogTargetFilter {
    pub target: String,
    pub enabled: bool,
}

impl LogTargetFilter {
    /// Creates a filter that matches if the target starts with the given string
    pub fn new(target: &str, enabled: bool) -> LogTargetFilter {
        LogTargetFilter { target: target.to_string(), enabled }
    }
}

/// Enum that controls how errors ([color_eyre::eyre::Report]) are formatted
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
pub enum ErrorLogStyle {
    Short,
    #[default]
    ShortWithCause,
    WithBacktrace,
    Debug,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_matching_filter_wins() {
        let config = TracingConfig {
            target_filters: vec![
                LogTargetFilter::new("widget_demos::UI", false),
                LogTargetFilter::new("widget_demos", true),
            ],
            ..TracingConfig::default()
        };

        assert_eq!(config.target_enabled(UI_PERFRAME_SPAMMY), false);
        assert_eq!(config.target_enabled(UI_USER_EVENT), false);
        assert_eq!(config.target_enabled(RESOURCE_LOAD), true);
    }

    #[test]
    fn unmatched_targets_are_logged() {
        let config = TracingConfig {
            target_filters: vec![],
            ..TracingConfig::default()
        };
        assert!(config.target_enabled("glium::context"));
    }

    #[test]
    fn default_config_silences_per_frame_logs() {
        let config = TracingConfig::default();
        assert!(!config.target_enabled(UI_PERFRAME_SPAMMY));
        assert!(config.target_enabled(UI_USER_EVENT));
    }
}
