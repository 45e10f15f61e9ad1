//! Structured logging helpers
//!
//! Filter directive construction for `tracing-subscriber` and the per-request
//! span used by the HTTP trace layer.

pub mod middleware;

pub use middleware::{generate_request_id, make_request_span};

/// Build filter directives string from LoggingConfig
///
/// Produces `"<level>,peerwatch::<component>=<level>,..."`. Components are
/// emitted in sorted order so the result is stable.
///
/// # Examples
///
/// ```
/// use peerwatch::config::{LogFormat, LoggingConfig};
/// use peerwatch::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("peers".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// assert_eq!(build_filter_directives(&config), "info,peerwatch::peers=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",peerwatch::{}={}", component, level));
        }
    }

    filter_str
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use std::collections::HashMap;

    #[test]
    fn test_filter_directives_level_only() {
        let config = LoggingConfig::default();
        assert_eq!(build_filter_directives(&config), "info");
    }

    #[test]
    fn test_filter_directives_sorted_components() {
        let mut levels = HashMap::new();
        levels.insert("peers".to_string(), "trace".to_string());
        levels.insert("api".to_string(), "debug".to_string());

        let config = LoggingConfig {
            level: "warn".to_string(),
            component_levels: Some(levels),
            ..Default::default()
        };
        assert_eq!(
            build_filter_directives(&config),
            "warn,peerwatch::api=debug,peerwatch::peers=trace"
        );
    }
}
