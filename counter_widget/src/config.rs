use log::Level;

/// Id of the element the widget attaches to when nothing else is configured.
pub const DEFAULT_CONTAINER_ID: &str = "test";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Id of the host page element the widget is mounted into.
    pub container_id: String,
    pub log_level: Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            container_id: DEFAULT_CONTAINER_ID.into(),
            log_level: Level::Debug,
        }
    }
}

impl WidgetConfig {
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    pub fn with_log_level(mut self, log_level: Level) -> Self {
        self.log_level = log_level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.container_id, "test");
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn builders_override_defaults() {
        let config = WidgetConfig::default()
            .with_container_id("app")
            .with_log_level(Level::Warn);
        assert_eq!(config.container_id, "app");
        assert_eq!(config.log_level, Level::Warn);
    }
}
