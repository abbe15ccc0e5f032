use log::Level;

/// Startup settings. There is no external input; everything is fixed at
/// build time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: Level,
    /// Path prefix the app is served under, `/` when it owns the origin.
    pub router_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: if cfg!(debug_assertions) {
                Level::Debug
            } else {
                Level::Info
            },
            router_base: "/".to_string(),
        }
    }
}
