//! CLI configuration.
//!
//! Reads `config/default.toml` and applies `VALET_`-prefixed environment
//! overrides. Falls back to compiled defaults (every permission granted)
//! when the file or a section is missing, so a fresh checkout runs
//! without any setup.

use std::path::Path;

use valet_chat::DEFAULT_WELCOME;

/// Location of the configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "config/default.toml";

/// Settings controlling the simulated platform permission prompts and the
/// chat greeting.
pub struct ValetConfig {
    /// Grant for the notification permission prompt.
    pub allow_notifications: bool,
    /// Grant for the reminder access prompt.
    pub allow_reminders: bool,
    /// Grant for the calendar access prompt.
    pub allow_calendar: bool,
    /// First transcript entry shown when the chat opens.
    pub welcome_message: String,
}

impl Default for ValetConfig {
    fn default() -> Self {
        Self {
            allow_notifications: true,
            allow_reminders: true,
            allow_calendar: true,
            welcome_message: DEFAULT_WELCOME.to_string(),
        }
    }
}

/// Load configuration from [`CONFIG_PATH`], then apply env overrides.
pub fn load_config() -> ValetConfig {
    let mut config = load_config_from(Path::new(CONFIG_PATH));

    if let Some(v) = env_bool("VALET_ALLOW_NOTIFICATIONS") {
        config.allow_notifications = v;
    }
    if let Some(v) = env_bool("VALET_ALLOW_REMINDERS") {
        config.allow_reminders = v;
    }
    if let Some(v) = env_bool("VALET_ALLOW_CALENDAR") {
        config.allow_calendar = v;
    }

    config
}

/// Parse the configuration file at `path`, falling back to defaults for
/// anything missing or malformed.
fn load_config_from(path: &Path) -> ValetConfig {
    let mut config = ValetConfig::default();

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return config,
    };

    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            return config;
        }
    };

    if let Some(toml::Value::Table(permissions)) = table.get("permissions") {
        if let Some(v) = permissions.get("notifications").and_then(|v| v.as_bool()) {
            config.allow_notifications = v;
        }
        if let Some(v) = permissions.get("reminders").and_then(|v| v.as_bool()) {
            config.allow_reminders = v;
        }
        if let Some(v) = permissions.get("calendar").and_then(|v| v.as_bool()) {
            config.allow_calendar = v;
        }
    }

    if let Some(toml::Value::Table(chat)) = table.get("chat")
        && let Some(v) = chat.get("welcome_message").and_then(|v| v.as_str())
    {
        config.welcome_message = v.to_string();
    }

    config
}

/// Read a boolean environment variable, accepting the usual spellings.
fn env_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|v| parse_bool(&v))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
