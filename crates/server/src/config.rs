use std::{fs, net::SocketAddr};

use anyhow::Context;
use hanoi::DiskCount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub default_disks: DiskCount,
    pub log_filter: String,
    pub max_body_bytes: usize,
    /// Overrides that were present but unusable, reported once logging is up.
    pub ignored: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:5000".into(),
            default_disks: DiskCount::DEFAULT,
            log_filter: "info".into(),
            max_body_bytes: 4096,
            ignored: Vec::new(),
        }
    }
}

impl Settings {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server_bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.server_bind))
    }

    fn set_default_disks(&mut self, source: &str, raw: &str) {
        match raw.trim().parse::<i64>().ok().map(DiskCount::new) {
            Some(Ok(disks)) => self.default_disks = disks,
            Some(Err(err)) => self.ignored.push(format!("{source}: {err}")),
            None => self
                .ignored
                .push(format!("{source}: '{raw}' is not a number")),
        }
    }

    fn set_max_body_bytes(&mut self, source: &str, raw: &str) {
        match raw.trim().parse::<usize>() {
            Ok(bytes) if bytes > 0 => self.max_body_bytes = bytes,
            _ => self
                .ignored
                .push(format!("{source}: '{raw}' is not a positive byte count")),
        }
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string("server.toml").ok();
    settings_from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

/// Built-in defaults, then `server.toml`, then environment variables.
pub fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<toml::Table>(raw) {
            Ok(file_cfg) => {
                let get = |key: &str| file_cfg.get(key).and_then(scalar_to_string);
                if let Some(v) = get("bind_addr") {
                    settings.server_bind = v;
                }
                if let Some(v) = get("default_disks") {
                    settings.set_default_disks("server.toml default_disks", &v);
                }
                if let Some(v) = get("log_filter") {
                    settings.log_filter = v;
                }
                if let Some(v) = get("max_body_bytes") {
                    settings.set_max_body_bytes("server.toml max_body_bytes", &v);
                }
            }
            Err(err) => settings.ignored.push(format!("server.toml: {err}")),
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("APP__DEFAULT_DISKS") {
        settings.set_default_disks("APP__DEFAULT_DISKS", &v);
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = env("APP__MAX_BODY_BYTES") {
        settings.set_max_body_bytes("APP__MAX_BODY_BYTES", &v);
    }

    settings
}

fn scalar_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
