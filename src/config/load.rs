use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` layers struct defaults, an optional config file,
/// `MUSICLIST__*` environment variables and finally the conventional
/// `MPD_HOST` / `MPD_PORT` daemon address variables.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MUSICLIST")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let mut settings: Settings = cfg.try_deserialize()?;
        settings.apply_daemon_env()?;
        Ok(settings)
    }

    /// Apply `MPD_HOST` / `MPD_PORT` on top of the loaded settings.
    ///
    /// These are the address variables every MPD client honors, so they win
    /// over both the config file and the `MUSICLIST__*` layer.
    fn apply_daemon_env(&mut self) -> Result<(), ::config::ConfigError> {
        if let Ok(host) = env::var("MPD_HOST") {
            if !host.is_empty() {
                self.connection.host = host;
            }
        }
        if let Ok(port) = env::var("MPD_PORT") {
            if !port.is_empty() {
                self.connection.port = port.parse().map_err(|_| {
                    ::config::ConfigError::Message(format!("MPD_PORT {port:?} is not a port number"))
                })?;
            }
        }
        Ok(())
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        self.connection.server_addr()?;
        if self.library.rating_file.trim().is_empty() {
            return Err("library.rating_file must not be empty".to_string());
        }
        if self.library.rating_file.contains('/') {
            return Err("library.rating_file must be a bare file name".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `MUSICLIST_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MUSICLIST_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/musiclist/config.toml`
/// or `~/.config/musiclist/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("musiclist").join("config.toml"))
}
