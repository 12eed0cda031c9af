use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/musiclist/config.toml` or
/// `~/.config/musiclist/config.toml`
///
/// Precedence (highest wins):
/// 1) `MPD_HOST` / `MPD_PORT` (conventional daemon address variables)
/// 2) Environment variables (prefix `MUSICLIST__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub connection: ConnectionSettings,
    pub library: LibrarySettings,
    pub report: ReportSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connection: ConnectionSettings::default(),
            library: LibrarySettings::default(),
            report: ReportSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Daemon host, optionally with an embedded credential (`password@host`),
    /// following the `MPD_HOST` convention.
    pub host: String,
    /// Daemon TCP port.
    pub port: u16,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6600,
        }
    }
}

/// Connection descriptor with the credential split off the host string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddr {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
}

impl ConnectionSettings {
    /// Parse the configured address into a structured descriptor.
    ///
    /// `password@host` splits on the first `@`; an empty credential is
    /// treated as absent.
    pub fn server_addr(&self) -> Result<ServerAddr, String> {
        let (password, host) = match self.host.split_once('@') {
            Some((pw, host)) => (Some(pw), host),
            None => (None, self.host.as_str()),
        };
        if host.trim().is_empty() {
            return Err(format!("connection.host {:?} has no host part", self.host));
        }
        if self.port == 0 {
            return Err("connection.port must be >= 1".to_string());
        }
        Ok(ServerAddr {
            host: host.to_string(),
            port: self.port,
            password: password.filter(|pw| !pw.is_empty()).map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory the daemon's database paths are relative to.
    pub music_root: PathBuf,
    /// Sidecar file name looked up in each album directory.
    pub rating_file: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_root: PathBuf::from("/var/lib/mpd/music"),
            rating_file: "rating.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Text for the generated document's `<title>`.
    pub title: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: "Music Library".to_string(),
        }
    }
}
