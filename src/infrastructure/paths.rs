//! Platform path resolution for storage and configuration.
//!
//! This module locates the per-user directories the engine reads and writes:
//! the data directory holding the JSON store slot and the optional TOML
//! configuration file. Resolution uses the platform conventions exposed by
//! the `dirs` crate, with a current-directory fallback for unusual hosts.

use std::path::PathBuf;

/// Returns the data directory for pomolog storage.
///
/// Resolves to the platform data directory plus a `pomolog` component, e.g.
/// `~/.local/share/pomolog` on Linux or `~/Library/Application Support/pomolog`
/// on macOS. Hosts with no resolvable data directory fall back to a `pomolog`
/// directory under the current working directory.
///
/// The JSON store keeps one file per slot key inside this directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pomolog")
}

/// Returns the path of the optional configuration file.
///
/// Resolves to `config.toml` under the platform config directory, e.g.
/// `~/.config/pomolog/config.toml` on Linux. The file is optional; a missing
/// file yields the default configuration.
#[must_use]
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pomolog")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_crate_component() {
        assert!(data_dir().ends_with("pomolog"));
    }

    #[test]
    fn config_file_is_toml_under_crate_component() {
        let path = config_file();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        assert!(path.parent().is_some_and(|p| p.ends_with("pomolog")));
    }
}
