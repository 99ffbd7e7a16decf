//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`,
//! which points at the cwd of the last focused terminal, or the folder
//! Zellij was started from if that's not available.

use std::path::PathBuf;

/// Returns the data directory used for trace output.
///
/// Resolves to `/host/.local/share/zellij/bookrack`, which typically maps
/// to `~/.local/share/zellij/bookrack` when Zellij is started from a home
/// directory terminal.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookrack")
}

/// Expands a leading tilde to the `/host` mount.
///
/// Used for the `theme_file` configuration option, so users can write
/// `~/.config/bookrack/theme.toml` and have it resolve inside the sandbox.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_the_host_mount() {
        assert_eq!(
            get_data_dir().to_str().unwrap(),
            "/host/.local/share/zellij/bookrack"
        );
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~/themes/x.toml"), "/host/themes/x.toml");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
    }
}
