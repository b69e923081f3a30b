//! Paths inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`, usually the user's home
//! directory, so `~` in user-supplied paths has to be rewritten before use.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Returns the directory holding ztodo's trace files.
///
/// Resolves to `/host/.local/share/zellij/ztodo`, which is normally
/// `~/.local/share/zellij/ztodo` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join("ztodo")
}

/// Rewrites a leading `~` to the sandbox host root.
///
/// ```
/// use ztodo::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_is_under_host() {
        let dir = get_data_dir();
        assert!(dir.starts_with(HOST_ROOT));
        assert!(dir.ends_with("zellij/ztodo"));
    }

    #[test]
    fn test_expand_tilde_only_touches_home_prefix() {
        assert_eq!(expand_tilde("~/a/b"), "/host/a/b");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~user/a"), "~user/a");
        assert_eq!(expand_tilde("relative/~/a"), "relative/~/a");
        assert_eq!(expand_tilde(""), "");
    }
}
