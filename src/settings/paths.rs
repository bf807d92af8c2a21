use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG/HOME config base.
const APP_DIR: &str = "atelier";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path, or `None` when neither `var` nor `HOME` is set.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> Option<PathBuf> {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return Some(PathBuf::from(p));
    }
    let home = env::var("HOME").ok().filter(|h| !h.trim().is_empty())?;
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    Some(base)
}

/// What: Locate the Atelier config directory, creating it if needed.
///
/// Output:
/// - `Some(PathBuf)` for `$XDG_CONFIG_HOME/atelier` (or `$HOME/.config/atelier`);
///   `None` if no base is known or the directory cannot be created.
#[must_use]
pub fn try_config_dir() -> Option<PathBuf> {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"])?.join(APP_DIR);
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "cannot create config dir");
            None
        }
    }
}

/// Config directory, falling back to a temp directory when no home is known.
#[must_use]
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        let dir = env::temp_dir().join(APP_DIR);
        let _ = std::fs::create_dir_all(&dir);
        dir
    })
}

/// Logs directory under config: "$HOME/.config/atelier/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Location of `settings.conf`.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// What: Location of the persisted preference store.
///
/// Output:
/// - `Some(path)` to `preferences.json` when a real config directory exists; `None` otherwise.
///
/// Details:
/// - No temp-dir fallback here: without a config directory there is no durable store.
#[must_use]
pub fn preferences_path() -> Option<PathBuf> {
    try_config_dir().map(|dir| dir.join("preferences.json"))
}

/// Whether `path`'s parent directory exists.
pub(crate) fn parent_exists(path: &Path) -> bool {
    path.parent().is_some_and(Path::is_dir)
}
