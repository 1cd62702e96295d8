//! Search-path discovery.
//!
//! The binary and interpreter listings walk the directories of `PATH`.
//! Each component may reference the home directory (`~`) and environment
//! variables (`$NAME` or `${NAME}`), which are expanded before use.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

static ENV_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(?:\{([^}]*)\}|(\w+))").unwrap());

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Expand environment variables, then a leading `~`, in one path component.
///
/// Unknown variables are left as written.
pub fn expand_path<F>(component: &str, env_fn: &F, home: Option<&Path>) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let expanded = ENV_VAR_REGEX.replace_all(component, |caps: &Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or("");
        env_fn(name).unwrap_or_else(|_| caps[0].to_string())
    });

    match (home, expanded.strip_prefix('~')) {
        (Some(home), Some(rest)) if rest.is_empty() || rest.starts_with('/') => {
            format!("{}{}", home.display(), rest)
        }
        _ => expanded.into_owned(),
    }
}

/// Existing directories of a colon-separated search path, in order.
pub fn search_path_from<F>(path_var: &str, env_fn: &F, home: Option<&Path>) -> Vec<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    path_var
        .split(':')
        .filter(|component| !component.is_empty())
        .map(|component| PathBuf::from(expand_path(component, env_fn, home)))
        .filter(|path| path.is_dir())
        .collect()
}

/// Existing directories of this process's `PATH`.
pub fn search_path() -> Vec<PathBuf> {
    let path_var = std::env::var("PATH").unwrap_or_default();
    let home = dirs::home_dir();
    search_path_from(&path_var, &|key: &str| std::env::var(key), home.as_deref())
}

/// Names of the executable regular files in `dir`, sorted.
///
/// Unreadable directories yield an empty list.
pub fn list_executables(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let path = entry.path();
            path.is_file() && is_executable(&path)
        })
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
