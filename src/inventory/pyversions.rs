//! Python interpreters found in the search path and their versions.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PkgdocError, Result};
use crate::host::{is_executable, run_command, search_path, CommandOptions};
use crate::node::{Node, Table};

pub const DESCRIPTION: &str = "Python interpreters in PATH and their versions";

static INTERPRETER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^python[.0-9]*$").unwrap());

/// Interpreter executables (`python`, `python3`, `python3.11`, ...) in `dirs`.
///
/// Paths are unique and sorted.
pub fn find_interpreters(dirs: &[PathBuf]) -> BTreeSet<PathBuf> {
    let mut found = BTreeSet::new();
    for dir in dirs {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = entry.path();
            let name = entry.file_name();
            if INTERPRETER_REGEX.is_match(&name.to_string_lossy())
                && path.is_file()
                && is_executable(&path)
            {
                found.insert(path);
            }
        }
    }
    found
}

/// Version string printed by `binary --version`, or `None` if it fails.
///
/// Python 2 prints its version on standard error. A timeout is returned as an
/// error.
fn interpreter_version(binary: &Path, options: &CommandOptions) -> Result<Option<String>> {
    let options = CommandOptions {
        merge_stderr: true,
        ..options.clone()
    };
    let argv = vec![binary.display().to_string(), "--version".to_string()];

    match run_command(&argv, &options) {
        Ok(output) if output.success() => Ok(Some(output.lines.join("\n").trim().to_string())),
        Ok(output) => {
            tracing::debug!(binary = %binary.display(), exit_code = ?output.exit_code, "skipping interpreter");
            Ok(None)
        }
        Err(err @ PkgdocError::CommandTimedOut { .. }) => Err(err),
        Err(err) => {
            tracing::debug!(binary = %binary.display(), "skipping interpreter: {}", err);
            Ok(None)
        }
    }
}

/// Table of binaries and versions, sorted by version.
pub fn render_versions(mut versions: Vec<(PathBuf, String)>) -> Result<Node> {
    versions.sort_by(|a, b| a.1.cmp(&b.1));

    let rows = versions
        .into_iter()
        .map(|(binary, version)| {
            vec![
                Node::literal(binary.display().to_string()),
                Node::paragraph(version),
            ]
        })
        .collect();
    let headers = vec![Node::paragraph("Binary"), Node::paragraph("Version")];
    Ok(Table::new(2, headers, rows)?.into())
}

/// Versions of every interpreter in `dirs`, skipping those that fail.
pub fn collect_versions(
    dirs: &[PathBuf],
    options: &CommandOptions,
) -> Result<Vec<(PathBuf, String)>> {
    let mut versions = Vec::new();
    for binary in find_interpreters(dirs) {
        if let Some(version) = interpreter_version(&binary, options)? {
            versions.push((binary, version));
        }
    }
    Ok(versions)
}

pub fn run(options: &CommandOptions) -> Result<Node> {
    render_versions(collect_versions(&search_path(), options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn fake_python(path: &Path, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, format!("#!/bin/sh\n{}\n", script)).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn interpreter_names() {
        for name in ["python", "python3", "python3.11", "python2.7"] {
            assert!(INTERPRETER_REGEX.is_match(name), "{}", name);
        }
        for name in ["python3-config", "pythonw", "ipython3", "python3.11m"] {
            assert!(!INTERPRETER_REGEX.is_match(name), "{}", name);
        }
    }

    #[cfg(unix)]
    #[test]
    fn finds_only_matching_executables() {
        let temp = TempDir::new().unwrap();
        fake_python(&temp.path().join("python3"), "echo 'Python 3.11.2'");
        fake_python(&temp.path().join("python3-config"), "true");
        fs::write(temp.path().join("python2"), "not executable").unwrap();

        let found = find_interpreters(&[temp.path().to_path_buf()]);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![temp.path().join("python3")]);
    }

    #[cfg(unix)]
    #[test]
    fn version_comes_from_either_stream() {
        let temp = TempDir::new().unwrap();
        let py2 = temp.path().join("python2");
        let broken = temp.path().join("python4");
        fake_python(&py2, "echo 'Python 2.7.18' >&2");
        fake_python(&broken, "exit 1");

        let options = CommandOptions::default();
        assert_eq!(
            interpreter_version(&py2, &options).unwrap().as_deref(),
            Some("Python 2.7.18")
        );
        assert_eq!(interpreter_version(&broken, &options).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn failing_interpreters_are_skipped() {
        let temp = TempDir::new().unwrap();
        fake_python(&temp.path().join("python3"), "echo 'Python 3.11.2'");
        fake_python(&temp.path().join("python4"), "exit 1");

        let versions =
            collect_versions(&[temp.path().to_path_buf()], &CommandOptions::default()).unwrap();
        assert_eq!(
            versions,
            vec![(temp.path().join("python3"), "Python 3.11.2".to_string())]
        );
    }

    #[cfg(unix)]
    #[test]
    fn interpreter_timeout_is_fatal() {
        let temp = TempDir::new().unwrap();
        fake_python(&temp.path().join("python3"), "exec sleep 5");

        let options = CommandOptions::with_timeout(Some(std::time::Duration::from_millis(200)));
        let err = collect_versions(&[temp.path().to_path_buf()], &options).unwrap_err();
        assert!(matches!(err, PkgdocError::CommandTimedOut { .. }));
    }

    #[test]
    fn rows_are_sorted_by_version() {
        let node = render_versions(vec![
            (PathBuf::from("/usr/bin/python3"), "Python 3.11.2".to_string()),
            (PathBuf::from("/usr/bin/python2"), "Python 2.7.18".to_string()),
        ])
        .unwrap();

        let Node::Table(table) = node else {
            panic!("expected a table");
        };
        assert_eq!(table.headers(), &[Node::paragraph("Binary"), Node::paragraph("Version")]);
        assert_eq!(table.rows()[0][0], Node::literal("/usr/bin/python2"));
    }
}
