//! Inventory command execution.
//!
//! Commands are spawned directly (no shell) with standard input and standard
//! error attached to the null device and standard output piped. The exit
//! status is recorded but never treated as a failure: some inventory tools
//! exit non-zero on benign conditions. Only a missing executable is reported
//! as [`PkgdocError::CommandNotFound`].

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{PkgdocError, Result};

/// Interval between exit checks while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Kill the command and fail after this long (None = wait forever).
    pub timeout: Option<Duration>,

    /// Append standard error lines to the output instead of discarding them.
    pub merge_stderr: bool,
}

impl CommandOptions {
    /// Options with a timeout.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }
}

/// Output of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Standard output lines, without line terminators.
    pub lines: Vec<String>,

    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

type LineReader = JoinHandle<std::io::Result<Vec<Vec<u8>>>>;

/// Run `argv` to completion and collect its output lines.
///
/// # Errors
///
/// - `CommandNotFound` if the executable does not exist
/// - `CommandTimedOut` if `options.timeout` elapses first
/// - `Encoding` if a line is not valid UTF-8
/// - `Io` for any other spawn or read failure
pub fn run_command(argv: &[String], options: &CommandOptions) -> Result<CommandOutput> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("cannot run an empty command"))?;
    let command_line = argv.join(" ");
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    if options.merge_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::null());
    }

    tracing::debug!(command = %command_line, "spawning inventory command");

    let mut child = cmd.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PkgdocError::CommandNotFound {
                command: program.clone(),
            }
        } else {
            PkgdocError::Io(e)
        }
    })?;

    let stdout_reader = child.stdout.take().map(spawn_line_reader);
    let stderr_reader = child.stderr.take().map(spawn_line_reader);

    let status = match options.timeout {
        Some(timeout) => wait_with_timeout(&mut child, timeout, &command_line)?,
        None => child.wait()?,
    };

    let mut raw_lines = join_reader(stdout_reader, &command_line)?;
    raw_lines.extend(join_reader(stderr_reader, &command_line)?);

    let lines = raw_lines
        .into_iter()
        .enumerate()
        .map(|(index, bytes)| {
            String::from_utf8(bytes).map_err(|_| PkgdocError::Encoding {
                command: command_line.clone(),
                line: index + 1,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let output = CommandOutput {
        lines,
        exit_code: status.code(),
    };

    tracing::debug!(
        command = %command_line,
        exit_code = ?output.exit_code,
        elapsed_ms = start.elapsed().as_millis() as u64,
        lines = output.lines.len(),
        "inventory command finished"
    );

    Ok(output)
}

fn spawn_line_reader<R: Read + Send + 'static>(stream: R) -> LineReader {
    thread::spawn(move || {
        BufReader::new(stream)
            .split(b'\n')
            .map(|line| {
                line.map(|mut bytes| {
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                    bytes
                })
            })
            .collect()
    })
}

fn join_reader(reader: Option<LineReader>, command_line: &str) -> Result<Vec<Vec<u8>>> {
    let Some(handle) = reader else {
        return Ok(Vec::new());
    };
    match handle.join() {
        Ok(lines) => Ok(lines?),
        Err(_) => {
            tracing::error!(command = %command_line, "output reader thread panicked");
            Err(anyhow::anyhow!("reading the output of '{}' failed", command_line).into())
        }
    }
}

/// Kill and reap `child`, logging anything that goes wrong.
fn terminate(child: &mut Child, command_line: &str) {
    if let Err(err) = child.kill() {
        tracing::warn!(command = %command_line, "failed to kill inventory command: {}", err);
    }
    if let Err(err) = child.wait() {
        tracing::warn!(command = %command_line, "failed to reap inventory command: {}", err);
    }
}

fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
    command_line: &str,
) -> Result<ExitStatus> {
    let deadline = Instant::now() + timeout;

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {}
            Err(err) => {
                tracing::error!(
                    command = %command_line,
                    "waiting for inventory command failed: {}",
                    err
                );
                terminate(child, command_line);
                return Err(err.into());
            }
        }
        if Instant::now() >= deadline {
            tracing::warn!(command = %command_line, "inventory command timed out, killing it");
            terminate(child, command_line);
            return Err(PkgdocError::CommandTimedOut {
                command: command_line.to_string(),
                seconds: timeout.as_secs(),
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".to_string(), "-c".to_string(), script.to_string()]
    }

    #[cfg(unix)]
    #[test]
    fn collects_stdout_lines() {
        let output = run_command(&sh("printf 'a\\nb\\n'"), &CommandOptions::default()).unwrap();
        assert_eq!(output.lines, vec!["a", "b"]);
        assert!(output.success());
    }

    #[cfg(unix)]
    #[test]
    fn last_line_without_newline_is_kept() {
        let output = run_command(&sh("printf 'a\\nb'"), &CommandOptions::default()).unwrap();
        assert_eq!(output.lines, vec!["a", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_not_an_error() {
        let output = run_command(&sh("echo partial; exit 3"), &CommandOptions::default()).unwrap();
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.lines, vec!["partial"]);
    }

    #[cfg(unix)]
    #[test]
    fn stderr_is_discarded_by_default() {
        let output = run_command(&sh("echo out; echo err >&2"), &CommandOptions::default()).unwrap();
        assert_eq!(output.lines, vec!["out"]);
    }

    #[cfg(unix)]
    #[test]
    fn stderr_can_be_merged() {
        let options = CommandOptions {
            merge_stderr: true,
            ..Default::default()
        };
        let output = run_command(&sh("echo err >&2"), &options).unwrap();
        assert_eq!(output.lines, vec!["err"]);
    }

    #[cfg(unix)]
    #[test]
    fn stdin_is_closed() {
        let output = run_command(&sh("cat; echo done"), &CommandOptions::default()).unwrap();
        assert_eq!(output.lines, vec!["done"]);
    }

    #[test]
    fn missing_executable_is_command_not_found() {
        let argv = vec!["/nonexistent/pkgdoc-test-binary".to_string()];
        let err = run_command(&argv, &CommandOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            PkgdocError::CommandNotFound { ref command } if command == "/nonexistent/pkgdoc-test-binary"
        ));
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = run_command(&[], &CommandOptions::default()).unwrap_err();
        assert!(matches!(err, PkgdocError::Other(_)));
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let err = run_command(&sh("printf 'ok\\n\\377\\n'"), &CommandOptions::default()).unwrap_err();
        assert!(matches!(err, PkgdocError::Encoding { line: 2, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_kills_slow_command() {
        let options = CommandOptions::with_timeout(Some(Duration::from_millis(200)));
        let start = Instant::now();
        let err = run_command(&sh("exec sleep 5"), &options).unwrap_err();
        assert!(matches!(err, PkgdocError::CommandTimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_error_names_the_command_line() {
        let options = CommandOptions::with_timeout(Some(Duration::from_millis(100)));
        let err = run_command(&sh("echo started; exec sleep 5"), &options).unwrap_err();
        let PkgdocError::CommandTimedOut { command, .. } = err else {
            panic!("expected a timeout");
        };
        assert_eq!(command, "sh -c echo started; exec sleep 5");
    }

    #[test]
    fn finished_reader_returns_its_lines() {
        let reader: LineReader = thread::spawn(|| Ok(vec![b"a".to_vec()]));
        assert_eq!(join_reader(Some(reader), "test").unwrap(), vec![b"a".to_vec()]);
        assert!(join_reader(None, "test").unwrap().is_empty());
    }

    #[test]
    fn panicked_reader_is_an_error() {
        let reader: LineReader = thread::spawn(|| panic!("reader failed"));
        let err = join_reader(Some(reader), "dpkg-query --show").unwrap_err();
        assert!(err.to_string().contains("dpkg-query --show"));
    }
}
