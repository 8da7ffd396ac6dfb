//! External process invocation with captured output
//!
//! Commands run synchronously and block the calling thread until the
//! child exits. Only stdout is captured; stderr and stdin are connected
//! to the null device. There are no retries and no timeouts: a hung
//! child hangs the caller.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::path::{path_kind, PathKind};
use crate::{Error, Result};

/// A completed external command invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Directory the command ran in, if one was requested
    pub workdir: Option<PathBuf>,
    /// Program name
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Captured stdout
    pub stdout: String,
    /// Stdout split into lines, with one trailing newline stripped first
    pub lines: Vec<String>,
}

impl Invocation {
    /// The full command line, program and arguments joined by spaces
    pub fn command_line(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        render_command(&self.program, &args)
    }
}

/// Runs external commands
///
/// Injectable so callers can be tested against a scripted implementation
/// that returns canned output without spawning anything.
pub trait ProcessRunner {
    /// Run `program` with `args`, optionally in `workdir`, capturing stdout
    ///
    /// A non-empty `workdir` must be an existing directory or the call
    /// fails before any process is spawned.
    fn run(&self, workdir: Option<&Path>, program: &str, args: &[&str]) -> Result<Invocation>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, workdir: Option<&Path>, program: &str, args: &[&str]) -> Result<Invocation> {
        (**self).run(workdir, program, args)
    }
}

/// [`ProcessRunner`] that spawns real OS processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, workdir: Option<&Path>, program: &str, args: &[&str]) -> Result<Invocation> {
        let workdir = match workdir {
            Some(dir) => Some(resolve_workdir(dir)?),
            None => None,
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        if let Some(ref dir) = workdir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| Error::Process {
            command: render_command(program, args),
            reason: if e.kind() == std::io::ErrorKind::NotFound {
                format!("executable '{}' not found", program)
            } else {
                e.to_string()
            },
        })?;

        if !output.status.success() {
            return Err(Error::Process {
                command: render_command(program, args),
                reason: format!("exited with {}", output.status),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let lines = split_lines(&stdout);

        tracing::debug!(
            command = %render_command(program, args),
            lines = lines.len(),
            "command completed"
        );

        Ok(Invocation {
            workdir,
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            stdout,
            lines,
        })
    }
}

/// Validate a requested working directory and make it absolute
fn resolve_workdir(dir: &Path) -> Result<PathBuf> {
    if path_kind(dir) != PathKind::Directory {
        return Err(Error::Path {
            path: dir.display().to_string(),
            reason: "not a directory".to_string(),
        });
    }

    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }

    std::path::absolute(dir).map_err(|e| Error::Path {
        path: dir.display().to_string(),
        reason: format!("could not resolve absolute path: {}", e),
    })
}

/// Strip exactly one trailing newline, then split on newlines
///
/// Empty output yields no lines, not a single empty line.
fn split_lines(stdout: &str) -> Vec<String> {
    if stdout.is_empty() {
        return Vec::new();
    }

    let trimmed = stdout.strip_suffix('\n').unwrap_or(stdout);
    trimmed.split('\n').map(|s| s.to_string()).collect()
}

fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        return program.to_string();
    }

    format!("{} {}", program, args.join(" "))
}

#[cfg(test)]
pub(crate) use script::ScriptedRunner;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_strips_one_trailing_newline() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_split_lines_empty_output() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_render_command() {
        assert_eq!(render_command("git", &[]), "git");
        assert_eq!(render_command("git", &["fetch", "origin"]), "git fetch origin");
    }

    #[test]
    fn test_missing_workdir_is_path_error() {
        let runner = SystemRunner::new();
        let result = runner.run(Some(Path::new("/nonexistent/path/12345")), "true", &[]);
        assert!(matches!(result, Err(Error::Path { .. })));
    }

    #[test]
    fn test_file_workdir_is_path_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, b"x").unwrap();

        let runner = SystemRunner::new();
        let result = runner.run(Some(&file), "true", &[]);
        assert!(matches!(result, Err(Error::Path { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_lines() {
        let runner = SystemRunner::new();
        let run = runner
            .run(None, "sh", &["-c", "printf 'a\\nb\\n'"])
            .unwrap();

        assert_eq!(run.stdout, "a\nb\n");
        assert_eq!(run.lines, vec!["a", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_no_output_yields_no_lines() {
        let runner = SystemRunner::new();
        let run = runner.run(None, "true", &[]).unwrap();

        assert!(run.stdout.is_empty());
        assert!(run.lines.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_process_error() {
        let runner = SystemRunner::new();
        let result = runner.run(None, "sh", &["-c", "exit 3"]);
        assert!(matches!(result, Err(Error::Process { .. })));
    }

    #[test]
    fn test_spawn_failure_is_process_error() {
        let runner = SystemRunner::new();
        let result = runner.run(None, "repokeep-no-such-binary-12345", &[]);
        assert!(matches!(result, Err(Error::Process { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_requested_workdir() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new();
        let run = runner.run(Some(dir.path()), "pwd", &[]).unwrap();

        let reported = run.lines.first().map(std::path::PathBuf::from).unwrap();
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_scripted_runner_records_calls() {
        let runner = ScriptedRunner::new();
        runner.push_stdout("main\n");

        let run = runner
            .run(None, "git", &["branch", "--show-current"])
            .unwrap();

        assert_eq!(run.lines, vec!["main"]);
        assert_eq!(runner.calls(), vec!["git branch --show-current"]);
    }
}
