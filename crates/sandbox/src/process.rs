// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Running filters through a jq child process.
//!
//! The process is launched directly (no shell), with an empty environment,
//! a wall-clock timeout and bounded stdout/stderr. The filter always follows
//! `--` so it can never be read as a jq flag.

use std::ffi::OsStr;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{ChildStdin, Command};
use tracing::{debug, warn};

use lq_core::EvalOptions;

use crate::error::{Error, Result};
use crate::evaluator::{Evaluation, Evaluator};
use crate::limits::SandboxLimits;

/// Program name used when no explicit jq path is configured.
pub const DEFAULT_PROGRAM: &str = "jq";

/// Build the jq argument list for a filter.
pub fn jq_args(filter: &str, options: EvalOptions) -> Vec<String> {
    let mut args = Vec::with_capacity(6);
    if options.raw_output {
        args.push("-r".to_string());
    }
    if options.slurp {
        args.push("-s".to_string());
    }
    if options.raw_input {
        args.push("-R".to_string());
    }
    if options.null_input {
        args.push("-n".to_string());
    }
    args.push("--".to_string());
    args.push(filter.to_string());
    args
}

/// An [`Evaluator`] backed by a jq executable.
#[derive(Debug, Clone)]
pub struct JqProcess {
    program: PathBuf,
}

struct Finished {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl JqProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        JqProcess {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    async fn run(
        &self,
        filter: &str,
        input: &str,
        options: EvalOptions,
        limits: SandboxLimits,
    ) -> Result<Evaluation> {
        let args = jq_args(filter, options);
        debug!(
            "launching {} with {} args, filter length {}",
            self.program.display(),
            args.len(),
            filter.len()
        );

        let mut child = Command::new(&self.program)
            .args(&args)
            .env_clear()
            .stdin(if options.null_input {
                Stdio::null()
            } else {
                Stdio::piped()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| {
                warn!("failed to launch {}: {}", self.program.display(), source);
                Error::Launch {
                    program: self.program.display().to_string(),
                    source,
                }
            })?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let limit = limits.max_output_bytes;

        let work = async {
            let ((), stdout, stderr) = tokio::try_join!(
                write_input(stdin, input),
                read_bounded(stdout, limit),
                read_bounded(stderr, limit),
            )?;
            let status = child.wait().await?;
            Ok::<_, Error>(Finished {
                status,
                stdout,
                stderr,
            })
        };

        let outcome = tokio::time::timeout(limits.timeout, work).await;
        let finished = match outcome {
            Ok(Ok(finished)) => finished,
            Ok(Err(e)) => {
                let _ = child.kill().await;
                return Err(e);
            }
            Err(_) => {
                warn!("jq timed out after {:?}", limits.timeout);
                let _ = child.kill().await;
                return Err(Error::Timeout {
                    limit: limits.timeout,
                });
            }
        };

        let output = String::from_utf8_lossy(&finished.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&finished.stderr).trim().to_string();

        if !finished.status.success() {
            if stderr.is_empty() {
                return Err(Error::Engine(format!("jq failed with {}", finished.status)));
            }
            return Err(Error::Engine(stderr));
        }

        Ok(Evaluation {
            output,
            stderr: (!stderr.is_empty()).then_some(stderr),
        })
    }
}

impl Default for JqProcess {
    fn default() -> Self {
        JqProcess::new(DEFAULT_PROGRAM)
    }
}

impl Evaluator for JqProcess {
    fn evaluate(
        &self,
        filter: &str,
        input: &str,
        options: EvalOptions,
        limits: SandboxLimits,
    ) -> impl Future<Output = Result<Evaluation>> + Send {
        self.run(filter, input, options, limits)
    }

    /// The output of `jq --version`, trimmed, if jq could be run.
    async fn version(&self) -> Option<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .env_clear()
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .ok()?;
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!version.is_empty()).then_some(version)
    }
}

/// Locate `program` on `search_path` (a `PATH`-style list).
///
/// Names containing a path separator are returned unchanged, as are names
/// that cannot be found. The child runs with an empty environment, so a bare
/// name has to be resolved against the parent's `PATH` up front.
pub fn resolve_program(program: &Path, search_path: Option<&OsStr>) -> PathBuf {
    if program.components().count() != 1 || program.is_absolute() {
        return program.to_path_buf();
    }
    let Some(search_path) = search_path else {
        return program.to_path_buf();
    };
    std::env::split_paths(search_path)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| program.to_path_buf())
}

/// Write the input document and close stdin.
///
/// jq may exit before reading everything (syntax errors, `-n`); the
/// resulting broken pipe is not an error.
async fn write_input(stdin: Option<ChildStdin>, input: &str) -> Result<()> {
    if let Some(mut stdin) = stdin {
        ignore_broken_pipe(stdin.write_all(input.as_bytes()).await)?;
        ignore_broken_pipe(stdin.shutdown().await)?;
    }
    Ok(())
}

/// jq may exit without reading its input; that is not an error.
fn ignore_broken_pipe(result: std::io::Result<()>) -> Result<()> {
    match result {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            debug!("jq closed stdin before reading all input");
            Ok(())
        }
        other => Ok(other?),
    }
}

/// Read a stream to the end, failing once it exceeds `limit` bytes.
async fn read_bounded<R>(reader: Option<R>, limit: usize) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let Some(reader) = reader else {
        return Ok(Vec::new());
    };
    let mut buf = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    reader.take(cap).read_to_end(&mut buf).await?;
    if buf.len() > limit {
        return Err(Error::OutputTooLarge { limit });
    }
    Ok(buf)
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
