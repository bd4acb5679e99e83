//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution. There is no internal timeout: a playbook run
//! may legitimately take many minutes. Dropping the returned future kills the
//! child, so a caller-side timeout or cancellation does not orphan it.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` — inherits the terminal so the operator sees
/// the child's progress live.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner {
    stdout_to_stderr: bool,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the child's stdout to our stderr, keeping stdout free for
    /// machine-readable output. The stream stays live and unbuffered.
    #[must_use]
    pub fn stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn child_stdout(self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(std::io::stderr())
        } else {
            Stdio::inherit()
        }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_status(
        &self,
        program: &str,
        args: &[String],
        env: &BTreeMap<OsString, OsString>,
    ) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .env_clear()
            .envs(env)
            .stdin(Stdio::inherit())
            .stdout(self.child_stdout())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
