use std::ffi::OsStr;
use std::process::Command;

use crate::error::{Error, Result};

const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Runs a program with the caller's stdio attached and waits for it.
///
/// A launch failure or a non-zero exit status is the only signal; output is
/// never captured.
pub fn run<I, S>(program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<_> = args.into_iter().collect();
    let args_str: Vec<_> = args.iter().map(|s| s.as_ref().to_string_lossy()).collect();

    println!("{}> {} {}{}", CYAN, program, args_str.join(" "), RESET);
    tracing::debug!(program, args = %args_str.join(" "), "spawning");

    let status = Command::new(program)
        .args(&args)
        .status()
        .map_err(|source| Error::Launch {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(Error::ExitStatus {
            program: program.to_string(),
            code: status.code(),
        });
    }

    Ok(())
}

/// Check whether a program resolves on PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Seam between the configurators and the processes they start
pub trait CommandRunner {
    /// Run a program to completion, failing on launch error or non-zero exit
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;

    /// Whether a program is resolvable on the execution path
    fn exists(&self, program: &str) -> bool;
}

/// Runner that starts real processes
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        run(program, args)
    }

    fn exists(&self, program: &str) -> bool {
        command_exists(program)
    }
}
