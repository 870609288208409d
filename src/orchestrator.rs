//! OS dispatch, outcome reporting and the closing prompt

use std::error::Error as _;
use std::io::BufRead;

use crate::cmd::CommandRunner;
use crate::distro::Distro;
use crate::error::{Error, Result};
use crate::linux::LinuxConfigurator;
use crate::platform::{self, HostOs};
use crate::settings::Settings;
use crate::windows::WindowsConfigurator;

/// What a successful run configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Linux(Distro),
    Windows,
}

pub struct Orchestrator<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a Settings,
}

impl<'a> Orchestrator<'a> {
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a Settings) -> Self {
        Self { runner, settings }
    }

    /// Dispatch to the configurator for `host`
    pub fn configure(&self, host: &HostOs) -> Result<Outcome> {
        match host {
            HostOs::Linux => {
                if platform::running_as_root() == Some(false) {
                    println!(
                        "Warning: not running as root, writing the policy file will likely fail"
                    );
                    tracing::warn!("effective user is not root");
                }
                LinuxConfigurator::new(self.runner, self.settings)
                    .configure()
                    .map(Outcome::Linux)
            }
            HostOs::Windows => WindowsConfigurator::new(self.runner, self.settings)
                .configure()
                .map(|_| Outcome::Windows),
            HostOs::Unsupported(name) => Err(Error::UnsupportedOs(name.clone())),
        }
    }

    /// Configure and report the outcome to the user
    pub fn run(&self, host: &HostOs) -> Result<Outcome> {
        tracing::info!(os = %host, "starting security update configuration");
        let result = self.configure(host);
        report(host, &result);
        result
    }
}

/// Print the success line or the failure with its full cause chain
pub fn report(host: &HostOs, result: &Result<Outcome>) {
    match result {
        Ok(_) => println!("\n✓ Security updates configured successfully on {}.", host),
        Err(e) if matches!(e, Error::UnsupportedOs(_)) => {
            tracing::debug!(category = ?e.category(), "{}", e);
            eprintln!("\n✗ {}", error_chain(e));
        }
        Err(e) => {
            tracing::debug!(category = ?e.category(), "{}", e);
            eprintln!(
                "\n✗ Failed to configure updates on {}: {}",
                host,
                error_chain(e)
            );
        }
    }
}

/// `outer: cause: root cause`
pub fn error_chain(err: &Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Keep the terminal window open until the user presses Enter.
///
/// Read errors and end of input are ignored.
pub fn wait_for_acknowledgement<R: BufRead>(mut input: R) {
    println!("\nPress Enter to close this window.");
    let mut line = String::new();
    let _ = input.read_line(&mut line);
}
