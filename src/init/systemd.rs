use super::InitSystem;
use crate::cmd::CommandRunner;
use crate::error::Result;

pub struct Systemd<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Systemd<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }
}

impl InitSystem for Systemd<'_> {
    fn name(&self) -> &str {
        "systemd"
    }

    fn enable_now(&self, service: &str) -> Result<()> {
        self.runner.run("sudo", &["systemctl", "enable", "--now", service])
    }

    fn restart(&self, service: &str) -> Result<()> {
        self.runner.run("sudo", &["systemctl", "restart", service])
    }
}
