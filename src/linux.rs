//! unattended-upgrades setup for Debian-family distributions

use crate::cmd::CommandRunner;
use crate::distro::{self, Distro};
use crate::error::{Error, Result};
use crate::init::{InitSystem, Systemd};
use crate::pkgmgr::{Apt, PackageManager};
use crate::policy::{self, SECURITY_POLICY};
use crate::settings::Settings;
use crate::steps::{run_steps, Step};

pub struct LinuxConfigurator<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a Settings,
}

impl<'a> LinuxConfigurator<'a> {
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a Settings) -> Self {
        Self { runner, settings }
    }

    /// Detect the distribution, refusing anything outside the Debian family
    pub fn detect(&self) -> Result<Distro> {
        let id = distro::detect_id(&self.settings.os_release)?;
        println!("Detected Linux distribution: {}", id);
        Distro::from_id(&id)
    }

    pub fn configure(&self) -> Result<Distro> {
        let distro = self
            .detect()
            .map_err(|e| Error::step("detect distribution", e))?;
        println!("Applying security updates on {}-based system...", distro.id());

        let apt = Apt::new(self.runner);
        let systemd = Systemd::new(self.runner);
        let settings = self.settings;
        tracing::info!(
            distro = distro.id(),
            package_manager = apt.name(),
            init = systemd.name(),
            "configuring unattended-upgrades"
        );

        run_steps(vec![
            Step::new("refresh package index", || apt.update()),
            Step::new("install unattended-upgrades", || {
                if self.runner.exists(&settings.agent) {
                    println!("{} already installed", settings.agent);
                    return Ok(());
                }
                println!("{} is not installed, installing...", settings.agent);
                apt.install(&[settings.agent.as_str()])
            }),
            Step::new("write unattended-upgrades policy", || {
                policy::write_policy(&settings.policy_path, SECURITY_POLICY).map(|_| ())
            }),
            Step::new("enable unattended-upgrades service", || {
                systemd.enable_now(&settings.service)?;
                systemd.restart(&settings.service)
            }),
        ])?;

        Ok(distro)
    }
}
