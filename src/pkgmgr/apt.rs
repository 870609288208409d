use super::PackageManager;
use crate::cmd::CommandRunner;
use crate::error::Result;

/// Apt package manager (Debian, Ubuntu, Kali), driven through sudo
pub struct Apt<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Apt<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }
}

impl PackageManager for Apt<'_> {
    fn name(&self) -> &str {
        "apt"
    }

    fn update(&self) -> Result<()> {
        self.runner.run("sudo", &["apt-get", "update"])
    }

    fn install(&self, packages: &[&str]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let mut args: Vec<&str> = vec!["apt-get", "install"];
        args.extend(packages);
        args.push("-y");

        self.runner.run("sudo", &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::testing::RecordingRunner;

    #[test]
    fn apt_name() {
        let runner = RecordingRunner::new();
        assert_eq!(Apt::new(&runner).name(), "apt");
    }

    #[test]
    fn update_refreshes_index() {
        let runner = RecordingRunner::new();
        Apt::new(&runner).update().unwrap();
        assert_eq!(runner.calls(), ["sudo apt-get update"]);
    }

    #[test]
    fn install_is_non_interactive() {
        let runner = RecordingRunner::new();
        Apt::new(&runner).install(&["unattended-upgrades"]).unwrap();
        assert_eq!(
            runner.calls(),
            ["sudo apt-get install unattended-upgrades -y"]
        );
    }

    #[test]
    fn empty_install_runs_nothing() {
        let runner = RecordingRunner::new();
        Apt::new(&runner).install(&[]).unwrap();
        assert!(runner.calls().is_empty());
    }
}
