use std::path::PathBuf;

use crate::paths;

/// Everything the configurators touch on the host, passed down explicitly
#[derive(Debug, Clone)]
pub struct Settings {
    /// Identification file holding the `ID=` line
    pub os_release: PathBuf,
    /// unattended-upgrades policy file
    pub policy_path: PathBuf,
    /// Agent binary looked up on PATH and installed when missing
    pub agent: String,
    /// Service unit enabled and restarted after the policy is written
    pub service: String,
    /// Windows scheduled task created by the update script
    pub task_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            os_release: PathBuf::from(paths::OS_RELEASE),
            policy_path: PathBuf::from(paths::UNATTENDED_UPGRADES_CONF),
            agent: paths::UNATTENDED_UPGRADES.into(),
            service: paths::UNATTENDED_UPGRADES_SERVICE.into(),
            task_name: paths::SCHEDULED_TASK_NAME.into(),
        }
    }
}
