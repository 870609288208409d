/// Host identification file read to find the distribution
pub const OS_RELEASE: &str = "/etc/os-release";

/// unattended-upgrades policy file rewritten on every run
pub const UNATTENDED_UPGRADES_CONF: &str = "/etc/apt/apt.conf.d/50unattended-upgrades";

/// Suffix appended to a config path to form its one-time backup
pub const BACKUP_SUFFIX: &str = ".bak";

/// Automatic-update agent binary, also its package name
pub const UNATTENDED_UPGRADES: &str = "unattended-upgrades";

/// systemd unit for the automatic-update agent
pub const UNATTENDED_UPGRADES_SERVICE: &str = "unattended-upgrades.service";

/// Name of the Windows scheduled task registered by the update script
pub const SCHEDULED_TASK_NAME: &str = "AutomaticSecurityUpdates";

/// Prefix for the temporary PowerShell script
pub const SCRIPT_PREFIX: &str = "update_script_";
