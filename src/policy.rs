//! unattended-upgrades policy file management
//!
//! The live file is replaced on every run. The content it had before the
//! very first run is kept once in a sibling `.bak` file and never touched
//! again.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths;

/// Security-only policy written to `50unattended-upgrades`.
///
/// `${distro_codename}` is expanded by unattended-upgrades itself, so one
/// template serves every supported distribution.
pub const SECURITY_POLICY: &str = r#"// Unattended-Upgrade::Origins-Pattern controls which packages are upgraded.
//
// Security updates for Debian and Kali
Unattended-Upgrade::Origins-Pattern {
        "o=Debian,codename=${distro_codename},label=Debian";
        "o=Debian,codename=${distro_codename}-security,label=Debian-Security";
        "o=Kali,codename=${distro_codename},label=Kali-Security";
};

// Packages excluded from automatic upgrades
Unattended-Upgrade::Package-Blacklist {
// Examples of packages you may not want upgraded automatically
// "linux-";
// "libc6";
};

// Recover automatically from an interrupted dpkg run
Unattended-Upgrade::AutoFixInterruptedDpkg "true";

// Upgrade in small steps so the run can be interrupted safely
Unattended-Upgrade::MinimalSteps "true";

// Remove dependencies that became unused after the upgrade
Unattended-Upgrade::Remove-New-Unused-Dependencies "true";

// Never reboot automatically after upgrading
Unattended-Upgrade::Automatic-Reboot "false";

// Limit download bandwidth (example: 70 kbps)
//Acquire::http::Dl-Limit "70";

// Detailed logging
Unattended-Upgrade::Verbose "true";

// Debug output for diagnostics
Unattended-Upgrade::Debug "true";
"#;

/// What happened to the backup during a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    Created,
    AlreadyPresent,
}

/// `<path>.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(paths::BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy the current file to `<path>.bak` unless a backup already exists
pub fn backup_once(path: &Path) -> Result<BackupStatus> {
    let backup = backup_path(path);

    if backup.exists() {
        println!("Backup already exists at {}", backup.display());
        return Ok(BackupStatus::AlreadyPresent);
    }

    let original = fs::read(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(&backup, original).map_err(|source| Error::Write {
        path: backup.clone(),
        source,
    })?;

    println!("Backup created at {}", backup.display());
    tracing::info!(backup = %backup.display(), "created policy backup");

    Ok(BackupStatus::Created)
}

/// Back up `path` once, then overwrite it with `content`
pub fn write_policy(path: &Path, content: &str) -> Result<BackupStatus> {
    let status = backup_once(path)?;

    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    println!("✓ Configured {}", path.display());

    Ok(status)
}
