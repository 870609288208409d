use std::fmt;

/// Operating system family the process is running on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    Linux,
    Windows,
    Unsupported(String),
}

impl HostOs {
    /// Detect from the target the binary was built for
    pub fn detect() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "linux" => HostOs::Linux,
            "windows" => HostOs::Windows,
            other => HostOs::Unsupported(other.to_string()),
        }
    }

    /// Get a human-readable name for this OS family
    pub fn name(&self) -> &str {
        match self {
            HostOs::Linux => "Linux",
            HostOs::Windows => "Windows",
            HostOs::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the effective user is root, when the platform can tell
#[cfg(unix)]
pub fn running_as_root() -> Option<bool> {
    Some(nix::unistd::Uid::effective().is_root())
}

#[cfg(not(unix))]
pub fn running_as_root() -> Option<bool> {
    None
}
