mod systemd;

pub use systemd::Systemd;

use crate::error::Result;

/// Service manager operations the Linux configurator needs
pub trait InitSystem {
    /// Name of the init system
    fn name(&self) -> &str;

    /// Enable a service at boot and start it now
    fn enable_now(&self, service: &str) -> Result<()>;

    /// Restart a service so it rereads its configuration
    fn restart(&self, service: &str) -> Result<()>;
}
