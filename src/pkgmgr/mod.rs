mod apt;

pub use apt::Apt;

use crate::error::Result;

/// Package manager operations the Linux configurator needs
pub trait PackageManager {
    /// Name of the package manager (e.g., "apt")
    fn name(&self) -> &str;

    /// Refresh the package index
    fn update(&self) -> Result<()>;

    /// Install packages non-interactively
    fn install(&self, packages: &[&str]) -> Result<()>;
}
