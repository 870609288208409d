pub mod cmd;
pub mod distro;
pub mod error;
pub mod init;
pub mod linux;
pub mod orchestrator;
pub mod paths;
pub mod pkgmgr;
pub mod platform;
pub mod policy;
pub mod settings;
pub mod steps;
#[cfg(test)]
mod testing;
pub mod windows;

pub use error::{Error, ErrorCategory, Result};
