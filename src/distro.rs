//! Linux distribution detection from the os-release file

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Debian-family distributions the unattended-upgrades setup supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distro {
    Ubuntu,
    Debian,
    Kali,
}

impl Distro {
    /// Map an os-release `ID` to a supported distribution, ignoring case
    pub fn from_id(id: &str) -> Result<Self> {
        match id.to_lowercase().as_str() {
            "ubuntu" => Ok(Distro::Ubuntu),
            "debian" => Ok(Distro::Debian),
            "kali" => Ok(Distro::Kali),
            _ => Err(Error::UnsupportedDistribution(id.to_string())),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Distro::Ubuntu => "ubuntu",
            Distro::Debian => "debian",
            Distro::Kali => "kali",
        }
    }
}

/// Read the `ID` value from an os-release file
pub fn detect_id(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_id(BufReader::new(file), path)
}

/// Scan os-release lines for `ID=`, trimming surrounding quotes.
///
/// Lines are matched as bytes so a non-UTF-8 value elsewhere in the file
/// does not hide the `ID=` line. Only the first matching line counts; keys
/// such as `VERSION_ID=` never match because the prefix must start the line.
pub fn parse_id<R: BufRead>(mut reader: R, path: &Path) -> Result<String> {
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(|source| Error::Scan {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }

        if let Some(value) = line.strip_prefix(b"ID=") {
            let value = String::from_utf8_lossy(value);
            let id = value.trim().trim_matches('"').trim_matches('\'');
            return Ok(id.to_string());
        }
    }

    Err(Error::IdNotFound {
        path: path.to_path_buf(),
    })
}
