use std::fmt;

use serde::Serialize;

/// Operating system version as `major.minor.build`.
///
/// Ordering compares major, then minor, then build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PlatformVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl PlatformVersion {
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self { major, minor, build }
    }

    pub fn is_at_least(&self, minimum: &PlatformVersion) -> bool {
        self >= minimum
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

// --- Windows ---

#[cfg(windows)]
const CURRENT_VERSION_PATH: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";

/// Reads the running Windows version from the registry.
///
/// `GetVersionEx` lies to unmanifested processes, the registry does not.
#[cfg(windows)]
pub fn current_version() -> std::io::Result<Option<PlatformVersion>> {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key = hklm.open_subkey(CURRENT_VERSION_PATH)?;

    let major: u32 = key.get_value("CurrentMajorVersionNumber")?;
    let minor: u32 = key.get_value("CurrentMinorVersionNumber")?;
    let build: String = key.get_value("CurrentBuildNumber")?;

    let build = parse_build_number(&build).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("unexpected CurrentBuildNumber {:?}", build),
        )
    })?;

    Ok(Some(PlatformVersion::new(major, minor, build)))
}

/// Non-Windows hosts carry no minimum build.
#[cfg(not(windows))]
pub fn current_version() -> std::io::Result<Option<PlatformVersion>> {
    Ok(None)
}

#[cfg_attr(not(windows), allow(dead_code))]
fn parse_build_number(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
