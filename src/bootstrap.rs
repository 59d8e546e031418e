//! Ordered startup: platform check, user data directory, webview
//! environment, window, first navigation.
//!
//! Every step is fallible and the first failure ends the sequence. The
//! failure is reported to the user exactly once, here, and the caller only
//! has to terminate.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::platform::PlatformVersion;

/// Host operations the startup sequence drives.
pub trait Shell {
    type Environment;
    type Surface;

    /// `None` when the host has no minimum version to enforce.
    fn platform_version(&self) -> Result<Option<PlatformVersion>>;

    /// Blocking error dialog.
    fn show_fatal(&self, title: &str, message: &str);

    /// Resolves and creates `<local app data>/<app_name>/UserData`.
    fn prepare_user_data_dir(&self, app_name: &str) -> Result<PathBuf>;

    fn create_environment(
        &self,
        user_data_dir: &Path,
        browser_args: &str,
    ) -> Result<Self::Environment>;

    /// Attaches the environment to the visible window.
    fn bind(&self, environment: Self::Environment) -> Result<Self::Surface>;

    fn navigate(&self, surface: &Self::Surface, url: &str) -> Result<()>;
}

/// Process status after a failed startup.
pub const STARTUP_FAILURE_EXIT_CODE: i32 = 1;

/// Outcome of a completed startup.
#[derive(Debug)]
pub struct Ready<T> {
    pub surface: T,
    pub user_data_dir: PathBuf,
}

/// Runs the whole sequence; on failure the user has already seen the dialog.
pub fn launch<S: Shell>(shell: &S, config: &ShellConfig) -> Result<Ready<S::Surface>> {
    initialize(shell, config).inspect_err(|err| report(shell, config, err))
}

/// Exit status the process must terminate with, `None` once ready.
pub fn exit_code<T>(outcome: &Result<Ready<T>>) -> Option<i32> {
    match outcome {
        Ok(_) => None,
        Err(_) => Some(STARTUP_FAILURE_EXIT_CODE),
    }
}

fn initialize<S: Shell>(shell: &S, config: &ShellConfig) -> Result<Ready<S::Surface>> {
    ensure_supported_platform(shell, config)?;

    let user_data_dir = shell.prepare_user_data_dir(&config.app_name)?;
    info!("User data directory: {}", user_data_dir.display());

    let environment = shell.create_environment(&user_data_dir, &config.browser_args)?;
    info!("Webview environment created ({})", config.browser_args);

    let surface = shell.bind(environment)?;
    info!("Webview bound to main window");

    let start_url = config.start_url();
    shell.navigate(&surface, &start_url)?;
    info!("Navigating to {}", start_url);

    Ok(Ready {
        surface,
        user_data_dir,
    })
}

fn ensure_supported_platform<S: Shell>(shell: &S, config: &ShellConfig) -> Result<()> {
    match shell.platform_version()? {
        Some(found) if !found.is_at_least(&config.minimum_platform) => {
            Err(ShellError::UnsupportedPlatform {
                found,
                required: config.minimum_platform,
            })
        }
        Some(found) => {
            info!("Platform {} meets minimum {}", found, config.minimum_platform);
            Ok(())
        }
        None => Ok(()),
    }
}

fn report<S: Shell>(shell: &S, config: &ShellConfig, err: &ShellError) {
    error!("Startup failed: {}", err.detail());
    if err.is_unsupported_platform() {
        shell.show_fatal("Unsupported OS", &config.unsupported_platform_message());
    } else {
        shell.show_fatal(
            &config.app_name,
            &format!("Initialization failed:\n{}", err.detail()),
        );
    }
}
