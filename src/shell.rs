use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager, Runtime, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::bootstrap::Shell;
use crate::config::ShellConfig;
use crate::dialog;
use crate::error::{Result, ShellError};
use crate::platform::{self, PlatformVersion};

pub const MAIN_WINDOW: &str = "main";

/// Settings the webview is created with; applied when `bind` builds the window.
#[derive(Debug, Clone)]
pub struct EngineEnvironment {
    pub user_data_dir: PathBuf,
    pub browser_args: String,
}

/// The startup sequence run against a live Tauri application.
pub struct TauriShell<'a, R: Runtime> {
    app: &'a AppHandle<R>,
    config: &'a ShellConfig,
}

impl<'a, R: Runtime> TauriShell<'a, R> {
    pub fn new(app: &'a AppHandle<R>, config: &'a ShellConfig) -> Self {
        Self { app, config }
    }
}

impl<R: Runtime> Shell for TauriShell<'_, R> {
    type Environment = EngineEnvironment;
    type Surface = WebviewWindow<R>;

    fn platform_version(&self) -> Result<Option<PlatformVersion>> {
        platform::current_version().map_err(ShellError::PlatformProbe)
    }

    fn show_fatal(&self, title: &str, message: &str) {
        dialog::show_error(title, message);
    }

    fn prepare_user_data_dir(&self, app_name: &str) -> Result<PathBuf> {
        let path = self
            .app
            .path()
            .local_data_dir()?
            .join(app_name)
            .join("UserData");
        std::fs::create_dir_all(&path).map_err(|source| ShellError::DataDirectory {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    fn create_environment(
        &self,
        user_data_dir: &Path,
        browser_args: &str,
    ) -> Result<EngineEnvironment> {
        Ok(EngineEnvironment {
            user_data_dir: user_data_dir.to_path_buf(),
            browser_args: browser_args.to_string(),
        })
    }

    fn bind(&self, environment: EngineEnvironment) -> Result<WebviewWindow<R>> {
        let (width, height) = self.config.window_size;
        let blank = WebviewUrl::External(parse_url("about:blank")?);
        let window = WebviewWindowBuilder::new(self.app, MAIN_WINDOW, blank)
            .title(&self.config.window_title)
            .inner_size(width, height)
            .data_directory(environment.user_data_dir)
            .additional_browser_args(&environment.browser_args)
            .build()?;
        Ok(window)
    }

    fn navigate(&self, surface: &WebviewWindow<R>, url: &str) -> Result<()> {
        surface.navigate(parse_url(url)?)?;
        Ok(())
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    raw.parse::<Url>().map_err(|source| ShellError::InvalidStartUrl {
        url: raw.to_string(),
        source,
    })
}
