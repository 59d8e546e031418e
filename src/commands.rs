use std::path::PathBuf;

use serde::Serialize;
use sysinfo::System;
use tauri::{AppHandle, State};

use crate::platform::{self, PlatformVersion};

/// Managed once startup has finished.
pub struct ShellState {
    pub app_name: String,
    pub user_data_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ShellInfo {
    pub app_name: String,
    pub app_version: String,
    pub os_name: String,
    pub os_version: String,
    pub platform_version: Option<PlatformVersion>,
    pub webview_version: String,
    pub user_data_dir: String,
}

impl ShellInfo {
    pub fn collect(state: &ShellState, app_version: String) -> Self {
        ShellInfo {
            app_name: state.app_name.clone(),
            app_version,
            os_name: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            platform_version: platform::current_version().ok().flatten(),
            webview_version: tauri::webview_version().unwrap_or_else(|_| "Unknown".to_string()),
            user_data_dir: state.user_data_dir.display().to_string(),
        }
    }
}

#[tauri::command]
pub fn get_shell_info(app: AppHandle, state: State<'_, ShellState>) -> ShellInfo {
    ShellInfo::collect(&state, app.package_info().version.to_string())
}
