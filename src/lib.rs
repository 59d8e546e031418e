use tauri::Manager;
use tracing::{error, info};

pub mod assets;
pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod dialog;
pub mod error;
pub mod interceptor;
pub mod logging;
pub mod mime;
pub mod platform;
pub mod shell;

use crate::assets::EmbeddedAssets;
use crate::commands::ShellState;
use crate::config::ShellConfig;
use crate::interceptor::Interceptor;
use crate::shell::TauriShell;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::configure_logging();
    let config = ShellConfig::default();
    info!("Starting {}", config.app_name);

    let assets = EmbeddedAssets::new(&config.resource_namespace);
    info!("Bundled resources: {}", assets.len());
    let interceptor = Interceptor::new(&config, assets);

    let setup_config = config.clone();
    let app = tauri::Builder::default()
        .register_uri_scheme_protocol(config.scheme.clone(), move |_ctx, request| {
            interceptor.respond(request.uri())
        })
        .invoke_handler(tauri::generate_handler![commands::get_shell_info])
        .setup(move |app| {
            let shell = TauriShell::new(app.handle(), &setup_config);
            let outcome = bootstrap::launch(&shell, &setup_config);
            // the failure dialog has already been shown
            if let Some(code) = bootstrap::exit_code(&outcome) {
                std::process::exit(code);
            }
            if let Ok(ready) = outcome {
                app.manage(ShellState {
                    app_name: setup_config.app_name.clone(),
                    user_data_dir: ready.user_data_dir,
                });
                info!("{} ready", setup_config.app_name);
            }
            Ok(())
        })
        .build(tauri::generate_context!());

    match app {
        Ok(app) => app.run(|_, _| {}),
        Err(e) => {
            error!("Failed to build application: {}", e);
            dialog::show_error(
                &config.app_name,
                &format!("Initialization failed:\n{}", error::ShellError::from(e).detail()),
            );
            std::process::exit(bootstrap::STARTUP_FAILURE_EXIT_CODE);
        }
    }
}
