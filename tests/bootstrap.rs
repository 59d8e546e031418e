use std::cell::RefCell;
use std::path::{Path, PathBuf};

use dog_princess_lib::bootstrap::{exit_code, launch, Shell, STARTUP_FAILURE_EXIT_CODE};
use dog_princess_lib::config::ShellConfig;
use dog_princess_lib::error::{Result, ShellError};
use dog_princess_lib::platform::PlatformVersion;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Dialog { title: String, message: String },
    UserDataDir(String),
    Environment { args: String },
    Bind,
    Navigate(String),
}

struct RecordingShell {
    version: Option<PlatformVersion>,
    root: tempfile::TempDir,
    fail_probe: bool,
    fail_data_dir: bool,
    fail_bind: bool,
    calls: RefCell<Vec<Call>>,
}

impl RecordingShell {
    fn new(version: Option<PlatformVersion>) -> Self {
        Self {
            version,
            root: tempfile::tempdir().unwrap(),
            fail_probe: false,
            fail_data_dir: false,
            fail_bind: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[derive(Debug)]
struct Surface;

impl Shell for RecordingShell {
    type Environment = PathBuf;
    type Surface = Surface;

    fn platform_version(&self) -> Result<Option<PlatformVersion>> {
        if self.fail_probe {
            return Err(ShellError::PlatformProbe(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "CurrentBuildNumber missing",
            )));
        }
        Ok(self.version)
    }

    fn show_fatal(&self, title: &str, message: &str) {
        self.record(Call::Dialog {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn prepare_user_data_dir(&self, app_name: &str) -> Result<PathBuf> {
        self.record(Call::UserDataDir(app_name.to_string()));
        let path = self.root.path().join(app_name).join("UserData");
        if self.fail_data_dir {
            return Err(ShellError::DataDirectory {
                path,
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
            });
        }
        std::fs::create_dir_all(&path).map_err(|source| ShellError::DataDirectory {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    fn create_environment(&self, user_data_dir: &Path, browser_args: &str) -> Result<PathBuf> {
        self.record(Call::Environment {
            args: browser_args.to_string(),
        });
        Ok(user_data_dir.to_path_buf())
    }

    fn bind(&self, _environment: PathBuf) -> Result<Surface> {
        self.record(Call::Bind);
        if self.fail_bind {
            return Err(ShellError::DataDirectory {
                path: PathBuf::from("webview"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "controller creation failed"),
            });
        }
        Ok(Surface)
    }

    fn navigate(&self, _surface: &Surface, url: &str) -> Result<()> {
        self.record(Call::Navigate(url.to_string()));
        Ok(())
    }
}

#[test]
fn supported_platform_runs_every_step_in_order() {
    let config = ShellConfig::default();
    let shell = RecordingShell::new(Some(PlatformVersion::new(10, 0, 19045)));

    let ready = launch(&shell, &config).unwrap();

    assert_eq!(
        shell.calls(),
        vec![
            Call::UserDataDir("DogPrincess".to_string()),
            Call::Environment {
                args: "--autoplay-policy=no-user-gesture-required".to_string()
            },
            Call::Bind,
            Call::Navigate(config.start_url()),
        ]
    );
    assert!(ready.user_data_dir.ends_with("DogPrincess/UserData"));
    assert!(ready.user_data_dir.is_dir());
}

#[test]
fn old_build_stops_before_any_environment() {
    let config = ShellConfig::default();
    let shell = RecordingShell::new(Some(PlatformVersion::new(10, 0, 17134)));

    let err = launch(&shell, &config).unwrap_err();

    assert!(err.is_unsupported_platform());
    assert_eq!(
        shell.calls(),
        vec![Call::Dialog {
            title: "Unsupported OS".to_string(),
            message: "DogPrincess requires Windows 10 October 2018 Update (build 17763) or later."
                .to_string(),
        }]
    );
    assert!(!shell.root.path().join("DogPrincess").exists());
}

#[test]
fn exact_minimum_build_is_supported() {
    let shell = RecordingShell::new(Some(PlatformVersion::new(10, 0, 17763)));
    assert!(launch(&shell, &ShellConfig::default()).is_ok());
}

#[test]
fn host_without_threshold_is_supported() {
    let shell = RecordingShell::new(None);
    assert!(launch(&shell, &ShellConfig::default()).is_ok());
}

#[test]
fn initialization_failure_reported_once_with_detail() {
    let config = ShellConfig::default();
    let mut shell = RecordingShell::new(Some(PlatformVersion::new(10, 0, 22631)));
    shell.fail_bind = true;

    assert!(launch(&shell, &config).is_err());

    let calls = shell.calls();
    let dialogs: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            Call::Dialog { title, message } => Some((title.clone(), message.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].0, "DogPrincess");
    assert!(dialogs[0].1.starts_with("Initialization failed:\n"));
    assert!(dialogs[0].1.contains("controller creation failed"));
    assert!(!calls.iter().any(|call| matches!(call, Call::Navigate(_))));
}

fn dialogs(shell: &RecordingShell) -> Vec<(String, String)> {
    shell
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Dialog { title, message } => Some((title, message)),
            _ => None,
        })
        .collect()
}

#[test]
fn unreadable_platform_version_is_an_initialization_failure() {
    let config = ShellConfig::default();
    let mut shell = RecordingShell::new(Some(PlatformVersion::new(10, 0, 19045)));
    shell.fail_probe = true;

    let err = launch(&shell, &config).unwrap_err();

    assert!(!err.is_unsupported_platform());
    let dialogs = dialogs(&shell);
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].0, "DogPrincess");
    assert!(dialogs[0].1.starts_with("Initialization failed:\n"));
    assert!(dialogs[0].1.contains("CurrentBuildNumber missing"));
    assert!(!shell
        .calls()
        .iter()
        .any(|call| matches!(call, Call::UserDataDir(_))));
    assert!(!shell.root.path().join("DogPrincess").exists());
}

#[test]
fn user_data_dir_failure_stops_before_environment() {
    let config = ShellConfig::default();
    let mut shell = RecordingShell::new(Some(PlatformVersion::new(10, 0, 19045)));
    shell.fail_data_dir = true;

    let err = launch(&shell, &config).unwrap_err();

    assert!(!err.is_unsupported_platform());
    let calls = shell.calls();
    assert_eq!(calls[0], Call::UserDataDir("DogPrincess".to_string()));
    assert!(!calls
        .iter()
        .any(|call| matches!(call, Call::Environment { .. } | Call::Bind | Call::Navigate(_))));
    let dialogs = dialogs(&shell);
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].0, "DogPrincess");
    assert!(dialogs[0].1.contains("access denied"));
}

#[test]
fn failed_startup_exits_with_failure_status() {
    let config = ShellConfig::default();

    let old = RecordingShell::new(Some(PlatformVersion::new(10, 0, 17134)));
    assert_eq!(
        exit_code(&launch(&old, &config)),
        Some(STARTUP_FAILURE_EXIT_CODE)
    );

    let mut broken = RecordingShell::new(Some(PlatformVersion::new(10, 0, 19045)));
    broken.fail_bind = true;
    assert_eq!(exit_code(&launch(&broken, &config)), Some(1));

    let healthy = RecordingShell::new(Some(PlatformVersion::new(10, 0, 19045)));
    assert_eq!(exit_code(&launch(&healthy, &config)), None);
}
