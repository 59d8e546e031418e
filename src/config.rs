use crate::platform::PlatformVersion;

/// Fixed identity and startup settings of the shell.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Dialog titles and the user data subdirectory.
    pub app_name: String,
    /// Prefix of every embedded resource identifier.
    pub resource_namespace: String,
    /// Custom protocol the webview serves bundled assets under.
    pub scheme: String,
    pub start_path: String,
    pub browser_args: String,
    pub minimum_platform: PlatformVersion,
    pub minimum_platform_label: String,
    pub window_title: String,
    pub window_size: (f64, f64),
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "DogPrincess".to_string(),
            resource_namespace: "DogPrincess".to_string(),
            scheme: "app".to_string(),
            start_path: "/index.html".to_string(),
            browser_args: "--autoplay-policy=no-user-gesture-required".to_string(),
            minimum_platform: PlatformVersion::new(10, 0, 17763),
            minimum_platform_label: "Windows 10 October 2018 Update".to_string(),
            window_title: "DogPrincess".to_string(),
            window_size: (1280.0, 800.0),
        }
    }
}

impl ShellConfig {
    /// Host the bundled assets are served from, e.g. `app.localhost`.
    pub fn virtual_host(&self) -> String {
        format!("{}.localhost", self.scheme)
    }

    /// WebView2 exposes custom schemes as `http://<scheme>.localhost`,
    /// WebKit keeps `<scheme>://localhost`.
    pub fn start_url(&self) -> String {
        if cfg!(windows) {
            format!("http://{}{}", self.virtual_host(), self.start_path)
        } else {
            format!("{}://localhost{}", self.scheme, self.start_path)
        }
    }

    pub fn unsupported_platform_message(&self) -> String {
        format!(
            "{} requires {} (build {}) or later.",
            self.app_name, self.minimum_platform_label, self.minimum_platform.build
        )
    }
}
