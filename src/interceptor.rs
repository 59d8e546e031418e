use std::borrow::Cow;

use tauri::http::header::{HeaderValue, CONTENT_TYPE};
use tauri::http::{Response, StatusCode, Uri};
use tracing::{debug, trace};

use crate::assets::{resource_name, ResourceSource};
use crate::config::ShellConfig;
use crate::mime::content_type;

pub type AssetResponse = Response<Cow<'static, [u8]>>;

/// Answers virtual-host requests from the embedded resource bundle.
pub struct Interceptor<S> {
    source: S,
    scheme: String,
    virtual_host: String,
    namespace: String,
}

impl<S: ResourceSource> Interceptor<S> {
    pub fn new(config: &ShellConfig, source: S) -> Self {
        Self {
            source,
            scheme: config.scheme.clone(),
            virtual_host: config.virtual_host(),
            namespace: config.resource_namespace.clone(),
        }
    }

    /// `http://app.localhost/...` under WebView2, `app://localhost/...` under WebKit.
    pub fn is_virtual_host(&self, uri: &Uri) -> bool {
        match uri.host() {
            Some(host) if host.eq_ignore_ascii_case(&self.virtual_host) => true,
            Some(host) if host.eq_ignore_ascii_case("localhost") => {
                uri.scheme_str() == Some(self.scheme.as_str())
            }
            _ => false,
        }
    }

    /// `None` leaves the request to the webview's default handling.
    pub fn intercept(&self, uri: &Uri) -> Option<AssetResponse> {
        if !self.is_virtual_host(uri) {
            trace!("Passing through {}", uri);
            return None;
        }

        let path = uri.path();
        let name = resource_name(&self.namespace, path);
        let Some(body) = self.source.resource(&name) else {
            trace!("No embedded resource {} for {}", name, uri);
            return None;
        };

        let mime = content_type(path);
        debug!("Serving {} ({}, {} bytes)", name, mime, body.len());

        let mut response = Response::new(body);
        *response.status_mut() = StatusCode::OK;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(mime));
        Some(response)
    }

    /// Protocol handler entry: the webview needs a response for every request
    /// on the scheme, so a pass-through becomes an empty 404.
    pub fn respond(&self, uri: &Uri) -> AssetResponse {
        self.intercept(uri).unwrap_or_else(not_found)
    }
}

fn not_found() -> AssetResponse {
    let mut response = Response::new(Cow::Borrowed(&[][..]));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}
