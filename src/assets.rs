use std::borrow::Cow;
use std::collections::HashMap;

use rust_embed::Embed;
use tracing::{debug, warn};

/// Directory compiled into the binary; also the middle segment of every
/// resource identifier.
pub const WEB_ROOT: &str = "wwwroot";

#[derive(Embed)]
#[folder = "wwwroot/"]
struct WebRoot;

/// Bundle of named resources the interceptor serves from.
pub trait ResourceSource: Send + Sync {
    fn resource(&self, name: &str) -> Option<Cow<'static, [u8]>>;
}

/// Resource identifier for a request path.
///
/// `/css/app.css` becomes `<namespace>.wwwroot.css.app.css`.
pub fn resource_name(namespace: &str, path: &str) -> String {
    let relative = path.trim_start_matches('/');
    format!("{}.{}.{}", namespace, WEB_ROOT, relative.replace('/', "."))
}

/// The `wwwroot/` bundle, indexed by resource identifier.
pub struct EmbeddedAssets {
    index: HashMap<String, Cow<'static, str>>,
}

impl EmbeddedAssets {
    pub fn new(namespace: &str) -> Self {
        let mut index = HashMap::new();
        for path in WebRoot::iter() {
            let name = resource_name(namespace, &path);
            if let Some(existing) = index.get(&name) {
                warn!("{} and {} share resource name {}, keeping the first", existing, path, name);
                continue;
            }
            index.insert(name, path);
        }
        debug!("Indexed {} embedded resources", index.len());
        Self { index }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

impl ResourceSource for EmbeddedAssets {
    fn resource(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        let path = self.index.get(name)?;
        WebRoot::get(path).map(|file| file.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_separators_become_dots() {
        assert_eq!(
            resource_name("DogPrincess", "/css/app.css"),
            "DogPrincess.wwwroot.css.app.css"
        );
        assert_eq!(
            resource_name("DogPrincess", "/index.html"),
            "DogPrincess.wwwroot.index.html"
        );
    }

    #[test]
    fn all_leading_separators_are_stripped() {
        assert_eq!(
            resource_name("DogPrincess", "//js/app.js"),
            "DogPrincess.wwwroot.js.app.js"
        );
    }

    #[test]
    fn bundle_is_indexed_by_identifier() {
        let assets = EmbeddedAssets::new("DogPrincess");
        assert!(!assets.is_empty());
        assert!(assets.names().all(|name| name.starts_with("DogPrincess.wwwroot.")));
        assert!(assets.resource("DogPrincess.wwwroot.index.html").is_some());
        assert!(assets.resource("DogPrincess.wwwroot.js.app.js").is_some());
    }

    #[test]
    fn raw_paths_are_not_identifiers() {
        let assets = EmbeddedAssets::new("DogPrincess");
        assert!(assets.resource("index.html").is_none());
        assert!(assets.resource("DogPrincess.wwwroot.js/app.js").is_none());
    }
}
