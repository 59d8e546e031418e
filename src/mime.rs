pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension (without the dot) to content type. Keys compare case-insensitively.
const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("js", "application/javascript"),
    ("ico", "image/x-icon"),
    ("swf", "application/x-shockwave-flash"),
    ("wasm", "application/wasm"),
    ("xml", "application/xml"),
    ("json", "application/json"),
    ("txt", "text/plain"),
];

/// Content type for a resource path, chosen by its file extension.
pub fn content_type(path: &str) -> &'static str {
    extension(path)
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(ext))
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// Text after the last `.` of the final path segment, if non-empty.
fn extension(path: &str) -> Option<&str> {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => Some(&file_name[dot + 1..]),
        _ => None,
    }
}
