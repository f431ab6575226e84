//! MIME type detection module
//!
//! Default extension table plus the override table consulted first for
//! served resources.

use std::collections::HashMap;

/// Fallback for unknown extensions
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Default Content-Type for a lower-cased extension
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Markup and text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("css") => "text/css",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        Some("eot") => "application/vnd.ms-fontobject",

        // Archives and documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",

        _ => DEFAULT_CONTENT_TYPE,
    }
}

/// Per-extension Content-Type overrides for served resources
///
/// Seeded with `js` and `css`, the two types content sniffing gets wrong for
/// front-end libraries. Keys are lower-cased.
#[derive(Debug, Clone)]
pub struct MimeOverrides {
    table: HashMap<String, String>,
}

impl Default for MimeOverrides {
    fn default() -> Self {
        let table = [("js", "text/javascript"), ("css", "text/css")]
            .into_iter()
            .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
            .collect();
        Self { table }
    }
}

impl MimeOverrides {
    /// Default overrides plus `extra`, which wins on conflicts
    pub fn with_extra(extra: &HashMap<String, String>) -> Self {
        let mut overrides = Self::default();
        for (ext, mime) in extra {
            overrides
                .table
                .insert(ext.trim_start_matches('.').to_ascii_lowercase(), mime.clone());
        }
        overrides
    }

    pub fn get(&self, extension: &str) -> Option<&str> {
        self.table
            .get(&extension.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Override if one exists, else the default table
    pub fn content_type<'a>(&'a self, extension: Option<&str>) -> &'a str {
        extension
            .and_then(|ext| self.get(ext))
            .unwrap_or_else(|| get_content_type(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(get_content_type(Some("png")), "image/png");
        assert_eq!(get_content_type(Some("woff2")), "font/woff2");
        assert_eq!(get_content_type(Some("xyz")), DEFAULT_CONTENT_TYPE);
        assert_eq!(get_content_type(None), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_overrides_take_priority() {
        let overrides = MimeOverrides::default();
        assert_eq!(overrides.content_type(Some("js")), "text/javascript");
        assert_eq!(overrides.content_type(Some("css")), "text/css");
        assert_eq!(overrides.content_type(Some("JS")), "text/javascript");
        assert_eq!(overrides.content_type(Some("svg")), "image/svg+xml");
        assert_eq!(overrides.content_type(None), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_extra_overrides() {
        let mut extra = HashMap::new();
        extra.insert(".MJS".to_string(), "text/javascript".to_string());
        extra.insert("css".to_string(), "text/css; charset=utf-8".to_string());

        let overrides = MimeOverrides::with_extra(&extra);
        assert_eq!(overrides.content_type(Some("mjs")), "text/javascript");
        assert_eq!(overrides.content_type(Some("css")), "text/css; charset=utf-8");
        assert_eq!(overrides.content_type(Some("js")), "text/javascript");
    }
}
