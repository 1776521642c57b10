use crate::shared::api_utils::{is_absolute_url, join_url};

/// Image shown when an item has none
pub const DEFAULT_IMAGE_PATH: &str = "uploads/default.jpg";

const UPLOADS_PREFIX: &str = "/uploads";

/// Turn an item image reference into a URL under `image_base`.
///
/// Accepts bare filenames, `uploads/...` paths with or without a leading
/// slash, and absolute URLs (returned untouched).
pub fn resolve_image_url(image_base: &str, path: &str) -> String {
    if path.is_empty() {
        return join_url(image_base, DEFAULT_IMAGE_PATH);
    }
    if is_absolute_url(path) {
        return path.to_string();
    }

    let mut url = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    let has_uploads = url == UPLOADS_PREFIX || url.starts_with("/uploads/");
    if !has_uploads {
        url = format!("{}{}", UPLOADS_PREFIX, url);
    }
    join_url(image_base, &url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_uses_default() {
        assert_eq!(resolve_image_url("/", ""), "/uploads/default.jpg");
        assert_eq!(
            resolve_image_url("https://img.example", ""),
            "https://img.example/uploads/default.jpg"
        );
    }

    #[test]
    fn test_absolute_url_unchanged() {
        assert_eq!(resolve_image_url("/", "http://x/y.jpg"), "http://x/y.jpg");
        assert_eq!(
            resolve_image_url("/", "https://cdn.example/a/b.png"),
            "https://cdn.example/a/b.png"
        );
    }

    #[test]
    fn test_bare_filename() {
        assert_eq!(resolve_image_url("/", "foo.jpg"), "/uploads/foo.jpg");
        assert_eq!(
            resolve_image_url("http://localhost:3003/", "foo.jpg"),
            "http://localhost:3003/uploads/foo.jpg"
        );
        assert_eq!(
            resolve_image_url("http://localhost:3003", "foo.jpg"),
            "http://localhost:3003/uploads/foo.jpg"
        );
    }

    #[test]
    fn test_uploads_prefix_not_duplicated() {
        assert_eq!(resolve_image_url("/", "/uploads/foo.jpg"), "/uploads/foo.jpg");
        assert_eq!(resolve_image_url("/", "uploads/foo.jpg"), "/uploads/foo.jpg");
        assert_eq!(resolve_image_url("/", "/img/foo.jpg"), "/uploads/img/foo.jpg");
        assert_eq!(resolve_image_url("/", "uploadsfoo.jpg"), "/uploads/uploadsfoo.jpg");
    }

    #[test]
    fn test_no_doubled_separators() {
        for base in ["/", "", "https://img.example/", "https://img.example"] {
            let url = resolve_image_url(base, "foo.jpg");
            let without_scheme = url.trim_start_matches("https://");
            assert!(!without_scheme.contains("//"), "{}", url);
            assert!(url.ends_with("/uploads/foo.jpg"));
        }
    }
}
