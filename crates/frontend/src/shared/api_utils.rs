//! URL helpers for backend and image requests

/// Join a base URL and a path with exactly one `/` between them
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("/api", "ceramics"), "/api/ceramics");
/// assert_eq!(join_url("/api/", "/uploads"), "/api/uploads");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Whether the path already carries a network scheme
pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/api", "ceramics"), "/api/ceramics");
        assert_eq!(join_url("/api", "jades/1"), "/api/jades/1");
        assert_eq!(join_url("/api/", "/uploads"), "/api/uploads");
        assert_eq!(join_url("http://localhost:3003/api", "bronzes"), "http://localhost:3003/api/bronzes");
        assert_eq!(join_url("/", "/uploads/a.jpg"), "/uploads/a.jpg");
        assert_eq!(join_url("", "uploads/a.jpg"), "/uploads/a.jpg");
        assert_eq!(join_url("/api", ""), "/api");
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("http://x/y.jpg"));
        assert!(is_absolute_url("https://cdn.example/a.png"));
        assert!(!is_absolute_url("/uploads/a.png"));
        assert!(!is_absolute_url("httpfoo.jpg"));
    }
}
