//! Static route table: exact pages, legacy aliases and the detail catch-all

use contracts::enums::Category;
use once_cell::sync::Lazy;

/// Page a path resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    CategoryList(Category),
    /// Raw segments from `/:category/:id`; the category is not validated here
    Detail { category: String, id: String },
    Story,
    Services,
    Contact,
    Admin,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Page(Page),
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Page(Page),
    Redirect(String),
    /// Built from the `:category` and `:id` parameters
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: String,
    pub target: RouteTarget,
}

impl RouteEntry {
    fn page(pattern: impl Into<String>, page: Page) -> Self {
        Self {
            pattern: pattern.into(),
            target: RouteTarget::Page(page),
        }
    }

    fn redirect(pattern: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: RouteTarget::Redirect(to.into()),
        }
    }

    fn is_exact(&self) -> bool {
        !self.pattern.split('/').any(|s| s.starts_with(':'))
    }
}

/// Registered once at startup, read-only afterwards
pub static ROUTE_TABLE: Lazy<RouteTable> = Lazy::new(RouteTable::catalog);

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// Routes of the catalog site
    pub fn catalog() -> Self {
        let mut entries = vec![RouteEntry::page("/", Page::Home)];
        for category in Category::all() {
            entries.push(RouteEntry::page(
                format!("/{}", category.slug()),
                Page::CategoryList(category),
            ));
        }
        entries.extend(legacy_aliases());
        entries.extend([
            RouteEntry::page("/story", Page::Story),
            RouteEntry::page("/services", Page::Services),
            RouteEntry::page("/contact", Page::Contact),
            RouteEntry::page("/admin", Page::Admin),
            RouteEntry {
                pattern: "/:category/:id".to_string(),
                target: RouteTarget::Detail,
            },
        ]);
        Self::new(entries)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Match a location. Literal patterns win over parameterized ones
    /// regardless of registration order.
    pub fn resolve(&self, location: &str) -> Resolution {
        let path = normalize_path(location);
        let exact = self.entries.iter().filter(|e| e.is_exact());
        let dynamic = self.entries.iter().filter(|e| !e.is_exact());

        for entry in exact.chain(dynamic) {
            let Some(params) = match_pattern(&entry.pattern, &path) else {
                continue;
            };
            return match &entry.target {
                RouteTarget::Page(page) => Resolution::Page(page.clone()),
                RouteTarget::Redirect(to) => Resolution::Redirect(to.clone()),
                RouteTarget::Detail => Resolution::Page(Page::Detail {
                    category: param(&params, "category"),
                    id: param(&params, "id"),
                }),
            };
        }
        Resolution::Page(Page::NotFound)
    }

    /// Path the address bar should be rewritten to, if the location is an alias
    pub fn redirect_target(&self, location: &str) -> Option<String> {
        match self.resolve(location) {
            Resolution::Redirect(to) => Some(to),
            Resolution::Page(_) => None,
        }
    }

    /// Resolve and follow redirects to the page that ends up rendered
    pub fn resolve_page(&self, location: &str) -> Page {
        let mut resolution = self.resolve(location);
        // Aliases point at real pages; the bound only guards misconfigured tables.
        for _ in 0..=self.entries.len() {
            match resolution {
                Resolution::Page(page) => return page,
                Resolution::Redirect(to) => resolution = self.resolve(&to),
            }
        }
        log::warn!("Redirect loop while resolving {}", location);
        Page::NotFound
    }
}

/// Singular category paths from previously published links
pub fn legacy_aliases() -> Vec<RouteEntry> {
    Category::all()
        .into_iter()
        .map(|c| RouteEntry::redirect(format!("/{}", c.legacy_slug()), format!("/{}", c.slug())))
        .collect()
}

/// Strip query, fragment and trailing slash. Empty becomes `/`.
pub fn normalize_path(location: &str) -> String {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn match_pattern(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = expected.strip_prefix(':') {
            if actual.is_empty() {
                return None;
            }
            let value = urlencoding::decode(actual)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| actual.to_string());
            params.push((name.to_string(), value));
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}

fn param(params: &[(String, String)], name: &str) -> String {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::catalog()
    }

    #[test]
    fn test_root_is_home() {
        assert_eq!(table().resolve("/"), Resolution::Page(Page::Home));
        assert_eq!(table().resolve(""), Resolution::Page(Page::Home));
    }

    #[test]
    fn test_category_pages() {
        for category in Category::all() {
            assert_eq!(
                table().resolve(&format!("/{}", category.slug())),
                Resolution::Page(Page::CategoryList(category))
            );
        }
    }

    #[test]
    fn test_legacy_alias_redirects() {
        assert_eq!(
            table().resolve("/ceramic"),
            Resolution::Redirect("/ceramics".to_string())
        );
        assert_eq!(
            table().resolve("/calligraphy"),
            Resolution::Redirect("/calligraphies".to_string())
        );
    }

    #[test]
    fn test_alias_renders_same_page_as_plural() {
        for category in Category::all() {
            let legacy = table().resolve_page(&format!("/{}", category.legacy_slug()));
            let plural = table().resolve_page(&format!("/{}", category.slug()));
            assert_eq!(legacy, plural);
            assert_eq!(plural, Page::CategoryList(category));
        }
    }

    #[test]
    fn test_alias_page_is_stable_across_rewrite() {
        let table = table();
        let before = table.resolve_page("/ceramic");
        let target = table.redirect_target("/ceramic").unwrap();
        assert_eq!(target, "/ceramics");
        assert_eq!(table.resolve_page(&target), before);
        assert_eq!(table.redirect_target(&target), None);
    }

    #[test]
    fn test_static_pages() {
        assert_eq!(table().resolve_page("/story"), Page::Story);
        assert_eq!(table().resolve_page("/services"), Page::Services);
        assert_eq!(table().resolve_page("/contact"), Page::Contact);
        assert_eq!(table().resolve_page("/admin"), Page::Admin);
    }

    #[test]
    fn test_detail_catch_all() {
        assert_eq!(
            table().resolve_page("/jades/1"),
            Page::Detail {
                category: "jades".to_string(),
                id: "1".to_string()
            }
        );
        assert_eq!(
            table().resolve_page("/bronzes/2?from=home#top"),
            Page::Detail {
                category: "bronzes".to_string(),
                id: "2".to_string()
            }
        );
    }

    #[test]
    fn test_exact_entries_win_over_catch_all() {
        let table = RouteTable::new(vec![
            RouteEntry {
                pattern: "/:category/:id".to_string(),
                target: RouteTarget::Detail,
            },
            RouteEntry::page("/admin/uploads", Page::Admin),
        ]);
        assert_eq!(table.resolve_page("/admin/uploads"), Page::Admin);
        assert!(matches!(table.resolve_page("/admin/other"), Page::Detail { .. }));
    }

    #[test]
    fn test_unmatched_is_not_found() {
        assert_eq!(table().resolve_page("/a/b/c"), Page::NotFound);
        assert_eq!(table().resolve_page("/furniture"), Page::NotFound);
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            table().resolve_page("/ceramics/"),
            Page::CategoryList(Category::Ceramics)
        );
    }

    #[test]
    fn test_redirect_loop_ends_in_not_found() {
        let table = RouteTable::new(vec![
            RouteEntry::redirect("/a", "/b"),
            RouteEntry::redirect("/b", "/a"),
        ]);
        assert_eq!(table.resolve_page("/a"), Page::NotFound);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/jades/"), "/jades");
        assert_eq!(normalize_path("jades"), "/jades");
        assert_eq!(normalize_path("/?x=1"), "/");
        assert_eq!(normalize_path("#/story"), "/");
    }
}
