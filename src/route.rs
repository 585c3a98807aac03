// ---------------------------------------------------------------------------
// Path → page mapping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Secondary page, not built out yet.
    Dashboard,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        match path.trim() {
            "" | "/" => Route::Home,
            "/dashboard" | "/fda" => Route::Dashboard,
            other => Route::NotFound(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Navigation bar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

const LINKS: [(&str, &str); 2] = [("Home", "/"), ("Dashboard", "/dashboard")];

/// Navigation links, with the one leading to the same page as `path` marked
/// active. Aliases such as `/fda` light up their canonical link.
pub fn nav_links(path: &str) -> Vec<NavLink> {
    let current = Route::from_path(path);
    LINKS
        .iter()
        .map(|&(label, href)| NavLink {
            label,
            href,
            active: Route::from_path(href) == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_map_to_pages() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/fda"), Route::Dashboard);
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(
            Route::from_path("/settings"),
            Route::NotFound("/settings".to_string())
        );
    }

    #[test]
    fn only_the_current_link_is_active() {
        let links = nav_links("/dashboard");
        let active: Vec<&str> = links.iter().filter(|l| l.active).map(|l| l.href).collect();
        assert_eq!(active, vec!["/dashboard"]);
        assert!(nav_links("/missing").iter().all(|l| !l.active));
    }

    #[test]
    fn aliases_mark_their_canonical_link() {
        let active = |path: &str| -> Vec<&'static str> {
            nav_links(path)
                .into_iter()
                .filter(|l| l.active)
                .map(|l| l.href)
                .collect()
        };
        assert_eq!(active("/fda"), vec!["/dashboard"]);
        assert_eq!(active(""), vec!["/"]);
        assert_eq!(active(" /dashboard "), vec!["/dashboard"]);
    }
}
