//! Site route table.
//!
//! Maps request paths to what the site serves. Public routes render a page,
//! protected routes redirect to the login path when the visitor is not
//! authenticated, and everything else is not found. The generator walks this
//! table to decide which files to write: a page per public route, a redirect
//! stub per protected route and one `404.html`.
//!
//! There is no authentication backend, so [`AuthState::default`] is always
//! unauthenticated and protected routes always redirect.

use crate::types::Page;

/// Target of the redirect for protected routes.
pub const LOGIN_PATH: &str = "/login";

/// Routes that need an authenticated visitor.
pub const PROTECTED_PATHS: &[&str] = &["/dashboard", "/admin"];

/// Top-level directories written by the generator itself.
const BUILTIN_DIRS: &[&str] = &["projects", "techlog", "contact", "shots", "assets"];

/// Whether a page slug would write over a built-in route or directory.
pub fn is_reserved_slug(slug: &str) -> bool {
    let path = format!("/{slug}");
    BUILTIN_DIRS.contains(&slug) || PROTECTED_PATHS.contains(&path.as_str()) || path == LOGIN_PATH
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    TechLog,
    Contact,
    /// A markdown page, by slug.
    Page(String),
}

impl Route {
    /// Canonical path with trailing slash (`/` for home).
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Projects => "/projects/".to_string(),
            Route::TechLog => "/techlog/".to_string(),
            Route::Contact => "/contact/".to_string(),
            Route::Page(slug) => format!("/{slug}/"),
        }
    }

    /// Output file relative to the site root.
    pub fn output_file(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            other => format!("{}index.html", other.path().trim_start_matches('/')),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(&'static str),
    NotFound,
}

/// The set of routes a built site serves.
#[derive(Debug, Clone)]
pub struct RouteTable {
    public: Vec<Route>,
}

impl RouteTable {
    /// Fixed routes plus one per non-link markdown page. A page whose route
    /// is already taken, or that would shadow a built-in one, is left out.
    pub fn new(pages: &[Page]) -> Self {
        let mut public = vec![Route::Home, Route::Projects, Route::TechLog, Route::Contact];
        for page in pages.iter().filter(|p| !p.is_link) {
            let route = Route::Page(page.slug.clone());
            if page.slug.is_empty() || is_reserved_slug(&page.slug) || public.contains(&route) {
                tracing::warn!(slug = %page.slug, "page skipped: its route is already taken");
                continue;
            }
            public.push(route);
        }
        Self { public }
    }

    pub fn public(&self) -> &[Route] {
        &self.public
    }

    /// Resolve a request path. Trailing slashes are ignored.
    pub fn resolve(&self, path: &str, auth: AuthState) -> Resolution {
        let normalized = normalize(path);
        if PROTECTED_PATHS.contains(&normalized.as_str()) {
            return if auth.authenticated {
                // Protected pages have no content yet
                Resolution::NotFound
            } else {
                Resolution::Redirect(LOGIN_PATH)
            };
        }
        self.public
            .iter()
            .find(|r| normalize(&r.path()) == normalized)
            .map(|r| Resolution::Render(r.clone()))
            .unwrap_or(Resolution::NotFound)
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(slug: &str, is_link: bool) -> Page {
        Page {
            title: slug.to_string(),
            link_title: slug.to_string(),
            slug: slug.to_string(),
            body: String::new(),
            in_nav: true,
            sort_key: 10,
            is_link,
        }
    }

    fn table() -> RouteTable {
        RouteTable::new(&[page("about", false), page("blog", true)])
    }

    #[test]
    fn public_routes_render() {
        let t = table();
        let anon = AuthState::default();
        assert_eq!(t.resolve("/", anon), Resolution::Render(Route::Home));
        assert_eq!(t.resolve("/projects", anon), Resolution::Render(Route::Projects));
        assert_eq!(t.resolve("/techlog/", anon), Resolution::Render(Route::TechLog));
        assert_eq!(
            t.resolve("about", anon),
            Resolution::Render(Route::Page("about".into()))
        );
    }

    #[test]
    fn protected_routes_redirect_to_login() {
        let t = table();
        for path in ["/dashboard", "/admin/"] {
            assert_eq!(
                t.resolve(path, AuthState::default()),
                Resolution::Redirect(LOGIN_PATH)
            );
        }
    }

    #[test]
    fn authenticated_visitor_is_not_redirected() {
        let t = table();
        let auth = AuthState { authenticated: true };
        assert_eq!(t.resolve("/dashboard", auth), Resolution::NotFound);
    }

    #[test]
    fn unknown_and_link_pages_not_found() {
        let t = table();
        assert_eq!(t.resolve("/nope", AuthState::default()), Resolution::NotFound);
        assert_eq!(t.resolve("/blog", AuthState::default()), Resolution::NotFound);
        // the login target itself is not a route
        assert_eq!(t.resolve(LOGIN_PATH, AuthState::default()), Resolution::NotFound);
    }

    #[test]
    fn output_files() {
        assert_eq!(Route::Home.output_file(), "index.html");
        assert_eq!(Route::Projects.output_file(), "projects/index.html");
        assert_eq!(Route::Page("about".into()).output_file(), "about/index.html");
    }

    #[test]
    fn colliding_pages_do_not_replace_builtin_routes() {
        let t = RouteTable::new(&[
            page("", false),
            page("projects", false),
            page("login", false),
            page("about", false),
            page("about", false),
        ]);
        let pages: Vec<&Route> = t
            .public()
            .iter()
            .filter(|r| matches!(r, Route::Page(_)))
            .collect();
        assert_eq!(pages, vec![&Route::Page("about".into())]);
        assert_eq!(t.resolve("/", AuthState::default()), Resolution::Render(Route::Home));
    }

    #[test]
    fn reserved_slugs() {
        for slug in ["projects", "techlog", "contact", "login", "dashboard", "admin", "shots", "assets"] {
            assert!(is_reserved_slug(slug), "{slug}");
        }
        assert!(!is_reserved_slug("about"));
        assert!(!is_reserved_slug("소개"));
    }
}
