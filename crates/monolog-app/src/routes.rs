//! Declarative route table for the navigation shell.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Profile,
    Monologue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
    pub label: &'static str,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        view: View::Profile,
        label: "Profile",
    },
    Route {
        path: "/profile",
        view: View::Profile,
        label: "Profile",
    },
    Route {
        path: "/monologue",
        view: View::Monologue,
        label: "Monologue",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Strip any query or fragment and a trailing slash.
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}

pub fn resolve(path: &str) -> Option<View> {
    let path = normalize(path);
    ROUTES.iter().find(|r| r.path == path).map(|r| r.view)
}

/// One link per view, pointing at the first route for it.
pub fn nav_links(current: &str) -> Vec<NavLink> {
    let active = resolve(current);
    let mut links: Vec<NavLink> = Vec::new();
    for route in ROUTES {
        if links.iter().any(|l| l.label == route.label) {
            continue;
        }
        links.push(NavLink {
            label: route.label,
            path: route.path,
            active: active == Some(route.view),
        });
    }
    links
}
