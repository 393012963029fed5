//! Client-side route table of the dashboard.
//!
//! Each path maps to exactly one page view. The dev server consults this
//! table to decide which unknown paths get `index.html` instead of a 404.

/// Page views of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Tasks,
    Docker,
    Production,
    Rclone,
    StorageArr,
    StorageVfs,
    Journal,
    Firewall,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Tasks => "Tasks",
            View::Docker => "Docker",
            View::Production => "Production",
            View::Rclone => "Rclone",
            View::StorageArr => "StorageArr",
            View::StorageVfs => "StorageVfs",
            View::Journal => "Journal",
            View::Firewall => "Firewall",
        }
    }

    /// Path this view is mounted at.
    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|route| route.view == self)
            .map(|route| route.path)
            .unwrap_or("/")
    }
}

/// A single path → view binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: [Route; 9] = [
    Route { path: "/", view: View::Dashboard },
    Route { path: "/tasks", view: View::Tasks },
    Route { path: "/docker", view: View::Docker },
    Route { path: "/production", view: View::Production },
    Route { path: "/rclone", view: View::Rclone },
    Route { path: "/storage/arr", view: View::StorageArr },
    Route { path: "/storage/vfs", view: View::StorageVfs },
    Route { path: "/logs/journal", view: View::Journal },
    Route { path: "/firewall", view: View::Firewall },
];

/// Finds the view for a request path.
///
/// Matching follows history-mode defaults: case-insensitive, one optional
/// trailing slash, query and fragment ignored.
pub fn resolve(path: &str) -> Option<View> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(stripped) => stripped,
    };

    ROUTES
        .iter()
        .find(|route| route.path.eq_ignore_ascii_case(path))
        .map(|route| route.view)
}
