//! Route metadata model.
//!
//! A route tree is declared once at startup (see `routes::table`) and only
//! read afterwards. Display attributes live in [`RouteMeta`]; every accessor
//! applies the documented default so callers never deal with absent fields.

use std::collections::HashSet;
use thiserror::Error;

/// Name of the route rendered in the drawer footer instead of the main list.
pub const SETTINGS_ROUTE_NAME: &str = "settings";

/// Display metadata attached to a navigable destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Translation key for the label. Absent → the route name is shown.
    pub label_key: Option<String>,
    pub icon: Option<String>,
    /// Absent means visible.
    pub visible_in_nav: Option<bool>,
    /// Sort key, absent means `0`.
    pub order: Option<i32>,
}

impl RouteMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = Some(key.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible_in_nav = Some(false);
        self
    }
}

/// One navigable destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    /// Absolute for top-level routes (`/media`), relative for children (`videos`).
    pub path: String,
    /// Unique across the whole tree; drawer key and page registry key.
    pub name: String,
    pub meta: Option<RouteMeta>,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            meta: None,
            children: Vec::new(),
        }
    }

    pub fn meta(mut self, meta: RouteMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    pub fn label_key(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.label_key.as_deref())
    }

    pub fn icon(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.icon.as_deref())
    }

    pub fn is_visible_in_nav(&self) -> bool {
        self.meta
            .as_ref()
            .and_then(|m| m.visible_in_nav)
            .unwrap_or(true)
    }

    pub fn order(&self) -> i32 {
        self.meta.as_ref().and_then(|m| m.order).unwrap_or(0)
    }
}

/// Joins a parent path and a child segment without doubling slashes.
pub fn join_path(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches('/');
    let child = child.trim_start_matches('/');
    if child.is_empty() {
        if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        }
    } else {
        format!("{}/{}", parent, child)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteConfigError {
    #[error("route name '{0}' is declared more than once")]
    DuplicateName(String),
    #[error("path '{path}' is declared more than once under '{parent}'")]
    DuplicateSiblingPath { parent: String, path: String },
}

/// Checks global name uniqueness and per-sibling-group path uniqueness.
pub fn validate_routes(routes: &[RouteNode]) -> Vec<RouteConfigError> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    validate_level(routes, "/", &mut names, &mut errors);
    errors
}

fn validate_level<'a>(
    routes: &'a [RouteNode],
    parent: &str,
    names: &mut HashSet<&'a str>,
    errors: &mut Vec<RouteConfigError>,
) {
    let mut paths = HashSet::new();
    for node in routes {
        if !names.insert(node.name.as_str()) {
            errors.push(RouteConfigError::DuplicateName(node.name.clone()));
        }
        if !paths.insert(node.path.as_str()) {
            errors.push(RouteConfigError::DuplicateSiblingPath {
                parent: parent.to_string(),
                path: node.path.clone(),
            });
        }
        let full = join_path(parent, &node.path);
        validate_level(&node.children, &full, names, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_defaults() {
        let bare = RouteNode::new("/x", "x");
        assert!(bare.is_visible_in_nav());
        assert_eq!(bare.order(), 0);
        assert_eq!(bare.label_key(), None);
        assert_eq!(bare.icon(), None);

        let hidden = RouteNode::new("/y", "y").meta(RouteMeta::new().hidden().order(-3));
        assert!(!hidden.is_visible_in_nav());
        assert_eq!(hidden.order(), -3);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/media", "videos"), "/media/videos");
        assert_eq!(join_path("/media/", "/videos"), "/media/videos");
        assert_eq!(join_path("/", "media"), "/media");
        assert_eq!(join_path("/media", ""), "/media");
        assert_eq!(join_path("", ""), "/");
    }

    #[test]
    fn test_validate_routes_accepts_unique_tree() {
        let routes = vec![
            RouteNode::new("/", "home"),
            RouteNode::new("/media", "media").children(vec![
                RouteNode::new("channels", "channels"),
                RouteNode::new("videos", "videos"),
            ]),
        ];
        assert!(validate_routes(&routes).is_empty());
    }

    #[test]
    fn test_validate_routes_reports_duplicates() {
        let routes = vec![
            RouteNode::new("/media", "media")
                .children(vec![RouteNode::new("videos", "videos"), RouteNode::new("videos", "clips")]),
            RouteNode::new("/videos", "videos"),
        ];
        let errors = validate_routes(&routes);
        assert_eq!(
            errors,
            vec![
                RouteConfigError::DuplicateSiblingPath {
                    parent: "/media".to_string(),
                    path: "videos".to_string(),
                },
                RouteConfigError::DuplicateName("videos".to_string()),
            ]
        );
    }
}
