//! Route table: the static shell routes merged with feature contributions.
//!
//! Built once in `App` and shared through context. Nothing mutates the tree
//! afterwards, so the nodes sit behind an `Arc<[RouteNode]>`.

use super::model::{join_path, validate_routes, RouteMeta, RouteNode, SETTINGS_ROUTE_NAME};
use std::sync::Arc;

pub const HOME_ROUTE_NAME: &str = "home";
pub const MEDIA_ROUTE_NAME: &str = "media";

/// A route a feature module adds to the tree, optionally under a parent.
#[derive(Debug, Clone)]
pub struct RouteContribution {
    /// Name of the parent route; `None` adds a top-level route.
    pub parent: Option<&'static str>,
    pub node: RouteNode,
}

impl RouteContribution {
    pub fn top_level(node: RouteNode) -> Self {
        Self { parent: None, node }
    }

    pub fn under(parent: &'static str, node: RouteNode) -> Self {
        Self {
            parent: Some(parent),
            node,
        }
    }
}

/// Routes owned by the shell itself.
pub fn shell_routes() -> Vec<RouteNode> {
    vec![
        RouteNode::new("/", HOME_ROUTE_NAME).meta(
            RouteMeta::new()
                .label_key("nav-home")
                .icon("home")
                .order(0),
        ),
        RouteNode::new("/media", MEDIA_ROUTE_NAME).meta(
            RouteMeta::new()
                .label_key("nav-media")
                .icon("video")
                .order(10),
        ),
        RouteNode::new("/settings", SETTINGS_ROUTE_NAME).meta(
            RouteMeta::new()
                .label_key("nav-settings")
                .icon("settings")
                .order(99),
        ),
    ]
}

/// Appends contributions to `base`. A contribution whose parent is unknown
/// is kept as a top-level route so that it stays reachable.
pub fn merge_contributions(
    mut base: Vec<RouteNode>,
    contributions: Vec<RouteContribution>,
) -> Vec<RouteNode> {
    for contribution in contributions {
        match contribution.parent {
            None => base.push(contribution.node),
            Some(parent) => match find_mut(&mut base, parent) {
                Some(parent_node) => parent_node.children.push(contribution.node),
                None => {
                    log::warn!(
                        "route '{}' contributed under unknown parent '{}', kept at top level",
                        contribution.node.name,
                        parent
                    );
                    base.push(contribution.node);
                }
            },
        }
    }
    base
}

fn find_mut<'a>(routes: &'a mut [RouteNode], name: &str) -> Option<&'a mut RouteNode> {
    for node in routes.iter_mut() {
        if node.name == name {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.children, name) {
            return Some(found);
        }
    }
    None
}

/// A route matched against a browser path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    pub node: &'a RouteNode,
    pub parent: Option<&'a RouteNode>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Arc<[RouteNode]>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteNode>) -> Self {
        for error in validate_routes(&routes) {
            log::warn!("route configuration: {}", error);
        }
        Self {
            routes: routes.into(),
        }
    }

    /// Shell routes plus everything the feature modules contribute.
    pub fn build() -> Self {
        Self::new(merge_contributions(
            shell_routes(),
            crate::domain::route_contributions(),
        ))
    }

    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    /// Finds the node whose full path equals `path`. Query strings, fragments
    /// and trailing slashes are ignored.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute<'_>> {
        let wanted = normalize(path);
        resolve_in(&self.routes, "/", None, &wanted)
    }

    /// Full path of the route named `name`.
    pub fn path_of(&self, name: &str) -> Option<String> {
        path_in(&self.routes, "/", name)
    }
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    join_path("/", path.trim_end_matches('/'))
}

fn resolve_in<'a>(
    routes: &'a [RouteNode],
    base: &str,
    parent: Option<&'a RouteNode>,
    wanted: &str,
) -> Option<ResolvedRoute<'a>> {
    for node in routes {
        let full = join_path(base, &node.path);
        if full == wanted {
            return Some(ResolvedRoute { node, parent });
        }
        if let Some(found) = resolve_in(&node.children, &full, Some(node), wanted) {
            return Some(found);
        }
    }
    None
}

fn path_in(routes: &[RouteNode], base: &str, name: &str) -> Option<String> {
    routes.iter().find_map(|node| {
        let full = join_path(base, &node.path);
        if node.name == name {
            Some(full)
        } else {
            path_in(&node.children, &full, name)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(merge_contributions(
            shell_routes(),
            vec![
                RouteContribution::under(MEDIA_ROUTE_NAME, RouteNode::new("channels", "channels")),
                RouteContribution::under(MEDIA_ROUTE_NAME, RouteNode::new("videos", "videos")),
            ],
        ))
    }

    #[test]
    fn test_contributions_land_under_parent() {
        let table = table();
        let media = table
            .routes()
            .iter()
            .find(|r| r.name == MEDIA_ROUTE_NAME)
            .unwrap();
        let names: Vec<&str> = media.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["channels", "videos"]);
    }

    #[test]
    fn test_unknown_parent_falls_back_to_top_level() {
        let merged = merge_contributions(
            shell_routes(),
            vec![RouteContribution::under("missing", RouteNode::new("/orphan", "orphan"))],
        );
        assert_eq!(merged.last().map(|r| r.name.as_str()), Some("orphan"));
    }

    #[test]
    fn test_resolve() {
        let table = table();
        let resolved = table.resolve("/media/videos").unwrap();
        assert_eq!(resolved.node.name, "videos");
        assert_eq!(resolved.parent.map(|p| p.name.as_str()), Some(MEDIA_ROUTE_NAME));

        assert_eq!(table.resolve("/media/").unwrap().node.name, MEDIA_ROUTE_NAME);
        assert_eq!(table.resolve("/?active=1").unwrap().node.name, HOME_ROUTE_NAME);
        assert_eq!(table.resolve("settings").unwrap().node.name, SETTINGS_ROUTE_NAME);
        assert!(table.resolve("/nowhere").is_none());
    }

    #[test]
    fn test_path_of() {
        let table = table();
        assert_eq!(table.path_of("videos").as_deref(), Some("/media/videos"));
        assert_eq!(table.path_of(HOME_ROUTE_NAME).as_deref(), Some("/"));
        assert_eq!(table.path_of("nowhere"), None);
    }
}
