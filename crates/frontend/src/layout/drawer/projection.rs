//! Drawer projection: route tree in, ordered two-level navigation list out.
//!
//! Pure and UI-free. The renderer in `layout::drawer` only consumes the
//! resulting [`NavItem`]s.

use crate::routes::model::{join_path, RouteNode, SETTINGS_ROUTE_NAME};

/// Display label of a navigation item, resolved lazily against the active
/// translation function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLabel {
    Key(String),
    Raw(String),
}

impl NavLabel {
    pub fn for_route(node: &RouteNode) -> Self {
        match node.label_key() {
            Some(key) => NavLabel::Key(key.to_string()),
            None => NavLabel::Raw(node.name.clone()),
        }
    }

    pub fn resolve(&self, translate: impl Fn(&str) -> String) -> String {
        match self {
            NavLabel::Key(key) => translate(key),
            NavLabel::Raw(raw) => raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Route name; unique, used as the list key.
    pub key: String,
    pub label: NavLabel,
    pub icon: Option<String>,
    pub href: String,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Top-level drawer entries: hidden routes and the settings route dropped,
/// stable-sorted by `order`, with one level of children.
pub fn project_drawer(routes: &[RouteNode]) -> Vec<NavItem> {
    visible_sorted(routes.iter().filter(|node| node.name != SETTINGS_ROUTE_NAME))
        .into_iter()
        .map(|node| {
            let href = join_path("/", &node.path);
            let children = visible_sorted(node.children.iter())
                .into_iter()
                .map(|child| leaf(child, join_path(&href, &child.path)))
                .collect();
            NavItem {
                children,
                ..leaf(node, href)
            }
        })
        .collect()
}

/// The settings entry rendered in the drawer footer, if declared.
pub fn settings_entry(routes: &[RouteNode]) -> Option<NavItem> {
    routes
        .iter()
        .find(|node| node.name == SETTINGS_ROUTE_NAME)
        .map(|node| leaf(node, join_path("/", &node.path)))
}

fn visible_sorted<'a>(nodes: impl Iterator<Item = &'a RouteNode>) -> Vec<&'a RouteNode> {
    let mut visible: Vec<&RouteNode> = nodes.filter(|node| node.is_visible_in_nav()).collect();
    // sort_by_key is stable: equal orders keep declaration order.
    visible.sort_by_key(|node| node.order());
    visible
}

fn leaf(node: &RouteNode, href: String) -> NavItem {
    NavItem {
        key: node.name.clone(),
        label: NavLabel::for_route(node),
        icon: node.icon().map(str::to_string),
        href,
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::model::RouteMeta;

    fn node(path: &str, name: &str, order: Option<i32>) -> RouteNode {
        let mut meta = RouteMeta::new();
        meta.order = order;
        RouteNode::new(path, name).meta(meta)
    }

    fn keys(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn test_reference_scenario() {
        let routes = vec![
            node("/", "home", Some(1)),
            node("/settings", "settings", Some(99)),
            node("/media", "media", Some(0)).children(vec![RouteNode::new("videos", "videos")]),
        ];
        let items = project_drawer(&routes);
        assert_eq!(keys(&items), vec!["media", "home"]);
        assert_eq!(keys(&items[0].children), vec!["videos"]);
        assert_eq!(items[0].children[0].href, "/media/videos");
        assert!(items[0].is_group());
        assert!(!items[1].is_group());
    }

    #[test]
    fn test_excludes_exactly_hidden_and_settings() {
        let routes = vec![
            node("/a", "a", None),
            RouteNode::new("/b", "b").meta(RouteMeta::new().hidden()),
            RouteNode::new("/c", "c").meta(RouteMeta {
                visible_in_nav: Some(true),
                ..RouteMeta::default()
            }),
            node("/settings", SETTINGS_ROUTE_NAME, None),
            RouteNode::new("/d", "d"),
        ];
        assert_eq!(keys(&project_drawer(&routes)), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_hidden_children_are_dropped() {
        let routes = vec![node("/m", "m", None).children(vec![
            RouteNode::new("x", "x").meta(RouteMeta::new().hidden()),
            RouteNode::new("y", "y"),
        ])];
        assert_eq!(keys(&project_drawer(&routes)[0].children), vec!["y"]);
    }

    #[test]
    fn test_equal_and_absent_orders_keep_declaration_order() {
        let routes = vec![
            node("/1", "first", None),
            node("/2", "second", Some(0)),
            node("/3", "third", None),
            node("/4", "fourth", Some(0)),
        ];
        assert_eq!(
            keys(&project_drawer(&routes)),
            vec!["first", "second", "third", "fourth"]
        );
    }

    #[test]
    fn test_smaller_order_first_regardless_of_declaration() {
        let routes = vec![
            node("/z", "late", Some(5)),
            node("/y", "early", Some(-2)),
            node("/x", "middle", None),
        ];
        assert_eq!(keys(&project_drawer(&routes)), vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_children_sorted_and_grandchildren_ignored() {
        let routes = vec![node("/m", "m", None).children(vec![
            node("b", "b", Some(2)),
            node("a", "a", Some(1)).children(vec![RouteNode::new("deep", "deep")]),
        ])];
        let items = project_drawer(&routes);
        assert_eq!(keys(&items[0].children), vec!["a", "b"]);
        assert!(items[0].children[0].children.is_empty());
    }

    #[test]
    fn test_label_resolution() {
        let translate = |key: &str| format!("<{}>", key);
        let keyed = RouteNode::new("/k", "keyed").meta(RouteMeta::new().label_key("nav-keyed"));
        let named = RouteNode::new("/n", "named");
        let anonymous = RouteNode::new("/a", "");

        let items = project_drawer(&[keyed, named, anonymous]);
        let labels: Vec<String> = items.iter().map(|i| i.label.resolve(translate)).collect();
        assert_eq!(labels, vec!["<nav-keyed>", "named", ""]);
    }

    #[test]
    fn test_missing_icon_stays_none() {
        let routes = vec![
            RouteNode::new("/i", "iconic").meta(RouteMeta::new().icon("home")),
            RouteNode::new("/p", "plain"),
        ];
        let items = project_drawer(&routes);
        assert_eq!(items[0].icon.as_deref(), Some("home"));
        assert_eq!(items[1].icon, None);
    }

    #[test]
    fn test_settings_entry() {
        let routes = vec![
            node("/", "home", None),
            RouteNode::new("/settings", SETTINGS_ROUTE_NAME)
                .meta(RouteMeta::new().label_key("nav-settings")),
        ];
        let entry = settings_entry(&routes).unwrap();
        assert_eq!(entry.href, "/settings");
        assert_eq!(entry.label, NavLabel::Key("nav-settings".to_string()));
        assert!(settings_entry(&routes[..1]).is_none());
    }
}
