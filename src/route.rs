//! Route data model — the value-typed view of the host router's route tree.
//!
//! The host application owns the real route configuration; this module holds a
//! read-only mirror of it. Two boundary rules apply:
//!
//! - Every [`RouteDefinition`] carries a stable [`RouteId`], assigned once at
//!   tree construction by [`RouteTree::build`]. All "same route" comparisons go
//!   through ids, never through addresses, so trees can be cloned and filtered
//!   freely.
//! - The external matcher's duck-typed match objects are translated into
//!   [`RouteMatch`] values at the boundary; nothing downstream touches the
//!   matcher's own representation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a route definition within one tree.
///
/// `RouteId::UNASSIGNED` (zero) marks a node that has not passed through
/// [`RouteTree::build`] yet; built trees number nodes depth-first from 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteId(pub u32);

impl RouteId {
    pub const UNASSIGNED: RouteId = RouteId(0);
}

/// One node of the route tree.
///
/// `path` is the route pattern as the host router sees it (`"users/:id"`,
/// `"/app/*"`, ...). Index routes have no path of their own; `has_element`
/// records whether the route renders something, which matters only for
/// descendant-route detection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteDefinition {
    pub id: RouteId,
    pub path: Option<String>,
    pub is_index: bool,
    pub has_element: bool,
    pub children: Vec<RouteDefinition>,
}

impl RouteDefinition {
    /// A route with a path pattern.
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// An index route (renders at the parent's path, has no path of its own).
    pub fn index() -> Self {
        Self {
            is_index: true,
            ..Self::default()
        }
    }

    /// A pathless layout route.
    pub fn layout() -> Self {
        Self::default()
    }

    /// Mark the route as rendering an element.
    pub fn element(mut self) -> Self {
        self.has_element = true;
        self
    }

    /// Append a child route.
    pub fn child(mut self, child: RouteDefinition) -> Self {
        self.children.push(child);
        self
    }
}

/// Errors detected while building a [`RouteTree`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTreeError {
    /// Index routes are leaves; the host router enforces the same rule.
    #[error("index route ({0:?}) cannot have children")]
    IndexRouteWithChildren(RouteId),
}

/// An owned route tree with ids assigned.
///
/// Building the tree walks it depth-first, numbering every node with a fresh
/// [`RouteId`] and validating structure. The resolver and rebuilder only ever
/// borrow `routes()`; the tree itself is never mutated after construction.
/// Deliberately not `Deserialize`: trees only come into existence through
/// [`RouteTree::build`], so ids are always assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RouteTree {
    routes: Vec<RouteDefinition>,
}

impl RouteTree {
    /// Assign depth-first ids and validate the tree.
    pub fn build(mut routes: Vec<RouteDefinition>) -> Result<Self, RouteTreeError> {
        let mut next = 1u32;
        for route in &mut routes {
            Self::number(route, &mut next)?;
        }
        Ok(Self { routes })
    }

    fn number(route: &mut RouteDefinition, next: &mut u32) -> Result<(), RouteTreeError> {
        route.id = RouteId(*next);
        *next += 1;
        if route.is_index && !route.children.is_empty() {
            return Err(RouteTreeError::IndexRouteWithChildren(route.id));
        }
        for child in &mut route.children {
            Self::number(child, next)?;
        }
        Ok(())
    }

    /// The top-level routes, root-to-last in definition order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<RouteDefinition> {
        self.routes
    }
}

/// The current location, reduced to what name resolution needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

impl From<&str> for Location {
    fn from(pathname: &str) -> Self {
        Self::new(pathname)
    }
}

/// One element of the ordered match list the external matcher produced.
///
/// Matches arrive root-to-leaf; the last element is the most specific. `splat`
/// is the remainder captured by a trailing `*` in the route pattern, when any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteDefinition,
    pub pathname: String,
    pub pathname_base: String,
    pub splat: Option<String>,
}

impl RouteMatch {
    pub fn new(
        route: RouteDefinition,
        pathname: impl Into<String>,
        pathname_base: impl Into<String>,
    ) -> Self {
        Self {
            route,
            pathname: pathname.into(),
            pathname_base: pathname_base.into(),
            splat: None,
        }
    }

    /// Record the captured wildcard remainder.
    pub fn with_splat(mut self, splat: impl Into<String>) -> Self {
        self.splat = Some(splat.into());
        self
    }
}

/// Classification of a resolved name.
///
/// `Route` names are parameterized patterns — low cardinality, safe to
/// aggregate on. `Url` names are raw pathnames — high cardinality, best-effort
/// only. The wire strings match what tracing backends expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSource {
    Route,
    Url,
}

impl TransactionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionSource::Route => "route",
            TransactionSource::Url => "url",
        }
    }
}

/// A resolved navigation name plus its cardinality classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResult {
    pub name: String,
    pub source: TransactionSource,
}

impl NameResult {
    pub fn route(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: TransactionSource::Route,
        }
    }

    pub fn url(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: TransactionSource::Url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_assigns_depth_first_ids() {
        let tree = RouteTree::build(vec![
            RouteDefinition::path("/")
                .child(RouteDefinition::path("users/:id").child(RouteDefinition::path("orders"))),
            RouteDefinition::path("/about"),
        ])
        .unwrap();

        let root = &tree.routes()[0];
        assert_eq!(root.id, RouteId(1));
        assert_eq!(root.children[0].id, RouteId(2));
        assert_eq!(root.children[0].children[0].id, RouteId(3));
        assert_eq!(tree.routes()[1].id, RouteId(4));
    }

    #[test]
    fn ids_are_stable_across_rebuilds() {
        let defs = || {
            vec![
                RouteDefinition::path("/").child(RouteDefinition::index()),
                RouteDefinition::path("/app/*").element(),
            ]
        };
        let a = RouteTree::build(defs()).unwrap();
        let b = RouteTree::build(defs()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn build_rejects_index_route_with_children() {
        let err = RouteTree::build(vec![
            RouteDefinition::path("/").child(RouteDefinition::index().child(RouteDefinition::path("nested"))),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTreeError::IndexRouteWithChildren(RouteId(2)));
    }

    #[test]
    fn empty_tree_builds() {
        let tree = RouteTree::build(Vec::new()).unwrap();
        assert!(tree.routes().is_empty());
    }

    #[test]
    fn route_tree_deserializes_from_json_manifest() {
        let manifest = r#"
            [
                {
                    "path": "/",
                    "children": [
                        {
                            "path": "users/:id",
                            "children": [{ "path": "orders" }]
                        }
                    ]
                },
                { "path": "/app/*", "has_element": true }
            ]
        "#;
        let defs: Vec<RouteDefinition> = serde_json::from_str(manifest).unwrap();
        let tree = RouteTree::build(defs).unwrap();

        assert_eq!(tree.routes().len(), 2);
        assert_eq!(tree.routes()[0].children[0].path.as_deref(), Some("users/:id"));
        assert!(tree.routes()[1].has_element);
        assert_eq!(tree.routes()[1].id, RouteId(4));
    }

    #[test]
    fn transaction_source_wire_strings() {
        assert_eq!(TransactionSource::Route.as_str(), "route");
        assert_eq!(TransactionSource::Url.as_str(), "url");
        assert_eq!(
            serde_json::to_string(&TransactionSource::Url).unwrap(),
            r#""url""#
        );
    }
}
