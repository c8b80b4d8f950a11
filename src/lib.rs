//! # Navigation name resolution (route-name)
//!
//! Computes a stable, human-readable name for a client-side navigation or
//! page-load event, for use by an observability/tracing layer. Inputs are a
//! static tree of route definitions, the current location, and the ordered
//! list of route branches an external router matched against that location.
//!
//! ## Design
//!
//! ```text
//! resolve ──▶ descendant check ──┬─▶ rebuild_route_path   (nested routers)
//!                                └─▶ normalized_name      (branch walking)
//!                                          │
//!                                          ▼
//!                               NameResult { name, source }
//! ```
//!
//! `source` classifies the result: `Route` is a parameterized pattern — low
//! cardinality, safe to aggregate — while `Url` is a raw pathname kept as a
//! best-effort fallback. Resolution never fails; every degenerate input
//! degrades to the `Url` classification.
//!
//! Route matching itself is delegated to the host router through the
//! [`RouteMatcher`] seam, and spans are only read through [`TracingBackend`];
//! this crate creates neither. The [`NavigationContextStack`] correlates
//! asynchronously-resolved navigations with their span, since the location has
//! not yet updated when such callbacks fire.
//!
//! ```
//! use route_name::{Location, RouteDefinition, RouteMatch, RouteNameResolver, RouteTree};
//!
//! let tree = RouteTree::build(vec![RouteDefinition::path("/users/:id")]).unwrap();
//!
//! // The host router's matcher is injected once at bootstrap.
//! let matcher = |routes: &[RouteDefinition], _: &Location| -> Option<Vec<RouteMatch>> {
//!     Some(vec![RouteMatch::new(routes[0].clone(), "/users/42", "/users/42")])
//! };
//! let resolver = RouteNameResolver::new(matcher);
//!
//! let branches = vec![RouteMatch::new(
//!     tree.routes()[0].clone(),
//!     "/users/42",
//!     "/users/42",
//! )];
//! let result = resolver.normalized_name(
//!     tree.routes(),
//!     &Location::new("/users/42"),
//!     Some(&branches),
//!     "",
//! );
//! assert_eq!(result.name, "/users/:id");
//! ```

pub mod context;
pub mod descendant;
pub mod path;
pub mod resolver;
pub mod route;
pub mod span;
pub mod traits;

pub use context::{
    ContextToken, NavigationContext, NavigationContextStack, MAX_CONTEXT_STACK_SIZE,
};
pub use descendant::{
    location_is_inside_descendant_route, rebuild_route_path, route_is_descendant,
};
pub use path::{
    path_ends_with_wildcard, prefix_with_slash, strip_basename_from_pathname,
    transaction_name_has_wildcard, trim_slash, trim_wildcard, url_segment_count,
};
pub use resolver::RouteNameResolver;
pub use route::{
    Location, NameResult, RouteDefinition, RouteId, RouteMatch, RouteTree, RouteTreeError,
    TransactionSource,
};
pub use span::active_root_span;
pub use traits::{RouteMatcher, SpanOperation, TracingBackend};
