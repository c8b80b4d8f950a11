//! Descendant-route detection and whole-tree path reconstruction.
//!
//! A descendant route is a leaf whose subtree is resolved by a separately,
//! dynamically mounted nested router — invisible to static tree inspection.
//! Walking the matched branches (as the resolver does) cannot see past such a
//! leaf, so when the current location sits inside one, the full path is
//! re-derived from the complete route universe instead.

use crate::path::{prefix_with_slash, strip_basename_from_pathname, trim_slash, trim_wildcard};
use crate::route::{Location, RouteDefinition, RouteMatch};
use crate::traits::RouteMatcher;

/// True iff the route is a dynamically-mounted nested-router leaf: no
/// children, renders an element, and its path ends with `/*`.
pub fn route_is_descendant(route: &RouteDefinition) -> bool {
    route.children.is_empty()
        && route.has_element
        && route.path.as_deref().is_some_and(|p| p.ends_with("/*"))
}

fn pick_splat(m: &RouteMatch) -> &str {
    m.splat.as_deref().unwrap_or("")
}

/// True iff any match for the location is a descendant route that captured a
/// non-empty splat parameter.
pub fn location_is_inside_descendant_route<M: RouteMatcher>(
    matcher: &M,
    location: &Location,
    routes: &[RouteDefinition],
) -> bool {
    let Some(matches) = matcher.match_routes(routes, location) else {
        return false;
    };
    matches
        .iter()
        .any(|m| route_is_descendant(&m.route) && !pick_splat(m).is_empty())
}

/// Rebuild the parameterized route path by repeatedly matching against the
/// full route set and peeling the consumed prefix off the pathname.
///
/// Terminates because every recursion either returns directly or both removes
/// the matched route (by id) from the finite top-level set and strictly
/// shortens the pathname; the no-match case returns `""`.
pub fn rebuild_route_path<M: RouteMatcher>(
    matcher: &M,
    all_routes: &[RouteDefinition],
    location: &Location,
) -> String {
    let Some(matches) = matcher.match_routes(all_routes, location) else {
        return String::new();
    };

    for m in &matches {
        // Only a concrete path can contribute a segment; the bare wildcard
        // route never names anything.
        let Some(path) = m.route.path.as_deref().filter(|p| !p.is_empty() && *p != "*") else {
            continue;
        };
        let path = trim_wildcard(path);

        let stripped =
            strip_basename_from_pathname(&location.pathname, &prefix_with_slash(&m.pathname_base));

        if stripped == location.pathname {
            // Nothing left to peel.
            return trim_slash(path).to_string();
        }

        let remaining: Vec<RouteDefinition> = all_routes
            .iter()
            .filter(|route| route.id != m.route.id)
            .cloned()
            .collect();
        let rest = rebuild_route_path(matcher, &remaining, &Location::new(stripped));
        return trim_slash(&format!("{}{}", trim_slash(path), prefix_with_slash(&rest)))
            .to_string();
    }

    String::new()
}
