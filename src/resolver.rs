//! Name resolution — turns (routes, location, branches) into a stable name.
//!
//! The resolver walks the branches the external matcher produced for the
//! current location, root-to-leaf, accumulating a parameterized path. When the
//! walk cannot produce a trustworthy pattern, the raw pathname is returned
//! with [`TransactionSource::Url`] instead — resolution never fails.
//!
//! [`TransactionSource::Url`]: crate::route::TransactionSource::Url

use crate::descendant::{location_is_inside_descendant_route, rebuild_route_path};
use crate::path::{
    path_ends_with_wildcard, prefix_with_slash, strip_basename_from_pathname, trim_slash,
    url_segment_count,
};
use crate::route::{Location, NameResult, RouteDefinition, RouteMatch};
use crate::traits::RouteMatcher;

/// True if `path` ends with a wildcard and the route has child routes — a
/// placeholder superseded by a deeper match later in the branch sequence.
fn path_is_wildcard_and_has_children(path: &str, route: &RouteDefinition) -> bool {
    path_ends_with_wildcard(path) && !route.children.is_empty()
}

/// Resolves navigation and page-load names.
///
/// Owns the two pieces of one-time configuration: the host router's matcher
/// and the basename-stripping flag. Construct one at instrumentation bootstrap
/// and share it; resolution itself is pure and reentrant.
///
/// ```
/// use route_name::{Location, RouteDefinition, RouteMatch, RouteNameResolver};
///
/// let matcher = |_: &[RouteDefinition], _: &Location| -> Option<Vec<RouteMatch>> { None };
/// let resolver = RouteNameResolver::new(matcher).strip_basename(true);
/// ```
pub struct RouteNameResolver<M> {
    matcher: M,
    strip_basename: bool,
}

impl<M: RouteMatcher> RouteNameResolver<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            strip_basename: false,
        }
    }

    /// Enable or disable basename stripping for resolved names.
    ///
    /// Default: `false`.
    pub fn strip_basename(mut self, strip: bool) -> Self {
        self.strip_basename = strip;
        self
    }

    /// The basename prefix carried into `route`-sourced names. Stripping and
    /// prefixing are mutually exclusive.
    fn basename_prefix<'a>(&self, basename: &'a str) -> &'a str {
        if self.strip_basename { "" } else { basename }
    }

    /// The raw-pathname fallback, basename-stripped per the configured flag.
    pub fn fallback_name(&self, location: &Location, basename: &str) -> String {
        if self.strip_basename {
            strip_basename_from_pathname(&location.pathname, basename).to_string()
        } else {
            location.pathname.clone()
        }
    }

    /// Whether the location sits inside a dynamically-mounted nested router.
    pub fn location_is_inside_descendant_route(
        &self,
        location: &Location,
        all_routes: &[RouteDefinition],
    ) -> bool {
        location_is_inside_descendant_route(&self.matcher, location, all_routes)
    }

    /// Reconstruct the parameterized path from the full route universe.
    pub fn rebuild_route_path(
        &self,
        all_routes: &[RouteDefinition],
        location: &Location,
    ) -> String {
        rebuild_route_path(&self.matcher, all_routes, location)
    }

    /// Resolve a name by walking the matched branches root-to-leaf.
    ///
    /// Absence of routes, branches, or a landed match degrades to the raw
    /// pathname with `Url` source; this method never fails.
    pub fn normalized_name(
        &self,
        routes: &[RouteDefinition],
        location: &Location,
        branches: Option<&[RouteMatch]>,
        basename: &str,
    ) -> NameResult {
        if routes.is_empty() {
            return NameResult::url(self.fallback_name(location, basename));
        }
        let Some(branches) = branches else {
            return NameResult::url(self.fallback_name(location, basename));
        };

        let mut path_builder = String::new();

        for branch in branches {
            let route = &branch.route;

            // Index routes resolve immediately; they have no path of their own.
            if route.is_index {
                return self.index_route_name(&path_builder, &branch.pathname, basename);
            }

            let Some(path) = route.path.as_deref().filter(|p| !p.is_empty()) else {
                continue;
            };
            if path_is_wildcard_and_has_children(path, route) {
                continue;
            }

            let new_path = if path.starts_with('/') || path_builder.ends_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            };
            path_builder = format!(
                "{}{}",
                trim_slash(&path_builder),
                prefix_with_slash(&new_path)
            );

            // This branch hasn't landed on the current location segment yet.
            if trim_slash(&location.pathname) != trim_slash(&format!("{basename}{}", branch.pathname))
            {
                continue;
            }

            // A single dynamic parameter spanning multiple literal segments:
            // the accumulated prefix cannot be trusted once this happens, so
            // only the just-appended segment is returned.
            if url_segment_count(&path_builder) != url_segment_count(&branch.pathname)
                && !path_ends_with_wildcard(&path_builder)
            {
                return NameResult::route(format!(
                    "{}{new_path}",
                    self.basename_prefix(basename)
                ));
            }

            if path_is_wildcard_and_has_children(&path_builder, route) {
                path_builder.pop();
            }

            return NameResult::route(format!(
                "{}{path_builder}",
                self.basename_prefix(basename)
            ));
        }

        NameResult::url(self.fallback_name(location, basename))
    }

    /// Name for an index-route match: prefer the accumulated builder, else the
    /// branch's own pathname; trim a trailing `/*`, then one trailing slash
    /// unless the result is the root.
    fn index_route_name(&self, path_builder: &str, pathname: &str, basename: &str) -> NameResult {
        let reconstructed: &str = if !path_builder.is_empty() {
            path_builder
        } else if self.strip_basename {
            strip_basename_from_pathname(pathname, basename)
        } else {
            pathname
        };

        let mut formatted = reconstructed.strip_suffix("/*").unwrap_or(reconstructed);
        if formatted.len() > 1 && formatted.ends_with('/') {
            formatted = &formatted[..formatted.len() - 1];
        }

        NameResult::route(formatted)
    }

    /// Per-navigation entry point: route through descendant detection first,
    /// then fall back to branch walking.
    ///
    /// `routes` is the tree the branches were matched against; `all_routes` is
    /// the full route universe including dynamically added routes.
    pub fn resolve(
        &self,
        routes: &[RouteDefinition],
        all_routes: &[RouteDefinition],
        location: &Location,
        branches: Option<&[RouteMatch]>,
        basename: &str,
    ) -> NameResult {
        if self.location_is_inside_descendant_route(location, all_routes) {
            let rebuilt = self.rebuild_route_path(all_routes, location);
            let name = prefix_with_slash(&rebuilt).into_owned();
            if !name.is_empty() {
                return NameResult::route(name);
            }
        }

        let mut result = self.normalized_name(routes, location, branches, basename);
        if result.name.is_empty() {
            tracing::debug!(
                pathname = %location.pathname,
                "resolved an empty name, falling back to the raw pathname"
            );
            result.name = location.pathname.clone();
        }
        result
    }
}
