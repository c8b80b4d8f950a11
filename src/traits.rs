//! Seams to the host application.
//!
//! Route matching and span bookkeeping are owned by the host; this crate only
//! consumes them. Both seams are injected once, at instrumentation bootstrap.

use crate::route::{Location, RouteDefinition, RouteMatch};

/// The external route matcher.
///
/// Must be the host router's own matcher, invoked with the same route-tree
/// values used elsewhere: the rebuilder excludes routes by [`RouteId`] across
/// recursive calls and relies on the matcher honoring whatever subset it is
/// handed. Returns matches root-to-leaf, or `None` when nothing matched.
///
/// [`RouteId`]: crate::route::RouteId
pub trait RouteMatcher {
    fn match_routes(
        &self,
        routes: &[RouteDefinition],
        location: &Location,
    ) -> Option<Vec<RouteMatch>>;
}

impl<F> RouteMatcher for F
where
    F: Fn(&[RouteDefinition], &Location) -> Option<Vec<RouteMatch>>,
{
    fn match_routes(
        &self,
        routes: &[RouteDefinition],
        location: &Location,
    ) -> Option<Vec<RouteMatch>> {
        self(routes, location)
    }
}

/// Operation kind recorded on a tracing span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanOperation {
    Navigation,
    PageLoad,
    /// Any other operation; such spans are never labeled by this crate.
    Other,
}

/// Read-only access to the host tracing facility.
///
/// `Span` is an opaque handle; this crate stores and returns handles but never
/// creates, finishes, or mutates spans.
pub trait TracingBackend {
    type Span: Clone;

    /// The currently active span, if any.
    fn active_span(&self) -> Option<Self::Span>;

    /// The root of the trace the given span belongs to.
    fn root_span(&self, span: &Self::Span) -> Option<Self::Span>;

    /// The operation recorded on the span, if one is recorded.
    fn span_operation(&self, span: &Self::Span) -> Option<SpanOperation>;
}
