//! Active-span lookup over the injected tracing backend.

use crate::traits::{SpanOperation, TracingBackend};

/// The root of the currently active span, but only when that root records a
/// navigation or pageload operation — any other root is not ours to label.
/// Side-effect-free.
pub fn active_root_span<B: TracingBackend>(backend: &B) -> Option<B::Span> {
    let span = backend.active_span()?;
    let root = backend.root_span(&span)?;

    match backend.span_operation(&root) {
        Some(SpanOperation::Navigation | SpanOperation::PageLoad) => Some(root),
        _ => None,
    }
}
