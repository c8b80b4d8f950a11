//! Bounded navigation-context stack.
//!
//! When a navigation triggers asynchronous route loading, the location has not
//! updated yet by the time the loading callback fires. The callback therefore
//! needs to be correlated back to the navigation (and its span) that started
//! it. Concurrent and overlapping navigations — rapid back/forward, redirects —
//! can start before any completes, so a single scalar "current navigation" is
//! not enough; a small bounded stack with strict LIFO removal approximates
//! correct nesting for the common case while bounding memory when a navigation
//! is abandoned.
//!
//! The stack is an explicitly constructed value owned by the instrumentation
//! bootstrap, not a module-level global, so independent instances can coexist
//! (and be tested) freely.

use tracing::warn;

/// Maximum number of in-flight navigation contexts kept at once.
pub const MAX_CONTEXT_STACK_SIZE: usize = 10;

/// Correlation handle returned by [`NavigationContextStack::push`].
///
/// Monotonically increasing and never reused within one stack; compared by
/// value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContextToken(u64);

/// One in-flight navigation: where it is headed and the span it belongs to.
#[derive(Clone, Debug)]
pub struct NavigationContext<S> {
    pub token: ContextToken,
    pub target_path: String,
    pub span: S,
}

/// Ordered stack of in-flight navigation contexts, capacity
/// [`MAX_CONTEXT_STACK_SIZE`].
///
/// Overflow evicts the oldest entry (an abandoned navigation, e.g. a loader
/// error that never resolved); removal is otherwise strictly LIFO via
/// [`pop`](Self::pop).
#[derive(Debug)]
pub struct NavigationContextStack<S> {
    entries: Vec<NavigationContext<S>>,
    next_token: u64,
}

impl<S> Default for NavigationContextStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NavigationContextStack<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_token: 0,
        }
    }

    /// Push a context and return its token for later cleanup.
    ///
    /// If the stack is full, the oldest entry is silently evicted first.
    pub fn push(&mut self, target_path: impl Into<String>, span: S) -> ContextToken {
        if self.entries.len() >= MAX_CONTEXT_STACK_SIZE {
            warn!("navigation context stack overflow - evicting oldest context");
            self.entries.remove(0);
        }

        let token = ContextToken(self.next_token);
        self.next_token += 1;
        self.entries.push(NavigationContext {
            token,
            target_path: target_path.into(),
            span,
        });
        token
    }

    /// Remove the top context iff `token` matches it.
    ///
    /// Out-of-order completion is an expected race, not a fault: a non-top
    /// token is a silent no-op, and the stale entry is reclaimed later by
    /// capacity eviction.
    pub fn pop(&mut self, token: ContextToken) {
        if self.entries.last().is_some_and(|top| top.token == token) {
            self.entries.pop();
        }
    }

    /// The current (most recent) navigation context, if any.
    pub fn peek(&self) -> Option<&NavigationContext<S>> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_on_empty_stack_is_none() {
        let stack: NavigationContextStack<u32> = NavigationContextStack::new();
        assert!(stack.peek().is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_after_one_push_returns_that_context() {
        let mut stack = NavigationContextStack::new();
        let token = stack.push("/users/42", 7u32);

        let top = stack.peek().unwrap();
        assert_eq!(top.token, token);
        assert_eq!(top.target_path, "/users/42");
        assert_eq!(top.span, 7);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn tokens_are_unique_per_push() {
        let mut stack = NavigationContextStack::new();
        let a = stack.push("/a", ());
        let b = stack.push("/b", ());
        assert_ne!(a, b);
    }

    #[test]
    fn pop_removes_only_the_matching_top() {
        let mut stack = NavigationContextStack::new();
        let first = stack.push("/first", ());
        let second = stack.push("/second", ());

        // Non-top token: silent no-op.
        stack.pop(first);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek().unwrap().token, second);

        stack.pop(second);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek().unwrap().token, first);

        stack.pop(first);
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_with_stale_token_after_eviction_is_a_no_op() {
        let mut stack = NavigationContextStack::new();
        let stale = stack.push("/stale", ());
        for i in 0..MAX_CONTEXT_STACK_SIZE {
            stack.push(format!("/nav/{i}"), ());
        }

        // "/stale" was evicted; its token matches nothing.
        stack.pop(stale);
        assert_eq!(stack.len(), MAX_CONTEXT_STACK_SIZE);
    }

    #[test]
    fn overflow_evicts_the_oldest_entry() {
        let mut stack = NavigationContextStack::new();
        for i in 0..(MAX_CONTEXT_STACK_SIZE + 1) {
            stack.push(format!("/nav/{i}"), ());
        }

        assert_eq!(stack.len(), MAX_CONTEXT_STACK_SIZE);
        // The first pushed entry is gone; the second survives at the bottom.
        let mut paths = Vec::new();
        while let Some(top) = stack.peek() {
            let token = top.token;
            paths.push(top.target_path.clone());
            stack.pop(token);
        }
        paths.reverse();
        assert_eq!(paths.first().map(String::as_str), Some("/nav/1"));
        assert_eq!(paths.last().map(String::as_str), Some("/nav/10"));
    }
}
