//! Path-string helpers for route name construction.
//!
//! All functions are pure and allocation-free where possible; the resolver and
//! rebuilder compose them into full route names.

use std::borrow::Cow;

/// Strip a single trailing `*` from a route pattern, keeping any slash before it.
///
/// ```text
/// trim_wildcard("/app/*") → "/app/"
/// trim_wildcard("/app")   → "/app"
/// ```
#[inline]
pub fn trim_wildcard(path: &str) -> &str {
    path.strip_suffix('*').unwrap_or(path)
}

/// Strip a single trailing `/`.
///
/// Note this trims `"/"` down to `""`; callers that must preserve the root
/// path handle that case themselves.
#[inline]
pub fn trim_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Ensure a path starts with a forward slash.
#[inline]
pub fn prefix_with_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// True if the path ends with a wildcard character (`*`).
#[inline]
pub fn path_ends_with_wildcard(path: &str) -> bool {
    path.ends_with('*')
}

/// True if a finished transaction name still contains a wildcard (`/*` anywhere,
/// or a trailing `*`). Such names need deferred re-resolution once the routes
/// behind the wildcard are known.
#[inline]
pub fn transaction_name_has_wildcard(name: &str) -> bool {
    name.contains("/*") || name.ends_with('*')
}

/// Number of URL segments in the given URL string.
///
/// Splits at `/` or `\/` so regex-style URLs count correctly; empty segments
/// and lone `,` artifacts are ignored.
pub fn url_segment_count(url: &str) -> usize {
    url.split('/')
        .map(|s| s.strip_suffix('\\').unwrap_or(s))
        .filter(|s| !s.is_empty() && *s != ",")
        .count()
}

/// Strip the basename prefix from a pathname, if present.
///
/// The prefix comparison is ASCII-case-insensitive and a basename with a
/// trailing slash is honored (trailing-slash behavior stays in the caller's
/// control). If the pathname is exactly the basename, `"/"` is returned.
pub fn strip_basename_from_pathname<'a>(pathname: &'a str, basename: &str) -> &'a str {
    if basename.is_empty() || basename == "/" {
        return pathname;
    }

    let path_bytes = pathname.as_bytes();
    let base_bytes = basename.as_bytes();
    if path_bytes.len() < base_bytes.len()
        || !path_bytes[..base_bytes.len()].eq_ignore_ascii_case(base_bytes)
    {
        return pathname;
    }

    let start = if basename.ends_with('/') {
        basename.len() - 1
    } else {
        basename.len()
    };

    match path_bytes.get(start) {
        // pathname does not continue with `basename/`
        Some(&next) if next != b'/' => pathname,
        _ => {
            let rest = &pathname[start..];
            if rest.is_empty() { "/" } else { rest }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_wildcard_strips_only_the_star() {
        assert_eq!(trim_wildcard("/app/*"), "/app/");
        assert_eq!(trim_wildcard("files*"), "files");
        assert_eq!(trim_wildcard("/app"), "/app");
        assert_eq!(trim_wildcard(""), "");
    }

    #[test]
    fn trim_slash_strips_one_trailing_slash() {
        assert_eq!(trim_slash("/orders/"), "/orders");
        assert_eq!(trim_slash("/orders"), "/orders");
        assert_eq!(trim_slash("/"), "");
        assert_eq!(trim_slash("//"), "/");
    }

    #[test]
    fn prefix_with_slash_is_idempotent() {
        assert_eq!(prefix_with_slash("users"), "/users");
        assert_eq!(prefix_with_slash("/users"), "/users");
        assert_eq!(prefix_with_slash(""), "/");
    }

    #[test]
    fn wildcard_detection() {
        assert!(path_ends_with_wildcard("/app/*"));
        assert!(path_ends_with_wildcard("*"));
        assert!(!path_ends_with_wildcard("/app"));

        assert!(transaction_name_has_wildcard("/app/*"));
        assert!(transaction_name_has_wildcard("/app/*/deep"));
        assert!(transaction_name_has_wildcard("files*"));
        assert!(!transaction_name_has_wildcard("/app/files"));
    }

    #[test]
    fn segment_count_ignores_empty_segments() {
        assert_eq!(url_segment_count("/users/42/orders"), 3);
        assert_eq!(url_segment_count("/users/42/orders/"), 3);
        assert_eq!(url_segment_count("/"), 0);
        assert_eq!(url_segment_count(""), 0);
        assert_eq!(url_segment_count("//double//slash"), 2);
    }

    #[test]
    fn segment_count_handles_escaped_slashes() {
        // Regex-style URLs separate segments with `\/`.
        assert_eq!(url_segment_count(r"\/users\/42"), 2);
        assert_eq!(url_segment_count(r"/users/,/orders"), 2);
    }

    #[test]
    fn strip_basename_basic() {
        assert_eq!(strip_basename_from_pathname("/app/users", "/app"), "/users");
        assert_eq!(strip_basename_from_pathname("/app", "/app"), "/");
        assert_eq!(strip_basename_from_pathname("/other/users", "/app"), "/other/users");
    }

    #[test]
    fn strip_basename_without_basename_is_identity() {
        assert_eq!(strip_basename_from_pathname("/users", ""), "/users");
        assert_eq!(strip_basename_from_pathname("/users", "/"), "/users");
    }

    #[test]
    fn strip_basename_is_case_insensitive() {
        assert_eq!(strip_basename_from_pathname("/App/users", "/app"), "/users");
        assert_eq!(strip_basename_from_pathname("/app/users", "/APP"), "/users");
    }

    #[test]
    fn strip_basename_tolerates_trailing_slash_basename() {
        assert_eq!(strip_basename_from_pathname("/app/users", "/app/"), "/users");
    }

    #[test]
    fn strip_basename_requires_a_segment_boundary() {
        // "/application" must not be treated as "/app" + "lication".
        assert_eq!(
            strip_basename_from_pathname("/application/users", "/app"),
            "/application/users"
        );
    }
}
