//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Find the most specific route for a request path
//! - Split off the residual sub-path and the trailing version tag
//! - Decide what the HTTP layer should do with the request
//!
//! # Design Decisions
//! - Read-only over an immutable table (thread-safe without locks)
//! - O(log n) exact and directory-prefix lookup via binary search
//! - O(n) fallback scan bounded by the search index
//! - Explicit no-match rather than silent default

use crate::routing::table::{RouteEntry, RouteTable};

/// Result of resolving a request path against the route table.
///
/// `host`, `index_title` and `logo_url` are request-scoped and are filled in
/// by the caller before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    /// The matched route, if any.
    pub entry: Option<&'a RouteEntry>,

    /// Request path remaining after the route path (and separating slash).
    pub subpath: &'a str,

    /// Suffix after the first `.` of the final request path segment.
    pub tag: Option<&'a str>,

    pub host: String,
    pub index_title: String,
    pub logo_url: String,
}

impl<'a> ResolvedRoute<'a> {
    fn matched(entry: &'a RouteEntry, subpath: &'a str, tag: Option<&'a str>) -> Self {
        Self {
            entry: Some(entry),
            subpath,
            tag,
            ..Default::default()
        }
    }

    fn unmatched(tag: Option<&'a str>) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    /// Attach the request-scoped site details.
    pub fn with_site(
        mut self,
        host: impl Into<String>,
        index_title: impl Into<String>,
        logo_url: impl Into<String>,
    ) -> Self {
        self.host = host.into();
        self.index_title = index_title.into();
        self.logo_url = logo_url.into();
        self
    }
}

/// What the HTTP layer should do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<'a> {
    /// No route matched the root path.
    Index,
    /// No route matched, or the matched route has nothing to serve.
    NotFound,
    /// Redirect-eligible request; carries the target URL.
    Redirect(String),
    /// Render the package page for the matched route.
    Vanity(ResolvedRoute<'a>),
}

/// Extract the version tag from the last segment of a request path.
pub fn extract_tag(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next()?;
    segment
        .split_once('.')
        .map(|(_, tag)| tag)
        .filter(|tag| !tag.is_empty())
}

impl RouteTable {
    /// Find the route serving `path`.
    pub fn resolve<'a>(&'a self, path: &'a str) -> ResolvedRoute<'a> {
        let tag = extract_tag(path);
        let entries = self.entries();

        // Fast path with binary search to retrieve exact matches
        // e.g. given ["/", "/abc", "/xyz"], path "/def" won't match.
        let i = entries.partition_point(|e| e.path.as_str() < path);
        if let Some(entry) = entries.get(i) {
            if entry.path == path {
                return ResolvedRoute::matched(entry, "", tag);
            }
        }

        if i > 0 {
            let entry = &entries[i - 1];
            if let Some(subpath) = path
                .strip_prefix(entry.path.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
            {
                return ResolvedRoute::matched(entry, subpath, tag);
            }
        }

        // Slow path, looking for the longest prefix / shortest subpath.
        // After the >= search nothing at or beyond i is a prefix of path.
        let mut best: Option<(&RouteEntry, &str)> = None;
        for entry in &entries[..i] {
            if entry.path.len() >= path.len() {
                // Not found by search, so equal or longer routes can't match.
                continue;
            }
            let Some(subpath) = path.strip_prefix(entry.path.as_str()) else {
                continue;
            };
            if best.map_or(true, |(_, shortest)| subpath.len() < shortest.len()) {
                best = Some((entry, subpath));
            }
        }

        match best {
            Some((entry, subpath)) => ResolvedRoute::matched(entry, subpath, tag),
            None => ResolvedRoute::unmatched(tag),
        }
    }

    /// Resolve `path` and decide how to answer it.
    pub fn dispatch<'a>(&'a self, path: &'a str) -> Dispatch<'a> {
        let resolved = self.resolve(path);
        let Some(entry) = resolved.entry else {
            return if path == "/" { Dispatch::Index } else { Dispatch::NotFound };
        };

        if resolved.is_redirect_eligible() {
            return Dispatch::Redirect(resolved.redirect_target(path));
        }

        if entry.repo.is_empty() {
            // Repo is not set and no paths to redirect.
            return Dispatch::NotFound;
        }

        Dispatch::Vanity(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::{RouteDefaults, RouteEntry};
    use crate::config::RouteSpec;

    fn table(paths: &[&str]) -> RouteTable {
        let entries = paths
            .iter()
            .map(|p| {
                let spec = RouteSpec {
                    repo: format!("https://github.com/example{}", p),
                    ..Default::default()
                };
                RouteEntry::build(p, &spec, &RouteDefaults::default()).unwrap()
            })
            .collect();
        RouteTable::from_entries(entries)
    }

    #[test]
    fn test_find() {
        let cases: Vec<(&[&str], &str, Option<&str>, &str)> = vec![
            (&["/"], "/", Some("/"), ""),
            (&["/portmidi"], "/portmidi", Some("/portmidi"), ""),
            (&["/portmidi"], "/portmidi/", Some("/portmidi"), ""),
            (&["/portmidi"], "/foo", None, ""),
            (&["/portmidi"], "/zzz", None, ""),
            (&["/abc", "/portmidi", "/xyz"], "/portmidi", Some("/portmidi"), ""),
            (&["/abc", "/portmidi", "/xyz"], "/portmidi/foo", Some("/portmidi"), "foo"),
            (&["/", "/abc", "/xyz"], "/abc", Some("/abc"), ""),
            (&["/", "/abc", "/xyz"], "/abc/foo", Some("/abc"), "foo"),
            (&["/example/helloworld", "/", "/y", "/foo"], "/x", Some("/"), "x"),
            (&["/example/helloworld", "/", "/y", "/foo"], "/", Some("/"), ""),
            (&["/example/helloworld", "/", "/y", "/foo"], "/example", Some("/"), "example"),
            (&["/example/helloworld", "/", "/y", "/foo"], "/example/foo", Some("/"), "example/foo"),
            (&["/example/helloworld", "/", "/y", "/foo"], "/y", Some("/y"), ""),
            (&["/example/helloworld", "/", "/y", "/foo"], "/x/y/", Some("/"), "x/y/"),
            (&["/example/helloworld", "/y", "/foo"], "/x", None, ""),
            (&["/abc"], "/abcdef", Some("/abc"), "def"),
            (&["/rakyll/"], "/rakyll/repo/foo", Some("/rakyll/"), "repo/foo"),
            (&["/abc", "/abcd"], "/abcde", Some("/abcd"), "e"),
        ];

        for (paths, query, want, subpath) in cases {
            let t = table(paths);
            let got = t.resolve(query);
            let got_path = got.entry.map(|e| e.path.as_str());
            assert_eq!(
                (got_path, got.subpath),
                (want, subpath),
                "table({:?}).resolve({:?})",
                paths,
                query
            );
        }
    }

    #[test]
    fn test_extract_tag() {
        assert_eq!(extract_tag("/portmidi"), None);
        assert_eq!(extract_tag("/portmidi.v2"), Some("v2"));
        assert_eq!(extract_tag("/a.b/portmidi.v2.1"), Some("v2.1"));
        assert_eq!(extract_tag("/a.b/portmidi"), None);
        assert_eq!(extract_tag("/portmidi."), None);
        assert_eq!(extract_tag("/"), None);
    }

    #[test]
    fn test_tag_on_resolved_route() {
        let t = table(&["/portmidi"]);
        let got = t.resolve("/portmidi.v2");
        assert_eq!(got.entry.map(|e| e.path.as_str()), Some("/portmidi"));
        assert_eq!(got.subpath, ".v2");
        assert_eq!(got.tag, Some("v2"));
    }

    #[test]
    fn test_dispatch() {
        let mut paths = std::collections::HashMap::new();
        paths.insert(
            "/portmidi".to_string(),
            RouteSpec {
                repo: "https://github.com/rakyll/portmidi".into(),
                ..Default::default()
            },
        );
        paths.insert(
            "/dl".to_string(),
            RouteSpec {
                redir: "https://downloads.example.com".into(),
                ..Default::default()
            },
        );
        let defaults = RouteDefaults {
            redir_paths: vec!["releases".into()],
            ..Default::default()
        };
        let t = RouteTable::build(&paths, &defaults).unwrap();

        assert_eq!(t.dispatch("/"), Dispatch::Index);
        assert_eq!(t.dispatch("/nothing"), Dispatch::NotFound);
        assert_eq!(
            t.dispatch("/dl/releases/v1.tgz"),
            Dispatch::Redirect("https://downloads.example.com/releases/v1.tgz".into())
        );
        // Redirect-only route whose subpath is not redirect-eligible.
        assert_eq!(t.dispatch("/dl/other"), Dispatch::NotFound);
        assert!(matches!(t.dispatch("/portmidi/foo"), Dispatch::Vanity(r) if r.subpath == "foo"));
    }
}
