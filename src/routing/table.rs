//! Route table construction.
//!
//! # Responsibilities
//! - Turn raw `RouteSpec` declarations into fully resolved `RouteEntry` values
//! - Fold global defaults (cache lifetime, redirect paths) into each entry
//! - Infer the VCS of every route, failing fast when it cannot be determined
//! - Sort entries by path so the resolver can binary search them
//!
//! # Design Decisions
//! - Built once at startup, immutable at runtime
//! - Entries never consult global config again after construction
//! - No partial tables: the first bad route aborts the build

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::{RouteSpec, VanityConfig};
use crate::routing::vcs::Vcs;

/// Cache lifetime used when neither the route nor the config sets one (24h).
pub const DEFAULT_CACHE_MAX_AGE: u64 = 86_400;

/// Errors raised while building the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The route declares a VCS outside the supported set.
    #[error("configuration for {path}: unknown VCS {vcs}")]
    UnknownVcs { path: String, vcs: String },

    /// The route declares no VCS and none can be inferred from its repository.
    #[error("configuration for {path}: cannot infer VCS from {repo:?}")]
    CannotInferVcs { path: String, repo: String },
}

/// Process-wide defaults folded into every entry.
#[derive(Debug, Clone, Default)]
pub struct RouteDefaults {
    /// Global cache lifetime in seconds.
    pub cache_max_age: Option<u64>,

    /// Global redirect sub-path substrings.
    pub redir_paths: Vec<String>,
}

/// A fully resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// The key the route was declared under, trailing slash included.
    pub path: String,

    /// Precomputed `Cache-Control` header value.
    pub cache_control: String,

    /// `None` only for redirect-only routes.
    pub vcs: Option<Vcs>,

    pub repo: String,
    pub redir: String,

    /// Explicit `go-source` display override, used verbatim.
    pub display: Option<String>,

    pub wildcard: bool,
    pub tags: HashMap<String, String>,

    /// Effective redirect sub-path substrings (own list or inherited).
    pub redir_paths: Vec<String>,

    /// The route's own cache lifetime, if it declared one.
    pub cache_max_age: Option<u64>,
}

impl RouteEntry {
    /// Resolve one declaration against the global defaults.
    pub fn build(path: &str, spec: &RouteSpec, defaults: &RouteDefaults) -> Result<Self, RouteError> {
        let redir_paths = spec
            .redir_paths
            .clone()
            .unwrap_or_else(|| defaults.redir_paths.clone());

        let max_age = spec
            .cache_max_age
            .or(defaults.cache_max_age)
            .unwrap_or(DEFAULT_CACHE_MAX_AGE);

        let vcs = resolve_vcs(path, spec)?;

        Ok(Self {
            path: path.to_string(),
            cache_control: cache_control(max_age),
            vcs,
            repo: spec.repo.clone(),
            redir: spec.redir.clone(),
            display: (!spec.display.is_empty()).then(|| spec.display.clone()),
            wildcard: spec.wildcard,
            tags: spec.tags.clone(),
            redir_paths,
            cache_max_age: spec.cache_max_age,
        })
    }

    /// A route with a redirect target and no repository.
    pub fn is_redirect_only(&self) -> bool {
        self.repo.is_empty() && !self.redir.is_empty()
    }
}

fn resolve_vcs(path: &str, spec: &RouteSpec) -> Result<Option<Vcs>, RouteError> {
    if !spec.vcs.is_empty() {
        return Vcs::from_declared(&spec.vcs)
            .map(Some)
            .ok_or_else(|| RouteError::UnknownVcs {
                path: path.to_string(),
                vcs: spec.vcs.clone(),
            });
    }

    // Redirect-only can go anywhere; a route with no repo serves 404s.
    if spec.repo.is_empty() {
        return Ok(None);
    }

    Vcs::infer(&spec.repo)
        .map(Some)
        .ok_or_else(|| RouteError::CannotInferVcs {
            path: path.to_string(),
            repo: spec.repo.clone(),
        })
}

fn cache_control(max_age: u64) -> String {
    format!("public, max-age={}", max_age)
}

/// Immutable, path-sorted list of routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build the table from route declarations keyed by path.
    pub fn build(paths: &HashMap<String, RouteSpec>, defaults: &RouteDefaults) -> Result<Self, RouteError> {
        let entries = paths
            .iter()
            .map(|(path, spec)| RouteEntry::build(path, spec, defaults))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_entries(entries))
    }

    /// Build the table from a loaded configuration.
    pub fn from_config(config: &VanityConfig) -> Result<Self, RouteError> {
        let defaults = RouteDefaults {
            cache_max_age: config.cache_max_age,
            redir_paths: config.redir_paths.clone(),
        };
        Self::build(&config.paths, &defaults)
    }

    /// Wrap already resolved entries, sorting them by path.
    pub fn from_entries(mut entries: Vec<RouteEntry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Self { entries }
    }

    /// Entries in ascending path order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
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

    fn spec(repo: &str) -> RouteSpec {
        RouteSpec {
            repo: repo.to_string(),
            ..Default::default()
        }
    }

    fn table(routes: Vec<(&str, RouteSpec)>, defaults: &RouteDefaults) -> Result<RouteTable, RouteError> {
        let paths = routes
            .into_iter()
            .map(|(p, s)| (p.to_string(), s))
            .collect::<HashMap<_, _>>();
        RouteTable::build(&paths, defaults)
    }

    #[test]
    fn test_sorted_by_path() {
        let t = table(
            vec![
                ("/xyz", spec("https://github.com/a/xyz")),
                ("/", spec("https://github.com/a/root")),
                ("/abc/", spec("https://github.com/a/abc")),
                ("/abc", spec("https://github.com/a/abc")),
            ],
            &RouteDefaults::default(),
        )
        .unwrap();

        let paths: Vec<&str> = t.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/abc", "/abc/", "/xyz"]);
    }

    #[test]
    fn test_cache_control_precedence() {
        let mut own = spec("https://github.com/a/b");
        own.cache_max_age = Some(0);

        let cases = vec![
            (None, None, "public, max-age=86400"),
            (Some(60), None, "public, max-age=60"),
            (Some(0), None, "public, max-age=0"),
            (Some(60), Some(99), "public, max-age=99"),
            (None, Some(0), "public, max-age=0"),
        ];

        for (global, route, want) in cases {
            let mut s = spec("https://github.com/a/b");
            s.cache_max_age = route;
            let defaults = RouteDefaults {
                cache_max_age: global,
                ..Default::default()
            };
            let entry = RouteEntry::build("/b", &s, &defaults).unwrap();
            assert_eq!(entry.cache_control, want, "global={:?} route={:?}", global, route);
        }

        let entry = RouteEntry::build("/b", &own, &RouteDefaults::default()).unwrap();
        assert_eq!(entry.cache_max_age, Some(0));
    }

    #[test]
    fn test_redir_paths_inheritance() {
        let defaults = RouteDefaults {
            redir_paths: vec!["/download".into()],
            ..Default::default()
        };

        let inherited = RouteEntry::build("/a", &spec("https://github.com/a/a"), &defaults).unwrap();
        assert_eq!(inherited.redir_paths, vec!["/download".to_string()]);

        let mut empty = spec("https://github.com/a/a");
        empty.redir_paths = Some(Vec::new());
        let overridden = RouteEntry::build("/a", &empty, &defaults).unwrap();
        assert!(overridden.redir_paths.is_empty());

        let mut own = spec("https://github.com/a/a");
        own.redir_paths = Some(vec!["releases".into()]);
        let overridden = RouteEntry::build("/a", &own, &defaults).unwrap();
        assert_eq!(overridden.redir_paths, vec!["releases".to_string()]);
    }

    #[test]
    fn test_vcs_inference() {
        let defaults = RouteDefaults::default();

        let entry = RouteEntry::build("/p", &spec("https://github.com/rakyll/portmidi"), &defaults).unwrap();
        assert_eq!(entry.vcs, Some(Vcs::Git));

        let mut gitlab = spec("https://gitlab.com/rakyll/portmidi");
        gitlab.vcs = "gitlab".into();
        let entry = RouteEntry::build("/p", &gitlab, &defaults).unwrap();
        assert_eq!(entry.vcs, Some(Vcs::Git));

        let mut hg = spec("https://bitbucket.org/zombiezen/gopdf");
        hg.vcs = "hg".into();
        let entry = RouteEntry::build("/p", &hg, &defaults).unwrap();
        assert_eq!(entry.vcs, Some(Vcs::Hg));

        let mut explicit = spec("https://testbucket.org/zombiezen/gopdf");
        explicit.vcs = "git".into();
        let entry = RouteEntry::build("/p", &explicit, &defaults).unwrap();
        assert_eq!(entry.vcs, Some(Vcs::Git));
    }

    #[test]
    fn test_redirect_only_skips_inference() {
        let s = RouteSpec {
            redir: "https://downloads.example.com".into(),
            ..Default::default()
        };
        let entry = RouteEntry::build("/dl", &s, &RouteDefaults::default()).unwrap();
        assert_eq!(entry.vcs, None);
        assert!(entry.is_redirect_only());
    }

    #[test]
    fn test_display_override_carried() {
        let mut s = spec("https://github.com/rakyll/portmidi");
        s.display = "https://github.com/rakyll/portmidi _ _".into();
        let entry = RouteEntry::build("/p", &s, &RouteDefaults::default()).unwrap();
        assert_eq!(entry.display.as_deref(), Some("https://github.com/rakyll/portmidi _ _"));

        let entry = RouteEntry::build("/p", &spec("https://github.com/a/b"), &RouteDefaults::default()).unwrap();
        assert_eq!(entry.display, None);
    }

    #[test]
    fn test_bad_configs() {
        let defaults = RouteDefaults::default();

        let err = table(vec![("/missingvcs", spec("https://unknownbucket.org/zombiezen/gopdf"))], &defaults)
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::CannotInferVcs {
                path: "/missingvcs".into(),
                repo: "https://unknownbucket.org/zombiezen/gopdf".into(),
            }
        );

        let mut unknown = spec("https://unknownbucket.org/zombiezen/gopdf");
        unknown.vcs = "xyzzy".into();
        let err = table(
            vec![("/ok", spec("https://github.com/a/b")), ("/unknownvcs", unknown)],
            &defaults,
        )
        .unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownVcs {
                path: "/unknownvcs".into(),
                vcs: "xyzzy".into(),
            }
        );
        assert_eq!(err.to_string(), "configuration for /unknownvcs: unknown VCS xyzzy");

    }

    #[test]
    fn test_route_without_target_is_kept() {
        let t = table(vec![("/empty", RouteSpec::default())], &RouteDefaults::default()).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.entries()[0].vcs, None);
        assert!(!t.entries()[0].is_redirect_only());
    }
}
