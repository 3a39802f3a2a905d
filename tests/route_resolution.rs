//! Property tests for route resolution.

use proptest::prelude::*;

use vanity_urls::routing::{RouteEntry, RouteTable};

fn entry(path: &str) -> RouteEntry {
    RouteEntry {
        path: path.to_string(),
        cache_control: "public, max-age=86400".to_string(),
        vcs: None,
        repo: String::new(),
        redir: String::new(),
        display: None,
        wildcard: false,
        tags: Default::default(),
        redir_paths: Vec::new(),
        cache_max_age: None,
    }
}

/// Exhaustive reference: exact match, else the longest strict string prefix.
fn linear_longest_prefix<'a>(paths: &'a [String], query: &str) -> Option<&'a str> {
    if let Some(exact) = paths.iter().find(|p| p.as_str() == query) {
        return Some(exact.as_str());
    }
    paths
        .iter()
        .filter(|p| p.len() < query.len() && query.starts_with(p.as_str()))
        .max_by_key(|p| p.len())
        .map(String::as_str)
}

fn route_path() -> impl Strategy<Value = String> {
    "/[ab/.]{0,5}"
}

proptest! {
    #[test]
    fn binary_search_matches_linear_scan(
        paths in prop::collection::hash_set(route_path(), 0..12),
        query in route_path(),
    ) {
        let paths: Vec<String> = paths.into_iter().collect();
        let table = RouteTable::from_entries(paths.iter().map(|p| entry(p)).collect());

        let resolved = table.resolve(&query);
        let got = resolved.entry.map(|e| e.path.as_str());
        prop_assert_eq!(got, linear_longest_prefix(&paths, &query));

        if let Some(matched) = resolved.entry {
            let rest = query.strip_prefix(matched.path.as_str()).unwrap();
            prop_assert!(resolved.subpath == rest || Some(resolved.subpath) == rest.strip_prefix('/'));
        } else {
            prop_assert_eq!(resolved.subpath, "");
        }
    }

    #[test]
    fn table_is_sorted(paths in prop::collection::hash_set(route_path(), 0..12)) {
        let table = RouteTable::from_entries(paths.iter().map(|p| entry(p)).collect());
        let sorted: Vec<&str> = table.entries().iter().map(|e| e.path.as_str()).collect();
        prop_assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(sorted.len(), paths.len());
    }
}

#[test]
fn shortest_residual_wins() {
    let table = RouteTable::from_entries(
        ["/example/helloworld", "/", "/y", "/foo"].iter().map(|p| entry(p)).collect(),
    );
    let resolved = table.resolve("/example/foo");
    assert_eq!(resolved.entry.map(|e| e.path.as_str()), Some("/"));
    assert_eq!(resolved.subpath, "example/foo");

    let table = RouteTable::from_entries(
        ["/example/helloworld", "/y", "/foo"].iter().map(|p| entry(p)).collect(),
    );
    assert!(table.resolve("/x").entry.is_none());
}
