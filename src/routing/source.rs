//! Derived paths for a resolved route.
//!
//! Everything the renderer needs (import path, repository path, `go-source`
//! value, title, redirect decision) is computed here from the matched entry,
//! the residual sub-path and the extracted tag. None of it can fail: missing
//! optional fields fall back to defaults.

use crate::routing::router::ResolvedRoute;

/// Source browsing conventions of the hosting services we know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostConvention {
    /// `/tree/<ref>` and `/blob/<ref>` URLs (GitHub, GitLab and the default).
    GitHub,
    /// `/src/<ref>` URLs with `#<file>-<line>` anchors.
    Bitbucket,
}

const CONVENTION_PREFIXES: &[(&str, HostConvention)] =
    &[("https://bitbucket.org", HostConvention::Bitbucket)];

impl HostConvention {
    /// Pick the convention for a repository URL.
    pub fn for_repo(repo: &str) -> Self {
        CONVENTION_PREFIXES
            .iter()
            .find(|(prefix, _)| repo.starts_with(prefix))
            .map(|(_, convention)| *convention)
            .unwrap_or(HostConvention::GitHub)
    }

    /// Reference browsed when no tag applies.
    pub fn default_reference(&self) -> &'static str {
        match self {
            HostConvention::GitHub => "master",
            HostConvention::Bitbucket => "default",
        }
    }

    /// Directory and file templates of the `go-source` meta tag.
    pub fn templates(&self, repo: &str, reference: &str) -> (String, String) {
        match self {
            HostConvention::GitHub => (
                format!("{repo}/tree/{reference}{{/dir}}"),
                format!("{repo}/blob/{reference}{{/dir}}/{{file}}#L{{line}}"),
            ),
            HostConvention::Bitbucket => (
                format!("{repo}/src/{reference}{{/dir}}"),
                format!("{repo}/src/{reference}{{/dir}}/{{file}}#{{file}}-{{line}}"),
            ),
        }
    }
}

impl<'a> ResolvedRoute<'a> {
    /// Tag name when the extracted tag is declared by the matched route.
    pub fn resolved_tag(&self) -> Option<&'a str> {
        let entry = self.entry?;
        self.tag.filter(|tag| entry.tags.contains_key(*tag))
    }

    /// `.tag` when a declared tag was requested, empty otherwise.
    pub fn tag_suffix(&self) -> String {
        self.resolved_tag()
            .map(|tag| format!(".{}", tag))
            .unwrap_or_default()
    }

    /// Repository reference to browse for this request.
    pub fn reference(&self) -> &str {
        let Some(entry) = self.entry else {
            return HostConvention::GitHub.default_reference();
        };
        self.resolved_tag()
            .and_then(|tag| entry.tags.get(tag))
            .map(String::as_str)
            .unwrap_or_else(|| HostConvention::for_repo(&entry.repo).default_reference())
    }

    /// First residual segment appended by wildcard routes.
    ///
    /// A declared tag on a single-segment residual is not part of the name.
    pub fn wildcard_segment(&self) -> &'a str {
        let segment = self.subpath.split('/').next().unwrap_or_default();
        if self.resolved_tag().is_some() && !self.subpath.contains('/') {
            return segment.split_once('.').map_or(segment, |(name, _)| name);
        }
        segment
    }

    /// Import path below the host, without the tag suffix.
    pub fn import_path(&self) -> String {
        let Some(entry) = self.entry else {
            return String::new();
        };
        let mut path = entry.path.clone();
        if entry.wildcard {
            path.push_str(self.wildcard_segment());
        }
        if path.ends_with('/') {
            path.pop();
        }
        path
    }

    /// Import path as shown to users, tag suffix included.
    pub fn display_import_path(&self) -> String {
        self.import_path() + &self.tag_suffix()
    }

    /// Repository URL, expanded for wildcard routes.
    pub fn repo_path(&self) -> String {
        let Some(entry) = self.entry else {
            return String::new();
        };
        let mut repo = entry.repo.clone();
        if entry.wildcard {
            repo.push_str(self.wildcard_segment());
        }
        repo
    }

    /// Content of the `go-source` meta tag.
    pub fn source_path(&self) -> String {
        let prefix = format!("{}{}", self.host, self.display_import_path());
        let Some(entry) = self.entry else {
            return prefix;
        };
        if let Some(display) = &entry.display {
            return format!("{} {}", prefix, display);
        }

        let repo = self.repo_path();
        // A tagged import has no single browsable home page.
        let home = if self.resolved_tag().is_some() { "_" } else { repo.as_str() };
        let (dir, file) = HostConvention::for_repo(&entry.repo).templates(&repo, self.reference());
        format!("{} {} {} {}", prefix, home, dir, file)
    }

    /// Package name: the last segment of the import path.
    pub fn title(&self) -> String {
        let import = self.import_path();
        import.rsplit('/').next().unwrap_or_default().to_string()
    }

    /// Whether this request should be answered with a plain redirect.
    pub fn is_redirect_eligible(&self) -> bool {
        let Some(entry) = self.entry else {
            return false;
        };
        !entry.redir.is_empty()
            && entry
                .redir_paths
                .iter()
                .any(|needle| self.subpath.contains(needle.as_str()))
    }

    /// Redirect target: the route's target plus the request path beyond the route.
    pub fn redirect_target(&self, request_path: &str) -> String {
        let Some(entry) = self.entry else {
            return String::new();
        };
        let rest = request_path
            .strip_prefix(entry.path.as_str())
            .unwrap_or(request_path);
        format!("{}{}", entry.redir, rest)
    }
}
