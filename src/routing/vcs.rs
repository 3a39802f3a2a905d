//! Version control systems understood by the `go-import` protocol.

use std::fmt;

/// A supported version control system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vcs {
    Git,
    Bzr,
    Hg,
    Svn,
}

/// Repository URL prefixes used when a route does not declare its VCS.
/// Checked in order; the first matching prefix wins.
const INFERENCE_PREFIXES: &[(&str, Vcs)] = &[
    ("https://git", Vcs::Git),
    ("https://bitbucket", Vcs::Git),
    ("https://bazaar", Vcs::Bzr),
    ("https://hg.", Vcs::Hg),
    ("https://mercurial", Vcs::Hg),
    ("https://svn.", Vcs::Svn),
];

impl Vcs {
    /// Parse an explicitly declared VCS value.
    ///
    /// Hosting service names are accepted as aliases for git.
    pub fn from_declared(value: &str) -> Option<Self> {
        match value {
            "git" | "github" | "gitlab" | "bitbucket" => Some(Vcs::Git),
            "bzr" => Some(Vcs::Bzr),
            "hg" => Some(Vcs::Hg),
            "svn" => Some(Vcs::Svn),
            _ => None,
        }
    }

    /// Infer the VCS from a repository URL prefix.
    pub fn infer(repo: &str) -> Option<Self> {
        INFERENCE_PREFIXES
            .iter()
            .find(|(prefix, _)| repo.starts_with(prefix))
            .map(|(_, vcs)| *vcs)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vcs::Git => "git",
            Vcs::Bzr => "bzr",
            Vcs::Hg => "hg",
            Vcs::Svn => "svn",
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
