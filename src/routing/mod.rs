//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     paths: { "/pkg": RouteSpec, ... } + global defaults
//!     → table.rs (inherit defaults, infer VCS, precompute Cache-Control)
//!     → sort by path
//!     → Freeze as immutable RouteTable
//!
//! Incoming Request (path)
//!     → router.rs (binary search, prefix fallback, tag extraction)
//!     → source.rs (import path, repo path, go-source, redirect decision)
//!     → Return: Dispatch (index, not found, redirect, vanity page)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same route
//! - Most specific route wins; exact matches beat prefixes

pub mod router;
pub mod source;
pub mod table;
pub mod vcs;

pub use router::{extract_tag, Dispatch, ResolvedRoute};
pub use source::HostConvention;
pub use table::{RouteDefaults, RouteEntry, RouteError, RouteTable, DEFAULT_CACHE_MAX_AGE};
pub use vcs::Vcs;
