//! Shared test utilities for the gitctx workspace.
//!
//! Dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures driven by the `git` CLI and `git2`
//! - [`repo`]: [`repo::MockRepo`], a working copy cloned from a bare remote
//! - [`doubles`]: scripted executor, recording output, panicking terminator

pub mod doubles;
pub mod git;
pub mod repo;
