//! Consolidated test utilities for git-menu
//!
//! Integration tests run against real git repositories: a working clone plus
//! a local bare `origin`, so fetch and pull never leave the temp directory.

pub mod repository;
