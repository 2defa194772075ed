//! Shared test utilities for the site workspace.
//!
//! This crate provides a temporary site fixture so crate test suites do not
//! each hand-roll directory setup. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`site`]: [`TestSite`](site::TestSite) builder for site directories

pub mod site;

pub use site::TestSite;
