//! Integration Tests Module
//!
//! Exercises the public API of Prompt Feed end to end: the filter pipeline
//! and tag index over fixed record sets, the feed facade with scripted
//! providers (including out-of-order resolutions), and config loading.

// Shared scripted providers
mod common;

// Filter pipeline and tag index properties
mod filter_test;

// Feed facade and acquisition ordering
mod feed_test;

// Config file and provider wiring
mod config_test;
