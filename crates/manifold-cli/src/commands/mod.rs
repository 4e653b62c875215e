//! CLI commands

pub mod get_manifest;
