//! Build results exporter library.
//!
//! Normalizes raw per-test records from a build system into canonical tests,
//! suite rollups and a build status, ready for a persistence layer.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
