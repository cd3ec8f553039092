#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the product catalog.
///
/// These are plain data structures with minimal behavior, following the
/// hexagonal architecture: the models know nothing about how they are stored
/// or served.
pub mod models;

/// Interface traits for the product catalog.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
/// Adapters (a database, an HTTP server, an authorization scheme) implement
/// or consume these traits without the core depending on any of them.
pub mod ports;
