//! cvgen: Typst CV generation from structured JSON resume content.
//!
//! A one-pass build step: load content records from a fixed content
//! directory, resolve per-variant text overrides, normalize and escape for
//! Typst, and emit one `.typ` source document per configured output variant.

pub mod assemble;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod glossary;
pub mod logging;
pub mod normalize;
pub mod pipeline;
pub mod resolve;
pub mod sections;
pub mod variant;
