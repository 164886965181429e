//! Shared primitives for the statplot crates.
//!
//! This crate hosts the geometry and color types that both the core
//! library and the rendering backends depend on.

#![warn(missing_docs)]

pub mod color;
pub mod geom;
