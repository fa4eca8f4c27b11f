//! Core types for the Stackable layout container.
//!
//! This crate provides the value types shared by the layout crate and its
//! hosts:
//! - Geometry (`Point`, `Size`, `Rect`, `EdgeInsets`)
//! - Container configuration (`Anchor`, `StackConfig`)
//! - Error types

pub mod config;
pub mod errors;
pub mod geometry;

pub use config::*;
pub use errors::*;
pub use geometry::*;
