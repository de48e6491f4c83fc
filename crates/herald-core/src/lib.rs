//! Core types for the Herald agent interface layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! geometry primitives, the [`NamedArray`] container used throughout the
//! observation surface, and the error enums shared by the other crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod named;
pub mod point;

pub use error::{ActionError, ConfigError, DecodeError, NamedArrayError};
pub use named::{Idx, NamedArray};
pub use point::{Point, Rect};
