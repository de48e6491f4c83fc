//! The typed action system: argument kinds, function descriptors, static
//! catalogs, and encoding into the engine's action message.
//!
//! Two independent function tables exist: one for the surface
//! (screen/minimap pixel) interface and one for the raw (unit-tag, world
//! coordinate) interface. Both are static data validated and resolved into
//! a [`FunctionCatalog`] at configuration time; everything downstream
//! indexes functions by id through the catalog.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod call;
pub mod catalog;
pub mod ftype;
pub mod spec;
pub mod tables;

pub use args::{ArgumentKind, ArgumentType, EnumOptions};
pub use call::{ArgValue, FunctionCall, FunctionRef};
pub use catalog::{ArgSizes, FunctionCatalog, FunctionSpec};
pub use ftype::{ActionSpace, FunctionType};
pub use spec::{FunctionDef, UiAvailability};
pub use tables::{RAW_FUNCTIONS, SURFACE_FUNCTIONS};
