//! Reusable wire-message fixtures.
//!
//! Observation frames are tedious to construct by hand; tests across the
//! workspace share these builders instead of repeating themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{
    ability, feature_frame, frame_with_player, plane, raw_unit, solid_plane, FrameBuilder,
};
