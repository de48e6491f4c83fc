//! Observation assembly and action translation.
//!
//! This crate glues the others together: it decodes feature-layer planes
//! into typed grids ([`features`]), computes which actions are legal
//! ([`avail`]), and assembles one structured [`Observation`] per step while
//! translating agent actions to and from the engine's message format
//! ([`Translator`]).
//!
//! One [`Translator`] serves one game instance. It carries per-step mutable
//! state (the camera offset and the cached unit-tag list), so callers must
//! serialize `observe` → `act` per instance and give each concurrent game
//! its own translator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod avail;
pub mod config;
pub mod features;
pub mod observation;
pub mod translator;
pub mod units;

pub use avail::available_actions;
pub use config::{Dimensions, InterfaceConfig};
pub use features::{
    unpack_plane, unpack_rgb, Effect, FeatureKind, FeatureSpec, LayerSet, PlayerRelative,
    Visibility,
};
pub use observation::{Observation, FEATURE_UNIT_NAMES, PLAYER_NAMES, SCORE_NAMES, UNIT_PANEL_NAMES};
pub use translator::{ObserveError, Translator};
