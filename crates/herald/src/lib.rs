//! Herald: the translation layer between a game engine's wire protocol and
//! a structured, semantically-indexed agent interface.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Herald sub-crates. For most users a single `herald` dependency is
//! enough.
//!
//! # Quick start
//!
//! ```rust
//! use herald::prelude::*;
//!
//! // Configure the interface once per game.
//! let config = InterfaceConfig {
//!     feature: Some(Dimensions::square(84, 64).unwrap()),
//!     ..Default::default()
//! };
//! let mut translator = Translator::new(config, (64, 64)).unwrap();
//!
//! // Each step: engine frame in, structured observation out.
//! let frame = ObservationFrame::default();
//! let obs = translator.observe(&frame).unwrap();
//! assert_eq!(obs.get("player").unwrap().value_of("minerals").unwrap(), 0);
//!
//! // Agent action in, engine action out.
//! let call = FunctionCall::validated(
//!     "no_op".into(),
//!     &[],
//!     translator.action_catalog(),
//! )
//! .unwrap();
//! let action = translator
//!     .transform_action(&frame.observation, &call, false)
//!     .unwrap();
//! assert!(action.payload.is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `herald-core` | Geometry, [`types::NamedArray`], error enums |
//! | [`transform`] | `herald-transform` | Composable coordinate transforms |
//! | [`proto`] | `herald-proto` | Wire-schema mirror (observation/action messages) |
//! | [`actions`] | `herald-actions` | Argument kinds, function catalogs, encoding |
//! | [`obs`] | `herald-obs` | Feature codec, availability, the [`obs::Translator`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: geometry, named arrays, and error enums (`herald-core`).
pub use herald_core as types;

/// Composable coordinate transforms (`herald-transform`).
pub use herald_transform as transform;

/// Plain-data mirror of the engine's wire schema (`herald-proto`).
pub use herald_proto as proto;

/// The typed action system and static catalogs (`herald-actions`).
pub use herald_actions as actions;

/// Feature decoding, availability, and observation assembly (`herald-obs`).
pub use herald_obs as obs;

/// Common imports for typical Herald usage.
///
/// ```rust
/// use herald::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use herald_core::{ActionError, ConfigError, DecodeError, NamedArray, Point};

    // Transforms
    pub use herald_transform::{Chain, Linear, PixelToCoord, Transform};

    // Wire schema
    pub use herald_proto::{Action, ActionPayload, ObservationFrame, ObservationMsg};

    // Actions
    pub use herald_actions::{
        ActionSpace, ArgValue, FunctionCall, FunctionCatalog, FunctionRef,
    };

    // Observation surface
    pub use herald_obs::{
        available_actions, Dimensions, InterfaceConfig, Observation, Translator,
    };
}
