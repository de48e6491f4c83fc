//! Plain-data mirror of the engine's wire schema.
//!
//! The transport layer (out of scope here) produces and consumes these
//! types; this crate only defines their shape. Message unions ("exactly one
//! of these fields is set") are modeled as Rust enums rather than sets of
//! optional fields, so consumers dispatch with an exhaustive `match` and
//! the invalid zero-or-two-populated states are unrepresentable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod common;
pub mod observation;

pub use action::{Action, ActionPayload, RawAction, RawTarget, SpatialAction, SpatialTarget, UiAction};
pub use common::{PixelPoint, PixelRect, WorldPoint};
pub use observation::{
    ActionResult, AvailableAbility, ControlGroup, FeatureLayerData, ImagePlane, MinimapPlanes,
    ObservationFrame, ObservationMsg, PlayerCommon, RawData, RawPlayer, RawUnit, RenderData, Score,
    ScoreDetails, ScreenPlanes, UiData, UiPanel, UnitInfo, UnitOrder,
};
