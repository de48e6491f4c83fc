//! The engine's action message.
//!
//! An action carries at most one payload. A payload-less action is the
//! engine's no-op. Which payload family is legal depends on the interface
//! the session was configured with: UI and spatial payloads belong to the
//! surface interfaces, raw payloads to the raw interface.

use crate::common::{PixelPoint, PixelRect, WorldPoint};

/// One action as submitted to (or reported by) the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Action {
    /// The payload; `None` is a no-op.
    pub payload: Option<ActionPayload>,
}

impl Action {
    /// The no-op action.
    pub fn no_op() -> Self {
        Self { payload: None }
    }

    /// An action carrying the given payload.
    pub fn with(payload: ActionPayload) -> Self {
        Self {
            payload: Some(payload),
        }
    }
}

/// The four payload families.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionPayload {
    /// A UI interaction (panels, control groups, quick selects).
    Ui(UiAction),
    /// A spatial action addressed in feature-layer pixels.
    FeatureLayer(SpatialAction),
    /// A spatial action addressed in RGB render pixels.
    Render(SpatialAction),
    /// A raw action addressed by unit tag and world coordinates.
    Raw(RawAction),
}

/// UI interactions. Field values use the engine's own enum numbering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    /// Act on a control group.
    ControlGroup {
        /// Engine control-group action code (recall, set, append, ...).
        action: u32,
        /// Which control group, 0-9.
        index: u32,
    },
    /// Select the whole army.
    SelectArmy {
        /// Add to the selection instead of replacing it.
        add: bool,
    },
    /// Select all warp gates.
    SelectWarpGates {
        /// Add to the selection instead of replacing it.
        add: bool,
    },
    /// Select all larva.
    SelectLarva,
    /// Select an idle worker.
    SelectIdleWorker {
        /// Engine idle-worker action code (set, add, all, add_all).
        kind: u32,
    },
    /// Act on one unit in the multi-select panel.
    MultiPanel {
        /// Engine multi-panel action code.
        kind: u32,
        /// Index of the unit within the panel.
        unit_index: u32,
    },
    /// Unload one unit from the cargo panel.
    CargoPanel {
        /// Index of the passenger within the panel.
        unit_index: u32,
    },
    /// Cancel one entry in the production panel.
    ProductionPanel {
        /// Index of the queue entry within the panel.
        unit_index: u32,
    },
    /// Toggle an ability's autocast.
    ToggleAutocast {
        /// The ability to toggle.
        ability_id: u32,
    },
}

/// Where a spatial unit command is aimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpatialTarget {
    /// A point on the screen.
    Screen(PixelPoint),
    /// A point on the minimap.
    Minimap(PixelPoint),
}

/// Spatial actions, addressed in the pixels of the owning interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpatialAction {
    /// Move the camera so its center lands on a minimap point.
    CameraMove {
        /// New camera center, in minimap pixels.
        center_minimap: PixelPoint,
    },
    /// Select the unit(s) at a screen point.
    SelectionPoint {
        /// Engine selection-point action code.
        kind: u32,
        /// The point, in screen pixels.
        point: PixelPoint,
    },
    /// Select all units in screen rectangles.
    SelectionRect {
        /// Add to the selection instead of replacing it.
        add: bool,
        /// The rectangles; writers here always emit exactly one,
        /// corner-canonicalized.
        rects: Vec<PixelRect>,
    },
    /// Command the selection to use an ability.
    UnitCommand {
        /// The ability to use.
        ability_id: u32,
        /// Queue behind existing orders instead of replacing them.
        queued: bool,
        /// Target point, if the ability takes one.
        target: Option<SpatialTarget>,
    },
}

/// Where a raw unit command is aimed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawTarget {
    /// A world-space point.
    Point(WorldPoint),
    /// Another unit, by tag.
    Unit(u64),
}

/// Raw actions, addressed by unit tag and world coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum RawAction {
    /// Command specific units to use an ability.
    UnitCommand {
        /// The ability to use.
        ability_id: u32,
        /// Queue behind existing orders instead of replacing them.
        queued: bool,
        /// The units that should execute the command.
        unit_tags: Vec<u64>,
        /// Target, if the ability takes one.
        target: Option<RawTarget>,
    },
    /// Move the camera to a world-space center.
    CameraMove {
        /// New camera center, in world units.
        center_world: WorldPoint,
    },
    /// Toggle an ability's autocast on specific units.
    ToggleAutocast {
        /// The ability to toggle.
        ability_id: u32,
        /// The units to toggle it on.
        unit_tags: Vec<u64>,
    },
}
