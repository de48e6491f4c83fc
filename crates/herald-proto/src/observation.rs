//! The engine's per-step observation message.

use crate::common::WorldPoint;

/// One bit-packed image plane as it arrives on the wire.
///
/// `bits_per_pixel` is 1, 8, 16, or 32 for feature layers and 24 for RGB
/// render buffers. A declared size of `(0, 0)` means the layer exists in
/// the schema but is not populated by this engine version.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagePlane {
    /// Bit depth of each pixel.
    pub bits_per_pixel: u32,
    /// Plane width in pixels.
    pub width: u32,
    /// Plane height in pixels.
    pub height: u32,
    /// Packed pixel payload, row-major, rows padded to whole bytes only at
    /// the very end of the buffer (1-bpp planes).
    pub data: Vec<u8>,
}

/// The screen feature-layer planes, one optional slot per layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenPlanes {
    /// Terrain height.
    pub height_map: Option<ImagePlane>,
    /// Fog-of-war visibility.
    pub visibility_map: Option<ImagePlane>,
    /// Creep coverage.
    pub creep: Option<ImagePlane>,
    /// Power field coverage.
    pub power: Option<ImagePlane>,
    /// Absolute owning player per pixel.
    pub player_id: Option<ImagePlane>,
    /// Owner relative to the observer.
    pub player_relative: Option<ImagePlane>,
    /// Unit type id per pixel.
    pub unit_type: Option<ImagePlane>,
    /// Selection highlight.
    pub selected: Option<ImagePlane>,
    /// Hit points.
    pub unit_hit_points: Option<ImagePlane>,
    /// Hit points as a ratio.
    pub unit_hit_points_ratio: Option<ImagePlane>,
    /// Energy.
    pub unit_energy: Option<ImagePlane>,
    /// Energy as a ratio.
    pub unit_energy_ratio: Option<ImagePlane>,
    /// Shields.
    pub unit_shields: Option<ImagePlane>,
    /// Shields as a ratio.
    pub unit_shields_ratio: Option<ImagePlane>,
    /// Unit density.
    pub unit_density: Option<ImagePlane>,
    /// Anti-aliased unit density.
    pub unit_density_aa: Option<ImagePlane>,
    /// Transient effect coverage.
    pub effects: Option<ImagePlane>,
}

impl ScreenPlanes {
    /// Look up a plane by its catalog name.
    pub fn by_name(&self, name: &str) -> Option<&ImagePlane> {
        match name {
            "height_map" => self.height_map.as_ref(),
            "visibility_map" => self.visibility_map.as_ref(),
            "creep" => self.creep.as_ref(),
            "power" => self.power.as_ref(),
            "player_id" => self.player_id.as_ref(),
            "player_relative" => self.player_relative.as_ref(),
            "unit_type" => self.unit_type.as_ref(),
            "selected" => self.selected.as_ref(),
            "unit_hit_points" => self.unit_hit_points.as_ref(),
            "unit_hit_points_ratio" => self.unit_hit_points_ratio.as_ref(),
            "unit_energy" => self.unit_energy.as_ref(),
            "unit_energy_ratio" => self.unit_energy_ratio.as_ref(),
            "unit_shields" => self.unit_shields.as_ref(),
            "unit_shields_ratio" => self.unit_shields_ratio.as_ref(),
            "unit_density" => self.unit_density.as_ref(),
            "unit_density_aa" => self.unit_density_aa.as_ref(),
            "effects" => self.effects.as_ref(),
            _ => None,
        }
    }
}

/// The minimap feature-layer planes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MinimapPlanes {
    /// Terrain height.
    pub height_map: Option<ImagePlane>,
    /// Fog-of-war visibility.
    pub visibility_map: Option<ImagePlane>,
    /// Creep coverage.
    pub creep: Option<ImagePlane>,
    /// Current camera footprint.
    pub camera: Option<ImagePlane>,
    /// Absolute owning player per pixel.
    pub player_id: Option<ImagePlane>,
    /// Owner relative to the observer.
    pub player_relative: Option<ImagePlane>,
    /// Selection highlight.
    pub selected: Option<ImagePlane>,
}

impl MinimapPlanes {
    /// Look up a plane by its catalog name.
    pub fn by_name(&self, name: &str) -> Option<&ImagePlane> {
        match name {
            "height_map" => self.height_map.as_ref(),
            "visibility_map" => self.visibility_map.as_ref(),
            "creep" => self.creep.as_ref(),
            "camera" => self.camera.as_ref(),
            "player_id" => self.player_id.as_ref(),
            "player_relative" => self.player_relative.as_ref(),
            "selected" => self.selected.as_ref(),
            _ => None,
        }
    }
}

/// Feature-layer planes for one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureLayerData {
    /// Camera-local screen planes.
    pub renders: ScreenPlanes,
    /// Whole-map minimap planes.
    pub minimap_renders: MinimapPlanes,
}

/// RGB render buffers for one step (24 bpp).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderData {
    /// Camera-local RGB image.
    pub map: ImagePlane,
    /// Minimap RGB image.
    pub minimap: ImagePlane,
}

/// Per-player resource and supply scalars.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerCommon {
    /// This player's id.
    pub player_id: u32,
    /// Current minerals.
    pub minerals: u32,
    /// Current vespene.
    pub vespene: u32,
    /// Supply in use.
    pub food_used: u32,
    /// Supply cap.
    pub food_cap: u32,
    /// Supply used by army.
    pub food_army: u32,
    /// Supply used by workers.
    pub food_workers: u32,
    /// Workers with nothing to do.
    pub idle_worker_count: u32,
    /// Army unit count.
    pub army_count: u32,
    /// Warp gate count.
    pub warp_gate_count: u32,
    /// Larva count.
    pub larva_count: u32,
}

/// The score breakdown beyond the headline value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreDetails {
    /// Accumulated production idle time.
    pub idle_production_time: f32,
    /// Accumulated worker idle time.
    pub idle_worker_time: f32,
    /// Total value of current units.
    pub total_value_units: f32,
    /// Total value of current structures.
    pub total_value_structures: f32,
    /// Value of units killed.
    pub killed_value_units: f32,
    /// Value of structures killed.
    pub killed_value_structures: f32,
    /// Lifetime minerals collected.
    pub collected_minerals: f32,
    /// Lifetime vespene collected.
    pub collected_vespene: f32,
    /// Current mineral collection rate.
    pub collection_rate_minerals: f32,
    /// Current vespene collection rate.
    pub collection_rate_vespene: f32,
    /// Lifetime minerals spent.
    pub spent_minerals: f32,
    /// Lifetime vespene spent.
    pub spent_vespene: f32,
}

/// Headline score plus its breakdown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Score {
    /// Headline score value.
    pub score: i32,
    /// Component breakdown.
    pub score_details: ScoreDetails,
}

/// A unit row as shown in UI selection panels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitInfo {
    /// Unit type id.
    pub unit_type: u32,
    /// Owner relative to the observer.
    pub player_relative: u32,
    /// Current hit points.
    pub health: i32,
    /// Current shields.
    pub shields: i32,
    /// Current energy.
    pub energy: i32,
    /// Transport slots this unit occupies.
    pub transport_slots_taken: i32,
    /// Build progress in `[0, 1]`.
    pub build_progress: f32,
}

/// One control group's summary line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlGroup {
    /// Which control group (0-9).
    pub control_group_index: u32,
    /// Unit type of the group's leader.
    pub leader_unit_type: u32,
    /// Units in the group.
    pub count: u32,
}

/// The UI panel currently open, if any. At most one is open at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum UiPanel {
    /// A single unit is selected.
    Single {
        /// The selected unit.
        unit: UnitInfo,
    },
    /// Several units are selected.
    Multi {
        /// The selected units in panel order.
        units: Vec<UnitInfo>,
    },
    /// A transport's cargo view.
    Cargo {
        /// The transport itself.
        unit: UnitInfo,
        /// Units loaded into it.
        passengers: Vec<UnitInfo>,
        /// Remaining free slots.
        slots_available: u32,
    },
    /// A production structure's queue view.
    Production {
        /// The producing structure.
        unit: UnitInfo,
        /// Queued units in order.
        build_queue: Vec<UnitInfo>,
    },
}

/// UI state for one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiData {
    /// Control group summary lines (absent groups are omitted).
    pub groups: Vec<ControlGroup>,
    /// The open panel, if any.
    pub panel: Option<UiPanel>,
}

/// One queued order on a raw unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitOrder {
    /// Ability being executed.
    pub ability_id: u32,
    /// Progress in `[0, 1]` where known.
    pub progress: f32,
}

/// A unit as reported by the raw interface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawUnit {
    /// Visible = 1, Snapshot = 2, Hidden = 3.
    pub display_type: i32,
    /// Self = 1, Ally = 2, Neutral = 3, Enemy = 4.
    pub alliance: i32,
    /// Opaque stable identifier for this unit.
    pub tag: u64,
    /// Unit type id.
    pub unit_type: u32,
    /// Owning player, 1-15 (16 = neutral).
    pub owner: i32,
    /// World position.
    pub pos: WorldPoint,
    /// Facing angle in radians.
    pub facing: f32,
    /// Footprint radius in world units.
    pub radius: f32,
    /// Build progress in `[0, 1]`.
    pub build_progress: f32,
    /// Cloaked = 1, CloakedDetected = 2, NotCloaked = 3.
    pub cloak: i32,
    /// Current hit points.
    pub health: f32,
    /// Maximum hit points.
    pub health_max: f32,
    /// Current shields.
    pub shield: f32,
    /// Maximum shields.
    pub shield_max: f32,
    /// Current energy.
    pub energy: f32,
    /// Maximum energy.
    pub energy_max: f32,
    /// Minerals remaining (resource nodes).
    pub mineral_contents: i32,
    /// Vespene remaining (resource nodes).
    pub vespene_contents: i32,
    /// Whether the unit is flying.
    pub is_flying: bool,
    /// Whether the unit is burrowed.
    pub is_burrowed: bool,
    /// Whether this unit is part of the current selection.
    pub is_selected: bool,
    /// Whether the unit is inside the camera footprint.
    pub is_on_screen: bool,
    /// Whether this is a radar blip rather than a sighted unit.
    pub is_blip: bool,
    /// Whether the unit is powered.
    pub is_powered: bool,
    /// Whether the unit is a hallucination.
    pub is_hallucination: bool,
    /// Whether the unit is actively doing something.
    pub active: bool,
    /// Cargo slots in use.
    pub cargo_space_taken: i32,
    /// Total cargo slots.
    pub cargo_space_max: i32,
    /// Harvesters currently assigned.
    pub assigned_harvesters: i32,
    /// Ideal harvester count.
    pub ideal_harvesters: i32,
    /// Weapon cooldown in game loops.
    pub weapon_cooldown: f32,
    /// Queued orders, soonest first.
    pub orders: Vec<UnitOrder>,
    /// Tag of an attached add-on, 0 if none.
    pub add_on_tag: u64,
    /// Active buff ids.
    pub buff_ids: Vec<u32>,
    /// Remaining duration of the primary buff.
    pub buff_duration_remain: i32,
    /// Full duration of the primary buff.
    pub buff_duration_max: i32,
    /// Attack upgrade level.
    pub attack_upgrade_level: i32,
    /// Armor upgrade level.
    pub armor_upgrade_level: i32,
    /// Shield upgrade level.
    pub shield_upgrade_level: i32,
}

/// Raw-interface camera state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawPlayer {
    /// World-space camera center.
    pub camera: WorldPoint,
}

/// Raw-interface state for one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawData {
    /// Camera and per-player raw state.
    pub player: RawPlayer,
    /// All units visible to this player.
    pub units: Vec<RawUnit>,
}

/// One ability the engine reports as currently usable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvailableAbility {
    /// The engine ability id.
    pub ability_id: u32,
    /// Whether invoking it requires a target point.
    pub requires_point: bool,
}

/// The engine's observation message for one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObservationMsg {
    /// Game loop counter.
    pub game_loop: u32,
    /// Per-player scalars.
    pub player_common: PlayerCommon,
    /// Alert codes raised this step.
    pub alerts: Vec<u32>,
    /// Abilities currently usable by the selection.
    pub abilities: Vec<AvailableAbility>,
    /// Score state.
    pub score: Score,
    /// Raw-interface state, when the raw interface is enabled.
    pub raw_data: Option<RawData>,
    /// Feature-layer planes, when the feature interface is enabled.
    pub feature_layer_data: Option<FeatureLayerData>,
    /// RGB render buffers, when the render interface is enabled.
    pub render_data: Option<RenderData>,
    /// UI state.
    pub ui_data: UiData,
}

/// Result code for one action submitted last step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionResult {
    /// Engine result code; 1 is success.
    pub result: u32,
}

/// A full step frame: the observation plus what happened to last step's
/// actions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObservationFrame {
    /// The observation itself.
    pub observation: ObservationMsg,
    /// Actions the engine actually executed since the last frame.
    pub actions: Vec<crate::action::Action>,
    /// Result codes for submitted actions.
    pub action_results: Vec<ActionResult>,
}
