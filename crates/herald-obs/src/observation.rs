//! The structured observation and its field name tables.

use indexmap::IndexMap;

use herald_core::NamedArray;

/// Names of the `player` vector entries, in order.
pub const PLAYER_NAMES: &[&str] = &[
    "player_id",
    "minerals",
    "vespene",
    "food_used",
    "food_cap",
    "food_army",
    "food_workers",
    "idle_worker_count",
    "army_count",
    "warp_gate_count",
    "larva_count",
];

/// Names of the `score_cumulative` vector entries, in order.
pub const SCORE_NAMES: &[&str] = &[
    "score",
    "idle_production_time",
    "idle_worker_time",
    "total_value_units",
    "total_value_structures",
    "killed_value_units",
    "killed_value_structures",
    "collected_minerals",
    "collected_vespene",
    "collection_rate_minerals",
    "collection_rate_vespene",
    "spent_minerals",
    "spent_vespene",
];

/// Names of the columns in the UI selection-panel unit rows, in order.
pub const UNIT_PANEL_NAMES: &[&str] = &[
    "unit_type",
    "player_relative",
    "health",
    "shields",
    "energy",
    "transport_slots_taken",
    "build_progress",
];

/// Names of the columns in `feature_units` / `raw_units` rows, in order.
///
/// The first seven match [`UNIT_PANEL_NAMES`] so panel code ports over; the
/// rest follow the wire unit struct.
pub const FEATURE_UNIT_NAMES: &[&str] = &[
    "unit_type",
    "alliance",
    "health",
    "shield",
    "energy",
    "cargo_space_taken",
    "build_progress",
    "health_ratio",
    "shield_ratio",
    "energy_ratio",
    "display_type",
    "owner",
    "x",
    "y",
    "facing",
    "radius",
    "cloak",
    "is_selected",
    "is_blip",
    "is_powered",
    "mineral_contents",
    "vespene_contents",
    "cargo_space_max",
    "assigned_harvesters",
    "ideal_harvesters",
    "weapon_cooldown",
    "order_length",
    "order_id_0",
    "order_id_1",
    "tag",
    "hallucination",
    "buff_id_0",
    "buff_id_1",
    "addon_unit_type",
    "active",
    "is_on_screen",
    "order_progress_0",
    "order_progress_1",
    "order_id_2",
    "order_id_3",
    "is_in_cargo",
    "buff_duration_remain",
    "buff_duration_max",
    "attack_upgrade_level",
    "armor_upgrade_level",
    "shield_upgrade_level",
];

/// One step's structured observation: an ordered map of named arrays.
///
/// The field set and every shape are fixed by the catalog configuration.
/// Optional channels are either present with their promised shape or
/// entirely absent; a shape can never silently change between steps.
/// Built fresh each step and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Observation {
    fields: IndexMap<String, NamedArray>,
}

impl Observation {
    /// Create an empty observation (used only by the assembler).
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: NamedArray) {
        self.fields.insert(name.to_string(), value);
    }

    /// Fetch a field by name.
    pub fn get(&self, name: &str) -> Option<&NamedArray> {
        self.fields.get(name)
    }

    /// Whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate `(name, array)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamedArray)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the observation has no fields (it never does once built).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_tables_have_documented_lengths() {
        assert_eq!(PLAYER_NAMES.len(), 11);
        assert_eq!(SCORE_NAMES.len(), 13);
        assert_eq!(UNIT_PANEL_NAMES.len(), 7);
        assert_eq!(FEATURE_UNIT_NAMES.len(), 46);
    }

    #[test]
    fn panel_prefix_matches_unit_rows() {
        // Column sharing is load-bearing: panel indices are reused against
        // unit rows downstream.
        assert_eq!(&FEATURE_UNIT_NAMES[..2], &["unit_type", "alliance"]);
        assert_eq!(UNIT_PANEL_NAMES[0], FEATURE_UNIT_NAMES[0]);
    }
}
