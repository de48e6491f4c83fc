//! Static function descriptors and the UI availability predicates.

use herald_proto::{ObservationMsg, UiPanel};

use crate::ftype::FunctionType;

/// Availability predicates for UI functions.
///
/// Ability-backed functions derive availability from the engine's usable
/// ability list; UI functions are instead gated on observation state by one
/// of these predicates. A closed union: `available_actions` dispatches with
/// an exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAvailability {
    /// Always available.
    Always,
    /// The multi-select panel is open.
    HasMultiSelect,
    /// At least one worker is idle.
    IdleWorkers,
    /// At least one army unit exists.
    Army,
    /// At least one warp gate exists.
    WarpGates,
    /// At least one larva exists.
    Larva,
    /// The cargo panel is open.
    HasCargo,
    /// The production panel is open.
    HasProduction,
}

impl UiAvailability {
    /// Evaluate the predicate against one observation.
    pub fn check(self, obs: &ObservationMsg) -> bool {
        let player = &obs.player_common;
        match self {
            Self::Always => true,
            Self::HasMultiSelect => matches!(obs.ui_data.panel, Some(UiPanel::Multi { .. })),
            Self::IdleWorkers => player.idle_worker_count > 0,
            Self::Army => player.army_count > 0,
            Self::WarpGates => player.warp_gate_count > 0,
            Self::Larva => player.larva_count > 0,
            Self::HasCargo => matches!(obs.ui_data.panel, Some(UiPanel::Cargo { .. })),
            Self::HasProduction => {
                matches!(obs.ui_data.panel, Some(UiPanel::Production { .. }))
            }
        }
    }
}

/// One row of a static function table.
///
/// Pure data: ids, names, and the encoder shape. The catalog builder
/// resolves rows into executable [`FunctionSpec`](crate::FunctionSpec)s
/// with sized arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    /// Function id; dense on `0..table.len()` within one table.
    pub id: u32,
    /// Unique name within the table.
    pub name: &'static str,
    /// How this function encodes.
    pub ftype: FunctionType,
    /// Engine ability id, 0 for UI functions.
    pub ability_id: u32,
    /// Ability id of the general form of this action, 0 if this is not a
    /// specific variant.
    pub general_id: u32,
    /// Availability predicate; `None` for ability-backed functions.
    pub avail: Option<UiAvailability>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_proto::{PlayerCommon, UnitInfo};

    fn obs_with(player: PlayerCommon, panel: Option<UiPanel>) -> ObservationMsg {
        let mut obs = ObservationMsg::default();
        obs.player_common = player;
        obs.ui_data.panel = panel;
        obs
    }

    #[test]
    fn player_count_predicates() {
        let obs = obs_with(
            PlayerCommon {
                idle_worker_count: 0,
                army_count: 3,
                ..Default::default()
            },
            None,
        );
        assert!(UiAvailability::Always.check(&obs));
        assert!(UiAvailability::Army.check(&obs));
        assert!(!UiAvailability::IdleWorkers.check(&obs));
        assert!(!UiAvailability::WarpGates.check(&obs));
    }

    #[test]
    fn panel_predicates_are_mutually_exclusive() {
        let obs = obs_with(
            PlayerCommon::default(),
            Some(UiPanel::Multi {
                units: vec![UnitInfo::default()],
            }),
        );
        assert!(UiAvailability::HasMultiSelect.check(&obs));
        assert!(!UiAvailability::HasCargo.check(&obs));
        assert!(!UiAvailability::HasProduction.check(&obs));
    }
}
