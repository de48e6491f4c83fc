//! The action availability engine.
//!
//! Which function ids are legal right now is the union of two sources: UI
//! functions gated by predicates over the observation, and ability-backed
//! functions matched by shape against the engine's usable-ability list.
//! The result is a pure function of the observation for a fixed catalog,
//! returned sorted so two identical observations produce identical lists.

use std::collections::BTreeSet;

use herald_actions::FunctionCatalog;
use herald_core::ActionError;
use herald_proto::ObservationMsg;

/// Compute the sorted list of currently-legal surface function ids.
///
/// Unknown ability ids fall into two strata, deliberately different:
/// an id wholly absent from the static index is logged and skipped (new or
/// map-specific abilities the table has never heard of), while an id that
/// is present but has no function matching its reported point requirement
/// is a fatal [`ActionError::UnknownAbility`]: the shipped table is stale
/// for this engine build, and skipping would silently shrink the action
/// space.
pub fn available_actions(
    obs: &ObservationMsg,
    catalog: &FunctionCatalog,
    hide_specific_actions: bool,
) -> Result<Vec<u32>, ActionError> {
    let mut available: BTreeSet<u32> = BTreeSet::new();

    for func in catalog.ui_functions() {
        if func.avail.is_some_and(|a| a.check(obs)) {
            available.insert(func.id);
        }
    }

    for ability in &obs.abilities {
        let Some(func_ids) = catalog.ability_functions(ability.ability_id) else {
            log::warn!(
                "unknown ability {} seen as available; skipping",
                ability.ability_id
            );
            continue;
        };
        let mut matched = false;
        for &id in func_ids {
            let func = catalog.get(id)?;
            if !func.ftype.matches_point(ability.requires_point) {
                continue;
            }
            matched = true;
            if func.general_id == 0 || !hide_specific_actions {
                available.insert(func.id);
            }
            if func.general_id != 0 {
                // Always surface the general sibling, but only the variant
                // with the same shape: a screen-only ability must not expose
                // the general minimap form.
                if let Some(general_ids) = catalog.ability_functions(func.general_id) {
                    for &gid in general_ids {
                        let general = catalog.get(gid)?;
                        if general.ftype == func.ftype {
                            available.insert(general.id);
                            break;
                        }
                    }
                }
            }
        }
        if !matched {
            return Err(ActionError::UnknownAbility {
                ability_id: ability.ability_id,
                reason: format!(
                    "no registered function takes it with requires_point = {}",
                    ability.requires_point
                ),
            });
        }
    }

    Ok(available.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_actions::{ArgSizes, SURFACE_FUNCTIONS};
    use herald_proto::{AvailableAbility, PlayerCommon};

    fn catalog() -> FunctionCatalog {
        FunctionCatalog::build(
            SURFACE_FUNCTIONS,
            &ArgSizes {
                screen: (84, 84),
                minimap: (64, 64),
                world: (256, 256),
            },
            false,
        )
        .unwrap()
    }

    fn obs(player: PlayerCommon, abilities: Vec<AvailableAbility>) -> ObservationMsg {
        ObservationMsg {
            player_common: player,
            abilities,
            ..Default::default()
        }
    }

    #[test]
    fn army_without_idle_workers() {
        let cat = catalog();
        let obs = obs(
            PlayerCommon {
                idle_worker_count: 0,
                army_count: 3,
                ..Default::default()
            },
            vec![],
        );
        let ids = available_actions(&obs, &cat, true).unwrap();
        // The five always-on UI functions plus select_army.
        for always_on in ["no_op", "move_camera", "select_point", "select_rect",
                          "select_control_group", "select_army"] {
            let id = cat.get_by_name(always_on).unwrap().id;
            assert!(ids.contains(&id), "{always_on} should be available");
        }
        let idle = cat.get_by_name("select_idle_worker").unwrap().id;
        assert!(!ids.contains(&idle));
    }

    #[test]
    fn is_pure_and_sorted() {
        let cat = catalog();
        let obs = obs(
            PlayerCommon {
                army_count: 1,
                larva_count: 2,
                ..Default::default()
            },
            vec![AvailableAbility {
                ability_id: 3674, // Attack: general, point-required
                requires_point: true,
            }],
        );
        let a = available_actions(&obs, &cat, true).unwrap();
        let b = available_actions(&obs, &cat, true).unwrap();
        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn specific_ability_surfaces_its_general() {
        let cat = catalog();
        // Ability 23 is the specific Attack_Attack variant of general 3674.
        let obs = obs(
            PlayerCommon::default(),
            vec![AvailableAbility {
                ability_id: 23,
                requires_point: true,
            }],
        );
        let attack_screen = cat.get_by_name("Attack_screen").unwrap().id;
        let specific_screen = cat.get_by_name("Attack_Attack_screen").unwrap().id;

        let hidden = available_actions(&obs, &cat, true).unwrap();
        assert!(hidden.contains(&attack_screen));
        assert!(!hidden.contains(&specific_screen));

        let shown = available_actions(&obs, &cat, false).unwrap();
        assert!(shown.contains(&attack_screen));
        assert!(shown.contains(&specific_screen));
    }

    #[test]
    fn never_seen_ability_is_skipped() {
        let cat = catalog();
        let obs = obs(
            PlayerCommon::default(),
            vec![AvailableAbility {
                ability_id: 999_999,
                requires_point: false,
            }],
        );
        // Logged and skipped, not an error.
        let ids = available_actions(&obs, &cat, true).unwrap();
        assert!(ids.contains(&0)); // no_op is always there
    }

    #[test]
    fn known_ability_with_wrong_shape_is_fatal() {
        let cat = catalog();
        // Ability 3665 (Stop) only has quick variants; requiring a point
        // means the static table is stale.
        let obs = obs(
            PlayerCommon::default(),
            vec![AvailableAbility {
                ability_id: 3665,
                requires_point: true,
            }],
        );
        assert!(matches!(
            available_actions(&obs, &cat, true),
            Err(ActionError::UnknownAbility { ability_id: 3665, .. })
        ));
    }
}
