//! Bidirectional action translation: agent call → engine message → agent
//! call → identical engine message.

use herald_actions::{ActionSpace, ArgValue, FunctionCall};
use herald_core::ActionError;
use herald_obs::{Dimensions, InterfaceConfig, Translator};
use herald_proto::{
    ActionPayload, ObservationMsg, PixelPoint, PlayerCommon, RawAction, SpatialAction,
};
use herald_test_utils::{ability, raw_unit, FrameBuilder};

fn surface_translator(hide_specific: bool) -> Translator {
    let config = InterfaceConfig {
        feature: Some(Dimensions::square(84, 64).unwrap()),
        hide_specific_actions: hide_specific,
        ..Default::default()
    };
    Translator::new(config, (64, 64)).unwrap()
}

fn raw_translator() -> Translator {
    let config = InterfaceConfig {
        action_space: Some(ActionSpace::Raw),
        use_raw_units: true,
        ..Default::default()
    };
    Translator::new(config, (64, 64)).unwrap()
}

/// transform → reverse → transform must reproduce the engine message.
fn assert_roundtrip(tr: &Translator, obs: &ObservationMsg, call: &FunctionCall) {
    let first = tr.transform_action(obs, call, true).unwrap();
    let recovered = tr.reverse_action(&first).unwrap();
    let second = tr.transform_action(obs, &recovered, true).unwrap();
    assert_eq!(first, second, "round trip diverged for {call:?}");
}

#[test]
fn ui_and_spatial_functions_roundtrip() {
    let tr = surface_translator(true);
    let obs = ObservationMsg::default();
    let cat = tr.action_catalog();

    let calls = [
        FunctionCall::validated("no_op".into(), &[], cat).unwrap(),
        FunctionCall::validated(
            "move_camera".into(),
            &[ArgValue::List(vec![31, 40])],
            cat,
        )
        .unwrap(),
        FunctionCall::validated(
            "select_point".into(),
            &["toggle".into(), ArgValue::List(vec![23, 38])],
            cat,
        )
        .unwrap(),
        FunctionCall::validated(
            "select_control_group".into(),
            &["append".into(), ArgValue::Scalar(4)],
            cat,
        )
        .unwrap(),
        FunctionCall::validated("select_army".into(), &["add".into()], cat).unwrap(),
        FunctionCall::validated(
            "Attack_screen".into(),
            &["now".into(), ArgValue::List(vec![50, 60])],
            cat,
        )
        .unwrap(),
        FunctionCall::validated(
            "Attack_minimap".into(),
            &["queued".into(), ArgValue::List(vec![10, 11])],
            cat,
        )
        .unwrap(),
        FunctionCall::validated("Stop_quick".into(), &["now".into()], cat).unwrap(),
    ];
    for call in &calls {
        assert_roundtrip(&tr, &obs, call);
    }
}

#[test]
fn select_rect_corner_order_is_canonical() {
    let tr = surface_translator(true);
    let obs = ObservationMsg::default();
    let cat = tr.action_catalog();

    let a = FunctionCall::validated(
        "select_rect".into(),
        &[
            "select".into(),
            ArgValue::List(vec![10, 2]),
            ArgValue::List(vec![4, 9]),
        ],
        cat,
    )
    .unwrap();
    let b = FunctionCall::validated(
        "select_rect".into(),
        &[
            "select".into(),
            ArgValue::List(vec![4, 9]),
            ArgValue::List(vec![10, 2]),
        ],
        cat,
    )
    .unwrap();

    let act_a = tr.transform_action(&obs, &a, true).unwrap();
    let act_b = tr.transform_action(&obs, &b, true).unwrap();
    assert_eq!(act_a, act_b);
    match &act_a.payload {
        Some(ActionPayload::FeatureLayer(SpatialAction::SelectionRect { rects, .. })) => {
            assert_eq!(rects[0].p0, PixelPoint::new(4, 2));
            assert_eq!(rects[0].p1, PixelPoint::new(10, 9));
        }
        other => panic!("unexpected payload {other:?}"),
    }
    assert_roundtrip(&tr, &obs, &a);
}

#[test]
fn specific_actions_reverse_to_their_general_when_hidden() {
    let tr = surface_translator(true);
    let obs = ObservationMsg::default();
    let cat = tr.action_catalog();

    // Attack_Attack_screen is the specific variant under ability 23.
    let specific = FunctionCall::validated(
        "Attack_Attack_screen".into(),
        &["now".into(), ArgValue::List(vec![12, 13])],
        cat,
    )
    .unwrap();
    let engine = tr.transform_action(&obs, &specific, true).unwrap();
    let recovered = tr.reverse_action(&engine).unwrap();
    let general_id = cat.get_by_name("Attack_screen").unwrap().id;
    assert_eq!(recovered.function, general_id);
}

#[test]
fn specific_actions_roundtrip_when_shown() {
    let tr = surface_translator(false);
    let obs = ObservationMsg::default();
    let cat = tr.action_catalog();
    let specific = FunctionCall::validated(
        "Attack_Attack_screen".into(),
        &["now".into(), ArgValue::List(vec![12, 13])],
        cat,
    )
    .unwrap();
    let engine = tr.transform_action(&obs, &specific, true).unwrap();
    let recovered = tr.reverse_action(&engine).unwrap();
    assert_eq!(recovered.function, specific.function);
    assert_roundtrip(&tr, &obs, &specific);
}

#[test]
fn availability_gates_transform() {
    let tr = surface_translator(true);
    let cat = tr.action_catalog();
    let select_army =
        FunctionCall::validated("select_army".into(), &["select".into()], cat).unwrap();

    let without_army = ObservationMsg::default();
    let err = tr
        .transform_action(&without_army, &select_army, false)
        .unwrap_err();
    assert!(matches!(err, ActionError::Unavailable { .. }));
    // The explicit skip flag bypasses the gate.
    assert!(tr
        .transform_action(&without_army, &select_army, true)
        .is_ok());

    let with_army = ObservationMsg {
        player_common: PlayerCommon {
            army_count: 3,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(tr
        .transform_action(&with_army, &select_army, false)
        .is_ok());
}

#[test]
fn ability_functions_are_gated_by_the_ability_list() {
    let tr = surface_translator(true);
    let cat = tr.action_catalog();
    let attack = FunctionCall::validated(
        "Attack_screen".into(),
        &["now".into(), ArgValue::List(vec![1, 2])],
        cat,
    )
    .unwrap();

    let without = ObservationMsg::default();
    assert!(matches!(
        tr.transform_action(&without, &attack, false),
        Err(ActionError::Unavailable { .. })
    ));

    let with = ObservationMsg {
        abilities: vec![ability(3674, true)],
        ..Default::default()
    };
    assert!(tr.transform_action(&with, &attack, false).is_ok());
}

#[test]
fn argument_bounds_are_enforced() {
    let tr = surface_translator(true);
    let obs = ObservationMsg::default();

    // Screen points are bounded by the 84x84 action resolution.
    let out_of_range = FunctionCall::new(2, vec![vec![0], vec![84, 10]]);
    assert!(matches!(
        tr.transform_action(&obs, &out_of_range, true),
        Err(ActionError::InvalidArguments { .. })
    ));

    let wrong_count = FunctionCall::new(2, vec![vec![0]]);
    assert!(matches!(
        tr.transform_action(&obs, &wrong_count, true),
        Err(ActionError::InvalidArguments { .. })
    ));

    let bad_id = FunctionCall::new(99_999, vec![]);
    assert!(matches!(
        tr.transform_action(&obs, &bad_id, true),
        Err(ActionError::InvalidFunction { .. })
    ));
}

#[test]
fn raw_commands_remap_indices_to_tags_and_back() {
    let mut tr = raw_translator();
    let frame = FrameBuilder::new()
        .raw_units(
            vec![
                raw_unit(101, 48, 10.0, 10.0),
                raw_unit(102, 48, 11.0, 10.0),
                raw_unit(103, 49, 12.0, 10.0),
            ],
            (32.0, 32.0),
        )
        .build();
    tr.observe(&frame).unwrap();

    let cat = tr.action_catalog();
    let call = FunctionCall::validated(
        "Attack_unit".into(),
        &[
            "now".into(),
            ArgValue::List(vec![0, 2]),
            ArgValue::Scalar(1),
        ],
        cat,
    )
    .unwrap();
    let engine = tr
        .transform_action(&frame.observation, &call, true)
        .unwrap();
    match &engine.payload {
        Some(ActionPayload::Raw(RawAction::UnitCommand {
            ability_id,
            unit_tags,
            target,
            ..
        })) => {
            assert_eq!(*ability_id, 3674);
            assert_eq!(unit_tags, &[101, 103]);
            assert_eq!(
                *target,
                Some(herald_proto::RawTarget::Unit(102)),
            );
        }
        other => panic!("unexpected payload {other:?}"),
    }

    // And the inverse recovers positional indices.
    let recovered = tr.reverse_action(&engine).unwrap();
    assert_eq!(recovered.arguments[1], vec![0, 2]);
    assert_eq!(recovered.arguments[2], vec![1]);
    let again = tr
        .transform_action(&frame.observation, &recovered, true)
        .unwrap();
    assert_eq!(engine, again);
}

#[test]
fn raw_point_command_roundtrips() {
    let mut tr = raw_translator();
    let frame = FrameBuilder::new()
        .raw_units(vec![raw_unit(7, 48, 1.0, 1.0)], (32.0, 32.0))
        .build();
    tr.observe(&frame).unwrap();

    let call = FunctionCall::validated(
        "Attack_pt".into(),
        &[
            "queued".into(),
            ArgValue::List(vec![0]),
            ArgValue::List(vec![40, 22]),
        ],
        tr.action_catalog(),
    )
    .unwrap();
    let first = tr
        .transform_action(&frame.observation, &call, true)
        .unwrap();
    let recovered = tr.reverse_action(&first).unwrap();
    let second = tr
        .transform_action(&frame.observation, &recovered, true)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn dead_unit_indices_degrade_to_noop() {
    let mut tr = raw_translator();
    let frame = FrameBuilder::new()
        .raw_units(vec![raw_unit(101, 48, 10.0, 10.0)], (32.0, 32.0))
        .build();
    tr.observe(&frame).unwrap();

    // Index 5 is past the cached tag list.
    let call = FunctionCall::new(
        tr.action_catalog().get_by_name("Stop_quick").unwrap().id,
        vec![vec![0], vec![5]],
    );
    let action = tr
        .transform_action(&frame.observation, &call, true)
        .unwrap();
    assert!(action.payload.is_none());
}

#[test]
fn unknown_engine_ability_reverses_to_noop() {
    let tr = surface_translator(true);
    let action = herald_proto::Action::with(ActionPayload::FeatureLayer(
        SpatialAction::UnitCommand {
            ability_id: 999_999,
            queued: false,
            target: None,
        },
    ));
    let call = tr.reverse_action(&action).unwrap();
    assert_eq!(call.function, 0);
    assert!(call.arguments.is_empty());
}

#[test]
fn known_ability_with_impossible_shape_is_fatal_in_reverse() {
    let tr = surface_translator(true);
    // Ability 3665 (Stop) has no screen-targeted variant.
    let action = herald_proto::Action::with(ActionPayload::FeatureLayer(
        SpatialAction::UnitCommand {
            ability_id: 3665,
            queued: false,
            target: Some(herald_proto::SpatialTarget::Screen(PixelPoint::new(1, 1))),
        },
    ));
    assert!(matches!(
        tr.reverse_action(&action),
        Err(ActionError::UnknownAbility { .. })
    ));
}
