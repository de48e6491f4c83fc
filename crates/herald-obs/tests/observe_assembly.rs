//! End-to-end observation assembly: shapes, defaults, projections, and the
//! per-step caches.

use herald_actions::ActionSpace;
use herald_core::Idx;
use herald_obs::{Dimensions, InterfaceConfig, Translator};
use herald_proto::{ControlGroup, PlayerCommon, UiPanel, UnitInfo};
use herald_test_utils::{feature_frame, frame_with_player, raw_unit, FrameBuilder};

fn feature_config() -> InterfaceConfig {
    InterfaceConfig {
        feature: Some(Dimensions::square(84, 64).unwrap()),
        ..Default::default()
    }
}

#[test]
fn always_present_fields_with_defaults() {
    let mut tr = Translator::new(feature_config(), (64, 64)).unwrap();
    let obs = tr.observe(&Default::default()).unwrap();

    assert_eq!(obs.get("player").unwrap().shape(), &[11]);
    assert_eq!(obs.get("score_cumulative").unwrap().shape(), &[13]);
    assert_eq!(obs.get("control_groups").unwrap().shape(), &[10, 2]);
    assert_eq!(obs.get("game_loop").unwrap().shape(), &[1]);
    for panel in ["single_select", "multi_select", "build_queue", "cargo"] {
        assert_eq!(obs.get(panel).unwrap().shape(), &[0, 7], "{panel}");
    }
    assert_eq!(obs.get("cargo_slots_available").unwrap().data(), &[0]);
    // Non-raw mode always reports availability.
    assert!(obs.contains("available_actions"));
}

#[test]
fn observation_matches_its_spec() {
    let mut tr = Translator::new(feature_config(), (64, 64)).unwrap();
    let spec = tr.observation_spec();
    let obs = tr.observe(&feature_frame((84, 84), (64, 64))).unwrap();

    for (name, shape) in &spec {
        let field = obs
            .get(name)
            .unwrap_or_else(|| panic!("field {name} promised by the spec is missing"));
        assert_eq!(field.shape().len(), shape.len(), "{name} rank");
        for (dim, (&actual, &promised)) in field.shape().iter().zip(shape).enumerate() {
            if promised != 0 {
                assert_eq!(actual, promised, "{name} dim {dim}");
            }
        }
    }
    // And nothing beyond the spec.
    for (name, _) in obs.iter() {
        assert!(spec.contains_key(name), "unpromised field {name}");
    }
}

#[test]
fn feature_stacks_have_catalog_shapes() {
    let mut tr = Translator::new(feature_config(), (64, 64)).unwrap();
    let obs = tr.observe(&feature_frame((84, 84), (64, 64))).unwrap();

    let screen = obs.get("feature_screen").unwrap();
    assert_eq!(screen.shape(), &[17, 84, 84]);
    // Layers are indexable by name, and empty planes decode to zeros.
    let creep = screen.row(Idx::Name("creep")).unwrap();
    assert!(creep.data().iter().all(|&v| v == 0));

    let minimap = obs.get("feature_minimap").unwrap();
    assert_eq!(minimap.shape(), &[7, 64, 64]);
    assert_eq!(minimap.index_of(0, "camera").unwrap(), 3);
}

#[test]
fn player_vector_is_name_indexed() {
    let mut tr = Translator::new(feature_config(), (64, 64)).unwrap();
    let frame = frame_with_player(PlayerCommon {
        player_id: 1,
        minerals: 250,
        army_count: 12,
        ..Default::default()
    });
    let obs = tr.observe(&frame).unwrap();
    let player = obs.get("player").unwrap();
    assert_eq!(player.value_of("minerals").unwrap(), 250);
    assert_eq!(player.value_of("army_count").unwrap(), 12);
    assert_eq!(
        player.value_of("minerals").unwrap(),
        player.value(player.index_of(0, "minerals").unwrap()).unwrap()
    );
}

#[test]
fn panels_overwrite_their_defaults() {
    let mut tr = Translator::new(feature_config(), (64, 64)).unwrap();
    let mut builder = FrameBuilder::new();
    builder.msg.ui_data.panel = Some(UiPanel::Multi {
        units: vec![
            UnitInfo {
                unit_type: 48,
                player_relative: 1,
                health: 45,
                build_progress: 1.0,
                ..Default::default()
            },
            UnitInfo {
                unit_type: 48,
                player_relative: 1,
                health: 31,
                ..Default::default()
            },
        ],
    });
    builder.msg.ui_data.groups = vec![ControlGroup {
        control_group_index: 2,
        leader_unit_type: 48,
        count: 7,
    }];
    let obs = tr.observe(&builder.build()).unwrap();

    let multi = obs.get("multi_select").unwrap();
    assert_eq!(multi.shape(), &[2, 7]);
    let first = multi.row(Idx::Pos(0)).unwrap();
    assert_eq!(first.value_of("health").unwrap(), 45);
    assert_eq!(first.value_of("build_progress").unwrap(), 100);

    let groups = obs.get("control_groups").unwrap();
    assert_eq!(groups.get(&[Idx::Pos(2), Idx::Pos(0)]).unwrap(), 48);
    assert_eq!(groups.get(&[Idx::Pos(2), Idx::Pos(1)]).unwrap(), 7);
    // Untouched groups stay zero.
    assert_eq!(groups.get(&[Idx::Pos(3), Idx::Pos(1)]).unwrap(), 0);
}

#[test]
fn feature_units_are_screen_projected() {
    let config = InterfaceConfig {
        use_feature_units: true,
        ..feature_config()
    };
    let mut tr = Translator::new(config, (64, 64)).unwrap();
    // Camera centered on the unit: it lands mid-screen.
    let frame = FrameBuilder::new()
        .raw_units(vec![raw_unit(101, 48, 32.0, 32.0)], (32.0, 32.0))
        .build();
    let obs = tr.observe(&frame).unwrap();

    let units = obs.get("feature_units").unwrap();
    assert_eq!(units.shape(), &[1, 46]);
    let row = units.row(Idx::Pos(0)).unwrap();
    // 84 px / 24 world units, offset 42: the camera center is pixel (42, 42).
    assert_eq!(row.value_of("x").unwrap(), 42);
    assert_eq!(row.value_of("y").unwrap(), 42);
    assert_eq!(row.value_of("unit_type").unwrap(), 48);
    assert_eq!(row.value_of("health_ratio").unwrap(), 255);
    // Surface-mode unit rows never leak tags.
    assert_eq!(row.value_of("tag").unwrap(), 0);
}

#[test]
fn hidden_units_are_excluded_from_feature_units() {
    let config = InterfaceConfig {
        use_feature_units: true,
        ..feature_config()
    };
    let mut tr = Translator::new(config, (64, 64)).unwrap();
    let mut hidden = raw_unit(102, 48, 30.0, 30.0);
    hidden.display_type = 3;
    let mut off_screen = raw_unit(103, 48, 2.0, 2.0);
    off_screen.is_on_screen = false;
    let frame = FrameBuilder::new()
        .raw_units(
            vec![raw_unit(101, 48, 32.0, 32.0), hidden, off_screen],
            (32.0, 32.0),
        )
        .build();
    let obs = tr.observe(&frame).unwrap();
    assert_eq!(obs.get("feature_units").unwrap().shape(), &[1, 46]);
}

#[test]
fn raw_mode_includes_tags_and_world_grid_positions() {
    let config = InterfaceConfig {
        action_space: Some(ActionSpace::Raw),
        use_raw_units: true,
        ..Default::default()
    };
    let mut tr = Translator::new(config, (64, 64)).unwrap();
    let frame = FrameBuilder::new()
        .raw_units(
            vec![raw_unit(101, 48, 10.0, 20.0), raw_unit(102, 49, 5.0, 5.0)],
            (32.0, 32.0),
        )
        .build();
    let obs = tr.observe(&frame).unwrap();

    let units = obs.get("raw_units").unwrap();
    assert_eq!(units.shape(), &[2, 46]);
    let first = units.row(Idx::Pos(0)).unwrap();
    assert_eq!(first.value_of("tag").unwrap(), 101);
    // World (10, 20) on a 64-unit map: y flips to 44 in the raw grid.
    assert_eq!(first.value_of("x").unwrap(), 10);
    assert_eq!(first.value_of("y").unwrap(), 44);

    // Raw mode does not advertise surface availability.
    assert!(!obs.contains("available_actions"));
}

#[test]
fn optional_channels_absent_when_disabled() {
    let mut tr = Translator::new(feature_config(), (64, 64)).unwrap();
    let obs = tr.observe(&Default::default()).unwrap();
    assert!(!obs.contains("feature_units"));
    assert!(!obs.contains("raw_units"));
    assert!(!obs.contains("rgb_screen"));
}
