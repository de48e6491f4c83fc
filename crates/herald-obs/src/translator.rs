//! The per-game translation layer.
//!
//! A [`Translator`] owns everything bound to one game instance: both
//! function catalogs, the feature catalogs, the camera transform chain, and
//! the per-step cache of raw unit tags. `observe` turns an engine frame
//! into a structured [`Observation`]; `transform_action` and
//! `reverse_action` convert agent actions to and from the engine message.
//!
//! `observe` updates the camera offset and the tag cache that the next
//! action translation reads, so one translator must not be shared between
//! concurrently-stepping games.

use std::collections::HashMap;

use indexmap::IndexMap;

use herald_actions::args::{
    ordinal_by_engine_value, EnumOptions, CONTROL_GROUP_ACT_OPTIONS, SELECT_POINT_ACT_OPTIONS,
    SELECT_UNIT_ACT_OPTIONS, SELECT_WORKER_OPTIONS,
};
use herald_actions::{
    ActionSpace, ArgSizes, ArgumentKind, FunctionCall, FunctionCatalog, FunctionSpec, FunctionType,
    RAW_FUNCTIONS, SURFACE_FUNCTIONS,
};
use herald_core::{
    ActionError, ConfigError, DecodeError, NamedArray, NamedArrayError, Point,
};
use herald_proto::{
    Action, ActionPayload, ImagePlane, ObservationFrame, ObservationMsg, RawAction, RawTarget,
    RawUnit, SpatialAction, SpatialTarget, UiAction, UiPanel, UnitInfo,
};
use herald_transform::{Chain, Linear, PixelToCoord, Transform};

use crate::avail::available_actions;
use crate::config::InterfaceConfig;
use crate::features::{minimap_features, screen_features, unpack_rgb, FeatureSpec};
use crate::observation::{
    Observation, FEATURE_UNIT_NAMES, PLAYER_NAMES, SCORE_NAMES, UNIT_PANEL_NAMES,
};

/// Errors raised while assembling one observation.
#[derive(Clone, Debug, PartialEq)]
pub enum ObserveError {
    /// A feature plane or RGB buffer was malformed.
    Decode(DecodeError),
    /// The availability engine hit a fatal stale-table condition.
    Availability(ActionError),
    /// A field's data disagreed with its promised shape.
    Shape(NamedArrayError),
}

impl std::fmt::Display for ObserveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "decode failed: {e}"),
            Self::Availability(e) => write!(f, "availability failed: {e}"),
            Self::Shape(e) => write!(f, "field shape: {e}"),
        }
    }
}

impl std::error::Error for ObserveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Availability(e) => Some(e),
            Self::Shape(e) => Some(e),
        }
    }
}

impl From<DecodeError> for ObserveError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<ActionError> for ObserveError {
    fn from(e: ActionError) -> Self {
        Self::Availability(e)
    }
}

impl From<NamedArrayError> for ObserveError {
    fn from(e: NamedArrayError) -> Self {
        Self::Shape(e)
    }
}

/// Translates between the engine's wire format and the agent interface for
/// one game instance.
pub struct Translator {
    config: InterfaceConfig,
    action_space: ActionSpace,
    surface_catalog: Option<FunctionCatalog>,
    raw_catalog: FunctionCatalog,
    screen_features: Vec<FeatureSpec>,
    minimap_features: Vec<FeatureSpec>,
    world_to_world_tl: Linear,
    // Mutable offset, refreshed from each frame's camera center before any
    // unit position is projected.
    world_tl_to_world_camera_rel: Linear,
    world_camera_rel_to_feature_screen: Option<Linear>,
    world_tl_to_raw_grid: Linear,
    cached_unit_tags: Vec<u64>,
}

impl Translator {
    /// Build a translator for one game.
    ///
    /// `map_size` is the playable map size in world units. All
    /// configuration errors surface here; a constructed translator never
    /// fails on configuration again.
    pub fn new(config: InterfaceConfig, map_size: (u32, u32)) -> Result<Self, ConfigError> {
        let action_space = config.resolve_action_space()?;
        if map_size.0 == 0 || map_size.1 == 0 {
            return Err(ConfigError::InvalidDimensions {
                reason: format!("map size must be positive, got {map_size:?}"),
            });
        }
        if config.camera_width_world_units <= 0.0 {
            return Err(ConfigError::InvalidDimensions {
                reason: format!(
                    "camera width must be positive, got {}",
                    config.camera_width_world_units
                ),
            });
        }
        if config.use_feature_units && config.feature.is_none() {
            return Err(ConfigError::InvalidDimensions {
                reason: "feature units need feature dimensions for the camera projection"
                    .to_string(),
            });
        }
        let raw_resolution = config.raw_resolution.unwrap_or(map_size);
        if raw_resolution.0 == 0 || raw_resolution.1 == 0 {
            return Err(ConfigError::InvalidDimensions {
                reason: format!("raw resolution must be positive, got {raw_resolution:?}"),
            });
        }

        let surface_catalog = match config.action_dimensions() {
            Some(dims) => Some(FunctionCatalog::build(
                SURFACE_FUNCTIONS,
                &ArgSizes {
                    screen: dims.screen,
                    minimap: dims.minimap,
                    world: raw_resolution,
                },
                false,
            )?),
            None => None,
        };
        let raw_catalog = FunctionCatalog::build(
            RAW_FUNCTIONS,
            &ArgSizes {
                screen: raw_resolution,
                minimap: raw_resolution,
                world: raw_resolution,
            },
            true,
        )?;

        // World coordinates are bottom-left origin; pixel spaces hang from
        // the top-left.
        let world_to_world_tl =
            Linear::new(Point::new(1.0, -1.0), Point::new(0.0, f64::from(map_size.1)))?;
        let world_tl_to_world_camera_rel = Linear::translation(Point::new(
            -f64::from(map_size.0) / 4.0,
            -f64::from(map_size.1) / 4.0,
        ));
        let world_camera_rel_to_feature_screen = match config.feature {
            Some(dims) => Some(Linear::new(
                Point::new(
                    f64::from(dims.screen.0) / config.camera_width_world_units,
                    f64::from(dims.screen.1) / config.camera_width_world_units,
                ),
                Point::new(
                    f64::from(dims.screen.0) / 2.0,
                    f64::from(dims.screen.1) / 2.0,
                ),
            )?),
            None => None,
        };
        let max_dim = f64::from(map_size.0.max(map_size.1));
        let world_tl_to_raw_grid = Linear::scaling(Point::new(
            f64::from(raw_resolution.0) / max_dim,
            f64::from(raw_resolution.1) / max_dim,
        ))?;

        Ok(Self {
            screen_features: screen_features(),
            minimap_features: minimap_features(),
            config,
            action_space,
            surface_catalog,
            raw_catalog,
            world_to_world_tl,
            world_tl_to_world_camera_rel,
            world_camera_rel_to_feature_screen,
            world_tl_to_raw_grid,
            cached_unit_tags: Vec::new(),
        })
    }

    /// The configured action space.
    pub fn action_space(&self) -> ActionSpace {
        self.action_space
    }

    /// The catalog actions are validated and encoded against.
    pub fn action_catalog(&self) -> &FunctionCatalog {
        match self.action_space {
            ActionSpace::Raw => &self.raw_catalog,
            _ => self
                .surface_catalog
                .as_ref()
                .unwrap_or(&self.raw_catalog),
        }
    }

    /// The raw-interface catalog (always present).
    pub fn raw_catalog(&self) -> &FunctionCatalog {
        &self.raw_catalog
    }

    /// Shapes of every observation field this configuration produces.
    /// A 0 marks a dimension that varies step to step.
    pub fn observation_spec(&self) -> IndexMap<String, Vec<usize>> {
        let mut spec = IndexMap::new();
        let mut put = |name: &str, shape: &[usize]| {
            spec.insert(name.to_string(), shape.to_vec());
        };
        put("action_result", &[0]);
        put("alerts", &[0]);
        put("build_queue", &[0, UNIT_PANEL_NAMES.len()]);
        put("cargo", &[0, UNIT_PANEL_NAMES.len()]);
        put("cargo_slots_available", &[1]);
        put("control_groups", &[10, 2]);
        put("game_loop", &[1]);
        put("last_actions", &[0]);
        put("multi_select", &[0, UNIT_PANEL_NAMES.len()]);
        put("player", &[PLAYER_NAMES.len()]);
        put("score_cumulative", &[SCORE_NAMES.len()]);
        put("single_select", &[0, UNIT_PANEL_NAMES.len()]);
        if let Some(dims) = self.config.feature {
            put(
                "feature_screen",
                &[
                    self.screen_features.len(),
                    dims.screen.1 as usize,
                    dims.screen.0 as usize,
                ],
            );
            put(
                "feature_minimap",
                &[
                    self.minimap_features.len(),
                    dims.minimap.1 as usize,
                    dims.minimap.0 as usize,
                ],
            );
        }
        if let Some(dims) = self.config.rgb {
            put("rgb_screen", &[dims.screen.1 as usize, dims.screen.0 as usize, 3]);
            put("rgb_minimap", &[dims.minimap.1 as usize, dims.minimap.0 as usize, 3]);
        }
        if self.config.use_feature_units {
            put("feature_units", &[0, FEATURE_UNIT_NAMES.len()]);
        }
        if self.raw_units_enabled() {
            put("raw_units", &[0, FEATURE_UNIT_NAMES.len()]);
        }
        if self.action_space != ActionSpace::Raw {
            put("available_actions", &[0]);
        }
        spec
    }

    fn raw_units_enabled(&self) -> bool {
        self.config.use_raw_units || self.action_space == ActionSpace::Raw
    }

    fn update_camera(&mut self, camera_center: Point) {
        self.world_tl_to_world_camera_rel.offset = -self.world_to_world_tl.fwd_pt(camera_center)
            * self.world_tl_to_world_camera_rel.scale;
    }

    fn world_to_feature_screen(&self) -> Option<Chain> {
        let to_screen = self.world_camera_rel_to_feature_screen?;
        Some(Chain::new(vec![
            Box::new(self.world_to_world_tl),
            Box::new(self.world_tl_to_world_camera_rel),
            Box::new(to_screen),
            Box::new(PixelToCoord),
        ]))
    }

    fn world_to_raw_grid(&self) -> Chain {
        Chain::new(vec![
            Box::new(self.world_to_world_tl),
            Box::new(self.world_tl_to_raw_grid),
            Box::new(PixelToCoord),
        ])
    }

    /// Assemble the structured observation for one frame.
    ///
    /// Also refreshes the camera transform and the cached unit-tag list
    /// that the following action translation relies on.
    pub fn observe(&mut self, frame: &ObservationFrame) -> Result<Observation, ObserveError> {
        let msg = &frame.observation;
        let mut out = Observation::new();

        let empty_panel = || {
            NamedArray::with_names(
                Vec::new(),
                &[0, UNIT_PANEL_NAMES.len()],
                &[None, Some(UNIT_PANEL_NAMES)],
            )
        };
        out.insert("single_select", empty_panel()?);
        out.insert("multi_select", empty_panel()?);
        out.insert("build_queue", empty_panel()?);
        out.insert("cargo", empty_panel()?);
        out.insert("cargo_slots_available", NamedArray::unnamed(vec![0], &[1])?);

        if let Some(dims) = self.config.feature {
            out.insert(
                "feature_screen",
                self.stack_layers(msg, &self.screen_features, dims.screen)?,
            );
            out.insert(
                "feature_minimap",
                self.stack_layers(msg, &self.minimap_features, dims.minimap)?,
            );
        }

        if let Some(dims) = self.config.rgb {
            // A missing render block decodes as an empty 0-bpp plane and
            // fails below, which is right: the config promised this channel.
            let empty = ImagePlane::default();
            let (map, minimap) = match &msg.render_data {
                Some(r) => (&r.map, &r.minimap),
                None => (&empty, &empty),
            };
            out.insert("rgb_screen", rgb_array(map, "rgb_screen", dims.screen)?);
            out.insert("rgb_minimap", rgb_array(minimap, "rgb_minimap", dims.minimap)?);
        }

        let mut last_actions = Vec::with_capacity(frame.actions.len());
        for action in &frame.actions {
            last_actions.push(i64::from(self.reverse_action(action)?.function));
        }
        let n = last_actions.len();
        out.insert("last_actions", NamedArray::unnamed(last_actions, &[n])?);

        let results: Vec<i64> = frame
            .action_results
            .iter()
            .map(|r| i64::from(r.result))
            .collect();
        let n = results.len();
        out.insert("action_result", NamedArray::unnamed(results, &[n])?);

        let alerts: Vec<i64> = msg.alerts.iter().map(|&a| i64::from(a)).collect();
        let n = alerts.len();
        out.insert("alerts", NamedArray::unnamed(alerts, &[n])?);

        out.insert(
            "game_loop",
            NamedArray::unnamed(vec![i64::from(msg.game_loop)], &[1])?,
        );

        let d = &msg.score.score_details;
        out.insert(
            "score_cumulative",
            NamedArray::vector(
                vec![
                    i64::from(msg.score.score),
                    d.idle_production_time as i64,
                    d.idle_worker_time as i64,
                    d.total_value_units as i64,
                    d.total_value_structures as i64,
                    d.killed_value_units as i64,
                    d.killed_value_structures as i64,
                    d.collected_minerals as i64,
                    d.collected_vespene as i64,
                    d.collection_rate_minerals as i64,
                    d.collection_rate_vespene as i64,
                    d.spent_minerals as i64,
                    d.spent_vespene as i64,
                ],
                SCORE_NAMES,
            )?,
        );

        let p = &msg.player_common;
        out.insert(
            "player",
            NamedArray::vector(
                vec![
                    i64::from(p.player_id),
                    i64::from(p.minerals),
                    i64::from(p.vespene),
                    i64::from(p.food_used),
                    i64::from(p.food_cap),
                    i64::from(p.food_army),
                    i64::from(p.food_workers),
                    i64::from(p.idle_worker_count),
                    i64::from(p.army_count),
                    i64::from(p.warp_gate_count),
                    i64::from(p.larva_count),
                ],
                PLAYER_NAMES,
            )?,
        );

        let mut groups = vec![0i64; 20];
        for g in &msg.ui_data.groups {
            let idx = g.control_group_index as usize;
            if idx >= 10 {
                log::warn!("control group index {idx} out of range; dropped");
                continue;
            }
            groups[idx * 2] = i64::from(g.leader_unit_type);
            groups[idx * 2 + 1] = i64::from(g.count);
        }
        out.insert("control_groups", NamedArray::unnamed(groups, &[10, 2])?);

        match &msg.ui_data.panel {
            Some(UiPanel::Single { unit }) => {
                out.insert("single_select", panel_array(std::slice::from_ref(unit))?);
            }
            Some(UiPanel::Multi { units }) => {
                out.insert("multi_select", panel_array(units)?);
            }
            Some(UiPanel::Cargo {
                unit,
                passengers,
                slots_available,
            }) => {
                out.insert("single_select", panel_array(std::slice::from_ref(unit))?);
                out.insert("cargo", panel_array(passengers)?);
                out.insert(
                    "cargo_slots_available",
                    NamedArray::unnamed(vec![i64::from(*slots_available)], &[1])?,
                );
            }
            Some(UiPanel::Production { unit, build_queue }) => {
                out.insert("single_select", panel_array(std::slice::from_ref(unit))?);
                out.insert("build_queue", panel_array(build_queue)?);
            }
            None => {}
        }

        if let Some(raw) = &msg.raw_data {
            let tag_types: HashMap<u64, u32> =
                raw.units.iter().map(|u| (u.tag, u.unit_type)).collect();

            if self.config.use_feature_units {
                self.update_camera(Point::new(
                    f64::from(raw.player.camera.x),
                    f64::from(raw.player.camera.y),
                ));
                if let Some(chain) = self.world_to_feature_screen() {
                    // Hidden units (display_type 3) have no drawable position.
                    let rows: Vec<&RawUnit> = raw
                        .units
                        .iter()
                        .filter(|u| u.is_on_screen && u.display_type != 3)
                        .collect();
                    out.insert(
                        "feature_units",
                        unit_array(&rows, &chain, false, &tag_types, &self.raw_catalog)?,
                    );
                }
            }

            if self.raw_units_enabled() {
                let chain = self.world_to_raw_grid();
                let rows: Vec<&RawUnit> = raw.units.iter().collect();
                out.insert(
                    "raw_units",
                    unit_array(&rows, &chain, true, &tag_types, &self.raw_catalog)?,
                );
                self.cached_unit_tags = raw.units.iter().map(|u| u.tag).collect();
            }
        }

        if self.action_space != ActionSpace::Raw {
            if let Some(catalog) = &self.surface_catalog {
                let ids = available_actions(msg, catalog, self.config.hide_specific_actions)?;
                let data: Vec<i64> = ids.into_iter().map(i64::from).collect();
                let n = data.len();
                out.insert("available_actions", NamedArray::unnamed(data, &[n])?);
            }
        }

        Ok(out)
    }

    fn stack_layers(
        &self,
        msg: &ObservationMsg,
        specs: &[FeatureSpec],
        size: (u32, u32),
    ) -> Result<NamedArray, ObserveError> {
        let (w, h) = (size.0 as usize, size.1 as usize);
        let mut data = Vec::with_capacity(specs.len() * h * w);
        for spec in specs {
            let grid = spec.unpack(msg, size)?;
            if grid.len() != h * w {
                return Err(DecodeError::LengthMismatch {
                    layer: spec.name.to_string(),
                    expected: h * w,
                    actual: grid.len(),
                }
                .into());
            }
            data.extend_from_slice(&grid);
        }
        let names: Vec<&str> = specs.iter().map(|s| s.name).collect();
        Ok(NamedArray::with_names(
            data,
            &[specs.len(), h, w],
            &[Some(&names), None, None],
        )?)
    }

    /// Turn a validated agent [`FunctionCall`] into an engine action.
    ///
    /// Unless `skip_available` is set, surface calls are checked against
    /// the availability engine for `obs`, the observation the agent chose
    /// the action from. Argument counts and bounds are checked against the
    /// sizes resolved at catalog build.
    pub fn transform_action(
        &self,
        obs: &ObservationMsg,
        call: &FunctionCall,
        skip_available: bool,
    ) -> Result<Action, ActionError> {
        let catalog = self.action_catalog();
        let func = catalog.get(call.function)?;

        if catalog.is_raw() != func.raw {
            return Err(ActionError::InvalidFunction {
                function: func.name.to_string(),
            });
        }

        if !catalog.is_raw() && !skip_available {
            let available =
                available_actions(obs, catalog, self.config.hide_specific_actions)?;
            if !available.contains(&call.function) {
                return Err(ActionError::Unavailable {
                    id: func.id,
                    name: func.name.to_string(),
                });
            }
        }

        if call.arguments.len() != func.args.len() {
            return Err(ActionError::InvalidArguments {
                function: func.name.to_string(),
                reason: format!(
                    "expected {} arguments, got {}",
                    func.args.len(),
                    call.arguments.len()
                ),
            });
        }

        for (ty, arg) in func.args.iter().zip(&call.arguments) {
            if let ArgumentKind::UnitTags { count, .. } = ty.kind {
                if arg.is_empty() || arg.len() > count {
                    return Err(ActionError::InvalidArguments {
                        function: func.name.to_string(),
                        reason: format!(
                            "{} takes 1..={count} values, got {}",
                            ty.name,
                            arg.len()
                        ),
                    });
                }
                continue; // Values are positional indices, resolved below.
            }
            if arg.len() != ty.sizes.len() {
                return Err(ActionError::InvalidArguments {
                    function: func.name.to_string(),
                    reason: format!(
                        "{} takes {} values, got {}",
                        ty.name,
                        ty.sizes.len(),
                        arg.len()
                    ),
                });
            }
            for (&size, &value) in ty.sizes.iter().zip(arg) {
                if value < 0 || value >= i64::from(size) {
                    return Err(ActionError::InvalidArguments {
                        function: func.name.to_string(),
                        reason: format!("{} value {value} out of range 0..{size}", ty.name),
                    });
                }
            }
        }

        let arguments = if func.raw {
            match self.remap_tags(func, &call.arguments) {
                Some(args) => args,
                None => return Ok(Action::no_op()),
            }
        } else {
            call.arguments.clone()
        };

        func.ftype
            .encode(func.name, func.ability_id, self.action_space, &arguments)
    }

    /// Replace positional tag indices with real tags from the last
    /// observation. `None` means the whole action degrades to a no-op.
    fn remap_tags(&self, func: &FunctionSpec, arguments: &[Vec<i64>]) -> Option<Vec<Vec<i64>>> {
        let mut out = Vec::with_capacity(arguments.len());
        for (ty, arg) in func.args.iter().zip(arguments) {
            if !matches!(ty.kind, ArgumentKind::UnitTags { .. }) {
                out.push(arg.clone());
                continue;
            }
            let mut resolved = Vec::with_capacity(arg.len());
            for &index in arg {
                let tag = usize::try_from(index)
                    .ok()
                    .and_then(|i| self.cached_unit_tags.get(i))
                    .copied();
                match tag {
                    Some(0) | None => {
                        log::warn!(
                            "{}: unit index {index} does not name a live unit; dropped",
                            func.name
                        );
                    }
                    Some(tag) => resolved.push(tag as i64),
                }
            }
            if resolved.is_empty() {
                log::warn!("{}: no unit indices survived remapping; no-op", func.name);
                return None;
            }
            out.push(resolved);
        }
        Some(out)
    }

    /// Map an engine action back to the agent [`FunctionCall`] that would
    /// produce it: the inverse of [`transform_action`](Self::transform_action).
    ///
    /// Ability ids the static table has never heard of degrade to a logged
    /// no-op; a known ability whose functions never match the message shape
    /// is a fatal [`ActionError::UnknownAbility`].
    pub fn reverse_action(&self, action: &Action) -> Result<FunctionCall, ActionError> {
        let Some(payload) = &action.payload else {
            return Ok(no_op_call());
        };
        match payload {
            ActionPayload::Ui(ui) => self.reverse_ui(ui),
            ActionPayload::FeatureLayer(sp) | ActionPayload::Render(sp) => self.reverse_spatial(sp),
            ActionPayload::Raw(raw) => self.reverse_raw(raw),
        }
    }

    fn surface(&self) -> Option<&FunctionCatalog> {
        self.surface_catalog.as_ref()
    }

    fn reverse_ui(&self, ui: &UiAction) -> Result<FunctionCall, ActionError> {
        let Some(catalog) = self.surface() else {
            log::warn!("ui action arrived without a surface catalog; treating as a no-op");
            return Ok(no_op_call());
        };
        let by_name = |name: &str, arguments: Vec<Vec<i64>>| {
            catalog
                .get_by_name(name)
                .map(|f| FunctionCall::new(f.id, arguments))
        };
        match ui {
            UiAction::MultiPanel { kind, unit_index } => by_name(
                "select_unit",
                vec![
                    vec![decode_enum("select_unit_act", SELECT_UNIT_ACT_OPTIONS, *kind)?],
                    vec![i64::from(*unit_index)],
                ],
            ),
            UiAction::ControlGroup { action, index } => by_name(
                "select_control_group",
                vec![
                    vec![decode_enum(
                        "control_group_act",
                        CONTROL_GROUP_ACT_OPTIONS,
                        *action,
                    )?],
                    vec![i64::from(*index)],
                ],
            ),
            UiAction::SelectIdleWorker { kind } => by_name(
                "select_idle_worker",
                vec![vec![decode_enum("select_worker", SELECT_WORKER_OPTIONS, *kind)?]],
            ),
            UiAction::SelectArmy { add } => {
                by_name("select_army", vec![vec![i64::from(*add)]])
            }
            UiAction::SelectWarpGates { add } => {
                by_name("select_warp_gates", vec![vec![i64::from(*add)]])
            }
            UiAction::SelectLarva => by_name("select_larva", vec![]),
            UiAction::CargoPanel { unit_index } => {
                by_name("unload", vec![vec![i64::from(*unit_index)]])
            }
            UiAction::ProductionPanel { unit_index } => {
                by_name("build_queue", vec![vec![i64::from(*unit_index)]])
            }
            UiAction::ToggleAutocast { ability_id } => {
                self.ability_call(catalog, *ability_id, FunctionType::Autocast, vec![])
            }
        }
    }

    fn reverse_spatial(&self, sp: &SpatialAction) -> Result<FunctionCall, ActionError> {
        let Some(catalog) = self.surface() else {
            log::warn!("spatial action arrived without a surface catalog; treating as a no-op");
            return Ok(no_op_call());
        };
        match sp {
            SpatialAction::CameraMove { center_minimap } => Ok(FunctionCall::new(
                catalog.get_by_name("move_camera")?.id,
                vec![vec![
                    i64::from(center_minimap.x),
                    i64::from(center_minimap.y),
                ]],
            )),
            SpatialAction::SelectionPoint { kind, point } => Ok(FunctionCall::new(
                catalog.get_by_name("select_point")?.id,
                vec![
                    vec![decode_enum("select_point_act", SELECT_POINT_ACT_OPTIONS, *kind)?],
                    vec![i64::from(point.x), i64::from(point.y)],
                ],
            )),
            SpatialAction::SelectionRect { add, rects } => {
                let rect = rects.first().copied().unwrap_or_default();
                // Canonicalize before comparing or re-encoding: the wire
                // does not promise corner order.
                let (x0, x1) = (rect.p0.x.min(rect.p1.x), rect.p0.x.max(rect.p1.x));
                let (y0, y1) = (rect.p0.y.min(rect.p1.y), rect.p0.y.max(rect.p1.y));
                Ok(FunctionCall::new(
                    catalog.get_by_name("select_rect")?.id,
                    vec![
                        vec![i64::from(*add)],
                        vec![i64::from(x0), i64::from(y0)],
                        vec![i64::from(x1), i64::from(y1)],
                    ],
                ))
            }
            SpatialAction::UnitCommand {
                ability_id,
                queued,
                target,
            } => {
                let queued = vec![i64::from(*queued)];
                match target {
                    Some(SpatialTarget::Screen(p)) => self.ability_call(
                        catalog,
                        *ability_id,
                        FunctionType::CmdScreen,
                        vec![queued, vec![i64::from(p.x), i64::from(p.y)]],
                    ),
                    Some(SpatialTarget::Minimap(p)) => self.ability_call(
                        catalog,
                        *ability_id,
                        FunctionType::CmdMinimap,
                        vec![queued, vec![i64::from(p.x), i64::from(p.y)]],
                    ),
                    None => self.ability_call(
                        catalog,
                        *ability_id,
                        FunctionType::CmdQuick,
                        vec![queued],
                    ),
                }
            }
        }
    }

    fn reverse_raw(&self, raw: &RawAction) -> Result<FunctionCall, ActionError> {
        let catalog = &self.raw_catalog;
        match raw {
            RawAction::CameraMove { center_world } => Ok(FunctionCall::new(
                catalog.get_by_name("raw_move_camera")?.id,
                vec![vec![center_world.x as i64, center_world.y as i64]],
            )),
            RawAction::ToggleAutocast {
                ability_id,
                unit_tags,
            } => self.ability_call(
                catalog,
                *ability_id,
                FunctionType::RawAutocast,
                vec![self.tags_to_indices(unit_tags)],
            ),
            RawAction::UnitCommand {
                ability_id,
                queued,
                unit_tags,
                target,
            } => {
                let queued = vec![i64::from(*queued)];
                let tags = self.tags_to_indices(unit_tags);
                match target {
                    Some(RawTarget::Point(p)) => self.ability_call(
                        catalog,
                        *ability_id,
                        FunctionType::RawCmdPt,
                        vec![queued, tags, vec![p.x as i64, p.y as i64]],
                    ),
                    Some(RawTarget::Unit(tag)) => self.ability_call(
                        catalog,
                        *ability_id,
                        FunctionType::RawCmdUnit,
                        vec![queued, tags, self.tags_to_indices(&[*tag])],
                    ),
                    None => self.ability_call(
                        catalog,
                        *ability_id,
                        FunctionType::RawCmd,
                        vec![queued, tags],
                    ),
                }
            }
        }
    }

    fn tags_to_indices(&self, tags: &[u64]) -> Vec<i64> {
        let mut indices = Vec::with_capacity(tags.len());
        for &tag in tags {
            match self.cached_unit_tags.iter().position(|&t| t == tag) {
                Some(i) => indices.push(i as i64),
                None => log::warn!("tag {tag} not in the last observation; dropped"),
            }
        }
        indices
    }

    /// Find the function for `(ability id, shape)`, preferring the general
    /// sibling when hide-specific-actions is on.
    fn ability_call(
        &self,
        catalog: &FunctionCatalog,
        ability_id: u32,
        ftype: FunctionType,
        arguments: Vec<Vec<i64>>,
    ) -> Result<FunctionCall, ActionError> {
        if catalog.ability_functions(ability_id).is_none() {
            log::warn!(
                "unknown ability {ability_id}: probably a new or map-specific ability; \
                 treating as a no-op"
            );
            return Ok(no_op_call());
        }
        let ability_id = if self.config.hide_specific_actions {
            catalog.general_of(ability_id).unwrap_or(ability_id)
        } else {
            ability_id
        };
        let Some(func_ids) = catalog.ability_functions(ability_id) else {
            return Err(ActionError::UnknownAbility {
                ability_id,
                reason: "general ability missing from the static table".to_string(),
            });
        };
        for &id in func_ids {
            let func = catalog.get(id)?;
            if func.ftype == ftype {
                return Ok(FunctionCall::new(func.id, arguments));
            }
        }
        Err(ActionError::UnknownAbility {
            ability_id,
            reason: format!("no function of shape {ftype:?}"),
        })
    }
}

fn no_op_call() -> FunctionCall {
    FunctionCall::new(0, Vec::new())
}

/// Map an engine enum value back to its agent-side ordinal.
fn decode_enum(name: &str, options: EnumOptions, value: u32) -> Result<i64, ActionError> {
    ordinal_by_engine_value(options, value)
        .map(|o| o as i64)
        .ok_or_else(|| ActionError::InvalidArguments {
            function: name.to_string(),
            reason: format!("engine value {value} is not in the option table"),
        })
}

fn panel_array(units: &[UnitInfo]) -> Result<NamedArray, NamedArrayError> {
    let mut data = Vec::with_capacity(units.len() * UNIT_PANEL_NAMES.len());
    for u in units {
        data.extend_from_slice(&[
            i64::from(u.unit_type),
            i64::from(u.player_relative),
            i64::from(u.health),
            i64::from(u.shields),
            i64::from(u.energy),
            i64::from(u.transport_slots_taken),
            (u.build_progress * 100.0) as i64,
        ]);
    }
    NamedArray::with_names(
        data,
        &[units.len(), UNIT_PANEL_NAMES.len()],
        &[None, Some(UNIT_PANEL_NAMES)],
    )
}

fn rgb_array(
    plane: &ImagePlane,
    name: &str,
    expected: (u32, u32),
) -> Result<NamedArray, ObserveError> {
    let data = unpack_rgb(plane, name)?;
    let (w, h) = (expected.0 as usize, expected.1 as usize);
    if data.len() != w * h * 3 {
        return Err(DecodeError::LengthMismatch {
            layer: name.to_string(),
            expected: w * h * 3,
            actual: data.len(),
        }
        .into());
    }
    Ok(NamedArray::unnamed(data, &[h, w, 3])?)
}

fn order_func_id(catalog: &FunctionCatalog, ability_id: u32) -> i64 {
    catalog
        .ability_functions(ability_id)
        .and_then(|ids| ids.first())
        .map(|&id| i64::from(id))
        .unwrap_or(0)
}

fn ratio255(value: f32, max: f32) -> i64 {
    if max > 0.0 {
        (value / max * 255.0) as i64
    } else {
        0
    }
}

fn unit_array(
    units: &[&RawUnit],
    pos_transform: &Chain,
    is_raw: bool,
    tag_types: &HashMap<u64, u32>,
    raw_catalog: &FunctionCatalog,
) -> Result<NamedArray, NamedArrayError> {
    let mut data = Vec::with_capacity(units.len() * FEATURE_UNIT_NAMES.len());
    for u in units {
        let pos = pos_transform.fwd_pt(Point::new(f64::from(u.pos.x), f64::from(u.pos.y)));
        let radius = pos_transform.fwd_dist(f64::from(u.radius));
        let order_id = |i: usize| -> i64 {
            u.orders
                .get(i)
                .map(|o| order_func_id(raw_catalog, o.ability_id))
                .unwrap_or(0)
        };
        let order_progress = |i: usize| -> i64 {
            u.orders
                .get(i)
                .map(|o| (o.progress * 100.0) as i64)
                .unwrap_or(0)
        };
        data.extend_from_slice(&[
            i64::from(u.unit_type),
            i64::from(u.alliance),
            u.health as i64,
            u.shield as i64,
            u.energy as i64,
            i64::from(u.cargo_space_taken),
            (u.build_progress * 100.0) as i64,
            ratio255(u.health, u.health_max),
            ratio255(u.shield, u.shield_max),
            ratio255(u.energy, u.energy_max),
            i64::from(u.display_type),
            i64::from(u.owner),
            pos.x as i64,
            pos.y as i64,
            u.facing as i64,
            radius as i64,
            i64::from(u.cloak),
            i64::from(u.is_selected),
            i64::from(u.is_blip),
            i64::from(u.is_powered),
            i64::from(u.mineral_contents),
            i64::from(u.vespene_contents),
            i64::from(u.cargo_space_max),
            i64::from(u.assigned_harvesters),
            i64::from(u.ideal_harvesters),
            u.weapon_cooldown as i64,
            u.orders.len() as i64,
            order_id(0),
            order_id(1),
            if is_raw { u.tag as i64 } else { 0 },
            i64::from(u.is_hallucination),
            u.buff_ids.first().map(|&b| i64::from(b)).unwrap_or(0),
            u.buff_ids.get(1).map(|&b| i64::from(b)).unwrap_or(0),
            tag_types
                .get(&u.add_on_tag)
                .map(|&t| i64::from(t))
                .unwrap_or(0),
            i64::from(u.active),
            i64::from(u.is_on_screen),
            order_progress(0),
            order_progress(1),
            order_id(2),
            order_id(3),
            0, // is_in_cargo: the engine never reports loaded units here
            i64::from(u.buff_duration_remain),
            i64::from(u.buff_duration_max),
            i64::from(u.attack_upgrade_level),
            i64::from(u.armor_upgrade_level),
            i64::from(u.shield_upgrade_level),
        ]);
    }
    NamedArray::with_names(
        data,
        &[units.len(), FEATURE_UNIT_NAMES.len()],
        &[None, Some(FEATURE_UNIT_NAMES)],
    )
}
