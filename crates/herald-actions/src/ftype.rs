//! The closed union of action encoders.
//!
//! Every function in the static tables encodes into the engine message in
//! one of a fixed, small set of shapes. [`FunctionType`] enumerates them
//! all; [`FunctionType::encode`] is the single exhaustive dispatch point.
//! Adding a variant without handling it everywhere is a compile error,
//! which is the point.

use herald_core::ActionError;
use herald_proto::{
    Action, ActionPayload, PixelPoint, PixelRect, RawAction, RawTarget, SpatialAction,
    SpatialTarget, UiAction, WorldPoint,
};

use crate::args::{
    CONTROL_GROUP_ACT_OPTIONS, SELECT_POINT_ACT_OPTIONS, SELECT_UNIT_ACT_OPTIONS,
    SELECT_WORKER_OPTIONS,
};

/// Which pixel space (or neither) actions are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionSpace {
    /// Act in feature-layer pixel space with the surface functions.
    Features,
    /// Act in RGB render pixel space with the surface functions.
    Rgb,
    /// Act with unit tags and world coordinates using the raw functions.
    Raw,
}

/// How a function turns its arguments into an engine action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionType {
    /// Do nothing.
    NoOp,
    /// Move the camera to a minimap point.
    MoveCamera,
    /// Select the unit at a screen point.
    SelectPoint,
    /// Select units in a screen rectangle.
    SelectRect,
    /// Act on one unit in the multi-select panel.
    SelectUnit,
    /// Act on a control group.
    ControlGroup,
    /// Select an idle worker.
    SelectIdleWorker,
    /// Select the whole army.
    SelectArmy,
    /// Select all warp gates.
    SelectWarpGates,
    /// Select all larva.
    SelectLarva,
    /// Unload one unit from the cargo panel.
    Unload,
    /// Cancel one entry in the production panel.
    BuildQueue,
    /// Use an ability with no target.
    CmdQuick,
    /// Use an ability on a screen point.
    CmdScreen,
    /// Use an ability on a minimap point.
    CmdMinimap,
    /// Toggle an ability's autocast.
    Autocast,
    /// Do nothing (raw interface).
    RawNoOp,
    /// Move the camera to a world point.
    RawMoveCamera,
    /// Command units by tag, no target.
    RawCmd,
    /// Command units by tag toward a world point.
    RawCmdPt,
    /// Command units by tag toward another unit.
    RawCmdUnit,
    /// Toggle autocast on units by tag.
    RawAutocast,
}

impl FunctionType {
    /// Argument names this encoder consumes, in call order. Names refer to
    /// the owning interface's argument set.
    pub fn arg_names(self) -> &'static [&'static str] {
        match self {
            Self::NoOp | Self::SelectLarva | Self::Autocast | Self::RawNoOp => &[],
            Self::MoveCamera => &["minimap"],
            Self::SelectPoint => &["select_point_act", "screen"],
            Self::SelectRect => &["select_add", "screen", "screen2"],
            Self::SelectUnit => &["select_unit_act", "select_unit_id"],
            Self::ControlGroup => &["control_group_act", "control_group_id"],
            Self::SelectIdleWorker => &["select_worker"],
            Self::SelectArmy | Self::SelectWarpGates => &["select_add"],
            Self::Unload => &["unload_id"],
            Self::BuildQueue => &["build_queue_id"],
            Self::CmdQuick => &["queued"],
            Self::CmdScreen => &["queued", "screen"],
            Self::CmdMinimap => &["queued", "minimap"],
            Self::RawMoveCamera => &["world"],
            Self::RawCmd => &["queued", "unit_tags"],
            Self::RawCmdPt => &["queued", "unit_tags", "world"],
            Self::RawCmdUnit => &["queued", "unit_tags", "target_unit_tag"],
            Self::RawAutocast => &["unit_tags"],
        }
    }

    /// Whether this encoder belongs to the raw interface.
    pub fn is_raw(self) -> bool {
        matches!(
            self,
            Self::RawNoOp
                | Self::RawMoveCamera
                | Self::RawCmd
                | Self::RawCmdPt
                | Self::RawCmdUnit
                | Self::RawAutocast
        )
    }

    /// Whether this encoder writes an ability id into the message.
    pub fn needs_ability(self) -> bool {
        matches!(
            self,
            Self::CmdQuick
                | Self::CmdScreen
                | Self::CmdMinimap
                | Self::Autocast
                | Self::RawCmd
                | Self::RawCmdPt
                | Self::RawCmdUnit
                | Self::RawAutocast
        )
    }

    /// Whether this surface encoder matches an ability reported with the
    /// given point requirement. Autocast matches either way.
    pub fn matches_point(self, requires_point: bool) -> bool {
        if requires_point {
            matches!(self, Self::CmdScreen | Self::CmdMinimap | Self::Autocast)
        } else {
            matches!(self, Self::CmdQuick | Self::Autocast)
        }
    }

    /// Encode validated agent arguments into an engine action.
    ///
    /// `args` must match [`arg_names`](Self::arg_names) in count and order;
    /// enum arguments are ordinals, point arguments `[x, y]`, tag arguments
    /// real unit tags (the caller resolves positional indices first).
    pub fn encode(
        self,
        name: &str,
        ability_id: u32,
        space: ActionSpace,
        args: &[Vec<i64>],
    ) -> Result<Action, ActionError> {
        let ctx = EncodeCtx { name, args };
        let spatial = |act: SpatialAction| -> Result<Action, ActionError> {
            match space {
                ActionSpace::Features => Ok(Action::with(ActionPayload::FeatureLayer(act))),
                ActionSpace::Rgb => Ok(Action::with(ActionPayload::Render(act))),
                ActionSpace::Raw => Err(ActionError::InvalidArguments {
                    function: name.to_string(),
                    reason: "surface function encoded under the raw action space".to_string(),
                }),
            }
        };
        let ui = |act: UiAction| Action::with(ActionPayload::Ui(act));
        let raw = |act: RawAction| Action::with(ActionPayload::Raw(act));

        match self {
            Self::NoOp | Self::RawNoOp => Ok(Action::no_op()),
            Self::MoveCamera => spatial(SpatialAction::CameraMove {
                center_minimap: ctx.point(0)?,
            }),
            Self::SelectPoint => spatial(SpatialAction::SelectionPoint {
                kind: ctx.engine_enum(0, SELECT_POINT_ACT_OPTIONS)?,
                point: ctx.point(1)?,
            }),
            Self::SelectRect => {
                let add = ctx.flag(0)?;
                let a = ctx.point(1)?;
                let b = ctx.point(2)?;
                // Canonical corner order: agents may hand the rectangle
                // either way round.
                let rect = PixelRect {
                    p0: PixelPoint::new(a.x.min(b.x), a.y.min(b.y)),
                    p1: PixelPoint::new(a.x.max(b.x), a.y.max(b.y)),
                };
                spatial(SpatialAction::SelectionRect {
                    add,
                    rects: vec![rect],
                })
            }
            Self::SelectUnit => Ok(ui(UiAction::MultiPanel {
                kind: ctx.engine_enum(0, SELECT_UNIT_ACT_OPTIONS)?,
                unit_index: ctx.scalar(1)? as u32,
            })),
            Self::ControlGroup => Ok(ui(UiAction::ControlGroup {
                action: ctx.engine_enum(0, CONTROL_GROUP_ACT_OPTIONS)?,
                index: ctx.scalar(1)? as u32,
            })),
            Self::SelectIdleWorker => Ok(ui(UiAction::SelectIdleWorker {
                kind: ctx.engine_enum(0, SELECT_WORKER_OPTIONS)?,
            })),
            Self::SelectArmy => Ok(ui(UiAction::SelectArmy { add: ctx.flag(0)? })),
            Self::SelectWarpGates => Ok(ui(UiAction::SelectWarpGates { add: ctx.flag(0)? })),
            Self::SelectLarva => Ok(ui(UiAction::SelectLarva)),
            Self::Unload => Ok(ui(UiAction::CargoPanel {
                unit_index: ctx.scalar(0)? as u32,
            })),
            Self::BuildQueue => Ok(ui(UiAction::ProductionPanel {
                unit_index: ctx.scalar(0)? as u32,
            })),
            Self::CmdQuick => spatial(SpatialAction::UnitCommand {
                ability_id,
                queued: ctx.flag(0)?,
                target: None,
            }),
            Self::CmdScreen => spatial(SpatialAction::UnitCommand {
                ability_id,
                queued: ctx.flag(0)?,
                target: Some(SpatialTarget::Screen(ctx.point(1)?)),
            }),
            Self::CmdMinimap => spatial(SpatialAction::UnitCommand {
                ability_id,
                queued: ctx.flag(0)?,
                target: Some(SpatialTarget::Minimap(ctx.point(1)?)),
            }),
            Self::Autocast => Ok(ui(UiAction::ToggleAutocast { ability_id })),
            Self::RawMoveCamera => Ok(raw(RawAction::CameraMove {
                center_world: ctx.world(0)?,
            })),
            Self::RawCmd => Ok(raw(RawAction::UnitCommand {
                ability_id,
                queued: ctx.flag(0)?,
                unit_tags: ctx.tags(1)?,
                target: None,
            })),
            Self::RawCmdPt => Ok(raw(RawAction::UnitCommand {
                ability_id,
                queued: ctx.flag(0)?,
                unit_tags: ctx.tags(1)?,
                target: Some(RawTarget::Point(ctx.world(2)?)),
            })),
            Self::RawCmdUnit => Ok(raw(RawAction::UnitCommand {
                ability_id,
                queued: ctx.flag(0)?,
                unit_tags: ctx.tags(1)?,
                target: Some(RawTarget::Unit(ctx.tag(2)?)),
            })),
            Self::RawAutocast => Ok(raw(RawAction::ToggleAutocast {
                ability_id,
                unit_tags: ctx.tags(0)?,
            })),
        }
    }
}

/// Argument accessors shared by the encode arms.
struct EncodeCtx<'a> {
    name: &'a str,
    args: &'a [Vec<i64>],
}

impl EncodeCtx<'_> {
    fn bad(&self, reason: String) -> ActionError {
        ActionError::InvalidArguments {
            function: self.name.to_string(),
            reason,
        }
    }

    fn arg(&self, i: usize) -> Result<&[i64], ActionError> {
        self.args
            .get(i)
            .map(Vec::as_slice)
            .ok_or_else(|| self.bad(format!("missing argument {i}")))
    }

    fn scalar(&self, i: usize) -> Result<i64, ActionError> {
        match self.arg(i)? {
            [v] => Ok(*v),
            other => Err(self.bad(format!(
                "argument {i} wants a single value, got {} values",
                other.len()
            ))),
        }
    }

    fn flag(&self, i: usize) -> Result<bool, ActionError> {
        Ok(self.scalar(i)? != 0)
    }

    fn engine_enum(&self, i: usize, options: &[(&str, u32)]) -> Result<u32, ActionError> {
        let ord = self.scalar(i)?;
        options
            .get(usize::try_from(ord).unwrap_or(usize::MAX))
            .map(|&(_, v)| v)
            .ok_or_else(|| self.bad(format!("argument {i} ordinal {ord} out of range")))
    }

    fn point(&self, i: usize) -> Result<PixelPoint, ActionError> {
        match self.arg(i)? {
            [x, y] => Ok(PixelPoint::new(*x as i32, *y as i32)),
            other => Err(self.bad(format!(
                "argument {i} wants an (x, y) pair, got {} values",
                other.len()
            ))),
        }
    }

    fn world(&self, i: usize) -> Result<WorldPoint, ActionError> {
        match self.arg(i)? {
            [x, y] => Ok(WorldPoint::new(*x as f32, *y as f32)),
            other => Err(self.bad(format!(
                "argument {i} wants an (x, y) pair, got {} values",
                other.len()
            ))),
        }
    }

    fn tags(&self, i: usize) -> Result<Vec<u64>, ActionError> {
        Ok(self.arg(i)?.iter().map(|&t| t as u64).collect())
    }

    fn tag(&self, i: usize) -> Result<u64, ActionError> {
        self.arg(i)?
            .first()
            .map(|&t| t as u64)
            .ok_or_else(|| self.bad(format!("argument {i} wants one unit tag")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_rect_canonicalizes_corners() {
        let fwd = FunctionType::SelectRect
            .encode("select_rect", 0, ActionSpace::Features, &[
                vec![0],
                vec![10, 2],
                vec![4, 9],
            ])
            .unwrap();
        let rev = FunctionType::SelectRect
            .encode("select_rect", 0, ActionSpace::Features, &[
                vec![0],
                vec![4, 9],
                vec![10, 2],
            ])
            .unwrap();
        assert_eq!(fwd, rev);
        match fwd.payload {
            Some(ActionPayload::FeatureLayer(SpatialAction::SelectionRect { rects, .. })) => {
                assert_eq!(rects[0].p0, PixelPoint::new(4, 2));
                assert_eq!(rects[0].p1, PixelPoint::new(10, 9));
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn enum_ordinals_become_engine_values() {
        let act = FunctionType::ControlGroup
            .encode("select_control_group", 0, ActionSpace::Features, &[
                vec![1], // ordinal for "set"
                vec![3],
            ])
            .unwrap();
        match act.payload {
            Some(ActionPayload::Ui(UiAction::ControlGroup { action, index })) => {
                assert_eq!(action, 2); // engine value for "set"
                assert_eq!(index, 3);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn surface_function_rejected_in_raw_space() {
        let err = FunctionType::CmdScreen
            .encode("Attack_screen", 3674, ActionSpace::Raw, &[vec![0], vec![3, 4]])
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidArguments { .. }));
    }

    #[test]
    fn quick_command_carries_ability_and_queue_flag() {
        let act = FunctionType::CmdQuick
            .encode("Stop_quick", 3665, ActionSpace::Rgb, &[vec![1]])
            .unwrap();
        assert_eq!(
            act.payload,
            Some(ActionPayload::Render(SpatialAction::UnitCommand {
                ability_id: 3665,
                queued: true,
                target: None,
            }))
        );
    }
}
