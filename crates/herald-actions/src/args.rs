//! Argument kinds and the per-interface argument type sets.
//!
//! Agents pass every argument as a flat list of integers. What those
//! integers mean (a pixel point, an ordinal into an enum, a cap-bounded
//! tag list) is the argument's [`ArgumentKind`]. Enum arguments carry an
//! ordered `(name, engine value)` table: the agent-side value is the
//! ordinal position, the engine-side value is the table entry.

use smallvec::SmallVec;

/// An ordered `(name, engine value)` option table for an enum argument.
pub type EnumOptions = &'static [(&'static str, u32)];

/// Whether to execute now or queue behind existing orders.
pub const QUEUED_OPTIONS: EnumOptions = &[("now", 0), ("queued", 1)];

/// What to do with a control group.
pub const CONTROL_GROUP_ACT_OPTIONS: EnumOptions = &[
    ("recall", 1),
    ("set", 2),
    ("append", 3),
    ("set_and_steal", 4),
    ("append_and_steal", 5),
];

/// What to do with the unit at a selection point.
pub const SELECT_POINT_ACT_OPTIONS: EnumOptions = &[
    ("select", 1),
    ("toggle", 2),
    ("select_all_type", 3),
    ("add_all_type", 4),
];

/// Replace the selection or add to it.
pub const SELECT_ADD_OPTIONS: EnumOptions = &[("select", 0), ("add", 1)];

/// What to do with one unit in the multi-select panel.
pub const SELECT_UNIT_ACT_OPTIONS: EnumOptions = &[
    ("select", 1),
    ("deselect", 2),
    ("select_all_type", 3),
    ("deselect_all_type", 4),
];

/// What to do when selecting an idle worker.
pub const SELECT_WORKER_OPTIONS: EnumOptions = &[
    ("select", 1),
    ("add", 2),
    ("select_all", 3),
    ("add_all", 4),
];

/// How one argument's integer list is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentKind {
    /// An `(x, y)` point. Bounds are unknown until catalog build, when the
    /// owning surface's pixel (or world) resolution is substituted.
    Point,
    /// A single integer in `0..n`.
    Scalar(u32),
    /// One ordinal into an ordered option table.
    Enum(EnumOptions),
    /// A variable-length list of unit-tag indices, at most `count` long,
    /// each in `0..size`.
    UnitTags {
        /// Maximum number of tags accepted; extras are truncated.
        count: usize,
        /// Bound on each index value.
        size: u32,
    },
}

/// One argument slot of a function signature.
///
/// The static tables describe arguments by kind only; the catalog builder
/// resolves `sizes` against the configured resolutions, producing the
/// describable form an agent sees in the action spec. That resolved form is
/// not itself executable; execution always goes back through the kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentType {
    /// Position of this argument type within its interface's set.
    pub id: usize,
    /// Unique name within the interface ("screen", "queued", ...).
    pub name: &'static str,
    /// Max+1 per dimension, resolved at catalog build.
    pub sizes: SmallVec<[u32; 2]>,
    /// Interpretation of the integer list.
    pub kind: ArgumentKind,
}

impl ArgumentType {
    /// Number of integers one value of this argument carries.
    ///
    /// Tag lists are variable-length; this reports their cap.
    pub fn arity(&self) -> usize {
        self.sizes.len()
    }
}

/// Declaration of one argument slot before size resolution.
#[derive(Clone, Copy, Debug)]
pub struct ArgumentDecl {
    /// Unique name within the interface.
    pub name: &'static str,
    /// Interpretation of the integer list.
    pub kind: ArgumentKind,
}

/// The surface interface's argument set, in id order.
///
/// `screen2` exists so that no function takes the same argument type twice
/// (the rectangle select needs two screen points).
pub const SURFACE_ARGS: &[ArgumentDecl] = &[
    ArgumentDecl { name: "screen", kind: ArgumentKind::Point },
    ArgumentDecl { name: "minimap", kind: ArgumentKind::Point },
    ArgumentDecl { name: "screen2", kind: ArgumentKind::Point },
    ArgumentDecl { name: "queued", kind: ArgumentKind::Enum(QUEUED_OPTIONS) },
    ArgumentDecl { name: "control_group_act", kind: ArgumentKind::Enum(CONTROL_GROUP_ACT_OPTIONS) },
    ArgumentDecl { name: "control_group_id", kind: ArgumentKind::Scalar(10) },
    ArgumentDecl { name: "select_point_act", kind: ArgumentKind::Enum(SELECT_POINT_ACT_OPTIONS) },
    ArgumentDecl { name: "select_add", kind: ArgumentKind::Enum(SELECT_ADD_OPTIONS) },
    ArgumentDecl { name: "select_unit_act", kind: ArgumentKind::Enum(SELECT_UNIT_ACT_OPTIONS) },
    ArgumentDecl { name: "select_unit_id", kind: ArgumentKind::Scalar(500) },
    ArgumentDecl { name: "select_worker", kind: ArgumentKind::Enum(SELECT_WORKER_OPTIONS) },
    ArgumentDecl { name: "build_queue_id", kind: ArgumentKind::Scalar(10) },
    ArgumentDecl { name: "unload_id", kind: ArgumentKind::Scalar(500) },
];

/// The raw interface's argument set, in id order.
pub const RAW_ARGS: &[ArgumentDecl] = &[
    ArgumentDecl { name: "world", kind: ArgumentKind::Point },
    ArgumentDecl { name: "queued", kind: ArgumentKind::Enum(QUEUED_OPTIONS) },
    ArgumentDecl { name: "unit_tags", kind: ArgumentKind::UnitTags { count: 512, size: 512 } },
    ArgumentDecl { name: "target_unit_tag", kind: ArgumentKind::UnitTags { count: 1, size: 512 } },
];

/// Find an ordinal in an option table by name.
pub fn ordinal_by_name(options: EnumOptions, name: &str) -> Option<usize> {
    options.iter().position(|&(n, _)| n == name)
}

/// Map an engine value back to its ordinal in an option table.
pub fn ordinal_by_engine_value(options: EnumOptions, value: u32) -> Option<usize> {
    options.iter().position(|&(_, v)| v == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_tables_resolve_both_ways() {
        assert_eq!(ordinal_by_name(QUEUED_OPTIONS, "queued"), Some(1));
        assert_eq!(ordinal_by_name(QUEUED_OPTIONS, "now"), Some(0));
        assert_eq!(ordinal_by_name(QUEUED_OPTIONS, "later"), None);
        assert_eq!(ordinal_by_engine_value(CONTROL_GROUP_ACT_OPTIONS, 2), Some(1));
        assert_eq!(ordinal_by_engine_value(SELECT_POINT_ACT_OPTIONS, 4), Some(3));
    }

    #[test]
    fn argument_names_are_unique_per_interface() {
        for set in [SURFACE_ARGS, RAW_ARGS] {
            for (i, a) in set.iter().enumerate() {
                for b in &set[i + 1..] {
                    assert_ne!(a.name, b.name);
                }
            }
        }
    }
}
