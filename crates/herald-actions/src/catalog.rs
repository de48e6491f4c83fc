//! Building the immutable, resolution-bound function catalog.
//!
//! A [`FunctionCatalog`] is compiled once from a static table plus the
//! session's resolution parameters, then treated as read-only: function
//! lookup by id is array indexing, by name an ordered map, and the
//! ability index answers "which functions expose this engine ability".

use indexmap::IndexMap;
use smallvec::SmallVec;

use herald_core::{ActionError, ConfigError};

use crate::args::{ArgumentDecl, ArgumentKind, ArgumentType, RAW_ARGS, SURFACE_ARGS};
use crate::ftype::FunctionType;
use crate::spec::{FunctionDef, UiAvailability};

/// Resolutions substituted into point-argument bounds at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgSizes {
    /// Screen pixel size `(width, height)`.
    pub screen: (u32, u32),
    /// Minimap pixel size `(width, height)`.
    pub minimap: (u32, u32),
    /// World (raw) resolution `(width, height)`.
    pub world: (u32, u32),
}

/// A function descriptor resolved against one catalog's argument sizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Function id, the index of this spec in the catalog.
    pub id: u32,
    /// Unique function name.
    pub name: &'static str,
    /// How this function encodes.
    pub ftype: FunctionType,
    /// Engine ability id, 0 for UI functions.
    pub ability_id: u32,
    /// Ability id of the general form, 0 if none.
    pub general_id: u32,
    /// Resolved argument slots, in call order.
    pub args: Vec<ArgumentType>,
    /// Availability predicate; `None` for ability-backed functions.
    pub avail: Option<UiAvailability>,
    /// Whether this function belongs to the raw interface.
    pub raw: bool,
}

/// The immutable function catalog for one interface.
#[derive(Clone, Debug)]
pub struct FunctionCatalog {
    functions: Vec<FunctionSpec>,
    by_name: IndexMap<&'static str, u32>,
    by_ability: IndexMap<u32, Vec<u32>>,
    arg_types: Vec<ArgumentType>,
    raw: bool,
}

fn resolve_args(decls: &[ArgumentDecl], sizes: &ArgSizes) -> Vec<ArgumentType> {
    decls
        .iter()
        .enumerate()
        .map(|(id, decl)| {
            let resolved: SmallVec<[u32; 2]> = match decl.kind {
                ArgumentKind::Point => {
                    let (w, h) = match decl.name {
                        "minimap" => sizes.minimap,
                        "world" => sizes.world,
                        _ => sizes.screen,
                    };
                    SmallVec::from_slice(&[w, h])
                }
                ArgumentKind::Scalar(n) => SmallVec::from_slice(&[n]),
                ArgumentKind::Enum(options) => SmallVec::from_slice(&[options.len() as u32]),
                ArgumentKind::UnitTags { size, .. } => SmallVec::from_slice(&[size]),
            };
            ArgumentType {
                id,
                name: decl.name,
                sizes: resolved,
                kind: decl.kind,
            }
        })
        .collect()
}

impl FunctionCatalog {
    /// Compile a static table into a catalog.
    ///
    /// Validates that ids are dense on `0..defs.len()`, names are unique,
    /// every encoder's arguments exist in the interface's argument set, and
    /// every entry belongs to the requested interface.
    pub fn build(defs: &[FunctionDef], sizes: &ArgSizes, raw: bool) -> Result<Self, ConfigError> {
        let arg_types = resolve_args(if raw { RAW_ARGS } else { SURFACE_ARGS }, sizes);

        let mut sorted: Vec<&FunctionDef> = defs.iter().collect();
        sorted.sort_by_key(|d| d.id);

        let mut functions = Vec::with_capacity(sorted.len());
        let mut by_name = IndexMap::with_capacity(sorted.len());
        let mut by_ability: IndexMap<u32, Vec<u32>> = IndexMap::new();

        for (index, def) in sorted.iter().enumerate() {
            if def.id as usize != index {
                return Err(ConfigError::CatalogInvariant {
                    reason: format!(
                        "function ids must be dense from 0: found {} at position {index}",
                        def.id
                    ),
                });
            }
            if def.ftype.is_raw() != raw {
                return Err(ConfigError::CatalogInvariant {
                    reason: format!(
                        "function {}/{} does not belong to this interface",
                        def.id, def.name
                    ),
                });
            }
            if by_name.insert(def.name, def.id).is_some() {
                return Err(ConfigError::CatalogInvariant {
                    reason: format!("duplicate function name '{}'", def.name),
                });
            }

            let mut args = Vec::with_capacity(def.ftype.arg_names().len());
            for arg_name in def.ftype.arg_names() {
                let ty = arg_types
                    .iter()
                    .find(|t| t.name == *arg_name)
                    .ok_or_else(|| ConfigError::CatalogInvariant {
                        reason: format!(
                            "function {}/{} wants unknown argument '{arg_name}'",
                            def.id, def.name
                        ),
                    })?;
                args.push(ty.clone());
            }

            if def.ability_id != 0 {
                by_ability.entry(def.ability_id).or_default().push(def.id);
            }
            functions.push(FunctionSpec {
                id: def.id,
                name: def.name,
                ftype: def.ftype,
                ability_id: def.ability_id,
                general_id: def.general_id,
                args,
                avail: def.avail,
                raw,
            });
        }

        Ok(Self {
            functions,
            by_name,
            by_ability,
            arg_types,
            raw,
        })
    }

    /// Whether this catalog serves the raw interface.
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Number of functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the catalog is empty (it never is after a successful build).
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look up a function by id.
    pub fn get(&self, id: u32) -> Result<&FunctionSpec, ActionError> {
        self.functions
            .get(id as usize)
            .ok_or_else(|| ActionError::InvalidFunction {
                function: id.to_string(),
            })
    }

    /// Look up a function by name.
    pub fn get_by_name(&self, name: &str) -> Result<&FunctionSpec, ActionError> {
        self.by_name
            .get(name)
            .map(|&id| &self.functions[id as usize])
            .ok_or_else(|| ActionError::InvalidFunction {
                function: name.to_string(),
            })
    }

    /// Iterate all functions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionSpec> {
        self.functions.iter()
    }

    /// The interface's resolved argument types, in id order. This is the
    /// describable action spec an agent sees.
    pub fn arg_types(&self) -> &[ArgumentType] {
        &self.arg_types
    }

    /// Function ids registered under an engine ability id, in id order.
    /// `None` means the ability is absent from the static table.
    pub fn ability_functions(&self, ability_id: u32) -> Option<&[u32]> {
        self.by_ability.get(&ability_id).map(Vec::as_slice)
    }

    /// Functions gated by a UI availability predicate, in id order.
    pub fn ui_functions(&self) -> impl Iterator<Item = &FunctionSpec> {
        self.functions.iter().filter(|f| f.avail.is_some())
    }

    /// The general ability id shared by the functions under `ability_id`,
    /// if those functions are specific variants of a general action.
    pub fn general_of(&self, ability_id: u32) -> Option<u32> {
        let ids = self.by_ability.get(&ability_id)?;
        let first = ids.first()?;
        let general = self.functions[*first as usize].general_id;
        (general != 0).then_some(general)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{RAW_FUNCTIONS, SURFACE_FUNCTIONS};

    fn sizes() -> ArgSizes {
        ArgSizes {
            screen: (84, 84),
            minimap: (64, 64),
            world: (256, 256),
        }
    }

    #[test]
    fn surface_table_builds() {
        let cat = FunctionCatalog::build(SURFACE_FUNCTIONS, &sizes(), false).unwrap();
        assert_eq!(cat.len(), SURFACE_FUNCTIONS.len());
        assert!(!cat.is_raw());
        // Ids are their own indices after the build.
        for (i, f) in cat.iter().enumerate() {
            assert_eq!(f.id as usize, i);
        }
    }

    #[test]
    fn raw_table_builds() {
        let cat = FunctionCatalog::build(RAW_FUNCTIONS, &sizes(), true).unwrap();
        assert_eq!(cat.len(), RAW_FUNCTIONS.len());
        assert!(cat.is_raw());
    }

    #[test]
    fn point_sizes_are_substituted() {
        let cat = FunctionCatalog::build(SURFACE_FUNCTIONS, &sizes(), false).unwrap();
        let select_rect = cat.get_by_name("select_rect").unwrap();
        assert_eq!(select_rect.args.len(), 3);
        assert_eq!(select_rect.args[1].name, "screen");
        assert_eq!(select_rect.args[1].sizes.as_slice(), &[84, 84]);
        let move_camera = cat.get_by_name("move_camera").unwrap();
        assert_eq!(move_camera.args[0].sizes.as_slice(), &[64, 64]);

        let raw = FunctionCatalog::build(RAW_FUNCTIONS, &sizes(), true).unwrap();
        let attack_pt = raw.get_by_name("Attack_pt").unwrap();
        assert_eq!(attack_pt.args[2].name, "world");
        assert_eq!(attack_pt.args[2].sizes.as_slice(), &[256, 256]);
    }

    #[test]
    fn ability_index_and_general_lookup() {
        let cat = FunctionCatalog::build(SURFACE_FUNCTIONS, &sizes(), false).unwrap();
        // Ability 23 ("Attack_Attack") is a specific variant of 3674.
        assert_eq!(cat.general_of(23), Some(3674));
        assert_eq!(cat.general_of(3674), None);
        let attack = cat.ability_functions(3674).unwrap();
        assert!(attack
            .iter()
            .any(|&id| cat.get(id).unwrap().name == "Attack_screen"));
    }

    #[test]
    fn mismatched_interface_rejected() {
        let err = FunctionCatalog::build(SURFACE_FUNCTIONS, &sizes(), true).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogInvariant { .. }));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let defs = [
            FunctionDef {
                id: 0,
                name: "a",
                ftype: FunctionType::NoOp,
                ability_id: 0,
                general_id: 0,
                avail: Some(UiAvailability::Always),
            },
            FunctionDef {
                id: 0,
                name: "b",
                ftype: FunctionType::NoOp,
                ability_id: 0,
                general_id: 0,
                avail: Some(UiAvailability::Always),
            },
        ];
        assert!(FunctionCatalog::build(&defs, &sizes(), false).is_err());
    }
}
