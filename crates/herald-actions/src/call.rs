//! Agent-side function calls and input normalization.
//!
//! Agents hand arguments over in whatever shape is convenient: a bare
//! integer, a flat list, or an enum option name. [`ArgValue`] is the tagged
//! form of that input; [`FunctionCall::validated`] normalizes it once at
//! the boundary so everything downstream sees `Vec<Vec<i64>>`.

use herald_core::ActionError;

use crate::args::{ordinal_by_name, ArgumentKind};
use crate::catalog::FunctionCatalog;

/// A function reference by id or by name.
#[derive(Clone, Copy, Debug)]
pub enum FunctionRef<'a> {
    /// By catalog id.
    Id(u32),
    /// By unique function name.
    Name(&'a str),
}

impl From<u32> for FunctionRef<'_> {
    fn from(id: u32) -> Self {
        FunctionRef::Id(id)
    }
}

impl<'a> From<&'a str> for FunctionRef<'a> {
    fn from(name: &'a str) -> Self {
        FunctionRef::Name(name)
    }
}

/// One argument as supplied by the agent.
#[derive(Clone, Debug)]
pub enum ArgValue<'a> {
    /// A bare integer; wrapped into a one-element list.
    Scalar(i64),
    /// An explicit list of integers.
    List(Vec<i64>),
    /// An enum option, by name.
    Name(&'a str),
}

impl From<i64> for ArgValue<'_> {
    fn from(v: i64) -> Self {
        ArgValue::Scalar(v)
    }
}

impl From<Vec<i64>> for ArgValue<'_> {
    fn from(v: Vec<i64>) -> Self {
        ArgValue::List(v)
    }
}

impl<'a> From<&'a str> for ArgValue<'a> {
    fn from(n: &'a str) -> Self {
        ArgValue::Name(n)
    }
}

/// A flat agent action: a function id plus integer-list arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionCall {
    /// The function id within the active catalog.
    pub function: u32,
    /// One integer list per argument, in signature order.
    pub arguments: Vec<Vec<i64>>,
}

impl FunctionCall {
    /// Build a call without validation. The arguments must already be in
    /// normalized form.
    pub fn new(function: u32, arguments: Vec<Vec<i64>>) -> Self {
        Self {
            function,
            arguments,
        }
    }

    /// Build a call, resolving the function reference and normalizing each
    /// argument against the function's signature.
    ///
    /// Enum arguments accept an option name or an ordinal and are checked
    /// against the option table here; other kinds are coerced to flat lists
    /// without bounds checks (those happen when the action is transformed,
    /// where the catalog's resolved sizes apply).
    pub fn validated(
        function: FunctionRef<'_>,
        arguments: &[ArgValue<'_>],
        catalog: &FunctionCatalog,
    ) -> Result<Self, ActionError> {
        let func = match function {
            FunctionRef::Id(id) => catalog.get(id)?,
            FunctionRef::Name(name) => catalog.get_by_name(name)?,
        };

        let mut normalized = Vec::with_capacity(arguments.len());
        for (arg, ty) in arguments.iter().zip(&func.args) {
            if let ArgumentKind::Enum(options) = ty.kind {
                let ordinal = match arg {
                    ArgValue::Name(name) => {
                        ordinal_by_name(options, name).ok_or_else(|| {
                            ActionError::InvalidArguments {
                                function: func.name.to_string(),
                                reason: format!(
                                    "unknown value '{name}' for {}; valid: {:?}",
                                    ty.name,
                                    options.iter().map(|&(n, _)| n).collect::<Vec<_>>()
                                ),
                            }
                        })?
                    }
                    ArgValue::Scalar(v) => *v as usize,
                    ArgValue::List(l) => *l.first().unwrap_or(&0) as usize,
                };
                if ordinal >= options.len() {
                    return Err(ActionError::InvalidArguments {
                        function: func.name.to_string(),
                        reason: format!(
                            "value {ordinal} out of range for {} with {} options",
                            ty.name,
                            options.len()
                        ),
                    });
                }
                normalized.push(vec![ordinal as i64]);
            } else {
                match arg {
                    ArgValue::Scalar(v) => normalized.push(vec![*v]),
                    ArgValue::List(l) => normalized.push(l.clone()),
                    ArgValue::Name(name) => {
                        return Err(ActionError::InvalidArguments {
                            function: func.name.to_string(),
                            reason: format!("argument {} does not take a name ('{name}')", ty.name),
                        })
                    }
                }
            }
        }
        Ok(Self::new(func.id, normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArgSizes;
    use crate::tables::SURFACE_FUNCTIONS;

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

    #[test]
    fn enum_by_name_resolves_to_ordinal() {
        let cat = catalog();
        // Stop_quick takes only "queued".
        let call =
            FunctionCall::validated("Stop_quick".into(), &["queued".into()], &cat).unwrap();
        assert_eq!(call.arguments, vec![vec![1]]);
        let call = FunctionCall::validated("Stop_quick".into(), &["now".into()], &cat).unwrap();
        assert_eq!(call.arguments, vec![vec![0]]);
    }

    #[test]
    fn enum_by_ordinal_is_checked() {
        let cat = catalog();
        let call =
            FunctionCall::validated("Stop_quick".into(), &[ArgValue::Scalar(1)], &cat).unwrap();
        assert_eq!(call.arguments, vec![vec![1]]);
        let err =
            FunctionCall::validated("Stop_quick".into(), &[ArgValue::Scalar(7)], &cat).unwrap_err();
        assert!(matches!(err, ActionError::InvalidArguments { .. }));
    }

    #[test]
    fn bad_function_rejected() {
        let cat = catalog();
        assert!(matches!(
            FunctionCall::validated("Dance_quick".into(), &[], &cat),
            Err(ActionError::InvalidFunction { .. })
        ));
        assert!(matches!(
            FunctionCall::validated(FunctionRef::Id(9999), &[], &cat),
            Err(ActionError::InvalidFunction { .. })
        ));
    }

    #[test]
    fn scalars_and_lists_coerce() {
        let cat = catalog();
        let call = FunctionCall::validated(
            "select_point".into(),
            &["toggle".into(), ArgValue::List(vec![23, 38])],
            &cat,
        )
        .unwrap();
        assert_eq!(call.arguments, vec![vec![1], vec![23, 38]]);
    }

    #[test]
    fn name_for_non_enum_rejected() {
        let cat = catalog();
        let err = FunctionCall::validated(
            "move_camera".into(),
            &[ArgValue::Name("middle")],
            &cat,
        )
        .unwrap_err();
        assert!(matches!(err, ActionError::InvalidArguments { .. }));
    }
}
