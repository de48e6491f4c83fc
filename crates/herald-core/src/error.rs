//! Error types for the Herald agent interface layer.
//!
//! One enum per subsystem: configuration (catalog build), layer decoding,
//! action translation, and the named-array container. All are plain enums
//! with `Display` + `Error` impls; nothing here is retried internally.

use std::error::Error;
use std::fmt;

/// Errors raised while building a catalog or transform from configuration.
///
/// These are fatal at build time: a process that hits one has a bad
/// configuration and should not proceed to stepping.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A linear transform was given a zero scale component.
    ZeroScale {
        /// The offending `(x, y)` scale.
        scale: (f64, f64),
    },
    /// Screen/minimap dimensions are missing, non-positive, or inconsistent.
    InvalidDimensions {
        /// What went wrong.
        reason: String,
    },
    /// The configured action space does not match the observation surfaces.
    ActionSpaceMismatch {
        /// What went wrong.
        reason: String,
    },
    /// A static function table violated a catalog invariant
    /// (non-contiguous ids, duplicate names).
    CatalogInvariant {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroScale { scale } => {
                write!(f, "transform scale must be non-zero, got ({}, {})", scale.0, scale.1)
            }
            Self::InvalidDimensions { reason } => write!(f, "invalid dimensions: {reason}"),
            Self::ActionSpaceMismatch { reason } => {
                write!(f, "action space mismatch: {reason}")
            }
            Self::CatalogInvariant { reason } => write!(f, "catalog invariant: {reason}"),
        }
    }
}

impl Error for ConfigError {}

/// Errors raised while decoding a bit-packed feature plane or RGB buffer.
///
/// Always fatal: a malformed buffer means the wire stream is corrupt or the
/// declared plane metadata is wrong, and there is nothing to retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The plane's byte payload does not match its declared size and depth.
    LengthMismatch {
        /// Name of the layer being decoded.
        layer: String,
        /// Bytes implied by the declared `(width, height, bits_per_pixel)`.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },
    /// The plane declares a bit depth the codec does not understand.
    UnsupportedDepth {
        /// The declared bits-per-pixel.
        bits_per_pixel: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                layer,
                expected,
                actual,
            } => write!(
                f,
                "layer '{layer}': payload length {actual}, declared size needs {expected}"
            ),
            Self::UnsupportedDepth { bits_per_pixel } => {
                write!(f, "unsupported bits_per_pixel: {bits_per_pixel}")
            }
        }
    }
}

impl Error for DecodeError {}

/// Errors raised while translating a single agent action.
///
/// All variants except [`ActionError::UnknownAbility`] are recoverable by
/// the caller: catch them around exploratory action proposals and propose
/// something else. `UnknownAbility` means the shipped static table is stale
/// for this engine build and should crash the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The function id or name does not exist in the active catalog.
    InvalidFunction {
        /// The id or name as given by the caller.
        function: String,
    },
    /// The arguments do not fit the function's signature or bounds.
    InvalidArguments {
        /// Name of the function being called.
        function: String,
        /// What went wrong.
        reason: String,
    },
    /// The function exists but is not legal at the last observation.
    Unavailable {
        /// The function id.
        id: u32,
        /// The function name.
        name: String,
    },
    /// An ability reported by the engine is present in the static index but
    /// no registered function matches its required shape. The table is
    /// stale; this is fatal.
    UnknownAbility {
        /// The engine ability id.
        ability_id: u32,
        /// What shape was required.
        reason: String,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFunction { function } => write!(f, "invalid function: {function}"),
            Self::InvalidArguments { function, reason } => {
                write!(f, "invalid arguments for {function}: {reason}")
            }
            Self::Unavailable { id, name } => {
                write!(f, "function {id}/{name} is not currently available")
            }
            Self::UnknownAbility { ability_id, reason } => {
                write!(f, "ability {ability_id} has no matching function: {reason}")
            }
        }
    }
}

impl Error for ActionError {}

/// Errors raised by [`NamedArray`](crate::NamedArray) construction and
/// name-based indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamedArrayError {
    /// The data length does not equal the product of the shape.
    ShapeMismatch {
        /// Elements implied by the shape.
        expected: usize,
        /// Elements actually supplied.
        actual: usize,
    },
    /// The per-dimension name list does not have one entry per dimension.
    DimensionCountMismatch {
        /// Number of dimensions in the shape.
        expected: usize,
        /// Number of name lists supplied.
        actual: usize,
    },
    /// An index is past the end of its dimension.
    IndexOutOfBounds {
        /// Which dimension.
        dim: usize,
        /// The offending index.
        index: usize,
        /// The dimension's cardinality.
        len: usize,
    },
    /// A dimension's name list has the wrong length.
    NameCountMismatch {
        /// Which dimension.
        dim: usize,
        /// The dimension's cardinality.
        expected: usize,
        /// Names supplied.
        actual: usize,
    },
    /// No dimension was named. Use an unnamed array instead.
    NoNames,
    /// A name was repeated within one dimension.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// A name was looked up that the dimension does not define.
    UnknownName {
        /// The name as given.
        name: String,
    },
    /// A name lookup was attempted on an unnamed dimension.
    UnnamedAxis {
        /// Which dimension.
        dim: usize,
    },
}

impl fmt::Display for NamedArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "data has {actual} elements, shape needs {expected}")
            }
            Self::DimensionCountMismatch { expected, actual } => {
                write!(f, "shape has {expected} dimensions but {actual} name lists were given")
            }
            Self::IndexOutOfBounds { dim, index, len } => {
                write!(f, "index {index} out of bounds for dimension {dim} of length {len}")
            }
            Self::NameCountMismatch {
                dim,
                expected,
                actual,
            } => write!(f, "dimension {dim} has {expected} entries but {actual} names"),
            Self::NoNames => write!(f, "no names given; use an unnamed array instead"),
            Self::DuplicateName { name } => write!(f, "duplicate name '{name}'"),
            Self::UnknownName { name } => write!(f, "name '{name}' is invalid"),
            Self::UnnamedAxis { dim } => {
                write!(f, "dimension {dim} is unnamed and cannot be indexed by name")
            }
        }
    }
}

impl Error for NamedArrayError {}
