//! Benchmark profiles for the Herald agent interface layer.
//!
//! Provides pre-built translators and frames so the benches measure the
//! interesting work, not fixture assembly.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use herald_obs::{Dimensions, InterfaceConfig, Translator};
use herald_proto::ObservationFrame;
use herald_test_utils::feature_frame;

/// The resolution profile most agents train at.
pub const SCREEN: u32 = 84;
/// Minimap side length for [`reference_translator`].
pub const MINIMAP: u32 = 64;

/// A translator over an 84/64 feature interface on a 64x64 map.
pub fn reference_translator() -> Translator {
    let config = InterfaceConfig {
        feature: Some(
            Dimensions::square(SCREEN, MINIMAP).expect("benchmark dimensions are valid"),
        ),
        ..Default::default()
    };
    Translator::new(config, (64, 64)).expect("benchmark config is valid")
}

/// A frame with complete, well-formed plane sets at the reference profile.
pub fn reference_frame() -> ObservationFrame {
    feature_frame((SCREEN, SCREEN), (MINIMAP, MINIMAP))
}
