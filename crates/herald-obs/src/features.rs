//! The feature-layer catalogs and the bit-plane codec.
//!
//! Each layer is described by a [`FeatureSpec`]: where it lives (screen or
//! minimap), its value cardinality, and whether it is a measurement or a
//! category. The codec turns one wire [`ImagePlane`] into a row-major
//! `i64` grid, handling the four packed depths and the
//! unsupported-in-this-version case.

use herald_core::DecodeError;
use herald_proto::{ImagePlane, ObservationMsg};

use crate::units::unit_type_scale;

/// Which plane set a feature layer belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerSet {
    /// Camera-local screen planes.
    Screen,
    /// Whole-map minimap planes.
    Minimap,
}

/// Whether a layer's values are measurements or category ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureKind {
    /// A magnitude; scale is the largest value plus one.
    Scalar,
    /// A category id; scale is the number of categories.
    Categorical,
}

/// Values of the `player_relative` layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PlayerRelative {
    /// No unit at this pixel.
    None = 0,
    /// The observer's own unit.
    Own = 1,
    /// An allied unit.
    Ally = 2,
    /// A neutral unit.
    Neutral = 3,
    /// An enemy unit.
    Enemy = 4,
}

/// Values of the `visibility_map` layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Visibility {
    /// Never seen.
    Hidden = 0,
    /// Seen before, not currently visible.
    Seen = 1,
    /// Currently visible.
    Visible = 2,
}

/// Values of the `effects` layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Effect {
    /// Psionic storm.
    PsiStorm = 1,
    /// Guardian shield.
    GuardianShield = 2,
    /// Temporal field, still growing.
    TemporalFieldGrowing = 3,
    /// Temporal field.
    TemporalField = 4,
    /// Thermal lance.
    ThermalLance = 5,
    /// Scanner sweep.
    ScannerSweep = 6,
    /// Nuke target dot.
    NukeDot = 7,
    /// Liberator defender zone, setting up.
    LiberatorDefenderZoneSetup = 8,
    /// Liberator defender zone.
    LiberatorDefenderZone = 9,
    /// Blinding cloud.
    BlindingCloud = 10,
    /// Corrosive bile.
    CorrosiveBile = 11,
    /// Lurker spines.
    LurkerSpines = 12,
}

/// Static description of one feature layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureSpec {
    /// Index of this layer within its set's stacking order.
    pub index: usize,
    /// Layer name, matching the wire plane field.
    pub name: &'static str,
    /// Which plane set carries it.
    pub layer_set: LayerSet,
    /// Max value plus one; categorical layers use the size of the external
    /// id catalog.
    pub scale: u32,
    /// Measurement or category.
    pub kind: FeatureKind,
    /// Whether renderers should clip values to the scale. Carried as
    /// catalog data; the codec never clips.
    pub clip: bool,
}

impl FeatureSpec {
    /// Decode this layer's plane from an observation into an `(h, w)` grid.
    ///
    /// A missing plane or a declared `(0, 0)` size means the layer is not
    /// supported by this engine version; the result is an all-zero grid of
    /// the expected shape so the stacked tensor keeps its promised shape.
    pub fn unpack(
        &self,
        obs: &ObservationMsg,
        expected: (u32, u32),
    ) -> Result<Vec<i64>, DecodeError> {
        let plane = obs.feature_layer_data.as_ref().and_then(|fl| match self.layer_set {
            LayerSet::Screen => fl.renders.by_name(self.name),
            LayerSet::Minimap => fl.minimap_renders.by_name(self.name),
        });
        match plane {
            Some(plane) if plane.width != 0 || plane.height != 0 => unpack_plane(plane, self.name),
            _ => Ok(vec![0; expected.0 as usize * expected.1 as usize]),
        }
    }
}

/// The screen feature layers, in stacking order.
pub fn screen_features() -> Vec<FeatureSpec> {
    use FeatureKind::{Categorical, Scalar};
    use LayerSet::Screen;
    let table: &[(&str, u32, FeatureKind, bool)] = &[
        ("height_map", 256, Scalar, false),
        ("visibility_map", 4, Categorical, false),
        ("creep", 2, Categorical, false),
        ("power", 2, Categorical, false),
        ("player_id", 17, Categorical, false),
        ("player_relative", 5, Categorical, false),
        ("unit_type", unit_type_scale(), Categorical, false),
        ("selected", 2, Categorical, false),
        ("unit_hit_points", 1600, Scalar, true),
        ("unit_hit_points_ratio", 256, Scalar, false),
        ("unit_energy", 1000, Scalar, true),
        ("unit_energy_ratio", 256, Scalar, false),
        ("unit_shields", 1000, Scalar, true),
        ("unit_shields_ratio", 256, Scalar, false),
        ("unit_density", 16, Scalar, true),
        ("unit_density_aa", 256, Scalar, false),
        ("effects", 16, Categorical, false),
    ];
    table
        .iter()
        .enumerate()
        .map(|(index, &(name, scale, kind, clip))| FeatureSpec {
            index,
            name,
            layer_set: Screen,
            scale,
            kind,
            clip,
        })
        .collect()
}

/// The minimap feature layers, in stacking order.
pub fn minimap_features() -> Vec<FeatureSpec> {
    use FeatureKind::{Categorical, Scalar};
    use LayerSet::Minimap;
    let table: &[(&str, u32, FeatureKind)] = &[
        ("height_map", 256, Scalar),
        ("visibility_map", 4, Categorical),
        ("creep", 2, Categorical),
        ("camera", 2, Categorical),
        ("player_id", 17, Categorical),
        ("player_relative", 5, Categorical),
        ("selected", 2, Categorical),
    ];
    table
        .iter()
        .enumerate()
        .map(|(index, &(name, scale, kind))| FeatureSpec {
            index,
            name,
            layer_set: Minimap,
            scale,
            kind,
            clip: false,
        })
        .collect()
}

/// Decode a packed plane into row-major `i64` values of its declared shape.
///
/// Depths: 1-bpp planes unpack MSB-first and drop the byte-alignment pad
/// bits at the end of the buffer; 8/16/32-bpp planes are little-endian. Any
/// payload whose length disagrees with the declared size is a fatal
/// [`DecodeError`].
pub fn unpack_plane(plane: &ImagePlane, layer: &str) -> Result<Vec<i64>, DecodeError> {
    let pixels = plane.width as usize * plane.height as usize;
    let expect_len = |bytes: usize| -> Result<(), DecodeError> {
        if plane.data.len() != bytes {
            return Err(DecodeError::LengthMismatch {
                layer: layer.to_string(),
                expected: bytes,
                actual: plane.data.len(),
            });
        }
        Ok(())
    };
    match plane.bits_per_pixel {
        1 => {
            expect_len(pixels.div_ceil(8))?;
            let mut out = Vec::with_capacity(pixels);
            'unpack: for byte in &plane.data {
                for bit in (0..8).rev() {
                    if out.len() == pixels {
                        // Trailing pad bits from byte alignment are not data.
                        break 'unpack;
                    }
                    out.push(i64::from((byte >> bit) & 1));
                }
            }
            Ok(out)
        }
        8 => {
            expect_len(pixels)?;
            Ok(plane.data.iter().map(|&b| i64::from(b)).collect())
        }
        16 => {
            expect_len(pixels * 2)?;
            Ok(plane
                .data
                .chunks_exact(2)
                .map(|c| i64::from(u16::from_le_bytes([c[0], c[1]])))
                .collect())
        }
        32 => {
            expect_len(pixels * 4)?;
            Ok(plane
                .data
                .chunks_exact(4)
                .map(|c| i64::from(i32::from_le_bytes([c[0], c[1], c[2], c[3]])))
                .collect())
        }
        other => Err(DecodeError::UnsupportedDepth {
            bits_per_pixel: other,
        }),
    }
}

/// Decode a 24-bpp RGB buffer into row-major `(h, w, 3)` values.
pub fn unpack_rgb(plane: &ImagePlane, layer: &str) -> Result<Vec<i64>, DecodeError> {
    if plane.bits_per_pixel != 24 {
        return Err(DecodeError::UnsupportedDepth {
            bits_per_pixel: plane.bits_per_pixel,
        });
    }
    let expected = plane.width as usize * plane.height as usize * 3;
    if plane.data.len() != expected {
        return Err(DecodeError::LengthMismatch {
            layer: layer.to_string(),
            expected,
            actual: plane.data.len(),
        });
    }
    Ok(plane.data.iter().map(|&b| i64::from(b)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(bpp: u32, w: u32, h: u32, data: Vec<u8>) -> ImagePlane {
        ImagePlane {
            bits_per_pixel: bpp,
            width: w,
            height: h,
            data,
        }
    }

    #[test]
    fn one_bpp_drops_pad_bits() {
        // 3x3 = 9 pixels in 2 bytes; the last 7 bits are pad.
        let p = plane(1, 3, 3, vec![0b1010_1010, 0b1000_0000]);
        let grid = unpack_plane(&p, "creep").unwrap();
        assert_eq!(grid.len(), 9);
        assert_eq!(grid, vec![1, 0, 1, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn one_bpp_exact_multiple_of_eight() {
        let p = plane(1, 4, 2, vec![0b1111_0000]);
        let grid = unpack_plane(&p, "power").unwrap();
        assert_eq!(grid, vec![1, 1, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn eight_and_wider_depths() {
        let p = plane(8, 2, 2, vec![1, 2, 3, 255]);
        assert_eq!(unpack_plane(&p, "height_map").unwrap(), vec![1, 2, 3, 255]);

        let p = plane(16, 2, 1, vec![0x34, 0x12, 0xff, 0xff]);
        assert_eq!(unpack_plane(&p, "unit_type").unwrap(), vec![0x1234, 0xffff]);

        let p = plane(32, 1, 1, vec![0xff, 0xff, 0xff, 0xff]);
        assert_eq!(unpack_plane(&p, "unit_hit_points").unwrap(), vec![-1]);
    }

    #[test]
    fn malformed_length_is_fatal() {
        let p = plane(8, 3, 3, vec![0; 8]);
        assert!(matches!(
            unpack_plane(&p, "height_map"),
            Err(DecodeError::LengthMismatch {
                expected: 9,
                actual: 8,
                ..
            })
        ));
        let p = plane(1, 3, 3, vec![0; 3]);
        assert!(matches!(
            unpack_plane(&p, "creep"),
            Err(DecodeError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn unsupported_depth_is_fatal() {
        let p = plane(12, 2, 2, vec![0; 6]);
        assert!(matches!(
            unpack_plane(&p, "weird"),
            Err(DecodeError::UnsupportedDepth { bits_per_pixel: 12 })
        ));
    }

    #[test]
    fn zero_size_plane_decodes_to_zero_grid() {
        let spec = &screen_features()[2]; // creep, 1 bpp on the wire

        // A 1-bpp plane declared (0, 0): the layer exists in the schema but
        // this engine version never fills it in.
        let mut fl = herald_proto::FeatureLayerData::default();
        fl.renders.creep = Some(plane(1, 0, 0, Vec::new()));
        let obs = ObservationMsg {
            feature_layer_data: Some(fl),
            ..Default::default()
        };
        assert_eq!(spec.unpack(&obs, (4, 4)).unwrap(), vec![0; 16]);

        // A plane absent from the wire entirely decodes the same way.
        let obs = ObservationMsg {
            feature_layer_data: Some(Default::default()),
            ..Default::default()
        };
        assert_eq!(spec.unpack(&obs, (4, 4)).unwrap(), vec![0; 16]);
    }

    #[test]
    fn rgb_length_checked() {
        let p = plane(24, 2, 2, vec![0; 12]);
        assert_eq!(unpack_rgb(&p, "rgb_screen").unwrap().len(), 12);
        let p = plane(24, 2, 2, vec![0; 11]);
        assert!(unpack_rgb(&p, "rgb_screen").is_err());
    }

    #[test]
    fn catalog_shapes() {
        let screen = screen_features();
        let minimap = minimap_features();
        assert_eq!(screen.len(), 17);
        assert_eq!(minimap.len(), 7);
        assert!(screen.iter().enumerate().all(|(i, f)| f.index == i));
        let unit_type = screen.iter().find(|f| f.name == "unit_type").unwrap();
        assert_eq!(unit_type.scale, unit_type_scale());
        assert_eq!(unit_type.kind, FeatureKind::Categorical);
    }
}
