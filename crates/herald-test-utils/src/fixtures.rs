//! Builders for observation frames and their pieces.

use herald_proto::{
    AvailableAbility, FeatureLayerData, ImagePlane, MinimapPlanes, ObservationFrame,
    ObservationMsg, PlayerCommon, RawData, RawPlayer, RawUnit, ScreenPlanes, WorldPoint,
};

/// An image plane with explicit payload bytes.
pub fn plane(bits_per_pixel: u32, width: u32, height: u32, data: Vec<u8>) -> ImagePlane {
    ImagePlane {
        bits_per_pixel,
        width,
        height,
        data,
    }
}

/// A well-formed plane of the given depth filled with one value.
///
/// For 1 bpp the value's low bit is replicated; 16/32 bpp are
/// little-endian. The payload length is always exactly what the declared
/// size requires, pad bits included.
pub fn solid_plane(bits_per_pixel: u32, width: u32, height: u32, value: u32) -> ImagePlane {
    let pixels = (width * height) as usize;
    let data = match bits_per_pixel {
        1 => {
            let byte = if value & 1 == 1 { 0xffu8 } else { 0 };
            vec![byte; pixels.div_ceil(8)]
        }
        8 => vec![value as u8; pixels],
        16 => (value as u16)
            .to_le_bytes()
            .iter()
            .copied()
            .cycle()
            .take(pixels * 2)
            .collect(),
        32 => value
            .to_le_bytes()
            .iter()
            .copied()
            .cycle()
            .take(pixels * 4)
            .collect(),
        24 => vec![value as u8; pixels * 3],
        other => panic!("no fixture for {other} bpp"),
    };
    plane(bits_per_pixel, width, height, data)
}

/// One usable ability report.
pub fn ability(ability_id: u32, requires_point: bool) -> AvailableAbility {
    AvailableAbility {
        ability_id,
        requires_point,
    }
}

/// A minimal living unit at a world position.
pub fn raw_unit(tag: u64, unit_type: u32, x: f32, y: f32) -> RawUnit {
    RawUnit {
        tag,
        unit_type,
        pos: WorldPoint::new(x, y),
        display_type: 1, // Visible
        alliance: 1,     // Self
        owner: 1,
        health: 45.0,
        health_max: 45.0,
        is_on_screen: true,
        ..Default::default()
    }
}

/// A frame with only player scalars set.
pub fn frame_with_player(player: PlayerCommon) -> ObservationFrame {
    ObservationFrame {
        observation: ObservationMsg {
            player_common: player,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A frame carrying complete, well-formed feature-layer plane sets: every
/// screen and minimap layer present at 8 bpp, zero-filled.
pub fn feature_frame(screen: (u32, u32), minimap: (u32, u32)) -> ObservationFrame {
    let mut builder = FrameBuilder::new();
    builder.msg.feature_layer_data = Some(FeatureLayerData {
        renders: full_screen_planes(screen),
        minimap_renders: full_minimap_planes(minimap),
    });
    builder.build()
}

fn full_screen_planes(size: (u32, u32)) -> ScreenPlanes {
    let p = || Some(solid_plane(8, size.0, size.1, 0));
    ScreenPlanes {
        height_map: p(),
        visibility_map: p(),
        creep: p(),
        power: p(),
        player_id: p(),
        player_relative: p(),
        unit_type: p(),
        selected: p(),
        unit_hit_points: p(),
        unit_hit_points_ratio: p(),
        unit_energy: p(),
        unit_energy_ratio: p(),
        unit_shields: p(),
        unit_shields_ratio: p(),
        unit_density: p(),
        unit_density_aa: p(),
        effects: p(),
    }
}

fn full_minimap_planes(size: (u32, u32)) -> MinimapPlanes {
    let p = || Some(solid_plane(8, size.0, size.1, 0));
    MinimapPlanes {
        height_map: p(),
        visibility_map: p(),
        creep: p(),
        camera: p(),
        player_id: p(),
        player_relative: p(),
        selected: p(),
    }
}

/// Incremental frame construction for tests that need several pieces.
#[derive(Default)]
pub struct FrameBuilder {
    /// The observation message being assembled.
    pub msg: ObservationMsg,
}

impl FrameBuilder {
    /// Start from an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set player scalars.
    pub fn player(mut self, player: PlayerCommon) -> Self {
        self.msg.player_common = player;
        self
    }

    /// Add usable abilities.
    pub fn abilities(mut self, abilities: Vec<AvailableAbility>) -> Self {
        self.msg.abilities = abilities;
        self
    }

    /// Add raw units (and raw camera state at the given world center).
    pub fn raw_units(mut self, units: Vec<RawUnit>, camera: (f32, f32)) -> Self {
        self.msg.raw_data = Some(RawData {
            player: RawPlayer {
                camera: WorldPoint::new(camera.0, camera.1),
            },
            units,
        });
        self
    }

    /// Finish into a frame.
    pub fn build(self) -> ObservationFrame {
        ObservationFrame {
            observation: self.msg,
            ..Default::default()
        }
    }
}
