//! Catalog-build configuration.
//!
//! Everything that fixes the shape of observations and the bounds of action
//! arguments is decided here, once, before the first step: pixel
//! resolutions, the action space, the camera width, and which optional
//! channels are on. The [`Translator`](crate::Translator) validates a
//! config at construction and never re-reads it afterwards.

use herald_actions::ActionSpace;
use herald_core::ConfigError;

/// Screen and minimap pixel resolutions.
///
/// Both must be positive and the screen must be at least as large as the
/// minimap in both dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Screen size `(width, height)` in pixels.
    pub screen: (u32, u32),
    /// Minimap size `(width, height)` in pixels.
    pub minimap: (u32, u32),
}

impl Dimensions {
    /// Validate and build a dimensions pair.
    pub fn new(screen: (u32, u32), minimap: (u32, u32)) -> Result<Self, ConfigError> {
        if screen.0 == 0 || screen.1 == 0 || minimap.0 == 0 || minimap.1 == 0 {
            return Err(ConfigError::InvalidDimensions {
                reason: format!("sizes must be positive, got screen {screen:?}, minimap {minimap:?}"),
            });
        }
        if screen.0 < minimap.0 || screen.1 < minimap.1 {
            return Err(ConfigError::InvalidDimensions {
                reason: format!("screen {screen:?} can't be smaller than the minimap {minimap:?}"),
            });
        }
        Ok(Self { screen, minimap })
    }

    /// A square screen and minimap.
    pub fn square(screen: u32, minimap: u32) -> Result<Self, ConfigError> {
        Self::new((screen, screen), (minimap, minimap))
    }
}

/// The agent-facing interface configuration.
///
/// Immutable once handed to a translator. Rebuild the translator to change
/// any of it (a new episode with a different format).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceConfig {
    /// Feature-layer resolutions, if the feature surface is on.
    pub feature: Option<Dimensions>,
    /// RGB render resolutions, if the render surface is on.
    pub rgb: Option<Dimensions>,
    /// Which space actions are expressed in. `None` infers it from the
    /// surfaces, which only works when exactly one surface is on.
    pub action_space: Option<ActionSpace>,
    /// Width of the camera in world units; sets the screen transform's
    /// world-units-per-pixel.
    pub camera_width_world_units: f64,
    /// Include the per-unit list with screen-projected positions.
    pub use_feature_units: bool,
    /// Include the raw per-unit list with world-grid positions.
    pub use_raw_units: bool,
    /// Resolution of the world grid used for raw positions and raw point
    /// arguments. `None` falls back to the map size.
    pub raw_resolution: Option<(u32, u32)>,
    /// Hide specific action variants behind their general form.
    pub hide_specific_actions: bool,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            feature: None,
            rgb: None,
            action_space: None,
            camera_width_world_units: 24.0,
            use_feature_units: false,
            use_raw_units: false,
            raw_resolution: None,
            hide_specific_actions: true,
        }
    }
}

impl InterfaceConfig {
    /// Resolve and validate the action space against the enabled surfaces.
    pub fn resolve_action_space(&self) -> Result<ActionSpace, ConfigError> {
        match self.action_space {
            Some(ActionSpace::Features) if self.feature.is_none() => {
                Err(ConfigError::ActionSpaceMismatch {
                    reason: "feature action space without feature dimensions".to_string(),
                })
            }
            Some(ActionSpace::Rgb) if self.rgb.is_none() => {
                Err(ConfigError::ActionSpaceMismatch {
                    reason: "rgb action space without rgb dimensions".to_string(),
                })
            }
            Some(space) => Ok(space),
            None => match (&self.feature, &self.rgb) {
                (Some(_), None) => Ok(ActionSpace::Features),
                (None, Some(_)) => Ok(ActionSpace::Rgb),
                (Some(_), Some(_)) => Err(ConfigError::ActionSpaceMismatch {
                    reason: "both surfaces are on; specify the action space".to_string(),
                }),
                (None, None) => Err(ConfigError::ActionSpaceMismatch {
                    reason: "no surface is on; set feature or rgb dimensions, or pick \
                             the raw action space"
                        .to_string(),
                }),
            },
        }
    }

    /// The resolutions action arguments are bounded by: the pixel surface
    /// actions are expressed in, or `None` for the raw space.
    pub fn action_dimensions(&self) -> Option<Dimensions> {
        match self.action_space {
            Some(ActionSpace::Rgb) => self.rgb,
            Some(ActionSpace::Raw) => None,
            _ => self.feature.or(self.rgb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_must_cover_minimap() {
        assert!(Dimensions::new((84, 84), (64, 64)).is_ok());
        assert!(matches!(
            Dimensions::new((32, 84), (64, 64)),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Dimensions::new((84, 84), (0, 64)),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn action_space_inference() {
        let mut cfg = InterfaceConfig {
            feature: Some(Dimensions::square(84, 64).unwrap()),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_action_space().unwrap(), ActionSpace::Features);

        cfg.rgb = Some(Dimensions::square(128, 64).unwrap());
        assert!(cfg.resolve_action_space().is_err());

        cfg.action_space = Some(ActionSpace::Rgb);
        assert_eq!(cfg.resolve_action_space().unwrap(), ActionSpace::Rgb);
    }

    #[test]
    fn raw_space_needs_no_surfaces() {
        let cfg = InterfaceConfig {
            action_space: Some(ActionSpace::Raw),
            use_raw_units: true,
            ..Default::default()
        };
        assert_eq!(cfg.resolve_action_space().unwrap(), ActionSpace::Raw);
        assert_eq!(cfg.action_dimensions(), None);
    }

    #[test]
    fn mismatched_space_rejected() {
        let cfg = InterfaceConfig {
            action_space: Some(ActionSpace::Features),
            ..Default::default()
        };
        assert!(matches!(
            cfg.resolve_action_space(),
            Err(ConfigError::ActionSpaceMismatch { .. })
        ));
    }
}
