//! Host-supplied settings, deserialised from JSON and validated once at
//! startup.

use serde::{Deserialize, Serialize};

use crate::brush::{self, Brush};
use crate::error::SimError;
use crate::material::Material;

/// Reject grids the engine cannot address: zero-sized, wider or taller than
/// `i32` coordinates reach, or too large for an RGBA8 buffer.
///
/// # Errors
///
/// [`SimError::InvalidConfig`] naming the rejected size.
pub fn check_grid_size(width: usize, height: usize) -> Result<(), SimError> {
    let addressable = i32::try_from(width).is_ok() && i32::try_from(height).is_ok();
    let buffer = width.checked_mul(height).and_then(|n| n.checked_mul(4));
    if width == 0 || height == 0 || !addressable || buffer.is_none() {
        return Err(SimError::InvalidConfig(format!(
            "grid {width}x{height} is out of range"
        )));
    }
    Ok(())
}

/// Raw settings as the host sends them. Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Play-field width in pixels.
    pub field_width: u32,
    /// Play-field height in pixels.
    pub field_height: u32,
    /// Edge length of one cell in pixels.
    pub tile_size: u32,
    pub brush_size: u8,
    pub brush_pressure: f64,
    /// Catalog name of the initially selected material.
    pub material: String,
    /// Fixed seed for reproducible runs; the host's seed is used otherwise.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: 600,
            field_height: 400,
            tile_size: 3,
            brush_size: brush::DEFAULT_SIZE,
            brush_pressure: 1.0,
            material: Material::Sand.name().to_owned(),
            seed: None,
        }
    }
}

/// Validated settings with derived grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub grid_width: usize,
    pub grid_height: usize,
    pub tile_size: u32,
    pub brush: Brush,
    pub material: Material,
    pub seed: Option<u64>,
}

impl SimConfig {
    /// # Errors
    ///
    /// [`SimError::Json`] if `json` is malformed or has unknown fields.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check ranges and derive the grid size. Non-integer divisions truncate.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidConfig`] for a zero tile size, a field smaller than
    /// one tile, a grid [`check_grid_size`] rejects or brush settings out of
    /// range, and
    /// [`SimError::InvalidMaterialKind`] for an unknown material.
    pub fn validate(&self) -> Result<Settings, SimError> {
        if self.tile_size == 0 {
            return Err(SimError::InvalidConfig("tile size must be positive".into()));
        }
        let grid_width = (self.field_width / self.tile_size) as usize;
        let grid_height = (self.field_height / self.tile_size) as usize;
        if grid_width == 0 || grid_height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "field {}x{} is smaller than one {}px tile",
                self.field_width, self.field_height, self.tile_size
            )));
        }
        check_grid_size(grid_width, grid_height)?;
        let brush = Brush::new(self.brush_size, self.brush_pressure)?;
        let material = self.material.parse()?;
        Ok(Settings {
            grid_width,
            grid_height,
            tile_size: self.tile_size,
            brush,
            material,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_derive_a_200_by_133_grid() {
        let settings = SimConfig::default().validate().unwrap();
        assert_eq!(settings.grid_width, 200);
        assert_eq!(settings.grid_height, 133);
        assert_eq!(settings.material, Material::Sand);
        assert_eq!(settings.brush, Brush::default());
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = SimConfig::from_json(r#"{"tile_size": 4, "material": "oil", "seed": 42}"#)
            .unwrap();
        let settings = config.validate().unwrap();
        assert_eq!(settings.grid_width, 150);
        assert_eq!(settings.grid_height, 100);
        assert_eq!(settings.material, Material::Oil);
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SimConfig::from_json(r#"{"gravity": 9.8}"#).unwrap_err();
        assert!(matches!(err, SimError::Json(_)));
    }

    #[test]
    fn unknown_material_is_reported() {
        let config = SimConfig {
            material: "lava".into(),
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidMaterialKind(ref k)) if k == "lava"
        ));
    }

    #[test]
    fn degenerate_fields_are_rejected() {
        let zero_tile = SimConfig {
            tile_size: 0,
            ..SimConfig::default()
        };
        assert!(matches!(zero_tile.validate(), Err(SimError::InvalidConfig(_))));

        let tiny = SimConfig {
            field_width: 2,
            ..SimConfig::default()
        };
        assert!(matches!(tiny.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn grid_size_limits() {
        assert!(check_grid_size(200, 133).is_ok());
        assert!(check_grid_size(0, 10).is_err());
        assert!(check_grid_size(10, 0).is_err());
        assert!(check_grid_size(i32::MAX as usize + 1, 1).is_err());
        assert!(check_grid_size(1, i32::MAX as usize + 1).is_err());
        assert!(check_grid_size(usize::MAX / 2, usize::MAX / 2).is_err());
    }

    #[test]
    fn brush_bounds_are_enforced() {
        let big = SimConfig {
            brush_size: 11,
            ..SimConfig::default()
        };
        assert!(big.validate().is_err());
        let light = SimConfig {
            brush_pressure: 0.0,
            ..SimConfig::default()
        };
        assert!(light.validate().is_err());
    }

    proptest! {
        #[test]
        fn prop_grid_size_truncates(
            field_width in 1u32..2000,
            field_height in 1u32..2000,
            tile_size in 1u32..16,
        ) {
            let config = SimConfig { field_width, field_height, tile_size, ..SimConfig::default() };
            match config.validate() {
                Ok(s) => {
                    prop_assert_eq!(s.grid_width, (field_width / tile_size) as usize);
                    prop_assert_eq!(s.grid_height, (field_height / tile_size) as usize);
                }
                Err(_) => prop_assert!(field_width < tile_size || field_height < tile_size),
            }
        }
    }
}
