//! Tunable parameters shared by the heightfield builder and the blend painter.

use serde::{Deserialize, Serialize};

use super::noise_field::NoiseConfig;
use super::shoreline::ShorelineConfig;
use super::smoothing::validate_sharpness;
use crate::core::{Error, Result};

/// Which parameter drives the intensity of the moss noise layer.
///
/// Historically moss was drawn with the grass amount, so `mossAmount` had no
/// effect. That remains the default; `MossAmount` uses the dedicated value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MossIntensity {
    #[default]
    GrassAmount,
    MossAmount,
}

/// Parameters controlling terrain and ground-cover generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub shore_depth: u8,          // Shore band width, percent of each dimension
    pub max_terrain_height: f32,  // Noise intensity ceiling
    pub min_terrain_height: f32,  // Noise floor
    pub terrain_scale: f32,       // Heightfield noise frequency
    pub terrain_sharpness: f32,   // 1 = no smoothing, lower = blurrier
    pub texture_noise_scale: f32, // Blend-layer noise frequency
    pub grass_amount: f32,
    pub dirt_amount: f32,
    pub moss_amount: f32,
    pub sand_height: f32,         // Heights below this fade into sand
    pub moss_intensity: MossIntensity,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            shore_depth: 5,
            max_terrain_height: 0.4,
            min_terrain_height: 0.25,
            terrain_scale: 10.0,
            terrain_sharpness: 1.0,
            texture_noise_scale: 10.0,
            grass_amount: 1.0,
            dirt_amount: 1.0,
            moss_amount: 1.0,
            sand_height: 0.2,
            moss_intensity: MossIntensity::GrassAmount,
        }
    }
}

fn check_unit(name: &str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid(format!("{name} must be within [0, 1] (got {value})")));
    }
    Ok(())
}

fn check_scale(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(format!("{name} must be positive and finite (got {value})")));
    }
    Ok(())
}

impl TerrainParams {
    /// Reject parameters that would produce NaNs or out-of-range output.
    pub fn validate(&self) -> Result<()> {
        self.shoreline().validate()?;
        check_unit("max_terrain_height", self.max_terrain_height)?;
        check_unit("min_terrain_height", self.min_terrain_height)?;
        check_scale("terrain_scale", self.terrain_scale)?;
        validate_sharpness(self.terrain_sharpness)?;
        check_scale("texture_noise_scale", self.texture_noise_scale)?;
        check_unit("grass_amount", self.grass_amount)?;
        check_unit("dirt_amount", self.dirt_amount)?;
        check_unit("moss_amount", self.moss_amount)?;
        check_unit("sand_height", self.sand_height)?;

        if self.min_terrain_height > self.max_terrain_height {
            log::warn!(
                "min_terrain_height {} exceeds max_terrain_height {}; terrain will be flat before falloff",
                self.min_terrain_height,
                self.max_terrain_height
            );
        }
        Ok(())
    }

    /// Noise config for the heightfield draw.
    pub fn height_noise(&self, seed: u32) -> NoiseConfig {
        NoiseConfig {
            scale: self.terrain_scale,
            seed,
            floor: self.min_terrain_height,
            intensity: self.max_terrain_height,
        }
    }

    pub fn shoreline(&self) -> ShorelineConfig {
        ShorelineConfig {
            depth_percent: self.shore_depth,
        }
    }

    /// Intensity actually used for the moss layer.
    pub fn effective_moss_amount(&self) -> f32 {
        match self.moss_intensity {
            MossIntensity::GrassAmount => self.grass_amount,
            MossIntensity::MossAmount => self.moss_amount,
        }
    }

    /// Noise config for a blend layer of the given intensity.
    pub fn blend_noise(&self, seed: u32, intensity: f32) -> NoiseConfig {
        NoiseConfig {
            scale: self.texture_noise_scale,
            seed,
            floor: 0.0,
            intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_params_default() {
        let params = TerrainParams::default();
        assert_eq!(params.shore_depth, 5);
        assert_eq!(params.max_terrain_height, 0.4);
        assert_eq!(params.min_terrain_height, 0.25);
        assert_eq!(params.terrain_scale, 10.0);
        assert_eq!(params.terrain_sharpness, 1.0);
        assert_eq!(params.sand_height, 0.2);
        assert_eq!(params.moss_intensity, MossIntensity::GrassAmount);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_moss_intensity_source() {
        let params = TerrainParams {
            grass_amount: 0.8,
            moss_amount: 0.1,
            ..Default::default()
        };
        assert_eq!(params.effective_moss_amount(), 0.8);

        let fixed = TerrainParams {
            moss_intensity: MossIntensity::MossAmount,
            ..params
        };
        assert_eq!(fixed.effective_moss_amount(), 0.1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            TerrainParams { shore_depth: 101, ..Default::default() },
            TerrainParams { terrain_scale: 0.0, ..Default::default() },
            TerrainParams { texture_noise_scale: -2.0, ..Default::default() },
            TerrainParams { terrain_sharpness: 0.0, ..Default::default() },
            TerrainParams { max_terrain_height: 1.5, ..Default::default() },
            TerrainParams { grass_amount: f32::NAN, ..Default::default() },
            TerrainParams { sand_height: -0.1, ..Default::default() },
        ];
        for params in cases {
            let err = params.validate().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "{params:?} should be rejected");
        }
    }

    #[test]
    fn test_height_noise_maps_params() {
        let params = TerrainParams::default();
        let cfg = params.height_noise(9);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.floor, params.min_terrain_height);
        assert_eq!(cfg.intensity, params.max_terrain_height);
        assert_eq!(cfg.scale, params.terrain_scale);
    }

    #[test]
    fn test_params_deserialize_partial_json() {
        let params: TerrainParams =
            serde_json::from_str(r#"{ "shore_depth": 25, "moss_intensity": "moss_amount" }"#).unwrap();
        assert_eq!(params.shore_depth, 25);
        assert_eq!(params.moss_intensity, MossIntensity::MossAmount);
        assert_eq!(params.terrain_scale, 10.0);
    }
}
