//! Tunables for a game session. Defaults reproduce the classroom build: a
//! 1000x600 canvas, a 5 second countdown and one minute of play.

use crate::error::{GameError, Result};

/// Point deltas applied by the scorer. Penalties are magnitudes; the score is
/// floored at zero when they are subtracted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Points {
    pub correct: u32,
    pub wrong_zone: u32,
    pub unclassified: u32,
    pub missed: u32,
}

impl Default for Points {
    fn default() -> Self {
        Self {
            correct: 10,
            wrong_zone: 5,
            unclassified: 2,
            missed: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub countdown_secs: u32,
    pub play_secs: u32,
    pub pickup_radius: f64,
    pub release_radius: f64,
    pub fall_speed_min: f64,
    pub fall_speed_max: f64,
    /// Horizontal distance from either canvas edge a word may spawn at.
    pub spawn_margin: f64,
    pub spawn_y: f64,
    pub feedback_duration_ms: f64,
    pub zone_height: f64,
    pub zone_bottom_margin: f64,
    pub zone_inset: f64,
    pub zone_gap: f64,
    /// Mirror incoming pose x coordinates. Leave off when the pose model
    /// already reports flipped coordinates.
    pub mirror_pose_x: bool,
    pub points: Points,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1000.0,
            canvas_height: 600.0,
            countdown_secs: 5,
            play_secs: 60,
            pickup_radius: 30.0,
            release_radius: 50.0,
            fall_speed_min: 0.8,
            fall_speed_max: 2.0,
            spawn_margin: 50.0,
            spawn_y: -20.0,
            feedback_duration_ms: 1000.0,
            zone_height: 100.0,
            zone_bottom_margin: 20.0,
            zone_inset: 10.0,
            zone_gap: 20.0,
            mirror_pose_x: false,
            points: Points::default(),
        }
    }
}

impl GameConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(GameError::InvalidConfig(msg.to_string()));
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return invalid("canvas dimensions must be positive");
        }
        if !(self.fall_speed_min > 0.0) || self.fall_speed_min > self.fall_speed_max {
            return invalid("fall speed range must be positive and min <= max");
        }
        if self.spawn_margin < 0.0 || self.spawn_margin * 2.0 > self.canvas_width {
            return invalid("spawn margin does not fit the canvas width");
        }
        if self.pickup_radius <= 0.0 || self.release_radius < self.pickup_radius {
            return invalid("release radius must be at least the pickup radius");
        }
        if self.play_secs == 0 {
            return invalid("play time must be non-zero");
        }
        if self.zone_height <= 0.0 || self.zone_bottom_margin < 0.0 {
            return invalid("zone height must be positive and bottom margin non-negative");
        }
        if self.zone_gap < 0.0 || self.zone_inset < 0.0 || self.zone_inset > self.zone_gap {
            return invalid("zone gap and inset must be non-negative with inset <= gap");
        }
        if self.zone_height + self.zone_bottom_margin >= self.canvas_height {
            return invalid("zones do not fit the canvas height");
        }
        if self.zone_gap >= self.canvas_width / 3.0 {
            return invalid("zone gap leaves no room for zones");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_speed_range_is_rejected() {
        let cfg = GameConfig {
            fall_speed_min: 3.0,
            fall_speed_max: 1.0,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn release_radius_below_pickup_is_rejected() {
        let cfg = GameConfig {
            release_radius: 10.0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn oversized_spawn_margin_is_rejected() {
        let cfg = GameConfig {
            spawn_margin: 600.0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_zone_gap_is_rejected() {
        let cfg = GameConfig {
            zone_gap: -60.0,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn negative_zone_inset_is_rejected() {
        let cfg = GameConfig {
            zone_inset: -5.0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zone_inset_wider_than_gap_is_rejected() {
        let cfg = GameConfig {
            zone_inset: 30.0,
            zone_gap: 20.0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn flat_zones_are_rejected() {
        let cfg = GameConfig {
            zone_height: 0.0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn accepted_layouts_keep_zones_apart_and_on_canvas() {
        use crate::game::zones::layout_zones;
        for (gap, inset) in [(0.0, 0.0), (20.0, 10.0), (20.0, 20.0), (100.0, 0.0)] {
            let cfg = GameConfig {
                zone_gap: gap,
                zone_inset: inset,
                ..GameConfig::default()
            };
            assert!(cfg.validate().is_ok(), "gap={gap} inset={inset}");
            let zones = layout_zones(&cfg);
            for pair in zones.windows(2) {
                assert!(pair[0].rect.x + pair[0].rect.w <= pair[1].rect.x);
            }
            let last = zones[2].rect;
            assert!(zones[0].rect.x >= 0.0);
            assert!(last.x + last.w <= cfg.canvas_width + 1e-9);
        }
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_overrides_selected_fields() {
        let cfg = GameConfig::from_json(r#"{"play_secs": 30, "points": {"correct": 20}}"#).unwrap();
        assert_eq!(cfg.play_secs, 30);
        assert_eq!(cfg.points.correct, 20);
        assert_eq!(cfg.points.wrong_zone, 5);
        assert_eq!(cfg.canvas_width, 1000.0);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_json("{not json"),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_that_fails_validation_is_rejected() {
        assert!(matches!(
            GameConfig::from_json(r#"{"play_secs": 0}"#),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
