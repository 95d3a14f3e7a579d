use crate::cli::CliArgs;
use crate::parry::bounding_volume::Aabb;
use bevy::prelude::*;
use na::point;

/// Gameplay parameters, resolved once at startup.
///
/// The anchor is recomputed from the canvas size at startup only; it never
/// moves afterwards.
#[derive(Copy, Clone, Debug, Resource)]
pub struct SlingConfig {
    pub width: f32,
    pub height: f32,
    /// Rest position the projectile is tethered to, in world space. Doubles
    /// as the spawn point.
    pub anchor: Vec2,
    pub projectile_radius: f32,
    pub projectile_restitution: f32,
    /// Picking padding added around the projectile bounds.
    pub pick_margin: f32,
    /// Scale applied to the draw distance on release.
    pub impulse_scale: f32,
    /// Settle delay between tether removal and the launch impulse, in seconds.
    pub launch_delay: f32,
    /// Distance below the viewport bottom before a lost projectile resets.
    pub reset_margin: f32,
    pub tether_stiffness: f32,
    pub tether_damping: f32,
    /// Downward gravity, in world units per second squared.
    pub gravity: f32,
}

impl Default for SlingConfig {
    fn default() -> Self {
        let (width, height) = (800.0, 600.0);
        Self {
            width,
            height,
            anchor: anchor_for(width, height),
            projectile_radius: 20.0,
            projectile_restitution: 0.5,
            pick_margin: 4.0,
            impulse_scale: 0.1,
            launch_delay: 0.05,
            reset_margin: 100.0,
            tether_stiffness: 100.0,
            tether_damping: 10.0,
            gravity: 981.0,
        }
    }
}

impl SlingConfig {
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            width: args.width,
            height: args.height,
            anchor: anchor_for(args.width, args.height),
            impulse_scale: args.impulse_scale,
            reset_margin: args.reset_margin,
            ..Self::default()
        }
    }

    /// Maps screen coordinates of the canvas (y down, origin top-left) to
    /// world space (y up, origin at the camera).
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }

    /// World-space y below which a launched projectile is lost.
    pub fn fall_line(&self) -> f32 {
        -(self.height / 2.0 + self.reset_margin)
    }

    /// Strict: exactly on the line is still in play.
    pub fn out_of_bounds(&self, y: f32) -> bool {
        y < self.fall_line()
    }

    /// Viewport extended down to the fall line.
    pub fn world_bounds(&self) -> Aabb {
        let mins = point![-self.width / 2.0, self.fall_line()];
        let maxs = point![self.width / 2.0, self.height / 2.0];
        Aabb::new(mins, maxs)
    }
}

/// The classic sling position, proportional to the canvas size.
fn anchor_for(width: f32, height: f32) -> Vec2 {
    Vec2::new(
        width * (150.0 / 800.0) - width / 2.0,
        height / 2.0 - height * (450.0 / 600.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn screen_to_world_maps_the_classic_sling_point() {
        let config = SlingConfig::default();
        let world = config.screen_to_world(Vec2::new(150.0, 450.0));
        assert_relative_eq!(world.x, -250.0);
        assert_relative_eq!(world.y, -150.0);
        assert_eq!(world, config.anchor);
    }

    #[test]
    fn out_of_bounds_is_strict() {
        // 701 vs. 700 in screen space of the default 600-high canvas.
        let config = SlingConfig::default();
        assert!(config.out_of_bounds(-401.0));
        assert!(!config.out_of_bounds(-400.0));
        assert!(!config.out_of_bounds(0.0));
    }

    #[test]
    fn anchor_scales_with_the_canvas() {
        let anchor = anchor_for(1600.0, 1200.0);
        assert_relative_eq!(anchor.x, -500.0);
        assert_relative_eq!(anchor.y, -300.0);
    }

    #[test]
    fn world_bounds_reach_the_fall_line() {
        let config = SlingConfig::default();
        let bounds = config.world_bounds();
        assert_relative_eq!(bounds.mins.y, config.fall_line());
        assert_relative_eq!(bounds.maxs.y, 300.0);
        assert_relative_eq!(bounds.extents().x, 800.0);
    }
}
