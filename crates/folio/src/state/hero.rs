//! Hero backdrop state: a slowly rotating wireframe sphere over a starfield

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::time::Duration;

/// Number of stars in the backdrop
pub const STAR_COUNT: usize = 120;

/// Sphere rotation speed in radians per second
pub const ROTATION_SPEED: f64 = 0.35;

/// A star, positioned in unit coordinates (0..1 on both axes)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Twinkle phase offset in radians
    pub phase: f64,
}

impl Star {
    /// Brightness in 0..=1 at time `t` seconds
    pub fn brightness(&self, t: f64) -> f64 {
        0.5 + 0.5 * (t * 1.7 + self.phase).sin()
    }
}

#[derive(Debug, Clone)]
pub struct HeroState {
    pub stars: Vec<Star>,
    /// Sphere rotation around the vertical axis, in radians
    pub angle: f64,
    /// Animation time
    pub elapsed: Duration,
}

impl HeroState {
    pub fn with_rng(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(0.0..1.0),
                phase: rng.random_range(0.0..TAU),
            })
            .collect();
        Self {
            stars,
            angle: 0.0,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the rotation; the angle stays within one turn
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
        self.angle = (self.angle + dt.as_secs_f64() * ROTATION_SPEED) % TAU;
    }
}

impl Default for HeroState {
    fn default() -> Self {
        Self::with_rng(&mut StdRng::from_os_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_in_unit_square() {
        let hero = HeroState::with_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(hero.stars.len(), STAR_COUNT);
        assert!(hero
            .stars
            .iter()
            .all(|s| (0.0..1.0).contains(&s.x) && (0.0..1.0).contains(&s.y)));
    }

    #[test]
    fn test_angle_wraps() {
        let mut hero = HeroState::with_rng(&mut StdRng::seed_from_u64(7));
        hero.advance(Duration::from_secs(1));
        assert!((hero.angle - ROTATION_SPEED).abs() < 1e-9);
        hero.advance(Duration::from_secs(60));
        assert!(hero.angle < TAU);
        assert_eq!(hero.elapsed, Duration::from_secs(61));
    }

    #[test]
    fn test_brightness_range() {
        let star = Star {
            x: 0.5,
            y: 0.5,
            phase: 1.0,
        };
        for i in 0..100 {
            let b = star.brightness(i as f64 * 0.1);
            assert!((0.0..=1.0).contains(&b));
        }
    }
}
