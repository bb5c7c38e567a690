use cgmath::{Point2, Vector2};
use rand::Rng;

use crate::config::FieldConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point2<f32>,
    pub velocity: Vector2<f32>,
    pub radius: f32,
}

impl Particle {
    /// Uniform position inside `width` x `height`, uniform velocity in
    /// `[-max_speed, max_speed)` per axis and uniform radius in
    /// `[min_radius, max_radius)`.
    pub fn sample(rng: &mut impl Rng, width: f32, height: f32, config: &FieldConfig) -> Self {
        let mut unit = || rng.gen_range(0.0f32..1.0);
        let speed = config.max_speed;
        Self {
            position: Point2::new(unit() * width, unit() * height),
            velocity: Vector2::new((unit() - 0.5) * 2.0 * speed, (unit() - 0.5) * 2.0 * speed),
            radius: config.min_radius + unit() * (config.max_radius - config.min_radius),
        }
    }

    /// Moves by one frame of velocity, then reverses each velocity component
    /// whose axis ended up outside `[0, dimension]`. Position is never
    /// clamped, so a particle may sit up to one step past the edge.
    pub fn step(&mut self, width: f32, height: f32) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            position: Point2::new(x, y),
            velocity: Vector2::new(vx, vy),
            radius: 2.0,
        }
    }

    #[test]
    fn test_samples_stay_in_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let p = Particle::sample(&mut rng, 640.0, 480.0, &config);
            assert!((0.0..=640.0).contains(&p.position.x));
            assert!((0.0..=480.0).contains(&p.position.y));
            assert!((-0.5..=0.5).contains(&p.velocity.x));
            assert!((-0.5..=0.5).contains(&p.velocity.y));
            assert!((1.0..3.0).contains(&p.radius), "radius {}", p.radius);
        }
    }

    #[test]
    fn test_inside_bounds_velocity_is_untouched() {
        let mut p = particle(50.0, 50.0, 0.5, -0.25);

        for _ in 0..20 {
            p.step(100.0, 100.0);
        }

        assert_eq!(p.velocity, Vector2::new(0.5, -0.25));
        assert_eq!(p.position, Point2::new(60.0, 45.0));
    }

    #[rstest]
    #[case(99.8, 50.0, 0.5, 0.0, -0.5, 0.0)] // right wall
    #[case(0.2, 50.0, -0.5, 0.0, 0.5, 0.0)] // left wall
    #[case(50.0, 99.9, 0.0, 0.25, 0.0, -0.25)] // bottom wall
    #[case(50.0, 0.1, 0.0, -0.25, 0.0, 0.25)] // top wall
    #[case(99.9, 0.1, 0.5, -0.5, -0.5, 0.5)] // corner flips both axes
    fn test_crossing_flips_velocity_once(
        #[case] x: f32,
        #[case] y: f32,
        #[case] vx: f32,
        #[case] vy: f32,
        #[case] expected_vx: f32,
        #[case] expected_vy: f32,
    ) {
        let mut p = particle(x, y, vx, vy);

        p.step(100.0, 100.0);
        assert_eq!(p.velocity, Vector2::new(expected_vx, expected_vy));

        // Next frame brings it back inside; no second flip.
        p.step(100.0, 100.0);
        assert_eq!(p.velocity, Vector2::new(expected_vx, expected_vy));
        assert!((0.0..=100.0).contains(&p.position.x));
        assert!((0.0..=100.0).contains(&p.position.y));
    }

    #[test]
    fn test_overshoot_is_not_clamped() {
        let mut p = particle(99.8, 50.0, 0.5, 0.0);
        p.step(100.0, 100.0);
        assert!(p.position.x > 100.0);
    }

    #[test]
    fn test_exact_edge_is_inside() {
        let mut p = particle(99.5, 50.0, 0.5, 0.0);
        p.step(100.0, 100.0);
        assert_eq!(p.position.x, 100.0);
        assert_eq!(p.velocity.x, 0.5);
    }
}
