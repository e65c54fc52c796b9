// Simple particle struct to keep track of individual position, velocity,
// glow radius, and hue

use rand::Rng;
use vecmath::Vector2;

/// How far past the viewport a particle may drift before it wraps around.
pub const EDGE_MARGIN: f64 = 10.0;

pub const RADIUS_MIN: f64 = 0.6;
pub const RADIUS_MAX: f64 = 2.5;
pub const VEL_X_MAX: f64 = 0.2;
pub const VEL_Y_MAX: f64 = 0.1;
pub const HUE_MIN: f64 = 160.0;
pub const HUE_MAX: f64 = 280.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    /// Sampled with the rest of the palette; the glow gradient does not
    /// read it yet.
    pub hue: f64,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, hue: f64) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            hue,
        }
    }

    /// Sample a fresh particle uniformly over a `width` by `height` viewport.
    pub fn sample<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        Particle::new(
            [
                sample_range(rng, 0.0, width),
                sample_range(rng, 0.0, height),
            ],
            [
                sample_range(rng, -VEL_X_MAX, VEL_X_MAX),
                sample_range(rng, -VEL_Y_MAX, VEL_Y_MAX),
            ],
            sample_range(rng, RADIUS_MIN, RADIUS_MAX),
            sample_range(rng, HUE_MIN, HUE_MAX),
        )
    }

    pub fn advance(&mut self) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
    }

    /// Toroidal wraparound: a coordinate that drifts more than `EDGE_MARGIN`
    /// past one edge snaps to `EDGE_MARGIN` past the opposite edge.
    pub fn wrap(&mut self, width: f64, height: f64) {
        if self.pos[0] < -EDGE_MARGIN {
            self.pos[0] = width + EDGE_MARGIN;
        }
        if self.pos[0] > width + EDGE_MARGIN {
            self.pos[0] = -EDGE_MARGIN;
        }
        if self.pos[1] < -EDGE_MARGIN {
            self.pos[1] = height + EDGE_MARGIN;
        }
        if self.pos[1] > height + EDGE_MARGIN {
            self.pos[1] = -EDGE_MARGIN;
        }
    }
}

pub fn sample_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn advance_adds_velocity() {
        let mut p = Particle::new([5.0, 6.0], [0.25, -0.5], 1.0, 200.0);
        p.advance();
        assert_eq!(p.pos, [5.25, 5.5]);
        p.advance();
        assert_eq!(p.pos, [5.5, 5.0]);
    }

    #[test]
    fn wrap_snaps_to_opposite_edge() {
        let (w, h) = (640.0, 480.0);

        let mut p = Particle::new([w + EDGE_MARGIN + 0.01, 10.0], [0.2, 0.0], 1.0, 200.0);
        p.wrap(w, h);
        assert_eq!(p.pos[0], -EDGE_MARGIN);

        let mut p = Particle::new([-EDGE_MARGIN - 0.01, 10.0], [-0.2, 0.0], 1.0, 200.0);
        p.wrap(w, h);
        assert_eq!(p.pos[0], w + EDGE_MARGIN);

        let mut p = Particle::new([10.0, h + EDGE_MARGIN + 0.01], [0.0, 0.1], 1.0, 200.0);
        p.wrap(w, h);
        assert_eq!(p.pos[1], -EDGE_MARGIN);

        let mut p = Particle::new([10.0, -EDGE_MARGIN - 0.01], [0.0, -0.1], 1.0, 200.0);
        p.wrap(w, h);
        assert_eq!(p.pos[1], h + EDGE_MARGIN);
    }

    #[test]
    fn wrap_leaves_in_bounds_particles_alone() {
        let mut p = Particle::new([100.0, 100.0], [0.1, 0.1], 1.0, 200.0);
        let before = p;
        p.wrap(640.0, 480.0);
        assert_eq!(p, before);
    }

    #[test]
    fn sampled_attributes_stay_in_range() {
        let (w, h) = (1366.0, 768.0);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..200 {
                let p = Particle::sample(&mut rng, w, h);
                assert!(p.pos[0] >= 0.0 && p.pos[0] < w);
                assert!(p.pos[1] >= 0.0 && p.pos[1] < h);
                assert!(p.radius >= RADIUS_MIN && p.radius < RADIUS_MAX);
                assert!(p.vel[0] >= -VEL_X_MAX && p.vel[0] < VEL_X_MAX);
                assert!(p.vel[1] >= -VEL_Y_MAX && p.vel[1] < VEL_Y_MAX);
                assert!(p.hue >= HUE_MIN && p.hue < HUE_MAX);
            }
        }
    }
}
