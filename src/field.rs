// The particle field itself: owns the particle set and the wrap bounds.
// Pure data, no DOM types, so it builds and tests natively.

use crate::particle::Particle;
use rand::Rng;

/// One particle per this many square pixels of viewport.
pub const AREA_PER_PARTICLE: f64 = 80_000.0;
/// Floor on the particle count so small viewports still get a visible field.
pub const BASE_COUNT: usize = 20;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Build a field sized to the viewport, sampling every particle from
    /// `rng`. The set is created once and lives as long as the field.
    pub fn new<R: Rng>(width: f64, height: f64, rng: &mut R) -> ParticleField {
        let count = ParticleField::count_for(width, height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::sample(rng, width, height));
        }
        ParticleField {
            width,
            height,
            particles,
        }
    }

    /// Particle count scales with viewport area on top of a fixed base.
    pub fn count_for(width: f64, height: f64) -> usize {
        (width * height / AREA_PER_PARTICLE).floor() as usize + BASE_COUNT
    }

    /// Advance every particle one frame and wrap it back into bounds.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.advance();
            particle.wrap(self.width, self.height);
        }
    }

    /// Update the wrap bounds for a new viewport size. Existing particles
    /// are left untouched; ones outside the new bounds drift back in
    /// through wraparound. This mirrors the page's resize behavior and is
    /// not to be "fixed" without product confirmation.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{Particle, EDGE_MARGIN};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn count_scales_with_area() {
        assert_eq!(ParticleField::count_for(1920.0, 1080.0), 45);
        assert_eq!(ParticleField::count_for(1366.0, 768.0), 33);
        assert_eq!(ParticleField::count_for(375.0, 667.0), 23);
        // tiny viewports keep the base count
        assert_eq!(ParticleField::count_for(1.0, 1.0), 20);
    }

    #[test]
    fn new_field_has_the_computed_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = ParticleField::new(1366.0, 768.0, &mut rng);
        assert_eq!(
            field.particles().len(),
            ParticleField::count_for(1366.0, 768.0)
        );
    }

    #[test]
    fn particles_stay_in_extended_bounds() {
        let (w, h) = (1366.0, 768.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = ParticleField::new(w, h, &mut rng);
        for _ in 0..5_000 {
            field.step();
            for p in field.particles() {
                assert!(p.pos[0] >= -EDGE_MARGIN && p.pos[0] <= w + EDGE_MARGIN);
                assert!(p.pos[1] >= -EDGE_MARGIN && p.pos[1] <= h + EDGE_MARGIN);
            }
        }
    }

    #[test]
    fn step_wraps_a_particle_leaving_the_right_edge() {
        let (w, h) = (100.0, 100.0);
        let mut field = ParticleField {
            width: w,
            height: h,
            particles: vec![Particle::new([w + EDGE_MARGIN, 50.0], [0.2, 0.0], 1.0, 200.0)],
        };
        // first step pushes the particle past the margin and wraps it
        field.step();
        assert_eq!(field.particles()[0].pos[0], -EDGE_MARGIN);
        // velocity is unchanged and the particle keeps drifting right
        field.step();
        assert_eq!(field.particles()[0].pos[0], -EDGE_MARGIN + 0.2);
    }

    #[test]
    fn resize_changes_bounds_but_not_particles() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = ParticleField::new(800.0, 600.0, &mut rng);
        let before: Vec<Particle> = field.particles().to_vec();

        field.resize(400.0, 300.0);

        assert_eq!(field.width(), 400.0);
        assert_eq!(field.height(), 300.0);
        assert_eq!(field.particles(), before.as_slice());
    }

    #[test]
    fn resize_rebinds_wraparound_to_the_new_extent() {
        let mut field = ParticleField {
            width: 200.0,
            height: 200.0,
            particles: vec![Particle::new([150.0, 50.0], [0.2, 0.0], 1.0, 200.0)],
        };
        field.resize(100.0, 100.0);
        // 150 is past the new right margin, so the next step wraps it
        field.step();
        assert_eq!(field.particles()[0].pos[0], -EDGE_MARGIN);
    }
}
