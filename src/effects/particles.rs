//! Floating dots behind the page, wrapped toroidally at the canvas edges.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_PALETTE: [&str; 4] = ["#00FFFF", "#FF00FF", "#8B5CF6", "#FF6B35"];

const MAX_SPEED: f64 = 0.25;
const GLOW_RADIUS_SCALE: f64 = 3.0;
const GLOW_ALPHA_SCALE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: &'static str,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            speed_x: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            speed_y: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            size: rng.gen_range(1.0..4.0),
            opacity: rng.gen_range(0.2..0.7),
            color: PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())],
        }
    }

    fn advance(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.speed_x, width);
        self.y = wrap(self.y + self.speed_y, height);
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

/// One filled circle to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new<R: Rng>(rng: &mut R, count: usize, width: f64, height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();

        Self {
            particles,
            width,
            height,
        }
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// New bounds apply from the next step; particles left outside them wrap
    /// on that step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Paint order for the current frame: each particle's glow, then its core.
    pub fn dots(&self) -> impl Iterator<Item = Dot> + '_ {
        self.particles.iter().flat_map(|particle| {
            [
                Dot {
                    x: particle.x,
                    y: particle.y,
                    radius: particle.size * GLOW_RADIUS_SCALE,
                    alpha: particle.opacity * GLOW_ALPHA_SCALE,
                    color: particle.color,
                },
                Dot {
                    x: particle.x,
                    y: particle.y,
                    radius: particle.size,
                    alpha: particle.opacity,
                    color: particle.color,
                },
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn field(count: usize) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleField::new(&mut rng, count, 800.0, 600.0)
    }

    #[test]
    fn spawns_particles_within_ranges() {
        let field = field(PARTICLE_COUNT);

        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for particle in field.particles() {
            assert!((0.0..=800.0).contains(&particle.x));
            assert!((0.0..=600.0).contains(&particle.y));
            assert!((1.0..4.0).contains(&particle.size));
            assert!((0.2..0.7).contains(&particle.opacity));
            assert!(particle.speed_x.abs() <= MAX_SPEED);
            assert!(PARTICLE_PALETTE.contains(&particle.color));
        }
    }

    #[test]
    fn particles_stay_in_bounds_over_many_frames() {
        let mut field = field(PARTICLE_COUNT);

        for _ in 0..10_000 {
            field.step();
        }

        for particle in field.particles() {
            assert!((0.0..=800.0).contains(&particle.x), "x={}", particle.x);
            assert!((0.0..=600.0).contains(&particle.y), "y={}", particle.y);
        }
    }

    #[test]
    fn leaving_an_edge_reappears_on_the_opposite_edge() {
        let mut field = field(1);
        field.particles[0] = Particle {
            x: 0.1,
            y: 599.9,
            speed_x: -0.2,
            speed_y: 0.2,
            size: 2.0,
            opacity: 0.5,
            color: PARTICLE_PALETTE[0],
        };

        field.step();

        assert_eq!(field.particles()[0].x, 800.0);
        assert_eq!(field.particles()[0].y, 0.0);
    }

    #[test]
    fn shrinking_wraps_outside_particles_on_next_step() {
        let mut field = field(PARTICLE_COUNT);
        field.resize(100.0, 100.0);
        field.step();

        for particle in field.particles() {
            assert!(particle.x <= 100.0 && particle.y <= 100.0);
        }
    }

    #[test]
    fn glow_is_painted_beneath_each_core() {
        let field = field(3);
        let dots: Vec<Dot> = field.dots().collect();

        assert_eq!(dots.len(), 6);
        for pair in dots.chunks(2) {
            let (glow, core) = (pair[0], pair[1]);
            assert_eq!(glow.radius, core.radius * 3.0);
            assert!(glow.alpha < core.alpha);
            assert_eq!((glow.x, glow.y), (core.x, core.y));
        }
    }
}
