//! Decorative particle field behind the hero section.
//!
//! Particles never interact. Each frame moves every particle by its velocity
//! and wraps anything that drifts more than [`EDGE_MARGIN`] past the container
//! to the opposite side. Seeding draws from an injected [`Rng`] so the field is
//! reproducible under a fixed seed.

use rand::Rng;

pub const PALETTE: [&str; 3] = ["#8A2BE2", "#FF4D6D", "#00F5D4"];
pub const MIN_PARTICLES: usize = 30;
pub const MAX_PARTICLES: usize = 80;
/// Viewport px per particle.
pub const WIDTH_PER_PARTICLE: f64 = 10.0;
pub const EDGE_MARGIN: f64 = 10.0;
pub const MAX_SPEED: f64 = 0.2;
pub const RADIUS_RANGE: (f64, f64) = (0.6, 3.4);
pub const OPACITY_RANGE: (f64, f64) = (0.12, 0.72);

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: &'static str,
    pub opacity: f64,
}

impl Particle {
    fn advance(&mut self, width: f64, height: f64) {
        self.x = wrap_coordinate(self.x + self.vx, width);
        self.y = wrap_coordinate(self.y + self.vy, height);
    }
}

fn wrap_coordinate(value: f64, extent: f64) -> f64 {
    if value < -EDGE_MARGIN {
        extent + EDGE_MARGIN
    } else if value > extent + EDGE_MARGIN {
        -EDGE_MARGIN
    } else {
        value
    }
}

pub fn particle_count(viewport_width: f64) -> usize {
    let wanted = (viewport_width / WIDTH_PER_PARTICLE).round();
    if !wanted.is_finite() || wanted <= MIN_PARTICLES as f64 {
        return MIN_PARTICLES;
    }
    (wanted as usize).min(MAX_PARTICLES)
}

pub fn seed_particles<R: Rng>(
    rng: &mut R,
    count: usize,
    width: f64,
    height: f64,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.gen::<f64>() * width.max(0.0),
            y: rng.gen::<f64>() * height.max(0.0),
            vx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            radius: rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            opacity: rng.gen_range(OPACITY_RANGE.0..OPACITY_RANGE.1),
        })
        .collect()
}

pub struct ParticleField<R> {
    rng: R,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
        }
    }

    /// Adopts new container bounds and reseeds the whole field.
    pub fn resize(&mut self, width: f64, height: f64, viewport_width: f64) {
        self.width = width;
        self.height = height;
        let count = particle_count(viewport_width);
        self.particles = seed_particles(&mut self.rng, count, width, height);
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
