use cgmath::{MetricSpace, Point2, Vector2};
use rand::{Rng, thread_rng};
use rayon::prelude::*;

use crate::{
    config::FieldConfig,
    particle::Particle,
    surface::Surface,
    theme::Theme,
};

/// A straight edge to draw, with its opacity already faded by distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point2<f32>,
    pub to: Point2<f32>,
    pub opacity: f32,
}

/// Linear falloff: `base` at distance 0 down to 0 at `reach` and beyond.
pub fn fade(distance: f32, reach: f32, base: f32) -> f32 {
    (1.0 - distance / reach).max(0.0) * base
}

/// Particle count for a surface: one particle per `area_per_particle`.
pub fn particle_count(width: f32, height: f32, area_per_particle: f32) -> usize {
    let count = (f64::from(width) * f64::from(height) / f64::from(area_per_particle)).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

pub struct Field {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    pointer: Option<Point2<f32>>,
}

impl Field {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            pointer: None,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Option<Point2<f32>> {
        self.pointer
    }

    pub fn size(&self) -> Vector2<f32> {
        Vector2::new(self.width, self.height)
    }

    /// Throws away every particle and samples a fresh batch sized for the new
    /// surface.
    pub fn resize(&mut self, width: f32, height: f32) {
        let count = particle_count(width, height, self.config.area_per_particle);
        let config = &self.config;
        let particles = (0..count)
            .into_par_iter()
            .map(|_| Particle::sample(&mut thread_rng(), width, height, config))
            .collect();
        self.replace(width, height, particles);
    }

    /// Same as [`Field::resize`] but draws from `rng`, for reproducible batches.
    pub fn resize_with(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        let count = particle_count(width, height, self.config.area_per_particle);
        let particles = (0..count)
            .map(|_| Particle::sample(&mut *rng, width, height, &self.config))
            .collect();
        self.replace(width, height, particles);
    }

    fn replace(&mut self, width: f32, height: f32, particles: Vec<Particle>) {
        self.width = width;
        self.height = height;
        self.particles = particles;
        log::debug!(
            "field resized to {}x{} with {} particles",
            width,
            height,
            self.particles.len()
        );
    }

    pub fn set_pointer(&mut self, pointer: Option<Point2<f32>>) {
        self.pointer = pointer;
    }

    /// Advances every particle by one frame.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        self.particles
            .par_iter_mut()
            .for_each(|particle| particle.step(width, height));
    }

    /// Edges between every unordered pair closer than `link_distance`, in
    /// `(i, j)` order with `i < j`.
    pub fn neighbor_links(&self) -> Vec<Link> {
        let reach = self.config.link_distance;
        let base = self.config.link_opacity;
        let particles: &[Particle] = &self.particles;

        (0..particles.len())
            .into_par_iter()
            .flat_map_iter(move |i| {
                let a = particles[i].position;
                particles[i + 1..].iter().filter_map(move |other| {
                    let distance = a.distance(other.position);
                    (distance < reach).then(|| Link {
                        from: a,
                        to: other.position,
                        opacity: fade(distance, reach, base),
                    })
                })
            })
            .collect()
    }

    /// Edges from particles to the pointer, empty when no pointer is tracked.
    pub fn pointer_links(&self) -> Vec<Link> {
        let Some(pointer) = self.pointer else {
            return Vec::new();
        };
        let reach = self.config.pointer_radius;
        let base = self.config.pointer_opacity;

        self.particles
            .iter()
            .filter_map(|particle| {
                let distance = particle.position.distance(pointer);
                (distance < reach).then(|| Link {
                    from: particle.position,
                    to: pointer,
                    opacity: fade(distance, reach, base),
                })
            })
            .collect()
    }

    pub fn render(&self, surface: &mut impl Surface, theme: Theme) {
        let palette = theme.palette();

        surface.clear();
        for particle in &self.particles {
            surface.fill_circle(particle.position, particle.radius, palette.dot);
        }
        for link in self.neighbor_links() {
            surface.line(link.from, link.to, palette.edge.with_alpha(link.opacity), self.config.link_width);
        }
        for link in self.pointer_links() {
            surface.line(link.from, link.to, palette.edge.with_alpha(link.opacity), self.config.pointer_width);
        }
    }
}
