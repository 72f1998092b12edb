use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::particle::Particle;
use crate::config::FieldConfig;

/// Minimal drawing API the renderer needs.  The browser implementation wraps
/// a 2D canvas context; tests use a recorder.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        let _ = self.arc(x, y, radius, 0.0, std::f64::consts::TAU);
        self.fill();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke();
    }
}

/// A pair of particles close enough to be linked, with the link opacity
/// factor in `(0, 1]` (1 when touching, approaching 0 at `max_distance`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub strength: f64,
}

/// Every unordered pair closer than `max_distance`.  O(n²); the tier table
/// keeps `n` small enough for this to run each frame.
pub fn connections(particles: &[Particle], max_distance: f64) -> impl Iterator<Item = Link> + '_ {
    particles.iter().enumerate().flat_map(move |(i, p1)| {
        particles[i + 1..].iter().enumerate().filter_map(move |(offset, p2)| {
            let distance = p1.distance_to(p2);
            (distance < max_distance).then(|| Link {
                a: i,
                b: i + 1 + offset,
                strength: 1.0 - distance / max_distance,
            })
        })
    })
}

/// Repaint the whole field: clear, dots, then links.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, field: &ParticleField) {
    let config: &FieldConfig = field.config();
    let bounds = field.bounds();
    let particles = field.particles();

    surface.clear(bounds.width, bounds.height);

    let fill = config.rgba(config.particle_alpha);
    for p in particles {
        surface.fill_circle(p.x, p.y, p.size, &fill);
    }

    for link in connections(particles, config.link_distance) {
        let (p1, p2) = (&particles[link.a], &particles[link.b]);
        let color = config.rgba(config.link_alpha * link.strength);
        surface.stroke_line((p1.x, p1.y), (p2.x, p2.y), config.line_width, &color);
    }
}
