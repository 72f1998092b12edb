//! The particle simulation itself: population policy, per-frame physics and
//! click spawning.  Nothing in here touches the DOM, so the whole module is
//! testable on the host.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::particle::{below, symmetric, Particle};
use crate::config::FieldConfig;

/// Drawing-buffer size of the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Last known pointer position relative to the canvas, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub position: Option<(f64, f64)>,
    pub radius: f64,
}

pub struct ParticleField {
    config: FieldConfig,
    bounds: Bounds,
    pointer: Pointer,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Empty field; call [`ParticleField::reset_for_width`] to populate it.
    pub fn new(config: FieldConfig, bounds: Bounds, seed: u64) -> Self {
        let pointer = Pointer {
            position: None,
            radius: config.pointer_radius,
        };
        Self {
            config,
            bounds,
            pointer,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Field populated with the tier count for `window_width`.
    pub fn with_window_width(config: FieldConfig, bounds: Bounds, window_width: f64, seed: u64) -> Self {
        let mut field = Self::new(config, bounds, seed);
        field.reset_for_width(window_width);
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Population
    // -----------------------------------------------------------------------

    /// Throw away every particle and scatter `count` fresh ones over the
    /// current bounds.
    pub fn rebuild(&mut self, count: usize) {
        let Bounds { width, height } = self.bounds;
        let FieldConfig { initial_speed, min_size, max_size, .. } = self.config;

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let x = below(&mut self.rng, width);
            let y = below(&mut self.rng, height);
            self.particles.push(Particle::random_at(
                &mut self.rng,
                x,
                y,
                initial_speed,
                min_size,
                max_size,
            ));
        }
    }

    /// Rebuild with the tier count for `window_width`; returns that count.
    pub fn reset_for_width(&mut self, window_width: f64) -> usize {
        let count = self.config.particle_count_for_width(window_width);
        self.rebuild(count);
        count
    }

    /// New canvas size.  The particle set is always rebuilt, even when the
    /// tier did not change.
    pub fn resize(&mut self, bounds: Bounds, window_width: f64) -> usize {
        self.bounds = bounds;
        self.reset_for_width(window_width)
    }

    /// Click handler body: append a batch at the pointer (or somewhere random
    /// when the pointer is outside the canvas).  Returns how many particles
    /// were added; zero once the population reached the spawn cap.
    pub fn spawn_burst(&mut self) -> usize {
        if self.particles.len() >= self.config.spawn_cap {
            return 0;
        }
        let FieldConfig { spawn_batch, spawn_speed, min_size, max_size, .. } = self.config;

        for _ in 0..spawn_batch {
            let (x, y) = match self.pointer.position {
                Some(pos) => pos,
                None => (
                    below(&mut self.rng, self.bounds.width),
                    below(&mut self.rng, self.bounds.height),
                ),
            };
            self.particles.push(Particle::random_at(
                &mut self.rng,
                x,
                y,
                spawn_speed,
                min_size,
                max_size,
            ));
        }
        spawn_batch
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.position = Some((x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.position = None;
    }

    // -----------------------------------------------------------------------
    // Physics
    // -----------------------------------------------------------------------

    /// Advance every particle by one frame.
    pub fn update(&mut self) {
        let bounds = self.bounds;
        let pointer = self.pointer;
        for particle in &mut self.particles {
            step(particle, bounds, pointer, &self.config, &mut self.rng);
        }
    }
}

/// One frame for one particle: integrate, bounce, repel, damp, jitter.
pub fn step<R: rand::Rng + ?Sized>(
    p: &mut Particle,
    bounds: Bounds,
    pointer: Pointer,
    config: &FieldConfig,
    rng: &mut R,
) {
    p.x += p.vx;
    p.y += p.vy;

    // Bounce off edges and clamp back inside
    if p.x < p.size || p.x > bounds.width - p.size {
        p.vx = -p.vx;
        p.x = p.size.max((bounds.width - p.size).min(p.x));
    }
    if p.y < p.size || p.y > bounds.height - p.size {
        p.vy = -p.vy;
        p.y = p.size.max((bounds.height - p.size).min(p.y));
    }

    if let Some((px, py)) = pointer.position {
        let dx = p.x - px;
        let dy = p.y - py;
        let distance = dx.hypot(dy);
        if distance < pointer.radius {
            let angle = dy.atan2(dx);
            let force = (pointer.radius - distance) / pointer.radius;
            p.vx += angle.cos() * force * config.repulsion;
            p.vy += angle.sin() * force * config.repulsion;
        }
    }

    p.vx *= config.damping;
    p.vy *= config.damping;

    // Keep things drifting; damping alone would freeze the field
    let nudge = config.jitter / 2.0;
    if p.vx.abs() < config.min_speed {
        p.vx += symmetric(rng, nudge);
    }
    if p.vy.abs() < config.min_speed {
        p.vy += symmetric(rng, nudge);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field(window_width: f64) -> ParticleField {
        ParticleField::with_window_width(FieldConfig::default(), Bounds::new(800.0, 600.0), window_width, 42)
    }

    fn still_config() -> FieldConfig {
        FieldConfig {
            min_speed: 0.0,
            ..FieldConfig::default()
        }
    }

    fn no_pointer() -> Pointer {
        Pointer { position: None, radius: 150.0 }
    }

    #[test]
    fn construction_uses_width_tier() {
        assert_eq!(field(500.0).len(), 60);
        assert_eq!(field(1000.0).len(), 120);
        assert_eq!(field(1500.0).len(), 180);
        assert_eq!(field(2500.0).len(), 240);
    }

    #[test]
    fn new_particles_start_inside_canvas() {
        let f = field(2500.0);
        for p in f.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((-1.0..1.0).contains(&p.vx));
            assert!((-1.0..1.0).contains(&p.vy));
            assert!((1.0..4.0).contains(&p.size));
        }
    }

    #[test]
    fn click_spawns_batch_below_cap() {
        let mut f = field(500.0);
        assert_eq!(f.spawn_burst(), 4);
        assert_eq!(f.len(), 64);
    }

    #[test]
    fn click_spawns_nothing_at_cap() {
        let mut f = field(2500.0);
        assert_eq!(f.len(), 240);
        assert_eq!(f.spawn_burst(), 0);
        assert_eq!(f.len(), 240);

        let mut f = field(1500.0);
        while f.spawn_burst() > 0 {}
        assert_eq!(f.len(), 200);
        assert_eq!(f.spawn_burst(), 0);
    }

    #[test]
    fn click_spawns_at_pointer() {
        let mut f = field(500.0);
        f.set_pointer(123.0, 45.0);
        f.spawn_burst();
        for p in &f.particles()[60..] {
            assert_eq!((p.x, p.y), (123.0, 45.0));
            assert!((-2.0..2.0).contains(&p.vx));
            assert!((-2.0..2.0).contains(&p.vy));
        }
    }

    #[test]
    fn click_at_pointer_origin_is_not_treated_as_unset() {
        let mut f = field(500.0);
        f.set_pointer(0.0, 0.0);
        f.spawn_burst();
        assert!(f.particles()[60..].iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn resize_always_rebuilds() {
        let mut f = field(500.0);
        f.spawn_burst();
        let before = f.particles().to_vec();

        // same tier, same canvas size
        let count = f.resize(Bounds::new(800.0, 600.0), 500.0);
        assert_eq!(count, 60);
        assert_eq!(f.len(), 60);
        assert_ne!(&before[..60], f.particles());
    }

    #[test]
    fn resize_picks_new_tier_and_bounds() {
        let mut f = field(500.0);
        f.resize(Bounds::new(300.0, 200.0), 1300.0);
        assert_eq!(f.len(), 180);
        assert_eq!(f.bounds(), Bounds::new(300.0, 200.0));
        assert!(f.particles().iter().all(|p| p.x < 300.0 && p.y < 200.0));
    }

    #[test]
    fn pointer_can_be_cleared() {
        let mut f = field(500.0);
        f.set_pointer(1.0, 2.0);
        assert_eq!(f.pointer().position, Some((1.0, 2.0)));
        f.clear_pointer();
        assert_eq!(f.pointer().position, None);
        assert_eq!(f.pointer().radius, 150.0);
    }

    #[test]
    fn bounce_flips_velocity_once() {
        let config = still_config();
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle { x: 797.5, y: 300.0, vx: 2.0, vy: 0.0, size: 2.0 };
        step(&mut p, Bounds::new(800.0, 600.0), no_pointer(), &config, &mut rng);

        assert_eq!(p.x, 798.0);
        assert_eq!(p.vx, -2.0 * 0.99);

        // back inside: no further flip on the next frame
        step(&mut p, Bounds::new(800.0, 600.0), no_pointer(), &config, &mut rng);
        assert!(p.vx < 0.0);
    }

    #[test]
    fn bounce_on_top_edge() {
        let config = still_config();
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle { x: 400.0, y: 1.0, vx: 0.0, vy: -3.0, size: 3.0 };
        step(&mut p, Bounds::new(800.0, 600.0), no_pointer(), &config, &mut rng);
        assert_eq!(p.y, 3.0);
        assert!(p.vy > 0.0);
        assert_eq!(p.vx, 0.0);
    }

    #[test]
    fn pointer_pushes_particles_away() {
        let config = still_config();
        let mut rng = StdRng::seed_from_u64(3);
        let pointer = Pointer { position: Some((400.0, 300.0)), radius: 150.0 };
        let mut p = Particle { x: 450.0, y: 300.0, vx: 0.0, vy: 0.0, size: 2.0 };
        step(&mut p, Bounds::new(800.0, 600.0), pointer, &config, &mut rng);

        let expected = (150.0 - 50.0) / 150.0 * 0.5 * 0.99;
        assert!((p.vx - expected).abs() < 1e-12);
        assert!(p.vy.abs() < 1e-12);
    }

    #[test]
    fn pointer_out_of_range_has_no_effect() {
        let config = still_config();
        let mut rng = StdRng::seed_from_u64(3);
        let pointer = Pointer { position: Some((100.0, 100.0)), radius: 150.0 };
        let mut p = Particle { x: 400.0, y: 300.0, vx: 1.0, vy: 1.0, size: 2.0 };
        step(&mut p, Bounds::new(800.0, 600.0), pointer, &config, &mut rng);
        assert_eq!((p.vx, p.vy), (0.99, 0.99));
    }

    #[test]
    fn slow_particles_get_nudged() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = Particle { x: 400.0, y: 300.0, vx: 0.0, vy: 0.0, size: 2.0 };
        step(&mut p, Bounds::new(800.0, 600.0), no_pointer(), &config, &mut rng);
        assert!(p.vx.abs() <= 0.05);
        assert!(p.vy.abs() <= 0.05);
        assert!(p.vx != 0.0 || p.vy != 0.0);
    }

    proptest! {
        #[test]
        fn update_keeps_particles_in_bounds(
            width in 20.0f64..2000.0,
            height in 20.0f64..2000.0,
            pointer in proptest::option::of((0.0f64..2000.0, 0.0f64..2000.0)),
            seed in any::<u64>(),
            frames in 1usize..30,
        ) {
            let mut f = ParticleField::with_window_width(
                FieldConfig::default(),
                Bounds::new(width, height),
                500.0,
                seed,
            );
            if let Some((x, y)) = pointer {
                f.set_pointer(x, y);
            }
            f.spawn_burst();
            for _ in 0..frames {
                f.update();
                for p in f.particles() {
                    prop_assert!(p.x >= p.size && p.x <= width - p.size);
                    prop_assert!(p.y >= p.size && p.y <= height - p.size);
                }
            }
        }

        #[test]
        fn damping_alone_slows_particles(
            vx in -5.0f64..5.0,
            vy in -5.0f64..5.0,
        ) {
            prop_assume!(vx != 0.0 || vy != 0.0);
            let config = still_config();
            let mut rng = StdRng::seed_from_u64(0);
            let bounds = Bounds::new(1.0e9, 1.0e9);
            let mut p = Particle { x: 5.0e8, y: 5.0e8, vx, vy, size: 2.0 };
            let mut last = p.speed();
            for _ in 0..50 {
                step(&mut p, bounds, no_pointer(), &config, &mut rng);
                prop_assert!(p.speed() < last);
                last = p.speed();
            }
        }
    }
}
