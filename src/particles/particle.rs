use rand::Rng;

/// A single point in the hero background.  Velocities are in pixels per
/// frame; `size` is the drawn radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
}

impl Particle {
    /// Random particle at `(x, y)` with each velocity component drawn from
    /// `[-speed, speed)` and a size from `[min_size, max_size)`.
    pub fn random_at<R: Rng + ?Sized>(
        rng: &mut R,
        x: f64,
        y: f64,
        speed: f64,
        min_size: f64,
        max_size: f64,
    ) -> Particle {
        Particle {
            x,
            y,
            vx: symmetric(rng, speed),
            vy: symmetric(rng, speed),
            size: if max_size > min_size {
                min_size + rng.gen::<f64>() * (max_size - min_size)
            } else {
                min_size
            },
        }
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Uniform sample from `[-half_width, half_width)`; zero width gives zero.
/// Scales a unit sample instead of building a range, so huge or infinite
/// widths cannot panic.
pub(crate) fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    if half_width > 0.0 {
        (rng.gen::<f64>() - 0.5) * 2.0 * half_width
    } else {
        0.0
    }
}

/// Uniform sample from `[0, upper)`; a non-positive upper bound gives zero.
pub(crate) fn below<R: Rng + ?Sized>(rng: &mut R, upper: f64) -> f64 {
    if upper > 0.0 {
        rng.gen::<f64>() * upper
    } else {
        0.0
    }
}
