// Default values for the particle field - these are the single source of truth for defaults

// Width tiers (exclusive upper bound on window width -> particle count)
pub const DEFAULT_TIERS: [(f64, usize); 3] = [(768.0, 60), (1280.0, 120), (1920.0, 180)];
pub const DEFAULT_FALLBACK_COUNT: usize = 240;

// Physics
pub const DEFAULT_POINTER_RADIUS: f64 = 150.0;
pub const DEFAULT_REPULSION: f64 = 0.5;
pub const DEFAULT_DAMPING: f64 = 0.99;
pub const DEFAULT_MIN_SPEED: f64 = 0.5;
pub const DEFAULT_JITTER: f64 = 0.1; // full width of the nudge interval
pub const DEFAULT_INITIAL_SPEED: f64 = 1.0;
pub const DEFAULT_MIN_SIZE: f64 = 1.0;
pub const DEFAULT_MAX_SIZE: f64 = 4.0;

// Click spawning
pub const DEFAULT_SPAWN_BATCH: usize = 4;
pub const DEFAULT_SPAWN_CAP: usize = 200;
pub const DEFAULT_SPAWN_SPEED: f64 = 2.0;

// Rendering
pub const DEFAULT_LINK_DISTANCE: f64 = 150.0;
pub const DEFAULT_COLOR: (u8, u8, u8) = (100, 108, 255); // indigo
pub const DEFAULT_PARTICLE_ALPHA: f64 = 0.5;
pub const DEFAULT_LINK_ALPHA: f64 = 0.5;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

// DOM hooks
pub const PARTICLE_CANVAS_ID: &str = "particles";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_CONTAINER_SELECTOR: &str = ".nav-container";
pub const ACTIVE_CLASS: &str = "active";
pub const VIEWPORT_HEIGHT_VAR: &str = "--vh";
