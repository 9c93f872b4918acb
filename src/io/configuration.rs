//! Simulation constants and runtime configuration defaults

// Grid defaults
/// Default number of grid rows
pub const DEFAULT_ROWS: i32 = 30;
/// Default number of grid columns
pub const DEFAULT_COLS: i32 = 30;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: i32 = 10_000;

// Timer settings
/// Delay between generation ticks in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 100;
/// Default number of generations to run
pub const DEFAULT_GENERATIONS: u64 = 100;

// Random seeding
/// Fixed seed for reproducible random soups
pub const DEFAULT_SEED: u64 = 42;
/// Fraction of cells alive in a random soup
pub const DEFAULT_DENSITY: f64 = 0.33;

// Rendering
/// Side length of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 20;
/// Fill color of live cells
pub const ALIVE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Fill color of dead cells
pub const DEAD_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Stroke color of the lines between cells
pub const GRID_LINE_COLOR: [u8; 4] = [160, 160, 160, 255];
/// Largest rendered image side in pixels (the GIF format limit)
pub const MAX_IMAGE_SIDE: u32 = 65_535;

// Output settings
/// Default path of the final-state PNG
pub const DEFAULT_OUTPUT: &str = "life.png";
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// How many frame delays the last GIF frame is held for
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 10;
/// Longest frame delay a GIF can store, 65 535 centiseconds (in milliseconds)
pub const MAX_FRAME_DELAY_MS: u32 = 655_350;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
