// UI Constants
pub const HEAVY_DOWN_AND_RIGHT: char = '┏';
pub const HEAVY_DOWN_AND_LEFT: char = '┓';
pub const HEAVY_UP_AND_RIGHT: char = '┗';
pub const HEAVY_UP_AND_LEFT: char = '┛';
pub const HEAVY_HORIZONTAL: char = '━';
pub const HEAVY_VERTICAL: char = '┃';

pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

// Animation Constants
pub const SPINNER_FRAME_INTERVAL_MS: u64 = 80;
