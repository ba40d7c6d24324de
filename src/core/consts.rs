pub const ROWS: usize = 5;
pub const COLS: usize = 5;

pub const MIN_GOLD: u32 = 1;
pub const MAX_GOLD: u32 = 9;
