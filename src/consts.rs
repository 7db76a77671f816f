/// Number of columns on the board
pub const WIDTH: u8 = 6;
/// Number of rows on the board
pub const HEIGHT: u8 = 6;
/// Number of cells on the board
pub const N_CELLS: usize = WIDTH as usize * HEIGHT as usize;
