mod board;
mod color;
mod file;
mod r#move;
mod piece;
mod rank;
mod role;
mod square;
mod status;

pub use board::*;
pub use color::*;
pub use file::*;
pub use r#move::*;
pub use piece::*;
pub use rank::*;
pub use role::*;
pub use square::*;
pub use status::*;
