
mod classify;
mod legality;
mod movement;
mod threats;

pub use classify::{status, Status};
pub use legality::{is_legal_move, legal_destinations, legal_moves};
pub use movement::is_pseudo_legal;
pub use threats::is_square_attacked;
