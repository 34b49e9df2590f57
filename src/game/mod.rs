pub mod dominance;
pub use dominance::*;

pub mod evidence;
pub use evidence::*;

pub mod game;
pub use game::*;

pub mod matrix;
pub use matrix::*;

pub mod player;
pub use player::*;

pub mod strictness;
pub use strictness::*;
