pub mod elimination;
pub use elimination::*;

pub mod eliminator;
pub use eliminator::*;

pub mod iteration;
pub use iteration::*;

pub mod trace;
pub use trace::*;
