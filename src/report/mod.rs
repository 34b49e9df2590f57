pub mod crossed;
pub use crossed::*;

pub mod reduced;
pub use reduced::*;

pub mod size;
pub use size::*;

pub mod summary;
pub use summary::*;
