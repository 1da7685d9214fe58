pub mod admission;
pub mod guard;
pub mod hash;
pub mod settlement;
pub mod transfer;

pub use admission::*;
pub use guard::*;
pub use hash::*;
pub use settlement::*;
pub use transfer::*;
