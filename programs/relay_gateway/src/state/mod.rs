pub mod chain_registry;
pub mod gateway;
pub mod relayer_registry;
pub mod sequence;
pub mod treasury;

pub use chain_registry::*;
pub use gateway::*;
pub use relayer_registry::*;
pub use sequence::*;
pub use treasury::*;
