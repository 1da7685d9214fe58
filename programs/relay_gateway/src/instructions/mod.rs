pub mod admin;
pub mod chain_registry;
pub mod deliver_message;
pub mod deliver_value;
pub mod deliver_value_batch;
pub mod fund_treasury;
pub mod initialize;
pub mod relayer_registry;
pub mod send_message;
pub mod send_value;
pub mod views;

pub use admin::*;
pub use chain_registry::*;
pub use deliver_message::*;
pub use deliver_value::*;
pub use deliver_value_batch::*;
pub use fund_treasury::*;
pub use initialize::*;
pub use relayer_registry::*;
pub use send_message::*;
pub use send_value::*;
pub use views::*;
