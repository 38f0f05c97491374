pub mod contact_log;
pub mod network;
pub mod time;

pub use contact_log::*;
pub use network::*;
pub use time::*;
