pub mod error;
pub mod hex;
pub mod memory;
pub mod notification;
pub mod parse;
pub mod picker;
pub mod simulator;
pub mod view;

pub use error::{ConfigError, Error};
pub use memory::{MemoryCell, MemoryTable};
pub use notification::{Level, Notification, Notifier};
pub use simulator::{MemoryState, RamSimulator, SimulatorConfig};
