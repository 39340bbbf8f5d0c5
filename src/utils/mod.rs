mod close;
mod error;
pub mod focus;
pub mod scripts;
mod settings;
mod types;

pub use close::{CloseChannel, CloseReason};
pub use error::{ModalError, Result};
pub use settings::DemoSettings;
pub use types::{ModalConfig, ModalIds, ModalPosition, ModalSize};
