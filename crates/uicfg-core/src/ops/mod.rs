pub mod config_ops;
pub mod store;

pub use config_ops::{create_ui_config, get_button_config, get_ui_config, update_ui_config};
pub use store::{ConfigStore, MemoryStore};
