pub mod config_io;
pub mod tasks_io;

pub use config_io::{load_layout, save_layout};
pub use tasks_io::{PersistError, default_data_dir, load_tasks, save_tasks};
