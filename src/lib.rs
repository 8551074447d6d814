pub mod io;
pub mod model;
pub mod order;
pub mod store;
pub mod tui;
pub mod util;
