pub mod menu;
pub mod settings;
pub mod ui;
pub mod utils;
pub mod window_controls;
