pub mod menus;
pub mod titlebar;
pub mod window_bridge;
