pub mod bar;
pub mod item;
pub mod layout;
pub mod tree;
