pub mod atomic_write;
pub mod logger;
pub mod paths;
