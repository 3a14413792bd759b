pub mod book;
pub mod commands;
pub mod subscriber;
pub mod value_objects;

pub use book::*;
pub use subscriber::*;
pub use value_objects::*;
