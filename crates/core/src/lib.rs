pub mod config;
pub mod error;
pub mod pet;

pub use config::Config;
pub use error::*;
pub use pet::*;
