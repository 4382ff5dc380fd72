pub mod token_config;
pub mod token_info;

pub use token_config::*;
pub use token_info::*;
