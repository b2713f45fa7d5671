//! CLI command implementations

pub mod check_content;
pub mod config;
pub mod decode;
pub mod encode;
pub mod lessons;
pub mod play;
pub mod quiz;
pub mod table;
pub mod timing;

mod input;

pub use input::morse_input;
