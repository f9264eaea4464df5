pub mod check;
mod command_result;
pub mod generate;
pub mod scan;

pub use command_result::*;
