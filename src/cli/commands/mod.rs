mod command_result;
pub mod flatten;
pub mod helper;
pub mod index;
pub mod init;
pub mod lookup;

pub use command_result::*;
