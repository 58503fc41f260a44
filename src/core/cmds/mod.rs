pub mod generate;
pub mod init;
pub mod print;

pub use generate::{RunStatus, execute_generate};
pub use init::execute_init;
pub use print::execute_print;
