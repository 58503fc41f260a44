pub mod aggregate;
pub mod cli;
pub mod cmds;
pub mod collect;
pub mod logging;
pub mod main_shared;
pub mod parse;
pub mod render;
pub mod runner;
pub mod types;
