pub mod commands;
pub mod forms;
pub mod parser;
