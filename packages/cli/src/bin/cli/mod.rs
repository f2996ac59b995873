pub mod generate;
pub mod quiz;
pub mod shell;
