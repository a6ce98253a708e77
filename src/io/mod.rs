pub mod exit;
pub mod log;
pub mod print;
pub mod record;
pub mod repl;
pub mod syntax;
pub mod szs;
