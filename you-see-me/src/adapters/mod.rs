pub mod console;
pub mod terminal;
