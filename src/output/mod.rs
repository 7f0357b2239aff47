// Output — CSV serialization and terminal display.

pub mod csv;
pub mod terminal;
