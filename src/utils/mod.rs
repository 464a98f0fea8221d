pub mod date;
pub mod parse;
pub mod table;
pub mod time;
