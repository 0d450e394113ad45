pub mod colors;
pub mod date;
pub mod formatting;
pub mod media;
pub mod path;
pub mod table;

