pub mod output;
pub mod render;
pub mod source;
pub mod table;
