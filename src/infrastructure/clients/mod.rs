pub mod backend;
pub mod line;
