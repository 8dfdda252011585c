pub mod colors;
pub mod demo;
pub mod print;
pub mod severity;
pub mod version;
