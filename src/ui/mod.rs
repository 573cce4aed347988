pub mod ansi;
pub mod view;
