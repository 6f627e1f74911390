pub mod alert;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod export;
pub mod icons;
pub mod number_format;
pub mod page_frame;
pub mod print;
