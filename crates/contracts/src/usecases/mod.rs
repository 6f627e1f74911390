pub mod common;
pub mod u510_qr_generator;
