pub mod u510_qr_generator;

pub use u510_qr_generator::ui::QrGeneratorPage;
