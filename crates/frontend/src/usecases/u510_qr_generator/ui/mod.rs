mod qr_code_view;
mod view;
mod view_model;

pub use qr_code_view::QrCodeView;
pub use view::QrGeneratorPage;
pub use view_model::QrGeneratorViewModel;
