/// Identification metadata of a UseCase
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u510")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "qr_generator")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI (e.g. "Generador de códigos QR")
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full key in the form "u510_qr_generator"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
