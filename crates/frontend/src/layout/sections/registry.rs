use crate::dashboards::BranchAnalyticsDashboard;
use crate::usecases::QrGeneratorPage;
use contracts::dashboards::d410_branch_analytics::{DASHBOARD_KEY, DASHBOARD_TITLE};
use leptos::prelude::*;

/// Sidebar entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const QR_SECTION_KEY: &str = "u510_qr_generator";

pub const SECTIONS: &[Section] = &[
    Section {
        key: DASHBOARD_KEY,
        label: DASHBOARD_TITLE,
        icon: "bar-chart",
    },
    Section {
        key: QR_SECTION_KEY,
        label: "Generador QR",
        icon: "qr-code",
    },
];

pub const DEFAULT_SECTION: &str = DASHBOARD_KEY;

pub fn is_known_section(key: &str) -> bool {
    SECTIONS.iter().any(|s| s.key == key)
}

/// Renders the centre area for a section key.
///
/// Unknown keys get a placeholder.
pub fn render_section_content(key: &str) -> AnyView {
    match key {
        DASHBOARD_KEY => view! { <BranchAnalyticsDashboard /> }.into_any(),
        QR_SECTION_KEY => view! { <QrGeneratorPage /> }.into_any(),
        _ => {
            log::warn!("Unknown section: {}", key);
            view! { <div class="placeholder">{"Sección no disponible"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::common::UseCaseMetadata;
    use contracts::usecases::u510_qr_generator::QrGenerator;

    #[test]
    fn test_section_keys() {
        assert!(is_known_section(DEFAULT_SECTION));
        assert!(is_known_section("u510_qr_generator"));
        assert!(!is_known_section("a001_connection_1c"));
    }

    #[test]
    fn test_qr_key_matches_usecase_name() {
        assert_eq!(QR_SECTION_KEY, QrGenerator::full_name());
    }
}
