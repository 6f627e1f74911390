//! PageFrame — standard root wrapper for every section page.
//!
//! Sets `id` in the form `"{entity}--{category}"` and `data-page-category`
//! on the root element, e.g. `"d410_branch_analytics--dashboard"`.

use leptos::prelude::*;

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case tool page (generators, exports).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Builds a page id in the `{entity}--{category}` format.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert_eq!(
            page_id("d410_branch_analytics", PAGE_CAT_DASHBOARD),
            "d410_branch_analytics--dashboard"
        );
    }
}
