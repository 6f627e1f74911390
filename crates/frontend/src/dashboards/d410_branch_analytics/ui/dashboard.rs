use crate::dashboards::d410_branch_analytics::export::RANKING_FILE_NAME;
use crate::shared::alert::show_alert;
use crate::shared::components::{ActionButton, StatCard};
use crate::shared::export::export_to_csv;
use crate::shared::number_format::{
    format_count, format_money, format_money_cents, format_percent,
};
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d410_branch_analytics::{
    all_branches, rank_by_sales, BranchSelection, DASHBOARD_KEY, DASHBOARD_TITLE,
};
use leptos::prelude::*;

/// Sales analytics per branch over the static branch table
#[component]
pub fn BranchAnalyticsDashboard() -> impl IntoView {
    let selection = RwSignal::new(BranchSelection::new());
    let current = move || selection.with(|s| s.current());

    let sales = Signal::derive(move || format_money(current().sales));
    let ticket = Signal::derive(move || format_money_cents(current().average_ticket));
    let orders = Signal::derive(move || format_count(current().order_count));
    let prep = Signal::derive(move || format!("{} min", current().average_prep_minutes));
    let accent = Signal::derive(move || Some(current().color.to_string()));
    let transactions = Signal::derive(move || {
        Some(format!("{} transacciones", format_count(current().transaction_count)))
    });

    let on_export = move |_: leptos::ev::MouseEvent| {
        let ranked = rank_by_sales(all_branches());
        if let Err(e) = export_to_csv(&ranked, RANKING_FILE_NAME) {
            log::error!("Ranking export failed: {}", e);
            show_alert(&format!("No se pudo exportar el ranking: {}", e));
        }
    };

    view! {
        <PageFrame page_id=page_id(DASHBOARD_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">{DASHBOARD_TITLE}</h1>
                <ActionButton icon_name="download" secondary=true on_click=Callback::new(on_export)>
                    "Exportar ranking"
                </ActionButton>
            </div>

            <div class="page__content">
                <div class="branch-selector">
                    {all_branches()
                        .iter()
                        .map(|branch| {
                            let name = branch.name;
                            let is_active = move || current().name == name;
                            view! {
                                <button
                                    type="button"
                                    class="branch-selector__chip"
                                    class:branch-selector__chip--active=is_active
                                    style:border-color=branch.color
                                    on:click=move |_| {
                                        selection.update(|s| {
                                            s.select(name);
                                        });
                                    }
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="stat-grid">
                    <StatCard label="Ventas" icon_name="dollar-sign" value=sales accent=accent />
                    <StatCard label="Ticket promedio" icon_name="receipt" value=ticket accent=accent />
                    <StatCard label="Pedidos" icon_name="shopping-cart" value=orders accent=accent />
                    <StatCard label="Tiempo de preparación" icon_name="clock" value=prep accent=accent />
                </div>

                <div class="dashboard-row">
                    <PaymentMixCard selection=selection />

                    <div class="card register-card">
                        <div class="card__title">"Caja con más movimiento"</div>
                        <StatCard
                            label="Caja"
                            icon_name="store"
                            value=Signal::derive(move || current().top_register.to_string())
                            subtitle=transactions
                        />
                    </div>
                </div>

                <SalesRanking selection=selection />
            </div>
        </PageFrame>
    }
}

#[component]
fn PaymentMixCard(selection: RwSignal<BranchSelection>) -> impl IntoView {
    let mix = move || selection.with(|s| s.current().payment_mix());

    view! {
        <div class="card payment-mix">
            <div class="card__title">"Métodos de pago"</div>
            <div class="payment-mix__bar">
                <div
                    class="payment-mix__segment payment-mix__segment--cash"
                    style:width=move || format!("{:.2}%", mix().cash_percent)
                ></div>
                <div
                    class="payment-mix__segment payment-mix__segment--digital"
                    style:width=move || format!("{:.2}%", mix().digital_percent)
                ></div>
            </div>
            <div class="payment-mix__legend">
                <StatCard
                    label="Efectivo"
                    icon_name="cash"
                    value=Signal::derive(move || format_money(mix().cash_total))
                    subtitle=Signal::derive(move || Some(format_percent(mix().cash_percent)))
                />
                <StatCard
                    label="Pagos digitales"
                    icon_name="credit-card"
                    value=Signal::derive(move || format_money(mix().digital_total))
                    subtitle=Signal::derive(move || Some(format_percent(mix().digital_percent)))
                />
            </div>
        </div>
    }
}

#[component]
fn SalesRanking(selection: RwSignal<BranchSelection>) -> impl IntoView {
    // The table is static, so the ranking is computed once.
    let ranked = rank_by_sales(all_branches());

    view! {
        <div class="card ranking">
            <div class="card__title">"Ranking de ventas"</div>
            {ranked
                .into_iter()
                .map(|entry| {
                    let name = entry.branch.name;
                    let is_selected = move || selection.with(|s| s.current().name == name);
                    view! {
                        <div class="ranking__row" class:ranking__row--selected=is_selected>
                            <span class="ranking__position">{entry.position}</span>
                            <span class="ranking__name">{name}</span>
                            <div class="ranking__track">
                                <div
                                    class="ranking__bar"
                                    style:width=format!("{:.2}%", entry.bar_width_percent)
                                    style:background-color=entry.branch.color
                                ></div>
                            </div>
                            <span class="ranking__value">{format_money(entry.branch.sales)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
