use crate::shared::charts::{BarChart, LineChart, PieChart};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::format_thousands;
use contracts::analytics::{filter_orders, summarize, DashboardSummary, FilterState};
use contracts::enums::{Category, Gender, Region};
use contracts::orders;
use contracts::shared::indicators::kpi_catalog;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Дашборд покупательского поведения: два селектора (регион, пол),
/// четыре KPI-карточки и три графика. Состояние селекторов живёт в сигналах
/// компонента — каждая сессия изолирована, набор данных общий и неизменяемый.
#[component]
pub fn DashboardPage() -> impl IntoView {
    // по умолчанию выбраны все значения обоих доменов
    let selected_regions: RwSignal<HashSet<String>> = RwSignal::new(
        Region::all().iter().map(|r| r.to_string()).collect(),
    );
    let selected_genders: RwSignal<HashSet<String>> = RwSignal::new(
        Gender::all().iter().map(|g| g.to_string()).collect(),
    );
    let filters_expanded = RwSignal::new(true);

    let filter_state = Memo::new(move |_| FilterState {
        regions: selected_regions
            .get()
            .iter()
            .filter_map(|code| Region::from_code(code))
            .collect(),
        genders: selected_genders
            .get()
            .iter()
            .filter_map(|code| Gender::from_code(code))
            .collect(),
    });

    // полный синхронный пересчёт при каждом изменении селекторов
    let summary = Memo::new(move |_| {
        let filtered = filter_orders(orders::dataset(), &filter_state.get());
        summarize(&filtered)
    });

    let active_filters = Signal::derive(move || filter_state.get().active_restrictions());
    let empty_selection = Signal::derive(move || filter_state.get().is_empty_selection());

    let top_categories = Signal::derive(move || {
        summary
            .get()
            .top_categories
            .into_iter()
            .map(|(code, revenue)| (display_category(&code), revenue))
            .collect::<Vec<_>>()
    });
    let monthly_revenue = Signal::derive(move || summary.get().monthly_revenue);
    let region_distribution = Signal::derive(move || {
        summary
            .get()
            .region_distribution
            .into_iter()
            .map(|(code, count)| (display_region(&code), count))
            .collect::<Vec<_>>()
    });

    let cards = kpi_catalog()
        .into_iter()
        .map(|meta| {
            let id = meta.id.clone();
            let value = Signal::derive(move || kpi_value(&id, &summary.get()));
            view! {
                <StatCard
                    label=meta.label
                    icon_name=meta.icon
                    value=value
                    format=meta.format
                />
            }
        })
        .collect_view();

    view! {
        <div id="d100_purchase_behavior--dashboard" data-page-category="dashboard" class="page page--dashboard">
            <div class="page__header">
                <h2 class="page__title">"Поведение покупателей"</h2>
                <span class="page__subtitle">
                    {move || format!("Заказов: {}", format_thousands(summary.get().order_count as i64))}
                </span>
            </div>

            <FilterPanel is_expanded=filters_expanded active_filters_count=active_filters>
                <div class="dashboard__selectors">
                    <div class="dashboard__selector">
                        <div class="dashboard__selector-title">"Регион"</div>
                        <CheckboxGroup value=selected_regions>
                            {Region::all().into_iter().map(|region| {
                                view! {
                                    <Checkbox
                                        value=region.to_string()
                                        label=region.display_name().to_string()
                                    />
                                }
                            }).collect_view()}
                        </CheckboxGroup>
                    </div>
                    <div class="dashboard__selector">
                        <div class="dashboard__selector-title">"Пол"</div>
                        <CheckboxGroup value=selected_genders>
                            {Gender::all().into_iter().map(|gender| {
                                view! {
                                    <Checkbox
                                        value=gender.to_string()
                                        label=gender.display_name().to_string()
                                    />
                                }
                            }).collect_view()}
                        </CheckboxGroup>
                    </div>
                </div>
            </FilterPanel>

            {move || {
                if empty_selection.get() {
                    Some(view! {
                        <div class="alert alert--info">
                            "Не выбрано ни одного значения — отметьте регион и пол, чтобы увидеть данные"
                        </div>
                    })
                } else {
                    None
                }
            }}

            <div class="dashboard__kpi-row">
                {cards}
            </div>

            <div class="dashboard__charts">
                <div class="dashboard__chart-card">
                    <h3 class="dashboard__chart-title">"Топ категорий по выручке"</h3>
                    <BarChart data=top_categories />
                </div>
                <div class="dashboard__chart-card">
                    <h3 class="dashboard__chart-title">"Выручка по месяцам"</h3>
                    <LineChart data=monthly_revenue />
                </div>
                <div class="dashboard__chart-card">
                    <h3 class="dashboard__chart-title">"Покупатели по регионам"</h3>
                    <PieChart data=region_distribution />
                </div>
            </div>
        </div>
    }
}

/// Значение KPI из сводки по идентификатору карточки
fn kpi_value(id: &str, summary: &DashboardSummary) -> Option<f64> {
    match id {
        "total_revenue" => Some(summary.total_revenue),
        "distinct_customers" => Some(summary.distinct_customers as f64),
        "avg_order_value" => summary.avg_order_value,
        "repeat_customer_pct" => summary.repeat_customer_pct,
        _ => None,
    }
}

fn display_category(code: &str) -> String {
    Category::from_code(code)
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

fn display_region(code: &str) -> String {
    Region::from_code(code)
        .map(|r| r.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}
