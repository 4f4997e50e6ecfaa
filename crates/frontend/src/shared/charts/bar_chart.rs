use crate::shared::format::format_chart_value;
use leptos::prelude::*;

const WIDTH: f64 = 460.0;
const LABEL_WIDTH: f64 = 120.0;
const VALUE_WIDTH: f64 = 64.0;
const BAR_HEIGHT: f64 = 24.0;
const BAR_GAP: f64 = 10.0;

/// Горизонтальная столбчатая диаграмма по парам (метка, значение).
/// Порядок строк задаёт вызывающая сторона, здесь только масштабирование.
#[component]
pub fn BarChart(
    /// Rows in display order
    #[prop(into)]
    data: Signal<Vec<(String, f64)>>,
) -> impl IntoView {
    view! {
        <div class="chart chart--bar">
            {move || {
                let rows = data.get();
                if rows.is_empty() {
                    return view! { <div class="chart__empty">"Нет данных"</div> }.into_any();
                }

                let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
                let track_width = WIDTH - LABEL_WIDTH - VALUE_WIDTH;
                let height = rows.len() as f64 * (BAR_HEIGHT + BAR_GAP) - BAR_GAP;

                let bars = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (label, value))| {
                        let y = i as f64 * (BAR_HEIGHT + BAR_GAP);
                        let bar_width = if max > 0.0 { value / max * track_width } else { 0.0 };
                        let mid = BAR_HEIGHT / 2.0;
                        view! {
                            <g transform=format!("translate(0,{y})")>
                                <text
                                    class="chart__label"
                                    x=format!("{}", LABEL_WIDTH - 8.0)
                                    y=format!("{mid}")
                                    text-anchor="end"
                                    dominant-baseline="central"
                                >{label.clone()}</text>
                                <rect
                                    class=format!("chart__bar chart__series--{i}")
                                    x=format!("{LABEL_WIDTH}")
                                    y="0"
                                    width=format!("{bar_width}")
                                    height=format!("{BAR_HEIGHT}")
                                    rx="3"
                                ></rect>
                                <text
                                    class="chart__value"
                                    x=format!("{}", LABEL_WIDTH + bar_width + 6.0)
                                    y=format!("{mid}")
                                    dominant-baseline="central"
                                >{format_chart_value(*value)}</text>
                            </g>
                        }
                    })
                    .collect_view();

                view! {
                    <svg
                        viewBox=format!("0 0 {WIDTH} {height}")
                        width="100%"
                        preserveAspectRatio="xMinYMin meet"
                        role="img"
                    >
                        {bars}
                    </svg>
                }.into_any()
            }}
        </div>
    }
}
