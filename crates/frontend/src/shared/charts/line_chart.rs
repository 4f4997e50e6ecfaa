use crate::shared::format::format_chart_value;
use leptos::prelude::*;

const WIDTH: f64 = 460.0;
const HEIGHT: f64 = 220.0;
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 14.0;
const MARGIN_BOTTOM: f64 = 30.0;

/// Линейный график по парам (метка, значение). Ось X — метки в порядке
/// следования, ось Y — от нуля до максимума ряда.
#[component]
pub fn LineChart(
    /// Points in display order
    #[prop(into)]
    data: Signal<Vec<(String, f64)>>,
) -> impl IntoView {
    view! {
        <div class="chart chart--line">
            {move || {
                let rows = data.get();
                if rows.is_empty() {
                    return view! { <div class="chart__empty">"Нет данных"</div> }.into_any();
                }

                let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0);
                let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
                let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
                let baseline = MARGIN_TOP + plot_height;

                let point_x = |i: usize| {
                    if rows.len() > 1 {
                        MARGIN_LEFT + i as f64 * plot_width / (rows.len() - 1) as f64
                    } else {
                        MARGIN_LEFT + plot_width / 2.0
                    }
                };
                let point_y = |v: f64| MARGIN_TOP + (1.0 - v / max) * plot_height;

                let points: String = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (_, v))| format!("{:.1},{:.1}", point_x(i), point_y(*v)))
                    .collect::<Vec<_>>()
                    .join(" ");

                let markers = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (label, value))| {
                        let x = point_x(i);
                        let y = point_y(*value);
                        view! {
                            <circle class="chart__marker" cx=format!("{x:.1}") cy=format!("{y:.1}") r="3"></circle>
                            <text
                                class="chart__point-value"
                                x=format!("{x:.1}")
                                y=format!("{}", y - 8.0)
                                text-anchor="middle"
                            >{format_chart_value(*value)}</text>
                            <text
                                class="chart__tick"
                                x=format!("{x:.1}")
                                y=format!("{}", baseline + 18.0)
                                text-anchor="middle"
                            >{label.clone()}</text>
                        }
                    })
                    .collect_view();

                view! {
                    <svg
                        viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                        width="100%"
                        preserveAspectRatio="xMidYMid meet"
                        role="img"
                    >
                        // ось Y: ноль и максимум
                        <line class="chart__axis" x1=format!("{MARGIN_LEFT}") y1=format!("{MARGIN_TOP}") x2=format!("{MARGIN_LEFT}") y2=format!("{baseline}")></line>
                        <line class="chart__axis" x1=format!("{MARGIN_LEFT}") y1=format!("{baseline}") x2=format!("{}", WIDTH - MARGIN_RIGHT) y2=format!("{baseline}")></line>
                        <text class="chart__tick" x=format!("{}", MARGIN_LEFT - 6.0) y=format!("{}", MARGIN_TOP + 4.0) text-anchor="end">{format_chart_value(max)}</text>
                        <text class="chart__tick" x=format!("{}", MARGIN_LEFT - 6.0) y=format!("{}", baseline + 4.0) text-anchor="end">"0"</text>
                        <polyline class="chart__line" fill="none" points=points></polyline>
                        {markers}
                    </svg>
                }.into_any()
            }}
        </div>
    }
}
