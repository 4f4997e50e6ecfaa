use leptos::prelude::*;
use std::f64::consts::PI;

const CX: f64 = 100.0;
const CY: f64 = 100.0;
const R: f64 = 82.0;
const LABEL_R: f64 = 52.0;
const LEGEND_X: f64 = 212.0;

/// Круговая диаграмма по парам (метка, счётчик). Доли идут по часовой
/// стрелке от верхней точки; подпись с процентом — внутри сектора.
#[component]
pub fn PieChart(
    /// Slices in display order
    #[prop(into)]
    data: Signal<Vec<(String, usize)>>,
) -> impl IntoView {
    view! {
        <div class="chart chart--pie">
            {move || {
                let rows = data.get();
                let total: usize = rows.iter().map(|(_, n)| n).sum();
                if total == 0 {
                    return view! { <div class="chart__empty">"Нет данных"</div> }.into_any();
                }

                let mut angle = 0.0_f64;
                let slices = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (_, count))| {
                        let fraction = *count as f64 / total as f64;
                        let start = angle;
                        let sweep = fraction * 2.0 * PI;
                        angle += sweep;

                        let mid = start + sweep / 2.0;
                        let label_x = CX + LABEL_R * mid.sin();
                        let label_y = CY - LABEL_R * mid.cos();
                        let pct_text = format!("{:.1}%", fraction * 100.0).replace('.', ",");

                        let shape = if fraction >= 0.9999 {
                            // единственный сектор — полный круг
                            view! {
                                <circle
                                    class=format!("chart__slice chart__slice--{i}")
                                    cx=format!("{CX}")
                                    cy=format!("{CY}")
                                    r=format!("{R}")
                                ></circle>
                            }.into_any()
                        } else {
                            let x0 = CX + R * start.sin();
                            let y0 = CY - R * start.cos();
                            let end = start + sweep;
                            let x1 = CX + R * end.sin();
                            let y1 = CY - R * end.cos();
                            let large = if fraction > 0.5 { 1 } else { 0 };
                            let d = format!(
                                "M {CX:.2} {CY:.2} L {x0:.2} {y0:.2} A {R:.2} {R:.2} 0 {large} 1 {x1:.2} {y1:.2} Z"
                            );
                            view! {
                                <path class=format!("chart__slice chart__slice--{i}") d=d></path>
                            }.into_any()
                        };

                        view! {
                            {shape}
                            <text
                                class="chart__pct"
                                x=format!("{label_x:.1}")
                                y=format!("{label_y:.1}")
                                text-anchor="middle"
                                dominant-baseline="central"
                            >{pct_text}</text>
                        }
                    })
                    .collect_view();

                let legend = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (label, count))| {
                        let y = 46.0 + i as f64 * 26.0;
                        view! {
                            <rect
                                class=format!("chart__slice chart__slice--{i}")
                                x=format!("{LEGEND_X}")
                                y=format!("{}", y - 10.0)
                                width="12"
                                height="12"
                                rx="2"
                            ></rect>
                            <text
                                class="chart__label"
                                x=format!("{}", LEGEND_X + 20.0)
                                y=format!("{y}")
                                dominant-baseline="central"
                            >{format!("{} ({})", label, count)}</text>
                        }
                    })
                    .collect_view();

                view! {
                    <svg
                        viewBox="0 0 340 200"
                        width="100%"
                        preserveAspectRatio="xMidYMid meet"
                        role="img"
                    >
                        {slices}
                        {legend}
                    </svg>
                }.into_any()
            }}
        </div>
    }
}
