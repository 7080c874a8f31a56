//! Total assets and equity over time as a small SVG line chart.

use common::{format::format_tl, ir_models::FinancialKpi, kpi_analysis::chart_y_max};
use dioxus::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 32.0;

const ASSETS_COLOR: &str = "#881506";
const EQUITY_COLOR: &str = "#0F766E";

/// Points for one series. Periods without a figure are skipped.
fn polyline_points(values: &[Option<f64>], y_max: f64) -> String {
    let step = if values.len() > 1 {
        (WIDTH - 2.0 * PADDING) / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| {
            let v = (*v)?;
            let x = PADDING + step * i as f64;
            let y = HEIGHT - PADDING - (v / y_max) * (HEIGHT - 2.0 * PADDING);
            Some(format!("{x:.1},{y:.1}"))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn TrendChart(kpis: ReadSignal<Vec<FinancialKpi>>) -> Element {
    let kpis = kpis.read().clone();
    let Some(y_max) = chart_y_max(&kpis) else {
        return rsx! {
            p { style: "font-size: 14px; color: #64748B;", "Grafik için yeterli veri yok." }
        };
    };
    let assets: Vec<Option<f64>> = kpis.iter().map(|k| k.total_assets).collect();
    let equity: Vec<Option<f64>> = kpis.iter().map(|k| k.equity).collect();
    let assets_points = polyline_points(&assets, y_max);
    let equity_points = polyline_points(&equity, y_max);
    let step = if kpis.len() > 1 { (WIDTH - 2.0 * PADDING) / (kpis.len() - 1) as f64 } else { 0.0 };
    let labels = kpis.iter().enumerate().map(|(i, k)| {
        let x = PADDING + step * i as f64;
        let y = HEIGHT - 8.0;
        rsx! {
            text {
                x: "{x}",
                y: "{y}",
                "text-anchor": "middle",
                "font-size": "11",
                fill: "#64748B",
                "{k.period}"
            }
        }
    }).collect::<Vec<_>>();
    let y_max_label = format_tl(Some(y_max));
    let baseline_y = HEIGHT - PADDING;
    let baseline_x_end = WIDTH - PADDING;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            svg {
                "viewBox": "0 0 {WIDTH} {HEIGHT}",
                width: "100%",
                height: "{HEIGHT}",
                line {
                    x1: "{PADDING}", y1: "{baseline_y}",
                    x2: "{baseline_x_end}", y2: "{baseline_y}",
                    stroke: "#E5E7EB",
                }
                polyline {
                    points: "{assets_points}",
                    fill: "none",
                    stroke: ASSETS_COLOR,
                    "stroke-width": "2",
                }
                polyline {
                    points: "{equity_points}",
                    fill: "none",
                    stroke: EQUITY_COLOR,
                    "stroke-width": "2",
                }
                {labels.into_iter()}
            }
            div {
                style: "display: flex; flex-direction: row; gap: 16px; font-size: 12px; color: #475569;",
                LegendItem { color: "{ASSETS_COLOR}", label: "Toplam varlıklar" }
                LegendItem { color: "{EQUITY_COLOR}", label: "Özkaynaklar" }
                span { style: "margin-left: auto;", "Üst sınır: {y_max_label}" }
            }
        }
    }
}

#[component]
fn LegendItem(color: String, label: String) -> Element {
    rsx! {
        span {
            style: "display: flex; align-items: center; gap: 6px;",
            span { style: "width: 12px; height: 3px; background: {color}; display: inline-block;" }
            "{label}"
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_skip_missing_periods() {
        let points = polyline_points(&[Some(0.0), None, Some(100.0)], 100.0);
        assert_eq!(points, "32.0,208.0 608.0,32.0");
    }

    #[test]
    fn single_point_sits_on_the_left_edge() {
        assert_eq!(polyline_points(&[Some(50.0)], 100.0), "32.0,120.0");
    }
}
