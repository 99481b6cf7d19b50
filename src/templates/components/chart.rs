// Inline SVG bar chart for the 12-month trend. No client-side script.
use crate::format::{format_compact_currency, format_currency, ChartSeries};
use maud::{html, Markup};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 70.0;
const PAD_BOTTOM: f64 = 30.0;
const PAD_TOP: f64 = 10.0;
const Y_TICKS: usize = 4;

pub fn trend_chart(series: &ChartSeries) -> Markup {
    let plot_w = WIDTH - PAD_LEFT;
    let plot_h = HEIGHT - PAD_BOTTOM - PAD_TOP;
    let slot = plot_w / series.values.len().max(1) as f64;
    let bar_w = slot * 0.6;

    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
            width="100%"
            role="img"
            aria-label="Estimated value over the past 12 months"
            class="trend-chart"
        {
            @for value in series.ticks(Y_TICKS) {
                @let y = PAD_TOP + plot_h * (1.0 - series.fraction(value));
                line x1=(PAD_LEFT) x2=(WIDTH) y1=(fmt(y)) y2=(fmt(y)) stroke="#e5e7eb" stroke-dasharray="3 3" {}
                text x=(PAD_LEFT - 8.0) y=(fmt(y + 4.0)) text-anchor="end" font-size="12" fill="#6b7280" {
                    (format_compact_currency(value))
                }
            }

            @for (i, (label, value)) in series.labels.iter().zip(&series.values).enumerate() {
                @let h = plot_h * series.fraction(*value as f64);
                @let x = PAD_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
                @let y = PAD_TOP + plot_h - h;
                rect x=(fmt(x)) y=(fmt(y)) width=(fmt(bar_w)) height=(fmt(h)) rx="4" fill="#8b5cf6" {
                    title { (label) ": " (format_currency(*value as f64)) }
                }
                text x=(fmt(x + bar_w / 2.0)) y=(fmt(HEIGHT - 10.0)) text-anchor="middle" font-size="12" fill="#374151" {
                    (label)
                }
            }
        }
    }
}

fn fmt(v: f64) -> String {
    format!("{v:.1}")
}
