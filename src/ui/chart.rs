//! Terminal rendering for chart data: percentage bars for pies,
//! scaled horizontal bars for bar charts.

use crate::core::charts::{ChartData, ChartKind};
use crate::i18n::{Language, tr};
use crate::utils::colors::{self, BLUE, CYAN, GREEN, MAGENTA, YELLOW};
use crate::utils::format_currency;
use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 40;
const PALETTE: [&str; 5] = [BLUE, GREEN, YELLOW, MAGENTA, CYAN];

fn bar(len: usize, color: &str) -> String {
    colors::paint(color, &"█".repeat(len))
}

fn format_value(data: &ChartData, v: f64, currency: &str) -> String {
    if data.money {
        format_currency(v, currency)
    } else if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

pub fn render(data: &ChartData, lang: Language, currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&colors::paint(CYAN, &format!("▶ {}", tr(lang, &data.title))));
    out.push('\n');

    if data.series.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let labels: Vec<String> = data
        .series
        .iter()
        .map(|(k, v)| match data.kind {
            ChartKind::Pie => format!("{} ({})", k, format_value(data, *v, currency)),
            ChartKind::Bar => k.clone(),
        })
        .collect();
    let label_w = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    let total = data.total();
    let max = data
        .series
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);

    for (i, ((_, value), label)) in data.series.iter().zip(&labels).enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        match data.kind {
            ChartKind::Pie => {
                let share = if total > 0.0 { value / total } else { 0.0 };
                let len = (share * BAR_WIDTH as f64).round() as usize;
                out.push_str(&format!(
                    "  {} │{} {:.1}%\n",
                    pad_right(label, label_w),
                    bar(len, color),
                    share * 100.0
                ));
            }
            ChartKind::Bar => {
                let len = if max > 0.0 {
                    ((value / max) * BAR_WIDTH as f64).round() as usize
                } else {
                    0
                };
                out.push_str(&format!(
                    "  {} │{} {}\n",
                    pad_right(label, label_w),
                    bar(len, color),
                    format_value(data, *value, currency)
                ));
            }
        }
    }

    out
}
