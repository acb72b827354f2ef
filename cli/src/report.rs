use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use timetally_core::{Palette, Report};
use unicode_width::UnicodeWidthStr;

const BREAKDOWN_WIDTH: usize = 40;

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Employee")]
    employee: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Share")]
    share: String,
}

pub fn print_report(report: &Report, palette: &Palette) {
    if report.is_empty() {
        println!("No entries to report.");
        print_skip_note(report);
        return;
    }

    let rows: Vec<ReportRow> = report
        .totals
        .iter()
        .enumerate()
        .map(|(i, total)| ReportRow {
            rank: i + 1,
            employee: total.name.clone(),
            hours: format!("{:.2}", total.total_hours),
            share: format!("{:.1}%", report.share_percent(total.total_hours)),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    println!("{}", table);
    println!("Grand total: {:.2}h", report.grand_total_hours);

    // --- Breakdown ---
    // One line per employee: the tooltip string, then a bar colored with the
    // same palette slot the chart series uses.
    println!();
    let labels: Vec<String> = report
        .totals
        .iter()
        .map(|t| report.tooltip(&t.name, t.total_hours))
        .collect();
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    for (i, total) in report.totals.iter().enumerate() {
        let (r, g, b) = palette.color_at(i).to_rgb();
        let label = &labels[i];
        let pad = " ".repeat(label_width.saturating_sub(label.width()));
        let bar = "█".repeat(bar_width(
            total.total_hours,
            report.grand_total_hours,
            BREAKDOWN_WIDTH,
        ));
        println!("{label}{pad}  \x1b[38;2;{r};{g};{b}m{bar}\x1b[0m");
    }

    print_skip_note(report);
}

fn print_skip_note(report: &Report) {
    if report.skipped.any() {
        println!(
            "\nNote: {} entries skipped ({} missing name, {} soft-deleted, {} bad timestamps).",
            report.skipped.total(),
            report.skipped.missing_name,
            report.skipped.soft_deleted,
            report.skipped.bad_timestamps
        );
    }
}

/// Bar length proportional to the share of the grand total. Non-zero values
/// always get at least one cell so small slices stay visible.
fn bar_width(value: f64, grand_total: f64, max_width: usize) -> usize {
    if grand_total <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cells = (value / grand_total * max_width as f64).round() as usize;
    cells.clamp(1, max_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(5.0, 10.0, 40), 20);
        assert_eq!(bar_width(10.0, 10.0, 40), 40);
        assert_eq!(bar_width(0.0, 10.0, 40), 0);
        assert_eq!(bar_width(0.001, 10.0, 40), 1); // tiny but visible
        assert_eq!(bar_width(1.0, 0.0, 40), 0); // no data, no bar
    }
}
