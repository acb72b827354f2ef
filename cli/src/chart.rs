use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding, Paragraph},
};
use timetally_core::{Palette, Report};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan, // Highlights
    muted: Color::DarkGray,
    text: Color::White,
};

/// Full-screen proportional chart of the report. The terminal stand-in for
/// the pie chart: one colored bar per employee, sized by worked hours.
pub fn run(report: &Report, palette: &Palette) -> Result<()> {
    if report.is_empty() {
        println!("No entries to chart.");
        return Ok(());
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui(f, report, palette))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn palette_color(palette: &Palette, index: usize) -> Color {
    let (r, g, b) = palette.color_at(index).to_rgb();
    Color::Rgb(r, g, b)
}

fn ui(frame: &mut Frame, report: &Report, palette: &Palette) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + Summary
            Constraint::Length(1), // Footer / Help
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));
    let app_title = Paragraph::new(Line::from(vec![
        Span::styled(
            "TIMETALLY",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Hours by Employee", Style::default().fg(THEME.text)),
    ]))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, main_layout[0]);
    frame.render_widget(header_block, main_layout[0]);

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Chart Area
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(30), // Summary Panel
        ])
        .split(main_layout[1]);

    draw_chart(frame, report, palette, content_chunks[0]);
    draw_summary(frame, report, palette, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q / Esc", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_chart(frame: &mut Frame, report: &Report, palette: &Palette, area: Rect) {
    // Bar values carry one decimal of precision (x10, shown as /10).
    let bar_items: Vec<Bar> = report
        .totals
        .iter()
        .enumerate()
        .map(|(i, total)| {
            Bar::default()
                .label(total.name.as_str())
                .value((total.total_hours * 10.0).round() as u64)
                .style(Style::default().fg(palette_color(palette, i)))
                .text_value(format!("{:.1}", total.total_hours))
        })
        .collect();

    let max_value = report
        .totals
        .iter()
        .map(|t| (t.total_hours * 10.0).round() as u64)
        .max()
        .unwrap_or(0);

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Worked Hours ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(9)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items))
        .max(max_value.max(1));

    frame.render_widget(chart, area);
}

fn draw_summary(frame: &mut Frame, report: &Report, palette: &Palette, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Overview",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Employees: ", Style::default().fg(THEME.muted)),
            Span::styled(
                report.totals.len().to_string(),
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total:     ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{:.2}h", report.grand_total_hours),
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    // Per-slice tooltip lines in palette colors, largest first.
    for (i, total) in report.totals.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(palette_color(palette, i))),
            Span::styled(
                report.tooltip(&total.name, total.total_hours),
                Style::default().fg(THEME.text),
            ),
        ]));
    }

    if report.skipped.any() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} entries skipped", report.skipped.total()),
            Style::default().fg(THEME.muted),
        )));
    }

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(summary, area);
}
