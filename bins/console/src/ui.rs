//! Rendering for the terminal dashboard.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, Tabs};

use arca_core::notify::NoticeLevel;
use arca_core::theme::Theme;

use crate::app::{App, FormModel, FormState, Modal, Page};

/// Resolved colors for the active theme.
#[derive(Clone, Copy)]
pub struct Palette {
    bg: Color,
    fg: Color,
    accent: Color,
    dim: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Reset,
                fg: Color::White,
                accent: Color::Cyan,
                dim: Color::DarkGray,
            },
            Theme::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                accent: Color::Blue,
                dim: Color::Gray,
            },
        }
    }
}

/// Draws one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme.current());
    let [tabs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        frame.area(),
    );

    draw_tabs(frame, tabs_area, app, palette);
    match app.page {
        Page::Summary => draw_summary(frame, body_area, app, palette),
        Page::Assets => draw_assets(frame, body_area, app, palette),
        Page::Liabilities => draw_liabilities(frame, body_area, app, palette),
        Page::Obligations => draw_obligations(frame, body_area, app, palette),
    }
    draw_status(frame, status_area, app, palette);

    match &app.modal {
        Modal::None => {}
        Modal::ConfirmDelete => draw_confirm(frame, palette),
        Modal::AssetForm(state) => draw_form(frame, "Asset", state, palette),
        Modal::LiabilityForm(state) => draw_form(frame, "Liability", state, palette),
        Modal::ObligationForm(state) => draw_form(frame, "Obligation", state, palette),
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let index = Page::ALL
        .iter()
        .position(|p| *p == app.page)
        .unwrap_or_default();
    let tabs = Tabs::new(Page::ALL.iter().map(|p| p.title()))
        .select(index)
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Arca"));
    frame.render_widget(tabs, area);
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let block = Block::default().borders(Borders::ALL).title("Portfolio");
    let lines = if let Some(err) = &app.load_error {
        vec![
            Line::from(Span::styled(
                format!("Could not load summary: {err}"),
                Style::default().fg(Color::Red),
            )),
            Line::from("Press r to retry"),
        ]
    } else if let Some(summary) = &app.summary_view {
        let mut lines = vec![
            Line::from(format!("Net worth:          {}", summary.total_net_worth)),
            Line::from(format!(
                "Monthly income:     {}",
                summary.monthly_passive_income
            )),
            Line::from(format!("Annual income:      {}", summary.total_annual_income)),
            Line::from(format!("Portfolio yield:    {}%", summary.portfolio_yield)),
            Line::from(format!("Assets:             {}", summary.asset_count)),
            Line::from(""),
        ];
        if !summary.top_income_generators.is_empty() {
            lines.push(Line::from(Span::styled(
                "Top income generators",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for entry in &summary.top_income_generators {
                lines.push(Line::from(format!(
                    "  {}. {} ({}/yr, {}%)",
                    entry.rank, entry.asset_name, entry.annual_income, entry.percentage_of_total
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Generated at {}", summary.generated_at),
            Style::default().fg(palette.dim),
        )));
        lines
    } else {
        vec![Line::from("Loading...")]
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn collection_area(frame: &mut Frame, area: Rect, app: &App, palette: Palette) -> Rect {
    let [search_area, table_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let style = if app.searching {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let search = Paragraph::new(app.search.as_str())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Search (/)"));
    frame.render_widget(search, search_area);

    table_area
}

fn draw_load_error(frame: &mut Frame, area: Rect, title: &str, err: &arca_shared::AppError) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Could not load {}: {err}", title.to_lowercase()),
            Style::default().fg(Color::Red),
        )),
        Line::from("Press r to retry"),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string())),
        area,
    );
}

struct TableView {
    title: &'static str,
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    widths: Vec<Constraint>,
}

fn render_table(frame: &mut Frame, area: Rect, view: TableView, selected: usize, palette: Palette) {
    let header_row = Row::new(view.header).style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );
    let body = view.rows.into_iter().enumerate().map(|(i, cells)| {
        let row = Row::new(cells);
        if i == selected {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        }
    });
    let table = Table::new(body, view.widths)
        .header(header_row)
        .block(Block::default().borders(Borders::ALL).title(view.title));
    frame.render_widget(table, area);
}

fn draw_assets(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let table_area = collection_area(frame, area, app, palette);
    if let Some(err) = &app.load_error {
        draw_load_error(frame, table_area, "Assets", err);
        return;
    }
    let rows = app
        .asset_rows
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.asset_type.clone().unwrap_or_default(),
                a.display_value().to_string(),
                a.yield_percentage
                    .map(|y| format!("{y}%"))
                    .unwrap_or_default(),
                a.monthly_income().to_string(),
                a.currency.clone(),
            ]
        })
        .collect();
    let view = TableView {
        title: "Assets",
        header: vec!["Name", "Type", "Value", "Yield", "Monthly", "Currency"],
        rows,
        widths: vec![
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    };
    render_table(frame, table_area, view, app.selected, palette);
}

fn draw_liabilities(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let table_area = collection_area(frame, area, app, palette);
    if let Some(err) = &app.load_error {
        draw_load_error(frame, table_area, "Liabilities", err);
        return;
    }
    let rows = app
        .liability_rows
        .iter()
        .map(|l| {
            vec![
                l.name.clone(),
                l.liability_type.clone(),
                l.current_balance.to_string(),
                l.monthly_payment.to_string(),
                format!("{}%", l.interest_rate),
                l.creditor.clone(),
            ]
        })
        .collect();
    let view = TableView {
        title: "Liabilities",
        header: vec!["Name", "Type", "Balance", "Payment", "Rate", "Creditor"],
        rows,
        widths: vec![
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(14),
        ],
    };
    render_table(frame, table_area, view, app.selected, palette);
}

fn draw_obligations(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let table_area = collection_area(frame, area, app, palette);
    if let Some(err) = &app.load_error {
        draw_load_error(frame, table_area, "Obligations", err);
        return;
    }
    let rows = app
        .obligation_rows
        .iter()
        .map(|o| {
            vec![
                o.name.clone(),
                o.obligation_type.clone(),
                o.monthly_amount.to_string(),
                o.beneficiary.clone(),
                o.end_date.map(|d| d.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    let view = TableView {
        title: "Obligations",
        header: vec!["Name", "Type", "Monthly", "Beneficiary", "End date"],
        rows,
        widths: vec![
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Min(14),
            Constraint::Length(12),
        ],
    };
    render_table(frame, table_area, view, app.selected, palette);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, palette: Palette) {
    let hint = match &app.modal {
        Modal::None if app.searching => "type to filter | Enter done | Esc clear",
        Modal::None => "Tab pages | / search | n new | e edit | d delete | r refresh | t theme | q quit",
        Modal::ConfirmDelete => "y confirm | n cancel",
        _ => "Tab next field | Left/Right choose | Enter save | Esc cancel",
    };

    let line = match app.notices.latest() {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(notice.message, Style::default().fg(color)),
                Span::styled(format!("   {hint}"), Style::default().fg(palette.dim)),
            ])
        }
        None => Line::from(Span::styled(hint, Style::default().fg(palette.dim))),
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_form<F: FormModel>(frame: &mut Frame, title: &str, state: &FormState<F>, palette: Palette) {
    let area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, label) in F::LABELS.iter().enumerate() {
        let value = state.form.value(i);
        let style = if i == state.focus {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{label:>16}: {value}"),
            style,
        )));
    }
    if !state.errors.is_empty() {
        lines.push(Line::from(""));
        for err in &state.errors {
            lines.push(Line::from(Span::styled(
                format!("{}: {}", err.field, err.message),
                Style::default().fg(Color::Red),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().bg(palette.bg).fg(palette.fg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_confirm(frame: &mut Frame, palette: Palette) {
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Confirm delete")
        .style(Style::default().bg(palette.bg).fg(palette.fg));
    let body = Paragraph::new(vec![
        Line::from("Delete the selected record?"),
        Line::from(""),
        Line::from(Span::styled(
            "y: delete    n: keep",
            Style::default().fg(palette.dim),
        )),
    ])
    .block(block);
    frame.render_widget(body, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
