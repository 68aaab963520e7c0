//! Pure projection from application state to the terminal frame
//!
//! `draw` recomputes the whole view from the current `{loading, data,
//! error}` triple plus the card cursor; it mutates nothing.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::{App, SKELETON_CARDS};
use crate::tui::widgets::{series_points, trend_chart};
use crate::types::{DemandLevel, ProductTrend, TrendDirection};

const CARDS_PER_PAGE: usize = 4;

/// Tag color for a trend direction: up is positive, down negative,
/// stable neutral.
pub fn trend_color(trend: TrendDirection) -> Color {
    match trend {
        TrendDirection::Up => Color::Green,
        TrendDirection::Down => Color::Red,
        TrendDirection::Stable => Color::Yellow,
    }
}

/// Badge style for a demand level: strong, soft, default.
pub fn demand_style(level: DemandLevel) -> Style {
    match level {
        DemandLevel::High => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        DemandLevel::Medium => Style::default().fg(Color::Blue),
        DemandLevel::Low => Style::default().fg(Color::DarkGray),
    }
}

/// History chart color follows the trend tag of its card.
pub fn chart_color(trend: TrendDirection) -> Color {
    match trend {
        TrendDirection::Up => Color::Green,
        _ => Color::Red,
    }
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let mut constraints = vec![
        Constraint::Length(3), // header
        Constraint::Length(4), // market overview
    ];
    if app.error.is_some() {
        constraints.push(Constraint::Length(3)); // error banner
    }
    constraints.push(Constraint::Length(5)); // top opportunities
    constraints.push(Constraint::Min(10)); // product cards

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut idx = 0;
    render_header(frame, chunks[idx], app);
    idx += 1;
    render_overview(frame, chunks[idx], app);
    idx += 1;
    if let Some(message) = &app.error {
        render_error(frame, chunks[idx], message);
        idx += 1;
    }
    render_opportunities(frame, chunks[idx], app);
    idx += 1;
    render_cards(frame, chunks[idx], app);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let status = if app.loading {
        Span::styled("Analisando...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("IA Conectada", Style::default().fg(Color::Green))
    };

    let line = Line::from(vec![
        Span::styled(
            "Kizua Trends",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Mercado: Angola (Luanda)  "),
        status,
        Span::styled(
            "  [r] Atualizar  [↑/↓] Navegar  [q] Sair",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(header, area);
}

fn render_overview(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let text = app
        .data
        .as_ref()
        .map(|d| d.market_overview.as_str())
        .unwrap_or("Aguardando análise da IA sobre o mercado angolano...");

    let overview = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Monitoramento de Tendências"),
        );
    frame.render_widget(overview, area);
}

fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let banner = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(banner, area);
}

fn render_opportunities(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Top Oportunidades");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(data) = &app.data else {
        return;
    };

    // Only the first three entries, in response order
    let shown: Vec<&String> = data.top_opportunities.iter().take(3).collect();
    if shown.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, shown.len() as u32);
            shown.len()
        ])
        .split(inner);

    for (i, (text, column)) in shown.iter().zip(columns.iter()).enumerate() {
        let cell = Paragraph::new(text.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Oportunidade #{}", i + 1))
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(cell, *column);
    }
}

fn render_cards(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Produtos Identificados");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots = card_slots(inner);

    if app.loading {
        // Fixed skeleton placeholders, regardless of previous data
        for slot in slots.iter().take(SKELETON_CARDS) {
            let skeleton = Block::default()
                .borders(Borders::ALL)
                .title("▒▒▒")
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(skeleton, *slot);
        }
        return;
    }

    let Some(data) = &app.data else {
        return;
    };

    // Page of cards around the cursor
    let start = (app.selected_card / CARDS_PER_PAGE) * CARDS_PER_PAGE;
    for (offset, slot) in slots.iter().enumerate() {
        let index = start + offset;
        let Some(product) = data.trends.get(index) else {
            break;
        };
        render_card(frame, *slot, product, index == app.selected_card);
    }
}

/// Split the card area into a 2x2 grid.
fn card_slots(area: Rect) -> Vec<Rect> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut slots = Vec::with_capacity(CARDS_PER_PAGE);
    for row in rows.iter() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        slots.extend(columns.iter().copied());
    }
    slots
}

fn render_card(frame: &mut Frame<'_>, area: Rect, product: &ProductTrend, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(product.name.as_str())
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // badges + growth
            Constraint::Length(1), // category
            Constraint::Length(1), // keywords
            Constraint::Length(2), // reasoning
            Constraint::Length(1), // opportunity score gauge
            Constraint::Min(3),    // history chart
        ])
        .split(inner);

    let growth_sign = if product.growth_percentage >= 0.0 { "+" } else { "" };
    let badges = Line::from(vec![
        Span::styled(
            format!(" Procura {} ", product.demand_level.label()),
            demand_style(product.demand_level),
        ),
        Span::raw(" "),
        Span::styled(
            product.trend.label(),
            Style::default().fg(trend_color(product.trend)),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}{}%", growth_sign, product.growth_percentage),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(badges), sections[0]);

    frame.render_widget(
        Paragraph::new(product.category.as_str()).style(Style::default().fg(Color::DarkGray)),
        sections[1],
    );

    frame.render_widget(
        Paragraph::new(product.keywords.join(" · "))
            .style(Style::default().fg(Color::DarkGray)),
        sections[2],
    );

    frame.render_widget(
        Paragraph::new(format!("\"{}\"", product.reasoning))
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true }),
        sections[3],
    );

    let score = product.opportunity_score.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .ratio(score / 100.0)
        .label(format!("Score {:.0}/100", product.opportunity_score))
        .gauge_style(Style::default().fg(Color::Blue));
    frame.render_widget(gauge, sections[4]);

    let points = series_points(&product.history);
    frame.render_widget(
        trend_chart(&points, Some(chart_color(product.trend))),
        sections[5],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::ANALYSIS_ERROR_MESSAGE;
    use crate::types::MarketAnalysisResponse;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn sample_response() -> MarketAnalysisResponse {
        serde_json::from_str(
            r#"{
                "trends": [{
                    "id": "1",
                    "name": "Smartphones Importados",
                    "category": "Eletrônicos",
                    "demandLevel": "Alta",
                    "trend": "Subindo",
                    "growthPercentage": 32,
                    "keywords": ["iphone"],
                    "opportunityScore": 88,
                    "reasoning": "Alta procura por importação direta",
                    "history": [
                        {"date": "2024-01-01", "value": 10},
                        {"date": "2024-01-02", "value": 14}
                    ]
                }],
                "marketOverview": "Mercado em expansão",
                "topOpportunities": ["Eletrônicos", "Agro", "Energia", "Moda"]
            }"#,
        )
        .unwrap()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(160, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_loading_renders_four_skeletons() {
        let mut app = App::new();
        app.begin_refresh();

        let text = render(&app);
        assert_eq!(text.matches("▒▒▒").count(), SKELETON_CARDS);
        assert!(text.contains("Analisando..."));
    }

    #[test]
    fn test_loaded_card_shows_badge_and_trend() {
        let mut app = App::new();
        let seq = app.begin_refresh();
        app.apply_outcome((seq, Ok(sample_response())));

        let text = render(&app);
        assert!(text.contains("Smartphones Importados"));
        assert!(text.contains("Procura Alta"));
        assert!(text.contains("Subindo"));
        assert!(text.contains("+32%"));
        assert!(text.contains("Mercado em expansão"));
    }

    #[test]
    fn test_only_first_three_opportunities_shown() {
        let mut app = App::new();
        let seq = app.begin_refresh();
        app.apply_outcome((seq, Ok(sample_response())));

        let text = render(&app);
        assert!(text.contains("Oportunidade #1"));
        assert!(text.contains("Oportunidade #3"));
        assert!(!text.contains("Moda"));
    }

    #[test]
    fn test_error_banner_shows_fixed_message() {
        let mut app = App::new();
        let seq = app.begin_refresh();
        app.apply_outcome((seq, Err(crate::errors::AnalysisError::EmptyReply)));

        let text = render(&app);
        assert!(text.contains(ANALYSIS_ERROR_MESSAGE));
    }

    #[test]
    fn test_loading_hides_previous_cards_behind_skeletons() {
        let mut app = App::new();
        let seq = app.begin_refresh();
        app.apply_outcome((seq, Ok(sample_response())));
        app.begin_refresh();

        let text = render(&app);
        assert_eq!(text.matches("▒▒▒").count(), SKELETON_CARDS);
        assert!(!text.contains("Smartphones Importados"));
    }

    #[test]
    fn test_color_mappings() {
        assert_eq!(trend_color(TrendDirection::Up), Color::Green);
        assert_eq!(trend_color(TrendDirection::Down), Color::Red);
        assert_eq!(trend_color(TrendDirection::Stable), Color::Yellow);
        assert_eq!(chart_color(TrendDirection::Stable), Color::Red);
        assert!(demand_style(DemandLevel::High)
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
