//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).
//!
//! ## For contributors
//!
//! * The layout is a two-row split: the main panel on top and a one-line
//!   status bar at the bottom.
//! * The main panel depends on the listing status: a loading message, an
//!   error message, or the product list.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::controller::ListingStatus;
use crate::source::Product;

const TITLE: &str = " Products ";

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]);
    let [main_area, status_area] = layout.areas(frame.area());

    match app.current_status() {
        Some(ListingStatus::Done) => draw_product_list(app, frame, main_area),
        Some(ListingStatus::Error) => {
            draw_message(frame, main_area, "Could not load products.", Color::Red)
        }
        Some(ListingStatus::Loading) | None => {
            draw_message(frame, main_area, "Loading products…", Color::Yellow)
        }
    }
    draw_status_bar(app, frame, status_area);
}

/// Centered one-line notice inside the main block.
fn draw_message(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let message = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().title(TITLE).borders(Borders::ALL));
    frame.render_widget(message, area);
}

fn product_line(product: &Product) -> Line<'static> {
    let id = product
        .id()
        .map(|id| format!("#{id:<5}"))
        .unwrap_or_else(|| format!("{:<6}", "#?"));
    let price = product
        .price()
        .map(|p| format!("{p:>9.2}"))
        .unwrap_or_else(|| format!("{:>9}", "-"));

    let mut spans = vec![
        Span::styled(id, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(price, Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(
            product.title().to_string(),
            Style::default().fg(Color::White),
        ),
    ];
    if let Some(description) = product.description() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            description.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(thumbnail) = product.thumbnail() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("[{thumbnail}]"), Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// Render the scrollable product list.
fn draw_product_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app.items.with(|items| {
        items
            .iter()
            .map(|p| ListItem::new(product_line(p)))
            .collect()
    });

    let list = List::new(list_items)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let label = app
        .current_status()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Starting…".into());

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} items", app.item_count()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  q: quit  ↑/↓: scroll  Home/End: jump"),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{harness, sample_items};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use serde_json::json;

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_loading_before_anything_is_published() {
        let mut h = harness();
        let text = render(&mut h.app);
        assert!(text.contains("Loading products"));
        assert!(text.contains("Starting"));
    }

    #[test]
    fn shows_loading_indicator() {
        let mut h = harness();
        h.status.publish(Some(ListingStatus::Loading));
        let text = render(&mut h.app);
        assert!(text.contains("Loading products"));
        assert!(text.contains("0 items"));
    }

    #[test]
    fn shows_error_indicator() {
        let mut h = harness();
        h.status.publish(Some(ListingStatus::Error));
        let text = render(&mut h.app);
        assert!(text.contains("Could not load products"));
        assert!(!text.contains("Loading products"));
    }

    #[test]
    fn shows_products_when_done() {
        let mut h = harness();
        h.items.publish(sample_items());
        h.status.publish(Some(ListingStatus::Done));
        h.app.select_first();

        let text = render(&mut h.app);
        assert!(text.contains("Phone"));
        assert!(text.contains("Laptop"));
        assert!(text.contains("Perfume"));
        assert!(text.contains("3 items"), "status bar should show item count");
        assert!(text.contains("Done"));
    }

    #[test]
    fn product_line_includes_price_and_thumbnail() {
        let product = Product::new(4, "Watch")
            .with("price", json!(12.5))
            .with("description", json!("Water resistant"))
            .with("thumbnail", json!("t.jpg"));

        let text: String = product_line(&product)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("12.50"));
        assert!(text.contains("Watch"));
        assert!(text.contains("Water resistant"));
        assert!(text.contains("[t.jpg]"));
    }

    #[test]
    fn product_line_tolerates_missing_fields() {
        let product: Product = serde_json::from_value(json!({ "title": null })).unwrap();

        let text: String = product_line(&product)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.starts_with("#?"));
        assert!(text.contains("-"));
    }
}
