use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{COUNTER_ACCENT, GLOBAL_BORDER, NEGATIVE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (body, footer) = layout_regions(frame.area());

    let count = app.count();
    let color = if count < 0 { NEGATIVE } else { COUNTER_ACCENT };
    let mut lines = vec![Line::from(""); usize::from(body.height.saturating_sub(3) / 2)];
    lines.push(Line::from(Span::styled(
        count.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    let counter = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", app.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(counter, body);
    frame.render_widget(Footer::widget(footer), footer);
}
