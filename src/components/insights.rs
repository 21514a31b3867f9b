//! AI insights card

use crate::model::fleet::GeneratorRecord;
use crate::model::locale::Locale;
use crate::model::report::Insight;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn insight_lines(view: &[&GeneratorRecord], locale: &Locale) -> Vec<Line<'static>> {
    let labels = locale.labels();
    let insight = Insight::from_view(view);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("⚠ {}", labels.insight_heading),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (label, value) in insight.fields(locale) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", label),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("ℹ {}", labels.route_note),
        Style::default().fg(Color::Cyan),
    )));
    lines
}

pub fn render_insights(frame: &mut Frame, area: Rect, view: &[&GeneratorRecord], locale: &Locale) {
    let labels = locale.labels();
    let alignment = if locale.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    };

    let paragraph = Paragraph::new(insight_lines(view, locale))
        .alignment(alignment)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", labels.insights_title))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generator::generate_default;

    fn flatten(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_fallback_card_for_empty_view() {
        let text = flatten(&insight_lines(&[], &Locale::English));
        assert_eq!(text[0], "⚠ Predictive Maint. Alert");
        assert_eq!(text[2], "Asset: DNY-1023 (Aswan)");
        assert!(text.last().unwrap().contains("12,000 EGP"));
    }

    #[test]
    fn test_card_names_hottest_unit() {
        let mut fleet = generate_default(42, 4);
        fleet[2].engine_temp_c = 120;
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let text = flatten(&insight_lines(&view, &Locale::English));
        assert!(text[2].starts_with(&format!("Asset: {}", fleet[2].id)));
        assert!(text[2].ends_with("120°C)"));
    }
}
