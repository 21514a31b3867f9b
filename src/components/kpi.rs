//! KPI cards across the top of the dashboard

use crate::model::locale::Locale;
use crate::model::metrics::{revenue_trend, FleetSummary};
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

struct Card {
    label: &'static str,
    value: String,
    delta: String,
    delta_color: Color,
}

/// Revenue, utilization, critical alerts and average fuel
pub fn render_kpi_cards(
    frame: &mut Frame,
    area: Rect,
    summary: &FleetSummary,
    seed: u64,
    today: NaiveDate,
    locale: &Locale,
) {
    let cards = build_cards(summary, seed, today, locale);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let alignment = if locale.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    };

    // Arabic reads right to left, so the first card goes rightmost
    let order: Vec<usize> = if locale.is_rtl() {
        (0..cards.len()).rev().collect()
    } else {
        (0..cards.len()).collect()
    };

    for (slot, card_idx) in order.into_iter().enumerate() {
        let card = &cards[card_idx];
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.delta.clone(),
                Style::default().fg(card.delta_color),
            )),
        ];

        let paragraph = Paragraph::new(lines).alignment(alignment).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", card.label))
                .title_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, chunks[slot]);
    }
}

fn build_cards(summary: &FleetSummary, seed: u64, today: NaiveDate, locale: &Locale) -> Vec<Card> {
    let labels = locale.labels();

    let utilization_delta = summary.utilization_trend();
    let utilization_color = if utilization_delta.starts_with('-') {
        Color::Red
    } else {
        Color::Green
    };

    // Alerts are an inverse metric: any alert is bad news
    let alerts_color = if summary.needs_attention() {
        Color::Red
    } else {
        Color::Green
    };

    let avg_fuel = summary
        .avg_fuel
        .map(|avg| locale.format_percent(avg, 0))
        .unwrap_or_else(|| labels.not_available.to_string());

    vec![
        Card {
            label: labels.kpi_revenue,
            value: locale.format_millions(summary.total_revenue),
            delta: format!(
                "+{}% {}",
                locale.format_int(revenue_trend(seed)),
                labels.vs_last_month
            ),
            delta_color: Color::Green,
        },
        Card {
            label: labels.kpi_utilization,
            value: locale.format_percent(summary.utilization_rate, 1),
            delta: locale.digits(utilization_delta),
            delta_color: utilization_color,
        },
        Card {
            label: labels.kpi_alerts,
            value: locale.format_int(summary.critical_alert_count as u64),
            delta: summary.alert_trend(labels).to_string(),
            delta_color: alerts_color,
        },
        Card {
            label: labels.kpi_fuel,
            value: avg_fuel,
            delta: format!(
                "{} {}",
                labels.refuel_schedule,
                locale.digits(&today.format("%Y-%m-%d").to_string())
            ),
            delta_color: Color::DarkGray,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_for_empty_view() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let cards = build_cards(&FleetSummary::default(), 42, today, &Locale::English);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "0.00M EGP");
        assert_eq!(cards[1].value, "0.0%");
        assert_eq!(cards[2].delta, "Stable");
        assert_eq!(cards[3].value, "n/a");
        assert_eq!(cards[3].delta, "Refuel Schd: 2024-05-01");
    }

    #[test]
    fn test_alert_card_asks_for_attention() {
        let summary = FleetSummary {
            count: 3,
            critical_alert_count: 2,
            utilization_rate: 90.0,
            avg_fuel: Some(55.4),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let cards = build_cards(&summary, 0, today, &Locale::English);
        assert_eq!(cards[1].delta, "+5%");
        assert_eq!(cards[2].value, "2");
        assert_eq!(cards[2].delta, "Needs Attention");
        assert_eq!(cards[2].delta_color, Color::Red);
        assert_eq!(cards[3].value, "55%");
    }
}
