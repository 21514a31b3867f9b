//! Revenue by project site bar chart

use crate::model::fleet::GeneratorRecord;
use crate::model::locale::Locale;
use crate::model::metrics::{revenue_by_group, GroupKey, GroupTotal};
use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Sites shown in the chart
const TOP_SITES: usize = 10;

/// Low end of the bar colour scale
const SCALE_LOW: (u8, u8, u8) = (31, 41, 55);
/// High end of the bar colour scale
const SCALE_HIGH: (u8, u8, u8) = (0, 168, 232);

/// Interpolate the bar colour for `revenue` within `[min, max]`
fn scale_color(revenue: f64, min: f64, max: f64) -> Color {
    let t = if max > min {
        ((revenue - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(
        lerp(SCALE_LOW.0, SCALE_HIGH.0),
        lerp(SCALE_LOW.1, SCALE_HIGH.1),
        lerp(SCALE_LOW.2, SCALE_HIGH.2),
    )
}

/// Localized label for a site group
fn site_label(group: &GroupTotal, view: &[&GeneratorRecord], locale: &Locale) -> String {
    view.iter()
        .find(|r| r.project_site == group.label)
        .map(|r| locale.site(r))
        .unwrap_or_else(|| group.label.clone())
}

pub fn render_revenue_chart(
    frame: &mut Frame,
    area: Rect,
    view: &[&GeneratorRecord],
    locale: &Locale,
) {
    let labels = locale.labels();
    let groups = revenue_by_group(view, GroupKey::Site, Some(TOP_SITES));

    let max = groups.first().map(|g| g.revenue).unwrap_or(0.0);
    let min = groups.last().map(|g| g.revenue).unwrap_or(0.0);

    let bars: Vec<Bar> = groups
        .iter()
        .map(|group| {
            let color = scale_color(group.revenue, min, max);
            Bar::default()
                .label(Line::from(site_label(group, view, locale)))
                .value(group.revenue.round() as u64)
                .text_value(locale.format_number(group.revenue / 1000.0, 1) + "K")
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::White).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ({}) ", labels.revenue_chart_title, labels.currency))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generator::generate_default;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_scale_color_ends() {
        assert_eq!(scale_color(10.0, 10.0, 20.0), Color::Rgb(31, 41, 55));
        assert_eq!(scale_color(20.0, 10.0, 20.0), Color::Rgb(0, 168, 232));
        assert_eq!(scale_color(5.0, 5.0, 5.0), Color::Rgb(0, 168, 232));
    }

    #[test]
    fn test_site_label_localized() {
        let fleet = generate_default(42, 5);
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let group = GroupTotal {
            label: fleet[0].project_site.clone(),
            revenue: fleet[0].monthly_revenue,
        };
        assert_eq!(site_label(&group, &view, &Locale::English), fleet[0].project_site);
        assert_eq!(
            site_label(&group, &view, &Locale::Arabic),
            Locale::Arabic.site(&fleet[0])
        );
    }

    #[test]
    fn test_chart_draws_top_site() {
        let fleet = generate_default(42, 50);
        let view: Vec<&GeneratorRecord> = fleet.iter().collect();
        let top = revenue_by_group(&view, GroupKey::Site, Some(1));

        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal
            .draw(|frame| render_revenue_chart(frame, frame.area(), &view, &Locale::English))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Revenue by Project Site"));
        assert!(text.contains(&top[0].label));
    }
}
