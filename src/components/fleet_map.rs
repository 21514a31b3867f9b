//! Asset geolocation panel

use super::dashboard::BRAND_BLUE;
use crate::model::fleet::GeneratorRecord;
use crate::model::locale::Locale;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Block, Borders,
    },
    Frame,
};

/// Longitude window around Egypt
const LON_BOUNDS: [f64; 2] = [24.5, 37.0];
/// Latitude window around Egypt
const LAT_BOUNDS: [f64; 2] = [21.5, 32.0];

/// Split coordinates into normal and critical-alert points, as `(lon, lat)`
fn plot_points(view: &[&GeneratorRecord]) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    view.iter()
        .map(|r| (r, (r.longitude, r.latitude)))
        .fold((Vec::new(), Vec::new()), |(mut normal, mut critical), (r, point)| {
            if r.active_alert.is_critical() {
                critical.push(point);
            } else {
                normal.push(point);
            }
            (normal, critical)
        })
}

pub fn render_fleet_map(frame: &mut Frame, area: Rect, view: &[&GeneratorRecord], locale: &Locale) {
    let labels = locale.labels();
    let (normal, critical) = plot_points(view);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", labels.map_title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .title_bottom(Line::styled(
            format!(" {} ", labels.map_caption),
            Style::default().fg(Color::DarkGray),
        ));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(LON_BOUNDS)
        .y_bounds(LAT_BOUNDS)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &normal,
                color: BRAND_BLUE,
            });
            ctx.draw(&Points {
                coords: &critical,
                color: Color::Red,
            });
        });

    frame.render_widget(canvas, area);
}
