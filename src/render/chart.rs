//! Enrollment trend line chart, rendered to an SVG string.
//!
//! Two series on one set of axes: the home institution (crimson, circle
//! markers) and the peer average (blue, square markers). Each series is
//! plotted against its own years. X-axis tick labels come from the home
//! series' years, or from the peer series when the home series is empty.

use crate::constants::{CHART_SIZE, HOME_COLOR, MARKER_SIZE, PEER_COLOR};
use crate::data::{DataError, DataResult, TrendPoint, TrendSeries};
use crate::settings::Labels;
use plotters::prelude::*;

/// Render the trend chart; `None` when neither series has points
pub fn render_trend_chart(
    trend: &TrendSeries,
    language: &str,
    labels: &Labels,
) -> DataResult<Option<String>> {
    if trend.is_empty() {
        return Ok(None);
    }

    let mut svg = String::new();
    draw_trend_chart(&mut svg, trend, language, labels)
        .map_err(|e| DataError::Chart(e.to_string()))?;
    Ok(Some(svg))
}

fn draw_trend_chart(
    svg: &mut String,
    trend: &TrendSeries,
    language: &str,
    labels: &Labels,
) -> Result<(), Box<dyn std::error::Error>> {
    let (first_year, last_year) = year_bounds(trend);
    let y_top = value_ceiling(trend);
    let ticks = trend.tick_years();

    let home_color = RGBColor(HOME_COLOR.0, HOME_COLOR.1, HOME_COLOR.2);
    let peer_color = RGBColor(PEER_COLOR.0, PEER_COLOR.1, PEER_COLOR.2);
    let grid_color = BLACK.mix(0.15);

    let root = SVGBackend::with_string(svg, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Total UG Enrollment for {language}"),
            ("sans-serif", 24),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(64)
        .build_cartesian_2d((first_year - 1)..(last_year + 1), 0f64..y_top)?;

    // One key point per year so every tick year can be labelled; years that
    // are not ticks get an empty label.
    let key_points = (last_year - first_year + 3) as usize;
    let tick_label = |year: &i32| {
        if ticks.contains(year) {
            year.to_string()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(key_points)
        .x_label_formatter(&tick_label)
        .x_desc("Year")
        .y_desc("Enrollment")
        .draw()?;

    chart.draw_series(ticks.iter().map(|&year| {
        PathElement::new(vec![(year, 0.0), (year, y_top)], grid_color.stroke_width(1))
    }))?;

    if !trend.home.is_empty() {
        let points = coordinates(&trend.home);
        chart
            .draw_series(LineSeries::new(points.clone(), home_color.stroke_width(2)))?
            .label(labels.home_name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], home_color.stroke_width(2))
            });
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, MARKER_SIZE, home_color.filled())),
        )?;
    }

    if !trend.peers.is_empty() {
        let points = coordinates(&trend.peers);
        chart
            .draw_series(LineSeries::new(points.clone(), peer_color.stroke_width(2)))?
            .label(labels.peer_series.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], peer_color.stroke_width(2))
            });
        chart.draw_series(points.iter().map(|&point| {
            EmptyElement::at(point)
                + Rectangle::new(
                    [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                    peer_color.filled(),
                )
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn coordinates(points: &[TrendPoint]) -> Vec<(i32, f64)> {
    points.iter().map(|p| (p.year, p.mean)).collect()
}

/// First and last year over both series
fn year_bounds(trend: &TrendSeries) -> (i32, i32) {
    let years = trend.home.iter().chain(&trend.peers).map(|p| p.year);
    let first = years.clone().min().unwrap_or_default();
    let last = years.max().unwrap_or_default();
    (first, last)
}

/// Top of the y-axis with 10% headroom
fn value_ceiling(trend: &TrendSeries) -> f64 {
    let max = trend
        .home
        .iter()
        .chain(&trend.peers)
        .map(|p| p.mean)
        .fold(0.0_f64, f64::max);
    if max > 0.0 { max * 1.1 } else { 1.0 }
}
