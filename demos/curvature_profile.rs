extern crate spline_curve;

use std::f64::consts::PI;

use spline_curve::{ArcLengthMode, Curve, CurveConfig, PlotStyle, Samples};

// Radius of curvature along a closed, track like loop.
// Run with RUST_LOG=debug to see construction details.
fn main() {
    env_logger::init();

    let number_of_samples = 120;
    let points: Vec<(f64, f64)> = (0..=number_of_samples)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / number_of_samples as f64;
            let wobble = 1.0 + 0.2 * (3.0 * angle).sin();
            (120.0 * wobble * angle.cos(), 60.0 * wobble * angle.sin())
        })
        .collect();

    let config = CurveConfig::default()
        .with_arc_length(ArcLengthMode::Parametric)
        .with_style(PlotStyle::new("green", 0.7, true));
    let curve = Curve::with_config(Samples::from_points(&points).unwrap(), config).unwrap();

    let polyline = curve.radius_polyline().unwrap();

    println!("# track length {:.3}", curve.total_length());
    println!(
        "# color {}, line width {}, axes {}",
        polyline.style.color, polyline.style.line_width, polyline.style.show_axes
    );
    println!("t;s;R");
    let arc_lengths = curve.arc_lengths();
    for point in &polyline.points {
        println!("{:.0};{:.3};{:.3}", point.x, arc_lengths[point.x as usize], point.y);
    }
}
