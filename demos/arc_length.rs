extern crate spline_curve;

use spline_curve::{Curve, Samples};

// Position and unit tangent at evenly spaced distances along y = sin(x).
fn main() {
    env_logger::init();

    let x: Vec<f64> = (0..=40).map(|i| i as f64 * 0.25).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    let curve = Curve::new(Samples::new(x, y).unwrap()).unwrap();

    let number_of_steps = 50;
    let step = curve.total_length() / number_of_steps as f64;

    println!("s;x;y;tx;ty");
    for i in 0..=number_of_steps {
        let s = (step * i as f64).min(curve.total_length());
        let position = curve.position_at_arc_length(s).unwrap();
        let tangent = curve.tangent_at(s).unwrap().normalize();
        println!("{:.3};{:.3};{:.3};{:.3};{:.3}", s, position.x, position.y, tangent.x, tangent.y);
    }
}
