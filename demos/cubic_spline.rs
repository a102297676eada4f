extern crate spline_curve;

use spline_curve::CubicSpline;

fn main() {
    env_logger::init();

    let x = [0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let y = [1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let spline = CubicSpline::new(&x, &y).unwrap();

    let x_min = spline.domain_start();
    let x_max = spline.domain_end();
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y;dy;d2y");
    for i in 0..=number_of_steps {
        let x = (x_min + step * i as f64).min(x_max);
        println!(
            "{:.2};{:.2};{:.2};{:.2}",
            x,
            spline.interpolate(x).unwrap(),
            spline.derivative(x).unwrap(),
            spline.second_derivative(x).unwrap()
        );
    }
}
