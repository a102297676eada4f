extern crate spline_curve;

use spline_curve::CubicSpline;

fn main() {
    env_logger::init();

    let x_min = 0.0;
    let x_max = 6.0;

    let x = [x_min, 1.0, 2.0, 4.0, 5.0, x_max];
    let y = [1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let spline = CubicSpline::new(&x, &y).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let mut x_vector = Vec::new();

    for i in 0..=number_of_steps {
        x_vector.push((x_min + step * i as f64).min(x_max));
    }

    let result = spline.batch_interpolate(&x_vector).unwrap();

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", x_vector[i], result[i]);
    }
}
