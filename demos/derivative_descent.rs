//! Gradient descent on registry functions and on the hill surface.
use calculus_methods::derivative_descent::*;
use calculus_methods::functions::FunctionId;
use calculus_methods::objective::{HillSurface, RegistryObjective};
use calculus_methods::surface::descend_surface;
use ndarray::arr1;
use streaming_iterator::*;

fn main() {
    // Problem: minimize f(x) = x², starting from x = 2.
    let square = FunctionId::Square.entry();
    let step_size = 0.2;
    let x_0 = 2.0;

    // Au naturale:
    let mut x = x_0;
    for i in 0..10 {
        x -= step_size * square.derivative(x);
        println!("x_{} = {:.2}; f(x_{}) = {:.4}", i, x, i, square.evaluate(x));
    }

    // The same steps through the streaming iterator:
    let gd = GradientDescent::new(RegistryObjective::new(square), step_size, arr1(&[x_0]));
    let mut gd = gd.take(10);
    while let Some(state) = gd.next() {
        println!(
            "x_{} = {:.2}; f(x_{}) = {:.4}",
            state.steps_taken - 1,
            state.x[0],
            state.steps_taken - 1,
            state.value()
        );
    }

    // Or collected in one call:
    let descent = run(HillSurface, arr1(&[2., 2.]), 0.1, 5);
    for (point, cost) in descent.trajectory.iter().zip(descent.costs.iter()) {
        println!("at {} the hill is {:.4}", point, cost);
    }

    match descend_surface(2., 2., 0.1, 50) {
        Ok(path) => {
            if let Some(end) = path.end() {
                println!("after 50 steps: {:?}", end);
            }
        }
        Err(e) => println!("error: {}", e),
    }
}
