//! Left, right and midpoint sums of every catalog function approaching
//! the exact integral over [0, 2].
use calculus_methods::functions::FunctionId;
use calculus_methods::riemann::{riemann_sum, RiemannMethod, DEFAULT_INTERVAL};

fn exact(id: FunctionId, a: f64, b: f64) -> f64 {
    match id {
        FunctionId::Square => (b.powi(3) - a.powi(3)) / 3.,
        FunctionId::Cube => (b.powi(4) - a.powi(4)) / 4.,
        FunctionId::Sine => a.cos() - b.cos(),
        FunctionId::Exp => b.exp() - a.exp(),
        _ => f64::NAN,
    }
}

fn main() -> calculus_methods::Result<()> {
    let (a, b) = DEFAULT_INTERVAL;
    let methods = [
        RiemannMethod::Left,
        RiemannMethod::Right,
        RiemannMethod::Midpoint,
    ];
    for id in FunctionId::INTEGRABLE.iter() {
        let truth = exact(*id, a, b);
        println!("{} over [{}, {}]: exact {:.6}", id, a, b, truth);
        for n in [4usize, 40, 400, 4000].iter() {
            let mut line = format!("  n = {:>5}", n);
            for method in methods.iter() {
                let sum = riemann_sum(id.id(), a, b, *n, method.name())?;
                line.push_str(&format!("  {:>8} {:+.2e}", method, sum.area - truth));
            }
            println!("{}", line);
        }
    }
    Ok(())
}
