//! # calculus-methods
//! Command-line front end: runs one engine computation and prints the
//! numbers a dashboard would plot.
use calculus_methods::config::EngineConfig;
use calculus_methods::dataset::Dataset;
use calculus_methods::functions::{lookup_function, FunctionId};
use calculus_methods::linear_fit::{compare_learning_rates, fit_linear};
use calculus_methods::riemann::riemann_sum;
use calculus_methods::surface::descend_surface;
use calculus_methods::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "calculus_methods",
    about = "Gradient descent and Riemann sums for teaching dashboards"
)]
struct Cli {
    /// YAML file with engine parameters; missing keys keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fit a line to the synthetic dataset by gradient descent.
    Fit {
        #[arg(long)]
        learning_rate: Option<f64>,
        #[arg(long)]
        iterations: Option<usize>,
    },
    /// Loss histories for several learning rates.
    Impact {
        #[arg(long)]
        iterations: Option<usize>,
    },
    /// Descend the hill surface from a start point.
    Surface {
        #[arg(long, allow_hyphen_values = true)]
        x: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        y: Option<f64>,
        #[arg(long)]
        learning_rate: Option<f64>,
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Riemann sum of a catalog function.
    Integrate {
        #[arg(long)]
        function: Option<String>,
        #[arg(long)]
        partitions: Option<usize>,
        #[arg(long)]
        method: Option<String>,
    },
    /// Value, derivative and tangent of a registry function at a point.
    Derivative {
        #[arg(long)]
        function: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        point: Option<f64>,
    },
    /// List the registry.
    Functions,
}

fn execute(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    log::info!("using configuration {:?}", config);

    match cli.command {
        Command::Fit {
            learning_rate,
            iterations,
        } => {
            let data = Dataset::generate(&config.dataset)?;
            let rate = learning_rate.unwrap_or(config.linear_fit.learning_rate);
            let n_steps = iterations.unwrap_or(config.linear_fit.iterations);
            let fit = fit_linear(&data, rate, n_steps)?;
            let (b, w) = data.least_squares();
            println!("theta_0 = {:.6}, theta_1 = {:.6}", fit.intercept, fit.slope);
            println!("least squares: theta_0 = {:.6}, theta_1 = {:.6}", b, w);
            for (t, loss) in fit.loss_history.iter().enumerate() {
                let (a, b) = fit.trajectory[t + 1];
                println!("step {:>4}: loss = {:.6}, theta = ({:.6}, {:.6})", t, loss, a, b);
            }
        }
        Command::Impact { iterations } => {
            let data = Dataset::generate(&config.dataset)?;
            let n_steps = iterations.unwrap_or(config.linear_fit.iterations);
            for (rate, history) in
                compare_learning_rates(&data, &config.linear_fit.impact_rates, n_steps)?
            {
                match history.last() {
                    Some(loss) => println!("alpha = {}: final loss = {:.6}", rate, loss),
                    None => println!("alpha = {}: no steps", rate),
                }
            }
        }
        Command::Surface {
            x,
            y,
            learning_rate,
            steps,
        } => {
            let s = &config.surface;
            let path = descend_surface(
                x.unwrap_or(s.start_x),
                y.unwrap_or(s.start_y),
                learning_rate.unwrap_or(s.learning_rate),
                steps.unwrap_or(s.steps),
            )?;
            for p in path.points.iter() {
                match p.z {
                    Some(z) => println!("({:.6}, {:.6}) z = {:.6}", p.x, p.y, z),
                    None => println!("({:.6}, {:.6}) start", p.x, p.y),
                }
            }
        }
        Command::Integrate {
            function,
            partitions,
            method,
        } => {
            let c = &config.integration;
            let sum = riemann_sum(
                function.as_deref().unwrap_or(&c.function),
                c.lower,
                c.upper,
                partitions.unwrap_or(c.partitions),
                method.as_deref().unwrap_or(&c.method),
            )?;
            for (x0, x1, h) in sum.rectangles() {
                println!("[{:.4}, {:.4}] height {:.6}", x0, x1, h);
            }
            println!("Approximate Area = {:.4}", sum.area);
        }
        Command::Derivative { function, point } => {
            let f = lookup_function(function.as_deref().unwrap_or(&config.explorer.function))?;
            let x = point.unwrap_or(config.explorer.point);
            println!("{} at x = {}: {}", f.label(), x, f.evaluate(x));
            println!("{} at x = {}: {}", f.derivative_label(), x, f.derivative(x));
            println!(
                "tangent: y = {} + {} * (x - {})",
                f.evaluate(x),
                f.derivative(x),
                x
            );
        }
        Command::Functions => {
            for id in FunctionId::ALL.iter() {
                let f = id.entry();
                let integrable = if id.is_integrable() { " (integrable)" } else { "" };
                println!("{:8} {} ; {}{}", id.id(), f.label(), f.derivative_label(), integrable);
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = execute(cli) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
