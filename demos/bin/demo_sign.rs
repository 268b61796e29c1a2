//! Sign-function phase fitting demo.
//!
//! Fits sequences to the smoothed sign target `s·erf(k·x)` at several
//! sharpness values. The sign function underlies QSP-based amplitude
//! amplification; sharper transitions need higher degrees.

use clap::Parser;

use qsp_core::{Convention, ThetaGrid};
use qsp_demos::{
    create_progress_bar, print_header, print_result, print_section, print_success,
    print_warning,
};
use qsp_solve::{Adam, FitReport, Method, PhaseSolver, SmoothedSign};

#[derive(Parser, Debug)]
#[command(name = "demo-sign")]
#[command(about = "Fit QSP phases for smoothed sign-function targets")]
struct Args {
    /// Sharpness values k to sweep
    #[arg(short = 'k', long, num_args = 1.., default_values = ["2.0", "5.0", "10.0"])]
    sharpness: Vec<f64>,

    /// Polynomial degree (rounded up to odd, matching the odd target)
    #[arg(short, long, default_value = "21")]
    degree: usize,

    /// Maximum optimizer iterations per fit
    #[arg(short, long, default_value = "8000")]
    iterations: usize,

    /// Number of grid samples for fitting
    #[arg(short, long, default_value = "128")]
    samples: usize,
}

fn main() {
    qsp_demos::init_tracing();
    let args = Args::parse();

    print_header("QSP Sign Function: Amplitude-Amplification Phases");

    let degree = if args.degree % 2 == 0 {
        args.degree + 1
    } else {
        args.degree
    };

    print_section("Problem Setup");
    print_result("Sharpness sweep", format!("{:?}", args.sharpness));
    print_result("Degree", degree);
    print_result("Max iterations", args.iterations);

    let grid = match ThetaGrid::uniform(args.samples) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("invalid grid: {e}");
            std::process::exit(1);
        }
    };

    let solver = PhaseSolver::new(degree)
        .with_convention(Convention::PlusPlus)
        .with_method(Method::Adam(Adam::new().with_maxiter(args.iterations)));

    let pb = create_progress_bar(args.sharpness.len() as u64, "Fitting sign targets...");
    let mut results = Vec::new();
    for &k in &args.sharpness {
        let target = SmoothedSign::new(k);
        match solver.solve(&target, &grid) {
            Ok(fit) => {
                let report = FitReport::evaluate(&fit.phases, &target, &grid, fit.convention);
                results.push((k, fit, report));
            }
            Err(e) => {
                pb.finish_and_clear();
                eprintln!("solve failed for k = {k}: {e}");
                std::process::exit(1);
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Fits complete");

    print_section("Results");
    for (k, fit, report) in &results {
        println!();
        print_result("Sharpness k", k);
        print_result("Residual", format!("{:.3e}", fit.residual));
        print_result("Max error", format!("{:.3e}", report.max_error));
        if !fit.converged {
            print_warning("did not converge — sharper targets need higher degree");
        }
    }

    println!();
    print_success("Sign function demo complete!");
}
