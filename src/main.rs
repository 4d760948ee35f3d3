use clap::Parser;
use elemfn::{evaluate, print_samples};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// elemfn evaluates elementary mathematical functions built from closure
/// factories.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prefixes each sample with the expression it evaluates.
    #[arg(short, long, conflicts_with = "function")]
    labelled: bool,

    /// Evaluates the named factory instead of printing the samples.
    #[arg(short, long, value_name = "NAME")]
    function: Option<String>,

    /// A parameter for the named factory. Repeat for several parameters.
    #[arg(short = 'p', long = "param", value_name = "VALUE", allow_negative_numbers = true)]
    params: Vec<f64>,

    /// A point to evaluate the named factory at. Repeat for several points.
    #[arg(short = 'x', long, value_name = "X", allow_negative_numbers = true)]
    at: Vec<f64>,

    /// Enables debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "elemfn=debug" } else { "elemfn=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(filter)
                                  .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
                                                                        .with_target(false)
                                                                        .compact())
                                  .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let Some(name) = args.function else {
        print_samples(args.labelled);
        return;
    };

    match evaluate(&name, &args.params, &args.at) {
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
