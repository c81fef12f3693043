use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::info;
use nodeval::interpreter::{
    evaluator::core::{Context, DEFAULT_MAX_DEPTH},
    system::core::System,
    value::core::Value,
};

/// nodeval evaluates the prefix-notation formula stored at a node of a JSON
/// system and prints the result as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file whose top-level object is the system.
    #[arg(short, long)]
    system: PathBuf,

    /// Expression to evaluate at the node instead of the one stored there.
    #[arg(short, long)]
    expr: Option<String>,

    /// Exogenous input path. May be given several times.
    #[arg(short = 'i', long = "input")]
    inputs: Vec<String>,

    /// Deepest nesting of evaluations before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Also print the system after evaluation.
    #[arg(short, long)]
    print_system: bool,

    /// Absolute path of the node to evaluate, such as `plant.pump.flow`.
    node: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let system = match System::load(&args.system) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        },
    };
    info!("Loaded {} top-level node(s) from '{}'.",
          system.nodes().len(),
          args.system.display());

    let context = Context::new().with_inputs(args.inputs)
                                .with_max_depth(args.max_depth);
    let evaluation = context.evaluate(system, &args.node, args.expr.map(Value::from));

    let printed = serde_json::to_string_pretty(&evaluation).and_then(|result| {
                                                                if args.print_system {
                                                                    let system = serde_json::to_string_pretty(&evaluation.system)?;
                                                                    Ok(format!("{result}\n{system}"))
                                                                } else {
                                                                    Ok(result)
                                                                }
                                                            });

    match printed {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to print the evaluation: {e}");
            return ExitCode::from(1);
        },
    }

    if evaluation.well_defined {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
