//! winwait - promo-winner wait-time estimator.
//!
//! Takes a single JSON request on the command line or stdin, runs the
//! estimation engine, and prints the report JSON on stdout. All logging
//! goes to stderr; stdout is reserved for the payload.

use std::io::Read;

use clap::{Args, Parser, Subcommand};

use ww_common::{format_error_human, Error, EstimateReport, EstimateRequest};
use ww_core::exit_codes::ExitCode;
use ww_core::logging::{init_logging, LogConfig, LogFormat};

/// Estimate how long to wait for the next promotion winner.
#[derive(Parser)]
#[command(name = "winwait")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands.
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the estimation engine on a JSON request
    Estimate(EstimateArgs),

    /// Print the JSON Schema of the request or report contract
    Schema(SchemaArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// JSON request string
    #[arg(long)]
    input_json: Option<String>,

    /// Read the JSON request from stdin instead
    #[arg(long)]
    stdin: bool,

    /// Pretty-print the report JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Emit the request schema (default)
    #[arg(long, conflicts_with = "report")]
    request: bool,

    /// Emit the report schema
    #[arg(long)]
    report: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = LogConfig::from_flags(
        cli.global.verbose,
        cli.global.quiet,
        cli.global.log_format,
        cli.global.no_color,
    );
    init_logging(&config);

    let use_color = !cli.global.no_color;
    let code = match &cli.command {
        Commands::Estimate(args) => run_estimate(args, use_color),
        Commands::Schema(args) => run_schema(args),
        Commands::Version => {
            println!("winwait {}", env!("CARGO_PKG_VERSION"));
            ExitCode::Success
        }
    };
    std::process::exit(code.as_i32());
}

fn read_payload(args: &EstimateArgs) -> Result<String, ExitCode> {
    if let Some(json) = &args.input_json {
        return Ok(json.clone());
    }
    if args.stdin {
        let mut buffer = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
            let err = Error::Io(err);
            eprintln!("{}", format_error_human(&err, false));
            return Err(ExitCode::from_error(&err));
        }
        return Ok(buffer);
    }
    eprintln!("error: provide the request with --input-json <JSON> or --stdin");
    Err(ExitCode::ArgsError)
}

fn run_estimate(args: &EstimateArgs, use_color: bool) -> ExitCode {
    let raw = match read_payload(args) {
        Ok(raw) => raw,
        Err(code) => return code,
    };

    let request: EstimateRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(err) => {
            let err = Error::Json(err);
            eprintln!("{}", format_error_human(&err, use_color));
            return ExitCode::from_error(&err);
        }
    };

    match ww_core::engine::run(&request) {
        Ok(report) => print_report(&report, args.pretty),
        Err(err) => {
            eprintln!("{}", format_error_human(&err, use_color));
            ExitCode::from_error(&err)
        }
    }
}

fn print_report(report: &EstimateReport, pretty: bool) -> ExitCode {
    let serialized = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    match serialized {
        Ok(json) => {
            println!("{json}");
            ExitCode::Success
        }
        Err(err) => {
            eprintln!("error: failed to serialize report: {err}");
            ExitCode::InternalError
        }
    }
}

fn run_schema(args: &SchemaArgs) -> ExitCode {
    let schema = if args.report {
        schemars::schema_for!(EstimateReport)
    } else {
        schemars::schema_for!(EstimateRequest)
    };
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => {
            println!("{json}");
            ExitCode::Success
        }
        Err(err) => {
            eprintln!("error: failed to serialize schema: {err}");
            ExitCode::InternalError
        }
    }
}
