use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pdf_protect::{InvocationRequest, ProtectOptions, ProtectReport, protect};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(args: &CliArgs) {
    if args.log && !args.quiet {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        // A subscriber may already be installed when embedded in tests.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }
}

/// Defaults, then the config file, then explicit flags.
fn resolve_options(args: &CliArgs) -> Result<ProtectOptions, AppError> {
    let mut options = match &args.config {
        Some(path) => {
            info!("Loading options from {:?}", path);
            ProtectOptions::from_json_file(path)?
        }
        None => ProtectOptions::default(),
    };

    if let Some(algorithm) = args.algorithm {
        options.algorithm = algorithm;
    }
    if let Some(min) = args.min_password_length {
        options.min_password_length = min;
    }
    if let Some(check) = args.encryption_check {
        options.encryption_check = check;
    }
    options.validate()?;
    debug!("Effective options: {:?}", options);
    Ok(options)
}

fn print_report(report: &ProtectReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nPDF successfully protected!\n")?;
    writeln!(
        out,
        "   Input  : {}  ({} KB)",
        report.input.display(),
        report.input_size_kb()
    )?;
    writeln!(
        out,
        "   Output : {}  ({} KB)",
        report.output.display(),
        report.output_size_kb()
    )?;
    writeln!(out, "   Pages  : {}", report.pages)?;
    writeln!(out, "   Cipher : {}", report.algorithm)?;
    writeln!(
        out,
        "\n   Open the output file and enter your password to verify.\n"
    )?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(&args);

    let options = resolve_options(&args)?;
    let request = InvocationRequest::new(&args.input, &args.output, args.password.as_str())
        .with_owner_password(args.owner_password.clone())
        .with_quiet(args.quiet);

    info!("Protecting {:?} -> {:?}", request.input(), request.output());
    let report = protect(&request, &options)?;

    if !request.quiet() {
        print_report(&report, &mut io::stdout().lock())?;
    }
    Ok(())
}
