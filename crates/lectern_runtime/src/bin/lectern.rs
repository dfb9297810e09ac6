//! Lectern CLI entry point.

use std::env;
use std::process::ExitCode;

use lectern_runtime::{OutputFormat, Repl, Session, config_from_env};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    reference: Vec<String>,
    version: Option<String>,
    offline: bool,
    json: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LECTERN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--offline" => config.offline = true,
            "--json" => config.json = true,
            "--version-code" => {
                let Some(code) = args.next() else {
                    return Err("--version-code requires a value".into());
                };
                config.version = Some(code);
            }
            flag if flag.starts_with("--version-code=") => {
                config.version = Some(flag["--version-code=".len()..].to_string());
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            word => config.reference.push(word.to_string()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("lectern {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut engine = config_from_env()?;
    if cli.offline {
        engine = engine.with_external_providers(false);
    }
    tracing::debug!(?engine, "configuration loaded");

    let mut session = Session::new(engine)?;
    if let Some(code) = &cli.version {
        session.set_version(code)?;
    }
    if cli.json {
        session.set_format(OutputFormat::Json);
    }

    if !cli.reference.is_empty() {
        let output = session.lookup(&cli.reference.join(" "))?;
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mLectern\x1b[0m - Scripture reader with tiered providers and offline fallback

\x1b[1mUSAGE:\x1b[0m
    lectern [OPTIONS] [REFERENCE]

\x1b[1mARGUMENTS:\x1b[0m
    [REFERENCE]    Chapter or passage to print, e.g. \"John 3\" or \"1 Cor 13:4-7\".
                   Starts the reading shell when omitted.

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Print help information
    -V, --version           Print version information
    --version-code CODE     Translation to read (default: $LECTERN_DEFAULT_VERSION or KJV)
    --offline               Never contact external providers
    --json                  Print results as JSON

\x1b[1mENVIRONMENT:\x1b[0m
    LECTERN_OFFLINE          1/true disables external providers
    LECTERN_API_KEY          Credential for the keyed API
    LECTERN_DEFAULT_VERSION  Fallback version code
    LECTERN_DEADLINE_SECS    Overall provider budget in seconds (0 = none)
    LECTERN_VERBOSITY        silent | failures | attempts
    LECTERN_LOG              Log filter (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    lectern                          Start the reading shell
    lectern John 3:16                Print one verse
    lectern --version-code WEB Ps 23 Print a chapter from the WEB
    lectern --offline --json Gen 1   Offline, as JSON

\x1b[1mSHELL COMMANDS:\x1b[0m
    :version CODE        Switch version
    :versions            List versions
    :books               List books
    :offline on|off      Switch external providers
    :help                Show shell help
    Ctrl+D               Exit"
    );
}
