use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use transposition::cli::{read_text, show_info, transform_file, transform_text};
use transposition::{CipherKind, CipherSpec, Mode, Route, SpecParts, TranspositionError};

/// Version info from build.rs
const VERSION: &str = env!("TRANSPOSE_VERSION");
const BUILD: &str = env!("TRANSPOSE_BUILD");
const PROFILE: &str = env!("TRANSPOSE_PROFILE");
const GIT_HASH: &str = env!("TRANSPOSE_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "transpose")]
#[command(author, about = "Classical transposition ciphers", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct CipherArgs {
    /// Cipher: columnar, myszkowski, disrupted-count, disrupted-line, spiral,
    /// serpent, rail-fence, scytale, reverse, magnet, elastic
    #[arg(short, long, value_parser = parse_cipher)]
    cipher: Option<CipherKind>,

    /// Column key
    #[arg(short, long)]
    key: Option<String>,

    /// Second key placing gaps (disrupted-count)
    #[arg(long)]
    disruption_key: Option<String>,

    /// Fill staircase blocks to squares (disrupted-line)
    #[arg(long)]
    fill: bool,

    /// Grid width (spiral, serpent)
    #[arg(long)]
    width: Option<usize>,

    /// Route code: TLR, TLD, TRL, TRD, BLR, BLU, BRL or BRU (spiral, serpent)
    #[arg(long, value_parser = parse_route)]
    route: Option<Route>,

    /// Number of lines (rail-fence, scytale)
    #[arg(long)]
    lines: Option<usize>,

    /// JSON cipher description, instead of the flags above
    #[arg(
        long,
        conflicts_with_all = ["cipher", "key", "disruption_key", "fill", "width", "route", "lines"]
    )]
    spec: Option<PathBuf>,
}

impl CipherArgs {
    fn into_spec(self) -> transposition::Result<CipherSpec> {
        if let Some(path) = self.spec {
            return CipherSpec::load(&path);
        }
        let kind = self
            .cipher
            .ok_or_else(|| TranspositionError::MissingParameter("--cipher or --spec".into()))?;
        CipherSpec::from_parts(
            kind,
            SpecParts {
                key: self.key,
                disruption_key: self.disruption_key,
                fill: self.fill,
                width: self.width,
                route: self.route,
                lines: self.lines,
            },
        )
    }
}

#[derive(Args)]
struct IoArgs {
    /// Text to transform (read from stdin when neither TEXT nor --input is given)
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result to a file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a text
    #[command(alias = "e")]
    Encrypt {
        #[command(flatten)]
        cipher: CipherArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Decrypt a text
    #[command(alias = "d")]
    Decrypt {
        #[command(flatten)]
        cipher: CipherArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Show the key order, grid and walk a cipher produces for a text
    #[command(alias = "i")]
    Info {
        #[command(flatten)]
        cipher: CipherArgs,

        /// Sample text to lay out
        text: String,
    },
}

fn parse_cipher(s: &str) -> Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_route(s: &str) -> Result<Route, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_transform(cipher: CipherArgs, io: IoArgs, mode: Mode) -> transposition::Result<()> {
    let spec = cipher.into_spec()?;

    if let (Some(input), Some(output)) = (&io.input, &io.output) {
        let symbols = transform_file(input, output, &spec, mode)?;
        eprintln!("Wrote {} symbols to {}", symbols, output.display());
        return Ok(());
    }

    let text = match (io.text, io.input) {
        (Some(text), _) => text,
        (None, Some(input)) => read_text(&input)?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim_end_matches(['\n', '\r']).to_string()
        }
    };

    let result = transform_text(&text, &spec, mode)?;
    match io.output {
        Some(output) => std::fs::write(&output, format!("{}\n", result))?,
        None => println!("{}", result),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    if cli.version {
        println!("transpose {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt { cipher, io } => run_transform(cipher, io, Mode::Encrypt),
        Commands::Decrypt { cipher, io } => run_transform(cipher, io, Mode::Decrypt),
        Commands::Info { cipher, text } => cipher
            .into_spec()
            .and_then(|spec| show_info(&spec, &text))
            .map(|info| print!("{}", info)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
