//! Spectable CLI - render datasheets and comparison specs as merged-cell tables

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use spectable::{
    diagnostics::{check_output, format_diagnostics},
    html::to_html,
    loading::{load_comparison, load_grid, RenderConfig, SourceFormat},
    render_comparison_with_diagnostics, render_datasheet_with_diagnostics, Orientation,
    RenderOutput, TableError, TableResult,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "spectable")]
#[command(version)]
#[command(about = "Spectable - specification tables with merged cells", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode: only errors are logged
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct SourceArgs {
    /// Input file path (reads from stdin if not provided)
    input: Option<String>,

    /// Input format (guessed from the file extension, json for stdin)
    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// What to write
    #[arg(short, long, value_enum, default_value_t = Emit::Html)]
    emit: Emit,

    /// TOML file with [datasheet], [comparison] and [html] settings
    #[arg(short, long)]
    config: Option<String>,

    /// Strict mode: exit with error if any render warnings occur
    #[arg(long)]
    strict: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render a raw datasheet grid
    Datasheet {
        #[command(flatten)]
        render: RenderArgs,

        /// Read the grid in this orientation instead of detecting it
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,
    },

    /// Render a comparison spec (simple or sectioned)
    Compare {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the orientation a grid would be read in
    Detect {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Render and validate, reporting warnings and geometry errors
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Kind of input
        #[arg(short, long, value_enum, default_value_t = Kind::Datasheet)]
        kind: Kind,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Toml,
    Csv,
}

#[cfg(feature = "cli")]
impl From<Format> for SourceFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => SourceFormat::Json,
            Format::Yaml => SourceFormat::Yaml,
            Format::Toml => SourceFormat::Toml,
            Format::Csv => SourceFormat::Csv,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Emit {
    /// HTML <table>
    Html,
    /// Table model as JSON
    Json,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    /// First row holds the model names
    Rows,
    /// First column holds the parameter labels
    Columns,
}

#[cfg(feature = "cli")]
impl From<OrientationArg> for Orientation {
    fn from(o: OrientationArg) -> Self {
        match o {
            OrientationArg::Rows => Orientation::Rows,
            OrientationArg::Columns => Orientation::Columns,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Datasheet,
    Comparison,
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (e.g. in tests) is not an error worth reporting
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(feature = "cli")]
fn read_source(source: &SourceArgs) -> TableResult<(String, SourceFormat)> {
    let (content, guessed) = match source.input {
        Some(ref path) => (fs::read_to_string(path)?, SourceFormat::from_path(path)),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            (buffer, None)
        }
    };
    let format = source
        .format
        .map(SourceFormat::from)
        .or(guessed)
        .unwrap_or(SourceFormat::Json);
    Ok((content, format))
}

#[cfg(feature = "cli")]
fn read_config(path: Option<&str>) -> TableResult<RenderConfig> {
    match path {
        Some(path) => RenderConfig::from_toml_str(&fs::read_to_string(path)?),
        None => Ok(RenderConfig::default()),
    }
}

#[cfg(feature = "cli")]
fn write_result(args: &RenderArgs, config: &RenderConfig, rendered: &RenderOutput) -> TableResult<()> {
    let text = match args.emit {
        Emit::Html => to_html(&rendered.table, &config.html),
        Emit::Json => serde_json::to_string_pretty(&rendered.table)
            .map_err(|e| TableError::invalid(e.to_string()))?,
    };

    match args.output {
        Some(ref path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", text)?;
            if rendered.warnings.is_empty() {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    rendered.warnings.len()
                );
            }
        }
        None => println!("{}", text),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn finish_render(args: &RenderArgs, config: &RenderConfig, rendered: RenderOutput) -> TableResult<ExitCode> {
    // Warnings were already logged by the renderer
    if args.strict && rendered.has_warnings() {
        eprintln!(
            "Error: {} render warning(s) in strict mode",
            rendered.warnings.len()
        );
        return Ok(ExitCode::FAILURE);
    }
    write_result(args, config, &rendered)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "cli")]
fn run(command: Commands) -> TableResult<ExitCode> {
    match command {
        Commands::Datasheet {
            render,
            orientation,
        } => {
            let mut config = read_config(render.config.as_deref())?;
            if let Some(o) = orientation {
                config.datasheet.orientation = Some(o.into());
            }
            let (content, format) = read_source(&render.source)?;
            let grid = load_grid(&content, format)?;
            let rendered = render_datasheet_with_diagnostics(&grid, &config.datasheet);
            finish_render(&render, &config, rendered)
        }

        Commands::Compare { render } => {
            let config = read_config(render.config.as_deref())?;
            let (content, format) = read_source(&render.source)?;
            let spec = load_comparison(&content, format)?;
            let rendered = render_comparison_with_diagnostics(&spec, &config.comparison);
            finish_render(&render, &config, rendered)
        }

        Commands::Detect { source } => {
            let (content, format) = read_source(&source)?;
            let grid = load_grid(&content, format)?;
            println!("{}", grid.orientation);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Check {
            source,
            kind,
            no_color,
        } => {
            let (content, format) = read_source(&source)?;
            let rendered = match kind {
                Kind::Datasheet => {
                    let grid = load_grid(&content, format)?;
                    render_datasheet_with_diagnostics(&grid, &Default::default())
                }
                Kind::Comparison => {
                    let spec = load_comparison(&content, format)?;
                    render_comparison_with_diagnostics(&spec, &Default::default())
                }
            };
            let report = check_output(&rendered);
            println!("{}", format_diagnostics(&report, !no_color));

            if report.has_errors() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install spectable --features cli");
    eprintln!("  spectable <datasheet|compare|detect|check> [INPUT_FILE]");
}
