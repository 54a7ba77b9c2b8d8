use orgchart_core::{Direction, Document, LayoutConfig, LayoutOptions};
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ORGCHART_LOG";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Config {
        path: String,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Config { path, source } => write!(f, "invalid config {path}: {source}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    config: Option<String>,
    direction: Option<Direction>,
    pretty: bool,
}

fn usage() -> &'static str {
    "orgchart-cli\n\
\n\
USAGE:\n\
  orgchart-cli [--direction tb|lr] [--config <path>] [--pretty] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON document: {\"nodes\": [...], \"edges\": [...], \"roles\": [...], \"direction\": \"TB\"|\"LR\"}.\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - --direction overrides the document's direction; the output records the one used.\n\
  - --config reads layout spacing from a JSON file (nodesep, ranksep, edgesep, hierarchy_weight, ordering_weight).\n\
  - Set ORGCHART_LOG (e.g. ORGCHART_LOG=debug) to see diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--direction" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.direction = Some(Direction::parse(dir).ok_or(CliError::Usage(usage()))?);
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_config(path: Option<&str>) -> Result<LayoutConfig, CliError> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    LayoutConfig::from_json_str(&text).map_err(|source| CliError::Config {
        path: path.to_string(),
        source,
    })
}

fn write_output(doc: &Document, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = doc.to_json_string(pretty)?;
    text.push('\n');
    match out {
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        Some(path) => std::fs::write(path, text)?,
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let text = read_input(args.input.as_deref())?;
    let mut doc = Document::from_json_str(&text)?;
    if let Some(direction) = args.direction {
        doc.direction = direction;
    }

    tracing::info!(
        nodes = doc.nodes.len(),
        edges = doc.edges.len(),
        roles = doc.roles.len(),
        direction = ?doc.direction,
        "laying out document"
    );
    doc.relayout(&LayoutOptions::with_config(config));

    write_output(&doc, args.pretty, args.out.as_deref())
}

fn main() {
    init_logging();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
