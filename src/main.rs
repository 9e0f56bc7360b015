//! nativexml - Export submissions as native XML

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nativexml::{
    Deployment, DeploymentConfig, Filter, PluginRegistry, StoredPubIdPlugin, Submission,
    SubmissionSerializer, WriterConfig, write_document,
};

#[derive(Parser)]
#[command(name = "nativexml")]
#[command(version, about = "Export submissions as native XML", long_about = None)]
#[command(after_help = "EXAMPLES:
    nativexml submissions.json                     Write XML to stdout
    nativexml submissions.json -o export.xml       Write XML to a file
    nativexml subs.json --pub-id-type doi          Include stored DOIs")]
struct Cli {
    /// JSON array of submissions
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Deployment settings (JSON); missing keys use defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Export stored identifiers of this type (repeatable)
    #[arg(long = "pub-id-type", value_name = "TYPE")]
    pub_id_types: Vec<String>,

    /// Indent nested elements by N spaces
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match export(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "error" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn export(cli: &Cli) -> nativexml::Result<()> {
    let config = match &cli.config {
        Some(path) => read_json::<DeploymentConfig>(path)?,
        None => DeploymentConfig::default(),
    };

    let mut plugins = PluginRegistry::new();
    for pub_id_type in &cli.pub_id_types {
        plugins.register(config.context_id, StoredPubIdPlugin::new(pub_id_type.as_str()));
    }
    let plugin_count = plugins.len();

    let serializer = SubmissionSerializer::new(Deployment::new(config, plugins)?);
    debug!(
        plugins = plugin_count,
        context = serializer.deployment().context_id(),
        "deployment ready"
    );
    let submissions: Vec<Submission> = read_json(&cli.input)?;
    let doc = serializer.process(&submissions)?;

    let writer_config = WriterConfig { indent: cli.indent };
    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_document(&doc, &mut out, &writer_config)?;
            out.flush()?;
            info!(
                filter = serializer.display_name(),
                count = submissions.len(),
                output = %path.display(),
                "export written"
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_document(&doc, &mut out, &writer_config)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> nativexml::Result<T> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(io::BufReader::new(file))?)
}
