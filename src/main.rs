use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use chromium_net_errors::codegen;
use chromium_net_errors::error::{Error, Result};
use chromium_net_errors::header;
use chromium_net_errors::{Categorized, Dataset, ErrorType, ErrorVariant, Registry};

/// Inspect Chromium network error codes and maintain the error dataset.
///
/// Looks up errors by numeric code, `ERR_*` description or variant name,
/// rebuilds the dataset from a local copy of Chromium's net_error_list.h,
/// and regenerates the named variant constants.
#[derive(Parser)]
#[command(name = "chromium-net-errors", version, about)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG, defaulting to warn).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse net_error_list.h into a JSON dataset.
    Parse {
        /// Path to a local copy of net/base/net_error_list.h.
        #[arg(long)]
        header: PathBuf,

        /// Output path for the JSON dataset.
        #[arg(long, default_value = "data/errors.json")]
        output: PathBuf,

        /// Suppress non-error output.
        #[arg(long, short)]
        quiet: bool,
    },

    /// Generate the named variant constants from a JSON dataset.
    Generate {
        /// JSON dataset to generate from.
        #[arg(long, default_value = "data/errors.json")]
        dataset: PathBuf,

        /// Output path for the generated Rust module.
        #[arg(long, default_value = "src/variants.rs")]
        output: PathBuf,

        /// Fail if the output is out of date instead of writing it.
        #[arg(long)]
        check: bool,

        /// Suppress non-error output.
        #[arg(long, short)]
        quiet: bool,
    },

    /// Look up an error by code (-324), description (ERR_EMPTY_RESPONSE) or name.
    Lookup {
        /// Code, description or variant name.
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// JSON dataset to read instead of the embedded one.
        #[arg(long, env = "CHROMIUM_NET_ERRORS_DATASET")]
        dataset: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List known errors.
    List {
        /// Only list errors of this category (e.g. http, certificate-manager).
        #[arg(long)]
        category: Option<ErrorType>,

        /// JSON dataset to read instead of the embedded one.
        #[arg(long, env = "CHROMIUM_NET_ERRORS_DATASET")]
        dataset: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// JSON view of a variant, including the fallback which has no record.
#[derive(Serialize)]
struct VariantView<'a> {
    name: &'a str,
    code: Option<i32>,
    #[serde(rename = "type")]
    error_type: ErrorType,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> From<&'a ErrorVariant> for VariantView<'a> {
    fn from(variant: &'a ErrorVariant) -> Self {
        VariantView {
            name: variant.name(),
            code: variant.code(),
            error_type: variant.error_type(),
            message: variant.message(),
            description: variant.description(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");

        // Print cause chain.
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = std::error::Error::source(cause);
        }

        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse {
            header,
            output,
            quiet,
        } => {
            if !quiet {
                eprintln!("Parsing {}", header.display());
            }
            let records = header::load_header(&header)?;
            let dataset = Dataset::new(records)?;
            dataset.save(&output)?;
            if !quiet {
                eprintln!("{} errors parsed", dataset.len());
                eprintln!("Written to {}", output.display());
            }
        }

        Commands::Generate {
            dataset,
            output,
            check,
            quiet,
        } => {
            let dataset = Dataset::load(&dataset)?;

            if check {
                if !codegen::check(dataset.records(), &output)? {
                    return Err(Error::Stale { path: output });
                }
                if !quiet {
                    eprintln!("{} is up-to-date", output.display());
                }
                return Ok(());
            }

            let stats = codegen::generate(dataset.records(), &output)?;
            if !quiet {
                eprintln!(
                    "Generated {} variants ({} with descriptions)",
                    stats.variants_generated, stats.descriptions
                );
                for (category, count) in &stats.by_category {
                    eprintln!("  {category}: {count}");
                }
                eprintln!("Written to {}", output.display());
            }
        }

        Commands::Lookup {
            query,
            dataset,
            json,
        } => {
            let registry = load_registry(dataset.as_deref())?;
            let variant = lookup(&registry, &query);
            if json {
                println!("{}", serde_json::to_string_pretty(&VariantView::from(variant))?);
            } else {
                print_variant(variant);
            }
        }

        Commands::List {
            category,
            dataset,
            json,
        } => {
            let registry = load_registry(dataset.as_deref())?;
            let selected: Vec<&ErrorVariant> = registry
                .variants()
                .iter()
                .filter(|v| category.is_none_or(|c| v.is_category(c)))
                .collect();

            if json {
                let views: Vec<VariantView<'_>> =
                    selected.iter().map(|v| VariantView::from(*v)).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                for variant in selected {
                    println!(
                        "{:>5}  {:<19}  {}",
                        variant.code().unwrap_or_default(),
                        variant.error_type(),
                        variant.name()
                    );
                }
            }
        }
    }

    Ok(())
}

fn load_registry(dataset: Option<&Path>) -> Result<Cow<'static, Registry>> {
    match dataset {
        Some(path) => Ok(Cow::Owned(Registry::new(Dataset::load(path)?))),
        None => Ok(Cow::Borrowed(Registry::global())),
    }
}

/// Resolve a query as a code, then a description, then a variant name.
fn lookup<'a>(registry: &'a Registry, query: &str) -> &'a ErrorVariant {
    if let Ok(code) = query.parse::<i32>() {
        return registry.get_error_by_code(code);
    }
    registry
        .find_by_description(query)
        .or_else(|| registry.find_by_name(query))
        .unwrap_or(ErrorVariant::unknown())
}

fn print_variant(variant: &ErrorVariant) {
    println!("name:        {}", variant.name());
    match variant.code() {
        Some(code) => println!("code:        {code}"),
        None => println!("code:        (none)"),
    }
    println!("type:        {}", variant.error_type());
    if let Some(description) = variant.description() {
        println!("description: {description}");
    }
    println!("message:     {}", variant.message());
}
