//! Component description CLI
//!
//! # Usage
//!
//! ```bash
//! # Resolve one class and print it as JSON
//! wbp-describe --config wbp.yaml describe org.eclipse.swt.widgets.Button
//!
//! # Same, as a short text summary
//! wbp-describe --config wbp.yaml describe org.eclipse.swt.widgets.Button --format text
//!
//! # Description resolved for a factory method
//! wbp-describe --config wbp.yaml describe a.Button --factory a.Factory --signature "create(a.Composite)"
//!
//! # List metadata files of the configured bundles
//! wbp-describe --config wbp.yaml list
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=wbp_descriptions=debug`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wbp_descriptions::features::resources::DESCRIPTION_SUFFIX;
use wbp_descriptions::{
    BundleResourceLocator, ComponentDescription, DescriptionResolver, FactoryMethodRef,
    ResolverConfig,
};

#[derive(Parser)]
#[command(name = "wbp-describe")]
#[command(about = "Resolve WindowBuilder component descriptions", long_about = None)]
struct Cli {
    /// Resolver configuration (YAML, version 1)
    #[arg(short, long, default_value = "wbp.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the description of a class
    Describe {
        /// Binary class name, e.g. org.eclipse.swt.widgets.Button
        class: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Class declaring a factory method that returns the component
        #[arg(long, requires = "signature")]
        factory: Option<String>,

        /// Factory method signature, e.g. "create(a.Composite,int)"
        #[arg(long, requires = "factory")]
        signature: Option<String>,
    },

    /// List metadata files in the configured bundles
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = ResolverConfig::from_yaml(&cli.config)?;

    match cli.command {
        Commands::Describe {
            class,
            format,
            factory,
            signature,
        } => {
            let resolver = DescriptionResolver::from_config(&config)?;
            let description = match (factory, signature) {
                (Some(declaring_class), Some(signature)) => {
                    resolver.describe_factory(&FactoryMethodRef {
                        declaring_class,
                        signature,
                        return_class: class,
                    })?
                }
                _ => resolver.describe(&class)?,
            };
            match format {
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(description.as_ref())?)
                }
                Format::Text => print_summary(&description),
            }
        }
        Commands::List => {
            let locator = BundleResourceLocator::from_config(&config);
            for bundle in locator.bundles() {
                let id = bundle.id().map_or("<project>", |id| id.as_str());
                for entry in bundle.entries_with_suffix(DESCRIPTION_SUFFIX) {
                    println!("{}\t{}", id, entry);
                }
            }
        }
    }

    Ok(())
}

fn print_summary(description: &ComponentDescription) {
    println!("key:         {}", description.key);
    println!(
        "toolkit:     {}",
        description.toolkit.as_ref().map_or("-", |t| t.id.as_str())
    );
    println!("model:       {}", description.model_class.as_deref().unwrap_or("-"));
    if let Some(icon) = &description.icon {
        println!("icon:        {}", icon.path);
    }
    if let Some(creation) = description.creation(None) {
        println!("creation:    {}", creation.source.as_deref().unwrap_or("-"));
    }
    for creation in &description.creations {
        println!(
            "  variant:   {} {}",
            creation.id.as_deref().unwrap_or("<default>"),
            creation.name.as_deref().unwrap_or("")
        );
    }
    println!("properties:  {}", description.properties.len());
    for property in &description.properties {
        println!("  {:<24} {:<16} {}", property.title, property.category, property.id);
    }
    println!("methods:     {}", description.methods.len());
    println!("cached:      {}", description.cached);
}
