use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mulepack::{AppError, AssembleOptions, AssembleReport, PackagingKind};

#[derive(Parser)]
#[command(name = "mulepack")]
#[command(version)]
#[command(
    about = "Assemble the on-disk content layout of a deployable Mule package",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Materialize the package layout under the target folder
    #[clap(visible_alias = "a")]
    Assemble {
        /// Maven groupId of the project
        #[arg(long)]
        group_id: String,
        /// Maven artifactId of the project
        #[arg(long)]
        artifact_id: String,
        /// Maven version of the project
        #[arg(long = "artifact-version")]
        version: String,
        /// Packaging kind: mule-application, mule-domain, or mule-policy
        #[arg(long, default_value = "mule-application")]
        packaging: String,
        /// Project root to read from
        #[arg(long)]
        base: PathBuf,
        /// Output root to assemble into (created if absent)
        #[arg(long)]
        target: PathBuf,
        /// Also mirror the test source folder
        #[arg(long)]
        test_content: bool,
        /// Output format for the run summary
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assemble {
            group_id,
            artifact_id,
            version,
            packaging,
            base,
            target,
            test_content,
            format,
        } => assemble(group_id, artifact_id, version, packaging, base, target, test_content)
            .map(|report| print_report(&report, format)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn assemble(
    group_id: String,
    artifact_id: String,
    version: String,
    packaging: String,
    base: PathBuf,
    target: PathBuf,
    test_content: bool,
) -> Result<AssembleReport, AppError> {
    let packaging = PackagingKind::from_name(&packaging).ok_or_else(|| {
        AppError::Configuration(format!(
            "Unknown packaging '{}': must be one of mule-application, mule-domain, mule-policy",
            packaging
        ))
    })?;

    mulepack::assemble(AssembleOptions {
        group_id,
        artifact_id,
        version,
        packaging,
        base_folder: base,
        target_folder: target,
        test_content,
    })
}

fn print_report(report: &AssembleReport, format: Format) {
    match format {
        Format::Text => {
            println!(
                "✅ Assembled {} package content at {}",
                report.packaging, report.target_folder
            );
            for path in &report.generated {
                println!("   {}", path);
            }
        }
        Format::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: failed to serialize report: {}", e),
        },
    }
}
