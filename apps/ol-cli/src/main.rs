use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ol_project::{ProjectDef, ProjectError, ProjectResult};
use ol_validate::{DiagramReport, Level, validate_diagram};

#[derive(Parser)]
#[command(name = "oneline")]
#[command(about = "One-line diagram tool - project validation and rating checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project file (.json or .yaml/.yml)
        project_path: PathBuf,
    },
    /// Run the rating checks and print findings
    Check {
        /// Path to the project file (.json or .yaml/.yml)
        project_path: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Check { project_path, json } => cmd_check(&project_path, json),
    }
}

/// Load a project, picking the format from the file extension.
fn load_project(path: &Path) -> ProjectResult<ProjectDef> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => ol_project::load_yaml(path),
        _ => ol_project::load_json(path),
    }
}

fn cmd_validate(project_path: &Path) -> ProjectResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = load_project(project_path)?;
    println!("✓ Project is valid");
    println!(
        "  {} nets, {} blocks, {} connections",
        project.nets.len(),
        project.blocks.len(),
        project.connections.len()
    );
    Ok(())
}

fn cmd_check(project_path: &Path, json: bool) -> ProjectResult<()> {
    let project = load_project(project_path)?;
    let (nodes, edges, nets) = project.into_collections();
    let report = validate_diagram(&nodes, &edges, &nets);

    if json {
        println!("{}", serde_json::to_string_pretty(&report).map_err(ProjectError::Json)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

/// Findings are diagnostics, not failures: a diagram full of errors still
/// prints and exits zero, mirroring the editor's always-editable rule.
fn print_report(report: &DiagramReport) {
    if report.findings.is_empty() {
        println!("✓ No findings");
    } else {
        println!("Findings:");
        for finding in &report.findings {
            let target = finding.target.as_deref().unwrap_or("-");
            let mark = match finding.level {
                Level::Error => "E",
                Level::Warn => "W",
                Level::Info => "I",
            };
            println!("  [{}] {:<12} {}", mark, target, finding.message);
        }
    }

    let stats = &report.stats;
    println!(
        "\n{} errors, {} warnings, {} uncertain loads",
        stats.errors, stats.warnings, stats.uncertain_loads
    );
    println!(
        "{} nets ({} orphan), {} unassigned edges",
        stats.nets, stats.orphan_nets, stats.unassigned_edges
    );
}
