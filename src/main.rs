use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use merisio::io::load_project;
use merisio::model::Project;
use merisio::{project_to_mld, report, sql, validator};

#[derive(Parser)]
#[command(
    name = "merisio",
    version,
    about = "Work with .merisio project files: validate, inspect the MLD, generate SQL"
)]
struct Cli {
    /// Path to a .merisio project file
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show project metadata and statistics
    Info,
    /// Validate the MCD model (exit code 1 on issues)
    Validate,
    /// Show the logical data model (MLD tables)
    Mld,
    /// Generate SQL DDL
    Sql {
        /// Write SQL to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let project = match load_project(&cli.file) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: failed to load project {}: {}", cli.file.display(), e);
            process::exit(2);
        }
    };

    match cli.command {
        Command::Info => cmd_info(&project),
        Command::Validate => cmd_validate(&project),
        Command::Mld => cmd_mld(&project),
        Command::Sql { output } => cmd_sql(&project, output.as_deref()),
    }
}

fn cmd_info(project: &Project) {
    let stats = validator::statistics(project);

    let or_none = |s: &str| {
        if s.is_empty() { "(none)".to_string() } else { s.to_string() }
    };
    println!("Project:      {}", project.name);
    println!("Author:       {}", or_none(&project.author));
    println!("Description:  {}", or_none(&project.description));
    println!("Created:      {}", project.created_at);
    println!("Modified:     {}", project.modified_at);
    println!("Entities:     {}", stats.entities);
    println!("Associations: {}", stats.associations);
    println!("Links:        {}", stats.links);
    println!("Attributes:   {}", stats.attributes);
}

fn cmd_validate(project: &Project) {
    let issues = validator::validate(project);
    if issues.is_empty() {
        println!("Validation passed. No errors found.");
    } else {
        println!("Validation failed with {} error(s):", issues.len());
        for issue in &issues {
            println!("  - {}", issue);
        }
        process::exit(1);
    }
}

fn cmd_mld(project: &Project) {
    let schema = project_to_mld(project);
    if schema.tables.is_empty() {
        println!("No tables generated.");
    } else {
        print!("{}", report::render(&schema));
    }
}

fn cmd_sql(project: &Project, output: Option<&std::path::Path>) {
    let ddl = sql::generate(project);
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &ddl) {
                eprintln!("Error writing file: {}", e);
                process::exit(2);
            }
            println!("SQL written to {}", path.display());
        }
        None => print!("{}", ddl),
    }
}
