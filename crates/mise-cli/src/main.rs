use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use mise_core::{
    build_grocery_list, build_schedule, parse_recipe_request, CapacityProfile,
    ParseRecipeRequest, Recipe,
};

#[derive(Parser)]
#[command(name = "mise")]
#[command(about = "Recipe parsing, scaling, and kitchen scheduling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a raw text recipe file into structured JSON
    Parse {
        /// Path to the recipe text file
        file: PathBuf,
        /// Headcount the recipe text is written for
        #[arg(long)]
        headcount: u32,
        /// Scale the parsed recipe to this headcount
        #[arg(long)]
        scale_to: Option<u32>,
        /// Recipe title (defaults to the first line of the text)
        #[arg(long)]
        title: Option<String>,
    },
    /// Build a backward schedule from parsed recipe JSON files
    Plan {
        /// Paths to recipe JSON files (as produced by `mise parse`)
        files: Vec<PathBuf>,
        /// Serve time, RFC 3339 (e.g. 2025-11-27T17:30:00Z)
        #[arg(long)]
        serve_time: DateTime<Utc>,
        /// Number of stove burners available
        #[arg(long)]
        burners: Option<u32>,
    },
    /// Build a sectioned grocery list from parsed recipe JSON files
    Grocery {
        /// Paths to recipe JSON files
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            headcount,
            scale_to,
            title,
        } => parse(&file, headcount, scale_to, title)?,
        Commands::Plan {
            files,
            serve_time,
            burners,
        } => plan(&files, serve_time, burners)?,
        Commands::Grocery { files } => grocery(&files)?,
    }

    Ok(())
}

fn parse(file: &PathBuf, headcount: u32, scale_to: Option<u32>, title: Option<String>) -> Result<()> {
    let raw_text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let recipe = parse_recipe_request(&ParseRecipeRequest {
        title,
        base_headcount: headcount,
        target_headcount: scale_to,
        raw_text,
    });

    println!("{}", serde_json::to_string_pretty(&recipe)?);
    Ok(())
}

fn plan(files: &[PathBuf], serve_time: DateTime<Utc>, burners: Option<u32>) -> Result<()> {
    let recipes = load_recipes(files)?;
    let profile = burners.map(|burner_count| CapacityProfile {
        oven_capacity_lbs: None,
        burner_count: Some(burner_count),
    });

    let schedule = build_schedule(&recipes, serve_time, profile.as_ref());

    println!("{}", serde_json::to_string_pretty(&schedule)?);
    Ok(())
}

fn grocery(files: &[PathBuf]) -> Result<()> {
    let recipes = load_recipes(files)?;
    let list = build_grocery_list(&recipes);

    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}

fn load_recipes(files: &[PathBuf]) -> Result<Vec<Recipe>> {
    files
        .iter()
        .map(|path| {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse recipe JSON in {}", path.display()))
        })
        .collect()
}
