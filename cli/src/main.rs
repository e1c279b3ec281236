mod output;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use larder_core::ai::OpenAiClient;
use larder_core::{
    detect_ingredients, mark_additional_ingredients, parse_recipe_sections, show_recipe,
    suggest_recipes, tally_from_selection_labels, DietType, RecipeConstraints,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Find ingredients in a photo and turn them into recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect ingredients in a photo and save an annotated copy
    Detect {
        /// Photo to analyze (JPEG, PNG, GIF or WebP)
        image: PathBuf,
        /// Where to write the annotated JPEG
        #[arg(long, short, default_value = "annotated.jpg")]
        output: PathBuf,
    },
    /// Suggest recipe names for the selected ingredients
    Suggest {
        #[command(flatten)]
        recipe: RecipeArgs,
    },
    /// Generate a detailed recipe
    Recipe {
        /// Recipe name, usually one of the suggestions
        name: String,
        #[command(flatten)]
        recipe: RecipeArgs,
    },
    /// Split a saved recipe response into sections (no network)
    Parse {
        /// File containing the raw model response
        file: PathBuf,
        /// Selected ingredient labels, e.g. "Tomato (2)"
        #[arg(long = "ingredient", short)]
        ingredients: Vec<String>,
    },
}

#[derive(Args)]
struct RecipeArgs {
    /// Selected ingredient labels, e.g. "Tomato (2)"
    #[arg(long = "ingredient", short)]
    ingredients: Vec<String>,
    /// Dietary restriction: vegetarian, non-vegetarian or any
    #[arg(long, default_value = "any")]
    diet: DietType,
    /// Cuisine style, e.g. "Italian"
    #[arg(long, default_value = "Any")]
    cuisine: String,
    /// Number of people to serve
    #[arg(long, default_value_t = 4)]
    servings: u32,
    /// Extra requests passed to the model
    #[arg(long)]
    notes: Option<String>,
}

impl RecipeArgs {
    fn constraints(&self) -> RecipeConstraints {
        RecipeConstraints {
            diet: self.diet,
            cuisine: self.cuisine.clone(),
            serving_size: self.servings,
            notes: self.notes.clone(),
        }
    }
}

/// Log to stderr so stdout only carries results. Filter with `RUST_LOG`.
fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn ai_client() -> Result<OpenAiClient> {
    OpenAiClient::from_env().context("Failed to load AI configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { image, output } => {
            detect(&image, &output).await?;
        }
        Commands::Suggest { recipe } => {
            suggest(&recipe).await?;
        }
        Commands::Recipe { name, recipe } => {
            recipe_details(&name, &recipe).await?;
        }
        Commands::Parse { file, ingredients } => {
            parse(&file, &ingredients)?;
        }
    }

    Ok(())
}

async fn detect(image: &Path, output: &Path) -> Result<()> {
    let bytes = std::fs::read(image)
        .with_context(|| format!("Failed to read image {}", image.display()))?;
    let client = ai_client()?;

    let outcome = detect_ingredients(&client, bytes).await;

    println!("{}", outcome.status);
    for choice in &outcome.choices {
        println!("  {}", choice);
    }

    if !outcome.choices.is_empty() {
        std::fs::write(output, &outcome.image)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Annotated image saved to {}", output.display());
    }

    Ok(())
}

async fn suggest(args: &RecipeArgs) -> Result<()> {
    let client = ai_client()?;
    let outcome = suggest_recipes(&client, &args.ingredients, &args.constraints()).await;

    println!("{}", outcome.status);
    for (i, name) in outcome.names.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }

    Ok(())
}

async fn recipe_details(name: &str, args: &RecipeArgs) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Recipe name must not be empty");
    }

    let client = ai_client()?;
    let details = show_recipe(&client, name, &args.ingredients, &args.constraints()).await?;

    if let Some(details) = details {
        output::print_recipe(&details);
    }

    Ok(())
}

fn parse(file: &Path, ingredients: &[String]) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut sections = parse_recipe_sections(&text);
    if !ingredients.is_empty() {
        let tally = tally_from_selection_labels(ingredients);
        sections.ingredients = mark_additional_ingredients(&sections.ingredients, &tally);
    }

    output::print_sections(&sections);
    Ok(())
}
