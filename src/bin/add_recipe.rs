use clap::Parser;
use recipe_box::domain::model::RecipeDraft;
use recipe_box::domain::ports::RecipeStore;
use recipe_box::utils::logger;
use recipe_box::JsonFileStore;

#[derive(Parser)]
#[command(name = "add-recipe")]
#[command(about = "Add a recipe to a JSON recipe file")]
struct Args {
    /// Recipe name (max 50 characters)
    #[arg(long)]
    name: String,

    /// Ingredients as a single "a, b, c" string (max 225 characters)
    #[arg(long)]
    ingredients: String,

    /// Cooking time in minutes
    #[arg(long)]
    cooking_time: i32,

    /// Picture reference; a placeholder is used when omitted
    #[arg(long)]
    pic: Option<String>,

    /// JSON file holding the recipe collection
    #[arg(long, default_value = "./recipes.json")]
    recipes_path: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let store = JsonFileStore::new(args.recipes_path.clone());
    let draft = RecipeDraft {
        name: args.name,
        ingredients: args.ingredients,
        cooking_time: args.cooking_time,
        pic: args.pic,
    };

    match store.add(draft).await {
        Ok(recipe) => {
            println!(
                "✅ Recipe added: #{} {} ({}, {} min)",
                recipe.id,
                recipe.name,
                recipe.difficulty(),
                recipe.cooking_time
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to add recipe: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
