use clap::Parser;
use recipe_box::core::engine::{SearchEngine, SearchOutcome};
use recipe_box::core::pipeline::RecipePipeline;
use recipe_box::domain::ports::{Authorizer, ConfigProvider};
use recipe_box::utils::logger;
use recipe_box::utils::validation::{SearchForm, Validate};
use recipe_box::{
    AllowAll, CliConfig, HttpRecipeSource, JsonFileStore, LocalReportSink, TokenAuthorizer,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting recipe-box search");

    let form = SearchForm {
        search_by: cli.search_by.clone(),
        search_term: cli.search_term.clone(),
        cooking_time: cli.cooking_time.clone(),
        difficulty: cli.difficulty.clone(),
    };
    let token = cli.access_token.clone();

    let outcome = if let Some(path) = cli.config.clone() {
        let cfg = TomlConfig::from_file(&path)?;
        run_search(cfg, &form, token.as_deref()).await?
    } else {
        run_search(cli, &form, token.as_deref()).await?
    };

    print_outcome(&outcome);
    Ok(())
}

async fn run_search<C>(
    config: C,
    form: &SearchForm,
    token: Option<&str>,
) -> anyhow::Result<SearchOutcome>
where
    C: ConfigProvider + Validate + 'static,
{
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let criterion = form.criterion()?;

    let authorizer: Box<dyn Authorizer> = match config.expected_token() {
        Some(expected) => Box::new(TokenAuthorizer::new(expected)),
        None => Box::new(AllowAll),
    };
    let sink = LocalReportSink::new(config.output_path().to_string());

    let outcome = match config.source_endpoint().map(str::to_string) {
        Some(endpoint) => {
            let pipeline = RecipePipeline::new(HttpRecipeSource::new(endpoint), sink, config);
            SearchEngine::new(pipeline, authorizer)
                .run(&criterion, token)
                .await?
        }
        None => {
            let recipes_path = config.recipes_path().to_string();
            let pipeline = RecipePipeline::new(JsonFileStore::new(recipes_path), sink, config);
            SearchEngine::new(pipeline, authorizer)
                .run(&criterion, token)
                .await?
        }
    };

    Ok(outcome)
}

fn print_outcome(outcome: &SearchOutcome) {
    if outcome.result.is_empty() {
        println!("No recipes matched your search.");
        return;
    }

    println!(
        "{:>3}  {:<30} {:>8}  {:<12} {}",
        "#", "Name", "Minutes", "Difficulty", "Link"
    );
    for row in &outcome.result.table {
        println!(
            "{:>3}  {:<30} {:>8}  {:<12} {}",
            row.index,
            row.name,
            row.cooking_time,
            row.difficulty.to_string(),
            row.link
        );
    }

    if let Some(path) = &outcome.output_path {
        println!("✅ Search completed: {} match(es)", outcome.result.len());
        println!("📁 Bundle saved to: {}", path);
    }
}
