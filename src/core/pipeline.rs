use crate::core::search;
use crate::core::{ConfigProvider, Recipe, RecipeSource, ReportSink, SearchPipeline};
use crate::domain::model::{SearchCriterion, SearchResult};
use crate::utils::error::{RecipeError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const BUNDLE_NAME: &str = "search_results.zip";

pub struct RecipePipeline<R: RecipeSource, S: ReportSink, C: ConfigProvider> {
    source: R,
    sink: S,
    config: C,
}

impl<R: RecipeSource, S: ReportSink, C: ConfigProvider> RecipePipeline<R, S, C> {
    pub fn new(source: R, sink: S, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<R: RecipeSource, S: ReportSink, C: ConfigProvider> SearchPipeline
    for RecipePipeline<R, S, C>
{
    async fn fetch(&self) -> Result<Vec<Recipe>> {
        let recipes = self.source.list().await?;
        if recipes.is_empty() {
            // Not an error: searching an empty collection just matches nothing.
            tracing::warn!("Recipe collection is empty");
        }
        Ok(recipes)
    }

    fn search(&self, recipes: Vec<Recipe>, criterion: &SearchCriterion) -> Result<SearchResult> {
        tracing::debug!("Filtering {} recipes", recipes.len());
        Ok(search::search(&recipes, criterion))
    }

    async fn publish(&self, result: &SearchResult) -> Result<String> {
        let bundle = build_bundle(result, Utc::now())?;

        tracing::debug!("Writing search bundle ({} bytes)", bundle.len());
        self.sink.write_report(BUNDLE_NAME, &bundle).await?;

        Ok(format!("{}/{}", self.config.output_path(), BUNDLE_NAME))
    }
}

#[derive(Debug, Serialize)]
struct Manifest {
    generated_at: DateTime<Utc>,
    matches: usize,
}

/// Assembles the publishable bundle: the table as CSV plus the three chart
/// payloads and a manifest, zipped together.
fn build_bundle(result: &SearchResult, generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    zip.start_file::<_, ()>("table.csv", FileOptions::default())?;
    zip.write_all(&table_csv(result)?)?;

    zip.start_file::<_, ()>("bar_chart.json", FileOptions::default())?;
    zip.write_all(serde_json::to_string_pretty(&result.bar_chart())?.as_bytes())?;

    zip.start_file::<_, ()>("pie_chart.json", FileOptions::default())?;
    zip.write_all(serde_json::to_string_pretty(&result.pie_chart())?.as_bytes())?;

    zip.start_file::<_, ()>("line_chart.json", FileOptions::default())?;
    zip.write_all(serde_json::to_string_pretty(&result.line_chart())?.as_bytes())?;

    let manifest = Manifest {
        generated_at,
        matches: result.len(),
    };
    zip.start_file::<_, ()>("manifest.json", FileOptions::default())?;
    zip.write_all(serde_json::to_string_pretty(&manifest)?.as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn table_csv(result: &SearchResult) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["#", "Name", "Link", "Cooking Time in Minutes", "Difficulty"])?;
    for row in &result.table {
        writer.write_record([
            row.index.to_string(),
            row.name.clone(),
            row.link.clone(),
            row.cooking_time.to_string(),
            row.difficulty.to_string(),
        ])?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| RecipeError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Difficulty, DEFAULT_PIC};
    use std::collections::HashMap;
    use std::io::Read;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockSource {
        recipes: Vec<Recipe>,
    }

    #[async_trait::async_trait]
    impl RecipeSource for MockSource {
        async fn list(&self) -> Result<Vec<Recipe>> {
            Ok(self.recipes.clone())
        }
    }

    #[derive(Clone)]
    struct MockSink {
        reports: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockSink {
        fn new() -> Self {
            Self {
                reports: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_report(&self, name: &str) -> Option<Vec<u8>> {
            let reports = self.reports.lock().await;
            reports.get(name).cloned()
        }
    }

    #[async_trait::async_trait]
    impl ReportSink for MockSink {
        async fn write_report(&self, name: &str, data: &[u8]) -> Result<()> {
            let mut reports = self.reports.lock().await;
            reports.insert(name.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig;

    impl ConfigProvider for MockConfig {
        fn source_endpoint(&self) -> Option<&str> {
            None
        }

        fn recipes_path(&self) -> &str {
            "recipes.json"
        }

        fn output_path(&self) -> &str {
            "test_output"
        }
    }

    fn recipe(id: u64, name: &str, time: i32, ingredients: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            cooking_time: time,
            pic: DEFAULT_PIC.to_string(),
        }
    }

    fn read_entry(archive: &mut zip::ZipArchive<std::io::Cursor<Vec<u8>>>, name: &str) -> String {
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[tokio::test]
    async fn fetch_passes_through_the_snapshot() {
        let pipeline = RecipePipeline::new(
            MockSource {
                recipes: vec![recipe(1, "Tea", 5, "Water")],
            },
            MockSink::new(),
            MockConfig,
        );
        let recipes = pipeline.fetch().await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Tea");
    }

    #[tokio::test]
    async fn publish_writes_zip_with_table_and_charts() {
        let sink = MockSink::new();
        let pipeline = RecipePipeline::new(
            MockSource { recipes: vec![] },
            sink.clone(),
            MockConfig,
        );

        let recipes = vec![
            recipe(1, "Tea", 5, "Tea leaves, Sugar, Water"),
            recipe(2, "Iced Tea", 15, "Tea leaves, Sugar, Water, Ice"),
        ];
        let result = pipeline
            .search(recipes, &SearchCriterion::ByName("tea".to_string()))
            .unwrap();
        assert_eq!(result.len(), 2);

        let path = pipeline.publish(&result).await.unwrap();
        assert_eq!(path, format!("test_output/{}", BUNDLE_NAME));

        let data = sink.get_report(BUNDLE_NAME).await.unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(data)).unwrap();

        let table = read_entry(&mut archive, "table.csv");
        assert!(table.starts_with("#,Name,Link,Cooking Time in Minutes,Difficulty"));
        assert!(table.contains("1,Tea,/recipes/1,5,Easy"));
        assert!(table.contains("2,Iced Tea,/recipes/2,15,Hard"));

        let pie: crate::domain::model::ChartSpec =
            serde_json::from_str(&read_entry(&mut archive, "pie_chart.json")).unwrap();
        assert_eq!(pie.labels.len(), 2);
        assert_eq!(pie.values.iter().sum::<f64>(), 2.0);

        let manifest: serde_json::Value =
            serde_json::from_str(&read_entry(&mut archive, "manifest.json")).unwrap();
        assert_eq!(manifest["matches"], 2);
    }

    #[test]
    fn table_csv_has_one_line_per_row_plus_header() {
        let recipes = vec![recipe(1, "Recipe 1", 10, "a, b")];
        let result = search::search(
            &recipes,
            &SearchCriterion::ByDifficulty(Difficulty::Intermediate),
        );
        let csv_bytes = table_csv(&result).unwrap();
        let text = String::from_utf8(csv_bytes).unwrap();
        assert_eq!(text.trim_end().lines().count(), 2);
    }
}
