use crate::core::classify::classify;
use crate::utils::error::RecipeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder image used when a recipe is submitted without a picture.
pub const DEFAULT_PIC: &str = "no_picture.jpg";

/// A stored recipe. Immutable for the duration of a search; `id` is assigned
/// by the store and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    /// Single string of `", "`-separated ingredient names. No escaping of
    /// embedded commas and no trimming of irregular spacing.
    pub ingredients: String,
    /// Minutes. Negative values are accepted and classify as short.
    pub cooking_time: i32,
    #[serde(default = "default_pic")]
    pub pic: String,
}

fn default_pic() -> String {
    DEFAULT_PIC.to_string()
}

impl Recipe {
    /// Naive split on the canonical `", "` separator. An empty ingredients
    /// string counts as 1; irregular spacing over- or undercounts. Documented
    /// behavior, kept as-is.
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.split(", ").count()
    }

    /// Derived on every access, never stored.
    pub fn difficulty(&self) -> Difficulty {
        classify(self.cooking_time, self.ingredient_count())
    }

    /// Opaque link target for the recipe's detail location.
    pub fn detail_path(&self) -> String {
        format!("/recipes/{}", self.id)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// User-submitted recipe input, validated before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: String,
    pub cooking_time: i32,
    pub pic: Option<String>,
}

impl RecipeDraft {
    pub fn into_recipe(self, id: u64) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            cooking_time: self.cooking_time,
            pic: self.pic.unwrap_or_else(default_pic),
        }
    }
}

/// Recipe difficulty, derived from cooking time and ingredient count.
///
/// `Unknown` is unreachable through [`classify`] and exists only as a
/// defensive fallback; parsing user input rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Intermediate,
    Hard,
    Unknown,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = RecipeError;

    // Only the four user-facing levels are accepted as search input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(RecipeError::ValidationError {
                field: "difficulty".to_string(),
                value: other.to_string(),
                reason: "expected Easy, Medium, Intermediate or Hard".to_string(),
            }),
        }
    }
}

/// Closed set of search dimensions. Unknown selectors are rejected at form
/// validation instead of silently matching nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCriterion {
    /// Case-insensitive substring match against the recipe name. An empty
    /// term matches nothing (the filter step is skipped entirely).
    ByName(String),
    /// Exact cooking-time equality, in minutes.
    ByCookingTime(i32),
    /// Match against the computed difficulty; requires per-recipe
    /// classification since difficulty is never stored.
    ByDifficulty(Difficulty),
}

/// One display-ready row of the search table. `index` is 1-based and exists
/// for display only, it is not a recipe attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub index: usize,
    pub name: String,
    pub link: String,
    pub cooking_time: i32,
    pub difficulty: Difficulty,
}

/// A single per-recipe data point in an aggregate series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint<T> {
    pub name: String,
    pub value: T,
}

/// Output of a search: the table projection plus the three chart-shaped
/// aggregate summaries. Aggregate lengths always equal the table row count.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    pub table: Vec<TableRow>,
    pub cooking_time_series: Vec<SeriesPoint<i32>>,
    /// Counts per level, descending by frequency, ties broken by the level
    /// first encountered in match order.
    pub difficulty_distribution: Vec<(Difficulty, usize)>,
    pub ingredient_count_series: Vec<SeriesPoint<usize>>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn bar_chart(&self) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Bar,
            x_label: Some("Recipe Names".to_string()),
            y_label: Some("Cooking Time (Minutes)".to_string()),
            labels: self
                .cooking_time_series
                .iter()
                .map(|p| p.name.clone())
                .collect(),
            values: self
                .cooking_time_series
                .iter()
                .map(|p| f64::from(p.value))
                .collect(),
        }
    }

    pub fn pie_chart(&self) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Pie,
            x_label: None,
            y_label: None,
            labels: self
                .difficulty_distribution
                .iter()
                .map(|(level, _)| level.to_string())
                .collect(),
            values: self
                .difficulty_distribution
                .iter()
                .map(|(_, count)| *count as f64)
                .collect(),
        }
    }

    pub fn line_chart(&self) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            x_label: Some("Recipe Names".to_string()),
            y_label: Some("Number of Ingredients".to_string()),
            labels: self
                .ingredient_count_series
                .iter()
                .map(|p| p.name.clone())
                .collect(),
            values: self
                .ingredient_count_series
                .iter()
                .map(|p| p.value as f64)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

/// Chart-shaped payload handed to a rendering collaborator. The core never
/// draws anything; it stops at labels and values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}
