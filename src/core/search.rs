use crate::domain::model::{Recipe, SearchCriterion, SearchResult, SeriesPoint, TableRow};

/// Filters a recipe collection by the given criterion and shapes the matches
/// into the table projection plus the three aggregate summaries.
///
/// Match order follows the input collection order. An empty collection or an
/// empty match set yields an empty result, never an error.
pub fn search(recipes: &[Recipe], criterion: &SearchCriterion) -> SearchResult {
    let matches = filter(recipes, criterion);
    if matches.is_empty() {
        return SearchResult::default();
    }

    let mut table = Vec::with_capacity(matches.len());
    let mut cooking_time_series = Vec::with_capacity(matches.len());
    let mut ingredient_count_series = Vec::with_capacity(matches.len());
    let mut distribution: Vec<(_, usize)> = Vec::new();

    for (i, recipe) in matches.iter().enumerate() {
        let difficulty = recipe.difficulty();

        table.push(TableRow {
            index: i + 1,
            name: recipe.name.clone(),
            link: recipe.detail_path(),
            cooking_time: recipe.cooking_time,
            difficulty,
        });
        cooking_time_series.push(SeriesPoint {
            name: recipe.name.clone(),
            value: recipe.cooking_time,
        });
        ingredient_count_series.push(SeriesPoint {
            name: recipe.name.clone(),
            value: recipe.ingredient_count(),
        });

        match distribution.iter_mut().find(|(level, _)| *level == difficulty) {
            Some((_, count)) => *count += 1,
            None => distribution.push((difficulty, 1)),
        }
    }

    // Stable sort keeps first-encountered order among equal counts.
    distribution.sort_by(|a, b| b.1.cmp(&a.1));

    SearchResult {
        table,
        cooking_time_series,
        difficulty_distribution: distribution,
        ingredient_count_series,
    }
}

fn filter<'a>(recipes: &'a [Recipe], criterion: &SearchCriterion) -> Vec<&'a Recipe> {
    match criterion {
        // Empty term: no filter has been applied yet, so nothing matches.
        SearchCriterion::ByName(term) if term.is_empty() => Vec::new(),
        SearchCriterion::ByName(term) => {
            let needle = term.to_lowercase();
            recipes
                .iter()
                .filter(|r| r.name.to_lowercase().contains(&needle))
                .collect()
        }
        SearchCriterion::ByCookingTime(minutes) => recipes
            .iter()
            .filter(|r| r.cooking_time == *minutes)
            .collect(),
        // Difficulty is derived, so this path classifies every recipe before
        // filtering; it cannot be pushed down to storage.
        SearchCriterion::ByDifficulty(level) => recipes
            .iter()
            .filter(|r| r.difficulty() == *level)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Difficulty, DEFAULT_PIC};

    fn recipe(id: u64, name: &str, time: i32, ingredients: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            cooking_time: time,
            pic: DEFAULT_PIC.to_string(),
        }
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let result = search(&[], &SearchCriterion::ByName("x".to_string()));
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn empty_name_term_matches_nothing() {
        let recipes = vec![recipe(1, "Tea", 5, "Water")];
        let result = search(&recipes, &SearchCriterion::ByName(String::new()));
        assert!(result.is_empty());
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let recipes = vec![
            recipe(1, "Tea", 5, "Tea leaves, Sugar, Water"),
            recipe(2, "Coffee", 5, "Beans, Water"),
        ];
        let result = search(&recipes, &SearchCriterion::ByName("tea".to_string()));
        assert_eq!(result.len(), 1);

        let row = &result.table[0];
        assert_eq!(row.index, 1);
        assert_eq!(row.name, "Tea");
        assert_eq!(row.link, "/recipes/1");
        assert_eq!(row.difficulty, Difficulty::Easy);
        assert_eq!(result.ingredient_count_series[0].value, 3);
    }

    #[test]
    fn cooking_time_match_is_exact() {
        let recipes = vec![
            recipe(1, "Tea", 5, "Water"),
            recipe(2, "Stew", 50, "Beef, Water"),
        ];
        let result = search(&recipes, &SearchCriterion::ByCookingTime(50));
        assert_eq!(result.len(), 1);
        assert_eq!(result.table[0].name, "Stew");

        assert!(search(&recipes, &SearchCriterion::ByCookingTime(51)).is_empty());
    }

    #[test]
    fn difficulty_filter_classifies_each_recipe() {
        let recipes = vec![
            recipe(1, "Recipe 1", 10, "a, b"),
            recipe(2, "Recipe 2", 20, "a, b"),
        ];
        let result = search(
            &recipes,
            &SearchCriterion::ByDifficulty(Difficulty::Intermediate),
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result.table[0].name, "Recipe 1");
        assert_eq!(result.table[1].name, "Recipe 2");
        assert_eq!(
            result.difficulty_distribution,
            vec![(Difficulty::Intermediate, 2)]
        );
    }

    #[test]
    fn match_order_follows_collection_order() {
        let recipes = vec![
            recipe(3, "Pasta Salad", 15, "a, b, c, d"),
            recipe(1, "Pasta", 12, "a, b"),
            recipe(2, "Pasta Bake", 40, "a, b, c, d, e"),
        ];
        let result = search(&recipes, &SearchCriterion::ByName("pasta".to_string()));
        let names: Vec<_> = result.table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pasta Salad", "Pasta", "Pasta Bake"]);
        assert_eq!(
            result.table.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn distribution_sorts_by_count_then_first_encounter() {
        let recipes = vec![
            recipe(1, "Dish A", 5, "x"),           // Easy
            recipe(2, "Dish B", 20, "x, y, z, w"), // Hard
            recipe(3, "Dish C", 20, "x, y, z, w"), // Hard
            recipe(4, "Dish D", 5, "x, y, z, w"),  // Medium
        ];
        let result = search(&recipes, &SearchCriterion::ByName("dish".to_string()));
        assert_eq!(
            result.difficulty_distribution,
            vec![
                (Difficulty::Hard, 2),
                (Difficulty::Easy, 1),
                (Difficulty::Medium, 1),
            ]
        );
    }

    #[test]
    fn aggregate_lengths_equal_table_row_count() {
        let recipes = vec![
            recipe(1, "Tea", 5, "Tea leaves, Sugar, Water"),
            recipe(2, "Iced Tea", 15, "Tea leaves, Sugar, Water, Ice"),
        ];
        let result = search(&recipes, &SearchCriterion::ByName("tea".to_string()));
        assert_eq!(result.cooking_time_series.len(), result.table.len());
        assert_eq!(result.ingredient_count_series.len(), result.table.len());
        let counted: usize = result
            .difficulty_distribution
            .iter()
            .map(|(_, n)| n)
            .sum();
        assert_eq!(counted, result.table.len());
    }
}
