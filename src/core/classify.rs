use crate::domain::model::Difficulty;

/// Maps cooking time and ingredient count onto a difficulty level.
///
/// Two predicates partition the space: "short" is under 10 minutes and "few"
/// is under 4 ingredients. Ties land on the not-short/not-few side: exactly
/// 10 minutes is not short, exactly 4 ingredients is not few. Negative
/// cooking times are accepted and count as short.
///
/// Pure and total over the integers, so `Difficulty::Unknown` is never
/// returned.
pub fn classify(cooking_time: i32, ingredient_count: usize) -> Difficulty {
    match (cooking_time < 10, ingredient_count < 4) {
        (true, true) => Difficulty::Easy,
        (true, false) => Difficulty::Medium,
        (false, true) => Difficulty::Intermediate,
        (false, false) => Difficulty::Hard,
    }
}
