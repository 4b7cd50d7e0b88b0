use itertools::Itertools;

use crate::{lists::LocationLists, parser::parse_lists};

/// Each left value weighted by how often it appears in the right column.
///
/// Accumulated as `i128`: a single `i64::MAX` matched twice already overflows `i64`.
pub fn similarity_score(lists: &LocationLists) -> i128 {
    let counts = lists.right().iter().counts();

    lists
        .left()
        .iter()
        .map(|value| {
            // usize is at most 64 bits wide, so the count is exact in i128
            let count = counts.get(value).copied().unwrap_or(0) as i128;
            i128::from(*value) * count
        })
        .sum::<i128>()
}

#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn process(input: &str) -> miette::Result<String> {
    let (lists, remainder) = parse_lists(input);
    remainder.report();

    let result = similarity_score(&lists);

    Ok(result.to_string())
}
