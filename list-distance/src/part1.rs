use crate::parser::parse_lists;

#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn process(input: &str) -> miette::Result<String> {
    let (lists, remainder) = parse_lists(input);
    remainder.report();

    // pair smallest with smallest, and so on up both columns
    let result = lists.sort().total_distance();

    Ok(result.to_string())
}
