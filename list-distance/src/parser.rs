use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::i64 as integer,
    combinator::{eof, peek},
    sequence::{preceded, separated_pair, terminated},
    IResult,
};

use crate::lists::LocationLists;

/// Why ingestion stopped reading pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remainder {
    /// Only whitespace was left.
    Exhausted,
    /// A single integer was left over with no partner.
    Unpaired(i64),
    /// A token that is not an integer was reached after `pairs_read` pairs.
    Malformed { token: String, pairs_read: usize },
}

impl Remainder {
    pub fn report(&self) {
        match self {
            Remainder::Exhausted => tracing::debug!("input exhausted"),
            Remainder::Unpaired(value) => {
                tracing::warn!(value, "ignoring unpaired trailing value")
            }
            Remainder::Malformed { token, pairs_read } => {
                tracing::warn!(%token, pairs_read, "stopped reading at malformed token")
            }
        }
    }
}

// Same notion of whitespace as `str::split_whitespace`, so `\x0b` and `\x0c` separate tokens too.
fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn whitespace1(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

fn token_boundary(input: &str) -> IResult<&str, &str> {
    peek(alt((whitespace1, eof)))(input)
}

/// An integer that makes up a whole whitespace-delimited token.
fn integer_token(input: &str) -> IResult<&str, i64> {
    terminated(integer, token_boundary)(input)
}

fn location_pair(input: &str) -> IResult<&str, (i64, i64)> {
    preceded(
        whitespace0,
        separated_pair(integer_token, whitespace1, integer_token),
    )(input)
}

fn classify(remaining: &str, pairs_read: usize) -> Remainder {
    if remaining.trim().is_empty() {
        return Remainder::Exhausted;
    }

    if let Ok((rest, value)) = preceded(whitespace0, integer_token)(remaining) {
        if rest.trim().is_empty() {
            return Remainder::Unpaired(value);
        }
    }

    // location_pair failed, so one of the next two tokens is not an integer
    let mut tokens = remaining.split_whitespace();
    let malformed = tokens.clone().find(|token| integer_token(token).is_err());
    debug_assert!(malformed.is_some(), "pair parse failed on integer tokens");
    let token = malformed
        .or_else(|| tokens.next())
        .unwrap_or(remaining)
        .to_string();

    Remainder::Malformed { token, pairs_read }
}

/// Reads pairs until the input runs out or stops parsing.
#[tracing::instrument(level = "debug", skip(input), fields(bytes = input.len()))]
pub fn parse_lists(input: &str) -> (LocationLists, Remainder) {
    let mut lists = LocationLists::default();
    let mut remaining = input;

    while let Ok((rest, (left, right))) = location_pair(remaining) {
        lists.push(left, right);
        remaining = rest;
    }

    let remainder = classify(remaining, lists.len());
    tracing::debug!(pairs = lists.len(), ?remainder);

    (lists, remainder)
}
