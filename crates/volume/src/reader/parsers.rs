//! Library of parser functions

// nom parser combinators
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::multi::separated_list0;
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::IResult;

/// Non-negative integer count taking up the whole line
///
/// Surrounding whitespace and a leading `+` are allowed, anything else on the
/// line is an error.
pub(crate) fn count(i: &str) -> IResult<&str, usize> {
    all_consuming(preceded(
        opt(char('+')),
        map_res(digit1, |s: &str| s.parse::<usize>()),
    ))(i.trim())
}

/// Any run of unicode whitespace, including form feeds and vertical tabs
fn whitespace(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_whitespace())(i)
}

/// Whitespace separated list of values taking up the whole line
///
/// Values are parsed to double precision and narrowed to `f32`. Numbers must
/// be separated by whitespace, so run-on values such as `1.0-2.0` fail rather
/// than being split. A blank line is an empty list.
pub(crate) fn vector_of_f32(i: &str) -> IResult<&str, Vec<f32>> {
    all_consuming(separated_list0(whitespace, map(double, |v| v as f32)))(i.trim())
}
