//! Lenient base-10 parsing of the text fields.
//!
//! Leading whitespace and an optional sign are accepted, then the longest
//! run of digits is taken. Anything after the digits is ignored, so
//! `"12abc"` reads as `12`.

use crate::error::Error;
use nom::character::complete::*;
use nom::combinator::*;
use nom::sequence::*;

pub fn integer_prefix(input: &str) -> nom::IResult<&str, i64> {
    preceded(
        multispace0,
        map_res(recognize(pair(opt(one_of("+-")), digit1)), |digits: &str| {
            digits.parse::<i64>()
        }),
    )(input)
}

/// Parses the value field.
pub fn value(input: &str) -> Result<i64, Error> {
    integer_prefix(input)
        .map(|(_, value)| value)
        .map_err(|_| Error::InvalidNumber(input.to_string()))
}

/// Parses the address field and checks it against a memory of `size` cells.
pub fn address(input: &str, size: usize) -> Result<usize, Error> {
    let invalid = || Error::InvalidAddress(input.to_string());
    let (_, address) = integer_prefix(input).map_err(|_| invalid())?;
    match usize::try_from(address) {
        Ok(address) if address < size => Ok(address),
        _ => Err(invalid()),
    }
}
