use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::sequence::*;

#[derive(Clone, PartialEq, Debug)]
pub enum Command {
    /// Replace the contents of the value field.
    Value(String),
    /// Press "Assign", optionally typing into the value field first.
    Assign(Option<String>),
    Read(String),
    Free,
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines and `#` comments give `None`.
pub fn command(input: &str) -> nom::IResult<&str, Option<Command>> {
    let (rest, _) = space0(input)?;
    let rest = strip_comment(rest);

    if rest.trim().is_empty() {
        return Ok(("", None));
    }

    map(
        alt((
            map(preceded(keyword("value"), argument), |text| {
                Command::Value(text.unwrap_or_default())
            }),
            map(preceded(keyword("assign"), argument), Command::Assign),
            map(
                preceded(keyword("read"), map_opt(argument, |text| text)),
                Command::Read,
            ),
            value(Command::Free, terminated(keyword("free"), end)),
            value(Command::Show, terminated(keyword("show"), end)),
            value(Command::Help, terminated(alt((keyword("help"), tag("?"))), end)),
            value(
                Command::Quit,
                terminated(alt((keyword("quit"), keyword("exit"))), end),
            ),
        )),
        Some,
    )(rest)
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default()
}

/// A case-insensitive word followed by whitespace or the end of the line.
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> nom::IResult<&'a str, &'a str> {
    terminated(tag_no_case(word), peek(alt((space1, eof))))
}

fn end(input: &str) -> nom::IResult<&str, &str> {
    preceded(space0, eof)(input)
}

/// Everything up to the end of the line, without surrounding whitespace.
fn argument(input: &str) -> nom::IResult<&str, Option<String>> {
    map(rest, |text: &str| {
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    })(input)
}
