use crate::condition::{Cond, CondRangeArg, CondSpecArg};
use crate::err::SlErr;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete as character;
use nom::character::complete::{char, space1};
use nom::combinator::{map, opt, rest, verify};
use nom::error::context;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};
use slothful::Integer;

pub(in crate::parse) type ParserError<'a> = VerboseError<&'a str>;

/// 语法解析结果，正则在语法解析成功之后再编译，以便报告正则本身的错误。
#[derive(Debug, Clone, PartialEq)]
enum ParsedCond<'a> {
    Ready(Cond),
    Reg(&'a str),
}

/// 解析完整的条件表达式，不允许有剩余内容。
pub(crate) fn parse_whole_cond(text: &str) -> Result<Cond, SlErr> {
    let input = text.trim();
    match parse_cond(input) {
        Ok((remaining, parsed)) => {
            let remaining = remaining.trim();
            if !remaining.is_empty() {
                return Err(SlErr::UnexpectedCondRemaining { cond: text.to_owned(), remaining: remaining.to_owned() });
            }
            match parsed {
                ParsedCond::Ready(cond) => Ok(cond),
                ParsedCond::Reg(reg) => Cond::new_reg_match(unquoted(reg)),
            }
        }
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
            Err(SlErr::ParseCondErr { cond: text.to_owned(), error: convert_error(input, err) })
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(SlErr::ParseCondErr { cond: text.to_owned(), error: "incomplete condition".to_owned() })
        }
    }
}

fn parse_cond(input: &str) -> IResult<&str, ParsedCond<'_>, ParserError<'_>> {
    alt((
        map(parse_plain_cond, ParsedCond::Ready),
        context("Cond::RegMatch", map(preceded((tag_no_case("reg"), space1), rest), ParsedCond::Reg)),
    ))
    .parse(input)
}

fn parse_plain_cond(input: &str) -> IResult<&str, Cond, ParserError<'_>> {
    alt((
        context(
            "Cond::TextLenRange",
            preceded((tag_no_case("len"), space1), map(parse_cond_range(parse_len), Cond::TextLenRange)),
        ),
        context(
            "Cond::TextLenSpec",
            preceded((tag_no_case("len"), space1), map(parse_cond_spec(parse_len), Cond::TextLenSpec)),
        ),
        context(
            "Cond::NumRange",
            preceded((tag_no_case("num"), space1), map(parse_cond_range(parse_integer), Cond::NumRange)),
        ),
        context(
            "Cond::NumSpec",
            preceded((tag_no_case("num"), space1), map(parse_cond_spec(parse_integer), Cond::NumSpec)),
        ),
        context(
            "Cond::Num",
            map(preceded(tag_no_case("num"), opt(preceded(space1, char('!')))), |not| Cond::new_num(not.is_some())),
        ),
        context(
            "Cond::Parity",
            alt((
                map(tag_no_case("even"), |_| Cond::new_parity(true)),
                map(tag_no_case("odd"), |_| Cond::new_parity(false)),
            )),
        ),
        context(
            "Cond::TextEmptyOrBlank",
            alt((
                map(tag_no_case("empty"), |_| Cond::new_text_empty_or_blank(true)),
                map(tag_no_case("blank"), |_| Cond::new_text_empty_or_blank(false)),
            )),
        ),
    ))
    .parse(input)
}

fn parse_len(input: &str) -> IResult<&str, usize, ParserError<'_>> {
    character::usize(input)
}

fn parse_integer(input: &str) -> IResult<&str, Integer, ParserError<'_>> {
    character::i64(input)
}

/// `[!][<min>],[<max>]`，最小值和最大值至少指定其一。
fn parse_cond_range<'a, T, F>(bound: F) -> impl Parser<&'a str, Output = CondRangeArg<T>, Error = ParserError<'a>>
where
    T: PartialOrd,
    F: Parser<&'a str, Output = T, Error = ParserError<'a>> + Clone,
{
    context(
        "CondRangeArg",
        map(
            verify(
                (opt(char('!')), opt(bound.clone()), char(','), opt(bound)),
                |(_, min, _, max): &(Option<char>, Option<T>, char, Option<T>)| min.is_some() || max.is_some(),
            ),
            |(not, min, _, max)| CondRangeArg::new(min, max, not.is_some()),
        ),
    )
}

/// `[!]=<spec>`
fn parse_cond_spec<'a, T, F>(spec: F) -> impl Parser<&'a str, Output = CondSpecArg<T>, Error = ParserError<'a>>
where
    T: PartialEq,
    F: Parser<&'a str, Output = T, Error = ParserError<'a>>,
{
    context(
        "CondSpecArg",
        map((opt(char('!')), char('='), spec), |(not, _, spec)| CondSpecArg::new(spec, not.is_some())),
    )
}

fn unquoted(reg: &str) -> &str {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| reg.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)))
        .unwrap_or(reg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_len_range() {
        assert_eq!(parse_whole_cond("len 1,3"), Ok(Cond::TextLenRange(CondRangeArg::new(Some(1), Some(3), false))));
        assert_eq!(parse_whole_cond("len ,3"), Ok(Cond::TextLenRange(CondRangeArg::new(None, Some(3), false))));
        assert_eq!(parse_whole_cond("LEN 1,"), Ok(Cond::TextLenRange(CondRangeArg::new(Some(1), None, false))));
        assert_eq!(parse_whole_cond("len !1,3"), Ok(Cond::TextLenRange(CondRangeArg::new(Some(1), Some(3), true))));
        assert!(parse_whole_cond("len !,").is_err());
        assert!(parse_whole_cond("len ,").is_err());
        assert!(parse_whole_cond("len -1,3").is_err());
    }

    #[test]
    fn test_parse_text_len_spec() {
        assert_eq!(parse_whole_cond("len =3"), Ok(Cond::TextLenSpec(CondSpecArg::new(3, false))));
        assert_eq!(parse_whole_cond("len !=3"), Ok(Cond::TextLenSpec(CondSpecArg::new(3, true))));
    }

    #[test]
    fn test_parse_num_range() {
        assert_eq!(parse_whole_cond("num -2,5"), Ok(Cond::NumRange(CondRangeArg::new(Some(-2), Some(5), false))));
        assert_eq!(parse_whole_cond("num !,5"), Ok(Cond::NumRange(CondRangeArg::new(None, Some(5), true))));
        assert_eq!(parse_whole_cond(" num 0, "), Ok(Cond::NumRange(CondRangeArg::new(Some(0), None, false))));
    }

    #[test]
    fn test_parse_num_spec() {
        assert_eq!(parse_whole_cond("num =3"), Ok(Cond::NumSpec(CondSpecArg::new(3, false))));
        assert_eq!(parse_whole_cond("num !=-3"), Ok(Cond::NumSpec(CondSpecArg::new(-3, true))));
    }

    #[test]
    fn test_parse_num() {
        assert_eq!(parse_whole_cond("num"), Ok(Cond::new_num(false)));
        assert_eq!(parse_whole_cond("num !"), Ok(Cond::new_num(true)));
        assert!(matches!(parse_whole_cond("num 1.5,3"), Err(SlErr::UnexpectedCondRemaining { .. })));
    }

    #[test]
    fn test_parse_parity_and_blank() {
        assert_eq!(parse_whole_cond("even"), Ok(Cond::new_parity(true)));
        assert_eq!(parse_whole_cond("odd"), Ok(Cond::new_parity(false)));
        assert_eq!(parse_whole_cond("empty"), Ok(Cond::new_text_empty_or_blank(true)));
        assert_eq!(parse_whole_cond("blank"), Ok(Cond::new_text_empty_or_blank(false)));
        assert_eq!(
            parse_whole_cond("even odd"),
            Err(SlErr::UnexpectedCondRemaining { cond: "even odd".to_string(), remaining: "odd".to_string() })
        );
    }

    #[test]
    fn test_parse_reg_match() {
        assert_eq!(parse_whole_cond(r"reg \d{1,3}"), Cond::new_reg_match(r"\d{1,3}"));
        assert_eq!(parse_whole_cond(r"reg 'item \d+'"), Cond::new_reg_match(r"item \d+"));
        assert_eq!(parse_whole_cond(r#"reg "a""#), Cond::new_reg_match("a"));
        assert!(matches!(parse_whole_cond("reg ("), Err(SlErr::ParseRegexErr { .. })));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(parse_whole_cond(""), Err(SlErr::ParseCondErr { .. })));
        assert!(matches!(parse_whole_cond("what"), Err(SlErr::ParseCondErr { .. })));
    }
}
