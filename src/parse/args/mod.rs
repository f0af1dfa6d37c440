use crate::condition::Cond;
use crate::err::SlErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use crate::parse::cond::parse_whole_cond;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::FromStr;

mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), SlErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(SlErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

/// 单个值或者中括号包围的多个值。
fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, SlErr> {
    match args.next() {
        Some(value) => {
            if value == "[" {
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        return if values.is_empty() { Err(SlErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    }
                    values.push(escaped(value));
                }
                Err(SlErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                // 未开启的多值结束
                Err(SlErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![escaped(value)])
            }
        }
        None => Err(SlErr::MissingArg { cmd, arg }),
    }
}

fn escaped(arg: String) -> String {
    if arg == "\\[" || arg == "\\]" { arg[1..].to_string() } else { arg }
}

/// 命令名不区分大小写。
fn is_cmd(arg: &str, name: &str) -> bool {
    arg.eq_ignore_ascii_case(name)
}

/// 下一个参数是指定命令时消耗它。
fn consume_cmd(args: &mut Peekable<impl Iterator<Item = String>>, name: &str) -> bool {
    args.next_if(|arg| is_cmd(arg, name)).is_some()
}

fn parse_required(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<String, SlErr> {
    args.next().ok_or(SlErr::MissingArg { cmd, arg })
}

fn parse_value<T>(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str) -> Result<T, SlErr>
where
    T: FromStr,
    T::Err: Display,
{
    let value = parse_required(args, cmd, arg)?;
    value.parse().map_err(|err: T::Err| SlErr::ArgParseErr { cmd, arg, arg_value: value, error: err.to_string() })
}

fn parse_cond_arg(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str) -> Result<Cond, SlErr> {
    parse_whole_cond(&parse_required(args, cmd, "condition")?)
}

#[cfg(test)]
fn build_args(args: &[&str]) -> Peekable<std::vec::IntoIter<String>> {
    args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().into_iter().peekable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg_or_arg1() {
        assert_eq!(parse_arg_or_arg1(&mut build_args(&["a", "b"]), "of", "text"), Ok(vec!["a".to_string()]));
        assert_eq!(
            parse_arg_or_arg1(&mut build_args(&["[", "a", "\\]", "]"]), "of", "text"),
            Ok(vec!["a".to_string(), "]".to_string()])
        );
        assert_eq!(
            parse_arg_or_arg1(&mut build_args(&["[", "]"]), "of", "text"),
            Err(SlErr::ArgNotEnough { cmd: "of", arg: "text" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut build_args(&["[", "a"]), "of", "text"),
            Err(SlErr::UnclosingMultiArg { cmd: "of", arg: "text" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut build_args(&["]"]), "of", "text"),
            Err(SlErr::UnexpectedClosingBracket { cmd: "of", arg: "text" })
        );
        assert_eq!(
            parse_arg_or_arg1(&mut build_args(&[]), "of", "text"),
            Err(SlErr::MissingArg { cmd: "of", arg: "text" })
        );
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<usize>(&mut build_args(&["3"]), "take", "count"), Ok(3));
        assert!(matches!(
            parse_value::<usize>(&mut build_args(&["-3"]), "take", "count"),
            Err(SlErr::ArgParseErr { cmd: "take", arg: "count", .. })
        ));
        assert_eq!(
            parse_value::<usize>(&mut build_args(&[]), "take", "count"),
            Err(SlErr::MissingArg { cmd: "take", arg: "count" })
        );
    }

    #[test]
    fn test_parse() {
        let args = build_args(&[":range", "0", "10", ":filter", "even", ":take", "2", ":count"]);
        assert_eq!(
            parse(args),
            Ok((
                Input::new_range(0, 10),
                vec![Op::new_filter(Cond::new_parity(true)), Op::new_take(2)],
                Output::Count
            ))
        );
    }

    #[test]
    fn test_parse_default_output() {
        let args = build_args(&[":repeat", "x", ":take", "3"]);
        assert_eq!(
            parse(args),
            Ok((Input::new_repeat("x".to_string()), vec![Op::new_take(3)], Output::new_std_out()))
        );
    }

    #[test]
    fn test_parse_unknown_args() {
        let args = build_args(&[":of", "a", ":count", "extra"]);
        assert_eq!(parse(args), Err(SlErr::UnknownArgs { args: vec!["extra".to_string()] }));
    }
}
