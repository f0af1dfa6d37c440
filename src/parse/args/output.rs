use crate::err::SlErr;
use crate::output::Output;
use crate::parse::args::{consume_cmd, is_cmd, parse_cond_arg, parse_required};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, SlErr> {
    if consume_cmd(args, ":to") {
        parse_to(args)
    } else if consume_cmd(args, ":every") {
        Ok(Output::new_every(parse_cond_arg(args, "every")?))
    } else if consume_cmd(args, ":some") {
        Ok(Output::new_any(parse_cond_arg(args, "some")?))
    } else if consume_cmd(args, ":sum") {
        Ok(Output::Sum)
    } else if consume_cmd(args, ":count") {
        Ok(Output::Count)
    } else {
        Ok(Output::new_std_out())
    }
}

fn parse_to(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, SlErr> {
    let target = parse_required(args, "to", "target")?;
    if is_cmd(&target, "out") {
        Ok(Output::new_std_out())
    } else if is_cmd(&target, "map") {
        let separator = parse_required(args, "to map", "separator")?;
        if separator.is_empty() {
            return Err(SlErr::ArgParseErr {
                cmd: "to map",
                arg: "separator",
                arg_value: separator,
                error: "separator can not be empty".to_string(),
            });
        }
        Ok(Output::new_map(separator))
    } else {
        Err(SlErr::ArgParseErr {
            cmd: "to",
            arg: "target",
            arg_value: target,
            error: "expected `out` or `map`".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Cond;
    use crate::parse::args::build_args;

    #[test]
    fn test_default_std_out() {
        assert_eq!(parse_output(&mut build_args(&[])), Ok(Output::new_std_out()));
        let mut args = build_args(&["unknown"]);
        assert_eq!(parse_output(&mut args), Ok(Output::new_std_out()));
        assert_eq!(args.next(), Some("unknown".to_string()));
    }

    #[test]
    fn test_parse_to() {
        assert_eq!(parse_output(&mut build_args(&[":to", "out"])), Ok(Output::new_std_out()));
        assert_eq!(parse_output(&mut build_args(&[":to", "map", "="])), Ok(Output::new_map("=".to_string())));
        assert_eq!(
            parse_output(&mut build_args(&[":to", "map"])),
            Err(SlErr::MissingArg { cmd: "to map", arg: "separator" })
        );
        assert_eq!(
            parse_output(&mut build_args(&[":to", "map", ""])),
            Err(SlErr::ArgParseErr {
                cmd: "to map",
                arg: "separator",
                arg_value: "".to_string(),
                error: "separator can not be empty".to_string(),
            })
        );
        assert_eq!(parse_output(&mut build_args(&[":to"])), Err(SlErr::MissingArg { cmd: "to", arg: "target" }));
        assert!(matches!(
            parse_output(&mut build_args(&[":to", "file"])),
            Err(SlErr::ArgParseErr { cmd: "to", arg: "target", .. })
        ));
    }

    #[test]
    fn test_parse_every_some() {
        assert_eq!(parse_output(&mut build_args(&[":every", "even"])), Ok(Output::new_every(Cond::new_parity(true))));
        assert_eq!(parse_output(&mut build_args(&[":some", "blank"])), Ok(Output::new_any(Cond::new_text_empty_or_blank(false))));
        assert_eq!(
            parse_output(&mut build_args(&[":some"])),
            Err(SlErr::MissingArg { cmd: "some", arg: "condition" })
        );
    }

    #[test]
    fn test_parse_reduce() {
        assert_eq!(parse_output(&mut build_args(&[":sum"])), Ok(Output::Sum));
        assert_eq!(parse_output(&mut build_args(&[":COUNT"])), Ok(Output::Count));
    }
}
