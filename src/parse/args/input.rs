use crate::err::SlErr;
use crate::input::Input;
use crate::parse::args::{consume_cmd, parse_arg_or_arg1, parse_required, parse_value};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, SlErr> {
    if consume_cmd(args, ":range") {
        parse_range(args)
    } else if consume_cmd(args, ":repeat") {
        Ok(Input::new_repeat(parse_required(args, "repeat", "value")?))
    } else if consume_cmd(args, ":of") {
        Ok(Input::new_of(parse_arg_or_arg1(args, "of", "text")?))
    } else {
        Err(SlErr::MissingInput)
    }
}

fn parse_range(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, SlErr> {
    let start = parse_value(args, "range", "start")?;
    let count = parse_value(args, "range", "count")?;
    Ok(Input::new_range(start, count))
}
