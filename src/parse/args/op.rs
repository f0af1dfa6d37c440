use crate::err::SlErr;
use crate::op::{CaseArg, Op, ScanArg};
use crate::parse::args::{consume_cmd, is_cmd, parse_cond_arg, parse_required, parse_value};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, SlErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, SlErr> {
    if consume_cmd(args, ":peek") {
        Ok(Some(Op::Peek))
    } else if consume_cmd(args, ":upper") {
        Ok(Some(Op::new_case(CaseArg::Upper)))
    } else if consume_cmd(args, ":lower") {
        Ok(Some(Op::new_case(CaseArg::Lower)))
    } else if consume_cmd(args, ":case") {
        Ok(Some(Op::new_case(CaseArg::Switch)))
    } else if consume_cmd(args, ":scan") {
        parse_scan(args).map(Some)
    } else if consume_cmd(args, ":filter") {
        Ok(Some(Op::new_filter(parse_cond_arg(args, "filter")?)))
    } else if consume_cmd(args, ":skip") {
        Ok(Some(Op::new_skip(parse_value(args, "skip", "count")?)))
    } else if consume_cmd(args, ":take") {
        if consume_cmd(args, "while") {
            Ok(Some(Op::new_take_while(parse_cond_arg(args, "take while")?)))
        } else {
            Ok(Some(Op::new_take(parse_value(args, "take", "count")?)))
        }
    } else if consume_cmd(args, ":cache") {
        Ok(Some(Op::Cache))
    } else {
        Ok(None)
    }
}

fn parse_scan(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, SlErr> {
    let mode = parse_required(args, "scan", "mode")?;
    if is_cmd(&mode, "sum") {
        Ok(Op::new_scan(ScanArg::new_sum()))
    } else if is_cmd(&mode, "join") {
        Ok(Op::new_scan(ScanArg::new_join(parse_required(args, "scan", "delimiter")?)))
    } else {
        Err(SlErr::ArgParseErr {
            cmd: "scan",
            arg: "mode",
            arg_value: mode,
            error: "expected `sum` or `join`".to_string(),
        })
    }
}
