use crate::condition::Cond;
use crate::config::{Config, is_verbose};
use crate::err::SlErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;

mod condition;
mod config;
mod err;
mod input;
mod op;
mod output;
mod parse;
mod print;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), SlErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("sloth {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let (input, ops, output) = parse::args::parse(args)?;
    if is_verbose(&configs) {
        println_info!("Input:");
        println_info!("    {:?}", input);
        println_info!("Op:");
        println_info!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
        println_info!("Output:");
        println_info!("    {:?}", output);
    }
    let seq = ops.into_iter().fold(input.into_seq(), |seq, op| op.wrap(seq, &configs));
    if !configs.contains(&Config::DryRun) {
        output.handle(seq);
    }
    Ok(())
}

fn print_help() {
    println!("Usage: sloth [-h|-V|-v|-d] <input> [<op>...] [<output>]");
    println!();
    println!("    -h  打印帮助信息");
    println!("    -V  打印版本");
    println!("    -v  打印流水线信息");
    println!("    -d  仅构建流水线，不消费数据");
    print_help_section("Input", Input::all_help());
    print_help_section("Op", Op::all_help());
    print_help_section("Output", Output::all_help());
    print_help_section("Condition", Cond::all_help());
}

fn print_help_section(title: &str, helps: &[(&str, &str)]) {
    println!();
    println_info!("{title}:");
    for (_, help) in helps {
        println!("{}", help.lines().map(|line| format!("    {line}")).join("\n"));
    }
}
