use crate::println_err;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum SlErr {
    #[error("[Missing Input] An input is required, use `-h` for available inputs")]
    MissingInput,

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Condition] Invalid condition `{cond}`:\n{error}")]
    ParseCondErr { cond: String, error: String },

    #[error("[Condition] Unexpected remaining `{remaining}` of condition `{cond}`")]
    UnexpectedCondRemaining { cond: String, remaining: String },

    #[error("[Condition] Invalid regex `{reg}`: {err}")]
    ParseRegexErr { reg: String, err: String },
}

impl Termination for SlErr {
    fn report(self) -> ExitCode {
        println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl SlErr {
    pub fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            SlErr::MissingInput => 1,
            SlErr::MissingArg { .. } => 2,
            SlErr::ArgNotEnough { .. } => 3,
            SlErr::UnclosingMultiArg { .. } => 4,
            SlErr::UnexpectedClosingBracket { .. } => 5,
            SlErr::ArgParseErr { .. } => 6,
            SlErr::UnknownArgs { .. } => 7,
            SlErr::ParseCondErr { .. } => 8,
            SlErr::UnexpectedCondRemaining { .. } => 9,
            SlErr::ParseRegexErr { .. } => 10,
        }
    }
}
