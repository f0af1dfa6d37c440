use cmd_help::CmdHelp;
use slothful::{Integer, LazySequence};

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// :range      生成连续的整数作为输入。
    ///             :range <start> <count>
    ///                 <start> 起始值，包含，必选。
    ///                 <count> 生成的数量，必选，小于等于0时无数据生成。
    ///             例如：
    ///                 :range 0 10     生成：0 1 2 3 4 5 6 7 8 9
    ///                 :range 100 5    生成：100 101 102 103 104
    ///                 :range 5 -1     无数据生成
    Range { start: Integer, count: Integer },
    /// :repeat     无限重复字面值作为输入。
    ///             需要配合`:take`、`:take while`或者`:every`、`:some`使用，否则不会结束。
    ///             :repeat <value>
    ///                 <value> 需要重复的字面值，必选。
    ///             例如：
    ///                 :repeat item :take 3
    Repeat { value: String },
    /// :of         使用直接字面值作为输入。
    ///             :of <text>|[ <text>[ <text>][...] ]
    ///                 <text>  字面值，至少指定一个，多个值时使用中括号包围。
    ///             例如：
    ///                 :of line
    ///                 :of [ line1 "line 2" ]
    Of { values: Vec<String> },
}

impl Input {
    pub(crate) fn new_range(start: Integer, count: Integer) -> Input {
        Input::Range { start, count }
    }
    pub(crate) fn new_repeat(value: String) -> Input {
        Input::Repeat { value }
    }
    pub(crate) fn new_of(values: Vec<String>) -> Input {
        Input::Of { values }
    }

    pub(crate) fn into_seq(self) -> LazySequence<String> {
        match self {
            Input::Range { start, count } => slothful::range(start, count).map(|x| x.to_string()),
            Input::Repeat { value } => slothful::infinite(value),
            Input::Of { values } => slothful::of(values),
        }
    }
}
