use crate::condition::Cond;
use cmd_help::CmdHelp;
use itertools::Itertools;
use slothful::{Integer, LazySequence};

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// :to out     逐个输出到标准输出。
    ///             未指定输出时的默认输出。
    StdOut,
    /// :every      输出是否全部数据都满足条件，遇到第一个不满足的数据即结束。
    ///             :every <condition>
    ///             例如：
    ///                 :every "num 0,"
    Every { cond: Cond },
    /// :some       输出是否存在满足条件的数据，遇到第一个满足的数据即结束。
    ///             :some <condition>
    ///             例如：
    ///                 :some "reg 'item-\d+'"
    Any { cond: Cond },
    /// :sum        累加全部数据，无法解析为整数的数据按0处理。
    Sum,
    /// :count      统计数据数量。
    Count,
    /// :to map     按照分隔符将每个数据拆分为键和值，重复的键保留最后出现的值，按键排序输出。
    ///             :to map <separator>
    ///                 <separator> 分隔符，必选，不能为空，按第一次出现的位置拆分，不包含分隔符的数据作为键，值为空。
    ///             例如：
    ///                 :to map =
    Map { separator: String },
}

impl Output {
    pub(crate) fn new_std_out() -> Output {
        Output::StdOut
    }
    pub(crate) fn new_every(cond: Cond) -> Output {
        Output::Every { cond }
    }
    pub(crate) fn new_any(cond: Cond) -> Output {
        Output::Any { cond }
    }
    pub(crate) fn new_map(separator: String) -> Output {
        Output::Map { separator }
    }

    pub(crate) fn handle(self, seq: LazySequence<String>) {
        match self {
            Output::StdOut => seq.for_each(|item| println!("{item}")),
            output => output.evaluate(&seq).into_iter().for_each(|line| println!("{line}")),
        }
    }

    /// 驱动一次流水线，返回需要输出的全部行。
    fn evaluate(self, seq: &LazySequence<String>) -> Vec<String> {
        match self {
            Output::StdOut => seq.to_vec(),
            Output::Every { cond } => vec![seq.every(|item| cond.test(item)).to_string()],
            Output::Any { cond } => vec![seq.some(|item| cond.test(item)).to_string()],
            Output::Sum => {
                let sum = seq.reduce(|sum: Integer, item| sum.saturating_add(item.parse().unwrap_or(0)), 0);
                vec![sum.to_string()]
            }
            Output::Count => vec![seq.reduce(|count: usize, _| count + 1, 0).to_string()],
            Output::Map { separator } => seq
                .to_map(
                    |item| split_entry(item, &separator).0.to_owned(),
                    |item| split_entry(&item, &separator).1.to_owned(),
                )
                .into_iter()
                .sorted_unstable_by(|(l, _), (r, _)| l.cmp(r))
                .map(|(key, value)| format!("{key}{separator}{value}"))
                .collect(),
        }
    }
}

fn split_entry<'a>(item: &'a str, separator: &str) -> (&'a str, &'a str) {
    item.split_once(separator).unwrap_or((item, ""))
}
