mod scan;

use crate::condition::Cond;
use crate::config::{Config, is_verbose};
use crate::println_notice;
use cmd_help::CmdHelp;
use slothful::LazySequence;

pub(crate) use scan::ScanArg;

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /* **************************************** 访问 **************************************** */
    /// :peek       消费时打印每个值到标准输出，不影响数据。
    ///             可用于观察流水线何时、多少次被执行。
    Peek,
    /* **************************************** 转换 **************************************** */
    /// :upper      转为ASCII大写。
    /// :lower      转为ASCII小写。
    /// :case       切换ASCII大小写。
    Case(CaseArg),
    /// :scan       累积，每个数据产生一次当前的累积结果。
    ///             :scan sum|join <delimiter>
    ///                 sum         累加，无法解析为整数的数据按0处理。
    ///                 join        使用<delimiter>依次拼接。
    ///             例如：
    ///                 :scan sum
    ///                 :scan join ,
    Scan(ScanArg),
    /* **************************************** 减少 **************************************** */
    /// :filter     只保留满足条件的数据。
    ///             :filter <condition>
    ///                 <condition> 条件表达式，参考`-h`中的条件说明。
    ///             例如：
    ///                 :filter even
    ///                 :filter "num 1,5"
    Filter { cond: Cond },
    /// :skip       丢弃前N个数据，保留后续的其他数据。
    ///             :skip <count>
    ///                 <count> 需要丢弃的数量，必须为非负整数，必选。
    Skip { count: usize },
    /// :take       保留前N个数据，之后不再读取上游。
    ///             :take <count>
    ///                 <count> 需要保留的数量，必须为非负整数，必选。
    Take { count: usize },
    /// :take while 持续保留满足条件的数据，直到条件首次不满足。
    ///             :take while <condition>
    ///                 <condition> 条件表达式，参考`-h`中的条件说明。
    TakeWhile { cond: Cond },
    /* **************************************** 缓存 **************************************** */
    /// :cache      立即执行之前的流水线并缓存结果，之后的遍历不再执行之前的操作。
    Cache,
}

impl Op {
    pub(crate) fn new_case(case_arg: CaseArg) -> Op {
        Op::Case(case_arg)
    }
    pub(crate) fn new_scan(scan_arg: ScanArg) -> Op {
        Op::Scan(scan_arg)
    }
    pub(crate) fn new_filter(cond: Cond) -> Op {
        Op::Filter { cond }
    }
    pub(crate) fn new_skip(count: usize) -> Op {
        Op::Skip { count }
    }
    pub(crate) fn new_take(count: usize) -> Op {
        Op::Take { count }
    }
    pub(crate) fn new_take_while(cond: Cond) -> Op {
        Op::TakeWhile { cond }
    }

    pub(crate) fn wrap(self, seq: LazySequence<String>, configs: &[Config]) -> LazySequence<String> {
        match self {
            Op::Peek => seq.map(|item| {
                println!("{item}");
                item
            }),
            Op::Case(case_arg) => match case_arg {
                CaseArg::Upper => seq.map(|item| item.to_ascii_uppercase()),
                CaseArg::Lower => seq.map(|item| item.to_ascii_lowercase()),
                CaseArg::Switch => seq.map(|item| {
                    // 只切换ASCII字母
                    item.chars()
                        .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
                        .collect::<String>()
                }),
            },
            Op::Scan(scan_arg) => scan_arg.scan(seq),
            Op::Filter { cond } => seq.filter(move |item| cond.test(item)),
            Op::Skip { count } => seq.skip(count),
            Op::Take { count } => seq.take(count),
            Op::TakeWhile { cond } => seq.take_while(move |item| cond.test(item)),
            // 仅构建流水线时不能提前消费
            Op::Cache if configs.contains(&Config::DryRun) => seq,
            Op::Cache => {
                let cached = seq.cache();
                if is_verbose(configs) {
                    println_notice!("[Cache] {} items cached", cached.iter().count());
                }
                cached
            }
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum CaseArg {
    Upper,
    Lower,
    Switch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::CondRangeArg;
    use std::cell::Cell;
    use std::rc::Rc;

    fn seq_of(values: &[&str]) -> LazySequence<String> {
        slothful::of(values.iter().map(|s| s.to_string()).collect())
    }

    fn wrap_all(seq: LazySequence<String>, ops: Vec<Op>) -> LazySequence<String> {
        ops.into_iter().fold(seq, |seq, op| op.wrap(seq, &[]))
    }

    #[test]
    fn test_case() {
        let seq = seq_of(&["abC", "你好x"]);
        assert_eq!(Op::new_case(CaseArg::Upper).wrap(seq.clone(), &[]).to_vec(), vec!["ABC", "你好X"]);
        assert_eq!(Op::new_case(CaseArg::Lower).wrap(seq.clone(), &[]).to_vec(), vec!["abc", "你好x"]);
        assert_eq!(Op::new_case(CaseArg::Switch).wrap(seq, &[]).to_vec(), vec!["ABc", "你好X"]);
    }

    #[test]
    fn test_filter() {
        let seq = slothful::range(0, 10).map(|x| x.to_string());
        let seq = Op::new_filter(Cond::new_parity(true)).wrap(seq, &[]);
        assert_eq!(seq.to_vec(), vec!["0", "2", "4", "6", "8"]);
    }

    #[test]
    fn test_skip_take() {
        let seq = slothful::range(0, 10).map(|x| x.to_string());
        let seq = wrap_all(seq, vec![Op::new_skip(5), Op::new_skip(2)]);
        assert_eq!(seq.to_vec(), vec!["7", "8", "9"]);
        let seq = wrap_all(seq_of(&["a", "b", "c"]), vec![Op::new_take(2)]);
        assert_eq!(seq.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_take_while() {
        let seq = slothful::range(0, 10).map(|x| x.to_string());
        let cond = Cond::NumRange(CondRangeArg::new(None, Some(4), false));
        let seq = Op::new_take_while(cond).wrap(seq, &[]);
        assert_eq!(seq.to_vec(), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_take_on_repeat() {
        let seq = wrap_all(slothful::infinite("item".to_string()), vec![Op::new_take(3)]);
        assert_eq!(seq.to_vec(), vec!["item", "item", "item"]);
    }

    #[test]
    fn test_scan() {
        let seq = slothful::range(5, 4).map(|x| x.to_string());
        let seq = Op::new_scan(ScanArg::new_sum()).wrap(seq, &[]);
        assert_eq!(seq.to_vec(), vec!["5", "11", "18", "26"]);
    }

    #[test]
    fn test_cache() {
        let seq = wrap_all(seq_of(&["a", "b"]), vec![Op::Cache, Op::new_case(CaseArg::Upper)]);
        assert_eq!(seq.to_vec(), vec!["A", "B"]);
        assert_eq!(seq.to_vec(), vec!["A", "B"]);
    }

    #[test]
    fn test_cache_in_dry_run() {
        let pulled = Rc::new(Cell::new(0));
        let inner = Rc::clone(&pulled);
        let seq = seq_of(&["a", "b"]).map(move |item| {
            inner.set(inner.get() + 1);
            item
        });
        let seq = Op::Cache.wrap(seq, &[Config::DryRun]);
        assert_eq!(pulled.get(), 0);
        // 未缓存，每次遍历都重新执行上游
        assert_eq!(seq.to_vec(), vec!["a", "b"]);
        assert_eq!(seq.to_vec(), vec!["a", "b"]);
        assert_eq!(pulled.get(), 4);
        let cached = Op::Cache.wrap(seq_of(&["a"]).map(|item| item), &[Config::Verbose]);
        assert_eq!(cached.to_vec(), vec!["a"]);
    }

    #[test]
    fn test_cache_of_repeat_in_dry_run() {
        let seq = Op::Cache.wrap(slothful::infinite("x".to_string()), &[Config::DryRun]);
        assert_eq!(seq.take(2).to_vec(), vec!["x", "x"]);
    }

    #[test]
    fn test_help() {
        assert!(Op::Cache.help().starts_with(":cache"));
        assert!(Op::new_take(1).help().starts_with(":take"));
    }
}
