use crate::err::SlErr;
use cmd_help::CmdHelp;
use regex::Regex;
use slothful::Integer;

/// 范围参数，最小值和最大值均包含。
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct CondRangeArg<T> {
    min: Option<T>,
    max: Option<T>,
    not: bool,
}

impl<T: PartialOrd> CondRangeArg<T> {
    pub(crate) fn new(min: Option<T>, max: Option<T>, not: bool) -> CondRangeArg<T> {
        CondRangeArg { min, max, not }
    }

    fn test(&self, value: T) -> bool {
        let in_range = self.min.as_ref().is_none_or(|min| &value >= min)
            && self.max.as_ref().is_none_or(|max| &value <= max);
        in_range != self.not
    }
}

/// 特定值参数。
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct CondSpecArg<T> {
    spec: T,
    not: bool,
}

impl<T: PartialEq> CondSpecArg<T> {
    pub(crate) fn new(spec: T, not: bool) -> CondSpecArg<T> {
        CondSpecArg { spec, not }
    }

    fn test(&self, value: T) -> bool {
        (value == self.spec) != self.not
    }
}

/// 条件
#[derive(Debug, Clone, CmdHelp)]
pub(crate) enum Cond {
    /// len [!][<min>],[<max>]
    ///     按照字符数量范围选择，最小值和最大值至少指定其一，均包含，支持可选否定。
    ///     例如：
    ///         len 2,
    ///         len 2,5
    ///         len ,5
    ///         len !2,5
    TextLenRange(CondRangeArg<usize>),
    /// len [!]=<len>
    ///     按照特定字符数量选择，支持可选否定。
    ///     例如：
    ///         len =3
    ///         len !=3
    TextLenSpec(CondSpecArg<usize>),
    /// num [!][<min>],[<max>]
    ///     按照整数范围选择，最小值和最大值至少指定其一，均包含，支持可选否定。
    ///     无法解析为整数的数据不满足条件，否定后满足。
    ///     例如：
    ///         num 2,5
    ///         num -2,
    ///         num !,5
    NumRange(CondRangeArg<Integer>),
    /// num [!]=<num>
    ///     按照特定整数选择，支持可选否定。
    ///     例如：
    ///         num =3
    ///         num !=3
    NumSpec(CondSpecArg<Integer>),
    /// num[ !]
    ///     选择可以解析为整数的数据，支持可选否定。
    Num { not: bool },
    /// even
    ///     选择偶数。
    /// odd
    ///     选择奇数。
    ///     无法解析为整数的数据既不是偶数也不是奇数。
    Parity { even: bool },
    /// empty
    ///     选择空字符串。
    /// blank
    ///     选择全部为空白字符的数据，包括空字符串。
    TextEmptyOrBlank { empty: bool },
    /// reg <exp>
    ///     选择完整匹配给定正则表达式的数据。
    ///     <exp>   正则表达式，必选。
    ///     例如：
    ///         reg '\d{1,3}'
    ///         reg 'item-\w+'
    RegMatch { regex: Regex },
}

impl PartialEq for Cond {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cond::TextLenRange(l), Cond::TextLenRange(r)) => l == r,
            (Cond::TextLenSpec(l), Cond::TextLenSpec(r)) => l == r,
            (Cond::NumRange(l), Cond::NumRange(r)) => l == r,
            (Cond::NumSpec(l), Cond::NumSpec(r)) => l == r,
            (Cond::Num { not: l }, Cond::Num { not: r }) => l == r,
            (Cond::Parity { even: l }, Cond::Parity { even: r }) => l == r,
            (Cond::TextEmptyOrBlank { empty: l }, Cond::TextEmptyOrBlank { empty: r }) => l == r,
            // 比较正则的模式字符串
            (Cond::RegMatch { regex: l }, Cond::RegMatch { regex: r }) => l.as_str() == r.as_str(),
            _ => false,
        }
    }
}

impl Cond {
    pub(crate) fn new_num(not: bool) -> Cond {
        Cond::Num { not }
    }
    pub(crate) fn new_parity(even: bool) -> Cond {
        Cond::Parity { even }
    }
    pub(crate) fn new_text_empty_or_blank(empty: bool) -> Cond {
        Cond::TextEmptyOrBlank { empty }
    }
    pub(crate) fn new_reg_match(regex: &str) -> Result<Cond, SlErr> {
        let reg = format!(r"\A(?:{})\z", regex);
        Regex::new(&reg)
            .map(|regex| Cond::RegMatch { regex })
            .map_err(|err| SlErr::ParseRegexErr { reg: regex.to_owned(), err: err.to_string() })
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        match self {
            Cond::TextLenRange(range) => range.test(input.chars().count()),
            Cond::TextLenSpec(spec) => spec.test(input.chars().count()),
            Cond::NumRange(range) => match input.parse::<Integer>() {
                Ok(value) => range.test(value),
                Err(_) => range.not,
            },
            Cond::NumSpec(spec) => match input.parse::<Integer>() {
                Ok(value) => spec.test(value),
                Err(_) => spec.not,
            },
            Cond::Num { not } => input.parse::<Integer>().is_ok() != *not,
            Cond::Parity { even } => input.parse::<Integer>().is_ok_and(|value| (value % 2 == 0) == *even),
            Cond::TextEmptyOrBlank { empty } => {
                if *empty {
                    input.is_empty()
                } else {
                    input.chars().all(char::is_whitespace)
                }
            }
            Cond::RegMatch { regex } => regex.is_match(input),
        }
    }
}
