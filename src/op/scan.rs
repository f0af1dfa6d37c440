use slothful::{Integer, LazySequence};

/// 累积方式
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum ScanArg {
    /// 累加，无法解析为整数的数据按0处理。
    Sum,
    /// 使用分隔符依次拼接。
    Join { delimiter: String },
}

impl ScanArg {
    pub(crate) fn new_sum() -> ScanArg {
        ScanArg::Sum
    }
    pub(crate) fn new_join(delimiter: String) -> ScanArg {
        ScanArg::Join { delimiter }
    }

    pub(crate) fn scan(self, seq: LazySequence<String>) -> LazySequence<String> {
        match self {
            ScanArg::Sum => seq
                .scan(|sum: Integer, item: String| sum.saturating_add(item.parse().unwrap_or(0)), 0)
                .map(|sum| sum.to_string()),
            ScanArg::Join { delimiter } => seq
                .scan(
                    move |acc: Option<String>, item: String| match acc {
                        Some(mut joined) => {
                            joined.push_str(&delimiter);
                            joined.push_str(&item);
                            Some(joined)
                        }
                        None => Some(item),
                    },
                    None,
                )
                .map(Option::unwrap_or_default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq_of(values: &[&str]) -> LazySequence<String> {
        slothful::of(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_scan_sum() {
        let seq = ScanArg::new_sum().scan(seq_of(&["5", "6", "x", "7", "8"]));
        assert_eq!(seq.to_vec(), vec!["5", "11", "11", "18", "26"]);
    }

    #[test]
    fn test_scan_sum_saturates() {
        let seq = ScanArg::new_sum().scan(seq_of(&["9223372036854775807", "1"]));
        assert_eq!(seq.to_vec(), vec!["9223372036854775807", "9223372036854775807"]);
    }

    #[test]
    fn test_scan_join() {
        let seq = ScanArg::new_join(",".to_string()).scan(seq_of(&["a", "b", "c"]));
        assert_eq!(seq.to_vec(), vec!["a", "a,b", "a,b,c"]);
        // 重新遍历从头开始累积
        assert_eq!(seq.to_vec(), vec!["a", "a,b", "a,b,c"]);
    }

    #[test]
    fn test_scan_empty() {
        assert!(ScanArg::new_sum().scan(seq_of(&[])).to_vec().is_empty());
    }
}
