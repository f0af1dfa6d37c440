//! 惰性序列。
//!
//! 由可重复调用的游标工厂构造[`LazySequence`]，链式组合`filter`、`map`、`skip`、`take`、`take_while`、`scan`等操作，
//! 只有在真正消费时才逐个产生元素。
//!
//! 每次遍历都会重新构造整条流水线，多次遍历之间互不影响；终结操作每次调用恰好驱动一次遍历；
//! `cache`会立即求值一次，之后只重放缓存结果。
//!
//! ```
//! use slothful::{infinite, range};
//!
//! assert_eq!(range(0, 10).skip(5).skip(2).to_vec(), vec![7, 8, 9]);
//! assert_eq!(range(5, 4).reduce(|r, x| r + x, 0), 26);
//! assert_eq!(infinite("item").take(3).to_vec(), vec!["item", "item", "item"]);
//! ```

mod cursor;
mod producer;
mod sequence;

pub use cursor::Cursor;
pub use producer::{infinite, of, range};
pub use sequence::LazySequence;

/// 整数类型
pub type Integer = i64;
