use crate::cursor::{Cursor, ReplayCursor};
use crate::sequence::LazySequence;
use crate::Integer;
use std::iter::repeat;
use std::rc::Rc;

/// 生成从`start`开始的`count`个连续整数：`start, start+1, ..., start+count-1`。
///
/// `count`小于等于0时为空序列；超过[`Integer::MAX`]的部分被截断。
///
/// ```
/// let seq = slothful::range(100, 5);
/// assert_eq!(seq.to_vec(), vec![100, 101, 102, 103, 104]);
/// ```
pub fn range(start: Integer, count: Integer) -> LazySequence<Integer> {
    let count = if count <= 0 { 0 } else { (Integer::MAX as i128 - start as i128 + 1).min(count as i128) as u64 };
    LazySequence::from_cursor_factory(move || Cursor::new(RangeCursor { next: start, remaining: count }))
}

/// 无限重复`item`。
///
/// 只能通过`take`/`take_while`限定范围，或者使用可短路的`every`/`some`消费。
pub fn infinite<T>(item: T) -> LazySequence<T>
where
    T: Clone + 'static,
{
    LazySequence::from_cursor_factory(move || Cursor::new(repeat(item.clone())))
}

/// 每次遍历都按顺序重放`values`。
pub fn of<T>(values: Vec<T>) -> LazySequence<T>
where
    T: Clone + 'static,
{
    let items: Rc<[T]> = Rc::from(values);
    LazySequence::from_cursor_factory(move || Cursor::new(ReplayCursor { items: Rc::clone(&items), pos: 0 }))
}

#[derive(Debug, Eq, PartialEq)]
struct RangeCursor {
    next: Integer,
    remaining: u64,
}

impl Iterator for RangeCursor {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let res = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += 1;
        }
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
