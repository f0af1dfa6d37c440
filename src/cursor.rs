use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// 单次遍历的游标。
///
/// 每次调用[`LazySequence::iter`](crate::LazySequence::iter)都会得到一个全新的游标，游标之间不共享任何可变状态。
/// 游标本身不可重入，遍历结束（返回`None`）后不会再产生元素。
pub struct Cursor<T> {
    pub(crate) iter: Box<dyn Iterator<Item = T>>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(iter: impl Iterator<Item = T> + 'static) -> Cursor<T> {
        Cursor { iter: Box::new(iter) }
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> Debug for Cursor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor").finish_non_exhaustive()
    }
}

/// 丢弃上游前`remaining`个元素，计数仅属于本次遍历。
pub(crate) struct SkipCursor<T> {
    pub(crate) upstream: Cursor<T>,
    pub(crate) remaining: usize,
}

impl<T> Iterator for SkipCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.upstream.next()?;
        }
        self.upstream.next()
    }
}

/// 最多产生`remaining`个元素，额度用尽后不再拉取上游。
pub(crate) struct TakeCursor<T> {
    pub(crate) upstream: Cursor<T>,
    pub(crate) remaining: usize,
}

impl<T> Iterator for TakeCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.upstream.size_hint();
        (lower.min(self.remaining), Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))))
    }
}

/// 条件首次不满足时结束，之后不再拉取上游。
///
/// 先判断上游是否结束，只对真实存在的元素调用谓词。
pub(crate) struct TakeWhileCursor<T, P> {
    pub(crate) upstream: Cursor<T>,
    pub(crate) predicate: Rc<P>,
    pub(crate) done: bool,
}

impl<T, P> Iterator for TakeWhileCursor<T, P>
where
    P: Fn(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.upstream.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

/// 累积状态，每消费一个上游元素产生一次新的状态。
pub(crate) struct ScanCursor<T, S, F> {
    pub(crate) upstream: Cursor<T>,
    pub(crate) reducer: Rc<F>,
    // 仅在调用reducer的瞬间为None
    pub(crate) state: Option<S>,
}

impl<T, S, F> Iterator for ScanCursor<T, S, F>
where
    S: Clone,
    F: Fn(S, T) -> S,
{
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.upstream.next()?;
        let state = (self.reducer)(self.state.take()?, item);
        self.state = Some(state.clone());
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

/// 重放一组固定的元素。
pub(crate) struct ReplayCursor<T> {
    pub(crate) items: Rc<[T]>,
    pub(crate) pos: usize,
}

impl<T: Clone> Iterator for ReplayCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len().saturating_sub(self.pos);
        (left, Some(left))
    }
}
