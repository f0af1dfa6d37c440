use crate::cursor::{Cursor, ReplayCursor, ScanCursor, SkipCursor, TakeCursor, TakeWhileCursor};
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::rc::Rc;

type Factory<T> = Rc<dyn Fn() -> Cursor<T>>;

/// 惰性序列。
///
/// 持有一个游标工厂，每次遍历都调用工厂得到一个全新的、独立的游标。
/// 所有组合操作都不修改自身，而是返回一个包装了原工厂的新序列，因此同一个序列可以被多个分支同时引用和遍历。
///
/// 惰性操作（`filter`、`map`、`skip`、`take`、`take_while`、`scan`）在被消费之前不会拉取任何元素；
/// 终结操作（`for_each`、`reduce`、`every`、`some`、`to_map`、`to_vec`）每次调用恰好驱动一次遍历；
/// `cache`是唯一在调用时立即求值的组合操作。
///
/// ```
/// use slothful::range;
///
/// let evens = range(0, 10).filter(|x| x % 2 == 0);
/// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
/// // 可以重复遍历
/// assert_eq!(evens.reduce(|sum, x| sum + x, 0), 20);
/// ```
pub struct LazySequence<T> {
    factory: Factory<T>,
}

impl<T> Clone for LazySequence<T> {
    fn clone(&self) -> Self {
        LazySequence { factory: Rc::clone(&self.factory) }
    }
}

impl<T> Debug for LazySequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazySequence").finish_non_exhaustive()
    }
}

impl<T: 'static> LazySequence<T> {
    /// 由工厂构造序列，工厂在每次遍历时被调用一次，必须每次返回一个从头开始的新迭代器。
    ///
    /// ```
    /// use slothful::LazySequence;
    ///
    /// let seq = LazySequence::new(|| "abc".chars());
    /// assert_eq!(seq.to_vec(), vec!['a', 'b', 'c']);
    /// ```
    pub fn new<F, I>(factory: F) -> LazySequence<T>
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_cursor_factory(move || Cursor::new(factory().into_iter()))
    }

    pub(crate) fn from_cursor_factory(factory: impl Fn() -> Cursor<T> + 'static) -> LazySequence<T> {
        LazySequence { factory: Rc::new(factory) }
    }

    /// 开始一次新的遍历。
    pub fn iter(&self) -> Cursor<T> {
        (self.factory)()
    }

    /* **************************************** 惰性操作 **************************************** */

    /// 只保留满足`predicate`的元素，保持原有顺序。
    pub fn filter<P>(&self, predicate: P) -> LazySequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let upstream = Rc::clone(&self.factory);
        let predicate = Rc::new(predicate);
        Self::from_cursor_factory(move || {
            let predicate = Rc::clone(&predicate);
            Cursor::new(upstream().filter(move |item| predicate(item)))
        })
    }

    /// 对每个元素应用`f`，一一对应。
    pub fn map<U, F>(&self, f: F) -> LazySequence<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let upstream = Rc::clone(&self.factory);
        let f = Rc::new(f);
        LazySequence::from_cursor_factory(move || {
            let f = Rc::clone(&f);
            Cursor::new(upstream().map(move |item| f(item)))
        })
    }

    /// 丢弃前`count`个元素。
    pub fn skip(&self, count: usize) -> LazySequence<T> {
        let upstream = Rc::clone(&self.factory);
        Self::from_cursor_factory(move || Cursor::new(SkipCursor { upstream: upstream(), remaining: count }))
    }

    /// 最多保留前`count`个元素，足够之后不再拉取上游，可用于无限序列。
    pub fn take(&self, count: usize) -> LazySequence<T> {
        let upstream = Rc::clone(&self.factory);
        Self::from_cursor_factory(move || Cursor::new(TakeCursor { upstream: upstream(), remaining: count }))
    }

    /// 持续保留满足`predicate`的元素，直到第一个不满足的元素（不包含）。
    pub fn take_while<P>(&self, predicate: P) -> LazySequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let upstream = Rc::clone(&self.factory);
        let predicate = Rc::new(predicate);
        Self::from_cursor_factory(move || {
            Cursor::new(TakeWhileCursor { upstream: upstream(), predicate: Rc::clone(&predicate), done: false })
        })
    }

    /// 累积：每个元素产生一次`reducer(state, item)`的结果，初始状态本身不产生。
    ///
    /// ```
    /// let seq = slothful::range(5, 4).scan(|sum, x| sum + x, 0);
    /// assert_eq!(seq.to_vec(), vec![5, 11, 18, 26]);
    /// ```
    pub fn scan<S, F>(&self, reducer: F, initial_state: S) -> LazySequence<S>
    where
        S: Clone + 'static,
        F: Fn(S, T) -> S + 'static,
    {
        let upstream = Rc::clone(&self.factory);
        let reducer = Rc::new(reducer);
        LazySequence::from_cursor_factory(move || {
            Cursor::new(ScanCursor {
                upstream: upstream(),
                reducer: Rc::clone(&reducer),
                state: Some(initial_state.clone()),
            })
        })
    }

    /// 立即遍历一次并缓存全部元素，返回的序列每次遍历只重放缓存，不再执行上游。
    ///
    /// 对无限序列直接调用不会返回，缓存持续增长直到内存耗尽。
    pub fn cache(&self) -> LazySequence<T>
    where
        T: Clone,
    {
        let items: Rc<[T]> = Rc::from(self.collect_pass());
        Self::from_cursor_factory(move || Cursor::new(ReplayCursor { items: Rc::clone(&items), pos: 0 }))
    }

    /* **************************************** 终结操作 **************************************** */

    /// 是否全部元素都满足`predicate`，遇到第一个不满足的元素即返回；空序列返回`true`。
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// 是否存在满足`predicate`的元素，遇到第一个满足的元素即返回；空序列返回`false`。
    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    /// 按顺序对每个元素执行`action`。
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(action)
    }

    /// `action`返回错误时立即停止遍历，并原样返回该错误。
    pub fn try_for_each<E, F>(&self, action: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<(), E>,
    {
        self.iter().try_for_each(action)
    }

    /// 左折叠，空序列返回`initial_value`。
    pub fn reduce<A, F>(&self, reducer: F, initial_value: A) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(initial_value, reducer)
    }

    /// `reducer`返回错误时立即停止遍历，并原样返回该错误。
    pub fn try_reduce<A, E, F>(&self, reducer: F, initial_value: A) -> Result<A, E>
    where
        F: FnMut(A, T) -> Result<A, E>,
    {
        self.iter().try_fold(initial_value, reducer)
    }

    /// 对每个元素分别计算键和值，后出现的重复键覆盖先出现的。
    pub fn to_map<K, V, KF, VF>(&self, mut key_selector: KF, mut value_selector: VF) -> FxHashMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
    {
        let mut map = FxHashMap::default();
        for item in self.iter() {
            let key = key_selector(&item);
            map.insert(key, value_selector(item));
        }
        map
    }

    /// 遍历一次并收集全部元素。
    pub fn to_vec(&self) -> Vec<T> {
        self.collect_pass()
    }

    // 不按size_hint预分配：无限上游的下界为usize::MAX
    fn collect_pass(&self) -> Vec<T> {
        let mut items = Vec::new();
        for item in self.iter() {
            items.push(item);
        }
        items
    }
}

impl<T: 'static> IntoIterator for &LazySequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for LazySequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
