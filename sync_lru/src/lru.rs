//! LRU (Least Recently Used) cache, thread-safe
//! 线程安全的 LRU（最近最少使用）缓存
//!
//! # Complexity
//! 复杂度
//!
//! - get / peek: O(1)
//! - set: O(1), at most one eviction
//! - rm: O(1)
//!
//! Hash index maps key to arena slot, the recency list splices slots by index.
//! Both live in one struct behind one `RwLock`, so they never diverge.
//! 哈希索引将键映射到槽位，最近使用链表按索引拼接槽位。
//! 两者位于同一个结构体并由同一把 `RwLock` 保护，因此不会不一致。

use std::{borrow::Borrow, hash::Hash};

use log::{debug, trace};
use parking_lot::RwLock;

use crate::{AnyKey, Cache, Conf, Error, KeyRule, Result, conf::Config, list::List};

#[cfg(feature = "gxhash")]
type Map<K> = gxhash::HashMap<K, u32>;
#[cfg(not(feature = "gxhash"))]
type Map<K> = std::collections::HashMap<K, u32>;

/// Max capacity: slots are u32, two hold sentinels, one is taken transiently before eviction
/// 最大容量：槽位为 u32，两个用于哨兵，淘汰前会临时多占一个
pub const MAX_CAP: usize = (u32::MAX - 3) as usize;

struct Inner<K, V> {
  index: Map<K>,
  list: List<K, V>,
}

/// Fixed capacity LRU cache, shareable across threads
/// 固定容量的 LRU 缓存，可跨线程共享
///
/// `get` / `set` / `rm` take the write lock, `peek` / `len` the read lock.
/// `get` / `set` / `rm` 使用写锁，`peek` / `len` 使用读锁。
#[must_use]
pub struct Lru<K, V, R = AnyKey> {
  inner: RwLock<Inner<K, V>>,
  cap: usize,
  rule: R,
  name: &'static str,
}

impl<K: Hash + Eq, V> Lru<K, V> {
  /// Create with capacity, any key accepted
  /// 创建，指定容量，接受任意键
  #[inline]
  pub fn new(cap: usize) -> Result<Self> {
    Self::with_conf(cap, &[], AnyKey)
  }

  /// Create with key rule
  /// 创建，指定键规则
  #[inline]
  pub fn with_rule<R>(cap: usize, rule: R) -> Result<Lru<K, V, R>> {
    Self::with_conf(cap, &[], rule)
  }

  /// Create with configuration and key rule
  /// 创建，指定配置与键规则
  pub fn with_conf<R>(cap: usize, conf: &[Conf], rule: R) -> Result<Lru<K, V, R>> {
    if cap == 0 || cap > MAX_CAP {
      return Err(Error::InvalidCap(cap));
    }
    let config = Config::from(conf);
    let reserve = config.reserve(cap);
    debug!("{}: cap {cap}, reserve {reserve}", config.name);
    let mut index = Map::default();
    index.reserve(reserve);
    Ok(Lru {
      inner: RwLock::new(Inner {
        index,
        list: List::with_capacity(reserve),
      }),
      cap,
      rule,
      name: config.name,
    })
  }
}

impl<K: Hash + Eq, V, R> Lru<K, V, R> {
  /// Run `f` on value and mark key as most recently used
  /// 对值执行 `f`，并将键标记为最近使用
  pub fn get_with<Q, T>(&self, key: &Q, f: impl FnOnce(&V) -> T) -> Option<T>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let mut guard = self.inner.write();
    let inner = &mut *guard;
    let &idx = inner.index.get(key)?;
    inner.list.move_to_front(idx);
    inner.list.entry(idx).map(|e| f(&e.val))
  }

  /// Run `f` on value, recency untouched
  /// 对值执行 `f`，不改变最近使用顺序
  pub fn peek_with<Q, T>(&self, key: &Q, f: impl FnOnce(&V) -> T) -> Option<T>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let inner = self.inner.read();
    let &idx = inner.index.get(key)?;
    inner.list.entry(idx).map(|e| f(&e.val))
  }

  /// Copy of value, key becomes most recently used
  /// 值的副本，键成为最近使用
  #[inline]
  pub fn get<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    self.get_with(key, V::clone)
  }

  /// Copy of value without updating recency
  /// 值的副本，不更新最近使用顺序
  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    self.peek_with(key, V::clone)
  }

  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.inner.read().index.contains_key(key)
  }

  /// Insert or update
  /// 插入或更新
  ///
  /// Update keeps len and never evicts. Insert past cap evicts exactly
  /// the least recently used entry and returns it.
  /// 更新不改变数量且不淘汰。插入超出容量时恰好淘汰最久未用的条目并返回。
  pub fn set(&self, key: K, val: V) -> Result<Option<(K, V)>>
  where
    K: Clone,
    R: KeyRule<K>,
  {
    if !self.rule.accept(&key) {
      return Err(Error::InvalidKey);
    }

    let mut guard = self.inner.write();
    let inner = &mut *guard;

    if let Some(&idx) = inner.index.get(&key) {
      if let Some(e) = inner.list.entry_mut(idx) {
        e.val = val;
      }
      inner.list.move_to_front(idx);
      return Ok(None);
    }

    let idx = inner.list.alloc(key.clone(), val);
    inner.list.push_front(idx);
    inner.index.insert(key, idx);

    if inner.list.len() <= self.cap {
      return Ok(None);
    }
    Ok(self.evict(inner))
  }

  /// Pop tail, drop it from index
  /// 弹出尾部条目并从索引中删除
  fn evict(&self, inner: &mut Inner<K, V>) -> Option<(K, V)> {
    let idx = inner.list.pop_tail()?;
    let e = inner.list.release(idx)?;
    inner.index.remove(&e.key);
    trace!("{}: evict slot {idx}", self.name);
    Some((e.key, e.val))
  }

  /// Remove by key, return removed value
  /// 按键删除，返回被删除的值
  pub fn rm<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let mut guard = self.inner.write();
    let inner = &mut *guard;
    let idx = inner.index.remove(key)?;
    inner.list.remove(idx);
    inner.list.release(idx).map(|e| e.val)
  }

  /// Drop all entries
  /// 清空全部条目
  pub fn clear(&self) {
    let mut inner = self.inner.write();
    inner.index.clear();
    inner.list.clear();
  }

  /// Keys from most to least recently used
  /// 按最近到最久使用顺序返回键
  pub fn keys(&self) -> Vec<K>
  where
    K: Clone,
  {
    let inner = self.inner.read();
    inner.list.iter().map(|e| e.key.clone()).collect()
  }

  #[inline]
  pub fn len(&self) -> usize {
    let inner = self.inner.read();
    debug_assert_eq!(inner.index.len(), inner.list.len());
    inner.list.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  #[inline(always)]
  pub fn cap(&self) -> usize {
    self.cap
  }
}

impl<K: Hash + Eq + Clone, V: Clone, R: KeyRule<K>> Cache<K, V> for Lru<K, V, R> {
  #[inline(always)]
  fn get(&self, key: &K) -> Option<V> {
    Lru::get(self, key)
  }

  #[inline(always)]
  fn peek(&self, key: &K) -> Option<V> {
    Lru::peek(self, key)
  }

  #[inline(always)]
  fn set(&self, key: K, val: V) -> Result<Option<(K, V)>> {
    Lru::set(self, key, val)
  }

  #[inline(always)]
  fn rm(&self, key: &K) -> Option<V> {
    Lru::rm(self, key)
  }

  #[inline(always)]
  fn len(&self) -> usize {
    Lru::len(self)
  }
}
