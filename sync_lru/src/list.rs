//! Recency list on a slot arena
//! 基于槽位数组的最近使用链表
//!
//! Slots `HEAD` and `TAIL` are permanent sentinels holding no entry.
//! Front (after `HEAD`) is most recently used, back (before `TAIL`) least.
//! 槽位 `HEAD` 与 `TAIL` 为永久哨兵，不存条目。
//! 前端（`HEAD` 之后）最近使用，后端（`TAIL` 之前）最久未用。
//!
//! # Complexity
//! 复杂度
//!
//! - push_front / remove / pop_tail / move_to_front: O(1), no allocation
//! - alloc / release: O(1) amortized, freed slots are reused

use std::iter::FusedIterator;

use crate::entry::{Entry, HEAD, Link, NIL, TAIL};

pub(crate) struct List<K, V> {
  links: Vec<Link>,
  slots: Vec<Option<Entry<K, V>>>,
  free: Vec<u32>,
  len: usize,
}

impl<K, V> List<K, V> {
  /// Create empty list, pre-allocate `n` slots
  /// 创建空链表，预分配 `n` 个槽位
  pub fn with_capacity(n: usize) -> Self {
    let mut links = Vec::with_capacity(n + 2);
    links.push(Link {
      prev: NIL,
      next: TAIL,
    });
    links.push(Link {
      prev: HEAD,
      next: NIL,
    });
    let mut slots = Vec::with_capacity(n + 2);
    slots.push(None);
    slots.push(None);
    Self {
      links,
      slots,
      free: Vec::new(),
      len: 0,
    }
  }

  #[inline(always)]
  fn link(&self, idx: u32) -> Link {
    self.links[idx as usize]
  }

  #[inline(always)]
  fn link_mut(&mut self, idx: u32) -> &mut Link {
    &mut self.links[idx as usize]
  }

  /// Linked entry count
  /// 已链接条目数
  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub fn entry(&self, idx: u32) -> Option<&Entry<K, V>> {
    self.slots.get(idx as usize)?.as_ref()
  }

  #[inline]
  pub fn entry_mut(&mut self, idx: u32) -> Option<&mut Entry<K, V>> {
    self.slots.get_mut(idx as usize)?.as_mut()
  }

  /// Store entry in a free slot, returned detached
  /// 将条目存入空闲槽位，返回时未链接
  pub fn alloc(&mut self, key: K, val: V) -> u32 {
    let entry = Some(Entry { key, val });
    if let Some(idx) = self.free.pop() {
      self.slots[idx as usize] = entry;
      return idx;
    }
    let idx = self.slots.len() as u32;
    self.slots.push(entry);
    self.links.push(Link::DETACHED);
    idx
  }

  /// Take entry out of a detached slot and recycle the slot
  /// 取出未链接槽位的条目并回收槽位
  pub fn release(&mut self, idx: u32) -> Option<Entry<K, V>> {
    debug_assert!(idx > TAIL);
    debug_assert!(self.link(idx).is_detached(), "release linked slot {idx}");
    let entry = self.slots.get_mut(idx as usize)?.take()?;
    self.free.push(idx);
    Some(entry)
  }

  /// Link detached `idx` right after head
  /// 将未链接的 `idx` 链接到头哨兵之后
  pub fn push_front(&mut self, idx: u32) {
    debug_assert!(idx > TAIL);
    debug_assert!(self.link(idx).is_detached(), "push linked slot {idx}");
    let first = self.link(HEAD).next;
    *self.link_mut(idx) = Link {
      prev: HEAD,
      next: first,
    };
    self.link_mut(first).prev = idx;
    self.link_mut(HEAD).next = idx;
    self.len += 1;
  }

  /// Unlink `idx`, reset its links to detached
  /// 断开 `idx`，将其链接重置为未链接
  pub fn remove(&mut self, idx: u32) {
    debug_assert!(idx > TAIL);
    let Link { prev, next } = self.link(idx);
    debug_assert!(prev != NIL && next != NIL, "double remove of slot {idx}");
    self.link_mut(prev).next = next;
    self.link_mut(next).prev = prev;
    *self.link_mut(idx) = Link::DETACHED;
    self.len -= 1;
  }

  /// Detach and return the least recently used slot
  /// 断开并返回最久未用的槽位
  pub fn pop_tail(&mut self) -> Option<u32> {
    let last = self.link(TAIL).prev;
    if last == HEAD {
      return None;
    }
    self.remove(last);
    Some(last)
  }

  /// Mark `idx` as most recently used
  /// 将 `idx` 标记为最近使用
  #[inline]
  pub fn move_to_front(&mut self, idx: u32) {
    if self.link(HEAD).next == idx {
      return;
    }
    self.remove(idx);
    self.push_front(idx);
  }

  /// Drop all entries, keep sentinels
  /// 丢弃全部条目，保留哨兵
  pub fn clear(&mut self) {
    self.links.truncate(2);
    self.slots.truncate(2);
    self.link_mut(HEAD).next = TAIL;
    self.link_mut(TAIL).prev = HEAD;
    self.free.clear();
    self.len = 0;
  }

  /// Iterate front (most recent) to back (least recent)
  /// 从前（最近）到后（最久）迭代
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter {
      list: self,
      cur: self.link(HEAD).next,
      remain: self.len,
    }
  }
}

pub(crate) struct Iter<'a, K, V> {
  list: &'a List<K, V>,
  cur: u32,
  remain: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = &'a Entry<K, V>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.cur == TAIL {
      return None;
    }
    let idx = self.cur;
    self.cur = self.list.link(idx).next;
    self.remain = self.remain.saturating_sub(1);
    self.list.entry(idx)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remain, Some(self.remain))
  }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

#[cfg(test)]
impl<K, V> List<K, V> {
  /// Walk head to tail and verify every link
  /// 从头到尾遍历并校验每个链接
  fn check(&self) {
    let mut prev = HEAD;
    let mut cur = self.link(HEAD).next;
    let mut n = 0;
    while cur != TAIL {
      assert!(cur > TAIL && cur != NIL);
      assert_eq!(self.link(cur).prev, prev);
      assert!(self.entry(cur).is_some());
      n += 1;
      assert!(n <= self.len, "cycle or stale len");
      prev = cur;
      cur = self.link(cur).next;
    }
    assert_eq!(self.link(TAIL).prev, prev);
    assert_eq!(n, self.len);
  }

  fn keys(&self) -> Vec<&K> {
    self.iter().map(|e| &e.key).collect()
  }
}
