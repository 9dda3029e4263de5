//! Arena entry and link
//! 数组条目与链接

/// Head sentinel slot
/// 头哨兵槽位
pub(crate) const HEAD: u32 = 0;

/// Tail sentinel slot
/// 尾哨兵槽位
pub(crate) const TAIL: u32 = 1;

/// Absent link
/// 空链接
pub(crate) const NIL: u32 = u32::MAX;

/// Prev/next slot indices (hot, touched on every splice)
/// 前后槽位索引（热数据，每次拼接都会访问）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link {
  pub prev: u32,
  pub next: u32,
}

impl Link {
  pub const DETACHED: Self = Self {
    prev: NIL,
    next: NIL,
  };

  #[inline(always)]
  pub fn is_detached(&self) -> bool {
    self.prev == NIL && self.next == NIL
  }
}

/// Key and value (cold, touched on hit)
/// 键与值（冷数据，命中时访问）
pub(crate) struct Entry<K, V> {
  pub key: K,
  pub val: V,
}
