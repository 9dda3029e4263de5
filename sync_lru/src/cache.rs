//! Cache trait definition
//! 缓存 trait 定义

/// Thread-safe cache operations, all take `&self`
/// 线程安全的缓存操作，均为 `&self`
///
/// # Complexity
/// 复杂度
///
/// All implementations should provide:
/// 所有实现应提供：
/// - get / peek: O(1)
/// - set: O(1) amortized
/// - rm: O(1)
pub trait Cache<K, V> {
  /// Get a copy of value, mark key as most recently used
  /// 获取值的副本，并将键标记为最近使用
  fn get(&self, key: &K) -> Option<V>;

  /// Get a copy of value, recency untouched
  /// 获取值的副本，不改变最近使用顺序
  fn peek(&self, key: &K) -> Option<V>;

  /// Insert or update, return the evicted pair if any
  /// 插入或更新，返回被淘汰的键值对（如有）
  fn set(&self, key: K, val: V) -> crate::Result<Option<(K, V)>>;

  /// Remove by key, return the removed value
  /// 按键删除，返回被删除的值
  fn rm(&self, key: &K) -> Option<V>;

  /// Entry count
  /// 条目数量
  fn len(&self) -> usize;

  #[inline]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
