//! Key acceptance rules
//! 键准入规则
//!
//! Checked by `set` only. A rejected key is never stored, so lookups just miss.
//! 仅在 `set` 中检查。被拒绝的键不会被存入，查询时直接未命中。

/// Decide whether a key may be stored
/// 判断键是否允许存入
pub trait KeyRule<K: ?Sized> {
  fn accept(&self, key: &K) -> bool;
}

/// Accept every key, empty ones included (zero overhead)
/// 接受所有键，包括空键（零开销）
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyKey;

impl<K: ?Sized> KeyRule<K> for AnyKey {
  #[inline(always)]
  fn accept(&self, _: &K) -> bool {
    true
  }
}

/// Reject empty byte-like keys (`""`, `b""`, empty `Vec<u8>`)
/// 拒绝空的字节类键（`""`、`b""`、空 `Vec<u8>`）
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty;

impl<K: AsRef<[u8]> + ?Sized> KeyRule<K> for NonEmpty {
  #[inline(always)]
  fn accept(&self, key: &K) -> bool {
    !key.as_ref().is_empty()
  }
}
