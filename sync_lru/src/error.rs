//! Error types for sync_lru
//! sync_lru 错误类型

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Capacity is 0 or exceeds MAX_CAP
  /// 容量为 0 或超过 MAX_CAP
  #[error("invalid capacity: {0} / 无效容量")]
  InvalidCap(usize),

  /// Key rejected by KeyRule
  /// 键被 KeyRule 拒绝
  #[error("invalid key / 无效键")]
  InvalidKey,
}

pub type Result<T> = std::result::Result<T, Error>;
