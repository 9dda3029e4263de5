//! Cache configuration
//! 缓存配置

/// Cache configuration options
/// 缓存配置选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conf {
  /// Slots pre-allocated for index and arena (clamped to cap)
  /// 为索引和数组预分配的槽位数（不超过容量）
  Reserve(usize),

  /// Label in log lines
  /// 日志中的名称
  Name(&'static str),
}

/// Internal configuration struct
/// 内部配置结构体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Config {
  pub reserve: Option<usize>,
  pub name: &'static str,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      reserve: None,
      name: default::NAME,
    }
  }
}

impl From<&[Conf]> for Config {
  fn from(conf_li: &[Conf]) -> Self {
    let mut config = Self::default();
    for &conf in conf_li {
      match conf {
        Conf::Reserve(n) => config.reserve = Some(n),
        Conf::Name(name) => config.name = name,
      }
    }
    config
  }
}

impl Config {
  /// Slots to pre-allocate for `cap`
  /// 为 `cap` 预分配的槽位数
  pub fn reserve(&self, cap: usize) -> usize {
    match self.reserve {
      Some(n) if n > cap => {
        log::warn!("{}: reserve {n} > cap {cap}, clamped", self.name);
        cap
      }
      Some(n) => n,
      None => cap.min(default::RESERVE),
    }
  }
}

/// Default values
/// 默认值
pub mod default {
  /// Pre-allocated slots when `Conf::Reserve` is absent
  /// 未指定 `Conf::Reserve` 时的预分配槽位数
  pub const RESERVE: usize = 1024;

  pub const NAME: &str = "lru";
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let c = Config::from(&[][..]);
    assert_eq!(c, Config::default());
    assert_eq!(c.name, "lru");
    assert_eq!(c.reserve(10), 10);
    assert_eq!(c.reserve(1 << 20), default::RESERVE);
  }

  #[test]
  fn last_wins() {
    let c = Config::from(&[Conf::Reserve(4), Conf::Name("a"), Conf::Name("b")][..]);
    assert_eq!(c.name, "b");
    assert_eq!(c.reserve(100), 4);
  }

  #[test]
  fn reserve_clamped() {
    let c = Config::from(&[Conf::Reserve(500)][..]);
    assert_eq!(c.reserve(8), 8);
  }
}
