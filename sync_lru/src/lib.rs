#![cfg_attr(docsrs, feature(doc_cfg))]

//! Thread-safe exact LRU cache / 线程安全的精确 LRU 缓存
//!
//! Fixed entry count, O(1) get / set / rm / peek, one eviction per
//! over-capacity insert. Entries live in a slot arena; the recency list links
//! slots by index between two sentinel slots.
//!
//! 固定条目数，get / set / rm / peek 均为 O(1)，超出容量的插入恰好淘汰一个条目。
//! 条目存放在槽位数组中，最近使用链表在两个哨兵槽位之间按索引链接。
//!
//! # Features
//!
//! - `gxhash`: hash the index with gxhash (needs AES target feature)
//!
//! # Examples
//!
//! ```
//! use sync_lru::Lru;
//!
//! let cache: Lru<&str, i32> = Lru::new(2).unwrap();
//! cache.set("a", 1).unwrap();
//! cache.set("b", 2).unwrap();
//! assert_eq!(cache.get("a"), Some(1));
//!
//! // b is least recently used
//! assert_eq!(cache.set("c", 3).unwrap(), Some(("b", 2)));
//! assert_eq!(cache.peek("b"), None);
//! assert_eq!(cache.len(), 2);
//! ```

mod cache;
mod conf;
mod entry;
mod error;
mod key;
mod list;
mod lru;

pub use cache::Cache;
pub use conf::{Conf, default};
pub use error::{Error, Result};
pub use key::{AnyKey, KeyRule, NonEmpty};
pub use lru::{Lru, MAX_CAP};
