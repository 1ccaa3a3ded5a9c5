//! 链式扩展属性
//!
//! 很多文件系统限制单个 xattr 的名称长度和值大小。这个模块把一个任意大的
//! 逻辑属性值存成若干个受限的物理 xattr（chunk），对调用者透明。
//!
//! # 物理名
//!
//! - chunk 0：转义后的逻辑名（`@` → `@@`）
//! - chunk i（i > 0）：转义后的逻辑名 + `@<i>`
//!
//! # 协议
//!
//! - [`read`] / [`length`] / [`read_to_vec`] - 按序拼接 chunk，短 chunk 为链尾
//! - [`remove`] - 依次删除所有 chunk
//! - [`list`] / [`list_to_vec`] - 从物理名列表中筛出逻辑名
//! - [`encode`] / [`block_size_for`] - 供写路径命名 chunk、选择块长度
//!
//! # 并发
//!
//! 所有状态都在函数内部，可以从多个线程同时调用。chunk 之间没有原子性：
//! 并发写入同一属性时，读取可能得到新旧 chunk 的混合或偶发的 `BufferTooSmall`，
//! 需要由上层（如文件锁）串行化读写。
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use chain_xattr::chain::{self, ChainConfig};
//! use chain_xattr::raw::PathXattrs;
//!
//! let cfg = ChainConfig::default();
//! let mut raw = PathXattrs::new("/srv/store/object")?;
//!
//! let value = chain::read_to_vec(&raw, &cfg, b"user.object_info")?;
//! let names = chain::list_to_vec(&raw, &cfg)?;
//! chain::remove(&mut raw, &cfg, b"user.object_info")?;
//! ```

mod block_size;
mod config;
mod list;
mod name;
mod read;
mod remove;

pub use block_size::{block_size_for, is_full_block, BlockSize};
pub use config::ChainConfig;
pub use list::{list, list_to_vec, names};
pub use name::{decode, decode_into, encode};
pub use read::{length, read, read_to_vec, ChunkStep};
pub use remove::remove;
