//! chain_xattr: 链式扩展属性
//!
//! 在单个 xattr 有名称长度和值大小限制的文件系统上，
//! 把一个任意大的逻辑属性拆成一串物理 xattr 存储，提供：
//! - **名称编解码**：逻辑名 + chunk 序号 ↔ 物理名
//! - **链式读取**：拼接 chunk，区分“值恰好在块边界结束”和“缓冲区太小”
//! - **链式删除 / 列举**
//! - **分块策略**：供写路径选择块长度
//!
//! # 示例
//!
//! ```rust,ignore
//! use chain_xattr::{chain, ChainConfig, MemXattrs, Result};
//!
//! fn main() -> Result<()> {
//!     let cfg = ChainConfig::default();
//!     let raw = MemXattrs::new();
//!
//!     // 读取完整的值
//!     let value = chain::read_to_vec(&raw, &cfg, b"user.big")?;
//!
//!     // 列出逻辑属性名
//!     for name in chain::names(&chain::list_to_vec(&raw, &cfg)?) {
//!         // ...
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # 模块结构
//!
//! - [`error`] - 错误类型定义
//! - [`consts`] - 常量定义
//! - [`raw`] - 底层 xattr 原语抽象与后端
//! - [`chain`] - 链式协议
//! - [`c_api`] - C 风格兼容层（可选）

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// ===== 核心模块 =====

/// 错误处理
pub mod error;

/// 常量定义
pub mod consts;

/// 底层 xattr 原语
pub mod raw;

/// 链式协议
pub mod chain;

// ===== C API 兼容层（可选）=====

/// C API 兼容层
///
/// 保留经典的函数名和负 errno 返回约定。
#[cfg(feature = "c-api")]
pub mod c_api;

// ===== 公共导出 =====

// 错误处理
pub use error::{Error, ErrorKind, Result};

// 底层原语
pub use raw::{MemXattrs, RawXattrs, SetFlags};
#[cfg(all(feature = "std", target_os = "linux"))]
pub use raw::{FdXattrs, PathXattrs};

// 链式协议
pub use chain::{BlockSize, ChainConfig, ChunkStep};
