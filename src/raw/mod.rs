//! 底层 xattr 原语抽象
//!
//! 链式协议只依赖三个原语：get / remove / list。
//! 按路径访问和按文件描述符访问是两个实现者，各自绑定自己的目标，
//! 协议逻辑因此只写一份。
//!
//! - `mem.rs` 提供内存后端（测试和无文件系统环境使用）
//! - `sys.rs` 提供 Linux 系统调用后端（需要 `std` feature）

mod mem;
#[cfg(all(feature = "std", target_os = "linux"))]
mod sys;

pub use mem::{MemXattrs, SetFlags};
#[cfg(all(feature = "std", target_os = "linux"))]
pub use sys::{FdXattrs, PathXattrs};

use crate::error::Result;

/// 底层 xattr 原语接口
///
/// 实现此 trait 以提供对某个文件（路径或描述符）的物理 xattr 访问。
/// 语义与 Linux 的 `getxattr(2)` 系列一致。
///
/// # 示例
///
/// ```rust,ignore
/// use chain_xattr::{RawXattrs, Result};
///
/// struct MyFile {
///     // ...
/// }
///
/// impl RawXattrs for MyFile {
///     fn get(&self, raw_name: &[u8], buf: &mut [u8]) -> Result<usize> {
///         // buf 为空时只返回值长度
///         Ok(0)
///     }
///
///     fn remove(&mut self, raw_name: &[u8]) -> Result<()> {
///         Ok(())
///     }
///
///     fn list(&self, buf: &mut [u8]) -> Result<usize> {
///         Ok(0)
///     }
/// }
/// ```
pub trait RawXattrs {
    /// 读取物理属性值
    ///
    /// # 参数
    ///
    /// * `raw_name` - 物理属性名（不含 `\0`）
    /// * `buf` - 目标缓冲区；为空时只探测长度，不写入任何数据
    ///
    /// # 返回
    ///
    /// 成功返回值的长度。属性不存在返回 `NotFound`，
    /// 非空缓冲区放不下整个值返回 `BufferTooSmall`。
    fn get(&self, raw_name: &[u8], buf: &mut [u8]) -> Result<usize>;

    /// 删除物理属性
    fn remove(&mut self, raw_name: &[u8]) -> Result<()>;

    /// 列出所有物理属性名
    ///
    /// 成功时 `buf` 中是首尾相接、以 `\0` 结尾的名称序列。
    /// `buf` 为空时只返回所需长度。
    fn list(&self, buf: &mut [u8]) -> Result<usize>;
}

impl<T: RawXattrs + ?Sized> RawXattrs for &mut T {
    fn get(&self, raw_name: &[u8], buf: &mut [u8]) -> Result<usize> {
        (**self).get(raw_name, buf)
    }

    fn remove(&mut self, raw_name: &[u8]) -> Result<()> {
        (**self).remove(raw_name)
    }

    fn list(&self, buf: &mut [u8]) -> Result<usize> {
        (**self).list(buf)
    }
}
