//! 链式 xattr 常量定义
//!
//! 这个模块包含：
//! - 错误码（与 Linux errno 兼容）
//! - Linux xattr 限制
//! - 链式 xattr 的默认分块参数

//=============================================================================
// 错误码（与 POSIX errno 兼容）
//=============================================================================

/// 成功
pub const EOK: i32 = 0;

/// 操作不允许
pub const EPERM: i32 = 1;

/// I/O 错误
pub const EIO: i32 = 5;

/// 参数列表过长（setxattr 的 value 超过上限）
pub const E2BIG: i32 = 7;

/// 内存不足
pub const ENOMEM: i32 = 12;

/// 权限不足
pub const EACCES: i32 = 13;

/// 已存在
pub const EEXIST: i32 = 17;

/// 无效参数
pub const EINVAL: i32 = 22;

/// 设备空间不足
pub const ENOSPC: i32 = 28;

/// 结果超出范围（缓冲区太小）
pub const ERANGE: i32 = 34;

/// 名称过长
pub const ENAMETOOLONG: i32 = 36;

/// 无数据（属性不存在）
pub const ENODATA: i32 = 61;

/// 不支持的操作
pub const ENOTSUP: i32 = 95;

//=============================================================================
// Linux xattr 限制
//=============================================================================

/// 单个 xattr 名称的最大长度（含命名空间前缀）
pub const XATTR_NAME_MAX: usize = 255;

/// 单个 xattr 值的最大长度
pub const XATTR_SIZE_MAX: usize = 65536;

//=============================================================================
// 链式 xattr 默认参数
//=============================================================================

/// 逻辑属性名的最大长度
///
/// 转义后最多翻倍，再加上 `@<index>` 后缀，仍然落在 `XATTR_NAME_MAX` 以内
pub const CHAIN_XATTR_MAX_NAME_LEN: usize = (XATTR_NAME_MAX + 1) / 2;

/// 最大块长度（单个物理 xattr 的实际值上限）
pub const CHAIN_XATTR_MAX_BLOCK_LEN: usize = 2048;

/// 短块长度（小值按短块切分，便于保留在 inode 内部）
pub const CHAIN_XATTR_SHORT_BLOCK_LEN: usize = 250;

/// 短值阈值：不超过此长度的值使用短块
pub const CHAIN_XATTR_SHORT_LEN_THRESHOLD: usize = 1000;

/// 物理名称缓冲区在转义名之外预留的空间（`@` + 十进制序号 + `\0`）
pub const CHAIN_XATTR_RAW_NAME_EXTRA: usize = 16;

/// 增长式读取的初始缓冲区大小
pub const INITIAL_READ_BUF_LEN: usize = 1024;
