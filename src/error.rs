//! 错误类型定义
//!
//! 提供链式 xattr 操作的错误类型。
//!
//! 底层 xattr 原语以 errno 报告失败，这里保留原始 errno，
//! 使未被协议消化的错误能原样传回调用者。

use core::fmt;

use crate::consts::*;

/// 链式 xattr 操作错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    errno: i32,
    message: &'static str,
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 属性不存在（ENODATA）
    NotFound,
    /// 调用者缓冲区不足（ERANGE）
    BufferTooSmall,
    /// 内存不足（ENOMEM）
    OutOfMemory,
    /// 名称过长（ENAMETOOLONG）
    NameTooLong,
    /// 无效参数
    InvalidInput,
    /// 权限错误
    PermissionDenied,
    /// 已存在
    AlreadyExists,
    /// 空间不足
    NoSpace,
    /// 不支持的操作
    Unsupported,
    /// I/O 错误（以及无法识别的 errno）
    Io,
}

impl ErrorKind {
    /// 该类别对应的默认 errno
    pub const fn errno(self) -> i32 {
        match self {
            ErrorKind::NotFound => ENODATA,
            ErrorKind::BufferTooSmall => ERANGE,
            ErrorKind::OutOfMemory => ENOMEM,
            ErrorKind::NameTooLong => ENAMETOOLONG,
            ErrorKind::InvalidInput => EINVAL,
            ErrorKind::PermissionDenied => EPERM,
            ErrorKind::AlreadyExists => EEXIST,
            ErrorKind::NoSpace => ENOSPC,
            ErrorKind::Unsupported => ENOTSUP,
            ErrorKind::Io => EIO,
        }
    }

    /// 把 errno 归类
    pub const fn from_errno(errno: i32) -> Self {
        match errno {
            ENODATA => ErrorKind::NotFound,
            ERANGE => ErrorKind::BufferTooSmall,
            ENOMEM => ErrorKind::OutOfMemory,
            ENAMETOOLONG => ErrorKind::NameTooLong,
            EINVAL => ErrorKind::InvalidInput,
            EPERM | EACCES => ErrorKind::PermissionDenied,
            EEXIST => ErrorKind::AlreadyExists,
            ENOSPC | E2BIG => ErrorKind::NoSpace,
            ENOTSUP => ErrorKind::Unsupported,
            _ => ErrorKind::Io,
        }
    }
}

impl Error {
    /// 创建新错误，errno 取类别的默认值
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            errno: kind.errno(),
            message,
        }
    }

    /// 从底层原语返回的 errno 创建错误
    ///
    /// 接受正值或负值（负 errno 风格），内部统一保存为正值。
    pub const fn from_errno(errno: i32, message: &'static str) -> Self {
        let errno = if errno < 0 { -errno } else { errno };
        Self {
            kind: ErrorKind::from_errno(errno),
            errno,
            message,
        }
    }

    /// 获取错误类型
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 获取原始 errno（正值）
    pub const fn errno(&self) -> i32 {
        self.errno
    }

    /// 获取错误消息
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// 是否为“属性不存在”
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (errno {}): {}", self.kind, self.errno, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result 类型别名
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_round_trip() {
        for kind in [
            ErrorKind::NotFound,
            ErrorKind::BufferTooSmall,
            ErrorKind::OutOfMemory,
            ErrorKind::NameTooLong,
            ErrorKind::InvalidInput,
            ErrorKind::PermissionDenied,
            ErrorKind::AlreadyExists,
            ErrorKind::NoSpace,
            ErrorKind::Unsupported,
            ErrorKind::Io,
        ] {
            assert_eq!(ErrorKind::from_errno(kind.errno()), kind);
        }
    }

    #[test]
    fn test_unknown_errno_kept() {
        // EBADF 没有专门的类别，但 errno 必须原样保留
        let err = Error::from_errno(-9, "bad fd");
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.errno(), 9);
    }

    #[test]
    fn test_eacces_is_permission() {
        let err = Error::from_errno(EACCES, "denied");
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(err.errno(), EACCES);
    }
}
