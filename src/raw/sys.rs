//! Linux 系统调用后端
//!
//! `PathXattrs` 使用 getxattr/removexattr/listxattr，
//! `FdXattrs` 使用 fgetxattr/fremovexattr/flistxattr。

use std::ffi::CString;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::{
    consts::EIO,
    error::{Error, ErrorKind, Result},
};

use super::RawXattrs;

fn to_cstring(bytes: &[u8], message: &'static str) -> Result<CString> {
    CString::new(bytes).map_err(|_| Error::new(ErrorKind::InvalidInput, message))
}

fn last_error(message: &'static str) -> Error {
    let errno = std::io::Error::last_os_error()
        .raw_os_error()
        .unwrap_or(EIO);
    Error::from_errno(errno, message)
}

fn check(ret: libc::ssize_t, message: &'static str) -> Result<usize> {
    if ret < 0 {
        Err(last_error(message))
    } else {
        Ok(ret as usize)
    }
}

/// 空缓冲区按长度探测传 (NULL, 0)
fn buf_args(buf: &mut [u8]) -> (*mut libc::c_void, libc::size_t) {
    if buf.is_empty() {
        (core::ptr::null_mut(), 0)
    } else {
        (buf.as_mut_ptr().cast(), buf.len())
    }
}

/// 按路径访问的 xattr
#[derive(Debug, Clone)]
pub struct PathXattrs {
    path: CString,
}

impl PathXattrs {
    /// 绑定到指定路径
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = to_cstring(path.as_ref().as_os_str().as_bytes(), "path contains NUL")?;
        Ok(Self { path })
    }
}

impl RawXattrs for PathXattrs {
    fn get(&self, raw_name: &[u8], buf: &mut [u8]) -> Result<usize> {
        let name = to_cstring(raw_name, "xattr name contains NUL")?;
        let (ptr, len) = buf_args(buf);
        // SAFETY: path/name 是有效的 C 字符串，
        // ptr/len 描述一段可写内存或 (NULL, 0)
        let ret = unsafe { libc::getxattr(self.path.as_ptr(), name.as_ptr(), ptr, len) };
        check(ret, "getxattr failed")
    }

    fn remove(&mut self, raw_name: &[u8]) -> Result<()> {
        let name = to_cstring(raw_name, "xattr name contains NUL")?;
        // SAFETY: path/name 是有效的 C 字符串
        let ret = unsafe { libc::removexattr(self.path.as_ptr(), name.as_ptr()) };
        if ret < 0 {
            return Err(last_error("removexattr failed"));
        }
        Ok(())
    }

    fn list(&self, buf: &mut [u8]) -> Result<usize> {
        let (ptr, len) = buf_args(buf);
        // SAFETY: path 是有效的 C 字符串，ptr/len 描述一段可写内存或 (NULL, 0)
        let ret = unsafe { libc::listxattr(self.path.as_ptr(), ptr.cast(), len) };
        check(ret, "listxattr failed")
    }
}

/// 按打开的文件描述符访问的 xattr
#[derive(Debug, Clone, Copy)]
pub struct FdXattrs<'fd> {
    fd: BorrowedFd<'fd>,
}

impl<'fd> FdXattrs<'fd> {
    /// 绑定到已打开的文件
    pub fn new(file: &'fd impl AsFd) -> Self {
        Self { fd: file.as_fd() }
    }
}

impl RawXattrs for FdXattrs<'_> {
    fn get(&self, raw_name: &[u8], buf: &mut [u8]) -> Result<usize> {
        let name = to_cstring(raw_name, "xattr name contains NUL")?;
        let (ptr, len) = buf_args(buf);
        // SAFETY: fd 在借用期内有效，name 是有效的 C 字符串
        let ret = unsafe { libc::fgetxattr(self.fd.as_raw_fd(), name.as_ptr(), ptr, len) };
        check(ret, "fgetxattr failed")
    }

    fn remove(&mut self, raw_name: &[u8]) -> Result<()> {
        let name = to_cstring(raw_name, "xattr name contains NUL")?;
        // SAFETY: fd 在借用期内有效，name 是有效的 C 字符串
        let ret = unsafe { libc::fremovexattr(self.fd.as_raw_fd(), name.as_ptr()) };
        if ret < 0 {
            return Err(last_error("fremovexattr failed"));
        }
        Ok(())
    }

    fn list(&self, buf: &mut [u8]) -> Result<usize> {
        let (ptr, len) = buf_args(buf);
        // SAFETY: fd 在借用期内有效，ptr/len 描述一段可写内存或 (NULL, 0)
        let ret = unsafe { libc::flistxattr(self.fd.as_raw_fd(), ptr.cast(), len) };
        check(ret, "flistxattr failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{self, ChainConfig};
    use alloc::vec::Vec;

    /// 宿主文件系统不支持 user xattr 时跳过
    fn user_xattrs_supported(file: &std::fs::File) -> bool {
        let mut raw = FdXattrs::new(file);
        let cfg = ChainConfig::default();
        match chain::remove(&mut raw, &cfg, b"user.chain_xattr_support") {
            Err(e) => e.kind() == ErrorKind::NotFound,
            Ok(()) => true,
        }
    }

    fn fset(file: &std::fs::File, raw_name: &[u8], value: &[u8]) {
        let name = CString::new(raw_name).unwrap();
        // SAFETY: fd 在 file 存活期间有效，name 是有效的 C 字符串，
        // value 的指针和长度描述一段可读内存
        let ret = unsafe {
            libc::fsetxattr(
                file.as_raw_fd(),
                name.as_ptr(),
                value.as_ptr().cast(),
                value.len(),
                0,
            )
        };
        assert_eq!(ret, 0);
    }

    #[test]
    fn test_fd_missing_attribute() {
        let file = tempfile::tempfile().unwrap();
        if !user_xattrs_supported(&file) {
            return;
        }

        let raw = FdXattrs::new(&file);
        let cfg = ChainConfig::default();
        let err = chain::length(&raw, &cfg, b"user.missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_fd_chain() {
        let file = tempfile::tempfile().unwrap();
        if !user_xattrs_supported(&file) {
            return;
        }

        // 600 字节按短块切成 3 个 chunk，总量仍在 ext4 单块限制内
        let cfg = ChainConfig::default();
        let name = b"user.big@v";
        let value: Vec<u8> = (0..600u32).map(|i| (i % 251) as u8).collect();
        let block = chain::block_size_for(&cfg, value.len()).len(&cfg);
        for (i, chunk) in value.chunks(block).enumerate() {
            fset(&file, &chain::encode(name, i as u32, cfg.raw_name_capacity()), chunk);
        }

        let mut raw = FdXattrs::new(&file);
        assert_eq!(chain::length(&raw, &cfg, name).unwrap(), 600);
        assert_eq!(chain::read_to_vec(&raw, &cfg, name).unwrap(), value);

        let names = chain::list_to_vec(&raw, &cfg).unwrap();
        let matching = chain::names(&names).filter(|n| n.starts_with(b"user.big")).count();
        assert_eq!(matching, 1);
        assert!(chain::names(&names).any(|n| n == name));

        chain::remove(&mut raw, &cfg, name).unwrap();
        assert!(chain::length(&raw, &cfg, name).unwrap_err().is_not_found());
    }

    #[test]
    fn test_path_chain() {
        let file = tempfile::NamedTempFile::new().unwrap();
        if !user_xattrs_supported(file.as_file()) {
            return;
        }

        let cfg = ChainConfig::default();
        fset(file.as_file(), &chain::encode(b"user.small", 0, cfg.raw_name_capacity()), b"abc");

        let raw = PathXattrs::new(file.path()).unwrap();
        assert_eq!(chain::read_to_vec(&raw, &cfg, b"user.small").unwrap(), b"abc");
    }

    #[test]
    fn test_path_with_nul() {
        assert!(PathXattrs::new("a\0b").is_err());
    }
}
