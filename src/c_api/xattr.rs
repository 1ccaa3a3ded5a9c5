//! C API 兼容层 - 链式 xattr 操作
//!
//! 所有函数都是 `chain` 模块的简单包装。

use alloc::vec::Vec;

use crate::{
    chain::{self, ChainConfig},
    consts::EOK,
    raw::RawXattrs,
    Result,
};

/// 把 Result 转成 ssize_t 风格的返回值
fn to_ret(result: Result<usize>) -> isize {
    match result {
        Ok(len) => isize::try_from(len).unwrap_or(isize::MAX),
        Err(e) => -(e.errno() as isize),
    }
}

/// C API: get_raw_xattr_name
///
/// 生成第 `index` 个 chunk 的物理名。
pub fn get_raw_xattr_name(cfg: &ChainConfig, name: &[u8], index: u32) -> Vec<u8> {
    chain::encode(name, index, cfg.raw_name_capacity())
}

/// C API: get_xattr_block_size
///
/// 返回写入 `size` 字节的值时应使用的块长度。
pub fn get_xattr_block_size(cfg: &ChainConfig, size: usize) -> usize {
    chain::block_size_for(cfg, size).len(cfg)
}

/// C API: chain_getxattr
///
/// `buf` 为空时返回值的总长度。
pub fn chain_getxattr<X: RawXattrs + ?Sized>(
    raw: &X,
    cfg: &ChainConfig,
    name: &[u8],
    buf: &mut [u8],
) -> isize {
    to_ret(chain::read(raw, cfg, name, buf))
}

/// C API: chain_getxattr_buf
///
/// 读取完整的值到 `out`（原内容被替换）。
pub fn chain_getxattr_buf<X: RawXattrs + ?Sized>(
    raw: &X,
    cfg: &ChainConfig,
    name: &[u8],
    out: &mut Vec<u8>,
) -> isize {
    to_ret(chain::read_to_vec(raw, cfg, name).map(|value| {
        *out = value;
        out.len()
    }))
}

/// C API: chain_removexattr
pub fn chain_removexattr<X: RawXattrs + ?Sized>(
    raw: &mut X,
    cfg: &ChainConfig,
    name: &[u8],
) -> i32 {
    match chain::remove(raw, cfg, name) {
        Ok(()) => EOK,
        Err(e) => -e.errno(),
    }
}

/// C API: chain_listxattr
///
/// `buf` 为空时返回所需长度的估计值。
pub fn chain_listxattr<X: RawXattrs + ?Sized>(
    raw: &X,
    cfg: &ChainConfig,
    buf: &mut [u8],
) -> isize {
    to_ret(chain::list(raw, cfg, buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chain::test_util::{FaultOp, FaultyXattrs},
        consts::{EACCES, EIO, ENODATA, ERANGE},
        raw::{MemXattrs, SetFlags},
    };

    fn store(mem: &mut MemXattrs, cfg: &ChainConfig, name: &[u8], value: &[u8]) {
        let block = get_xattr_block_size(cfg, value.len());
        for (i, chunk) in value.chunks(block).enumerate() {
            let raw_name = get_raw_xattr_name(cfg, name, i as u32);
            mem.set(&raw_name, chunk, SetFlags::empty()).unwrap();
        }
    }

    #[test]
    fn test_negative_errno() {
        let cfg = ChainConfig::default();
        let mut mem = MemXattrs::new();

        assert_eq!(chain_getxattr(&mem, &cfg, b"k", &mut []), -(ENODATA as isize));
        assert_eq!(chain_removexattr(&mut mem, &cfg, b"k"), -ENODATA);
    }

    #[test]
    fn test_get_and_list() {
        let cfg = ChainConfig::default();
        let mut mem = MemXattrs::new();
        store(&mut mem, &cfg, b"user.x", &[5u8; 300]);

        assert_eq!(chain_getxattr(&mem, &cfg, b"user.x", &mut []), 300);
        assert_eq!(
            chain_getxattr(&mem, &cfg, b"user.x", &mut [0u8; 250]),
            -(ERANGE as isize)
        );

        let mut out = Vec::new();
        assert_eq!(chain_getxattr_buf(&mem, &cfg, b"user.x", &mut out), 300);
        assert_eq!(out.len(), 300);

        let mut names = [0u8; 32];
        assert_eq!(chain_listxattr(&mem, &cfg, &mut names), 7);
        assert_eq!(&names[..7], b"user.x\0");

        assert_eq!(chain_removexattr(&mut mem, &cfg, b"user.x"), EOK);
        assert!(mem.is_empty());
    }

    #[test]
    fn test_backend_errno_passes_through() {
        let cfg = ChainConfig::default();
        let mut mem = MemXattrs::new();
        store(&mut mem, &cfg, b"user.x", b"v");
        let mut raw = FaultyXattrs::new(mem)
            .fail(FaultOp::Remove, b"user.x", EACCES)
            .fail(FaultOp::ListFetch, b"", EIO);

        assert_eq!(chain_removexattr(&mut raw, &cfg, b"user.x"), -EACCES);
        assert_eq!(chain_listxattr(&raw, &cfg, &mut [0u8; 32]), -(EIO as isize));
        assert_eq!(chain_listxattr(&raw, &cfg, &mut []), 14);
    }
}
