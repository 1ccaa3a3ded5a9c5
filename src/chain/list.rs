//! 链式列举
//!
//! 从物理名列表中筛出第一个 chunk，解码成逻辑名。
//! 后续 chunk 只是链的延续，不产生输出。

use alloc::vec;
use alloc::vec::Vec;

use crate::{
    error::{Error, ErrorKind, Result},
    raw::RawXattrs,
};

use super::{name::decode_into, ChainConfig};

/// 列出所有逻辑属性名
///
/// # 参数
///
/// * `raw` - 底层 xattr 原语
/// * `cfg` - 链式配置
/// * `buf` - 输出缓冲区（名称以 `\0` 结尾，首尾相接）
///
/// # 返回
///
/// `buf` 为空时返回所需长度的估计值：物理名列表长度的两倍。
/// 解码只会让名称变短，所以这是上界而不是精确值。
///
/// 否则返回写入的字节数；`buf` 放不下时返回 `BufferTooSmall`。
///
/// # 实现说明
///
/// 1. 探测物理名列表长度
/// 2. 分配两倍长度的临时缓冲区并取回完整列表
/// 3. 逐个解码，只输出 `is_first` 的名称
pub fn list<X: RawXattrs + ?Sized>(raw: &X, cfg: &ChainConfig, buf: &mut [u8]) -> Result<usize> {
    if buf.is_empty() {
        return Ok(raw.list(&mut [])? * 2);
    }

    let raw_len = raw.list(&mut [])?;
    if raw_len == 0 {
        return Ok(0);
    }
    let scratch_len = raw_len * 2;
    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(scratch_len)
        .map_err(|_| Error::new(ErrorKind::OutOfMemory, "xattr list scratch allocation failed"))?;
    scratch.resize(scratch_len, 0);

    let fetched = raw.list(&mut scratch)?;
    let listing = &scratch[..fetched.min(scratch_len)];

    let mut written = 0;
    let mut name = Vec::with_capacity(cfg.raw_name_capacity());
    let mut pos = 0;

    while pos < listing.len() {
        let raw_name = match listing[pos..].iter().position(|&b| b == 0) {
            Some(end) => &listing[pos..pos + end],
            None => {
                log::warn!("[CHAIN] list: unterminated raw name at offset {}", pos);
                &listing[pos..]
            }
        };
        pos += raw_name.len() + 1;

        if !decode_into(raw_name, &mut name) {
            continue;
        }

        let end = written + name.len() + 1;
        if end > buf.len() {
            return Err(Error::new(ErrorKind::BufferTooSmall, "xattr list buffer too small"));
        }
        buf[written..end - 1].copy_from_slice(&name);
        buf[end - 1] = 0;
        written = end;
    }

    Ok(written)
}

/// 列出所有逻辑属性名到新分配的缓冲区
///
/// 以 [`list`] 的估计值为初始大小；两次调用之间属性可能增加，
/// 遇到 `BufferTooSmall` 时翻倍重试。
pub fn list_to_vec<X: RawXattrs + ?Sized>(raw: &X, cfg: &ChainConfig) -> Result<Vec<u8>> {
    let mut size = list(raw, cfg, &mut [])?;
    if size == 0 {
        return Ok(Vec::new());
    }

    loop {
        let mut buf = vec![0u8; size];
        match list(raw, cfg, &mut buf) {
            Ok(len) => {
                buf.truncate(len);
                return Ok(buf);
            }
            Err(e) if e.kind() == ErrorKind::BufferTooSmall => {
                size = size
                    .checked_mul(2)
                    .ok_or(Error::new(ErrorKind::OutOfMemory, "xattr list buffer overflow"))?;
                log::debug!("[CHAIN] list_to_vec: growing buffer to {} bytes", size);
            }
            Err(e) => return Err(e),
        }
    }
}

/// 遍历以 `\0` 结尾的名称序列
///
/// # 示例
///
/// ```ignore
/// let blob = list_to_vec(&raw, &cfg)?;
/// for name in names(&blob) {
///     // name 不含 `\0`
/// }
/// ```
pub fn names(blob: &[u8]) -> impl Iterator<Item = &[u8]> {
    let blob = blob.strip_suffix(&[0u8]).unwrap_or(blob);
    let empty = blob.is_empty();
    blob.split(|&b| b == 0).filter(move |_| !empty)
}
