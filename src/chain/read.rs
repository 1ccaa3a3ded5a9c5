//! 链式读取
//!
//! 按序号依次读取 chunk 0, 1, 2, ... 并拼接。链的长度只能逐个探测：
//! 短 chunk（长度不等于任何块长度）是链尾，满块 chunk 之后可能还有数据。

use alloc::vec;
use alloc::vec::Vec;

use crate::{
    consts::INITIAL_READ_BUF_LEN,
    error::{Error, ErrorKind, Result},
    raw::RawXattrs,
};

use super::{block_size::is_full_block, name::encode, ChainConfig};

/// 单个 chunk 的读取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkStep {
    /// 短 chunk，链到此结束
    Done(usize),
    /// 满块 chunk，后面可能还有
    Continues(usize),
    /// 底层原语失败
    Failed(Error),
}

impl ChunkStep {
    /// 根据底层 get 的结果分类
    pub fn classify(cfg: &ChainConfig, result: Result<usize>) -> Self {
        match result {
            Ok(len) if is_full_block(cfg, len) => ChunkStep::Continues(len),
            Ok(len) => ChunkStep::Done(len),
            Err(e) => ChunkStep::Failed(e),
        }
    }
}

/// 获取逻辑属性值的总长度
///
/// chunk 0 不存在或出错时返回该错误；之后的探测失败视为链尾。
pub fn length<X: RawXattrs + ?Sized>(raw: &X, cfg: &ChainConfig, name: &[u8]) -> Result<usize> {
    cfg.check_name(name)?;

    let capacity = cfg.raw_name_capacity();
    let mut total = 0;
    let mut index = 0u32;

    loop {
        let raw_name = encode(name, index, capacity);
        match ChunkStep::classify(cfg, raw.get(&raw_name, &mut [])) {
            ChunkStep::Failed(e) if index == 0 => return Err(e),
            ChunkStep::Failed(e) => {
                log::trace!("[CHAIN] length: chunk {} lookup ended chain: {}", index, e);
                break;
            }
            ChunkStep::Done(len) => {
                total += len;
                break;
            }
            ChunkStep::Continues(len) => {
                total += len;
                index += 1;
            }
        }
    }

    Ok(total)
}

/// 读取逻辑属性值
///
/// # 参数
///
/// * `raw` - 底层 xattr 原语
/// * `cfg` - 链式配置
/// * `name` - 逻辑属性名
/// * `buf` - 输出缓冲区；为空时等价于 [`length`]
///
/// # 返回
///
/// 成功返回值的长度。缓冲区放不下完整的值时返回 `BufferTooSmall`，
/// 不会返回被截断的数据。
///
/// # 实现说明
///
/// 1. 从 chunk 0 开始，把 chunk 读到 `buf` 的当前偏移处
/// 2. chunk i（i > 0）不存在是正常的链尾
/// 3. 缓冲区恰好被满块 chunk 填满时，再探测下一个 chunk：
///    存在且非空说明值更长，返回 `BufferTooSmall`
pub fn read<X: RawXattrs + ?Sized>(
    raw: &X,
    cfg: &ChainConfig,
    name: &[u8],
    buf: &mut [u8],
) -> Result<usize> {
    if buf.is_empty() {
        return length(raw, cfg, name);
    }
    cfg.check_name(name)?;

    let capacity = cfg.raw_name_capacity();
    let mut pos = 0;
    let mut index = 0u32;

    loop {
        let raw_name = encode(name, index, capacity);
        match ChunkStep::classify(cfg, raw.get(&raw_name, &mut buf[pos..])) {
            ChunkStep::Failed(e) if index > 0 && e.is_not_found() => {
                log::trace!("[CHAIN] read: chunk {} absent, value is {} bytes", index, pos);
                return Ok(pos);
            }
            ChunkStep::Failed(e) => return Err(e),
            ChunkStep::Done(len) => return Ok(pos + len),
            ChunkStep::Continues(len) => {
                pos += len;
                index += 1;
                if pos == buf.len() {
                    break;
                }
            }
        }
    }

    // 缓冲区正好在块边界上用完：值可能恰好到此结束，也可能被截断
    let raw_name = encode(name, index, capacity);
    match raw.get(&raw_name, &mut []) {
        Ok(len) if len > 0 => {
            log::debug!(
                "[CHAIN] read: buffer of {} bytes ends at block boundary but chunk {} has {} more",
                buf.len(),
                index,
                len
            );
            Err(Error::new(ErrorKind::BufferTooSmall, "xattr value larger than buffer"))
        }
        _ => Ok(pos),
    }
}

/// 读取完整的逻辑属性值
///
/// 从 [`INITIAL_READ_BUF_LEN`] 开始，遇到 `BufferTooSmall` 就把缓冲区翻倍重试。
/// 增长没有上限，值大小的策略由调用者负责。
pub fn read_to_vec<X: RawXattrs + ?Sized>(
    raw: &X,
    cfg: &ChainConfig,
    name: &[u8],
) -> Result<Vec<u8>> {
    let mut size = INITIAL_READ_BUF_LEN;

    loop {
        let mut buf = vec![0u8; size];
        match read(raw, cfg, name, &mut buf) {
            Ok(len) => {
                buf.truncate(len);
                return Ok(buf);
            }
            Err(e) if e.kind() == ErrorKind::BufferTooSmall => {
                size = size
                    .checked_mul(2)
                    .ok_or(Error::new(ErrorKind::OutOfMemory, "xattr read buffer overflow"))?;
                log::debug!("[CHAIN] read_to_vec: growing buffer to {} bytes", size);
            }
            Err(e) => return Err(e),
        }
    }
}
