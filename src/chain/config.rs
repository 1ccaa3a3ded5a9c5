//! 链式 xattr 配置
//!
//! 名称长度上限和分块参数都通过配置显式传入，测试时可以用很小的值。

use crate::{
    consts::*,
    error::{Error, ErrorKind, Result},
};

/// 链式 xattr 配置
///
/// 字段不公开：只能通过 [`ChainConfig::new`]（校验参数）或 `Default` 构造。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    max_name_len: usize,
    short_block_len: usize,
    max_block_len: usize,
    short_len_threshold: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_name_len: CHAIN_XATTR_MAX_NAME_LEN,
            short_block_len: CHAIN_XATTR_SHORT_BLOCK_LEN,
            max_block_len: CHAIN_XATTR_MAX_BLOCK_LEN,
            short_len_threshold: CHAIN_XATTR_SHORT_LEN_THRESHOLD,
        }
    }
}

impl ChainConfig {
    /// 创建并校验配置
    ///
    /// 要求 `0 < max_name_len <= CHAIN_XATTR_MAX_NAME_LEN`
    /// 且 `0 < short_block_len <= max_block_len`。
    /// 转义后名称长度最多翻倍，更长的逻辑名放不进 `XATTR_NAME_MAX`。
    pub fn new(
        max_name_len: usize,
        short_block_len: usize,
        max_block_len: usize,
        short_len_threshold: usize,
    ) -> Result<Self> {
        if max_name_len == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "max_name_len must be positive"));
        }
        if max_name_len > CHAIN_XATTR_MAX_NAME_LEN {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "max_name_len exceeds raw xattr name limit",
            ));
        }
        if short_block_len == 0 || short_block_len > max_block_len {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "block lengths must satisfy 0 < short <= max",
            ));
        }

        Ok(Self {
            max_name_len,
            short_block_len,
            max_block_len,
            short_len_threshold,
        })
    }

    /// 逻辑属性名的最大长度（字节）
    pub const fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// 短块长度
    pub const fn short_block_len(&self) -> usize {
        self.short_block_len
    }

    /// 最大块长度
    pub const fn max_block_len(&self) -> usize {
        self.max_block_len
    }

    /// 不超过此长度的值使用短块
    pub const fn short_len_threshold(&self) -> usize {
        self.short_len_threshold
    }

    /// 物理名称缓冲区容量（含结尾的 `\0`）
    pub const fn raw_name_capacity(&self) -> usize {
        self.max_name_len * 2 + CHAIN_XATTR_RAW_NAME_EXTRA
    }

    /// 校验逻辑属性名
    ///
    /// 名称中不能有 `\0`，长度不能超过 `max_name_len`
    pub fn check_name(&self, name: &[u8]) -> Result<()> {
        if name.contains(&0) {
            return Err(Error::new(ErrorKind::InvalidInput, "xattr name contains NUL"));
        }
        if name.len() > self.max_name_len {
            return Err(Error::new(ErrorKind::NameTooLong, "xattr name too long"));
        }
        Ok(())
    }
}
