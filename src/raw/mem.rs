//! 内存 xattr 后端
//!
//! 按插入顺序保存物理属性，行为与 Linux 的 xattr 系统调用保持一致：
//! - 非空缓冲区放不下时返回 ERANGE
//! - 属性不存在时返回 ENODATA
//! - 名称超过 `XATTR_NAME_MAX` 返回 ERANGE，值超过上限返回 E2BIG

use alloc::vec::Vec;

use bitflags::bitflags;

use crate::{
    consts::*,
    error::{Error, ErrorKind, Result},
};

use super::RawXattrs;

bitflags! {
    /// setxattr 标志
    ///
    /// 对应 Linux 的 `XATTR_CREATE` / `XATTR_REPLACE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SetFlags: u32 {
        /// 只创建，属性已存在时失败
        const CREATE = 0x1;
        /// 只替换，属性不存在时失败
        const REPLACE = 0x2;
    }
}

/// 内存 xattr 集合
#[derive(Debug, Clone)]
pub struct MemXattrs {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    name_max: usize,
    value_max: usize,
}

impl Default for MemXattrs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemXattrs {
    /// 创建空集合，使用 Linux 默认限制
    pub fn new() -> Self {
        Self::with_value_max(XATTR_SIZE_MAX)
    }

    /// 创建空集合，指定单个值的长度上限
    pub fn with_value_max(value_max: usize) -> Self {
        Self {
            entries: Vec::new(),
            name_max: XATTR_NAME_MAX,
            value_max,
        }
    }

    /// 物理属性数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否没有任何属性
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 是否存在指定物理属性
    pub fn contains(&self, raw_name: &[u8]) -> bool {
        self.position(raw_name).is_some()
    }

    /// 写入物理属性
    ///
    /// 对应 `setxattr(2)`。已存在的属性原地替换，保持列举顺序不变。
    pub fn set(&mut self, raw_name: &[u8], value: &[u8], flags: SetFlags) -> Result<()> {
        if raw_name.is_empty() || raw_name.contains(&0) {
            return Err(Error::new(ErrorKind::InvalidInput, "invalid xattr name"));
        }
        if raw_name.len() > self.name_max {
            return Err(Error::from_errno(ERANGE, "xattr name too long"));
        }
        if value.len() > self.value_max {
            return Err(Error::from_errno(E2BIG, "xattr value too large"));
        }

        match self.position(raw_name) {
            Some(_) if flags.contains(SetFlags::CREATE) => {
                Err(Error::new(ErrorKind::AlreadyExists, "xattr already exists"))
            }
            Some(idx) => {
                self.entries[idx].1 = value.to_vec();
                Ok(())
            }
            None if flags.contains(SetFlags::REPLACE) => {
                Err(Error::new(ErrorKind::NotFound, "xattr not found"))
            }
            None => {
                self.entries.push((raw_name.to_vec(), value.to_vec()));
                Ok(())
            }
        }
    }

    fn position(&self, raw_name: &[u8]) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == raw_name)
    }
}

impl RawXattrs for MemXattrs {
    fn get(&self, raw_name: &[u8], buf: &mut [u8]) -> Result<usize> {
        let idx = self
            .position(raw_name)
            .ok_or(Error::new(ErrorKind::NotFound, "xattr not found"))?;
        let value = &self.entries[idx].1;

        if buf.is_empty() {
            return Ok(value.len());
        }
        if buf.len() < value.len() {
            return Err(Error::new(ErrorKind::BufferTooSmall, "buffer too small"));
        }
        buf[..value.len()].copy_from_slice(value);
        Ok(value.len())
    }

    fn remove(&mut self, raw_name: &[u8]) -> Result<()> {
        let idx = self
            .position(raw_name)
            .ok_or(Error::new(ErrorKind::NotFound, "xattr not found"))?;
        self.entries.remove(idx);
        Ok(())
    }

    fn list(&self, buf: &mut [u8]) -> Result<usize> {
        let total: usize = self.entries.iter().map(|(name, _)| name.len() + 1).sum();

        if buf.is_empty() {
            return Ok(total);
        }
        if buf.len() < total {
            return Err(Error::new(ErrorKind::BufferTooSmall, "buffer too small"));
        }

        let mut offset = 0;
        for (name, _) in &self.entries {
            buf[offset..offset + name.len()].copy_from_slice(name);
            buf[offset + name.len()] = 0;
            offset += name.len() + 1;
        }
        Ok(offset)
    }
}
