//! 链式删除

use crate::{error::Result, raw::RawXattrs};

use super::{name::encode, ChainConfig};

/// 删除逻辑属性的所有 chunk
///
/// chunk 0 删除失败时返回该错误（属性不存在或不允许删除）。
/// 之后任一 chunk 删除失败都视为链尾，整体返回成功；
/// 已删除的 chunk 不回滚，删到一半的链与本来就更短的链无法区分。
pub fn remove<X: RawXattrs + ?Sized>(raw: &mut X, cfg: &ChainConfig, name: &[u8]) -> Result<()> {
    cfg.check_name(name)?;

    let capacity = cfg.raw_name_capacity();
    raw.remove(&encode(name, 0, capacity))?;

    let mut index = 1u32;
    loop {
        if let Err(e) = raw.remove(&encode(name, index, capacity)) {
            log::trace!("[CHAIN] remove: stopped at chunk {}: {}", index, e);
            break;
        }
        index += 1;
    }

    log::debug!("[CHAIN] remove: dropped {} chunk(s)", index);
    Ok(())
}
