//! 分块大小策略
//!
//! 写路径按值的总长度选择块长度；读路径通过 [`is_full_block`]
//! 判断一个 chunk 之后是否可能还有后续 chunk。

use super::ChainConfig;

/// 块长度类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSize {
    /// 短块
    Short,
    /// 最大块
    Max,
}

impl BlockSize {
    /// 该类别在给定配置下的字节数
    pub const fn len(self, cfg: &ChainConfig) -> usize {
        match self {
            BlockSize::Short => cfg.short_block_len(),
            BlockSize::Max => cfg.max_block_len(),
        }
    }
}

/// 为目标总长度选择块长度
///
/// 不超过短值阈值的值按短块切分：这样的值可能放得进 inode 内部，
/// 用短块可以避免 XFS 等文件系统把它挤到外部块。
pub const fn block_size_for(cfg: &ChainConfig, target_size: usize) -> BlockSize {
    if target_size <= cfg.short_len_threshold() {
        BlockSize::Short
    } else {
        BlockSize::Max
    }
}

/// chunk 长度是否恰好等于某个块长度
///
/// 只有满块的 chunk 之后才可能还有后续 chunk；短 chunk 一定是链尾。
pub const fn is_full_block(cfg: &ChainConfig, chunk_len: usize) -> bool {
    chunk_len == cfg.short_block_len() || chunk_len == cfg.max_block_len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size_for_default() {
        let cfg = ChainConfig::default();
        assert_eq!(block_size_for(&cfg, 0), BlockSize::Short);
        assert_eq!(block_size_for(&cfg, 1000), BlockSize::Short);
        assert_eq!(block_size_for(&cfg, 1001), BlockSize::Max);
        assert_eq!(BlockSize::Short.len(&cfg), 250);
        assert_eq!(BlockSize::Max.len(&cfg), 2048);
    }

    #[test]
    fn test_is_full_block() {
        let cfg = ChainConfig::new(16, 4, 8, 16).unwrap();
        assert!(is_full_block(&cfg, 4));
        assert!(is_full_block(&cfg, 8));
        assert!(!is_full_block(&cfg, 0));
        assert!(!is_full_block(&cfg, 5));
    }
}
