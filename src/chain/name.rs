//! 逻辑名与物理名的编解码
//!
//! 一个逻辑属性由若干物理属性（chunk）组成：
//! - chunk 0 的物理名就是转义后的逻辑名
//! - chunk i（i > 0）的物理名是转义后的逻辑名加后缀 `@<i>`（十进制，无前导零）
//!
//! 逻辑名中的每个 `@` 转义为 `@@`，因此物理名中单独出现的 `@`
//! 一定是 chunk 序号后缀的起点。

use alloc::vec::Vec;

const ESCAPE: u8 = b'@';

/// 追加十进制序号
fn push_decimal(out: &mut Vec<u8>, mut value: u32) {
    let mut digits = [0u8; 10];
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    out.extend_from_slice(&digits[start..]);
}

/// 由逻辑名和 chunk 序号生成物理名
///
/// # 参数
///
/// * `name` - 逻辑属性名
/// * `index` - chunk 序号，0 表示第一个 chunk（无后缀）
/// * `capacity` - 物理名缓冲区容量（含结尾的 `\0`），
///   通常取 [`ChainConfig::raw_name_capacity`](super::ChainConfig::raw_name_capacity)
///
/// # Panics
///
/// 物理名（加上 `\0`）超过 `capacity` 时 panic。这是名称长度预算的配置错误，
/// 协议入口在编码前已用 `ChainConfig::check_name` 拦截过长的名称。
///
/// # 示例
///
/// ```ignore
/// assert_eq!(encode(b"a@b", 0, 64), b"a@@b");
/// assert_eq!(encode(b"a@b", 3, 64), b"a@@b@3");
/// ```
pub fn encode(name: &[u8], index: u32, capacity: usize) -> Vec<u8> {
    let mut raw = Vec::with_capacity(capacity);

    for &byte in name {
        if byte == ESCAPE {
            raw.push(ESCAPE);
        }
        raw.push(byte);
    }

    if index != 0 {
        raw.push(ESCAPE);
        push_decimal(&mut raw, index);
    }

    assert!(
        raw.len() < capacity,
        "raw xattr name exceeds name-length budget"
    );
    raw
}

/// 把物理名解码到 `out`，返回是否为第一个 chunk
///
/// `out` 会先被清空。遇到未转义的 `@`（包括位于末尾的单个 `@`）即停止，
/// 之后的序号后缀不解析。
pub fn decode_into(raw_name: &[u8], out: &mut Vec<u8>) -> bool {
    out.clear();

    let mut pos = 0;
    while pos < raw_name.len() {
        let byte = raw_name[pos];
        if byte == ESCAPE {
            if raw_name.get(pos + 1) != Some(&ESCAPE) {
                return false;
            }
            pos += 1;
        }
        out.push(byte);
        pos += 1;
    }

    true
}

/// 解码物理名
///
/// # 返回
///
/// 返回 (逻辑名, is_first)。对任意 chunk 序号，解出的逻辑名都相同；
/// 只有 chunk 0 的 `is_first` 为 true。
///
/// # 示例
///
/// ```ignore
/// assert_eq!(decode(b"a@@b"), (b"a@b".to_vec(), true));
/// assert_eq!(decode(b"a@@b@3"), (b"a@b".to_vec(), false));
/// ```
pub fn decode(raw_name: &[u8]) -> (Vec<u8>, bool) {
    let mut name = Vec::with_capacity(raw_name.len());
    let is_first = decode_into(raw_name, &mut name);
    (name, is_first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const CAP: usize = 64;

    #[test]
    fn test_encode_first_chunk() {
        assert_eq!(encode(b"user.foo", 0, CAP), b"user.foo");
        assert_eq!(encode(b"a@b", 0, CAP), b"a@@b");
        assert_eq!(encode(b"", 0, CAP), b"");
    }

    #[test]
    fn test_encode_suffix() {
        assert_eq!(encode(b"a@b", 3, CAP), b"a@@b@3");
        assert_eq!(encode(b"@", 12, CAP), b"@@@12");
        assert_eq!(encode(b"x", 10, CAP), b"x@10");
        assert_eq!(encode(b"x", u32::MAX, CAP), b"x@4294967295");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(b"a@@b"), (b"a@b".to_vec(), true));
        assert_eq!(decode(b"a@@b@3"), (b"a@b".to_vec(), false));
        assert_eq!(decode(b"@@"), (b"@".to_vec(), true));
        assert_eq!(decode(b""), (vec![], true));
    }

    #[test]
    fn test_decode_trailing_escape() {
        // 末尾单独的 `@` 也视为后缀起点
        assert_eq!(decode(b"abc@"), (b"abc".to_vec(), false));
    }

    #[test]
    fn test_round_trip() {
        let names: [&[u8]; 7] = [b"", b"a", b"@", b"@@", b"a@b", b"@a@", b"user.obj@snapset"];
        let indices = [0u32, 1, 2, 9, 10, 99, 100, 12345, u32::MAX];

        for name in names {
            for index in indices {
                let raw = encode(name, index, CAP);
                assert_eq!(decode(&raw), (name.to_vec(), index == 0), "{:?}@{}", name, index);
            }
        }
    }

    #[test]
    fn test_decode_into_reuses_buffer() {
        let mut out = b"stale".to_vec();
        assert!(!decode_into(b"k@1", &mut out));
        assert_eq!(out, b"k");
    }

    #[test]
    fn test_encode_capacity_fits() {
        // "@@@1" 加 `\0` 正好 5 字节
        assert_eq!(encode(b"@", 1, 5), b"@@@1");
    }

    #[test]
    #[should_panic(expected = "name-length budget")]
    fn test_encode_over_capacity() {
        encode(b"@@", 1, 6);
    }
}
