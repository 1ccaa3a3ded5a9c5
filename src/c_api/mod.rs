//! C API 兼容层
//!
//! 提供与经典链式 xattr C 实现同名的函数接口。
//!
//! 这些函数仅保留 C 风格的命名和返回约定（成功返回非负长度，失败返回负 errno），
//! 内部实现全部使用 Rust 风格的 [`chain`](crate::chain) 模块。

pub mod xattr;
