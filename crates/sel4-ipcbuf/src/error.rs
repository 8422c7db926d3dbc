use thiserror::Error;

/// 设置 IPC Buffer 时可能出现的错误
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IpcBufferError {
    /// 指针为空
    #[error("ipc buffer pointer is null")]
    Null,
    /// 地址没有按照 IPC Buffer 的大小对齐
    #[error("ipc buffer at {addr:#x} is not aligned to {align:#x} bytes")]
    Misaligned {
        /// 传入的地址
        addr: usize,
        /// 需要的对齐大小
        align: usize,
    },
}
