//! aarch32
//!
//! `TPIDRURW` 即 `c13, c0, 2`，用户态可读可写，由线程初始化代码写入 IPC Buffer 的地址。
//!
//! `TPIDRURW` <https://developer.arm.com/documentation/ddi0406/c/System-Level-Architecture/System-Control-Registers-in-a-VMSA-implementation/VMSA-System-control-registers-descriptions--in-register-order/TPIDRURW--User-Read-Write-Thread-ID-Register--VMSA>

#[cfg(feature = "ipc-buf-globals-frame")]
use crate::globals_frame::GlobalsFrame;

/// 读取 `TPIDRURW`
#[cfg(feature = "ipc-buf-tpidrurw")]
#[inline(always)]
pub fn read_tls_register() -> usize {
    let value: usize;
    unsafe {
        core::arch::asm!(
            "mrc p15, 0, {}, c13, c0, 2",
            out(reg) value,
            options(nomem, nostack, preserves_flags)
        );
    }
    value
}

/// 写入 `TPIDRURW`
#[cfg(feature = "ipc-buf-tpidrurw")]
#[inline]
pub fn write_tls_register(value: usize) {
    unsafe {
        core::arch::asm!(
            "mcr p15, 0, {}, c13, c0, 2",
            in(reg) value,
            options(nomem, nostack, preserves_flags)
        );
    }
}

/// 当前线程的 Globals Frame
///
/// 内核在 [config::GLOBALS_FRAME_ADDR] 为每个线程映射自己的页，所以同一个地址在不同线程中指向不同的页。
#[cfg(feature = "ipc-buf-globals-frame")]
#[inline(always)]
pub fn globals_frame() -> *const GlobalsFrame {
    config::GLOBALS_FRAME_ADDR as *const GlobalsFrame
}
