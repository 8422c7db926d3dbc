//! aarch64
//!
//! 内核在切换线程的时候把 IPC Buffer 的地址写入 `TPIDRRO_EL0`，这个寄存器在 EL0 只读，
//! 所以这里只提供读取。
//!
//! `TPIDRRO_EL0` <https://developer.arm.com/documentation/ddi0601/2024-12/AArch64-Registers/TPIDRRO-EL0--EL0-Read-Only-Software-Thread-ID-Register>

#[cfg(feature = "ipc-buf-globals-frame")]
compile_error!("aarch64 没有 Globals Frame，请使用 `ipc-buf-tpidrurw`");

/// 读取 `TPIDRRO_EL0`
#[inline(always)]
pub fn read_tls_register() -> usize {
    let value: usize;
    unsafe {
        core::arch::asm!(
            "mrs {}, tpidrro_el0",
            out(reg) value,
            options(nomem, nostack, preserves_flags)
        );
    }
    value
}
