//! 宿主系统上的模拟实现
//!
//! 在 Linux 等宿主系统上无法访问真正的线程寄存器，也没有 Globals Frame，
//! 这里用线程私有变量模拟这两者，保证和硬件上一样每个线程只能看到自己的值。
//! 测试代码通过这里提供的接口扮演内核和线程初始化代码。

#[cfg(feature = "ipc-buf-tpidrurw")]
use core::cell::Cell;

#[cfg(feature = "ipc-buf-globals-frame")]
use crate::globals_frame::GlobalsFrame;

#[cfg(feature = "ipc-buf-tpidrurw")]
std::thread_local! {
    static TLS_REGISTER: Cell<usize> = const { Cell::new(0) };
}

#[cfg(feature = "ipc-buf-globals-frame")]
std::thread_local! {
    static GLOBALS_FRAME: GlobalsFrame = const { GlobalsFrame::empty() };
}

/// 读取当前线程的模拟寄存器
#[cfg(feature = "ipc-buf-tpidrurw")]
#[inline]
pub fn read_tls_register() -> usize {
    TLS_REGISTER.with(Cell::get)
}

/// 写入当前线程的模拟寄存器
#[cfg(feature = "ipc-buf-tpidrurw")]
#[inline]
pub fn write_tls_register(value: usize) {
    TLS_REGISTER.with(|reg| reg.set(value));
}

/// 当前线程的模拟 Globals Frame
///
/// 返回的指针在当前线程退出之前有效
#[cfg(feature = "ipc-buf-globals-frame")]
#[inline]
pub fn globals_frame() -> *const GlobalsFrame {
    GLOBALS_FRAME.with(|frame| frame as *const GlobalsFrame)
}
