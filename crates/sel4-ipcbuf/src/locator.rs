//! 定位当前线程的 IPC Buffer
//!
//! 定位方式在编译时通过 feature 选择，同一个构建中只会存在一种：
//!
//! - `ipc-buf-globals-frame`: 从固定地址的 Globals Frame 中读出 IPC Buffer 指针
//! - `ipc-buf-tpidrurw`: 直接读取线程寄存器
//!
//! 读取不会做任何检查，如果线程初始化代码没有设置好，返回的就是无效的指针。

use crate::{IpcBuffer, arch};

/// IPC Buffer 的定位方式
pub trait IpcBufferLocator {
    /// 返回当前线程 IPC Buffer 的指针
    fn locate() -> *mut IpcBuffer;
}

/// 通过 Globals Frame 定位
///
/// Globals Frame 地址 -> IPC Buffer 指针 -> IPC Buffer
#[cfg(feature = "ipc-buf-globals-frame")]
pub struct GlobalsFrameLocator;

#[cfg(feature = "ipc-buf-globals-frame")]
impl IpcBufferLocator for GlobalsFrameLocator {
    #[inline(always)]
    fn locate() -> *mut IpcBuffer {
        // Globals Frame 在线程运行前已经由内核映射
        unsafe { (*arch::globals_frame()).ipc_buffer() }
    }
}

/// 通过线程寄存器定位
#[cfg(feature = "ipc-buf-tpidrurw")]
pub struct TlsRegisterLocator;

#[cfg(feature = "ipc-buf-tpidrurw")]
impl IpcBufferLocator for TlsRegisterLocator {
    #[inline(always)]
    fn locate() -> *mut IpcBuffer {
        arch::read_tls_register() as *mut IpcBuffer
    }
}

/// 当前构建使用的定位方式
#[cfg(feature = "ipc-buf-globals-frame")]
pub type SelectedLocator = GlobalsFrameLocator;

/// 当前构建使用的定位方式
#[cfg(all(feature = "ipc-buf-tpidrurw", not(feature = "ipc-buf-globals-frame")))]
pub type SelectedLocator = TlsRegisterLocator;

/// 获取当前线程 IPC Buffer 的指针
#[inline(always)]
pub fn get_ipc_buffer() -> *mut IpcBuffer {
    SelectedLocator::locate()
}

/// 获取当前线程 IPC Buffer 的可变引用
///
/// # Safety
///
/// - 线程初始化代码已经为当前线程设置好了 IPC Buffer
/// - 同一时间只能存在一个返回的引用，不要跨越 IPC 调用保存它
#[inline(always)]
pub unsafe fn ipc_buffer_mut() -> &'static mut IpcBuffer {
    unsafe { &mut *get_ipc_buffer() }
}

#[cfg(all(test, feature = "ipc-buf-tpidrurw"))]
mod register_tests {
    use std::boxed::Box;

    use super::*;

    #[test]
    fn returns_written_address() {
        let mut ib = Box::new(IpcBuffer::zeroed());
        let addr = &mut *ib as *mut IpcBuffer;
        arch::write_tls_register(addr as usize);
        assert_eq!(get_ipc_buffer(), addr);
        assert_eq!(TlsRegisterLocator::locate(), addr);
    }

    #[test]
    fn repeated_reads_leave_register_untouched() {
        const SENTINEL: usize = 0x5a5a_0400;
        arch::write_tls_register(SENTINEL);
        for _ in 0..64 {
            assert_eq!(get_ipc_buffer() as usize, SENTINEL);
        }
        assert_eq!(arch::read_tls_register(), SENTINEL);
    }

    #[test]
    fn borrow_sees_buffer_contents() {
        let mut ib = Box::new(IpcBuffer::zeroed());
        ib.msg[3] = 0xdead;
        arch::write_tls_register(&mut *ib as *mut IpcBuffer as usize);
        let current = unsafe { ipc_buffer_mut() };
        assert_eq!(current.msg[3], 0xdead);
        current.user_data = 7;
        assert_eq!(ib.user_data, 7);
    }
}
