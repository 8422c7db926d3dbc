//! Globals Frame
//!
//! 内核为每个线程映射的页，第一个字保存当前线程 IPC Buffer 的指针。
//! Globals Frame 由内核持有，里面的指针不拥有 IPC Buffer，IPC Buffer 属于线程初始化代码。

use core::{cell::Cell, ptr};

use crate::IpcBuffer;

/// Globals Frame 的第一个字
///
/// 只描述页的开头，页剩余的部分在这里不会被访问。
#[repr(C)]
pub struct GlobalsFrame {
    ipc_buffer: Cell<*mut IpcBuffer>,
}

impl GlobalsFrame {
    /// 创建一个还没有保存 IPC Buffer 的 Globals Frame
    pub const fn empty() -> Self {
        Self {
            ipc_buffer: Cell::new(ptr::null_mut()),
        }
    }

    /// 读取保存的 IPC Buffer 指针
    #[inline(always)]
    pub fn ipc_buffer(&self) -> *mut IpcBuffer {
        self.ipc_buffer.get()
    }

    /// 保存 IPC Buffer 指针
    ///
    /// 硬件上这一页对用户态只读，只有内核会写入，所以只在宿主系统上提供给测试使用。
    #[cfg(not(target_os = "none"))]
    pub fn set_ipc_buffer(&self, ipc_buffer: *mut IpcBuffer) {
        self.ipc_buffer.set(ipc_buffer);
    }
}

const _: () = assert!(core::mem::size_of::<GlobalsFrame>() == core::mem::size_of::<usize>());
