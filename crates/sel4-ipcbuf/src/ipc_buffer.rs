//! IPC Buffer
//!
//! IPC Buffer 由线程初始化代码分配并映射，在线程的整个生命周期内地址不变。
//! 这个 crate 只负责找到它，不会分配、释放或者修改它。
//!
//! > Warning: IPC Buffer 是线程独占的数据，请为每个线程都分配独占的一块内存

use config::{IPC_BUFFER_SIZE, MSG_MAX_EXTRA_CAPS, MSG_MAX_LENGTH};

/// 和 `seL4_IPCBuffer` 布局相同的 IPC Buffer
#[cfg_attr(target_pointer_width = "64", repr(C, align(1024)))]
#[cfg_attr(target_pointer_width = "32", repr(C, align(512)))]
#[derive(Debug)]
pub struct IpcBuffer {
    /// 消息头 (MessageInfo)
    pub tag: usize,
    /// 消息寄存器
    pub msg: [usize; MSG_MAX_LENGTH],
    /// 用户自定义数据，内核不会使用
    pub user_data: usize,
    /// 发送时是额外的 Capability，接收时是 badge
    pub caps_or_badges: [usize; MSG_MAX_EXTRA_CAPS],
    /// 接收 Capability 使用的 CNode
    pub receive_cnode: usize,
    /// 接收 Capability 使用的 slot
    pub receive_index: usize,
    /// 接收 Capability 时查找的深度
    pub receive_depth: usize,
}

impl IpcBuffer {
    /// 创建一个全 0 的 IPC Buffer
    pub const fn zeroed() -> Self {
        Self {
            tag: 0,
            msg: [0; MSG_MAX_LENGTH],
            user_data: 0,
            caps_or_badges: [0; MSG_MAX_EXTRA_CAPS],
            receive_cnode: 0,
            receive_index: 0,
            receive_depth: 0,
        }
    }
}

const _: () = assert!(core::mem::size_of::<IpcBuffer>() == IPC_BUFFER_SIZE);
const _: () = assert!(core::mem::align_of::<IpcBuffer>() == IPC_BUFFER_SIZE);

#[cfg(test)]
mod tests {
    use std::boxed::Box;

    use super::*;

    #[test]
    fn layout_matches_kernel() {
        let ib = Box::new(IpcBuffer::zeroed());
        let base = &*ib as *const IpcBuffer as usize;
        assert_eq!(base % IPC_BUFFER_SIZE, 0);
        assert_eq!(ib.msg.as_ptr() as usize - base, core::mem::size_of::<usize>());
        assert_eq!(
            &ib.receive_depth as *const usize as usize - base,
            IPC_BUFFER_SIZE - core::mem::size_of::<usize>()
        );
    }
}
