//! sel4-ipcbuf 配置 crate
//!
//! 这个 crate 中包含了 IPC Buffer 定位需要在多个 crate 中共享的配置信息，
//! 以及各个平台提供给调试寄存器管理代码使用的常量。
#![no_std]
#![deny(missing_docs)]

pub mod plat;

/// 机器字的大小 (bytes)
pub const WORD_SIZE: usize = core::mem::size_of::<usize>();

/// 单条消息最多可以携带的消息寄存器数量 (`seL4_MsgMaxLength`)
pub const MSG_MAX_LENGTH: usize = 120;

/// 额外 Capability 使用的 bits (`seL4_MsgExtraCapBits`)
pub const MSG_EXTRA_CAP_BITS: usize = 2;

/// 单条消息最多可以携带的额外 Capability 数量
pub const MSG_MAX_EXTRA_CAPS: usize = (1 << MSG_EXTRA_CAP_BITS) - 1;

/// IPC Buffer 大小的 bits，IPC Buffer 需要按照这个大小对齐
#[cfg(target_pointer_width = "64")]
pub const IPC_BUFFER_SIZE_BITS: usize = 10;

/// IPC Buffer 大小的 bits，IPC Buffer 需要按照这个大小对齐
#[cfg(target_pointer_width = "32")]
pub const IPC_BUFFER_SIZE_BITS: usize = 9;

/// IPC Buffer 的大小
pub const IPC_BUFFER_SIZE: usize = 1 << IPC_BUFFER_SIZE_BITS;

/// aarch32 下 Globals Frame 映射的固定虚拟地址
///
/// 内核为每个线程在这个地址映射同一位置的页，页的第一个字保存当前线程的 IPC Buffer 指针。
pub const GLOBALS_FRAME_ADDR: usize = 0xffff_c000;

// tag + msg + user_data + caps_or_badges + receive_cnode/index/depth
const _: () = assert!(
    (1 + MSG_MAX_LENGTH + 1 + MSG_MAX_EXTRA_CAPS + 3) * WORD_SIZE == IPC_BUFFER_SIZE,
    "IPC Buffer 的字段布局和 IPC_BUFFER_SIZE_BITS 不一致"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_caps_follow_cap_bits() {
        assert_eq!(MSG_MAX_EXTRA_CAPS, 3);
    }

    #[test]
    fn ipc_buffer_size_matches_word_size() {
        assert_eq!(IPC_BUFFER_SIZE, 128 * WORD_SIZE);
    }

    #[test]
    fn globals_frame_is_page_aligned() {
        assert_eq!(GLOBALS_FRAME_ADDR % 0x1000, 0);
    }
}
