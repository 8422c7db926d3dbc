//! 线程初始化时设置 IPC Buffer
//!
//! 使用线程寄存器定位时，线程在执行任何 IPC 之前需要先调用 [set_ipc_buffer] 写入自己的 IPC Buffer。
//! aarch64 的 `TPIDRRO_EL0` 和 Globals Frame 都由内核写入，用户态不需要也不能设置。

#[cfg(all(
    feature = "ipc-buf-tpidrurw",
    not(all(target_os = "none", target_arch = "aarch64"))
))]
pub use register::set_ipc_buffer;

#[cfg(all(
    feature = "ipc-buf-tpidrurw",
    not(all(target_os = "none", target_arch = "aarch64"))
))]
mod register {
    use config::IPC_BUFFER_SIZE;

    use crate::{IpcBuffer, IpcBufferError, arch};

    /// 检查 IPC Buffer 指针是否可用，返回对应的地址
    fn check(ipc_buffer: *mut IpcBuffer) -> Result<usize, IpcBufferError> {
        let addr = ipc_buffer as usize;
        if ipc_buffer.is_null() {
            return Err(IpcBufferError::Null);
        }
        if addr % IPC_BUFFER_SIZE != 0 {
            return Err(IpcBufferError::Misaligned {
                addr,
                align: IPC_BUFFER_SIZE,
            });
        }
        Ok(addr)
    }

    /// 把 `ipc_buffer` 写入当前线程的线程寄存器
    ///
    /// 出错时不会修改寄存器。
    pub fn set_ipc_buffer(ipc_buffer: *mut IpcBuffer) -> Result<(), IpcBufferError> {
        let addr = check(ipc_buffer).inspect_err(|err| log::warn!("[sel4-ipcbuf] {err}"))?;
        arch::write_tls_register(addr);
        log::debug!("[sel4-ipcbuf] ipc buffer set to {addr:#x}");
        Ok(())
    }
}

#[cfg(feature = "sel4")]
const _: () = assert!(
    core::mem::size_of::<sel4::IpcBuffer>() == core::mem::size_of::<crate::IpcBuffer>()
        && core::mem::align_of::<sel4::IpcBuffer>() <= core::mem::align_of::<crate::IpcBuffer>(),
    "sel4::IpcBuffer 和 IpcBuffer 的布局不一致"
);

/// 把当前线程的 IPC Buffer 注册到 rust-sel4
///
/// 注册之后可以使用 [sel4::with_ipc_buffer] 等接口。
#[cfg(feature = "sel4")]
pub fn init_ipc_buffer() {
    // sel4::IpcBuffer 是 seL4_IPCBuffer 的透明封装，和 IpcBuffer 的布局相同
    let ipc_buffer = crate::get_ipc_buffer().cast::<sel4::IpcBuffer>();
    sel4::set_ipc_buffer(unsafe { &mut *ipc_buffer });
    log::debug!("[sel4-ipcbuf] registered ipc buffer {ipc_buffer:p}");
}
