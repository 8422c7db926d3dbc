//! sel4-ipcbuf
//!
//! 不通过系统调用，在用户态找到当前线程的 IPC Buffer。
//!
//! 定位方式在编译时选择 (见 [locator])，上层组装消息的代码只需要调用 [get_ipc_buffer]。
//!
//! ```ignore
//! let ib = unsafe { sel4_ipcbuf::ipc_buffer_mut() };
//! ib.msg[0] = 1;
//! ```
#![no_std]
#![deny(missing_docs)]

#[cfg(not(target_os = "none"))]
extern crate std;

#[cfg(all(feature = "ipc-buf-globals-frame", feature = "ipc-buf-tpidrurw"))]
compile_error!("`ipc-buf-globals-frame` 和 `ipc-buf-tpidrurw` 不能同时开启");

#[cfg(not(any(feature = "ipc-buf-globals-frame", feature = "ipc-buf-tpidrurw")))]
compile_error!("未知的 IPC Buffer 定位方式，请开启 `ipc-buf-globals-frame` 或 `ipc-buf-tpidrurw`");

pub mod arch;
mod error;
#[cfg(feature = "ipc-buf-globals-frame")]
pub mod globals_frame;
pub mod ipc_buffer;
pub mod locator;
pub mod setup;

pub use error::IpcBufferError;
#[cfg(feature = "ipc-buf-globals-frame")]
pub use globals_frame::GlobalsFrame;
pub use ipc_buffer::IpcBuffer;
pub use locator::{IpcBufferLocator, SelectedLocator, get_ipc_buffer, ipc_buffer_mut};
