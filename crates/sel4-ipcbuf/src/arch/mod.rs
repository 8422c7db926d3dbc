//! 提供架构相关的 IPC Buffer 访问
//!
//! 只有这个模块会直接接触寄存器指令和固定地址，其他地方都把 IPC Buffer 指针当成一个不透明的值。
//!
//! - `arm`      aarch32，使用 `TPIDRURW` 或者 Globals Frame
//! - `aarch64`  使用 `TPIDRRO_EL0`
//! - `hosted`   在宿主系统上运行 (测试) 时使用的线程私有模拟

#[cfg(all(target_os = "none", target_arch = "arm"))]
mod arm;
#[cfg(all(target_os = "none", target_arch = "arm"))]
pub use arm::*;

#[cfg(all(target_os = "none", target_arch = "aarch64"))]
mod aarch64;
#[cfg(all(target_os = "none", target_arch = "aarch64"))]
pub use aarch64::*;

#[cfg(not(target_os = "none"))]
mod hosted;
#[cfg(not(target_os = "none"))]
pub use hosted::*;

#[cfg(all(
    target_os = "none",
    not(any(target_arch = "arm", target_arch = "aarch64"))
))]
compile_error!("sel4-ipcbuf 暂不支持当前的架构");
