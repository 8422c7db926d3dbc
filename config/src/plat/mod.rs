//! 平台相关的常量
//!
//! 这些常量只提供给上层的调试寄存器 (breakpoint/watchpoint) 管理代码使用，
//! 没有任何行为。常量是否存在由 `hardware-debug-api` 和 `arm-hypervisor-support`
//! 两个 feature 以及选择的平台共同决定。

#[cfg(feature = "plat-am335x")]
mod am335x;

#[cfg(feature = "plat-am335x")]
pub use am335x::*;

#[cfg(all(
    any(feature = "hardware-debug-api", feature = "arm-hypervisor-support"),
    not(feature = "plat-am335x")
))]
compile_error!("调试寄存器常量需要选择一个平台，例如 `plat-am335x`");
