//! AM335x (Cortex-A8) 平台
//!
//! 数量参考 Cortex-A8 TRM, table 12-11

/// 硬件断点寄存器的总数
#[cfg(any(feature = "hardware-debug-api", feature = "arm-hypervisor-support"))]
pub const NUM_HW_BREAKPOINTS: usize = 8;

/// 只能作为指令断点使用的寄存器数量
#[cfg(any(feature = "hardware-debug-api", feature = "arm-hypervisor-support"))]
pub const NUM_EXCLUSIVE_BREAKPOINTS: usize = 6;

/// 只能作为数据观察点使用的寄存器数量
#[cfg(any(feature = "hardware-debug-api", feature = "arm-hypervisor-support"))]
pub const NUM_EXCLUSIVE_WATCHPOINTS: usize = 2;

/// 第一个 watchpoint 的编号，排在所有断点之后
#[cfg(feature = "hardware-debug-api")]
pub const FIRST_WATCHPOINT: usize = 6;

/// 既可以做断点也可以做观察点的寄存器数量
#[cfg(feature = "hardware-debug-api")]
pub const NUM_DUAL_FUNCTION_MONITORS: usize = 0;

#[cfg(any(feature = "hardware-debug-api", feature = "arm-hypervisor-support"))]
const _: () = assert!(NUM_EXCLUSIVE_BREAKPOINTS + NUM_EXCLUSIVE_WATCHPOINTS == NUM_HW_BREAKPOINTS);

#[cfg(feature = "hardware-debug-api")]
const _: () = assert!(FIRST_WATCHPOINT == NUM_EXCLUSIVE_BREAKPOINTS);
