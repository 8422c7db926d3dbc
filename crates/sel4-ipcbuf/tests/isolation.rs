//! 多个线程同时定位各自的 IPC Buffer，互相之间不能看到对方的值

use std::{
    sync::{Arc, Barrier},
    thread,
};

use sel4_ipcbuf::{IpcBuffer, arch, get_ipc_buffer};

const THREADS: usize = 8;
const ROUNDS: usize = 1000;

/// 扮演线程初始化代码，为当前线程设置好 IPC Buffer
#[cfg(feature = "ipc-buf-tpidrurw")]
fn install(ipc_buffer: *mut IpcBuffer) {
    sel4_ipcbuf::setup::set_ipc_buffer(ipc_buffer).unwrap();
}

/// 扮演内核，把 IPC Buffer 写入当前线程的 Globals Frame
#[cfg(feature = "ipc-buf-globals-frame")]
fn install(ipc_buffer: *mut IpcBuffer) {
    unsafe { &*arch::globals_frame() }.set_ipc_buffer(ipc_buffer);
}

#[test]
fn each_thread_sees_its_own_buffer() {
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|id| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                let mut ib = Box::new(IpcBuffer::zeroed());
                ib.user_data = id;
                let addr = &mut *ib as *mut IpcBuffer;
                install(addr);
                barrier.wait();
                for _ in 0..ROUNDS {
                    let located = get_ipc_buffer();
                    assert_eq!(located, addr);
                    assert_eq!(unsafe { (*located).user_data }, id);
                }
                addr as usize
            })
        })
        .collect();

    let mut seen: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), THREADS);
}

#[test]
fn new_thread_does_not_inherit_buffer() {
    let mut ib = Box::new(IpcBuffer::zeroed());
    install(&mut *ib);
    assert!(!get_ipc_buffer().is_null());
    thread::spawn(|| assert!(get_ipc_buffer().is_null()))
        .join()
        .unwrap();
}

#[cfg(feature = "ipc-buf-tpidrurw")]
#[test]
fn sibling_write_does_not_leak() {
    const SENTINEL: usize = 0x7700_0000;
    arch::write_tls_register(SENTINEL);
    thread::spawn(|| arch::write_tls_register(0x1100_0000))
        .join()
        .unwrap();
    assert_eq!(get_ipc_buffer() as usize, SENTINEL);
}
