//! Interrupt handling
//!
//! SIGINT and SIGTERM are turned into a graceful stop: the handler writes a
//! short notice to stdout and raises the search's stop flag. Workers finish
//! their current trial, the coordinator joins them and the report is printed
//! as usual.
//!
//! Inside the handler only async-signal-safe work happens: one `write(2)` of
//! a constant buffer and one atomic store.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Stop flag raised by the handler. Set once, before the handler is installed.
static STOP_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

#[cfg(unix)]
const NOTICE: &[u8] = b"\nInterrupted.\n";

/// Errors installing the interrupt handler
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("interrupt handler already installed")]
    AlreadyInstalled,

    #[error("failed to install handler for signal {signal}: {source}")]
    Install {
        signal: i32,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(unix)]
extern "C" fn handle_interrupt(_sig: libc::c_int) {
    // SAFETY: write(2) is async-signal-safe and NOTICE is a static buffer
    unsafe {
        libc::write(libc::STDOUT_FILENO, NOTICE.as_ptr().cast(), NOTICE.len());
    }
    if let Some(flag) = STOP_FLAG.get() {
        flag.store(true, std::sync::atomic::Ordering::Relaxed);
    }
}

/// Route SIGINT and SIGTERM to `stop`
///
/// Can be called once per process.
#[cfg(unix)]
pub fn install(stop: Arc<AtomicBool>) -> Result<(), SignalError> {
    STOP_FLAG
        .set(stop)
        .map_err(|_| SignalError::AlreadyInstalled)?;

    // No SA_RESETHAND: the handler stays in place for repeated interrupts
    // SAFETY: an all-zero sigaction is a valid initial value
    let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
    action.sa_sigaction = handle_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t;
    action.sa_flags = libc::SA_RESTART;
    // SAFETY: sa_mask is owned by `action`
    unsafe {
        libc::sigemptyset(&mut action.sa_mask);
    }

    for signal in [libc::SIGINT, libc::SIGTERM] {
        // SAFETY: the handler only performs async-signal-safe operations
        let rc = unsafe { libc::sigaction(signal, &action, std::ptr::null_mut()) };
        if rc != 0 {
            return Err(SignalError::Install {
                signal,
                source: std::io::Error::last_os_error(),
            });
        }
    }

    tracing::debug!("interrupt handler installed");
    Ok(())
}

/// Interrupts cannot be routed on this platform; the search runs until a
/// solution is found.
#[cfg(not(unix))]
pub fn install(stop: Arc<AtomicBool>) -> Result<(), SignalError> {
    STOP_FLAG
        .set(stop)
        .map_err(|_| SignalError::AlreadyInstalled)?;
    tracing::warn!("interrupt handling is not supported on this platform");
    Ok(())
}
