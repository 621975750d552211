//! Lightweight debug logging gated by ROTQR_DEBUG=1 (or `--debug`).
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

static ENV_ENABLED: OnceLock<bool> = OnceLock::new();
static FORCED: AtomicBool = AtomicBool::new(false);

pub fn is_enabled() -> bool {
    FORCED.load(Ordering::Relaxed)
        || *ENV_ENABLED.get_or_init(|| std::env::var("ROTQR_DEBUG").ok().as_deref() == Some("1"))
}

/// Turn tracing on regardless of the environment (used by the `--debug` flag).
pub fn force_enable() {
    FORCED.store(true, Ordering::Relaxed);
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[rotqr] {}", format!($($arg)*)); }
    }};
}
