pub mod payload;
pub mod qr;
pub mod rotate;
pub mod stats;

pub use qr::{qr_main, QrOpts};
pub use rotate::rotate_main;
pub use stats::stats_main;
