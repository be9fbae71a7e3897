//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `micromed_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use micromed_core::{format_time, phrase_for, CoreConfig};

fn main() {
    let config = CoreConfig::default();
    println!("micromed_core ping={}", micromed_core::ping());
    println!("micromed_core version={}", micromed_core::core_version());
    println!(
        "micromed_core session={}",
        format_time(config.session_seconds)
    );
    println!(
        "micromed_core phrase={}",
        phrase_for(&config.calendar_month().date_key(1))
    );
}
