//! Bakes client configuration into the crate at compile time.
//!
//! The browser has no process environment, so values from `.env` (or the
//! build environment) are forwarded as `rustc-env` and read back with
//! `option_env!` in `config.rs`.

const FORWARDED_KEYS: [&str; 2] = ["COURSE_CHAT_API_BASE", "COURSE_CHAT_TIMEOUT_SECS"];

fn main() {
    println!("cargo:rerun-if-changed=.env");

    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
