// Native builds only compile the pure modules for `cargo test`.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(any(test, target_arch = "wasm32"))]
mod content;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(any(test, target_arch = "wasm32"))]
mod state;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
