#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod carousel;
mod contact;
mod content;
mod logging;
mod nav;
mod parallax;
mod particles;
mod portfolio;
mod reveal;
mod scroll;
mod settings;
mod theme;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
