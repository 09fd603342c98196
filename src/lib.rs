//! Firmware building blocks for a 5×5 NeoPixel-style (WS2812) LED matrix and a 4×4 matrix keypad
//! on the Pico 1 and 2.
//!
//! The pieces, leaves first:
//!
//! - [`led_matrix::layout::MatrixLayout`] maps `(x, y)` raster coordinates to the order the LEDs
//!   are wired in.
//! - [`led_matrix::PixelBuffer`] holds one color per LED, in wiring order.
//! - [`led_matrix::renderer::FrameRenderer`] scales a [`led_matrix::MatrixFrame`] into the buffer,
//!   hands it to a [`led_matrix::renderer::Transmitter`], holds it, then clears it.
//! - [`keypad::Keypad`] scans the keypad and [`dispatch::Dispatcher`] turns key symbols into
//!   matrix actions.
//!
//! # Glossary
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):** Pico 1 has 2. Pico 2 has 3.
//! - **Transmission order:** the order pixel data goes out on the wire, dictated by the physical
//!   wiring and distinct from raster (visual) order.
//! - **Serpentine:** a wiring pattern where consecutive rows run in alternating directions.
//! - **BOOTSEL:** the boot ROM's USB programming mode.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time checks: exactly one architecture must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "arm", feature = "riscv")), not(feature = "host")))]
compile_error!("Must enable exactly one architecture feature: 'arm' or 'riscv'");

#[cfg(all(feature = "arm", feature = "riscv"))]
compile_error!("Cannot enable both 'arm' and 'riscv' features simultaneously");

// Compile-time check: pico1 only supports ARM
#[cfg(all(feature = "pico1", feature = "riscv"))]
compile_error!("Pico 1 (RP2040) only supports ARM architecture, not RISC-V");

pub mod config;
pub mod dispatch;
mod error;
pub mod keypad;
pub mod label;
pub mod led_matrix;
pub mod maintenance;
pub mod pio_claim;
// PIO interrupt bindings used by the WS2812 transmitter
#[cfg(not(feature = "host"))]
#[doc(hidden)]
pub mod pio_irqs;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
