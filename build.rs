//! Build script for matrix-keypad: puts the right `memory.x` on the linker path.

use std::{env, fs, io, path::PathBuf};

fn main() -> io::Result<()> {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");

    let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(io::Error::other)?);
    let target = env::var("TARGET").map_err(io::Error::other)?;

    let memory_file = if target.starts_with("thumbv8m") {
        // Pico 2 ARM
        "memory-pico2.x"
    } else if target.starts_with("riscv32imac") {
        // Pico 2 RISC-V
        "memory-pico2-riscv.x"
    } else if target.starts_with("thumbv6m") {
        // Pico 1
        "memory-pico1.x"
    } else {
        // Host build (tests): nothing to link
        return Ok(());
    };

    let memory_x = fs::read_to_string(memory_file)?;
    fs::write(out_dir.join("memory.x"), memory_x)?;
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={memory_file}");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    if target.starts_with("thumbv6m") {
        println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    }
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    Ok(())
}
