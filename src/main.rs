use std::error::Error;
use std::path::PathBuf;

use arvcs::{Cartridge, Console};
use clap::Parser;

/// Run a 2 KiB / 4 KiB cartridge (or the built-in demo kernel) for a few frames.
#[derive(Parser, Debug)]
#[command(name = "arvcs", version, about)]
struct Cli {
    /// Raw ROM image; the demo kernel runs when omitted
    #[arg(long)]
    rom: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Save the last frame as a PNG
    #[cfg(feature = "screenshot")]
    #[arg(long)]
    screenshot: Option<PathBuf>,
}

fn demo_kernel() -> Vec<u8> {
    vec![
        // Setup at $1000
        0xA9, 0x84, 0x85, 0x09, // LDA #$84 ; STA COLUBK
        0xA9, 0x1E, 0x85, 0x08, // LDA #$1E ; STA COLUPF
        0xA9, 0xF0, 0x85, 0x0D, // LDA #$F0 ; STA PF0
        0xA9, 0x01, 0x85, 0x0A, // LDA #$01 ; STA CTRLPF (mirror)
        // Frame at $1010
        0xA9, 0x02, 0x85, 0x00, // LDA #$02 ; STA VSYNC
        0x85, 0x02, 0x85, 0x02, 0x85, 0x02, // STA WSYNC x3
        0xA9, 0x00, 0x85, 0x00, // LDA #$00 ; STA VSYNC => new frame
        0xA2, 0xFF, // LDX #$FF
        0x85, 0x02, // STA WSYNC
        0xCA, // DEX
        0xD0, 0xFB, // BNE -5
        0x4C, 0x10, 0x10, // JMP $1010
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut console = match &cli.rom {
        Some(path) => Console::with_cartridge(&Cartridge::from_file(path)?),
        None => {
            let mut console = Console::new();
            console.load_program(0x1000, &demo_kernel());
            console
        }
    };

    let mut clocks: u64 = 0;
    for _ in 0..cli.frames {
        clocks += console.run_frame();
    }

    // Inspect state
    let snap = console.snapshot();
    println!("frames: {}", console.tia().frame_count());
    println!("color clocks: {}", clocks);
    println!("A: 0x{:02X}", snap.a);
    println!("X: 0x{:02X}", snap.x);
    println!("Y: 0x{:02X}", snap.y);
    println!("SP: 0x{:02X}", snap.sp);
    println!("PC: 0x{:04X}", snap.pc);
    println!("P (flags): 0b{:08b}", snap.status);
    if let Some([r, g, b, _]) = console.tia().pixel(0, 0) {
        println!("pixel(0,0): #{:02X}{:02X}{:02X}", r, g, b);
    }

    #[cfg(feature = "screenshot")]
    if let Some(path) = &cli.screenshot {
        console.tia().save_png(path)?;
        println!("saved {}", path.display());
    }

    Ok(())
}
