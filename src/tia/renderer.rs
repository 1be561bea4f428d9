#![doc = r#"
TIA renderer module

Responsibilities
- Hosts `Tia::tick_once`, the externally driven entry point of the whole
  machine: it drives the CPU, advances the color clock and paints.

Per-tick order
1. On every third color clock the CPU advances one tick, through a
   `HookedBus` so its stores reach the register intercept.
2. The clock increments and wraps to zero at the end of the frame.
3. On a scanline boundary the WSYNC latch is released.
4. Inside the visible window the pixel under the beam is painted from
   COLUBK, or COLUPF where the playfield is set.

The CPU always runs before the clock moves; the pause and 3:1 ratio depend on
that order.
"#]

use super::playfield::Playfield;
use super::{
    ACTIVE_LINES, ACTIVE_START_LINE, BYTES_PER_PIXEL, COLOR_CLOCKS, CPU_CLOCK_DIVIDER,
    FRAME_CLOCKS, FRAME_WIDTH, HBLANK, Tia, rgb,
};
use crate::bus::memory_map::tia::{COLUBK, COLUPF};
use crate::bus::{Bus, HookedBus};
use crate::cpu::Cpu;

impl Tia {
    /// Advance one color clock.
    pub fn tick_once(&mut self, bus: &mut Bus, cpu: &mut Cpu) {
        if self.clock % CPU_CLOCK_DIVIDER == 0 {
            cpu.tick_once(&mut HookedBus::new(bus, self));
        }

        self.clock += 1;
        if self.clock >= FRAME_CLOCKS {
            self.start_frame();
        }

        if self.clock % COLOR_CLOCKS == 0 {
            self.strobed_wsync = false;
        }

        self.paint(bus);
    }

    /// Advance `n` color clocks.
    pub fn tick(&mut self, bus: &mut Bus, cpu: &mut Cpu, n: usize) {
        for _ in 0..n {
            self.tick_once(bus, cpu);
        }
    }

    fn paint(&mut self, bus: &Bus) {
        let scanline = self.scanline();
        let column = self.column();
        let visible_line = (ACTIVE_START_LINE..ACTIVE_START_LINE + ACTIVE_LINES).contains(&scanline);
        if !visible_line || column < HBLANK {
            return;
        }

        let x = column - HBLANK;
        let color = if Playfield::from_bus(bus).is_set(x) {
            bus.read(COLUPF)
        } else {
            bus.read(COLUBK)
        };

        let y = (scanline - ACTIVE_START_LINE) as usize;
        let i = (y * FRAME_WIDTH + x as usize) * BYTES_PER_PIXEL;
        let [r, g, b] = rgb(color);
        self.frame_buffer[i..i + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b, 0xFF]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::memory_map::tia::{CTRLPF, PF0};

    #[test]
    fn cpu_runs_on_every_third_clock() {
        let mut bus = Bus::new();
        bus.load(0x1000, &[0xE8, 0xE8, 0xE8]); // INX x3
        let mut cpu = Cpu::new();
        let mut tia = Tia::new();
        tia.tick_once(&mut bus, &mut cpu);
        assert_eq!(cpu.x(), 1);
        // INX is 2 CPU cycles = 6 color clocks.
        tia.tick(&mut bus, &mut cpu, 5);
        assert_eq!(cpu.x(), 1);
        tia.tick_once(&mut bus, &mut cpu);
        assert_eq!(cpu.x(), 2);
        assert_eq!(tia.clock(), 7);
    }

    #[test]
    fn clock_wraps_at_frame_end() {
        let mut bus = Bus::new();
        bus.load(0x1000, &[0x4C, 0x00, 0x10]); // JMP $1000
        let mut cpu = Cpu::new();
        let mut tia = Tia::new();
        tia.tick(&mut bus, &mut cpu, FRAME_CLOCKS as usize - 1);
        assert_eq!(tia.scanline(), 261);
        assert_eq!(tia.frame_count(), 0);
        tia.tick_once(&mut bus, &mut cpu);
        assert_eq!(tia.clock(), 0);
        assert_eq!(tia.frame_count(), 1);
    }

    #[test]
    fn wsync_latch_clears_on_line_boundary() {
        let mut bus = Bus::new();
        let mut cpu = Cpu::new();
        let mut tia = Tia::new();
        tia.clock = COLOR_CLOCKS - 2;
        tia.strobed_wsync = true;
        tia.tick_once(&mut bus, &mut cpu);
        assert!(tia.is_holding_cpu());
        tia.tick_once(&mut bus, &mut cpu);
        assert!(!tia.is_holding_cpu());
        assert_eq!(tia.scanline(), 1);
    }

    #[test]
    fn paints_background_and_playfield() {
        let mut bus = Bus::new();
        bus.load(0x1000, &[0x4C, 0x00, 0x10]); // JMP $1000
        bus.write(COLUBK, 0x1E);
        bus.write(COLUPF, 0x44);
        bus.write(PF0, 0x10);
        bus.write(CTRLPF, 0x00);
        let mut cpu = Cpu::new();
        let mut tia = Tia::new();
        tia.tick(&mut bus, &mut cpu, (41 * COLOR_CLOCKS) as usize);
        let pf = rgb(0x44);
        let bk = rgb(0x1E);
        // Pixel 0 is painted once the beam reaches column 68 of line 40.
        assert_eq!(tia.pixel(0, 0), Some([pf[0], pf[1], pf[2], 0xFF]));
        assert_eq!(tia.pixel(4, 0), Some([bk[0], bk[1], bk[2], 0xFF]));
        assert_eq!(tia.pixel(80, 0), Some([pf[0], pf[1], pf[2], 0xFF]));
        assert_eq!(tia.pixel(0, 1), Some([0, 0, 0, 0]));
    }
}
