#![doc = r#"
TIA register intercept

Purpose
- The chip's side of every CPU store. The bus has already written the byte
  (register values live in ordinary memory, so the renderer reads them from
  there); this module only reacts to the strobes that carry timing.

Registers with behavior
- WSYNC: latch the strobe; the RDY line drops until the renderer clears the
  latch at the next scanline boundary.
- VSYNC: after the store, read the register back; if it holds zero the clock
  restarts at the top of a new frame.

Every other address is a plain memory write. Stores landing in the RIOT
window or the cartridge ROM are traced, since nothing models them.
"#]

use super::Tia;
use crate::bus::memory_map::tia::{VSYNC, WSYNC};
use crate::bus::memory_map::{Region, region};
use crate::bus::{Bus, WriteHook};

impl WriteHook for Tia {
    fn on_write(&mut self, bus: &Bus, addr: u16, _previous: u8) {
        match addr {
            WSYNC => self.strobed_wsync = true,
            VSYNC if bus.read(VSYNC) == 0 => {
                log::debug!(
                    "vsync: frame {} ended at scanline {}",
                    self.frame_count,
                    self.scanline()
                );
                self.start_frame();
            }
            _ => match region(addr) {
                r @ (Region::Riot | Region::Rom) => {
                    log::trace!("{r:?} store at {addr:#06x} kept as plain memory");
                }
                _ => {}
            },
        }
    }

    #[inline]
    fn ready(&self) -> bool {
        !self.strobed_wsync
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::{CpuBus, HookedBus};

    #[test]
    fn wsync_strobe_drops_rdy() {
        let mut bus = Bus::new();
        let mut tia = Tia::new();
        let mut view = HookedBus::new(&mut bus, &mut tia);
        assert!(view.ready());
        view.write(WSYNC, 0x00);
        assert!(!view.ready());
    }

    #[test]
    fn vsync_zero_restarts_frame() {
        let mut bus = Bus::new();
        let mut tia = Tia::new();
        tia.clock = 5_000;
        HookedBus::new(&mut bus, &mut tia).write(VSYNC, 0x02);
        assert_eq!(tia.clock(), 5_000);
        HookedBus::new(&mut bus, &mut tia).write(VSYNC, 0x00);
        assert_eq!(tia.clock(), 0);
        assert_eq!(tia.frame_count(), 1);
    }

    #[test]
    fn plain_memory_then_mirrored_vsync() {
        let mut bus = Bus::new();
        let mut tia = Tia::new();
        tia.clock = 100;
        HookedBus::new(&mut bus, &mut tia).write(0x0080, 0x00);
        assert_eq!(tia.clock(), 100);
        assert!(!tia.is_holding_cpu());
        HookedBus::new(&mut bus, &mut tia).write(0x2000, 0x00); // masks to VSYNC
        assert_eq!(tia.clock(), 0);
    }

    #[test]
    fn riot_and_rom_stores_are_plain_memory() {
        let mut bus = Bus::new();
        let mut tia = Tia::new();
        tia.clock = 300;
        assert_eq!(region(0x0284), Region::Riot);
        assert_eq!(region(0xF000), Region::Rom);
        HookedBus::new(&mut bus, &mut tia).write(0x0284, 0x00);
        HookedBus::new(&mut bus, &mut tia).write(0xF000, 0xEA);
        assert_eq!(tia.clock(), 300);
        assert!(!tia.is_holding_cpu());
        assert_eq!(bus.read(0x1000), 0xEA);
    }
}
