/*!
interfaces: small traits and views that decouple the CPU from the chip.

The processor needs a bus; the raster chip needs to see every write the
processor makes and to hold the processor off (RDY) after a WSYNC strobe.
Rather than letting `Bus` own the chip (which would make the chip unable to
drive the processor), the owning `Console` builds a short-lived `HookedBus`
each time the processor runs. The view borrows the `Bus` and the chip (as a
`WriteHook`) side by side, so no back-pointer or shared ownership exists.

- `CpuBus`: everything the CPU core needs (byte access, stack cursor, RDY).
- `WriteHook`: the chip-side capability the bus notifies after each store.
- `HookedBus`: the view combining both.
*/

use crate::bus::Bus;
use crate::bus::memory_map::STACK_BASE;

/// Memory interface consumed by the CPU core.
///
/// Implementors mask addresses into their own address space; callers pass
/// whatever 16-bit address the instruction computed.
pub trait CpuBus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);

    /// Current stack cursor.
    fn sp(&self) -> u8;
    fn set_sp(&mut self, sp: u8);

    /// State of the processor's RDY input. When false the processor must not
    /// fetch a new instruction.
    #[inline]
    fn ready(&self) -> bool {
        true
    }

    /// Little-endian word read (`low + high * 256`).
    #[inline]
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Store at the cursor, then move it down.
    #[inline]
    fn push(&mut self, value: u8) {
        let sp = self.sp();
        self.write(STACK_BASE | sp as u16, value);
        self.set_sp(sp.wrapping_sub(1));
    }

    /// Move the cursor up, then load from it.
    #[inline]
    fn pop(&mut self) -> u8 {
        let sp = self.sp().wrapping_add(1);
        self.set_sp(sp);
        self.read(STACK_BASE | sp as u16)
    }
}

/// Receiver for bus write notifications (the raster chip's register intercept).
pub trait WriteHook {
    /// Called after `addr` has been stored. `previous` holds the byte that was
    /// there before the store; the new value is readable through `bus`.
    fn on_write(&mut self, bus: &Bus, addr: u16, previous: u8);

    /// Level of the RDY line this device drives.
    #[inline]
    fn ready(&self) -> bool {
        true
    }
}

/// A `Bus` paired with a write hook for the duration of one processor tick.
pub struct HookedBus<'a, H: WriteHook> {
    bus: &'a mut Bus,
    hook: &'a mut H,
}

impl<'a, H: WriteHook> HookedBus<'a, H> {
    #[inline]
    pub fn new(bus: &'a mut Bus, hook: &'a mut H) -> Self {
        Self { bus, hook }
    }
}

impl<H: WriteHook> CpuBus for HookedBus<'_, H> {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        let addr = crate::bus::memory_map::mask(addr);
        let previous = self.bus.read(addr);
        self.bus.write(addr, value);
        self.hook.on_write(&*self.bus, addr, previous);
    }

    #[inline]
    fn sp(&self) -> u8 {
        self.bus.sp()
    }

    #[inline]
    fn set_sp(&mut self, sp: u8) {
        self.bus.set_sp(sp);
    }

    #[inline]
    fn ready(&self) -> bool {
        self.hook.ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(u16, u8, u8)>,
        hold: bool,
    }

    impl WriteHook for Recorder {
        fn on_write(&mut self, bus: &Bus, addr: u16, previous: u8) {
            self.writes.push((addr, previous, bus.read(addr)));
        }

        fn ready(&self) -> bool {
            !self.hold
        }
    }

    #[test]
    fn hook_sees_previous_and_stored_value() {
        let mut bus = Bus::new();
        bus.write(0x0090, 0x11);
        let mut rec = Recorder::default();
        {
            let mut view = HookedBus::new(&mut bus, &mut rec);
            view.write(0x0090, 0x22);
        }
        assert_eq!(rec.writes, vec![(0x0090, 0x11, 0x22)]);
        assert_eq!(bus.read(0x0090), 0x22);
    }

    #[test]
    fn hook_receives_masked_address() {
        let mut bus = Bus::new();
        let mut rec = Recorder::default();
        HookedBus::new(&mut bus, &mut rec).write(0x2002, 0x00);
        assert_eq!(rec.writes[0].0, 0x0002);
    }

    #[test]
    fn push_goes_through_hook() {
        let mut bus = Bus::new();
        let mut rec = Recorder::default();
        {
            let mut view = HookedBus::new(&mut bus, &mut rec);
            view.push(0xAB);
            assert_eq!(view.sp(), 0xFE);
            assert_eq!(view.pop(), 0xAB);
        }
        assert_eq!(rec.writes, vec![(0x00FF, 0x00, 0xAB)]);
    }

    #[test]
    fn ready_reflects_hook() {
        let mut bus = Bus::new();
        let mut rec = Recorder {
            hold: true,
            ..Default::default()
        };
        let view = HookedBus::new(&mut bus, &mut rec);
        assert!(!view.ready());
    }
}
