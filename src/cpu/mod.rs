/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
    status.rs       - Six-flag status register and its packed byte form.
    state.rs        - Core CPU state (registers, flags, in-flight cycles, paused).
    regs.rs         - `CpuRegs` trait the helpers are generic over.
    addressing.rs   - Addressing modes & operand resolution.
    table.rs        - Static opcode descriptor table (+ validation).
    cycles.rs       - Cycle arithmetic over descriptors.
    execute.rs      - Instruction semantic helpers (ALU, stack, branch, jumps).
    dispatch/       - One-instruction orchestration and per-family handlers.
    core/           - `Cpu` façade and the per-tick state machine.
```

The public surface is the `Cpu` façade (wrapping `CpuState`). Everything
memory-facing goes through `crate::bus::CpuBus`, so the core can run on a raw
`Bus` or on a `HookedBus` that forwards writes to the raster chip.

Usage:
```rust
use arvcs::bus::Bus;
use arvcs::cpu::Cpu;

let mut bus = Bus::new();
bus.load(0x1000, &[0xA9, 0x09]); // LDA #$09
let mut cpu = Cpu::new();
cpu.tick_once(&mut bus);
assert_eq!(cpu.a(), 9);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub mod dispatch;
pub mod execute;
pub mod regs;
pub mod state;
pub mod status;
pub mod table;

pub use crate::cpu::core::{Cpu, CpuSnapshot};
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::CpuState;
pub use crate::cpu::status::{StatusBits, StatusRegister};
pub use crate::cpu::table::{Instruction, OpKind, Operation, TableError};
