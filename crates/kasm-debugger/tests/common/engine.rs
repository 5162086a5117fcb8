use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use kasm_debugger::ExecutionEngine;

/// Number of memory words of the stub machine.
pub const MEMORY_WORDS: u32 = 64;

pub const REGISTERS: [&str; 4] = ["r0", "r1", "r2", "r3"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StubError {
    #[error("image length {0} is not word-aligned")]
    Misaligned(usize),

    #[error("image of {0} words exceeds memory")]
    TooLarge(usize),

    #[error("illegal opcode {opcode:#x} at {addr:#x}")]
    IllegalOpcode { opcode: u32, addr: u32 },

    #[error("program counter {0:#x} outside of memory")]
    PcOutOfBounds(u32),
}

/// Minimal machine, just enough to drive the debugger.
///
/// Instructions are single little-endian words: opcode in the top byte,
/// register in the next byte, operand in the low 16 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubEngine {
    memory: Vec<u32>,
    regs: [u32; 4],
    pc: u32,
    halted: bool,
    steps: u64,
}

impl Default for StubEngine {
    fn default() -> Self {
        Self {
            memory: vec![0; MEMORY_WORDS as usize],
            regs: [0; 4],
            pc: 0,
            halted: false,
            steps: 0,
        }
    }
}

impl StubEngine {
    /// Number of successfully executed instructions since the last load.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Full machine state, for comparisons.
    pub fn snapshot(&self) -> (u32, [u32; 4], Vec<u32>, bool) {
        (self.pc, self.regs, self.memory.clone(), self.halted)
    }

    fn reg_index(reg: &str) -> Option<usize> {
        REGISTERS.iter().position(|r| *r == reg)
    }
}

impl ExecutionEngine for StubEngine {
    type Error = StubError;

    fn image_extent(&self, image: &[u8]) -> Result<Range<u32>, Self::Error> {
        if image.len() % 4 != 0 {
            return Err(StubError::Misaligned(image.len()));
        }

        let words = image.len() / 4;

        if words > MEMORY_WORDS as usize {
            return Err(StubError::TooLarge(words));
        }

        Ok(0..words as u32)
    }

    fn load_image(&mut self, image: &[u8]) -> Result<Range<u32>, Self::Error> {
        let extent = self.image_extent(image)?;

        let mut memory = vec![0; MEMORY_WORDS as usize];
        LittleEndian::read_u32_into(image, &mut memory[..extent.end as usize]);

        *self = Self {
            memory,
            ..Self::default()
        };

        Ok(extent)
    }

    fn advance(&mut self) -> Result<(), Self::Error> {
        let addr = self.pc;

        let instr = *self
            .memory
            .get(addr as usize)
            .ok_or(StubError::PcOutOfBounds(addr))?;

        let opcode = instr >> 24;
        let reg = ((instr >> 16) & 0x3) as usize;
        let operand = instr & 0xffff;

        match opcode {
            op::HALT => self.halted = true,
            op::NOP => self.pc += 1,
            op::INC => {
                self.regs[reg] = self.regs[reg].wrapping_add(1);
                self.pc += 1;
            }
            op::JMP => self.pc = operand,
            op::STORE => {
                let slot = self
                    .memory
                    .get_mut(operand as usize)
                    .ok_or(StubError::IllegalOpcode { opcode, addr })?;
                *slot = self.regs[reg];
                self.pc += 1;
            }
            _ => return Err(StubError::IllegalOpcode { opcode, addr }),
        }

        self.steps += 1;

        Ok(())
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn program_counter(&self) -> u32 {
        self.pc
    }

    fn has_register(&self, reg: &str) -> bool {
        Self::reg_index(reg).is_some()
    }

    fn read_register(&self, reg: &str) -> u32 {
        Self::reg_index(reg).map_or(0, |i| self.regs[i])
    }

    fn write_register(&mut self, reg: &str, value: u32) {
        if let Some(i) = Self::reg_index(reg) {
            self.regs[i] = value;
        }
    }

    fn memory_len(&self) -> u32 {
        MEMORY_WORDS
    }

    fn read_memory(&self, addr: u32) -> u32 {
        self.memory[addr as usize]
    }

    fn write_memory(&mut self, addr: u32, value: u32) {
        self.memory[addr as usize] = value;
    }
}

pub mod op {
    pub const HALT: u32 = 0x00;
    pub const NOP: u32 = 0x01;
    pub const INC: u32 = 0x02;
    pub const JMP: u32 = 0x03;
    pub const STORE: u32 = 0x04;
    pub const ILLEGAL: u32 = 0xff;
}

pub fn halt() -> u32 {
    op::HALT << 24
}

pub fn nop() -> u32 {
    op::NOP << 24
}

pub fn inc(reg: u32) -> u32 {
    (op::INC << 24) | (reg << 16)
}

pub fn jmp(addr: u32) -> u32 {
    (op::JMP << 24) | addr
}

pub fn store(reg: u32, addr: u32) -> u32 {
    (op::STORE << 24) | (reg << 16) | addr
}

pub fn illegal() -> u32 {
    op::ILLEGAL << 24
}

/// Encodes instructions into a program image.
pub fn assemble(instrs: &[u32]) -> Vec<u8> {
    let mut image = Vec::with_capacity(instrs.len() * 4);

    for instr in instrs {
        image.write_u32::<LittleEndian>(*instr).unwrap();
    }

    image
}
