use std::ops::Range;

/// Trait implementing the execution logic of a kasm machine.
///
/// The debugger never interprets instructions itself. It drives an
/// implementor of this trait one instruction at a time, and observes its
/// machine state (program counter, registers, memory) in between.
///
/// Addresses are word indices into the machine memory.
pub trait ExecutionEngine {
    /// Error returned by this trait, either when an image is rejected or when
    /// an instruction faults.
    type Error: std::error::Error;

    /// Checks the given program image without installing it.
    ///
    /// On success, the address range the image would occupy is returned.
    ///
    /// # Note
    ///
    /// The implementor makes sure that [load_image](Self::load_image)
    /// succeeds for any image accepted by this function.
    fn image_extent(&self, image: &[u8]) -> Result<Range<u32>, Self::Error>;

    /// Installs the given program image into memory.
    ///
    /// The whole machine state is reset, and the program counter is set to
    /// the program's entry address. On success, the address range occupied by
    /// the image is returned.
    ///
    /// On error, the machine state is left unchanged.
    fn load_image(&mut self, image: &[u8]) -> Result<Range<u32>, Self::Error>;

    /// Executes a single instruction.
    fn advance(&mut self) -> Result<(), Self::Error>;

    /// Returns whether the program has finished running.
    fn is_halted(&self) -> bool;

    /// Returns the address of the next instruction to execute.
    fn program_counter(&self) -> u32;

    /// Returns whether the given register is defined by this machine.
    fn has_register(&self, reg: &str) -> bool;

    /// Reads the value of a register.
    ///
    /// Only called for registers accepted by [has_register](Self::has_register).
    fn read_register(&self, reg: &str) -> u32;

    /// Writes the value of a register.
    ///
    /// Only called for registers accepted by [has_register](Self::has_register).
    fn write_register(&mut self, reg: &str, value: u32);

    /// Number of addressable words in memory.
    fn memory_len(&self) -> u32;

    /// Reads the word at the given address.
    ///
    /// Only called for addresses below [memory_len](Self::memory_len).
    fn read_memory(&self, addr: u32) -> u32;

    /// Writes the word at the given address.
    ///
    /// Only called for addresses below [memory_len](Self::memory_len).
    fn write_memory(&mut self, addr: u32, value: u32);
}
