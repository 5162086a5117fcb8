mod builder;

use std::path::Path;

use kasm_symbol::SymbolTable;

pub use self::builder::Builder;
use self::builder::NeedsEngine;
use crate::breakpoint::BreakpointSet;
use crate::config::DebuggerConfig;
use crate::engine::ExecutionEngine;
use crate::error::{Error, ExecutionFault, LoadError};
use crate::location::Location;

/// Execution status of the debugged program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The program is loaded and can be stepped.
    Ready,

    /// The program is paused before the instruction at a breakpoint address.
    ///
    /// It can be stepped like a [ready](Self::Ready) program.
    BreakpointHit,

    /// The program has finished running (or no program is loaded).
    ///
    /// Nothing can be stepped until a program is loaded.
    Halted,
}

/// Debugger over a kasm execution engine.
///
/// The debugger owns the engine it drives, the symbol table of the loaded
/// program, and the set of breakpoints.
pub struct Debugger<E> {
    /// Engine executing the program.
    engine: E,

    /// Debugger configuration.
    config: DebuggerConfig,

    /// Symbols of the loaded program.
    symbols: SymbolTable,

    /// Active breakpoints.
    breakpoints: BreakpointSet,

    /// Current execution status.
    status: Status,
}

impl Debugger<()> {
    /// Creates a debugger builder.
    pub const fn builder() -> Builder<NeedsEngine> {
        Builder::new()
    }
}

impl<E: ExecutionEngine> Debugger<E> {
    /// Loads the program and symbol files at the given paths.
    ///
    /// See [load_image](Self::load_image) for the loading semantics.
    pub fn load(
        &mut self,
        program_path: impl AsRef<Path>,
        symbol_path: impl AsRef<Path>,
    ) -> crate::Result<(), E::Error> {
        let program_path = program_path.as_ref();

        let image = std::fs::read(program_path)
            .map_err(|e| LoadError::<E::Error>::File(program_path.to_path_buf(), e))?;

        let symbols =
            SymbolTable::from_path(symbol_path).map_err(LoadError::<E::Error>::Symbols)?;

        self.load_image(&image, symbols)
    }

    /// Loads the given program image with its symbol table.
    ///
    /// The image is installed by the engine, which resets the machine state
    /// and the program counter. The symbol table replaces the previous one,
    /// and all breakpoints are removed (their addresses only made sense for the
    /// previous program).
    ///
    /// Loading is all-or-nothing: on error, the previous program, symbols and
    /// breakpoints are left untouched.
    #[tracing::instrument(name = "Load", skip_all, fields(image_len = image.len()))]
    pub fn load_image(
        &mut self,
        image: &[u8],
        symbols: SymbolTable,
    ) -> crate::Result<(), E::Error> {
        let extent = self.engine.image_extent(image).map_err(LoadError::Image)?;

        if let Some((label, addr)) = symbols.iter().find(|(_, addr)| !extent.contains(addr)) {
            return Err(LoadError::SymbolOutOfRange {
                label: label.to_owned(),
                addr,
            }
            .into());
        }

        let extent = self.engine.load_image(image).map_err(LoadError::Image)?;

        tracing::debug!(
            start = format_args!("{:#x}", extent.start),
            end = format_args!("{:#x}", extent.end),
            symbols = symbols.len(),
            dropped_breakpoints = self.breakpoints.len(),
            "loaded"
        );

        self.symbols = symbols;
        self.breakpoints.clear();
        self.status = if self.engine.is_halted() {
            Status::Halted
        } else {
            Status::Ready
        };

        Ok(())
    }

    /// Returns the address bound to the given label.
    pub fn resolve(&self, label: &str) -> crate::Result<u32, E::Error> {
        self.symbols
            .resolve(label)
            .ok_or_else(|| Error::UnknownSymbol(label.to_owned()))
    }

    fn resolve_location(&self, location: Location) -> crate::Result<u32, E::Error> {
        match location {
            Location::Address(addr) => Ok(addr),
            Location::Label(label) => self.resolve(&label),
        }
    }

    /// Sets a breakpoint at the given location (address or label).
    ///
    /// Setting an existing breakpoint is not an error. It returns whether the
    /// breakpoint wasn't already set.
    pub fn set_breakpoint(
        &mut self,
        location: impl Into<Location>,
    ) -> crate::Result<bool, E::Error> {
        let addr = self.resolve_location(location.into())?;
        let added = self.breakpoints.insert(addr);

        tracing::trace!(addr = format_args!("{addr:#x}"), added, "set breakpoint");

        Ok(added)
    }

    /// Removes the breakpoint at the given location (address or label).
    ///
    /// Removing a missing breakpoint is not an error. It returns whether a
    /// breakpoint was set.
    pub fn remove_breakpoint(
        &mut self,
        location: impl Into<Location>,
    ) -> crate::Result<bool, E::Error> {
        let addr = self.resolve_location(location.into())?;
        let removed = self.breakpoints.remove(addr);

        tracing::trace!(addr = format_args!("{addr:#x}"), removed, "remove breakpoint");

        Ok(removed)
    }

    /// Returns whether a breakpoint is set at the given address.
    pub fn is_breakpoint(&self, addr: u32) -> bool {
        self.breakpoints.contains(addr)
    }

    /// Iterates over breakpoint addresses, in ascending order.
    pub fn breakpoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.breakpoints.iter()
    }

    /// Removes all breakpoints.
    pub fn clear_breakpoints(&mut self) {
        self.breakpoints.clear();
    }

    /// Executes a single instruction.
    ///
    /// Breakpoints are checked against the program counter **after** the
    /// instruction is executed. Stepping while paused at a breakpoint thus
    /// executes the instruction at the breakpoint address, and only pauses
    /// again once the program counter reaches a breakpoint address (possibly
    /// the same one, if the instruction jumps to itself).
    ///
    /// On success, the new execution status is returned.
    ///
    /// # Note
    ///
    /// If the engine faults, the status is left unchanged and the machine
    /// state is whatever the engine left behind.
    #[tracing::instrument(name = "Step", skip_all, fields(pc = self.engine.program_counter()))]
    pub fn step(&mut self) -> crate::Result<Status, E::Error> {
        if self.status == Status::Halted {
            return Err(Error::Halted);
        }

        self.engine.advance().map_err(ExecutionFault)?;

        self.status = if self.engine.is_halted() {
            tracing::debug!("program halted");
            Status::Halted
        } else {
            let pc = self.engine.program_counter();

            if self.breakpoints.contains(pc) {
                tracing::debug!(pc = format_args!("{pc:#x}"), "breakpoint hit");
                Status::BreakpointHit
            } else {
                Status::Ready
            }
        };

        Ok(self.status)
    }

    /// Executes instructions until a breakpoint is hit or the program halts.
    ///
    /// The first instruction is always executed, even when paused at a
    /// breakpoint. At most [run_step_limit](DebuggerConfig::run_step_limit)
    /// instructions are executed, after which the current status is returned
    /// ([ready](Status::Ready) unless the limit is zero).
    #[tracing::instrument(name = "Run", skip_all)]
    pub fn run(&mut self) -> crate::Result<Status, E::Error> {
        if self.status == Status::Halted {
            return Err(Error::Halted);
        }

        for _ in 0..self.config.run_step_limit {
            match self.step()? {
                Status::Ready => continue,
                status => return Ok(status),
            }
        }

        tracing::debug!(limit = self.config.run_step_limit, "step limit reached");

        Ok(self.status)
    }

    /// Reads a register without altering the machine state.
    pub fn peak_register(&self, reg: &str) -> crate::Result<u32, E::Error> {
        self.check_register(reg)?;
        Ok(self.engine.read_register(reg))
    }

    /// Reads a memory word without altering the machine state.
    pub fn peak_memory(&self, addr: u32) -> crate::Result<u32, E::Error> {
        self.check_memory(addr)?;
        Ok(self.engine.read_memory(addr))
    }

    /// Overwrites a register.
    ///
    /// The execution status is left unchanged.
    pub fn poke_register(&mut self, reg: &str, value: u32) -> crate::Result<(), E::Error> {
        self.check_register(reg)?;
        self.engine.write_register(reg, value);
        Ok(())
    }

    /// Overwrites a memory word.
    ///
    /// The execution status is left unchanged.
    pub fn poke_memory(&mut self, addr: u32, value: u32) -> crate::Result<(), E::Error> {
        self.check_memory(addr)?;
        self.engine.write_memory(addr, value);
        Ok(())
    }

    fn check_register(&self, reg: &str) -> crate::Result<(), E::Error> {
        if self.engine.has_register(reg) {
            Ok(())
        } else {
            Err(Error::InvalidRegister(reg.to_owned()))
        }
    }

    fn check_memory(&self, addr: u32) -> crate::Result<(), E::Error> {
        if addr < self.engine.memory_len() {
            Ok(())
        } else {
            Err(Error::OutOfBounds(addr))
        }
    }

    /// Returns the current execution status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the address of the next instruction to execute.
    pub fn program_counter(&self) -> u32 {
        self.engine.program_counter()
    }

    /// Returns the closest label at or below the given address, with the
    /// offset from that label.
    pub fn symbolize(&self, addr: u32) -> Option<(&str, u32)> {
        self.symbols.symbolize(addr)
    }

    /// Returns the symbol table of the loaded program.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns the debugger configuration.
    pub fn config(&self) -> &DebuggerConfig {
        &self.config
    }

    /// Returns the driven execution engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consumes the debugger, returning the driven execution engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}
