//! This crate allows to debug programs running on a kasm virtual machine.
//!
//! The [Debugger] sits on top of an [ExecutionEngine], which implements the
//! instruction set of the machine. The debugger provides:
//! - Program loading, with the symbol table emitted by the assembler.
//! - Breakpoints, placed either at raw addresses or at labels.
//! - Single-stepping, and running until a breakpoint is hit.
//! - Inspection of registers and memory.
//!
//! # Example
//!
//! ```no_run
//! use kasm_debugger::{Debugger, ExecutionEngine, Status};
//!
//! fn debug<E: ExecutionEngine>(engine: E) -> kasm_debugger::Result<(), E::Error> {
//!     // initialize the debugger
//!     let mut debugger = Debugger::builder()
//!         .with_engine(engine)
//!         .run_step_limit(10_000)
//!         .build();
//!
//!     // load the assembled program and its symbols
//!     debugger.load("program.bin", "program.sym")?;
//!
//!     // pause at a label, and at a raw address
//!     debugger.set_breakpoint("LOOP")?;
//!     debugger.set_breakpoint(0x10_u32)?;
//!
//!     while debugger.run()? == Status::BreakpointHit {
//!         let _acc = debugger.peak_register("r0")?;
//!         let _word = debugger.peak_memory(0x20)?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Implementing an execution engine
//!
//! The [ExecutionEngine] trait is the only thing the debugger needs from a
//! machine: single-instruction advancement, a halted flag, and access to the
//! program counter, registers and memory. Any implementation works, including
//! a stub engine used to test stepping logic in isolation.
//!
//! # Logging
//!
//! Operations emit [tracing] spans and events. Nothing is printed unless the
//! application installs a subscriber.

/// Module implementing the breakpoint set.
pub mod breakpoint;

/// Module implementing the debugger configuration.
pub mod config;

mod debugger;

/// Module containing the trait for implementing an execution engine.
pub mod engine;

mod error;
mod location;

pub use self::breakpoint::BreakpointSet;
pub use self::config::{ConfigError, DebuggerConfig};
pub use self::debugger::{Builder, Debugger, Status};
pub use self::engine::ExecutionEngine;
pub use self::error::{Error, ExecutionFault, LoadError, Result};
pub use self::location::Location;

pub use kasm_symbol::SymbolTable;
