use kasm_symbol::SymbolTable;

use super::{Debugger, Status};
use crate::breakpoint::BreakpointSet;
use crate::config::DebuggerConfig;
use crate::engine::ExecutionEngine;

/// Builder for [Debugger].
///
/// It is usually created by calling [Debugger::builder], and allows to
/// specify which execution engine the debugger drives, and how.
pub struct Builder<S> {
    state: S,
}

impl Builder<NeedsEngine> {
    pub(super) const fn new() -> Self {
        Self { state: NeedsEngine }
    }

    /// Specifies the execution engine to drive.
    ///
    /// The debugger takes ownership of the engine, so that nothing else can
    /// mutate the machine state behind its back.
    pub fn with_engine<E: ExecutionEngine>(self, engine: E) -> Builder<WithEngine<E>> {
        Builder {
            state: WithEngine {
                engine,
                config: DebuggerConfig::default(),
            },
        }
    }
}

impl<E: ExecutionEngine> Builder<WithEngine<E>> {
    /// Specifies the whole debugger configuration.
    pub fn with_config(mut self, config: DebuggerConfig) -> Self {
        self.state.config = config;
        self
    }

    /// Specifies the maximum number of instructions executed by a single
    /// [run](Debugger::run).
    pub fn run_step_limit(mut self, limit: u64) -> Self {
        self.state.config.run_step_limit = limit;
        self
    }

    /// Builds the debugger.
    ///
    /// No program is loaded yet, so the debugger starts [halted](Status::Halted).
    pub fn build(self) -> Debugger<E> {
        Debugger {
            engine: self.state.engine,
            config: self.state.config,
            symbols: SymbolTable::new(),
            breakpoints: BreakpointSet::new(),
            status: Status::Halted,
        }
    }
}

/// Builder state before an engine is specified.
pub struct NeedsEngine;

/// Builder state once an engine is specified.
pub struct WithEngine<E> {
    engine: E,
    config: DebuggerConfig,
}
