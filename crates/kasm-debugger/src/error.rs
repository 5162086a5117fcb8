use std::path::PathBuf;

/// Execution engine fault, raised while executing an instruction.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct ExecutionFault<E>(pub E);

/// Program loading error.
///
/// When a load fails, the previously loaded program (machine state, symbols
/// and breakpoints) is left untouched.
#[derive(thiserror::Error, Debug)]
pub enum LoadError<E> {
    /// Program file open/read error.
    #[error("{0}: {1}")]
    File(PathBuf, std::io::Error),

    /// Missing or malformed symbol file.
    #[error(transparent)]
    Symbols(#[from] kasm_symbol::Error),

    /// The execution engine rejected the program image.
    #[error("invalid program image: {0}")]
    Image(#[source] E),

    /// A symbol is bound outside of the program image.
    #[error("symbol {label} ({addr:#x}) is outside of the program")]
    SymbolOutOfRange {
        /// Label of the symbol.
        label: String,

        /// Address bound to the label.
        addr: u32,
    },
}

/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error<E> {
    /// The program couldn't be loaded.
    #[error(transparent)]
    Load(#[from] LoadError<E>),

    /// A label isn't declared in the symbol table.
    #[error("unknown symbol {0}")]
    UnknownSymbol(String),

    /// The program has halted, and must be reloaded to run again.
    #[error("program halted")]
    Halted,

    /// A register isn't defined by the execution engine.
    #[error("invalid register {0}")]
    InvalidRegister(String),

    /// An address is outside of the machine memory.
    #[error("address {0:#x} out of bounds")]
    OutOfBounds(u32),

    /// The execution engine faulted while executing an instruction.
    #[error(transparent)]
    Execution(#[from] ExecutionFault<E>),
}

/// Result type of this crate.
pub type Result<T, E> = core::result::Result<T, Error<E>>;
