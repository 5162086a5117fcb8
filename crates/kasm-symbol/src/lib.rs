//! This crate provides the symbol table of an assembled kasm program, mapping
//! labels emitted by the assembler to program addresses.
//!
//! # Example
//!
//! ```
//! use kasm_symbol::SymbolTable;
//!
//! let symbols = SymbolTable::parse("start 0x0\nLOOP 0x2\n").unwrap();
//!
//! // retrieve the address of a given label
//! assert_eq!(symbols.resolve("LOOP"), Some(2));
//!
//! // retrieve the closest label to a given address
//! assert_eq!(symbols.symbolize(3), Some(("LOOP", 1)));
//! ```

mod error;
mod table;

pub use self::error::{Error, ParseErrorKind, Result};
pub use self::table::SymbolTable;
