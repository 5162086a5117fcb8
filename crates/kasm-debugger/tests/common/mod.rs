#![allow(dead_code)]

mod engine;

use std::path::PathBuf;

use kasm_debugger::Debugger;
use tempfile::TempDir;

pub use self::engine::*;

/// Program and symbol files written to a temporary directory.
pub struct ProgramFiles {
    _dir: TempDir,
    pub program: PathBuf,
    pub symbols: PathBuf,
}

impl ProgramFiles {
    pub fn new(instrs: &[u32], symbols: &str) -> Self {
        Self::from_raw(&assemble(instrs), symbols)
    }

    pub fn from_raw(image: &[u8], symbols: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();

        let program = dir.path().join("program.bin");
        let symbol_file = dir.path().join("program.sym");

        std::fs::write(&program, image).unwrap();
        std::fs::write(&symbol_file, symbols).unwrap();

        Self {
            _dir: dir,
            program,
            symbols: symbol_file,
        }
    }
}

/// Builds a debugger over a fresh stub engine.
pub fn debugger() -> Debugger<StubEngine> {
    Debugger::builder()
        .with_engine(StubEngine::default())
        .build()
}

/// Builds a debugger and loads the given program into it.
pub fn loaded(instrs: &[u32], symbols: &str) -> Debugger<StubEngine> {
    let files = ProgramFiles::new(instrs, symbols);

    let mut debugger = debugger();
    debugger.load(&files.program, &files.symbols).unwrap();
    debugger
}
