use std::fmt;

/// Program location, given either as a raw address or as a label.
///
/// This is the argument of the breakpoint operations of
/// [Debugger](crate::Debugger). A label is resolved to its address through the
/// symbol table of the loaded program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Raw program address.
    Address(u32),

    /// Label declared by the symbol table.
    Label(String),
}

impl From<u32> for Location {
    fn from(addr: u32) -> Self {
        Self::Address(addr)
    }
}

impl From<&str> for Location {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<String> for Location {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(addr) => write!(f, "{addr:#x}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}
