use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, ParseErrorKind};

type Label = String;
type Addr = u32;

/// Mapping from labels to program addresses.
///
/// A table is built once per program and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    /// Labels in the order they were first declared.
    labels: IndexMap<Label, Addr>,

    /// First declared label of every labelled address.
    addrs: BTreeMap<Addr, Label>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses the symbol file at the given path.
    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();

        let content =
            std::fs::read_to_string(path).map_err(|e| Error::File(path.to_path_buf(), e))?;

        Self::parse(&content)
    }

    /// Parses symbol records, one `LABEL ADDRESS` pair per line.
    ///
    /// Addresses are either decimal or `0x`-prefixed hexadecimal. Empty lines
    /// and comments (starting with `#` or `;`) are skipped.
    ///
    /// When a label is declared more than once, its last declaration wins.
    pub fn parse(content: &str) -> crate::Result<Self> {
        let records = content
            .lines()
            .enumerate()
            .filter_map(|(i, line)| {
                parse_record(line)
                    .map_err(|kind| Error::Syntax { line: i + 1, kind })
                    .transpose()
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self::from_iter(records))
    }

    /// Returns the address bound to the given label.
    pub fn resolve(&self, label: &str) -> Option<u32> {
        self.labels.get(label).copied()
    }

    /// Returns whether the given label is declared.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    /// Returns the label bound to exactly the given address.
    ///
    /// If several labels share the address, the first declared one is
    /// returned.
    pub fn label_of(&self, addr: u32) -> Option<&str> {
        self.addrs.get(&addr).map(String::as_str)
    }

    /// Returns the closest label at or below the given address, with the
    /// offset of `addr` from that label.
    pub fn symbolize(&self, addr: u32) -> Option<(&str, u32)> {
        self.addrs
            .range(..=addr)
            .next_back()
            .map(|(base, label)| (label.as_str(), addr - base))
    }

    /// Iterates over `(label, address)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels.iter().map(|(label, addr)| (label.as_str(), *addr))
    }

    /// Number of declared labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether no label is declared.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, u32)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (L, u32)>>(iter: I) -> Self {
        let mut labels = IndexMap::<Label, Addr>::new();

        for (label, addr) in iter {
            let label = label.into();

            if let Some(prev) = labels.insert(label.clone(), addr) {
                tracing::debug!(
                    label = %label,
                    prev = format_args!("{prev:#x}"),
                    addr = format_args!("{addr:#x}"),
                    "duplicate label, keeping last"
                );
            }
        }

        let mut addrs = BTreeMap::new();

        for (label, addr) in labels.iter() {
            addrs.entry(*addr).or_insert_with(|| label.clone());
        }

        Self { labels, addrs }
    }
}

/// Parses a single line of a symbol file.
///
/// Returns `None` for lines holding no record.
fn parse_record(line: &str) -> Result<Option<(String, u32)>, ParseErrorKind> {
    let line = match line.find(['#', ';']) {
        Some(comment) => &line[..comment],
        None => line,
    };

    let mut tokens = line.split_whitespace();

    let Some(label) = tokens.next() else {
        return Ok(None);
    };

    if !is_valid_label(label) {
        return Err(ParseErrorKind::InvalidLabel(label.to_owned()));
    }

    let addr = tokens
        .next()
        .ok_or_else(|| ParseErrorKind::MissingAddress(label.to_owned()))?;

    let addr = parse_addr(addr).ok_or_else(|| ParseErrorKind::InvalidAddress(addr.to_owned()))?;

    if let Some(token) = tokens.next() {
        return Err(ParseErrorKind::TrailingToken(token.to_owned()));
    }

    Ok(Some((label.to_owned(), addr)))
}

fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();

    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '.')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$'))
}

fn parse_addr(s: &str) -> Option<u32> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}
