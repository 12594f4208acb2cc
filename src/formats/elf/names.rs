//! Display tables for enumerated and bitmask fields.
//!
//! Tables are built once from the static registration lists in
//! [`consts`](super::consts). They only affect how values print; the raw
//! integer is always what comparisons and bit arithmetic see.

use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::BitAnd;

use crate::formats::elf::consts::*;

/// Value to name lookup for one enumerated category.
#[derive(Debug, Clone)]
pub struct NameTable {
    category: &'static str,
    names: HashMap<u32, &'static str>,
}

impl NameTable {
    /// Build from `(name, value)` pairs. A value registered more than once
    /// keeps the name registered last.
    pub fn build(category: &'static str, pairs: &[(&'static str, u32)]) -> Self {
        let mut names = HashMap::with_capacity(pairs.len());
        for &(name, value) in pairs {
            names.insert(value, name);
        }
        Self { category, names }
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn name(&self, value: u32) -> Option<&'static str> {
        self.names.get(&value).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Ordered single-bit names for one bitmask category.
#[derive(Debug, Clone)]
pub struct FlagTable {
    category: &'static str,
    bits: Vec<(u32, &'static str)>,
}

impl FlagTable {
    /// Build from `(name, value)` pairs. Multi-bit values (masks) are not
    /// flags and are dropped; bits are kept in ascending order, a later
    /// registration of the same bit replacing the earlier name.
    pub fn build(category: &'static str, pairs: &[(&'static str, u32)]) -> Self {
        let mut by_bit = BTreeMap::new();
        for &(name, value) in pairs {
            if value.is_power_of_two() {
                by_bit.insert(value, name);
            }
        }
        Self {
            category,
            bits: by_bit.into_iter().collect(),
        }
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn bits(&self) -> &[(u32, &'static str)] {
        &self.bits
    }

    /// Split a mask into the names of its known bits, in table order, and
    /// the residual bits no name covers.
    pub fn decompose(&self, mask: u32) -> (Vec<&'static str>, u32) {
        let mut residual = mask;
        let mut names = Vec::new();
        for &(bit, name) in &self.bits {
            if residual & bit != 0 {
                names.push(name);
                residual &= !bit;
            }
        }
        (names, residual)
    }

    /// `NAME|NAME+0xresidual`, or the bare number when no bit has a name.
    /// Residual bits and unnamed masks print in hex, not decimal.
    pub fn render(&self, mask: u32) -> String {
        let (names, residual) = self.decompose(mask);
        if names.is_empty() {
            return render_number(mask);
        }
        let mut out = names.join("|");
        if residual != 0 {
            out.push_str(&format!("+{:#x}", residual));
        }
        out
    }
}

fn render_number(value: u32) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{:#x}", value)
    }
}

/// How a [`Symbolic`] value renders.
#[derive(Debug, Clone, Copy)]
pub enum Rendering {
    Plain,
    Enum(&'static NameTable),
    Flags(&'static FlagTable),
}

/// A raw field value paired with the table used to print it.
///
/// Equality, ordering, hashing and bit operations all act on the raw value,
/// so a `Symbolic` compares equal to the plain integer it wraps.
#[derive(Debug, Clone, Copy)]
pub struct Symbolic {
    value: u32,
    rendering: Rendering,
}

impl Symbolic {
    pub fn plain(value: u32) -> Self {
        Self {
            value,
            rendering: Rendering::Plain,
        }
    }

    pub fn named(value: u32, table: &'static NameTable) -> Self {
        Self {
            value,
            rendering: Rendering::Enum(table),
        }
    }

    pub fn flags(value: u32, table: &'static FlagTable) -> Self {
        Self {
            value,
            rendering: Rendering::Flags(table),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn rendering(&self) -> Rendering {
        self.rendering
    }

    /// Registered name of an enumerated value.
    pub fn name(&self) -> Option<&'static str> {
        match self.rendering {
            Rendering::Enum(table) => table.name(self.value),
            _ => None,
        }
    }

    /// Whether every bit of `bits` is set.
    pub fn contains(&self, bits: u32) -> bool {
        self.value & bits == bits
    }
}

impl fmt::Display for Symbolic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rendering {
            Rendering::Plain => write!(f, "{}", self.value),
            Rendering::Enum(table) => match table.name(self.value) {
                Some(name) => f.write_str(name),
                None => write!(f, "{}", self.value),
            },
            Rendering::Flags(table) => f.write_str(&table.render(self.value)),
        }
    }
}

impl From<Symbolic> for u32 {
    fn from(s: Symbolic) -> u32 {
        s.value
    }
}

impl PartialEq for Symbolic {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Symbolic {}

impl Hash for Symbolic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Symbolic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbolic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialEq<u32> for Symbolic {
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}

impl PartialEq<Symbolic> for u32 {
    fn eq(&self, other: &Symbolic) -> bool {
        *self == other.value
    }
}

impl PartialOrd<u32> for Symbolic {
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl BitAnd<u32> for Symbolic {
    type Output = u32;

    fn bitand(self, rhs: u32) -> u32 {
        self.value & rhs
    }
}

pub static MACHINES: Lazy<NameTable> = Lazy::new(|| NameTable::build("machine", MACHINE_NAMES));
pub static FILE_TYPES: Lazy<NameTable> =
    Lazy::new(|| NameTable::build("file type", FILE_TYPE_NAMES));
pub static SECTION_TYPES: Lazy<NameTable> =
    Lazy::new(|| NameTable::build("section type", SECTION_TYPE_NAMES));
pub static SECTION_FLAGS: Lazy<FlagTable> =
    Lazy::new(|| FlagTable::build("section flag", SECTION_FLAG_NAMES));
pub static SEGMENT_TYPES: Lazy<NameTable> =
    Lazy::new(|| NameTable::build("segment type", SEGMENT_TYPE_NAMES));
pub static SEGMENT_FLAGS: Lazy<FlagTable> =
    Lazy::new(|| FlagTable::build("segment flag", SEGMENT_FLAG_NAMES));
pub static DYNAMIC_TAGS: Lazy<NameTable> =
    Lazy::new(|| NameTable::build("dynamic tag", DYNAMIC_TAG_NAMES));
pub static SYMBOL_TYPES: Lazy<NameTable> =
    Lazy::new(|| NameTable::build("symbol type", SYMBOL_TYPE_NAMES));
pub static SYMBOL_BINDINGS: Lazy<NameTable> =
    Lazy::new(|| NameTable::build("symbol binding", SYMBOL_BINDING_NAMES));
pub static SYMBOL_VISIBILITIES: Lazy<NameTable> =
    Lazy::new(|| NameTable::build("symbol visibility", SYMBOL_VISIBILITY_NAMES));

// Field decorators: one per category, usable as `fn(u32) -> Symbolic`.

pub fn machine(value: u32) -> Symbolic {
    Symbolic::named(value, &MACHINES)
}

pub fn file_type(value: u32) -> Symbolic {
    Symbolic::named(value, &FILE_TYPES)
}

pub fn section_type(value: u32) -> Symbolic {
    Symbolic::named(value, &SECTION_TYPES)
}

pub fn section_flags(value: u32) -> Symbolic {
    Symbolic::flags(value, &SECTION_FLAGS)
}

pub fn segment_type(value: u32) -> Symbolic {
    Symbolic::named(value, &SEGMENT_TYPES)
}

pub fn segment_flags(value: u32) -> Symbolic {
    Symbolic::flags(value, &SEGMENT_FLAGS)
}

pub fn dynamic_tag(value: u32) -> Symbolic {
    Symbolic::named(value, &DYNAMIC_TAGS)
}

pub fn symbol_type(value: u32) -> Symbolic {
    Symbolic::named(value, &SYMBOL_TYPES)
}

pub fn symbol_binding(value: u32) -> Symbolic {
    Symbolic::named(value, &SYMBOL_BINDINGS)
}

pub fn symbol_visibility(value: u32) -> Symbolic {
    Symbolic::named(value, &SYMBOL_VISIBILITIES)
}
