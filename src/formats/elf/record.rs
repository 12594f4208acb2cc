//! Declarative fixed-width record codec.
//!
//! A record type declares its byte layout once as a static slice of
//! [`FieldSpec`]s. The same slice drives decoding, encoding, field access by
//! name and symbolic display, so the layout is never restated.
//!
//! All fields are little-endian and packed without padding.

use std::fmt;

use crate::formats::elf::names::Symbolic;
use crate::formats::elf::types::{ElfError, Result};

/// Binary width and signedness of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    I32,
    Bytes(usize),
}

impl FieldKind {
    pub const fn width(self) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U32 | FieldKind::I32 => 4,
            FieldKind::Bytes(n) => n,
        }
    }
}

/// Wraps a raw field value for display.
pub type Decorator = fn(u32) -> Symbolic;

/// One field of a record layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub decorator: Option<Decorator>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            decorator: None,
        }
    }

    pub const fn decorated(name: &'static str, kind: FieldKind, decorator: Decorator) -> Self {
        Self {
            name,
            kind,
            decorator: Some(decorator),
        }
    }
}

/// Total encoded size of a layout.
pub const fn layout_size(layout: &[FieldSpec]) -> usize {
    let mut size = 0;
    let mut i = 0;
    while i < layout.len() {
        size += layout[i].kind.width();
        i += 1;
    }
    size
}

/// A raw decoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    I32(i32),
    Bytes(Vec<u8>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::U8(_) => FieldKind::U8,
            FieldValue::U16(_) => FieldKind::U16,
            FieldValue::U32(_) => FieldKind::U32,
            FieldValue::I32(_) => FieldKind::I32,
            FieldValue::Bytes(b) => FieldKind::Bytes(b.len()),
        }
    }

    /// Unsigned integer fields widened to `u32`.
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            FieldValue::U8(v) => Some(v as u32),
            FieldValue::U16(v) => Some(v as u32),
            FieldValue::U32(v) => Some(v),
            FieldValue::I32(_) | FieldValue::Bytes(_) => None,
        }
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            FieldValue::U8(v) => out.push(*v),
            FieldValue::U16(v) => out.extend_from_slice(&v.to_le_bytes()),
            FieldValue::U32(v) => out.extend_from_slice(&v.to_le_bytes()),
            FieldValue::I32(v) => out.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Bytes(b) => out.extend_from_slice(b),
        }
    }
}

fn read_value(kind: FieldKind, bytes: &[u8]) -> FieldValue {
    match kind {
        FieldKind::U8 => FieldValue::U8(bytes[0]),
        FieldKind::U16 => FieldValue::U16(u16::from_le_bytes([bytes[0], bytes[1]])),
        FieldKind::U32 => {
            FieldValue::U32(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        }
        FieldKind::I32 => {
            FieldValue::I32(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        }
        FieldKind::Bytes(_) => FieldValue::Bytes(bytes.to_vec()),
    }
}

/// Decoded field values in layout order.
#[derive(Debug, Clone)]
pub struct Fields {
    record: &'static str,
    layout: &'static [FieldSpec],
    values: Vec<FieldValue>,
}

impl Fields {
    /// Decode the first `layout_size(layout)` bytes of `data`.
    pub fn decode(record: &'static str, layout: &'static [FieldSpec], data: &[u8]) -> Result<Self> {
        let needed = layout_size(layout);
        if data.len() < needed {
            return Err(ElfError::Truncated {
                what: record,
                offset: 0,
                needed,
                available: data.len(),
            });
        }

        let mut values = Vec::with_capacity(layout.len());
        let mut offset = 0;
        for spec in layout {
            let width = spec.kind.width();
            values.push(read_value(spec.kind, &data[offset..offset + width]));
            offset += width;
        }

        Ok(Self {
            record,
            layout,
            values,
        })
    }

    /// Bind values to a layout, checking that each matches its field kind.
    pub fn new(
        record: &'static str,
        layout: &'static [FieldSpec],
        values: Vec<FieldValue>,
    ) -> Result<Self> {
        if values.len() != layout.len() {
            return Err(ElfError::FieldMismatch {
                record,
                field: layout.get(values.len()).map_or("<extra>", |s| s.name),
            });
        }
        if let Some(spec) = layout
            .iter()
            .zip(&values)
            .find_map(|(spec, value)| (value.kind() != spec.kind).then_some(spec))
        {
            return Err(ElfError::FieldMismatch {
                record,
                field: spec.name,
            });
        }
        Ok(Self {
            record,
            layout,
            values,
        })
    }

    /// Pack back into the fixed layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(layout_size(self.layout));
        for value in &self.values {
            value.write_to(&mut out);
        }
        out
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn layout(&self) -> &'static [FieldSpec] {
        self.layout
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldSpec, &FieldValue)> + '_ {
        self.layout.iter().zip(&self.values)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, value)| value)
    }

    /// The field as its decorator renders it, or plain when undecorated.
    pub fn symbolic(&self, name: &str) -> Option<Symbolic> {
        let (spec, value) = self.iter().find(|(spec, _)| spec.name == name)?;
        let raw = value.as_u32()?;
        Some(match spec.decorator {
            Some(decorate) => decorate(raw),
            None => Symbolic::plain(raw),
        })
    }

    fn mismatch(&self, field: &str) -> ElfError {
        ElfError::FieldMismatch {
            record: self.record,
            field: self
                .layout
                .iter()
                .find(|s| s.name == field)
                .map_or("<missing>", |s| s.name),
        }
    }

    pub fn u8(&self, name: &str) -> Result<u8> {
        match self.get(name) {
            Some(FieldValue::U8(v)) => Ok(*v),
            _ => Err(self.mismatch(name)),
        }
    }

    pub fn u16(&self, name: &str) -> Result<u16> {
        match self.get(name) {
            Some(FieldValue::U16(v)) => Ok(*v),
            _ => Err(self.mismatch(name)),
        }
    }

    pub fn u32(&self, name: &str) -> Result<u32> {
        match self.get(name) {
            Some(FieldValue::U32(v)) => Ok(*v),
            _ => Err(self.mismatch(name)),
        }
    }

    pub fn i32(&self, name: &str) -> Result<i32> {
        match self.get(name) {
            Some(FieldValue::I32(v)) => Ok(*v),
            _ => Err(self.mismatch(name)),
        }
    }

    pub fn bytes<const N: usize>(&self, name: &str) -> Result<[u8; N]> {
        match self.get(name) {
            Some(FieldValue::Bytes(b)) => b
                .as_slice()
                .try_into()
                .map_err(|_| self.mismatch(name)),
            _ => Err(self.mismatch(name)),
        }
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.record)?;
        for (spec, value) in self.iter() {
            match (value, spec.decorator) {
                (FieldValue::Bytes(b), _) => write!(f, " {}:{}", spec.name, hex::encode(b))?,
                (FieldValue::I32(v), _) => write!(f, " {}:{}", spec.name, v)?,
                (value, Some(decorate)) => {
                    let raw = value.as_u32().unwrap_or_default();
                    write!(f, " {}:{}", spec.name, decorate(raw))?
                }
                (value, None) => {
                    write!(f, " {}:{:#x}", spec.name, value.as_u32().unwrap_or_default())?
                }
            }
        }
        write!(f, ">")
    }
}

/// A fixed-layout record type.
pub trait Record: Sized {
    /// Record name used in errors and display.
    const NAME: &'static str;
    /// Field layout, in byte order.
    const LAYOUT: &'static [FieldSpec];
    /// Encoded size of one record.
    const SIZE: usize = layout_size(Self::LAYOUT);

    /// Build the typed record from decoded fields.
    fn from_fields(fields: &Fields) -> Result<Self>;

    /// Field values in layout order.
    fn to_values(&self) -> Vec<FieldValue>;

    /// Structural checks run after decoding.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Decode and validate.
    fn decode(data: &[u8]) -> Result<Self> {
        let record = Self::decode_unchecked(data)?;
        record.validate()?;
        Ok(record)
    }

    /// Decode without running [`Record::validate`].
    fn decode_unchecked(data: &[u8]) -> Result<Self> {
        let fields = Fields::decode(Self::NAME, Self::LAYOUT, data)?;
        Self::from_fields(&fields)
    }

    fn fields(&self) -> Fields {
        Fields {
            record: Self::NAME,
            layout: Self::LAYOUT,
            values: self.to_values(),
        }
    }

    fn encode(&self) -> Vec<u8> {
        self.fields().encode()
    }
}
