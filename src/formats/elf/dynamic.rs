//! Dynamic section entries

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::formats::elf::consts::DT_NULL;
use crate::formats::elf::names::{self, Symbolic};
use crate::formats::elf::record::{FieldKind, FieldSpec, FieldValue, Fields, Record};
use crate::formats::elf::types::Result;

/// ELF32 `Elf32_Dyn` (8 bytes). The value/pointer union is kept raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicEntry {
    pub d_tag: u32,
    pub d_val: u32,
}

impl Record for DynamicEntry {
    const NAME: &'static str = "DynamicEntry";
    const LAYOUT: &'static [FieldSpec] = &[
        FieldSpec::decorated("tag", FieldKind::U32, names::dynamic_tag),
        FieldSpec::new("valptr", FieldKind::U32),
    ];

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            d_tag: fields.u32("tag")?,
            d_val: fields.u32("valptr")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![FieldValue::U32(self.d_tag), FieldValue::U32(self.d_val)]
    }
}

impl DynamicEntry {
    pub fn tag(&self) -> Symbolic {
        names::dynamic_tag(self.d_tag)
    }

    /// `DT_NULL` marks the end of the meaningful entries.
    pub fn is_null(&self) -> bool {
        self.d_tag == DT_NULL
    }
}

impl fmt::Display for DynamicEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields())
    }
}
