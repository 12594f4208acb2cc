//! ELF32 (little-endian) object model
//!
//! [`ElfImage`] owns the file bytes and every decoded table. Sections,
//! segments and symbols are handed out as small views that borrow the image
//! and carry their table index, so name and section resolution always go
//! through the one image that decoded them.

pub mod consts;
pub mod dynamic;
pub mod headers;
pub mod memory;
pub mod names;
pub mod record;
pub mod relocations;
pub mod sections;
pub mod segments;
pub mod symbols;
pub mod types;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_image;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

pub use dynamic::DynamicEntry;
pub use headers::ElfHeader;
pub use memory::{MemoryError, MemoryView};
pub use names::Symbolic;
pub use record::{FieldKind, FieldSpec, FieldValue, Fields, Record};
pub use relocations::{Rel, Rela, Relocation};
pub use sections::{Section, SectionHeader};
pub use segments::{ProgramHeader, Segment};
pub use symbols::{ElfSymbol, Symbol};
pub use types::*;

use crate::config::LoadConfig;
use consts::{SHT_REL, SHT_RELA};
use utils::exact_range;

/// A fully decoded ELF32 image
pub struct ElfImage {
    data: Vec<u8>,
    header: ElfHeader,
    sections: Vec<SectionHeader>,
    program_headers: Vec<ProgramHeader>,
    symtab: Option<usize>,
    symbols: Vec<Symbol>,
    dynamic: Vec<DynamicEntry>,
    relocations: BTreeMap<String, Vec<Relocation>>,
}

impl ElfImage {
    /// Decode an image with the default configuration.
    pub fn parse(data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::parse_with_config(data, &LoadConfig::default())
    }

    /// Decode the header and every table, in order: section headers,
    /// program headers, symbols, dynamic entries, relocations.
    pub fn parse_with_config(data: impl Into<Vec<u8>>, config: &LoadConfig) -> Result<Self> {
        Self::load(data.into(), config)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(size_bytes = data.len()))]
    fn load(data: Vec<u8>, config: &LoadConfig) -> Result<Self> {
        let header = if config.validate_header {
            ElfHeader::decode(&data)?
        } else {
            ElfHeader::decode_unchecked(&data)?
        };

        let mut image = Self {
            data,
            header,
            sections: Vec::new(),
            program_headers: Vec::new(),
            symtab: None,
            symbols: Vec::new(),
            dynamic: Vec::new(),
            relocations: BTreeMap::new(),
        };

        image.sections = image.load_table(
            "section header table",
            header.e_shoff,
            header.e_shentsize,
            header.e_shnum,
        )?;
        debug!(count = image.sections.len(), "decoded section headers");

        image.program_headers = image.load_table(
            "program header table",
            header.e_phoff,
            header.e_phentsize,
            header.e_phnum,
        )?;
        debug!(
            count = image.program_headers.len(),
            "decoded program headers"
        );

        let (symtab, symbols) = image.load_symbols(&config.symbol_table);
        image.symtab = symtab;
        image.symbols = symbols;

        image.dynamic = image.load_dynamic(&config.dynamic_section);
        image.relocations = image.load_relocations();

        Ok(image)
    }

    /// Decode `count` records of `entsize` bytes at `offset`. The table must
    /// lie entirely inside the file.
    fn load_table<R: Record>(
        &self,
        table: &'static str,
        offset: u32,
        entsize: u16,
        count: u16,
    ) -> Result<Vec<R>> {
        let entsize = entsize as usize;
        let expected = entsize * count as usize;
        let bytes = exact_range(&self.data, offset as usize, expected).map_err(|actual| {
            ElfError::TableLength {
                table,
                offset: offset as usize,
                expected,
                actual,
            }
        })?;

        (0..count as usize)
            .map(|i| R::decode(&bytes[i * entsize..(i + 1) * entsize]))
            .collect()
    }

    fn load_symbols(&self, name: &str) -> (Option<usize>, Vec<Symbol>) {
        match self.section_by_name(name) {
            Some(symtab) => {
                let symbols = symtab.decode_entries::<Symbol>();
                debug!(section = name, count = symbols.len(), "decoded symbols");
                (Some(symtab.index()), symbols)
            }
            None => {
                trace!(section = name, "no symbol table");
                (None, Vec::new())
            }
        }
    }

    fn load_dynamic(&self, name: &str) -> Vec<DynamicEntry> {
        match self.section_by_name(name) {
            Some(dynamic) => {
                let entries = dynamic.decode_entries::<DynamicEntry>();
                debug!(count = entries.len(), "decoded dynamic entries");
                entries
            }
            None => Vec::new(),
        }
    }

    fn load_relocations(&self) -> BTreeMap<String, Vec<Relocation>> {
        let mut grouped: BTreeMap<String, Vec<Relocation>> = BTreeMap::new();
        for section in self.sections() {
            match section.header.sh_type {
                SHT_REL => {}
                SHT_RELA => {
                    debug!(section = %section.name(), "skipping RELA table");
                    continue;
                }
                _ => continue,
            }
            let index = section.index();
            let entries = section.decode_entries::<Rel>();
            debug!(section = %section.name(), count = entries.len(), "decoded relocations");
            grouped
                .entry(section.name().into_owned())
                .or_default()
                .extend(entries.into_iter().map(|rel| Relocation {
                    section_index: index,
                    rel,
                }));
        }
        grouped
    }

    pub fn header(&self) -> &ElfHeader {
        &self.header
    }

    /// Raw file bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn sections(&self) -> impl Iterator<Item = Section<'_>> + '_ {
        self.sections
            .iter()
            .enumerate()
            .map(move |(i, header)| Section::new(self, i, header))
    }

    pub fn section(&self, index: usize) -> Option<Section<'_>> {
        self.sections
            .get(index)
            .map(|header| Section::new(self, index, header))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// First section with the given name.
    pub fn section_by_name(&self, name: &str) -> Option<Section<'_>> {
        self.sections().find(|s| s.name() == name)
    }

    /// Resolve a name index against the section-name string table.
    pub fn lookup_section_name(&self, index: u32) -> Cow<'_, str> {
        match self.section(self.header.e_shstrndx as usize) {
            Some(strtab) => strtab.lookup_string(index),
            None => Cow::Borrowed(UNKNOWN_NAME),
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.program_headers
            .iter()
            .enumerate()
            .map(move |(i, header)| Segment::new(self, i, header))
    }

    pub fn segment(&self, index: usize) -> Option<Segment<'_>> {
        self.program_headers
            .get(index)
            .map(|header| Segment::new(self, index, header))
    }

    pub fn load_segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.segments().filter(|s| s.header.is_load())
    }

    /// The section the symbols were decoded from.
    pub fn symbol_table(&self) -> Option<Section<'_>> {
        self.symtab.and_then(|i| self.section(i))
    }

    pub fn symbols(&self) -> impl Iterator<Item = ElfSymbol<'_>> + '_ {
        let symtab = self.symtab.unwrap_or_default();
        self.symbols
            .iter()
            .map(move |symbol| ElfSymbol::new(self, symtab, symbol))
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// First symbol with the given name.
    pub fn symbol_by_name(&self, name: &str) -> Option<ElfSymbol<'_>> {
        self.symbols().find(|s| s.name() == name)
    }

    pub fn dynamic_entries(&self) -> &[DynamicEntry] {
        &self.dynamic
    }

    /// Relocations grouped by the name of their section.
    pub fn relocations(&self) -> &BTreeMap<String, Vec<Relocation>> {
        &self.relocations
    }

    pub fn relocations_for(&self, section: &str) -> &[Relocation] {
        self.relocations
            .get(section)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Virtual-address view over the `PT_LOAD` segments.
    pub fn memory(&self) -> MemoryView<'_> {
        MemoryView::new(self.load_segments().collect())
    }
}

impl fmt::Debug for ElfImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElfImage")
            .field("size", &self.data.len())
            .field("header", &self.header)
            .field("sections", &self.sections.len())
            .field("program_headers", &self.program_headers.len())
            .field("symbols", &self.symbols.len())
            .field("dynamic", &self.dynamic.len())
            .field("relocation_sections", &self.relocations.len())
            .finish()
    }
}
