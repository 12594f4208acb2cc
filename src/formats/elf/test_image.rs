//! Synthetic ELF32 images for unit tests.
//!
//! Layout: ELF header at 0, program headers at 0x34, caller-placed bytes
//! anywhere from 0x100 on, then the section-name string table and the
//! section header table at the end of the file.

use crate::formats::elf::consts::*;
use crate::formats::elf::record::Record;
use crate::formats::elf::{ElfHeader, ProgramHeader, SectionHeader, Symbol};

const STRTAB_MIN_OFFSET: usize = 0x300;

fn align4(n: usize) -> usize {
    (n + 3) & !3
}

pub struct ImageBuilder {
    file: Vec<u8>,
    sections: Vec<(String, SectionHeader)>,
    segments: Vec<ProgramHeader>,
}

impl ImageBuilder {
    pub fn new() -> Self {
        Self {
            file: vec![0; 0x100],
            sections: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Write raw bytes at a file offset, growing the file as needed.
    pub fn place(mut self, offset: usize, bytes: &[u8]) -> Self {
        if self.file.len() < offset + bytes.len() {
            self.file.resize(offset + bytes.len(), 0);
        }
        self.file[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Add a section; its `sh_name` is assigned at build time.
    pub fn section(mut self, name: &str, header: SectionHeader) -> Self {
        self.sections.push((name.to_string(), header));
        self
    }

    pub fn segment(mut self, header: ProgramHeader) -> Self {
        self.segments.push(header);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut file = self.file;
        assert!(52 + 32 * self.segments.len() <= 0x100, "too many segments");

        let mut sections = vec![(String::new(), sh(SHT_NULL, 0, 0))];
        sections.extend(self.sections);

        let mut strtab = vec![0u8];
        for (name, header) in sections.iter_mut() {
            if name.is_empty() {
                continue;
            }
            header.sh_name = strtab.len() as u32;
            strtab.extend_from_slice(name.as_bytes());
            strtab.push(0);
        }
        let strtab_offset = align4(file.len().max(STRTAB_MIN_OFFSET));
        let mut shstrtab = sh(SHT_STRTAB, strtab_offset as u32, 0);
        shstrtab.sh_name = strtab.len() as u32;
        strtab.extend_from_slice(b".shstrtab\0");
        shstrtab.sh_size = strtab.len() as u32;
        sections.push((".shstrtab".to_string(), shstrtab));

        file.resize(strtab_offset, 0);
        file.extend_from_slice(&strtab);

        let shoff = align4(file.len());
        file.resize(shoff, 0);
        for (_, header) in &sections {
            file.extend_from_slice(&header.encode());
        }

        let mut ident = [0u8; EI_NIDENT];
        ident[..4].copy_from_slice(ELFMAG);
        ident[EI_CLASS] = ELFCLASS32;
        ident[EI_DATA] = ELFDATA2LSB;
        ident[EI_VERSION] = EV_CURRENT;
        let header = ElfHeader {
            ident,
            e_type: ET_EXEC as u16,
            e_machine: EM_386 as u16,
            e_version: 1,
            e_entry: 0x1000,
            e_phoff: if self.segments.is_empty() { 0 } else { 52 },
            e_shoff: shoff as u32,
            e_flags: 0,
            e_ehsize: 52,
            e_phentsize: 32,
            e_phnum: self.segments.len() as u16,
            e_shentsize: 40,
            e_shnum: sections.len() as u16,
            e_shstrndx: (sections.len() - 1) as u16,
        };
        file[..52].copy_from_slice(&header.encode());
        for (i, segment) in self.segments.iter().enumerate() {
            let at = 52 + 32 * i;
            file[at..at + 32].copy_from_slice(&segment.encode());
        }
        file
    }
}

pub fn sh(sh_type: u32, offset: u32, size: u32) -> SectionHeader {
    SectionHeader {
        sh_name: 0,
        sh_type,
        sh_flags: 0,
        sh_addr: 0,
        sh_offset: offset,
        sh_size: size,
        sh_link: 0,
        sh_info: 0,
        sh_addralign: 1,
        sh_entsize: 0,
    }
}

pub trait SectionHeaderExt {
    fn linked(self, link: u32) -> Self;
    fn entsize(self, entsize: u32) -> Self;
}

impl SectionHeaderExt for SectionHeader {
    fn linked(mut self, link: u32) -> Self {
        self.sh_link = link;
        self
    }

    fn entsize(mut self, entsize: u32) -> Self {
        self.sh_entsize = entsize;
        self
    }
}

pub fn ph(p_type: u32, offset: u32, vaddr: u32, filesz: u32, memsz: u32) -> ProgramHeader {
    ProgramHeader {
        p_type,
        p_offset: offset,
        p_vaddr: vaddr,
        p_paddr: vaddr,
        p_filesz: filesz,
        p_memsz: memsz,
        p_flags: PF_R,
        p_align: 0x1000,
    }
}

pub fn sym(name: u32, value: u32, binding: u32, kind: u32, shndx: u16) -> Symbol {
    Symbol {
        st_name: name,
        st_value: value,
        st_size: 0,
        st_info: ((binding << 4) | (kind & 0xf)) as u8,
        st_other: 0,
        st_shndx: shndx,
    }
}

pub fn symbol_bytes(symbols: &[Symbol]) -> Vec<u8> {
    symbols.iter().flat_map(|s| s.encode()).collect()
}
