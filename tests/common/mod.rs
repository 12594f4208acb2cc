//! Shared fixtures for integration tests.
//!
//! [`ObjectWriter`] lays out section contents back to back after the ELF
//! header and program header table, followed by `.shstrtab` and the section
//! header table.

#![allow(dead_code)]

use elfscope::formats::elf::consts::*;
use elfscope::formats::elf::{ElfHeader, ProgramHeader, Record, SectionHeader, Symbol};

pub struct SectionSpec {
    pub name: &'static str,
    pub sh_type: u32,
    pub flags: u32,
    pub addr: u32,
    pub link: u32,
    pub entsize: u32,
    pub data: Vec<u8>,
    /// Size for `SHT_NOBITS` sections, which carry no bytes in the file.
    pub nobits_size: u32,
}

impl SectionSpec {
    pub fn new(name: &'static str, sh_type: u32, data: Vec<u8>) -> Self {
        Self {
            name,
            sh_type,
            flags: 0,
            addr: 0,
            link: 0,
            entsize: 0,
            data,
            nobits_size: 0,
        }
    }
}

#[derive(Default)]
pub struct ObjectWriter {
    e_type: u32,
    sections: Vec<SectionSpec>,
    /// Segments cover named sections; offsets are resolved in `finish`.
    segments: Vec<(u32, Vec<&'static str>, u32)>,
}

impl ObjectWriter {
    pub fn new(e_type: u32) -> Self {
        Self {
            e_type,
            ..Self::default()
        }
    }

    pub fn add(&mut self, spec: SectionSpec) -> u32 {
        self.sections.push(spec);
        self.sections.len() as u32
    }

    /// A `PT_LOAD` segment spanning the given sections (which must be laid
    /// out consecutively). `extra_mem` grows `p_memsz` past the file bytes.
    pub fn load_segment(&mut self, sections: &[&'static str], extra_mem: u32) {
        self.segments.push((PT_LOAD, sections.to_vec(), extra_mem));
    }

    pub fn finish(self) -> Vec<u8> {
        let phoff = ElfHeader::SIZE;
        let mut file = vec![0u8; phoff + ProgramHeader::SIZE * self.segments.len()];

        let mut headers = vec![SectionHeader {
            sh_name: 0,
            sh_type: SHT_NULL,
            sh_flags: 0,
            sh_addr: 0,
            sh_offset: 0,
            sh_size: 0,
            sh_link: 0,
            sh_info: 0,
            sh_addralign: 0,
            sh_entsize: 0,
        }];
        let mut names = vec![0u8];

        for spec in &self.sections {
            while file.len() % 4 != 0 {
                file.push(0);
            }
            let offset = file.len() as u32;
            let size = if spec.sh_type == SHT_NOBITS {
                spec.nobits_size
            } else {
                file.extend_from_slice(&spec.data);
                spec.data.len() as u32
            };
            headers.push(SectionHeader {
                sh_name: push_name(&mut names, spec.name),
                sh_type: spec.sh_type,
                sh_flags: spec.flags,
                sh_addr: spec.addr,
                sh_offset: offset,
                sh_size: size,
                sh_link: spec.link,
                sh_info: 0,
                sh_addralign: 4,
                sh_entsize: spec.entsize,
            });
        }

        let shstrtab_name = push_name(&mut names, ".shstrtab");
        let shstrtab_offset = file.len() as u32;
        file.extend_from_slice(&names);
        headers.push(SectionHeader {
            sh_name: shstrtab_name,
            sh_type: SHT_STRTAB,
            sh_flags: 0,
            sh_addr: 0,
            sh_offset: shstrtab_offset,
            sh_size: names.len() as u32,
            sh_link: 0,
            sh_info: 0,
            sh_addralign: 1,
            sh_entsize: 0,
        });

        while file.len() % 4 != 0 {
            file.push(0);
        }
        let shoff = file.len() as u32;
        for header in &headers {
            file.extend_from_slice(&header.encode());
        }

        for (i, (p_type, covered, extra_mem)) in self.segments.iter().enumerate() {
            let covered: Vec<&SectionHeader> = covered
                .iter()
                .map(|name| {
                    let index = self
                        .sections
                        .iter()
                        .position(|s| s.name == *name)
                        .expect("segment names an unknown section");
                    &headers[index + 1]
                })
                .collect();
            let first = covered[0];
            let last = covered[covered.len() - 1];
            let file_end = if last.sh_type == SHT_NOBITS {
                last.sh_offset
            } else {
                last.sh_offset + last.sh_size
            };
            let filesz = file_end - first.sh_offset;
            let phdr = ProgramHeader {
                p_type: *p_type,
                p_offset: first.sh_offset,
                p_vaddr: first.sh_addr,
                p_paddr: first.sh_addr,
                p_filesz: filesz,
                p_memsz: filesz + extra_mem,
                p_flags: PF_R | PF_W,
                p_align: 4,
            };
            let at = phoff + ProgramHeader::SIZE * i;
            file[at..at + ProgramHeader::SIZE].copy_from_slice(&phdr.encode());
        }

        let mut ident = [0u8; EI_NIDENT];
        ident[..4].copy_from_slice(ELFMAG);
        ident[EI_CLASS] = ELFCLASS32;
        ident[EI_DATA] = ELFDATA2LSB;
        ident[EI_VERSION] = EV_CURRENT;
        let header = ElfHeader {
            ident,
            e_type: self.e_type as u16,
            e_machine: EM_386 as u16,
            e_version: 1,
            e_entry: 0,
            e_phoff: if self.segments.is_empty() { 0 } else { phoff as u32 },
            e_shoff: shoff,
            e_flags: 0,
            e_ehsize: ElfHeader::SIZE as u16,
            e_phentsize: ProgramHeader::SIZE as u16,
            e_phnum: self.segments.len() as u16,
            e_shentsize: SectionHeader::SIZE as u16,
            e_shnum: headers.len() as u16,
            e_shstrndx: (headers.len() - 1) as u16,
        };
        file[..ElfHeader::SIZE].copy_from_slice(&header.encode());
        file
    }
}

fn push_name(names: &mut Vec<u8>, name: &str) -> u32 {
    let at = names.len() as u32;
    names.extend_from_slice(name.as_bytes());
    names.push(0);
    at
}

pub fn symbol(name: u32, value: u32, size: u32, info: u8, shndx: u16) -> Symbol {
    Symbol {
        st_name: name,
        st_value: value,
        st_size: size,
        st_info: info,
        st_other: 0,
        st_shndx: shndx,
    }
}

/// A relocatable object shaped like `cc -m32 -c` output:
/// `.text`, `.data`, `.bss`, `.symtab`, `.strtab`, `.rel.text`.
pub fn relocatable_object() -> Vec<u8> {
    let mut writer = ObjectWriter::new(ET_REL);

    let mut text = SectionSpec::new(".text", SHT_PROGBITS, vec![0x55, 0x89, 0xe5, 0xe8, 0, 0, 0, 0, 0xc3]);
    text.flags = SHF_ALLOC | SHF_EXECINSTR;
    writer.add(text);

    let mut data = SectionSpec::new(".data", SHT_PROGBITS, 42u32.to_le_bytes().to_vec());
    data.flags = SHF_ALLOC | SHF_WRITE;
    writer.add(data);

    let mut bss = SectionSpec::new(".bss", SHT_NOBITS, Vec::new());
    bss.flags = SHF_ALLOC | SHF_WRITE;
    bss.nobits_size = 16;
    writer.add(bss);

    let strtab = b"\0demo.c\0main\0answer\0helper\0".to_vec();
    let symbols = [
        symbol(0, 0, 0, 0, 0),
        symbol(1, 0, 0, ((STB_LOCAL << 4) | STT_FILE) as u8, SHN_ABS as u16),
        symbol(8, 0, 9, ((STB_GLOBAL << 4) | STT_FUNC) as u8, 1),
        symbol(13, 0, 4, ((STB_GLOBAL << 4) | STT_OBJECT) as u8, 2),
        symbol(20, 0, 0, ((STB_GLOBAL << 4) | STT_NOTYPE) as u8, 0),
    ];
    let mut symtab = SectionSpec::new(
        ".symtab",
        SHT_SYMTAB,
        symbols.iter().flat_map(|s| s.encode()).collect(),
    );
    symtab.link = 5;
    symtab.entsize = Symbol::SIZE as u32;
    writer.add(symtab);
    writer.add(SectionSpec::new(".strtab", SHT_STRTAB, strtab));

    // R_386_PC32 against `helper` at the call site
    let mut rel_bytes = 4u32.to_le_bytes().to_vec();
    rel_bytes.extend_from_slice(&((4u32 << 8) | 2).to_le_bytes());
    let mut rel = SectionSpec::new(".rel.text", SHT_REL, rel_bytes);
    rel.link = 4;
    rel.entsize = 8;
    writer.add(rel);

    writer.finish()
}

/// A small dynamically linked executable: two `PT_LOAD` segments, the
/// second ending in `.bss`, plus a `.dynamic` table.
pub fn executable() -> Vec<u8> {
    let mut writer = ObjectWriter::new(ET_EXEC);

    let mut text = SectionSpec::new(".text", SHT_PROGBITS, (0u8..32).collect());
    text.flags = SHF_ALLOC | SHF_EXECINSTR;
    text.addr = 0x0804_8000;
    writer.add(text);

    let mut data = SectionSpec::new(".data", SHT_PROGBITS, vec![0xd0, 0xd1, 0xd2, 0xd3]);
    data.flags = SHF_ALLOC | SHF_WRITE;
    data.addr = 0x0804_9000;
    writer.add(data);

    let mut dynamic = Vec::new();
    for (tag, val) in [(DT_NEEDED, 1u32), (DT_HASH, 0x0804_8100), (DT_NULL, 0)] {
        dynamic.extend_from_slice(&tag.to_le_bytes());
        dynamic.extend_from_slice(&val.to_le_bytes());
    }
    let mut dynamic = SectionSpec::new(".dynamic", SHT_DYNAMIC, dynamic);
    dynamic.flags = SHF_ALLOC | SHF_WRITE;
    dynamic.addr = 0x0804_9004;
    dynamic.entsize = 8;
    writer.add(dynamic);

    let mut bss = SectionSpec::new(".bss", SHT_NOBITS, Vec::new());
    bss.flags = SHF_ALLOC | SHF_WRITE;
    bss.addr = 0x0804_901c;
    bss.nobits_size = 8;
    writer.add(bss);

    writer.load_segment(&[".text"], 0);
    writer.load_segment(&[".data", ".dynamic", ".bss"], 8);
    writer.finish()
}
