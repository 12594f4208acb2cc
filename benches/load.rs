use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use elfscope::formats::elf::consts::*;
use elfscope::formats::elf::{ElfHeader, ProgramHeader, Record, SectionHeader, Symbol};
use elfscope::ElfImage;
use std::hint::black_box;

const SYMBOLS: usize = 4096;
const TEXT_SIZE: usize = 64 * 1024;

fn section(name: u32, sh_type: u32, offset: usize, size: usize, link: u32, entsize: u32) -> SectionHeader {
    SectionHeader {
        sh_name: name,
        sh_type,
        sh_flags: 0,
        sh_addr: 0,
        sh_offset: offset as u32,
        sh_size: size as u32,
        sh_link: link,
        sh_info: 0,
        sh_addralign: 4,
        sh_entsize: entsize,
    }
}

/// An executable with one large `.text`, a symbol table of `SYMBOLS`
/// functions and a matching `.rel.text`.
fn synthetic_image() -> Vec<u8> {
    let mut file = vec![0u8; ElfHeader::SIZE + ProgramHeader::SIZE];

    let text_off = file.len();
    file.extend((0..TEXT_SIZE).map(|i| i as u8));

    let mut strtab = vec![0u8];
    let mut symtab = Vec::new();
    let mut rels = Vec::new();
    for i in 0..SYMBOLS {
        let name = strtab.len() as u32;
        strtab.extend_from_slice(format!("func_{i}\0").as_bytes());
        let symbol = Symbol {
            st_name: name,
            st_value: 0x1000 + (i as u32) * 16,
            st_size: 16,
            st_info: ((STB_GLOBAL << 4) | STT_FUNC) as u8,
            st_other: 0,
            st_shndx: 1,
        };
        symtab.extend(symbol.encode());
        rels.extend_from_slice(&((i as u32) * 16).to_le_bytes());
        rels.extend_from_slice(&(((i as u32) << 8) | 2).to_le_bytes());
    }

    let symtab_off = file.len();
    file.extend_from_slice(&symtab);
    let strtab_off = file.len();
    file.extend_from_slice(&strtab);
    let rel_off = file.len();
    file.extend_from_slice(&rels);

    let names = b"\0.text\0.symtab\0.strtab\0.rel.text\0.shstrtab\0";
    let names_off = file.len();
    file.extend_from_slice(names);
    while file.len() % 4 != 0 {
        file.push(0);
    }

    let headers = [
        section(0, SHT_NULL, 0, 0, 0, 0),
        section(1, SHT_PROGBITS, text_off, TEXT_SIZE, 0, 0),
        section(7, SHT_SYMTAB, symtab_off, symtab.len(), 3, Symbol::SIZE as u32),
        section(15, SHT_STRTAB, strtab_off, strtab.len(), 0, 0),
        section(23, SHT_REL, rel_off, rels.len(), 2, 8),
        section(33, SHT_STRTAB, names_off, names.len(), 0, 0),
    ];
    let shoff = file.len();
    for header in &headers {
        file.extend(header.encode());
    }

    let load = ProgramHeader {
        p_type: PT_LOAD,
        p_offset: text_off as u32,
        p_vaddr: 0x1000,
        p_paddr: 0x1000,
        p_filesz: TEXT_SIZE as u32,
        p_memsz: TEXT_SIZE as u32,
        p_flags: PF_R | PF_X,
        p_align: 0x1000,
    };
    file[ElfHeader::SIZE..ElfHeader::SIZE + ProgramHeader::SIZE].copy_from_slice(&load.encode());

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
        e_phoff: ElfHeader::SIZE as u32,
        e_shoff: shoff as u32,
        e_flags: 0,
        e_ehsize: ElfHeader::SIZE as u16,
        e_phentsize: ProgramHeader::SIZE as u16,
        e_phnum: 1,
        e_shentsize: SectionHeader::SIZE as u16,
        e_shnum: headers.len() as u16,
        e_shstrndx: (headers.len() - 1) as u16,
    };
    file[..ElfHeader::SIZE].copy_from_slice(&header.encode());
    file
}

fn bench_load(c: &mut Criterion) {
    let data = synthetic_image();
    let mut group = c.benchmark_group("load");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("parse", |b| {
        b.iter(|| ElfImage::parse(black_box(data.as_slice())))
    });
    group.finish();

    let image = match ElfImage::parse(data) {
        Ok(image) => image,
        Err(_) => return,
    };
    let mut group = c.benchmark_group("queries");
    group.bench_function("symbol_by_name", |b| {
        b.iter(|| image.symbol_by_name(black_box("func_4000")).map(|s| s.value()))
    });
    group.bench_function("memory_read_4k", |b| {
        b.iter(|| image.memory().read(black_box(0x2000), black_box(0x3000)))
    });
    group.finish();
}

criterion_group!(benches, bench_load);
criterion_main!(benches);
