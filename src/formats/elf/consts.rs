//! ELF constants and their name registrations.
//!
//! Each category has a registration list of `(name, value)` pairs in the
//! order the names are registered. The lists feed the display tables in
//! [`names`](super::names); where two names share a value the later entry is
//! the one rendered.

/// Identification
pub const ELFMAG: &[u8; 4] = b"\x7fELF";
pub const EI_NIDENT: usize = 16;
pub const EI_CLASS: usize = 4;
pub const EI_DATA: usize = 5;
pub const EI_VERSION: usize = 6;
pub const EI_OSABI: usize = 7;
pub const EI_ABIVERSION: usize = 8;

pub const ELFCLASSNONE: u8 = 0;
pub const ELFCLASS32: u8 = 1;
pub const ELFCLASS64: u8 = 2;

pub const ELFDATANONE: u8 = 0;
pub const ELFDATA2LSB: u8 = 1;
pub const ELFDATA2MSB: u8 = 2;

pub const EV_NONE: u8 = 0;
pub const EV_CURRENT: u8 = 1;

/// File types
pub const ET_NONE: u32 = 0;
pub const ET_REL: u32 = 1;
pub const ET_EXEC: u32 = 2;
pub const ET_DYN: u32 = 3;
pub const ET_CORE: u32 = 4;
pub const ET_LOOS: u32 = 0xfe00;
pub const ET_HIOS: u32 = 0xfeff;
pub const ET_LOPROC: u32 = 0xff00;
pub const ET_HIPROC: u32 = 0xffff;

pub static FILE_TYPE_NAMES: &[(&str, u32)] = &[
    ("ET_NONE", ET_NONE),
    ("ET_REL", ET_REL),
    ("ET_EXEC", ET_EXEC),
    ("ET_DYN", ET_DYN),
    ("ET_CORE", ET_CORE),
    ("ET_LOOS", ET_LOOS),
    ("ET_HIOS", ET_HIOS),
    ("ET_LOPROC", ET_LOPROC),
    ("ET_HIPROC", ET_HIPROC),
];

/// Machine types
pub const EM_NONE: u32 = 0;
pub const EM_M32: u32 = 1;
pub const EM_SPARC: u32 = 2;
pub const EM_386: u32 = 3;
pub const EM_68K: u32 = 4;
pub const EM_88K: u32 = 5;
pub const EM_IAMCU: u32 = 6;
pub const EM_860: u32 = 7;
pub const EM_MIPS: u32 = 8;
pub const EM_S370: u32 = 9;
pub const EM_PARISC: u32 = 15;
pub const EM_960: u32 = 19;
pub const EM_PPC: u32 = 20;
pub const EM_PPC64: u32 = 21;
pub const EM_S390: u32 = 22;
pub const EM_V800: u32 = 36;
pub const EM_FR20: u32 = 37;
pub const EM_RH32: u32 = 38;
pub const EM_RCE: u32 = 39;
pub const EM_ARM: u32 = 40;
pub const EM_SH: u32 = 42;
pub const EM_SPARCV9: u32 = 43;
pub const EM_TRICORE: u32 = 44;
pub const EM_ARC: u32 = 45;
pub const EM_H8_300: u32 = 46;
pub const EM_IA_64: u32 = 50;
pub const EM_MIPS_X: u32 = 51;
pub const EM_COLDFIRE: u32 = 52;
pub const EM_68HC12: u32 = 53;
pub const EM_X86_64: u32 = 62;
pub const EM_AVR: u32 = 83;
pub const EM_MSP430: u32 = 105;
pub const EM_BLACKFIN: u32 = 106;
pub const EM_XTENSA: u32 = 94;
pub const EM_AARCH64: u32 = 183;
pub const EM_RISCV: u32 = 243;

pub static MACHINE_NAMES: &[(&str, u32)] = &[
    ("EM_NONE", EM_NONE),
    ("EM_M32", EM_M32),
    ("EM_SPARC", EM_SPARC),
    ("EM_386", EM_386),
    ("EM_68K", EM_68K),
    ("EM_88K", EM_88K),
    ("EM_IAMCU", EM_IAMCU),
    ("EM_860", EM_860),
    ("EM_MIPS", EM_MIPS),
    ("EM_S370", EM_S370),
    ("EM_PARISC", EM_PARISC),
    ("EM_960", EM_960),
    ("EM_PPC", EM_PPC),
    ("EM_PPC64", EM_PPC64),
    ("EM_S390", EM_S390),
    ("EM_V800", EM_V800),
    ("EM_FR20", EM_FR20),
    ("EM_RH32", EM_RH32),
    ("EM_RCE", EM_RCE),
    ("EM_ARM", EM_ARM),
    ("EM_SH", EM_SH),
    ("EM_SPARCV9", EM_SPARCV9),
    ("EM_TRICORE", EM_TRICORE),
    ("EM_ARC", EM_ARC),
    ("EM_H8_300", EM_H8_300),
    ("EM_IA_64", EM_IA_64),
    ("EM_MIPS_X", EM_MIPS_X),
    ("EM_COLDFIRE", EM_COLDFIRE),
    ("EM_68HC12", EM_68HC12),
    ("EM_X86_64", EM_X86_64),
    ("EM_AVR", EM_AVR),
    ("EM_XTENSA", EM_XTENSA),
    ("EM_MSP430", EM_MSP430),
    ("EM_BLACKFIN", EM_BLACKFIN),
    ("EM_AARCH64", EM_AARCH64),
    ("EM_RISCV", EM_RISCV),
];

/// Section types
pub const SHT_NULL: u32 = 0;
pub const SHT_PROGBITS: u32 = 1;
pub const SHT_SYMTAB: u32 = 2;
pub const SHT_STRTAB: u32 = 3;
pub const SHT_RELA: u32 = 4;
pub const SHT_HASH: u32 = 5;
pub const SHT_DYNAMIC: u32 = 6;
pub const SHT_NOTE: u32 = 7;
pub const SHT_NOBITS: u32 = 8;
pub const SHT_REL: u32 = 9;
pub const SHT_SHLIB: u32 = 10;
pub const SHT_DYNSYM: u32 = 11;
pub const SHT_INIT_ARRAY: u32 = 14;
pub const SHT_FINI_ARRAY: u32 = 15;
pub const SHT_PREINIT_ARRAY: u32 = 16;
pub const SHT_GROUP: u32 = 17;
pub const SHT_SYMTAB_SHNDX: u32 = 18;
pub const SHT_LOOS: u32 = 0x6000_0000;
pub const SHT_GNU_HASH: u32 = 0x6fff_fff6;
pub const SHT_GNU_VERDEF: u32 = 0x6fff_fffd;
pub const SHT_GNU_VERNEED: u32 = 0x6fff_fffe;
pub const SHT_GNU_VERSYM: u32 = 0x6fff_ffff;
pub const SHT_HIOS: u32 = 0x6fff_ffff;
pub const SHT_LOPROC: u32 = 0x7000_0000;
pub const SHT_HIPROC: u32 = 0x7fff_ffff;
pub const SHT_LOUSER: u32 = 0x8000_0000;
pub const SHT_HIUSER: u32 = 0x8fff_ffff;

pub static SECTION_TYPE_NAMES: &[(&str, u32)] = &[
    ("SHT_NULL", SHT_NULL),
    ("SHT_PROGBITS", SHT_PROGBITS),
    ("SHT_SYMTAB", SHT_SYMTAB),
    ("SHT_STRTAB", SHT_STRTAB),
    ("SHT_RELA", SHT_RELA),
    ("SHT_HASH", SHT_HASH),
    ("SHT_DYNAMIC", SHT_DYNAMIC),
    ("SHT_NOTE", SHT_NOTE),
    ("SHT_NOBITS", SHT_NOBITS),
    ("SHT_REL", SHT_REL),
    ("SHT_SHLIB", SHT_SHLIB),
    ("SHT_DYNSYM", SHT_DYNSYM),
    ("SHT_INIT_ARRAY", SHT_INIT_ARRAY),
    ("SHT_FINI_ARRAY", SHT_FINI_ARRAY),
    ("SHT_PREINIT_ARRAY", SHT_PREINIT_ARRAY),
    ("SHT_GROUP", SHT_GROUP),
    ("SHT_SYMTAB_SHNDX", SHT_SYMTAB_SHNDX),
    ("SHT_LOOS", SHT_LOOS),
    ("SHT_GNU_HASH", SHT_GNU_HASH),
    ("SHT_GNU_VERDEF", SHT_GNU_VERDEF),
    ("SHT_GNU_VERNEED", SHT_GNU_VERNEED),
    ("SHT_HIOS", SHT_HIOS),
    ("SHT_GNU_VERSYM", SHT_GNU_VERSYM),
    ("SHT_LOPROC", SHT_LOPROC),
    ("SHT_HIPROC", SHT_HIPROC),
    ("SHT_LOUSER", SHT_LOUSER),
    ("SHT_HIUSER", SHT_HIUSER),
];

/// Section flags
pub const SHF_WRITE: u32 = 0x1;
pub const SHF_ALLOC: u32 = 0x2;
pub const SHF_EXECINSTR: u32 = 0x4;
pub const SHF_MERGE: u32 = 0x10;
pub const SHF_STRINGS: u32 = 0x20;
pub const SHF_INFO_LINK: u32 = 0x40;
pub const SHF_LINK_ORDER: u32 = 0x80;
pub const SHF_OS_NONCONFORMING: u32 = 0x100;
pub const SHF_GROUP: u32 = 0x200;
pub const SHF_TLS: u32 = 0x400;
pub const SHF_MASKOS: u32 = 0x0ff0_0000;
pub const SHF_MASKPROC: u32 = 0xf000_0000;

pub static SECTION_FLAG_NAMES: &[(&str, u32)] = &[
    ("SHF_WRITE", SHF_WRITE),
    ("SHF_ALLOC", SHF_ALLOC),
    ("SHF_EXECINSTR", SHF_EXECINSTR),
    ("SHF_MERGE", SHF_MERGE),
    ("SHF_STRINGS", SHF_STRINGS),
    ("SHF_INFO_LINK", SHF_INFO_LINK),
    ("SHF_LINK_ORDER", SHF_LINK_ORDER),
    ("SHF_OS_NONCONFORMING", SHF_OS_NONCONFORMING),
    ("SHF_GROUP", SHF_GROUP),
    ("SHF_TLS", SHF_TLS),
    ("SHF_MASKOS", SHF_MASKOS),
    ("SHF_MASKPROC", SHF_MASKPROC),
];

/// Special section indices
pub const SHN_UNDEF: u32 = 0;
pub const SHN_LORESERVE: u32 = 0xff00;
pub const SHN_ABS: u32 = 0xfff1;
pub const SHN_COMMON: u32 = 0xfff2;
pub const SHN_XINDEX: u32 = 0xffff;

/// Segment types
pub const PT_NULL: u32 = 0;
pub const PT_LOAD: u32 = 1;
pub const PT_DYNAMIC: u32 = 2;
pub const PT_INTERP: u32 = 3;
pub const PT_NOTE: u32 = 4;
pub const PT_SHLIB: u32 = 5;
pub const PT_PHDR: u32 = 6;
pub const PT_TLS: u32 = 7;
pub const PT_LOOS: u32 = 0x6000_0000;
pub const PT_GNU_EH_FRAME: u32 = 0x6474_e550;
pub const PT_GNU_STACK: u32 = 0x6474_e551;
pub const PT_GNU_RELRO: u32 = 0x6474_e552;
pub const PT_LOSUNW: u32 = 0x6fff_fffa;
pub const PT_SUNWBSS: u32 = 0x6fff_fffa;
pub const PT_SUNWSTACK: u32 = 0x6fff_fffb;
pub const PT_HIOS: u32 = 0x6fff_ffff;
pub const PT_HISUNW: u32 = 0x6fff_ffff;
pub const PT_LOPROC: u32 = 0x7000_0000;
pub const PT_HIPROC: u32 = 0x7fff_ffff;

pub static SEGMENT_TYPE_NAMES: &[(&str, u32)] = &[
    ("PT_NULL", PT_NULL),
    ("PT_LOAD", PT_LOAD),
    ("PT_DYNAMIC", PT_DYNAMIC),
    ("PT_INTERP", PT_INTERP),
    ("PT_NOTE", PT_NOTE),
    ("PT_SHLIB", PT_SHLIB),
    ("PT_PHDR", PT_PHDR),
    ("PT_TLS", PT_TLS),
    ("PT_LOOS", PT_LOOS),
    ("PT_GNU_EH_FRAME", PT_GNU_EH_FRAME),
    ("PT_GNU_STACK", PT_GNU_STACK),
    ("PT_GNU_RELRO", PT_GNU_RELRO),
    ("PT_LOSUNW", PT_LOSUNW),
    ("PT_SUNWBSS", PT_SUNWBSS),
    ("PT_SUNWSTACK", PT_SUNWSTACK),
    ("PT_HIOS", PT_HIOS),
    ("PT_HISUNW", PT_HISUNW),
    ("PT_LOPROC", PT_LOPROC),
    ("PT_HIPROC", PT_HIPROC),
];

/// Segment flags
pub const PF_X: u32 = 0x1;
pub const PF_W: u32 = 0x2;
pub const PF_R: u32 = 0x4;
pub const PF_MASKOS: u32 = 0x0ff0_0000;
pub const PF_MASKPROC: u32 = 0xf000_0000;

pub static SEGMENT_FLAG_NAMES: &[(&str, u32)] = &[
    ("PF_X", PF_X),
    ("PF_W", PF_W),
    ("PF_R", PF_R),
    ("PF_MASKOS", PF_MASKOS),
    ("PF_MASKPROC", PF_MASKPROC),
];

/// Dynamic tags
pub const DT_NULL: u32 = 0;
pub const DT_NEEDED: u32 = 1;
pub const DT_PLTRELSZ: u32 = 2;
pub const DT_PLTGOT: u32 = 3;
pub const DT_HASH: u32 = 4;
pub const DT_STRTAB: u32 = 5;
pub const DT_SYMTAB: u32 = 6;
pub const DT_RELA: u32 = 7;
pub const DT_RELASZ: u32 = 8;
pub const DT_RELAENT: u32 = 9;
pub const DT_STRSZ: u32 = 10;
pub const DT_SYMENT: u32 = 11;
pub const DT_INIT: u32 = 12;
pub const DT_FINI: u32 = 13;
pub const DT_SONAME: u32 = 14;
pub const DT_RPATH: u32 = 15;
pub const DT_SYMBOLIC: u32 = 16;
pub const DT_REL: u32 = 17;
pub const DT_RELSZ: u32 = 18;
pub const DT_RELENT: u32 = 19;
pub const DT_PLTREL: u32 = 20;
pub const DT_DEBUG: u32 = 21;
pub const DT_TEXTREL: u32 = 22;
pub const DT_JMPREL: u32 = 23;
pub const DT_BIND_NOW: u32 = 24;
pub const DT_INIT_ARRAY: u32 = 25;
pub const DT_FINI_ARRAY: u32 = 26;
pub const DT_INIT_ARRAYSZ: u32 = 27;
pub const DT_FINI_ARRAYSZ: u32 = 28;
pub const DT_RUNPATH: u32 = 29;
pub const DT_FLAGS: u32 = 30;
pub const DT_ENCODING: u32 = 32;
pub const DT_PREINIT_ARRAY: u32 = 32;
pub const DT_PREINIT_ARRAYSZ: u32 = 33;
pub const DT_LOOS: u32 = 0x6000_000d;
pub const DT_HIOS: u32 = 0x6fff_f000;
pub const DT_GNU_HASH: u32 = 0x6fff_fef5;
pub const DT_VERSYM: u32 = 0x6fff_fff0;
pub const DT_RELACOUNT: u32 = 0x6fff_fff9;
pub const DT_RELCOUNT: u32 = 0x6fff_fffa;
pub const DT_FLAGS_1: u32 = 0x6fff_fffb;
pub const DT_VERDEF: u32 = 0x6fff_fffc;
pub const DT_VERDEFNUM: u32 = 0x6fff_fffd;
pub const DT_VERNEED: u32 = 0x6fff_fffe;
pub const DT_VERNEEDNUM: u32 = 0x6fff_ffff;
pub const DT_LOPROC: u32 = 0x7000_0000;
pub const DT_HIPROC: u32 = 0x7fff_ffff;

pub static DYNAMIC_TAG_NAMES: &[(&str, u32)] = &[
    ("DT_NULL", DT_NULL),
    ("DT_NEEDED", DT_NEEDED),
    ("DT_PLTRELSZ", DT_PLTRELSZ),
    ("DT_PLTGOT", DT_PLTGOT),
    ("DT_HASH", DT_HASH),
    ("DT_STRTAB", DT_STRTAB),
    ("DT_SYMTAB", DT_SYMTAB),
    ("DT_RELA", DT_RELA),
    ("DT_RELASZ", DT_RELASZ),
    ("DT_RELAENT", DT_RELAENT),
    ("DT_STRSZ", DT_STRSZ),
    ("DT_SYMENT", DT_SYMENT),
    ("DT_INIT", DT_INIT),
    ("DT_FINI", DT_FINI),
    ("DT_SONAME", DT_SONAME),
    ("DT_RPATH", DT_RPATH),
    ("DT_SYMBOLIC", DT_SYMBOLIC),
    ("DT_REL", DT_REL),
    ("DT_RELSZ", DT_RELSZ),
    ("DT_RELENT", DT_RELENT),
    ("DT_PLTREL", DT_PLTREL),
    ("DT_DEBUG", DT_DEBUG),
    ("DT_TEXTREL", DT_TEXTREL),
    ("DT_JMPREL", DT_JMPREL),
    ("DT_BIND_NOW", DT_BIND_NOW),
    ("DT_INIT_ARRAY", DT_INIT_ARRAY),
    ("DT_FINI_ARRAY", DT_FINI_ARRAY),
    ("DT_INIT_ARRAYSZ", DT_INIT_ARRAYSZ),
    ("DT_FINI_ARRAYSZ", DT_FINI_ARRAYSZ),
    ("DT_RUNPATH", DT_RUNPATH),
    ("DT_FLAGS", DT_FLAGS),
    ("DT_ENCODING", DT_ENCODING),
    ("DT_PREINIT_ARRAY", DT_PREINIT_ARRAY),
    ("DT_PREINIT_ARRAYSZ", DT_PREINIT_ARRAYSZ),
    ("DT_LOOS", DT_LOOS),
    ("DT_HIOS", DT_HIOS),
    ("DT_GNU_HASH", DT_GNU_HASH),
    ("DT_VERSYM", DT_VERSYM),
    ("DT_RELACOUNT", DT_RELACOUNT),
    ("DT_RELCOUNT", DT_RELCOUNT),
    ("DT_FLAGS_1", DT_FLAGS_1),
    ("DT_VERDEF", DT_VERDEF),
    ("DT_VERDEFNUM", DT_VERDEFNUM),
    ("DT_VERNEED", DT_VERNEED),
    ("DT_VERNEEDNUM", DT_VERNEEDNUM),
    ("DT_LOPROC", DT_LOPROC),
    ("DT_HIPROC", DT_HIPROC),
];

/// Symbol types
pub const STT_NOTYPE: u32 = 0;
pub const STT_OBJECT: u32 = 1;
pub const STT_FUNC: u32 = 2;
pub const STT_SECTION: u32 = 3;
pub const STT_FILE: u32 = 4;
pub const STT_COMMON: u32 = 5;
pub const STT_TLS: u32 = 6;
pub const STT_LOOS: u32 = 10;
pub const STT_HIOS: u32 = 12;
pub const STT_LOPROC: u32 = 13;
pub const STT_HIPROC: u32 = 15;

pub static SYMBOL_TYPE_NAMES: &[(&str, u32)] = &[
    ("STT_NOTYPE", STT_NOTYPE),
    ("STT_OBJECT", STT_OBJECT),
    ("STT_FUNC", STT_FUNC),
    ("STT_SECTION", STT_SECTION),
    ("STT_FILE", STT_FILE),
    ("STT_COMMON", STT_COMMON),
    ("STT_TLS", STT_TLS),
    ("STT_LOOS", STT_LOOS),
    ("STT_HIOS", STT_HIOS),
    ("STT_LOPROC", STT_LOPROC),
    ("STT_HIPROC", STT_HIPROC),
];

/// Symbol bindings
pub const STB_LOCAL: u32 = 0;
pub const STB_GLOBAL: u32 = 1;
pub const STB_WEAK: u32 = 2;
pub const STB_LOOS: u32 = 10;
pub const STB_HIOS: u32 = 12;
pub const STB_LOPROC: u32 = 13;
pub const STB_HIPROC: u32 = 15;

pub static SYMBOL_BINDING_NAMES: &[(&str, u32)] = &[
    ("STB_LOCAL", STB_LOCAL),
    ("STB_GLOBAL", STB_GLOBAL),
    ("STB_WEAK", STB_WEAK),
    ("STB_LOOS", STB_LOOS),
    ("STB_HIOS", STB_HIOS),
    ("STB_LOPROC", STB_LOPROC),
    ("STB_HIPROC", STB_HIPROC),
];

/// Symbol visibility
pub const STV_DEFAULT: u32 = 0;
pub const STV_INTERNAL: u32 = 1;
pub const STV_HIDDEN: u32 = 2;
pub const STV_PROTECTED: u32 = 3;

pub static SYMBOL_VISIBILITY_NAMES: &[(&str, u32)] = &[
    ("STV_DEFAULT", STV_DEFAULT),
    ("STV_INTERNAL", STV_INTERNAL),
    ("STV_HIDDEN", STV_HIDDEN),
    ("STV_PROTECTED", STV_PROTECTED),
];
