//! Fuzz target for the program loader.
//!
//! Feeds arbitrary text to the parser. Every accepted image must fit in
//! memory or be rejected with `ProgramTooLarge`.

#![no_main]

use ls8::{load_program, parse_program, LoadError, MemoryBus, RAM_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|source: &str| {
    let bytes = match parse_program(source) {
        Ok(bytes) => bytes,
        Err(LoadError::InvalidByte { line, .. }) => {
            assert!(line >= 1 && line <= source.lines().count());
            return;
        }
        Err(other) => panic!("parse_program returned {:?}", other),
    };

    match load_program(source) {
        Ok(ram) => {
            assert!(bytes.len() <= RAM_SIZE);
            for (addr, &byte) in bytes.iter().enumerate() {
                assert_eq!(ram.read(addr as u8), byte);
            }
        }
        Err(LoadError::ProgramTooLarge { len }) => {
            assert_eq!(len, bytes.len());
            assert!(len > RAM_SIZE);
        }
        Err(other) => panic!("load_program returned {:?}", other),
    }
});
