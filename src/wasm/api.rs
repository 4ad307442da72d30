//! WASM API for the LS-8 emulator.
//!
//! Provides JavaScript-callable interfaces for loading programs, CPU control,
//! state inspection and disassembly.

use crate::disassembler::formatter::format_instruction;
use crate::{disassemble, parse_program, DisassemblyOptions, MemoryBus, Ram, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u8,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u8 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Ls8Emulator {
    cpu: CPU<Ram>,
    on_print: js_sys::Function,
    image: Vec<u8>,
}

#[wasm_bindgen]
impl Ls8Emulator {
    /// Create a new emulator; `on_print` is called with every PRN value
    #[wasm_bindgen(constructor)]
    pub fn new(on_print: js_sys::Function) -> Self {
        let cpu = Self::build_cpu(Ram::new(), &on_print);

        Ls8Emulator {
            cpu,
            on_print,
            image: Vec::new(),
        }
    }

    fn build_cpu(memory: Ram, on_print: &js_sys::Function) -> CPU<Ram> {
        let mut cpu = CPU::new(memory);
        let callback = on_print.clone();
        cpu.set_print_callback(move |value| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from(value));
        });
        cpu
    }

    /// Parse a binary-literal program image and load it at address 0
    pub fn load_source(&mut self, source: &str) -> Result<(), JsError> {
        let bytes = parse_program(source).map_err(|e| JsError::new(&e.to_string()))?;
        self.load_bytes(&bytes)
    }

    /// Load raw program bytes at address 0
    pub fn load_bytes(&mut self, program: &[u8]) -> Result<(), JsError> {
        let memory = Ram::from_image(program).map_err(|e| JsError::new(&e.to_string()))?;
        self.cpu = Self::build_cpu(memory, &self.on_print);
        self.image = program.to_vec();
        Ok(())
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute up to `limit` instructions and return how many ran
    pub fn run_for_steps(&mut self, limit: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_steps(limit as u64)
            .map(|steps| steps as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Power-cycle the CPU with the last loaded program
    pub fn reset(&mut self) {
        let memory = Ram::from_image(&self.image).unwrap_or_default();
        self.cpu = Self::build_cpu(memory, &self.on_print);
    }

    // State getters
    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u8 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn fl(&self) -> u8 {
        self.cpu.fl()
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> f64 {
        self.cpu.steps() as f64 // u64 is not a JS number
    }

    /// All eight registers, R0 first
    pub fn registers(&self) -> Vec<u8> {
        self.cpu.registers().to_vec()
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u8) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u8, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy of the whole 256-byte memory
    pub fn memory_dump(&self) -> Vec<u8> {
        self.cpu.memory().as_slice().to_vec()
    }

    /// Disassemble the loaded program
    pub fn disassemble(&self) -> Vec<JsValue> {
        let options = DisassemblyOptions {
            start_address: 0,
            stop_at_halt: false,
        };

        disassemble(&self.image, options)
            .iter()
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                bytes.extend_from_slice(&instr.operand_bytes);

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(instr),
                })
            })
            .collect()
    }
}
