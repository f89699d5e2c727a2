pub mod cpu;
pub mod error;
pub mod maze;
pub mod parser;
pub mod program;
pub mod registers;
pub mod search;

use std::io::Read;

use cpu::{Cpu, Register};
use error::LoadError;
use log::{debug, info};
use program::{Instruction, Program};
use registers::{Addressable, Registers};

pub struct EmulationEngine<'p> {
    pub(crate) cpu: Cpu,
    program: &'p Program,
    executed: u64,
}

impl<'p> EmulationEngine<'p> {
    pub fn new(program: &'p Program) -> Self {
        let mut cpu = Cpu::new();
        cpu.halt = program.is_empty();
        Self {
            cpu,
            program,
            executed: 0,
        }
    }

    /// Seeds a register before the run starts.
    pub fn set_register(&mut self, register: Register, value: i32) {
        self.cpu.registers.write(register, value);
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn registers(&self) -> &Registers {
        &self.cpu.registers
    }

    /// Number of instructions executed so far.
    pub fn executed(&self) -> u64 {
        self.executed
    }

    fn fetch(&self) -> Option<Instruction> {
        usize::try_from(self.cpu.ip)
            .ok()
            .and_then(|ip| self.program.get(ip))
            .copied()
    }

    fn debug_state(&self, instr: Instruction) {
        debug!(
            "State: IP: {:#4}, A: {:#4}, B: {:#4}, C: {:#4}, D: {:#4} | {}",
            self.cpu.ip,
            self.cpu.registers.read(Register::A),
            self.cpu.registers.read(Register::B),
            self.cpu.registers.read(Register::C),
            self.cpu.registers.read(Register::D),
            instr
        );
    }

    /// Applies `instr` and returns the next instruction pointer.
    fn execute(&mut self, instr: Instruction) -> isize {
        let ip = self.cpu.ip;
        let regs = &mut self.cpu.registers;

        match instr {
            Instruction::Copy { src, dest } => {
                let value = src.resolve(regs);
                regs.write(dest, value);
            }
            Instruction::Increment(reg) => regs.update(reg, |v| v.wrapping_add(1)),
            Instruction::Decrement(reg) => regs.update(reg, |v| v.wrapping_sub(1)),
            Instruction::JumpIfNotZero { src, offset } => {
                if src.resolve(regs) != 0 {
                    return ip.saturating_add(offset);
                }
            }
        }

        ip + 1
    }

    /// Runs a single fetch-decode-execute cycle. Returns `false` once the
    /// instruction pointer has left the program.
    pub fn step(&mut self) -> bool {
        if self.cpu.halt {
            return false;
        }

        let instr = match self.fetch() {
            Some(instr) => instr,
            None => {
                self.cpu.halt = true;
                return false;
            }
        };

        self.cpu.ip = self.execute(instr);
        self.executed += 1;
        self.debug_state(instr);

        if self.fetch().is_none() {
            self.cpu.halt = true;
        }

        !self.cpu.halt
    }

    /// Runs until the instruction pointer leaves the program. A program that
    /// never does so runs forever.
    pub fn main_loop(&mut self) -> &Registers {
        while self.step() {}

        info!("{} after {} instructions", self.cpu, self.executed);
        &self.cpu.registers
    }
}

/// Loads a program from `input` and runs it twice, the second time with
/// register `c` seeded with `part_b_c`. The whole program is parsed before
/// anything runs, so a malformed line yields an error and no report.
pub fn run_report<R: Read>(input: R, part_b_c: i32, dump: bool) -> Result<String, LoadError> {
    let program = parser::read_program(input)?;
    let mut report = String::new();

    if dump {
        report.push_str(&program.to_string());
    }

    report.push_str("======== part a ==========\n");
    let mut vm = EmulationEngine::new(&program);
    report.push_str(&vm.main_loop().to_string());

    report.push_str("======== part b ==========\n");
    let mut vm = EmulationEngine::new(&program);
    vm.set_register(Register::C, part_b_c);
    report.push_str(&vm.main_loop().to_string());

    Ok(report)
}
