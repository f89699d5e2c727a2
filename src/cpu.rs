use std::fmt::Display;

use crate::registers::{Addressable, Registers};

/// One of the four named storage cells of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl Register {
    pub const ALL: [Register; 4] = [Register::A, Register::B, Register::C, Register::D];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cpu {
    pub registers: Registers, // The four general purpose registers
    pub ip: isize,            // The instruction pointer
    pub halt: bool,           // Set once the pointer leaves the program
}

impl Display for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cpu [ a: {}, b: {}, c: {}, d: {}, ip: {}, halt: {} ]",
            self.registers.read(Register::A),
            self.registers.read(Register::B),
            self.registers.read(Register::C),
            self.registers.read(Register::D),
            self.ip,
            self.halt
        )
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::default()
    }
}
