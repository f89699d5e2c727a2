use std::fmt::Display;
use std::str::FromStr;

use crate::cpu::Register;
use crate::error::{LoadError, ParseError};
use crate::parser;
use crate::registers::{Addressable, Registers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Literal(i32),
    Register(Register),
}

impl Operand {
    pub fn resolve(self, registers: &Registers) -> i32 {
        match self {
            Operand::Literal(value) => value,
            Operand::Register(reg) => registers.read(reg),
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{}", value),
            Operand::Register(reg) => write!(f, "{}", reg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Copy { src: Operand, dest: Register }, // dest = src, IP += 1
    Increment(Register),                   // reg += 1, IP += 1
    Decrement(Register),                   // reg -= 1, IP += 1
    JumpIfNotZero { src: Operand, offset: isize }, // if src != 0 then IP += offset else IP += 1
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Copy { src, dest } => write!(f, "cpy {} {}", src, dest),
            Instruction::Increment(reg) => write!(f, "inc {}", reg),
            Instruction::Decrement(reg) => write!(f, "dec {}", reg),
            Instruction::JumpIfNotZero { src, offset } => write!(f, "jnz {} {}", src, offset),
        }
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_instruction(s)
    }
}

/// An immutable instruction list. Engines borrow it, so one program can back
/// several independent runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for instr in self.iter() {
            writeln!(f, "{}", instr)?;
        }
        Ok(())
    }
}

impl FromStr for Program {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_program(s)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_resolution() {
        let mut regs = Registers::default();
        regs.write(Register::B, 9);

        assert_eq!(Operand::Literal(-4).resolve(&regs), -4);
        assert_eq!(Operand::Register(Register::B).resolve(&regs), 9);
        assert_eq!(Operand::Register(Register::A).resolve(&regs), 0);
    }

    #[test]
    fn formatted_program_parses_back() {
        let program = Program::new(vec![
            Instruction::Copy {
                src: Operand::Literal(-17),
                dest: Register::D,
            },
            Instruction::Copy {
                src: Operand::Register(Register::D),
                dest: Register::A,
            },
            Instruction::Increment(Register::B),
            Instruction::Decrement(Register::C),
            Instruction::JumpIfNotZero {
                src: Operand::Register(Register::C),
                offset: -2,
            },
        ]);

        let text = program.to_string();
        assert_eq!(text, "cpy -17 d\ncpy d a\ninc b\ndec c\njnz c -2\n");
        assert_eq!(text.parse::<Program>().unwrap(), program);
    }
}
