use std::io::Read;
use std::num::IntErrorKind;

use log::debug;

use crate::cpu::Register;
use crate::error::{LoadError, ParseError};
use crate::program::{Instruction, Operand, Program};

const CPY_USAGE: &str = "cpy SRC DEST";
const INC_USAGE: &str = "inc REG";
const DEC_USAGE: &str = "dec REG";
const JNZ_USAGE: &str = "jnz SRC OFFSET";

/// Parses one whitespace separated instruction line.
pub fn parse_instruction(line: &str) -> Result<Instruction, ParseError> {
    let mut tokens = line.split_whitespace();
    let mnemonic = tokens.next().ok_or(ParseError::EmptyLine)?;

    let (instr, usage) = match mnemonic {
        "cpy" => {
            let src = parse_operand(operand(&mut tokens, "cpy", CPY_USAGE)?)?;
            let dest = parse_register(operand(&mut tokens, "cpy", CPY_USAGE)?)?;
            (Instruction::Copy { src, dest }, CPY_USAGE)
        }
        "inc" => {
            let reg = parse_register(operand(&mut tokens, "inc", INC_USAGE)?)?;
            (Instruction::Increment(reg), INC_USAGE)
        }
        "dec" => {
            let reg = parse_register(operand(&mut tokens, "dec", DEC_USAGE)?)?;
            (Instruction::Decrement(reg), DEC_USAGE)
        }
        "jnz" => {
            let src = parse_operand(operand(&mut tokens, "jnz", JNZ_USAGE)?)?;
            let offset = parse_offset(operand(&mut tokens, "jnz", JNZ_USAGE)?)?;
            (Instruction::JumpIfNotZero { src, offset }, JNZ_USAGE)
        }
        other => return Err(ParseError::UnknownInstruction(other.to_string())),
    };

    match tokens.next() {
        Some(token) => Err(ParseError::UnexpectedToken {
            token: token.to_string(),
            usage,
        }),
        None => Ok(instr),
    }
}

/// Parses a whole program, one instruction per line. Blank lines are only
/// tolerated at the very end of the input.
pub fn parse_program(source: &str) -> Result<Program, LoadError> {
    let program = source
        .trim_end()
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse_instruction(line).map_err(|source| LoadError::Parse {
                line: index + 1,
                source,
            })
        })
        .collect::<Result<Program, _>>()?;

    debug!("parsed program with {} instructions", program.len());
    Ok(program)
}

pub fn read_program<R: Read>(mut reader: R) -> Result<Program, LoadError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_program(&source)
}

fn operand<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    mnemonic: &'static str,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    tokens
        .next()
        .ok_or(ParseError::MissingOperand { mnemonic, usage })
}

fn parse_register(token: &str) -> Result<Register, ParseError> {
    Register::from_name(token).ok_or_else(|| ParseError::InvalidRegister(token.to_string()))
}

// Anything that reads as a number is a literal, never a register.
fn parse_operand(token: &str) -> Result<Operand, ParseError> {
    match token.parse::<i32>() {
        Ok(value) => Ok(Operand::Literal(value)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(ParseError::LiteralOutOfRange(token.to_string()))
        }
        Err(_) => parse_register(token).map(Operand::Register),
    }
}

fn parse_offset(token: &str) -> Result<isize, ParseError> {
    token
        .parse::<isize>()
        .map_err(|_| ParseError::MalformedOffset(token.to_string()))
}
