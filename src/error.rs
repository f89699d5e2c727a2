use std::io;

use thiserror::Error;

/// Why a single program line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown instruction `{0}`, expected one of `cpy`, `inc`, `dec`, `jnz`")]
    UnknownInstruction(String),

    #[error("invalid register `{0}`, expected one of `a`, `b`, `c`, `d`")]
    InvalidRegister(String),

    #[error("literal `{0}` does not fit a 32-bit register")]
    LiteralOutOfRange(String),

    #[error("malformed jump offset `{0}`, expected a signed integer")]
    MalformedOffset(String),

    #[error("`{mnemonic}` is missing an operand, expected `{usage}`")]
    MissingOperand {
        mnemonic: &'static str,
        usage: &'static str,
    },

    #[error("unexpected token `{token}`, expected `{usage}`")]
    UnexpectedToken { token: String, usage: &'static str },

    #[error("empty line, expected an instruction")]
    EmptyLine,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("unable to build the floor cache: {0}")]
    Cache(String),
}
