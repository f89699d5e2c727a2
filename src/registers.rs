use std::fmt::Display;

use crate::cpu::Register;

pub trait Addressable<A: Copy, T> {
    fn read(&self, address: A) -> T;
    fn write(&mut self, address: A, value: T);

    fn update(&mut self, address: A, f: impl FnOnce(T) -> T) {
        let value = self.read(address);
        self.write(address, f(value));
    }
}

pub const REGISTER_COUNT: usize = Register::ALL.len();

/// Register bank, indexed by [`Register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    data: [i32; REGISTER_COUNT],
}

impl Registers {
    pub fn iter(&self) -> impl Iterator<Item = (Register, i32)> + '_ {
        Register::ALL.into_iter().map(move |reg| (reg, self.read(reg)))
    }
}

impl Addressable<Register, i32> for Registers {
    fn read(&self, address: Register) -> i32 {
        self.data[address.index()]
    }

    fn write(&mut self, address: Register, value: i32) {
        self.data[address.index()] = value;
    }
}

/// One `<name> => <value>` line per register, in `a`, `b`, `c`, `d` order.
impl Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (reg, value) in self.iter() {
            writeln!(f, "{} => {}", reg, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_only_touch_one_cell() {
        let mut regs = Registers::default();
        regs.write(Register::C, 7);

        assert_eq!(regs.read(Register::A), 0);
        assert_eq!(regs.read(Register::B), 0);
        assert_eq!(regs.read(Register::C), 7);
        assert_eq!(regs.read(Register::D), 0);
    }

    #[test]
    fn update_applies_function() {
        let mut regs = Registers::default();
        regs.write(Register::D, i32::MAX);
        regs.update(Register::D, |v| v.wrapping_add(1));
        assert_eq!(regs.read(Register::D), i32::MIN);
    }

    #[test]
    fn dump_format() {
        let mut regs = Registers::default();
        regs.write(Register::A, 42);
        regs.write(Register::D, -3);
        assert_eq!(regs.to_string(), "a => 42\nb => 0\nc => 0\nd => -3\n");
    }
}
