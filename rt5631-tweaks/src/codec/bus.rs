//! Primary register access.
//!
//! [`RegisterBus`] is the seam between this crate and whatever carries
//! register traffic to the chip. [`I2cBus`] implements it over an
//! [`embedded_hal::i2c::I2c`] bus using the RT5631 control-port format:
//! one address byte followed by a big-endian 16-bit value.

use core::fmt::Debug;

use embedded_hal::i2c::I2c;

use super::registers as reg;

/// Read/write access to the primary 16-bit register space.
pub trait RegisterBus {
    /// Error reported by a failed transaction.
    type Error: Debug;

    /// Read a 16-bit register.
    fn read(&mut self, register: u8) -> Result<u16, Self::Error>;

    /// Write a 16-bit register.
    fn write(&mut self, register: u8, value: u16) -> Result<(), Self::Error>;
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    type Error = B::Error;

    fn read(&mut self, register: u8) -> Result<u16, Self::Error> {
        (**self).read(register)
    }

    fn write(&mut self, register: u8, value: u16) -> Result<(), Self::Error> {
        (**self).write(register, value)
    }
}

/// RT5631 control port on an I2C bus.
pub struct I2cBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cBus<I2C> {
    /// Default 7-bit address.
    pub const DEFAULT_ADDRESS: u8 = reg::I2C_ADDR;

    /// Create a bus talking to the default address (0x1A).
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, Self::DEFAULT_ADDRESS)
    }

    /// Create a bus talking to a specific 7-bit address.
    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Consume the bus and return the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cBus<I2C> {
    type Error = I2C::Error;

    fn read(&mut self, register: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write(&mut self, register: u8, value: u16) -> Result<(), Self::Error> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c.write(self.address, &[register, hi, lo])
    }
}
