//! # MAX30102 register map and driver
//!
//! This crate provides the register map of the Maxim MAX30102 pulse oximetry and heart-rate
//! sensor together with a platform-agnostic register-access driver.
//! The [datasheet](https://www.analog.com/en/products/max30102.html) provides all necessary information.
//! This driver was built using the [embedded-hal](https://docs.rs/embedded-hal/latest/embedded_hal/) traits.
//! Ensure that the hardware abstraction layer of your microcontroller implements the embedded-hal traits.
//!
//! The crate stops at the register level: it configures the sensor, identifies it and reads
//! the die temperature. Draining the FIFO, servicing interrupts and computing SpO2 or
//! heart rate are left to the application, which can reach every register through
//! [`Max30102::read_register`], [`Max30102::read_registers`] and [`Max30102::write_register`].
//!
//! ## Instantiating
//!
//! Create an instance of the driver with the `new_i2c` associated function, by passing i2c and a delay.
//!
//! ### Setup:
//! ```rust,ignore
//! let i2c_bus = RefCell::new(i2c);
//!
//! let mut sensor = Max30102::new_i2c(RefCellDevice::new(&i2c_bus), delay);
//!
//! sensor.reset().unwrap();
//! sensor.is_alive().unwrap();
//! sensor.apply_config(&Max30102Config::default()).unwrap();
//! ```
//!
//! ### Loop:
//! ```rust,ignore
//! loop {
//!     let temp = sensor.read_temperature().unwrap(); // Blocks until the conversion is done
//!     write_results(&mut tx, temp);
//! }
//! ```
//!
//! ## I2C address
//!
//! The MAX30102 answers on the fixed 7-bit address 0x57 (0xAE for writes, 0xAF for reads).

#![no_std]

#[macro_use]
mod fmt;

pub mod accessors;
pub mod bus_operation;
pub mod config;
pub mod consts;
pub mod register;
pub mod temperature;
pub mod utils;

pub use bus_operation::*;
pub use config::*;
pub use consts::*;
pub use register::{Access, Register};
pub use temperature::Temperature;
use utils::*;

use embedded_hal::{
    i2c::{I2c, SevenBitAddress},
    delay::DelayNs
};

pub struct Max30102<B: BusOperation, T: DelayNs> {
    pub(crate) bus: B,
    pub(crate) tim: T,
    pub(crate) chunk_size: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<B> {
    Bus(B),
    /// PART_ID did not read 0x15
    InvalidPartId(u8),
    /// A field holds a reserved code
    InvalidRegisterValue(u8),
    ReadOnlyRegister(Register),
    InvalidParam,
    Timeout,
}

impl<B: BusOperation, T: DelayNs> Max30102<B, T> {
    pub(crate) fn read_u8(&mut self, reg: u8) -> Result<u8, Error<B::Error>> {
        let mut rbuf: [u8; 1] = [0];
        self.bus.write_read(&[reg], &mut rbuf).map_err(Error::Bus)?;
        Ok(rbuf[0])
    }

    pub(crate) fn write_u8(&mut self, reg: u8, val: u8) -> Result<(), Error<B::Error>> {
        self.bus.write(&[reg, val]).map_err(Error::Bus)?;
        Ok(())
    }

    /// Reads a single register.
    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<B::Error>> {
        self.read_u8(reg.addr())
    }

    /// Writes a single register. Read-only registers are rejected before
    /// anything is sent on the bus.
    pub fn write_register(&mut self, reg: Register, val: u8) -> Result<(), Error<B::Error>> {
        if !reg.is_writable() {
            return Err(Error::ReadOnlyRegister(reg));
        }
        self.write_u8(reg.addr(), val)
    }

    /// Utility function to read data.
    /// * Enough bytes of data are read starting from `reg`
    /// to fill `rbuf`.
    /// The register pointer auto-increments up to FIFO_DATA and stays there,
    /// so chunks of a burst starting at or below 0x07 never address past it.
    /// A burst running past 0xFF is rejected with `Error::InvalidParam`.
    ///
    /// # Arguments
    ///
    /// * `reg` : first register to be read.
    /// * `rbuf` : array to fill with read bytes.
    pub fn read_registers(&mut self, reg: Register, rbuf: &mut [u8]) -> Result<(), Error<B::Error>> {
        let size = rbuf.len();
        let start = reg.addr() as usize;
        let mut read_size: usize;
        for i in (0..size).step_by(self.chunk_size) {
            read_size = if size - i > self.chunk_size { self.chunk_size } else { size - i };
            // The pointer stops advancing once it reaches FIFO_DATA
            let addr = if start <= REG_FIFO_DATA as usize {
                core::cmp::min(start + i, REG_FIFO_DATA as usize)
            } else {
                start + i
            };
            let addr = u8::try_from(addr).map_err(|_| Error::InvalidParam)?;
            self.bus.write_read(&[addr], &mut rbuf[i..i+read_size]).map_err(Error::Bus)?;
        }
        Ok(())
    }

    /// Read-modify-write of the bits selected by `mask`.
    pub fn modify_register(&mut self, reg: Register, mask: u8, val: u8) -> Result<(), Error<B::Error>> {
        let current = self.read_register(reg)?;
        self.write_register(reg, set_bits(current, mask, val))
    }

    /// Utility function to wait.
    ///
    /// # Arguments
    ///
    /// * `ms` : milliseconds to wait.
    pub(crate) fn delay(&mut self, ms: u32) {
        self.tim.delay_ms(ms);
    }

    /// Polls `reg` until `bit` self-clears, one millisecond between polls.
    pub(crate) fn wait_bit_cleared(&mut self, reg: Register, bit: u8, limit: u16) -> Result<(), Error<B::Error>> {
        let mut i: u16 = 0;
        loop {
            let tmp = self.read_register(reg)?;
            if !bit_is_set(tmp, bit) {
                break;
            } else if i >= limit {
                warn!("bit {} of {} never cleared", bit, reg);
                return Err(Error::Timeout);
            }
            i += 1;
            self.delay(1);
        }
        Ok(())
    }

    pub fn part_id(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_register(Register::PartId)
    }

    pub fn revision_id(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_register(Register::RevId)
    }

    /// This function is used to check the part id of the MAX30102. The part id should be 0x15.
    pub fn is_alive(&mut self) -> Result<(), Error<B::Error>> {
        let part_id = self.part_id()?;
        if part_id != MAX30102_EXPECTED_PART_ID {
            warn!("unexpected part id {=u8:#x}", part_id);
            return Err(Error::InvalidPartId(part_id));
        }
        debug!("MAX30102 found");
        Ok(())
    }

    /// Soft reset. All configuration, threshold and data registers go back
    /// to their power-on state. Blocks until the RESET bit clears.
    pub fn reset(&mut self) -> Result<(), Error<B::Error>> {
        self.modify_register(Register::ModeConfig, 1 << MODE_RESET_BIT, 1 << MODE_RESET_BIT)?;
        self.wait_bit_cleared(Register::ModeConfig, MODE_RESET_BIT, RESET_POLL_LIMIT)?;
        debug!("reset done");
        Ok(())
    }

    /// Enters power-save mode. Register contents are retained.
    pub fn shutdown(&mut self) -> Result<(), Error<B::Error>> {
        self.modify_register(Register::ModeConfig, 1 << MODE_SHDN_BIT, 1 << MODE_SHDN_BIT)
    }

    /// Leaves power-save mode.
    pub fn wakeup(&mut self) -> Result<(), Error<B::Error>> {
        self.modify_register(Register::ModeConfig, 1 << MODE_SHDN_BIT, 0)
    }

    pub fn is_shutdown(&mut self) -> Result<bool, Error<B::Error>> {
        let tmp = self.read_register(Register::ModeConfig)?;
        Ok(bit_is_set(tmp, MODE_SHDN_BIT))
    }

    /// Writes every register covered by `config`, in the order given by
    /// [`Max30102Config::make_reg_vals`].
    pub fn apply_config(&mut self, config: &Max30102Config) -> Result<(), Error<B::Error>> {
        for [reg, val] in config.make_reg_vals() {
            self.write_u8(reg, val)?;
        }
        debug!("configuration applied");
        Ok(())
    }
}
