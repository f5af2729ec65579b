use consts::*;
use crate::{consts, Max30102, SevenBitAddress, I2c, DelayNs};

pub trait BusOperation {
    type Error;
    fn write(&mut self, wbuf: &[u8]) -> Result<(), Self::Error>;
    fn write_read(&mut self, wbuf: &[u8], rbuf: &mut [u8]) -> Result<(), Self::Error>;
}

pub struct Max30102I2C<P> {
    i2c: P,
    address: SevenBitAddress,
}

impl<P: I2c> Max30102I2C<P> {
    pub(crate) fn new(i2c: P, address: SevenBitAddress) -> Self {
        Max30102I2C { i2c, address }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    pub(crate) fn release(self) -> P {
        self.i2c
    }
}

impl<P: I2c> BusOperation for Max30102I2C<P> {
    type Error = P::Error;

    #[inline]
    fn write(&mut self, wbuf: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, wbuf)?;

        Ok(())
    }

    #[inline]
    fn write_read(&mut self, wbuf: &[u8], rbuf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, wbuf, rbuf)?;

        Ok(())
    }
}

impl<P, T> Max30102<Max30102I2C<P>, T>
    where
    P: I2c,
    T: DelayNs
{
    /// Creates a driver talking to the sensor at its fixed address 0x57.
    pub fn new_i2c(i2c: P, tim: T) -> Self {
        Self::new_i2c_with_address(i2c, MAX30102_DEFAULT_I2C_ADDRESS, tim)
    }

    /// Creates a driver for a sensor sitting behind an address translator.
    pub fn new_i2c_with_address(i2c: P, address: SevenBitAddress, tim: T) -> Self {
        Max30102 {
            bus: Max30102I2C::new(i2c, address),
            tim,
            chunk_size: I2C_CHUNK_SIZE,
        }
    }

    /// Destroys the driver, giving back the I2C bus and the delay provider.
    pub fn release(self) -> (P, T) {
        (self.bus.release(), self.tim)
    }

    pub fn i2c_address(&self) -> SevenBitAddress {
        self.bus.address()
    }
}
