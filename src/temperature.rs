use consts::*;

use crate::{consts, BusOperation, DelayNs, Error, Max30102};
use crate::register::Register;

/// Die temperature as reported by TEMP_INTR and TEMP_FRAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    // Two's complement, 1 degC per LSB
    pub integer: i8,
    // 0.0625 degC per LSB, always positive
    pub fraction: u8,
}

impl Temperature {
    pub fn from_registers(temp_intr: u8, temp_frac: u8) -> Self {
        Temperature {
            integer: temp_intr as i8,
            fraction: temp_frac & TEMP_FRAC_MASK,
        }
    }

    pub fn celsius(&self) -> f32 {
        self.integer as f32 + self.fraction as f32 * TEMP_FRAC_STEP_C
    }
}

impl<B: BusOperation, T: DelayNs> Max30102<B, T> {
    /// This function triggers a single die temperature conversion and returns the raw result.
    /// The conversion takes about 29ms; TEMP_EN is polled every millisecond until it clears.
    pub fn read_temperature_raw(&mut self) -> Result<Temperature, Error<B::Error>> {
        self.write_register(Register::TempConfig, 1 << TEMP_EN_BIT)?;
        self.wait_bit_cleared(Register::TempConfig, TEMP_EN_BIT, TEMP_POLL_LIMIT)?;

        let mut tmp: [u8; 2] = [0; 2];
        self.read_registers(Register::TempIntr, &mut tmp)?;
        Ok(Temperature::from_registers(tmp[0], tmp[1]))
    }

    /// This function reads the die temperature.
    ///
    /// # Return
    ///
    /// * `temperature` : Die temperature in degC, 0.0625 degC resolution.
    pub fn read_temperature(&mut self) -> Result<f32, Error<B::Error>> {
        Ok(self.read_temperature_raw()?.celsius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_negative_temperature() {
        let t = Temperature::from_registers(0xFF, 0x08);
        assert_eq!(t.integer, -1);
        assert_eq!(t.celsius(), -0.5);
    }

    #[test]
    fn ignores_reserved_fraction_bits() {
        let t = Temperature::from_registers(0x19, 0xF4);
        assert_eq!(t.fraction, 0x04);
        assert_eq!(t.celsius(), 25.25);
    }
}
