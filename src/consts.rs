use embedded_hal::i2c::SevenBitAddress;

// The bus layer works with 7-bit addresses and appends the R/W bit itself.
pub const MAX30102_DEFAULT_I2C_ADDRESS: SevenBitAddress = 0x57;
pub const MAX30102_WRITE_ADDR: u8 = MAX30102_DEFAULT_I2C_ADDRESS << 1;
pub const MAX30102_READ_ADDR: u8 = MAX30102_WRITE_ADDR | 0x01;

pub const MAX30102_EXPECTED_PART_ID: u8 = 0x15;

pub(crate) const I2C_CHUNK_SIZE: usize = 32;

pub(crate) const RESET_POLL_LIMIT: u16 = 100;
pub(crate) const TEMP_POLL_LIMIT: u16 = 100;

pub const REG_INTR_STATUS_1: u8 = 0x00;
pub const REG_INTR_STATUS_2: u8 = 0x01;
pub const REG_INTR_ENABLE_1: u8 = 0x02;
pub const REG_INTR_ENABLE_2: u8 = 0x03;
pub const REG_FIFO_WR_PTR: u8 = 0x04;
pub const REG_OVF_COUNTER: u8 = 0x05;
pub const REG_FIFO_RD_PTR: u8 = 0x06;
pub const REG_FIFO_DATA: u8 = 0x07;
pub const REG_FIFO_CONFIG: u8 = 0x08;
pub const REG_MODE_CONFIG: u8 = 0x09;
pub const REG_SPO2_CONFIG: u8 = 0x0A;
pub const REG_LED1_PA: u8 = 0x0C;
pub const REG_LED2_PA: u8 = 0x0D;
pub const REG_PILOT_PA: u8 = 0x10;
pub const REG_MULTI_LED_CTRL1: u8 = 0x11;
pub const REG_MULTI_LED_CTRL2: u8 = 0x12;
pub const REG_TEMP_INTR: u8 = 0x1F;
pub const REG_TEMP_FRAC: u8 = 0x20;
pub const REG_TEMP_CONFIG: u8 = 0x21;
pub const REG_PROX_INT_THRESH: u8 = 0x30;
pub const REG_REV_ID: u8 = 0xFE;
pub const REG_PART_ID: u8 = 0xFF;

// MODE_CONFIG
pub const MODE_SHDN_BIT: u8 = 7;
pub const MODE_RESET_BIT: u8 = 6;
pub const MODE_MASK: u8 = 0x07;

// SPO2_CONFIG
pub const SPO2_ADC_RGE_SHIFT: u8 = 5;
pub const SPO2_ADC_RGE_MASK: u8 = 0x60;
pub const SPO2_SR_SHIFT: u8 = 2;
pub const SPO2_SR_MASK: u8 = 0x1C;
pub const SPO2_LED_PW_MASK: u8 = 0x03;

// MULTI_LED_CTRL1 / MULTI_LED_CTRL2, odd slot low nibble, even slot high nibble
pub const SLOT_LOW_MASK: u8 = 0x07;
pub const SLOT_HIGH_SHIFT: u8 = 4;
pub const SLOT_HIGH_MASK: u8 = 0x70;

// TEMP_CONFIG, self-clearing
pub const TEMP_EN_BIT: u8 = 0;
// TEMP_FRAC holds 1/16 degC steps in the low nibble
pub const TEMP_FRAC_MASK: u8 = 0x0F;
pub const TEMP_FRAC_STEP_C: f32 = 0.0625;

// LEDx_PA / PILOT_PA, nominal drive current per LSB
pub const LED_CURRENT_STEP_MA: f32 = 0.2;
pub const LED_CURRENT_MAX_MA: f32 = 51.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_address_matches_datasheet() {
        assert_eq!(MAX30102_DEFAULT_I2C_ADDRESS, 0x57);
        assert_eq!(MAX30102_WRITE_ADDR, 0xAE);
        assert_eq!(MAX30102_READ_ADDR, 0xAF);
    }

    #[test]
    fn register_offsets_match_datasheet() {
        assert_eq!(REG_INTR_STATUS_1, 0x00);
        assert_eq!(REG_INTR_STATUS_2, 0x01);
        assert_eq!(REG_INTR_ENABLE_1, 0x02);
        assert_eq!(REG_INTR_ENABLE_2, 0x03);
        assert_eq!(REG_FIFO_WR_PTR, 0x04);
        assert_eq!(REG_OVF_COUNTER, 0x05);
        assert_eq!(REG_FIFO_RD_PTR, 0x06);
        assert_eq!(REG_FIFO_DATA, 0x07);
        assert_eq!(REG_FIFO_CONFIG, 0x08);
        assert_eq!(REG_MODE_CONFIG, 0x09);
        assert_eq!(REG_SPO2_CONFIG, 0x0A);
        assert_eq!(REG_LED1_PA, 0x0C);
        assert_eq!(REG_LED2_PA, 0x0D);
        assert_eq!(REG_PILOT_PA, 0x10);
        assert_eq!(REG_MULTI_LED_CTRL1, 0x11);
        assert_eq!(REG_MULTI_LED_CTRL2, 0x12);
        assert_eq!(REG_TEMP_INTR, 0x1F);
        assert_eq!(REG_TEMP_FRAC, 0x20);
        assert_eq!(REG_TEMP_CONFIG, 0x21);
        assert_eq!(REG_PROX_INT_THRESH, 0x30);
        assert_eq!(REG_REV_ID, 0xFE);
        assert_eq!(REG_PART_ID, 0xFF);
    }
}
