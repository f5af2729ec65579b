use crate::consts::{LED_CURRENT_MAX_MA, LED_CURRENT_STEP_MA};

/// Replaces the bits selected by `mask` in `byte` with the matching bits of `data`.
#[inline]
pub fn set_bits(byte: u8, mask: u8, data: u8) -> u8 {
    (byte & !mask) | (data & mask)
}

/// Extracts the field selected by `mask`, shifted down to bit 0.
#[inline]
pub fn get_bits(byte: u8, mask: u8, shift: u8) -> u8 {
    (byte & mask) >> shift
}

#[inline]
pub fn bit_is_set(byte: u8, bit: u8) -> bool {
    byte & (1 << bit) != 0
}

/// Converts a drive current in mA to the nearest LEDx_PA code.
/// Returns `None` outside 0.0..=51.0 mA.
pub fn led_current_to_amplitude(current_ma: f32) -> Option<u8> {
    if !(0.0..=LED_CURRENT_MAX_MA).contains(&current_ma) {
        return None;
    }
    Some((current_ma / LED_CURRENT_STEP_MA + 0.5) as u8)
}

pub fn amplitude_to_led_current(amplitude: u8) -> f32 {
    amplitude as f32 * LED_CURRENT_STEP_MA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bits_keeps_unmasked_bits() {
        assert_eq!(set_bits(0b1000_0011, 0x07, 0b010), 0b1000_0010);
        assert_eq!(set_bits(0xFF, 0x60, 0x00), 0x9F);
    }

    #[test]
    fn get_bits_shifts_field_down() {
        assert_eq!(get_bits(0x27, 0x1C, 2), 0b001);
        assert_eq!(get_bits(0x27, 0x60, 5), 0b01);
    }

    #[test]
    fn led_current_conversion() {
        assert_eq!(led_current_to_amplitude(0.0), Some(0x00));
        assert_eq!(led_current_to_amplitude(7.2), Some(0x24));
        assert_eq!(led_current_to_amplitude(51.0), Some(0xFF));
        assert_eq!(led_current_to_amplitude(51.5), None);
        assert_eq!(led_current_to_amplitude(-1.0), None);
        assert!((amplitude_to_led_current(0x24) - 7.2).abs() < 1e-4);
    }
}
