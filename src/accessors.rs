use consts::*;
use utils::*;

use crate::{consts, utils, BusOperation, Max30102, Error, DelayNs};
use crate::config::{AdcRange, Led, LedPulseWidth, Mode, SampleRate, SlotSource};
use crate::register::Register;

impl<B: BusOperation, T: DelayNs> Max30102<B, T> {

    /// This function sets the operating mode. SHDN and RESET are left untouched.
    ///
    /// # Arguments
    ///
    /// * `mode` : HeartRate uses the red LED only, SpO2 uses red and IR, MultiLed follows the slot assignment.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<B::Error>> {
        self.modify_register(Register::ModeConfig, MODE_MASK, mode as u8)
    }

    /// This function gets the operating mode.
    /// A reserved MODE code is reported as `Error::InvalidRegisterValue`.
    pub fn get_mode(&mut self) -> Result<Mode, Error<B::Error>> {
        let tmp = self.read_register(Register::ModeConfig)?;
        Mode::from_bits(tmp).ok_or(Error::InvalidRegisterValue(tmp & MODE_MASK))
    }

    pub fn set_adc_range(&mut self, range: AdcRange) -> Result<(), Error<B::Error>> {
        self.modify_register(Register::Spo2Config, SPO2_ADC_RGE_MASK, (range as u8) << SPO2_ADC_RGE_SHIFT)
    }

    pub fn get_adc_range(&mut self) -> Result<AdcRange, Error<B::Error>> {
        let tmp = self.read_register(Register::Spo2Config)?;
        Ok(AdcRange::from_bits(get_bits(tmp, SPO2_ADC_RGE_MASK, SPO2_ADC_RGE_SHIFT)))
    }

    pub fn set_sample_rate(&mut self, rate: SampleRate) -> Result<(), Error<B::Error>> {
        self.modify_register(Register::Spo2Config, SPO2_SR_MASK, (rate as u8) << SPO2_SR_SHIFT)
    }

    pub fn get_sample_rate(&mut self) -> Result<SampleRate, Error<B::Error>> {
        let tmp = self.read_register(Register::Spo2Config)?;
        Ok(SampleRate::from_bits(get_bits(tmp, SPO2_SR_MASK, SPO2_SR_SHIFT)))
    }

    /// This function sets the LED pulse width, which also sets the ADC resolution (15 to 18 bits).
    pub fn set_pulse_width(&mut self, width: LedPulseWidth) -> Result<(), Error<B::Error>> {
        self.modify_register(Register::Spo2Config, SPO2_LED_PW_MASK, width as u8)
    }

    pub fn get_pulse_width(&mut self) -> Result<LedPulseWidth, Error<B::Error>> {
        let tmp = self.read_register(Register::Spo2Config)?;
        Ok(LedPulseWidth::from_bits(tmp))
    }

    /// This function sets the pulse amplitude of one LED.
    ///
    /// # Arguments
    ///
    /// * `led` : LED to be programmed.
    /// * `amplitude` : 0x00 turns the LED off, 0xFF drives about 51mA, 0.2mA per step.
    pub fn set_led_amplitude(&mut self, led: Led, amplitude: u8) -> Result<(), Error<B::Error>> {
        self.write_register(led.amplitude_register(), amplitude)
    }

    pub fn get_led_amplitude(&mut self, led: Led) -> Result<u8, Error<B::Error>> {
        self.read_register(led.amplitude_register())
    }

    /// Same as `set_led_amplitude`, with the current given in mA (0.0 to 51.0).
    pub fn set_led_current_ma(&mut self, led: Led, current_ma: f32) -> Result<(), Error<B::Error>> {
        let amplitude = led_current_to_amplitude(current_ma).ok_or(Error::InvalidParam)?;
        self.set_led_amplitude(led, amplitude)
    }

    /// Nominal drive current of one LED in mA, from its LEDx_PA setting.
    pub fn get_led_current_ma(&mut self, led: Led) -> Result<f32, Error<B::Error>> {
        Ok(amplitude_to_led_current(self.get_led_amplitude(led)?))
    }

    pub fn set_pilot_amplitude(&mut self, amplitude: u8) -> Result<(), Error<B::Error>> {
        self.write_register(Register::PilotPa, amplitude)
    }

    pub fn get_pilot_amplitude(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_register(Register::PilotPa)
    }

    /// This function assigns a source to one of the four multi-LED time slots.
    /// Slots are numbered 1 to 4; the other slot sharing the register is preserved.
    pub fn set_slot(&mut self, slot: u8, source: SlotSource) -> Result<(), Error<B::Error>> {
        let (reg, mask, shift) = Self::slot_field(slot)?;
        self.modify_register(reg, mask, (source as u8) << shift)
    }

    pub fn get_slot(&mut self, slot: u8) -> Result<SlotSource, Error<B::Error>> {
        let (reg, mask, shift) = Self::slot_field(slot)?;
        let code = get_bits(self.read_register(reg)?, mask, shift);
        SlotSource::from_bits(code).ok_or(Error::InvalidRegisterValue(code))
    }

    fn slot_field(slot: u8) -> Result<(Register, u8, u8), Error<B::Error>> {
        match slot {
            1 => Ok((Register::MultiLedCtrl1, SLOT_LOW_MASK, 0)),
            2 => Ok((Register::MultiLedCtrl1, SLOT_HIGH_MASK, SLOT_HIGH_SHIFT)),
            3 => Ok((Register::MultiLedCtrl2, SLOT_LOW_MASK, 0)),
            4 => Ok((Register::MultiLedCtrl2, SLOT_HIGH_MASK, SLOT_HIGH_SHIFT)),
            _ => Err(Error::InvalidParam),
        }
    }

    /// This function sets the IR ADC count that triggers the proximity interrupt.
    pub fn set_proximity_threshold(&mut self, threshold: u8) -> Result<(), Error<B::Error>> {
        self.write_register(Register::ProxIntThresh, threshold)
    }

    pub fn get_proximity_threshold(&mut self) -> Result<u8, Error<B::Error>> {
        self.read_register(Register::ProxIntThresh)
    }
}
