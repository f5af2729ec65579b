//! Typed encodings of the MAX30102 configuration fields and a batch
//! configuration value that can be applied with [`crate::Max30102::apply_config`].

use crate::consts::*;
use crate::register::Register;

/// Operating mode, MODE[2:0] in MODE_CONFIG (0x09).
///
/// | Variant   | MODE  | Active LEDs                      |
/// |-----------|-------|----------------------------------|
/// | HeartRate | 0b010 | Red only                         |
/// | SpO2      | 0b011 | Red and IR                       |
/// | MultiLed  | 0b111 | As assigned in SLOT1..SLOT4      |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    HeartRate = 0b010,
    SpO2 = 0b011,
    MultiLed = 0b111,
}

impl Mode {
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & MODE_MASK {
            0b010 => Some(Mode::HeartRate),
            0b011 => Some(Mode::SpO2),
            0b111 => Some(Mode::MultiLed),
            _ => None,
        }
    }
}

/// ADC full scale, SPO2_ADC_RGE[1:0] in SPO2_CONFIG (0x0A), bits 6:5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdcRange {
    Na2048 = 0b00,
    Na4096 = 0b01,
    Na8192 = 0b10,
    Na16384 = 0b11,
}

impl AdcRange {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b00 => AdcRange::Na2048,
            0b01 => AdcRange::Na4096,
            0b10 => AdcRange::Na8192,
            _ => AdcRange::Na16384,
        }
    }

    /// Full-scale current in nA.
    pub fn full_scale_na(self) -> u16 {
        2048 << (self as u8)
    }
}

/// Sample rate, SPO2_SR[2:0] in SPO2_CONFIG (0x0A), bits 4:2.
/// One sample is one pulse per active LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SampleRate {
    Sps50 = 0b000,
    Sps100 = 0b001,
    Sps200 = 0b010,
    Sps400 = 0b011,
    Sps800 = 0b100,
    Sps1000 = 0b101,
    Sps1600 = 0b110,
    Sps3200 = 0b111,
}

impl SampleRate {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0b000 => SampleRate::Sps50,
            0b001 => SampleRate::Sps100,
            0b010 => SampleRate::Sps200,
            0b011 => SampleRate::Sps400,
            0b100 => SampleRate::Sps800,
            0b101 => SampleRate::Sps1000,
            0b110 => SampleRate::Sps1600,
            _ => SampleRate::Sps3200,
        }
    }

    pub fn samples_per_second(self) -> u16 {
        match self {
            SampleRate::Sps50 => 50,
            SampleRate::Sps100 => 100,
            SampleRate::Sps200 => 200,
            SampleRate::Sps400 => 400,
            SampleRate::Sps800 => 800,
            SampleRate::Sps1000 => 1000,
            SampleRate::Sps1600 => 1600,
            SampleRate::Sps3200 => 3200,
        }
    }
}

/// LED pulse width, LED_PW[1:0] in SPO2_CONFIG (0x0A), bits 1:0.
/// The pulse width also fixes the ADC resolution.
///
/// | Variant | Pulse width | ADC resolution |
/// |---------|-------------|----------------|
/// | Us69    | 68.95 us    | 15 bit         |
/// | Us118   | 117.78 us   | 16 bit         |
/// | Us215   | 215.44 us   | 17 bit         |
/// | Us411   | 410.75 us   | 18 bit         |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedPulseWidth {
    Us69 = 0b00,
    Us118 = 0b01,
    Us215 = 0b10,
    Us411 = 0b11,
}

impl LedPulseWidth {
    pub fn from_bits(bits: u8) -> Self {
        match bits & SPO2_LED_PW_MASK {
            0b00 => LedPulseWidth::Us69,
            0b01 => LedPulseWidth::Us118,
            0b10 => LedPulseWidth::Us215,
            _ => LedPulseWidth::Us411,
        }
    }

    pub fn adc_resolution_bits(self) -> u8 {
        15 + self as u8
    }
}

/// The two LEDs of the MAX30102.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// LED1
    Red,
    /// LED2
    Ir,
}

impl Led {
    pub fn amplitude_register(self) -> Register {
        match self {
            Led::Red => Register::Led1Pa,
            Led::Ir => Register::Led2Pa,
        }
    }
}

/// Source assigned to a multi-LED time slot (SLOTx[2:0]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SlotSource {
    None = 0b000,
    Red = 0b001,
    Ir = 0b010,
    PilotRed = 0b101,
    PilotIr = 0b110,
}

impl SlotSource {
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & SLOT_LOW_MASK {
            0b000 => Some(SlotSource::None),
            0b001 => Some(SlotSource::Red),
            0b010 => Some(SlotSource::Ir),
            0b101 => Some(SlotSource::PilotRed),
            0b110 => Some(SlotSource::PilotIr),
            _ => None,
        }
    }
}

pub(crate) fn spo2_config_value(range: AdcRange, rate: SampleRate, width: LedPulseWidth) -> u8 {
    ((range as u8) << SPO2_ADC_RGE_SHIFT) | ((rate as u8) << SPO2_SR_SHIFT) | width as u8
}

pub(crate) fn slot_pair_value(odd: SlotSource, even: SlotSource) -> u8 {
    ((even as u8) << SLOT_HIGH_SHIFT) | odd as u8
}

/// Sensor configuration covering MODE_CONFIG, SPO2_CONFIG, the three
/// amplitude registers and both multi-LED slot registers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Max30102Config {
    pub mode: Mode,
    pub adc_range: AdcRange,
    pub sample_rate: SampleRate,
    pub pulse_width: LedPulseWidth,
    pub led1_amplitude: u8,
    pub led2_amplitude: u8,
    pub pilot_amplitude: u8,
    pub slots: [SlotSource; 4],
}

impl Max30102Config {
    pub fn new(
        mode: Mode,
        adc_range: AdcRange,
        sample_rate: SampleRate,
        pulse_width: LedPulseWidth,
        led1_amplitude: u8,
        led2_amplitude: u8,
    ) -> Self {
        Self {
            mode,
            adc_range,
            sample_rate,
            pulse_width,
            led1_amplitude,
            led2_amplitude,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_adc_range(mut self, adc_range: AdcRange) -> Self {
        self.adc_range = adc_range;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: SampleRate) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_pulse_width(mut self, pulse_width: LedPulseWidth) -> Self {
        self.pulse_width = pulse_width;
        self
    }

    pub fn with_led_amplitude(mut self, led: Led, amplitude: u8) -> Self {
        match led {
            Led::Red => self.led1_amplitude = amplitude,
            Led::Ir => self.led2_amplitude = amplitude,
        }
        self
    }

    pub fn with_pilot_amplitude(mut self, amplitude: u8) -> Self {
        self.pilot_amplitude = amplitude;
        self
    }

    pub fn with_slots(mut self, slots: [SlotSource; 4]) -> Self {
        self.slots = slots;
        self
    }

    /// Register address and value pairs, in the order they are written.
    ///
    /// MODE_CONFIG is written with SHDN and RESET cleared.
    pub fn make_reg_vals(&self) -> [[u8; 2]; 7] {
        [
            [Register::ModeConfig.addr(), self.mode as u8],
            [
                Register::Spo2Config.addr(),
                spo2_config_value(self.adc_range, self.sample_rate, self.pulse_width),
            ],
            [Register::Led1Pa.addr(), self.led1_amplitude],
            [Register::Led2Pa.addr(), self.led2_amplitude],
            [Register::PilotPa.addr(), self.pilot_amplitude],
            [
                Register::MultiLedCtrl1.addr(),
                slot_pair_value(self.slots[0], self.slots[1]),
            ],
            [
                Register::MultiLedCtrl2.addr(),
                slot_pair_value(self.slots[2], self.slots[3]),
            ],
        ]
    }
}

impl Default for Max30102Config {
    /// SpO2 mode, 4096 nA range, 100 sps, 411 us pulses, both LEDs at
    /// 0x24 (about 7 mA), pilot at 0x7F, slots Red/IR.
    fn default() -> Self {
        Self {
            mode: Mode::SpO2,
            adc_range: AdcRange::Na4096,
            sample_rate: SampleRate::Sps100,
            pulse_width: LedPulseWidth::Us411,
            led1_amplitude: 0x24,
            led2_amplitude: 0x24,
            pilot_amplitude: 0x7F,
            slots: [
                SlotSource::Red,
                SlotSource::Ir,
                SlotSource::None,
                SlotSource::None,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_register_values() {
        let vals = Max30102Config::default().make_reg_vals();
        assert_eq!(vals[0], [0x09, 0x03]);
        assert_eq!(vals[1], [0x0A, 0x27]);
        assert_eq!(vals[2], [0x0C, 0x24]);
        assert_eq!(vals[3], [0x0D, 0x24]);
        assert_eq!(vals[4], [0x10, 0x7F]);
        assert_eq!(vals[5], [0x11, 0x21]);
        assert_eq!(vals[6], [0x12, 0x00]);
    }

    #[test]
    fn fluent_setters() {
        let cfg = Max30102Config::default()
            .with_mode(Mode::MultiLed)
            .with_adc_range(AdcRange::Na16384)
            .with_sample_rate(SampleRate::Sps3200)
            .with_pulse_width(LedPulseWidth::Us69)
            .with_led_amplitude(Led::Ir, 0xFF)
            .with_slots([
                SlotSource::Ir,
                SlotSource::Red,
                SlotSource::PilotIr,
                SlotSource::PilotRed,
            ]);
        let vals = cfg.make_reg_vals();
        assert_eq!(vals[0][1], 0x07);
        assert_eq!(vals[1][1], 0x7C);
        assert_eq!(vals[2][1], 0x24);
        assert_eq!(vals[3][1], 0xFF);
        assert_eq!(vals[5][1], 0x12);
        assert_eq!(vals[6][1], 0x56);
    }

    #[test]
    fn field_codes_decode_back() {
        assert_eq!(Mode::from_bits(0x83), Some(Mode::SpO2));
        assert_eq!(Mode::from_bits(0x00), None);
        assert_eq!(SlotSource::from_bits(0b011), None);
        assert_eq!(SlotSource::from_bits(0b110), Some(SlotSource::PilotIr));
        assert_eq!(SampleRate::from_bits(0b101), SampleRate::Sps1000);
        assert_eq!(AdcRange::Na8192.full_scale_na(), 8192);
        assert_eq!(LedPulseWidth::Us215.adc_resolution_bits(), 17);
    }
}
