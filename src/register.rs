//! Typed view of the MAX30102 register map.
//!
//! Every variant carries its datasheet offset, so `Register::ModeConfig as u8`
//! is the byte that goes on the bus. The map has holes (0x0B, 0x0E, 0x0F, ...):
//! those offsets are reserved and have no variant.

use crate::consts::*;

/// Register map of the MAX30102 (Maxim datasheet, "Register Maps and Descriptions").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    IntrStatus1 = REG_INTR_STATUS_1,
    IntrStatus2 = REG_INTR_STATUS_2,
    IntrEnable1 = REG_INTR_ENABLE_1,
    IntrEnable2 = REG_INTR_ENABLE_2,
    FifoWrPtr = REG_FIFO_WR_PTR,
    OvfCounter = REG_OVF_COUNTER,
    FifoRdPtr = REG_FIFO_RD_PTR,
    // Reading does not advance the register pointer
    FifoData = REG_FIFO_DATA,
    FifoConfig = REG_FIFO_CONFIG,
    ModeConfig = REG_MODE_CONFIG,
    Spo2Config = REG_SPO2_CONFIG,
    Led1Pa = REG_LED1_PA,
    Led2Pa = REG_LED2_PA,
    PilotPa = REG_PILOT_PA,
    MultiLedCtrl1 = REG_MULTI_LED_CTRL1,
    MultiLedCtrl2 = REG_MULTI_LED_CTRL2,
    TempIntr = REG_TEMP_INTR,
    TempFrac = REG_TEMP_FRAC,
    TempConfig = REG_TEMP_CONFIG,
    ProxIntThresh = REG_PROX_INT_THRESH,
    RevId = REG_REV_ID,
    // Must read 0x15
    PartId = REG_PART_ID,
}

/// How the host may access a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    ReadOnly,
    ReadWrite,
    /// Data port: burst reads stay on the same address.
    Fifo,
}

impl Register {
    /// All registers in ascending address order.
    pub const ALL: [Register; 22] = [
        Register::IntrStatus1,
        Register::IntrStatus2,
        Register::IntrEnable1,
        Register::IntrEnable2,
        Register::FifoWrPtr,
        Register::OvfCounter,
        Register::FifoRdPtr,
        Register::FifoData,
        Register::FifoConfig,
        Register::ModeConfig,
        Register::Spo2Config,
        Register::Led1Pa,
        Register::Led2Pa,
        Register::PilotPa,
        Register::MultiLedCtrl1,
        Register::MultiLedCtrl2,
        Register::TempIntr,
        Register::TempFrac,
        Register::TempConfig,
        Register::ProxIntThresh,
        Register::RevId,
        Register::PartId,
    ];

    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Looks up the register at `addr`, `None` for reserved offsets.
    pub fn from_addr(addr: u8) -> Option<Register> {
        Register::ALL.iter().copied().find(|reg| reg.addr() == addr)
    }

    pub const fn access(self) -> Access {
        match self {
            Register::IntrStatus1
            | Register::IntrStatus2
            | Register::TempIntr
            | Register::TempFrac
            | Register::RevId
            | Register::PartId => Access::ReadOnly,
            Register::FifoData => Access::Fifo,
            _ => Access::ReadWrite,
        }
    }

    #[inline]
    pub const fn is_writable(self) -> bool {
        !matches!(self.access(), Access::ReadOnly)
    }
}
