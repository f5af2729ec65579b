#![no_std]
#![no_main]

use max30102::{
    Max30102,
    Max30102Config,
    Mode,
    SampleRate,
};

use panic_halt as _;
use cortex_m_rt::entry;

use core::{fmt::Write, cell::RefCell};

use stm32f4xx_hal::{
    gpio::{
        Pin,
        gpioa,
        gpiob,
        Alternate},
    pac::{USART2, Peripherals, TIM1},
    prelude::*,
    serial::{Config, Tx},
    timer::Delay,
    rcc::{Rcc, Clocks}
};

// I2C related imports
use stm32f4xx_hal::{
    pac::I2C1,
    i2c::{I2c as StmI2c, I2c1, Mode as I2cMode}};
use embedded_hal_bus::i2c::RefCellDevice;

fn write_results(tx: &mut Tx<USART2>, part_id: u8, rev_id: u8, temperature: f32) {

    writeln!(tx, "\x1B[2H").unwrap();

    writeln!(tx, "MAX30102 Simple demo application\n").unwrap();
    writeln!(tx, "Part ID = {pid:#04x}  Revision = {rev:#04x}\r\n",
        pid = part_id, rev = rev_id).unwrap();
    writeln!(tx, "Die temperature [degC] = {tmp:>8.4}\r\n",
        tmp = temperature).unwrap();
}


#[entry]
fn main() -> ! {
    let dp: Peripherals = Peripherals::take().unwrap();
    let rcc: Rcc = dp.RCC.constrain();
    let clocks: Clocks = rcc.cfgr.use_hse(8.MHz()).sysclk(48.MHz()).freeze();
    let tim: Delay<TIM1, 1000> = dp.TIM1.delay_ms(&clocks);

    let gpioa: gpioa::Parts = dp.GPIOA.split();
    let gpiob: gpiob::Parts = dp.GPIOB.split();

    let tx_pin: Pin<'A', 2, Alternate<7>> = gpioa.pa2.into_alternate();

    let mut tx: Tx<USART2> = dp.USART2.tx(
        tx_pin,
        Config::default()
        .baudrate(460800.bps())
        .wordlength_8()
        .parity_none(),
        &clocks).unwrap();

    let scl: Pin<'B', 8> = gpiob.pb8;
    let sda: Pin<'B', 9> = gpiob.pb9;

    let i2c: StmI2c<I2C1> = I2c1::new(
        dp.I2C1,
        (scl, sda),
        I2cMode::Standard{frequency:100.kHz()},
        &clocks);

    let i2c_bus: RefCell<StmI2c<I2C1>> = RefCell::new(i2c);

    let mut sensor = Max30102::new_i2c(
        RefCellDevice::new(&i2c_bus),
        tim);

    sensor.reset().unwrap();
    sensor.is_alive().unwrap();

    let config = Max30102Config::default()
        .with_mode(Mode::SpO2)
        .with_sample_rate(SampleRate::Sps100);
    sensor.apply_config(&config).unwrap();

    let part_id = sensor.part_id().unwrap();
    let rev_id = sensor.revision_id().unwrap();

    loop {
        let temperature = sensor.read_temperature().unwrap(); // Blocks until the conversion is done
        write_results(&mut tx, part_id, rev_id, temperature); // Print the result to the output
    }
}
