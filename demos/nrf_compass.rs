//! Compass example for nRF52833 (micro:bit v2) with Embassy
//!
//! Reads an AS5600 over TWIM0 and prints the indicator that should be
//! shown on the 8x8 matrix. Build with the `async` and `defmt` features.
//!
//! Hardware setup:
//! - AS5600 on the edge connector I2C pins: SCL=P0_26, SDA=P1_00
//! - Diametric magnet centered over the sensor, 0.5-3 mm air gap

#![no_std]
#![no_main]

use as5600_compass::{DEFAULT_PERIOD_MS, Glyph, Indicator, asynch::As5600};
use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::{self as hal, twim::Twim};
use embassy_time::Timer;
use hal::twim;
use {defmt_rtt as _, panic_probe as _};

hal::bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<hal::peripherals::TWISPI0>;
});

fn log_glyph(glyph: &Glyph) {
    for row in glyph.rows() {
        info!("{=u8:08b}", row);
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = hal::init(Default::default());
    let config = twim::Config::default();
    let twim0 = Twim::new(p.TWISPI0, Irqs, p.P1_00, p.P0_26, config);

    let mut sensor = As5600::new(twim0);

    info!("AS5600 driver initialized");

    let mut last = None;
    loop {
        let state = sensor.poll().await;
        let indicator = Indicator::from(state);

        if last != Some(indicator) {
            info!("{}", state);
            log_glyph(&indicator.glyph());
            last = Some(indicator);
        }

        Timer::after_millis(u64::from(DEFAULT_PERIOD_MS)).await;
    }
}
