//! Scale Survey Example
//!
//! Prints each supported scale's range, category ladder, and wording
//! semantics, then walks one pollutant level up through the categories.
//!
//! Run with: cargo run --example scale_survey

use aqi_scales::{PollutantHistories, Scale};

fn main() {
    println!("aqi-scales - Scale Survey\n");

    for scale in Scale::ALL {
        println!(
            "{} (0..={}, {} categories, {})",
            scale,
            scale.max_index(),
            scale.labels().len(),
            scale.framing().label()
        );
        println!("  {}", scale.labels().join(" | "));
    }

    println!();
    println!("Rising PM2.5, 24-hour constant level, United States scale:");
    println!("-----------------------------------------------------------");

    for level in [5.0, 20.0, 45.0, 90.0, 180.0, 300.0, 450.0, 600.0] {
        let mut histories = PollutantHistories::default();
        histories.pm2_5 = [level; 24];
        let reading = aqi_scales::report(&histories, Scale::UnitedStates);
        println!(
            "{:>6.1} µg/m³ -> AQI {:>3}  {}",
            level, reading.value, reading.descriptor
        );
    }
}
