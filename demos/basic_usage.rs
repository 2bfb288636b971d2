//! Basic Usage Example for the AQI Scale Calculators
//!
//! This example demonstrates the core functionality of the aqi-scales
//! library: building pollutant histories, computing an index, and reading
//! descriptors, plus error handling at the call boundary.
//!
//! Run with: cargo run --example basic_usage

use aqi_scales::{PollutantHistories, Scale, series_from_slice};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("aqi-scales - Basic Usage Example\n");

    // Example 1: a moderately polluted day in the United States
    println!("Example 1: United States AQI");
    println!("============================");

    let mut histories = PollutantHistories::default();
    histories.pm2_5 = [20.0; 24];
    histories.o3 = [120.0; 24];

    let reading = aqi_scales::report(&histories, Scale::UnitedStates);
    println!(
        "AQI {} - {} ({})",
        reading.value,
        reading.descriptor,
        reading.framing.label()
    );

    println!();

    // Example 2: the same air judged by every supported standard
    println!("Example 2: One Day, Ten Standards");
    println!("=================================");

    for scale in Scale::ALL {
        let reading = aqi_scales::report(&histories, scale);
        println!(
            "{:<16} {:>4}  {}",
            scale.to_string(),
            reading.value,
            reading.descriptor
        );
    }

    println!();

    // Example 3: saturation above a scale's published tables
    println!("Example 3: Saturation");
    println!("=====================");

    let mut extreme = PollutantHistories::default();
    extreme.co = [200_000.0; 24];
    let value = aqi_scales::index(&extreme, Scale::China);
    println!(
        "China AQI reports {} (max {} + 1), meaning \"{}+\"",
        value,
        Scale::China.max_index(),
        Scale::China.max_index()
    );

    println!();

    // Example 4: building a series from a runtime buffer
    println!("Example 4: Call Boundary Errors");
    println!("===============================");

    let short_buffer = vec![12.0; 20];
    match series_from_slice(&short_buffer) {
        Ok(_) => println!("unexpected: short buffer accepted"),
        Err(err) => println!("rejected as expected: {err}"),
    }

    let day = vec![12.0; 24];
    let mut histories = PollutantHistories::default();
    histories.pm2_5 = series_from_slice(&day)?;
    println!(
        "24-sample buffer accepted, US AQI {}",
        aqi_scales::index(&histories, Scale::UnitedStates)
    );

    Ok(())
}
