// Read the latest data from a device over the local network.
//
// Usage: AWAIR_DEVICE=awair-elem-1419e1.local cargo run --example local

use awair_core::{AwairLocal, Error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let addr = std::env::var("AWAIR_DEVICE")
        .unwrap_or_else(|_| "AWAIR-ELEM-1419E1.local".to_owned());
    let local = AwairLocal::new(vec![addr])?;

    for device in local.devices().await? {
        println!(
            "{} at {} (firmware {})",
            device.model(),
            device.address,
            device.firmware_version.as_deref().unwrap_or("unknown"),
        );

        if let Some(reading) = local.air_data_latest(&device).await? {
            println!("  score: {}", reading.score);
            for (sensor, value) in reading.sensors.iter() {
                println!("  {sensor}: {value:.2}");
            }
        }
    }

    Ok(())
}
