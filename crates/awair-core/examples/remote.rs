// Fetch the latest reading for each cloud-registered device.
//
// Usage: AWAIR_TOKEN=... cargo run --example remote

use awair_core::{Awair, Error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let token = std::env::var("AWAIR_TOKEN").unwrap_or_default();
    let awair = Awair::with_token(token)?;

    let user = awair.user().await?;
    println!("user {}", user.id);

    for device in awair.devices().await? {
        println!("{} ({})", device.name.as_deref().unwrap_or("unnamed"), device.model());

        match awair.air_data_latest(&device, false).await? {
            Some(reading) => {
                println!("  score: {}", reading.score);
                for (sensor, value) in reading.sensors.iter() {
                    println!("  {sensor}: {value:.2}");
                }
                // Named accessors work too:
                if let Some(temp) = reading.sensors.temperature() {
                    println!("  temperature again: {temp:.2}");
                }
            }
            None => println!("  offline"),
        }
    }

    Ok(())
}
