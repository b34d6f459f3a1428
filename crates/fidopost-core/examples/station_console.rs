#![allow(
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::used_underscore_items
)]
//! Example: load station settings and drive the console log
//!
//! This example demonstrates the core wiring of a station:
//! 1. Seed a preference store and load a validated settings snapshot
//! 2. Create the event channel and hand a consumer task the receiver
//! 3. Append console lines and watch the events arrive
//!
//! ## Running
//!
//! ```bash
//! cargo run --package fidopost-core --example station_console
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fidopost_core::settings::keys;
use fidopost_core::{
    ConsoleLog, EventSender, MemoryStore, SettingsStore, StationEvent, load_settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fidopost_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A real station reads these from its preference backend.
    let store = MemoryStore::new();
    store.set(keys::SYSOP_NAME, "Erik Nordstrom");
    store.set(keys::STATION_NAME, "Night Station");
    store.set(keys::LOCATION, "Helsinki, Finland");
    store.set(keys::FTN_ADDRESSES, "2:221/1 2:221/1.1");
    store.set(keys::NODELIST_ATTRS, "CM,XA");
    store.set(keys::UPLINK_FTN_ADDRESS, "2:221/0");
    store.set(keys::UPLINK_INET_ADDRESS, "binkp.example.net");
    store.set(keys::ORIGIN, "The Night Station (2:221/1)");

    let settings = load_settings(&store)?;
    println!("Station: {} <{}>", settings.station_name, settings.sysop_name);
    if let Some(main) = settings.main_address() {
        println!("Main address: {main}");
    }
    println!(
        "Uplink: {} on {}:{}",
        settings.uplink.ftn_address, settings.uplink.host, settings.uplink.port
    );

    // The display layer owns the receiving half of the event channel.
    let (events, mut rx) = EventSender::channel(EventSender::DEFAULT_CAPACITY);
    let consumer = tokio::spawn(async move {
        let mut updates = 0_u32;
        while let Some(event) = rx.recv().await {
            match event {
                StationEvent::LogUpdated => updates += 1,
                StationEvent::SettingsChanged => println!("(settings changed)"),
            }
        }
        updates
    });

    let log = ConsoleLog::with_default_capacity(events);
    log.append(format!(
        "settings loaded, {} station addresses",
        settings.addresses.len()
    ));
    log.append("nodelist compiled");
    log.append("uplink poll scheduled");

    for message in log.snapshot() {
        println!("{} {}", message.timestamp.format("%H:%M:%S"), message.text);
    }

    // Dropping the log closes the channel and ends the consumer.
    drop(log);
    let updates = consumer.await?;
    println!("Display redrew {updates} times");

    Ok(())
}
