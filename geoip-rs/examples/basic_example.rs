use geoip_rs::{GeoIp, Provider};

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt().with_target(false).init();

    let geoip = GeoIp::init(None).expect("failed to build HTTP client");

    let reachable = geoip
        .probe_with(&Provider::defaults(), |provider, ok| {
            println!("{provider}: {}", if ok { "reachable" } else { "unreachable" });
        })
        .await;

    match geoip.fetch(&reachable, "8.8.8.8").await {
        Some(data) => println!("{}", serde_json::to_string_pretty(&data).unwrap()),
        None => println!("No data found for 8.8.8.8"),
    }
}
