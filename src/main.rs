//! # Heartbeat Mock
//!
//! `heartbeat-mock` is a fixed-payload HTTP server intended for use as a test double in
//! integration tests. Every request, regardless of path or method, receives the same canned
//! configuration document. For more details, refer to individual module documentation.
use heartbeat_mock::{config, startup, telemetry};
use std::net::TcpListener;

/// Entrypoint for the application.
#[tokio::main]
async fn main() -> hyper::Result<()> {
    let subscriber =
        telemetry::get_subscriber("heartbeat-mock".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber);

    let configuration = config::get_configuration().expect("Failed to read configuration.");
    let address = format!("{}:{}", configuration.application.host, configuration.application.port);
    println!("Listening on {}", address);
    let listener = TcpListener::bind(address).expect("Unable to bind to port");
    startup::run(listener)?.await
}
