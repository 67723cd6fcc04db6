//! actionlog: in-memory user action logging over HTTP.
//! Used by: binary entrypoint.

pub mod console;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    console::print_banner();

    let state = state::build_state();
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    console::print_startup(&addr);
    tracing::info!("starting actionlog on {}", addr);

    server::run(state, &addr).await?;
    Ok(())
}
