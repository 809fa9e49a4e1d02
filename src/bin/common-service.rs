//! Identity service: `GET /` → `{"service":...,"version":...}`.

use clap::Parser;
use container_services::config::ServiceArgs;
use container_services::{run_service, ServiceKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServiceArgs::parse();
    run_service(ServiceKind::Common, args).await
}
