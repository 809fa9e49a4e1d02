//! Aggregating service: identity line plus the bodies of
//! `PRODUCT_SVC_URL` and `CUSTOMER_SVC_URL`, when set.

use clap::Parser;
use container_services::config::ServiceArgs;
use container_services::{run_service, ServiceKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServiceArgs::parse();
    run_service(ServiceKind::Order, args).await
}
