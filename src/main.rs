//! Port order client.
//!
//! Talks to the port order sample service through a client declared with
//! `rest_service!`.
//!
//! ```text
//! port-order-client --config client.toml get-by-id 23
//! port-order-client --base-url http://localhost:5000 schedule 23 --to-date 2026-10-20 \
//!     --donor Vodafone --recipient Meo
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use rest_proxy::config::{load_config, ClientConfig, ConfigSettings};
use rest_proxy::observability::init_logging;
use rest_proxy::proxy::{Dispatcher, ProxyFactory};
use rest_proxy::{rest_service, RestProxy};

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAllRequest {}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAllResponse {
    #[serde(default)]
    pub msisdns: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetByIdRequest {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetByIdResponse {
    pub msisdn: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNewPortOrderRequest {
    pub msisdn: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNewPortOrderResponse {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchedulePortOrderRequest {
    pub id: String,
    pub to_date: String,
    pub recipient_network_operator: String,
    pub donor_network_operator: String,
}

rest_service! {
    /// Port order management.
    #[service(setting = "ServerEndpoint")]
    pub trait PortOrderService => PortOrderServiceClient {
        #[route(GET, "/portOrders")]
        fn get_all(&self, request: GetAllRequest) -> GetAllResponse;

        #[route(GET, "/portOrder/{Id}")]
        fn get_by_id(&self, request: GetByIdRequest) -> GetByIdResponse;

        #[route(POST, "/portOrders")]
        fn create_new_port_order(&self, request: CreateNewPortOrderRequest) -> CreateNewPortOrderResponse;

        /// The service answers with an empty body.
        #[route(PUT, "/portOrder/{Id}/")]
        fn schedule_port_order(&self, request: SchedulePortOrderRequest);
    }
}

#[derive(Parser)]
#[command(name = "port-order-client")]
#[command(about = "Client for the port order service", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the `ServerEndpoint` base URL
    #[arg(short, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all port orders
    GetAll,
    /// Show one port order
    GetById { id: String },
    /// Create a port order for a number
    Create { msisdn: String },
    /// Schedule a port order
    Schedule {
        id: String,
        #[arg(long)]
        to_date: String,
        #[arg(long)]
        donor: String,
        #[arg(long)]
        recipient: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_urls.insert("ServerEndpoint".to_string(), base_url);
    }

    init_logging(&config.logging)?;

    tracing::info!(
        config = ?cli.config,
        base_urls = config.base_urls.len(),
        "Configuration loaded"
    );

    let executor = Arc::new(RestProxy::from_config(&config)?);
    let settings = Arc::new(ConfigSettings::from_config(&config));
    let factory = ProxyFactory::for_client(executor, move |executor| {
        PortOrderServiceClient::new(Dispatcher::new(executor, settings.clone()))
    })?;
    let service = factory.create_proxy();

    match cli.command {
        Commands::GetAll => {
            let response = service.get_all(GetAllRequest::default()).await?;
            print_response("GetAll", &response)?;
        }
        Commands::GetById { id } => {
            let response = service.get_by_id(GetByIdRequest { id }).await?;
            print_response("GetById", &response)?;
        }
        Commands::Create { msisdn } => {
            let response = service
                .create_new_port_order(CreateNewPortOrderRequest { msisdn })
                .await?;
            print_response("CreateNewPortOrder", &response)?;
        }
        Commands::Schedule {
            id,
            to_date,
            donor,
            recipient,
        } => {
            service
                .schedule_port_order(SchedulePortOrderRequest {
                    id,
                    to_date,
                    recipient_network_operator: recipient,
                    donor_network_operator: donor,
                })
                .await?;
            println!("SchedulePortOrder");
            println!("No response");
        }
    }

    Ok(())
}

fn print_response<T: Serialize>(label: &str, response: &T) -> Result<(), serde_json::Error> {
    println!("{label}");
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
