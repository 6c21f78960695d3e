//! Moip CLI
//!
//! Command-line interface for the Moip v2 API resources.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use moip_client::{Environment, Moip, Refund, RefundOwner, Resource};
use moip_types::{BankAccountType, BankCode};

#[derive(Parser)]
#[command(name = "moip")]
#[command(author, version, about = "Moip API CLI client", long_about = None)]
struct Cli {
    /// API environment (sandbox, production)
    #[arg(long, env = "MOIP_ENVIRONMENT", default_value = "sandbox")]
    environment: String,

    /// Endpoint URL, overrides the environment
    #[arg(long, env = "MOIP_ENDPOINT")]
    endpoint: Option<String>,

    /// Authorization header value sent with every request
    #[arg(long, env = "MOIP_AUTHORIZATION")]
    authorization: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ledger entry operations
    Entry {
        #[command(subcommand)]
        action: GetCommand,
    },
    /// Order operations
    Order {
        #[command(subcommand)]
        action: GetCommand,
    },
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: GetCommand,
    },
    /// Customer operations
    Customer {
        #[command(subcommand)]
        action: GetCommand,
    },
    /// Refund operations
    Refund {
        #[command(subcommand)]
        action: RefundCommands,
    },
}

#[derive(Subcommand)]
enum GetCommand {
    /// Get a resource by ID
    Get {
        /// Resource ID
        id: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Target {
    /// Order ID (ORD-...)
    #[arg(long)]
    order: Option<String>,
    /// Payment ID (PAY-...)
    #[arg(long)]
    payment: Option<String>,
}

#[derive(Subcommand)]
enum RefundCommands {
    /// List refunds of an order or payment
    List {
        #[command(flatten)]
        target: Target,
    },
    /// Refund to the original credit card
    CreditCard {
        #[command(flatten)]
        target: Target,
        /// Partial amount in centavos; omit for a full refund
        #[arg(long)]
        amount: Option<i64>,
    },
    /// Refund to a bank account
    BankAccount {
        #[command(flatten)]
        target: Target,
        /// Partial amount in centavos; omit for a full refund
        #[arg(long)]
        amount: Option<i64>,
        /// Bank account type (CHECKING, SAVING)
        #[arg(long, default_value = "CHECKING")]
        account_type: String,
        #[arg(long)]
        bank_number: String,
        /// Agency code; leading zeros are kept
        #[arg(long)]
        agency_number: BankCode,
        #[arg(long)]
        agency_check_number: BankCode,
        /// Account code; leading zeros are kept
        #[arg(long)]
        account_number: BankCode,
        #[arg(long)]
        account_check_number: BankCode,
        #[arg(long)]
        holder_name: String,
        #[arg(long, default_value = "CPF")]
        tax_document_type: String,
        #[arg(long)]
        tax_document_number: String,
    },
}

fn build_client(cli: &Cli) -> Result<Moip> {
    let mut moip = match &cli.endpoint {
        Some(endpoint) => Moip::new(endpoint.as_str()),
        None => {
            let environment: Environment = cli
                .environment
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            Moip::for_environment(environment)
        }
    };
    if let Some(authorization) = &cli.authorization {
        moip = moip.with_authorization(authorization.as_str());
    }
    tracing::debug!(?moip, "client configured");
    Ok(moip)
}

fn refund_for(moip: &Moip, target: Target) -> Result<Refund> {
    let owner = match (target.order, target.payment) {
        (Some(order), None) => RefundOwner::Order(order),
        (None, Some(payment)) => RefundOwner::Payment(payment),
        _ => anyhow::bail!("Specify exactly one of --order or --payment"),
    };
    Ok(moip.refunds().with_owner(owner))
}

fn print_json<R: Resource>(resource: &R) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&resource.to_json()?)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,moip_client=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let moip = build_client(&cli)?;

    match cli.command {
        Commands::Entry {
            action: GetCommand::Get { id },
        } => print_json(&moip.entries().get(&id).await?)?,
        Commands::Order {
            action: GetCommand::Get { id },
        } => print_json(&moip.orders().get(&id).await?)?,
        Commands::Payment {
            action: GetCommand::Get { id },
        } => print_json(&moip.payments().get(&id).await?)?,
        Commands::Customer {
            action: GetCommand::Get { id },
        } => print_json(&moip.customers().get(&id).await?)?,

        Commands::Refund { action } => match action {
            RefundCommands::List { target } => {
                let refunds = refund_for(&moip, target)?.list().await?;
                let docs = refunds
                    .map(|refund| refund.to_json())
                    .collect::<Result<Vec<_>, _>>()?;
                println!("{}", serde_json::to_string_pretty(&docs)?);
            }
            RefundCommands::CreditCard { target, amount } => {
                let refunds = refund_for(&moip, target)?;
                let refund = match amount {
                    Some(amount) => refunds.credit_card_partial(amount).await?,
                    None => refunds.credit_card_full().await?,
                };
                print_json(&refund)?;
            }
            RefundCommands::BankAccount {
                target,
                amount,
                account_type,
                bank_number,
                agency_number,
                agency_check_number,
                account_number,
                account_check_number,
                holder_name,
                tax_document_type,
                tax_document_number,
            } => {
                let account_type: BankAccountType =
                    account_type.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                let holder = moip
                    .customers()
                    .with_fullname(holder_name)
                    .with_tax_document(tax_document_type, tax_document_number);
                let refunds = refund_for(&moip, target)?;
                let refund = match amount {
                    Some(amount) => {
                        refunds
                            .bank_account_partial(
                                amount,
                                account_type,
                                bank_number,
                                agency_number,
                                agency_check_number,
                                account_number,
                                account_check_number,
                                &holder,
                            )
                            .await?
                    }
                    None => {
                        refunds
                            .bank_account_full(
                                account_type,
                                bank_number,
                                agency_number,
                                agency_check_number,
                                account_number,
                                account_check_number,
                                &holder,
                            )
                            .await?
                    }
                };
                print_json(&refund)?;
            }
        },
    }

    Ok(())
}
