mod logging;

use accountapi::generator::sample_for_country;
use accountapi::reference::supported_country_codes;
use accountapi::{Account, AccountOptions, Attributes, Client, ClientConfig, ACCOUNT_TYPE};
use clap::{Args, Parser, Subcommand};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "accountapi")]
#[command(about = "Account API client and attribute checker", long_about = None)]
struct Cli {
    /// Base URL of the accounts resource; ACCOUNTAPI_BASE_URL takes precedence.
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[arg(long, global = true, default_value_t = 3000)]
    timeout_ms: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Check(AttributeArgs),
    Sample(SampleArgs),
    Create(CreateArgs),
    Fetch(FetchArgs),
    List(ListArgs),
    Delete(DeleteArgs),
}

#[derive(Args)]
struct AttributeArgs {
    #[arg(long, default_value = "")]
    country: String,
    #[arg(long, default_value = "")]
    base_currency: String,
    #[arg(long, default_value = "")]
    bank_id: String,
    #[arg(long, default_value = "")]
    bank_id_code: String,
    #[arg(long, default_value = "")]
    account_number: String,
    #[arg(long, default_value = "")]
    bic: String,
    #[arg(long, default_value = "")]
    customer_id: String,
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long = "alternative-name")]
    alternative_names: Vec<String>,
    #[arg(long, default_value_t = false)]
    joint_account: bool,
    #[arg(long, default_value_t = false)]
    account_matching_opt_out: bool,
}

impl AttributeArgs {
    fn into_attributes(self) -> Attributes {
        Attributes {
            country: self.country,
            base_currency: self.base_currency,
            bank_id: self.bank_id,
            bank_id_code: self.bank_id_code,
            account_number: self.account_number,
            bic: self.bic,
            customer_id: self.customer_id,
            first_name: self.first_name,
            alternative_bank_account_names: self.alternative_names,
            joint_account: self.joint_account,
            account_matching_opt_out: self.account_matching_opt_out,
        }
    }
}

#[derive(Args)]
struct SampleArgs {
    #[arg(long)]
    country: String,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = false)]
    without_account_number: bool,
}

#[derive(Args)]
struct CreateArgs {
    /// Generated when omitted.
    #[arg(long)]
    id: Option<String>,
    /// Generated when omitted.
    #[arg(long)]
    organisation_id: Option<String>,
    #[arg(long = "type", default_value = ACCOUNT_TYPE)]
    account_type: String,
    #[command(flatten)]
    attributes: AttributeArgs,
}

#[derive(Args)]
struct FetchArgs {
    #[arg(long)]
    id: String,
}

#[derive(Args)]
struct ListArgs {
    #[arg(long, default_value_t = 0)]
    page_number: u64,
    #[arg(long, default_value_t = 100)]
    page_size: u64,
}

#[derive(Args)]
struct DeleteArgs {
    #[arg(long)]
    id: String,
    #[arg(long, default_value_t = 0)]
    version: u64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("accountapi")?;
    let cli = Cli::parse();
    let config = ClientConfig::from_env(cli.base_url.as_deref())
        .timeout(Duration::from_millis(cli.timeout_ms));
    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Sample(args) => run_sample(args),
        Command::Create(args) => run_create(config, args),
        Command::Fetch(args) => run_fetch(config, args),
        Command::List(args) => run_list(config, args),
        Command::Delete(args) => run_delete(config, args),
    }
}

fn run_check(args: AttributeArgs) -> Result<(), String> {
    let attributes = args.into_attributes();
    match attributes.validate() {
        Ok(()) => {
            emit_info_line(&format!(
                "Attributes are valid for country {}",
                attributes.country
            ));
            Ok(())
        }
        Err(errors) => {
            for err in &errors {
                emit_info_line(&format!("Violation: {err}"));
            }
            Err(format!("{} attribute violation(s)", errors.len()))
        }
    }
}

fn run_sample(args: SampleArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let attributes = sample_for_country(&args.country, seed, !args.without_account_number)
        .ok_or_else(|| {
            let supported: Vec<&str> = supported_country_codes().collect();
            format!(
                "unsupported country '{}' (expected one of {})",
                args.country,
                supported.join(", ")
            )
        })?;
    log::info!("Sample for {} (seed {})", args.country, seed);
    print_json(&attributes)
}

fn run_create(config: ClientConfig, args: CreateArgs) -> Result<(), String> {
    let id = args.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let organisation_id = args
        .organisation_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let mut options = AccountOptions::new(id, organisation_id)
        .with_attributes(args.attributes.into_attributes());
    options.account_type = args.account_type;

    let account = Account::new(options).map_err(|err| err.to_string())?;
    let client = Client::new(config).map_err(|err| err.to_string())?;
    let stored = client.create(&account).map_err(|err| err.to_string())?;
    emit_info_line(&format!(
        "Created account {} (version {})",
        stored.id(),
        stored.version().unwrap_or_default()
    ));
    print_json(&stored)
}

fn run_fetch(config: ClientConfig, args: FetchArgs) -> Result<(), String> {
    let client = Client::new(config).map_err(|err| err.to_string())?;
    let account = client.fetch(&args.id).map_err(|err| err.to_string())?;
    print_json(&account)
}

fn run_list(config: ClientConfig, args: ListArgs) -> Result<(), String> {
    let client = Client::new(config).map_err(|err| err.to_string())?;
    let page = client
        .list(args.page_number, args.page_size)
        .map_err(|err| err.to_string())?;
    emit_info_line(&format!(
        "Page {} holds {} account(s)",
        args.page_number,
        page.data.len()
    ));
    print_json(&page)
}

fn run_delete(config: ClientConfig, args: DeleteArgs) -> Result<(), String> {
    let client = Client::new(config).map_err(|err| err.to_string())?;
    client
        .delete(&args.id, args.version)
        .map_err(|err| err.to_string())?;
    emit_info_line(&format!(
        "Deleted account {} at version {}",
        args.id, args.version
    ));
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{rendered}");
    Ok(())
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        eprintln!("{message}");
    }
}
