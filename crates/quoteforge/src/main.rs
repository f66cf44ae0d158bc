//! QuoteForge - business quotation builder
//!
//! Usage: quoteforge <COMMAND>

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use log::info;

use quoteforge_api::ApiClient;
use quoteforge_layout::{FileStorage, LayoutStore};
use quoteforge_model::{CompanyProfile, QuotationDraft};
use quoteforge_render::print_document;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    let command = args[1].as_str();

    match command {
        "--help" | "-h" => {
            print_usage(&args[0]);
            ExitCode::SUCCESS
        }
        "--version" | "-V" => {
            println!("QuoteForge {}", VERSION);
            ExitCode::SUCCESS
        }
        "--demo" => {
            // Print a sample quotation with the stored layout
            if let Err(e) = run_demo() {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        "--render" => {
            // Print a quotation loaded from a JSON file
            if args.len() < 3 {
                eprintln!("Usage: {} --render <PATH>", args[0]);
                return ExitCode::FAILURE;
            }
            if let Err(e) = run_render(&args[2]) {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        "--reset-layout" => {
            if let Err(e) = run_reset() {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        "--company" => {
            // Fetch the company profile from the backend
            if let Err(e) = run_fetch_company().await {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        "--save-company" => {
            if args.len() < 3 {
                eprintln!("Usage: {} --save-company <PATH>", args[0]);
                return ExitCode::FAILURE;
            }
            if let Err(e) = run_save_company(&args[2]).await {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        "--upload-logo" => {
            if args.len() < 3 {
                eprintln!("Usage: {} --upload-logo <PATH>", args[0]);
                return ExitCode::FAILURE;
            }
            if let Err(e) = run_upload_logo(&args[2]).await {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            ExitCode::FAILURE
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"QuoteForge {} - business quotation builder

USAGE:
    {} <COMMAND>

COMMANDS:
    -h, --help             Print this help message
    -V, --version          Print version information
    --demo                 Print a sample quotation with the stored layout
    --render <PATH>        Print a quotation loaded from a JSON file
    --reset-layout         Restore the default layout and styles
    --company              Fetch the company profile from the backend
    --save-company <PATH>  Save a company profile JSON to the backend
    --upload-logo <PATH>   Upload a company logo image

ENVIRONMENT:
    QUOTEFORGE_DATA        Layout storage directory (default: .quoteforge)
    QUOTEFORGE_API_URL     Backend base URL (default: http://localhost:5000/)
    QUOTEFORGE_TOKEN       Bearer token for backend requests

EXAMPLES:
    {} --demo
    {} --render quotation.json
    {} --upload-logo logo.png

"#,
        VERSION, program, program, program, program
    );
}

fn data_dir() -> PathBuf {
    env::var_os("QUOTEFORGE_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".quoteforge"))
}

fn open_store() -> LayoutStore<FileStorage> {
    LayoutStore::restored(FileStorage::new(data_dir()))
}

fn api_client() -> Result<ApiClient, Box<dyn Error>> {
    let base = env::var("QUOTEFORGE_API_URL").unwrap_or_else(|_| "http://localhost:5000/".into());
    let mut client = ApiClient::new(&base)?;
    if let Ok(token) = env::var("QUOTEFORGE_TOKEN") {
        client.set_token(token);
    }
    Ok(client)
}

/// Print a sample quotation
fn run_demo() -> Result<(), Box<dyn Error>> {
    let store = open_store();
    let draft = demo_quotation();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_document(&draft, &store, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Print a quotation loaded from a JSON file
fn run_render(path: &str) -> Result<(), Box<dyn Error>> {
    let json = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let mut draft: QuotationDraft = serde_json::from_str(&json)?;
    draft.recalculate();

    let store = open_store();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_document(&draft, &store, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Restore the default layout and clear persisted state
fn run_reset() -> Result<(), Box<dyn Error>> {
    let mut store = open_store();
    store.reset()?;
    info!("Layout reset to defaults");
    Ok(())
}

/// Fetch and display the company profile
async fn run_fetch_company() -> Result<(), Box<dyn Error>> {
    let client = api_client()?;
    let profile = client.fetch_company().await?;

    if profile.is_empty() {
        println!("No company profile on record");
    } else {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    }
    Ok(())
}

/// Save a company profile from a JSON file
async fn run_save_company(path: &str) -> Result<(), Box<dyn Error>> {
    let json = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let profile: CompanyProfile = serde_json::from_str(&json)?;
    profile.validate()?;

    let client = api_client()?;
    let saved = client.save_company(&profile).await?;
    info!("Saved company profile for {}", saved.name);
    Ok(())
}

/// Upload a logo image
async fn run_upload_logo(path: &str) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let file_name = PathBuf::from(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("logo")
        .to_string();

    let client = api_client()?;
    let url = client.upload_logo(&file_name, bytes).await?;
    println!("Logo uploaded: {}", url);
    Ok(())
}

/// Sample quotation content
fn demo_quotation() -> QuotationDraft {
    let mut draft = QuotationDraft::new();
    draft.company_name = "Acme Traders".to_string();
    draft.company_address = "14 Market Road, Pune".to_string();
    draft.company_phone = "9876543210".to_string();
    draft.company_email = "sales@acmetraders.in".to_string();
    draft.company_gstin = "27AAPFU0939F1ZV".to_string();
    draft.client_name = "Bluestone Interiors".to_string();
    draft.client_address = "2 Hill View, Mumbai".to_string();
    draft.quote_number = "QT-2024-001".to_string();
    draft.quote_date = "2024-06-01".to_string();
    draft.valid_until = "2024-06-30".to_string();
    draft.notes = "Delivery within 2 weeks of confirmation.".to_string();
    draft.terms = "50% advance, balance on delivery.".to_string();

    draft.set_item(0, "Modular workstation", 4.0, 12500.0);
    draft.add_item();
    draft.set_item(1, "Ergonomic chair", 8.0, 4200.0);
    draft.set_tax_rate(18.0);
    draft
}
