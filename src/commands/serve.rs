use crate::{
    OasGuardError, Result, loader,
    server::{self, api::AppState},
    validation::{Validator, ValidatorConfig},
};
use colored::*;
use std::net::SocketAddr;
use std::path::Path;

pub async fn execute_serve(document_path: &Path, port: u16, config: ValidatorConfig) -> Result<()> {
    println!("{}", "Starting validation service...".bright_blue());
    println!("  Document: {}", document_path.display());
    println!("  Port: {}", port);
    println!();

    let document = loader::load_document(document_path)?;
    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .map_err(|e| OasGuardError::ValidationError(format!("Invalid address: {}", e)))?;

    server::start_server(addr, AppState::new(document, Validator::new(config))).await
}
