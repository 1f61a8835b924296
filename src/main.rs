use crate::catalog::Catalog;
use crate::config::Args;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use chrono::Utc;
use clap::Parser;
use tracing::{error, info};

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;


fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    // 1️⃣ Load and validate the catalog
    let loaded = match &args.catalog {
        Some(path) => Catalog::load(path),
        None => Catalog::bundled(),
    };
    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("❌ Catalog failed to load: {e}");
            std::process::exit(1);
        }
    };
    info!("Loaded {} shoes", catalog.len());

    // 2️⃣ Start the server
    info!("Starting server at http://{}", args.addr);
    let server = Server::bind(&args.addr).max_workers(args.workers);

    // 3️⃣ Serve requests, each one judged against the current UTC date
    let result = server.serve(move |req, _info| {
        let today = Utc::now().date_naive();
        match handle(req, &catalog, today) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
