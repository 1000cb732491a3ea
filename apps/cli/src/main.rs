use clap::Parser;
use deckit::config::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    deckit::init_tracing();

    if let Err(err) = deckit::run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
