use clap::Parser;
use peerwatch::cli::{
    handle_completions, handle_config_init, health, load_config_or_default, network, Cli,
    Commands, ConfigCommands,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => peerwatch::cli::serve::run_serve(args).await,
        Commands::Health(args) => match load_config_or_default(&args.config) {
            Ok(config) => {
                health::handle_health(&args, &config).map(|output| println!("{}", output))
            }
            Err(e) => Err(e.into()),
        },
        Commands::Network(args) => match load_config_or_default(&args.config) {
            Ok(config) => network::handle_network(&args, &config)
                .await
                .map(|output| println!("{}", output)),
            Err(e) => Err(e.into()),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => {
                handle_config_init(&args).map(|output| println!("{}", output))
            }
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
