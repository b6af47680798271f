//! transcript-stamp CLI entry point

use std::process::ExitCode;

use clap::Parser;

use transcript_stamp::cli::{
    app::{load_merged_config, run_merge, run_update, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use transcript_stamp::domain::config::AppConfig;
use transcript_stamp::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Update(args) => {
            // An explicit --output-dir also overrides a configured flat layout
            let cli_config = AppConfig {
                output_dir: args
                    .output_dir
                    .as_ref()
                    .map(|dir| dir.to_string_lossy().into_owned()),
                flat: if args.flat {
                    Some(true)
                } else if args.output_dir.is_some() {
                    Some(false)
                } else {
                    None
                },
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;
            run_update(args, config).await
        }
        Commands::Merge(args) => {
            let cli_config = AppConfig {
                keep_sources: if args.no_delete { Some(true) } else { None },
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;
            run_merge(args, config).await
        }
    }
}
