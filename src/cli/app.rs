//! Command runners for `update` and `merge`

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{MergeInput, MergeSegmentsUseCase, UpdateInput, UpdateTranscriptUseCase};
use crate::domain::config::AppConfig;
use crate::domain::{CalendarDate, ClockTime, OutputLayout};
use crate::infrastructure::{GlobPatternExpander, LocalTranscriptStore, XdgConfigStore};

use super::args::{MergeArgs, UpdateArgs};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the nested output root
pub const OUTPUT_DIR_ENV: &str = "TRANSCRIPT_STAMP_OUTPUT_DIR";

/// Run `update`: anchor the transcript's offsets and write the segment file
pub async fn run_update(args: UpdateArgs, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let start_time = match args.time.parse::<ClockTime>() {
        Ok(time) => time,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };
    let date = match args.date.parse::<CalendarDate>() {
        Ok(date) => date,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let layout = match resolve_layout(&config) {
        Ok(layout) => layout,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut input = UpdateInput::new(args.file, start_time, date, layout);
    input.max_file_size = config.max_file_size_or_default();

    let use_case = UpdateTranscriptUseCase::new(LocalTranscriptStore::new());
    match use_case.execute(input).await {
        Ok(output) => {
            if output.has_out_of_order_timestamps {
                presenter.warn("timestamps in input were not in chronological order");
            }
            presenter.path_line("Wrote", &output.output_path);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run `merge`: concatenate matching segments into one day file
pub async fn run_merge(args: MergeArgs, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let keep_sources = config.keep_sources_or_default();
    let mut input = MergeInput::new(args.patterns);
    input.output = args.output;
    input.keep_sources = keep_sources;
    input.max_file_size = config.max_file_size_or_default();

    let use_case = MergeSegmentsUseCase::new(LocalTranscriptStore::new(), GlobPatternExpander::new());

    presenter.start_spinner("Merging transcripts...");
    match use_case.execute(input).await {
        Ok(output) => {
            presenter.stop_spinner();
            for file in &output.files {
                presenter.path_line("", file);
            }
            presenter.path_line("Merged into", &output.output_path);
            if keep_sources {
                presenter.info(&format!("Kept {} source file(s)", output.files.len()));
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Merge failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Pick the output layout for `update` from the merged config
fn resolve_layout(config: &AppConfig) -> Result<OutputLayout, String> {
    if config.flat_or_default() {
        let working_dir = env::current_dir()
            .map_err(|e| format!("Failed to resolve working directory: {}", e))?;
        Ok(OutputLayout::Flat { working_dir })
    } else {
        Ok(OutputLayout::Nested {
            output_dir: config.output_dir_or_default(),
        })
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let env_config = AppConfig {
        output_dir: env::var(OUTPUT_DIR_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
