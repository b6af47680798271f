//! Update transcript use case

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::clock::{CalendarDate, ClockTime, Timestamp};
use crate::domain::config::DEFAULT_MAX_FILE_SIZE;
use crate::domain::segment::OutputLayout;
use crate::domain::transcript::{TranscriptError, TranscriptProcessor};

use super::ports::{StoreError, TranscriptStore};

/// Errors from the update use case
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Transcript update failed: {0}")]
    Transcript(#[from] TranscriptError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input parameters for the update use case
#[derive(Debug, Clone)]
pub struct UpdateInput {
    /// Transcript whose offsets will be adjusted
    pub input_file: PathBuf,
    /// Wall-clock time that offset 00:00:00 corresponds to
    pub start_time: ClockTime,
    /// Calendar day the recording started on
    pub date: CalendarDate,
    /// Where the adjusted transcript goes
    pub layout: OutputLayout,
    pub max_file_size: u64,
}

impl UpdateInput {
    pub fn new(
        input_file: impl Into<PathBuf>,
        start_time: ClockTime,
        date: CalendarDate,
        layout: OutputLayout,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            start_time,
            date,
            layout,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Output from the update use case
#[derive(Debug, Clone)]
pub struct UpdateOutput {
    pub output_path: PathBuf,
    pub first_timestamp: Timestamp,
    pub last_timestamp: Timestamp,
    /// Timestamps in the input were not in chronological order
    pub has_out_of_order_timestamps: bool,
}

/// Adjusts one transcript and writes it under its derived segment name
pub struct UpdateTranscriptUseCase<S>
where
    S: TranscriptStore,
{
    store: S,
}

impl<S> UpdateTranscriptUseCase<S>
where
    S: TranscriptStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read, adjust and write the transcript
    pub async fn execute(&self, input: UpdateInput) -> Result<UpdateOutput, UpdateError> {
        let contents = self
            .store
            .read_limited(&input.input_file, input.max_file_size)
            .await?;

        let transcript = TranscriptProcessor::adjust(&contents, input.start_time, input.date)?;
        let output_path = input
            .layout
            .segment_path(&transcript.first_timestamp, &transcript.last_timestamp);

        self.store.write_atomic(&output_path, &transcript.body).await?;

        Ok(UpdateOutput {
            output_path,
            first_timestamp: transcript.first_timestamp,
            last_timestamp: transcript.last_timestamp,
            has_out_of_order_timestamps: transcript.has_out_of_order_timestamps,
        })
    }
}
