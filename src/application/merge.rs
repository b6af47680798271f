//! Merge segments use case

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::clock::CalendarDate;
use crate::domain::config::DEFAULT_MAX_FILE_SIZE;
use crate::domain::error::UnrecognizedFilenameError;
use crate::domain::segment::{merged_file_name, nested_day_directory, SegmentName};

use super::ports::{PatternError, PatternExpander, StoreError, TranscriptStore};

/// Errors from the merge use case
#[derive(Debug, Error)]
pub enum MergeError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("No files matched pattern '{0}'")]
    NoMatches(String),

    #[error(transparent)]
    UnrecognizedFilename(#[from] UnrecognizedFilenameError),

    #[error("Files correspond to multiple dates; supply --output to choose the destination")]
    MixedDates,

    #[error("Unable to determine an output filename; rerun with --output <file>")]
    UndeterminedDate,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input parameters for the merge use case
#[derive(Debug, Clone)]
pub struct MergeInput {
    /// Paths or glob patterns, expanded in order
    pub patterns: Vec<String>,
    /// Explicit destination; inferred from the segments when absent
    pub output: Option<PathBuf>,
    /// Leave the merged segments in place
    pub keep_sources: bool,
    pub max_file_size: u64,
}

impl MergeInput {
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            output: None,
            keep_sources: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Output from the merge use case
#[derive(Debug, Clone)]
pub struct MergeOutput {
    /// Segments merged (and deleted unless kept), in chronological order
    pub files: Vec<PathBuf>,
    pub output_path: PathBuf,
}

/// Concatenates transcript segments in chronological order
pub struct MergeSegmentsUseCase<S, P>
where
    S: TranscriptStore,
    P: PatternExpander,
{
    store: S,
    expander: P,
}

impl<S, P> MergeSegmentsUseCase<S, P>
where
    S: TranscriptStore,
    P: PatternExpander,
{
    pub fn new(store: S, expander: P) -> Self {
        Self { store, expander }
    }

    /// Execute the merge workflow
    ///
    /// Nothing is written or deleted until every input has been matched, size
    /// checked and recognized.
    pub async fn execute(&self, input: MergeInput) -> Result<MergeOutput, MergeError> {
        let collected = self.expand_patterns(&input.patterns).await?;

        for path in &collected {
            let size = self.store.size(path).await?;
            if size > input.max_file_size {
                return Err(StoreError::TooLarge {
                    path: path.display().to_string(),
                    size,
                    max: input.max_file_size,
                }
                .into());
            }
        }

        let mut segments = collected
            .into_iter()
            .map(|path| {
                let name = SegmentName::from_path(&path)?;
                Ok((path, name))
            })
            .collect::<Result<Vec<_>, MergeError>>()?;

        // Stable: equal keys keep pattern order
        segments.sort_by_key(|(_, name)| name.sort_key());

        let mut seen = HashSet::new();
        segments.retain(|(path, _)| seen.insert(path.clone()));

        let output_path = resolve_output_path(&segments, input.output.as_deref())?;

        // An input that is also the destination is read, but never reported or deleted
        let output_canonical = self.store.canonical_path(&output_path).await;
        let mut sources = Vec::with_capacity(segments.len());
        for (path, _) in &segments {
            if self.store.canonical_path(path).await != output_canonical {
                sources.push(path.clone());
            }
        }

        let mut merged = String::new();
        for (idx, (path, _)) in segments.iter().enumerate() {
            let segment = self.store.read_limited(path, input.max_file_size).await?;
            merged.push_str(&segment);
            if idx + 1 != segments.len() && !merged.ends_with('\n') {
                merged.push('\n');
            }
        }

        self.store.write_atomic(&output_path, &merged).await?;

        if !input.keep_sources {
            self.delete_sources(&sources, &output_path).await?;
        }

        Ok(MergeOutput {
            files: sources,
            output_path,
        })
    }

    async fn expand_patterns(&self, patterns: &[String]) -> Result<Vec<PathBuf>, MergeError> {
        let mut collected = Vec::new();
        for pattern in patterns {
            let matches = self.expander.expand(pattern).await?;
            if matches.is_empty() {
                return Err(MergeError::NoMatches(pattern.clone()));
            }
            collected.extend(matches);
        }
        Ok(collected)
    }

    async fn delete_sources(&self, sources: &[PathBuf], output_path: &Path) -> Result<(), MergeError> {
        // The output exists now, so this resolves through any symlinks
        let output_canonical = self.store.canonical_path(output_path).await;
        for path in sources {
            if self.store.canonical_path(path).await == output_canonical {
                continue;
            }
            self.store.remove(path).await?;
        }
        Ok(())
    }
}

/// Pick the merge destination.
///
/// In order: the explicit path, a day directory shared by every segment,
/// the single date shared by all dated segments.
fn resolve_output_path(
    segments: &[(PathBuf, SegmentName)],
    explicit: Option<&Path>,
) -> Result<PathBuf, MergeError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some((day_dir, date)) = common_day_directory(segments) {
        return Ok(merged_file_name(&day_dir, date));
    }

    let mut selected: Option<CalendarDate> = None;
    for date in segments.iter().filter_map(|(_, name)| name.date) {
        match selected {
            Some(existing) if existing != date => return Err(MergeError::MixedDates),
            Some(_) => {}
            None => selected = Some(date),
        }
    }

    let date = selected.ok_or(MergeError::UndeterminedDate)?;
    let base_dir = segments
        .first()
        .and_then(|(path, _)| path.parent())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(merged_file_name(&base_dir, date))
}

fn common_day_directory(segments: &[(PathBuf, SegmentName)]) -> Option<(PathBuf, CalendarDate)> {
    let mut candidate: Option<(PathBuf, CalendarDate)> = None;
    for (path, _) in segments {
        let info = nested_day_directory(path)?;
        match &candidate {
            Some(existing) if *existing == info => {}
            Some(_) => return None,
            None => candidate = Some(info),
        }
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MemoryStore, StaticExpander};

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn nested_store() -> MemoryStore {
        MemoryStore::with_files([
            ("2025/01/27/112256-162256.txt", "late segment\n"),
            ("2025/01/27/061901-111901.txt", "early segment\n"),
        ])
    }

    fn nested_expander() -> StaticExpander {
        StaticExpander::new([(
            "2025/01/27/*",
            vec!["2025/01/27/061901-111901.txt", "2025/01/27/112256-162256.txt"],
        )])
    }

    #[tokio::test]
    async fn merges_nested_segments_in_order() {
        let store = nested_store();
        let use_case = MergeSegmentsUseCase::new(store.clone(), nested_expander());

        let output = use_case
            .execute(MergeInput::new(patterns(&["2025/01/27/*"])))
            .await
            .unwrap();

        assert_eq!(
            output.files,
            vec![
                PathBuf::from("2025/01/27/061901-111901.txt"),
                PathBuf::from("2025/01/27/112256-162256.txt"),
            ]
        );
        assert_eq!(output.output_path, Path::new("2025/01/27/2025-01-27.txt"));
        assert_eq!(
            store.contents("2025/01/27/2025-01-27.txt").unwrap(),
            "early segment\nlate segment\n"
        );
        assert!(store.contents("2025/01/27/061901-111901.txt").is_none());
        assert!(store.contents("2025/01/27/112256-162256.txt").is_none());
    }

    #[tokio::test]
    async fn orders_explicit_paths_by_time_not_argument_order() {
        let store = nested_store();
        let expander = StaticExpander::new([
            ("late", vec!["2025/01/27/112256-162256.txt"]),
            ("early", vec!["2025/01/27/061901-111901.txt"]),
        ]);
        let use_case = MergeSegmentsUseCase::new(store.clone(), expander);

        let output = use_case
            .execute(MergeInput::new(patterns(&["late", "early"])))
            .await
            .unwrap();

        assert!(output.files[0].ends_with("061901-111901.txt"));
        assert_eq!(
            store.contents(&output.output_path).unwrap(),
            "early segment\nlate segment\n"
        );
    }

    #[tokio::test]
    async fn keep_sources_leaves_segments() {
        let store = nested_store();
        let use_case = MergeSegmentsUseCase::new(store.clone(), nested_expander());

        let mut input = MergeInput::new(patterns(&["2025/01/27/*"]));
        input.keep_sources = true;
        use_case.execute(input).await.unwrap();

        assert!(store.removals().is_empty());
        assert_eq!(store.file_count(), 3);
    }

    #[tokio::test]
    async fn explicit_output_is_used_verbatim() {
        let store = nested_store();
        let use_case = MergeSegmentsUseCase::new(store.clone(), nested_expander());

        let mut input = MergeInput::new(patterns(&["2025/01/27/*"]));
        input.output = Some(PathBuf::from("combined.txt"));
        let output = use_case.execute(input).await.unwrap();

        assert_eq!(output.output_path, Path::new("combined.txt"));
        assert_eq!(
            store.contents("combined.txt").unwrap(),
            "early segment\nlate segment\n"
        );
    }

    #[tokio::test]
    async fn output_equal_to_input_is_read_once_and_kept() {
        let store = nested_store();
        let use_case = MergeSegmentsUseCase::new(store.clone(), nested_expander());

        let mut input = MergeInput::new(patterns(&["2025/01/27/*"]));
        input.output = Some(PathBuf::from("2025/01/27/061901-111901.txt"));
        let output = use_case.execute(input).await.unwrap();

        assert_eq!(output.files, vec![PathBuf::from("2025/01/27/112256-162256.txt")]);
        assert_eq!(
            store.contents("2025/01/27/061901-111901.txt").unwrap(),
            "early segment\nlate segment\n"
        );
        assert_eq!(
            store.removals(),
            vec![PathBuf::from("2025/01/27/112256-162256.txt")]
        );
    }

    #[tokio::test]
    async fn duplicate_matches_are_merged_once() {
        let store = nested_store();
        let expander = StaticExpander::new([
            (
                "2025/01/27/*",
                vec!["2025/01/27/061901-111901.txt", "2025/01/27/112256-162256.txt"],
            ),
            ("2025/01/27/06*", vec!["2025/01/27/061901-111901.txt"]),
        ]);
        let use_case = MergeSegmentsUseCase::new(store.clone(), expander);

        let output = use_case
            .execute(MergeInput::new(patterns(&["2025/01/27/*", "2025/01/27/06*"])))
            .await
            .unwrap();

        assert_eq!(output.files.len(), 2);
        assert_eq!(
            store.contents(&output.output_path).unwrap(),
            "early segment\nlate segment\n"
        );
    }

    #[tokio::test]
    async fn inserts_missing_newline_between_segments_only() {
        let store = MemoryStore::with_files([
            ("20250127_061901_111901.txt", "first"),
            ("20250127_112256_162256.txt", "second"),
        ]);
        let expander = StaticExpander::new([(
            "*.txt",
            vec!["20250127_112256_162256.txt", "20250127_061901_111901.txt"],
        )]);
        let use_case = MergeSegmentsUseCase::new(store.clone(), expander);

        let output = use_case
            .execute(MergeInput::new(patterns(&["*.txt"])))
            .await
            .unwrap();

        assert_eq!(output.output_path, Path::new("2025-01-27.txt"));
        assert_eq!(store.contents("2025-01-27.txt").unwrap(), "first\nsecond");
    }

    #[tokio::test]
    async fn flat_segments_share_first_directory() {
        let store = MemoryStore::with_files([
            ("inbox/20250127_112256_162256.txt", "late\n"),
            ("inbox/20250127_061901_111901.txt", "early\n"),
        ]);
        let expander = StaticExpander::new([(
            "inbox/*",
            vec!["inbox/20250127_061901_111901.txt", "inbox/20250127_112256_162256.txt"],
        )]);
        let use_case = MergeSegmentsUseCase::new(store.clone(), expander);

        let output = use_case
            .execute(MergeInput::new(patterns(&["inbox/*"])))
            .await
            .unwrap();

        assert_eq!(output.output_path, Path::new("inbox/2025-01-27.txt"));
        assert_eq!(store.contents("inbox/2025-01-27.txt").unwrap(), "early\nlate\n");
    }

    #[tokio::test]
    async fn undated_segments_sort_after_dated_ones() {
        let store = MemoryStore::with_files([
            ("inbox/010000-020000.txt", "undated\n"),
            ("inbox/20250127_230000_235959.txt", "dated\n"),
        ]);
        let expander = StaticExpander::new([(
            "inbox/*",
            vec!["inbox/010000-020000.txt", "inbox/20250127_230000_235959.txt"],
        )]);
        let use_case = MergeSegmentsUseCase::new(store.clone(), expander);

        let output = use_case
            .execute(MergeInput::new(patterns(&["inbox/*"])))
            .await
            .unwrap();

        assert!(output.files[0].ends_with("20250127_230000_235959.txt"));
        assert_eq!(output.output_path, Path::new("inbox/2025-01-27.txt"));
        assert_eq!(store.contents(&output.output_path).unwrap(), "dated\nundated\n");
    }

    #[tokio::test]
    async fn unmatched_pattern_fails() {
        let use_case = MergeSegmentsUseCase::new(nested_store(), nested_expander());

        let err = use_case
            .execute(MergeInput::new(patterns(&["2025/01/27/*", "missing/*"])))
            .await
            .unwrap_err();

        assert!(matches!(err, MergeError::NoMatches(ref p) if p == "missing/*"));
    }

    #[tokio::test]
    async fn invalid_pattern_fails() {
        let use_case = MergeSegmentsUseCase::new(nested_store(), nested_expander());

        let err = use_case
            .execute(MergeInput::new(patterns(&["2025/[01"])))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MergeError::Pattern(PatternError::InvalidPattern { .. })
        ));
    }

    #[tokio::test]
    async fn unrecognized_filename_aborts_without_side_effects() {
        let store = MemoryStore::with_files([
            ("2025/01/27/112256-162256.txt", "segment\n"),
            ("2025/01/27/notes.txt", "random notes\n"),
        ]);
        let expander = StaticExpander::new([(
            "2025/01/27/*.txt",
            vec!["2025/01/27/112256-162256.txt", "2025/01/27/notes.txt"],
        )]);
        let use_case = MergeSegmentsUseCase::new(store.clone(), expander);

        let err = use_case
            .execute(MergeInput::new(patterns(&["2025/01/27/*.txt"])))
            .await
            .unwrap_err();

        assert!(matches!(err, MergeError::UnrecognizedFilename(ref e) if e.path.ends_with("notes.txt")));
        assert!(store.writes().is_empty());
        assert!(store.removals().is_empty());
    }

    #[tokio::test]
    async fn oversized_segment_aborts_before_reading() {
        let store = nested_store();
        let use_case = MergeSegmentsUseCase::new(store.clone(), nested_expander());

        let mut input = MergeInput::new(patterns(&["2025/01/27/*"]));
        input.max_file_size = 13;
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(
            err,
            MergeError::Store(StoreError::TooLarge { ref path, size: 14, max: 13 })
                if path.ends_with("061901-111901.txt")
        ));
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn conflicting_flat_dates_are_rejected() {
        let store = MemoryStore::with_files([
            ("a/20250127_061901_111901.txt", "one\n"),
            ("b/20250128_061901_111901.txt", "two\n"),
        ]);
        let expander = StaticExpander::new([(
            "*",
            vec!["a/20250127_061901_111901.txt", "b/20250128_061901_111901.txt"],
        )]);
        let use_case = MergeSegmentsUseCase::new(store.clone(), expander);

        let err = use_case
            .execute(MergeInput::new(patterns(&["*"])))
            .await
            .unwrap_err();

        assert!(matches!(err, MergeError::MixedDates));
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn undated_only_segments_need_explicit_output() {
        let store = MemoryStore::with_files([("inbox/061901-111901.txt", "one\n")]);
        let expander = StaticExpander::new([("inbox/*", vec!["inbox/061901-111901.txt"])]);
        let use_case = MergeSegmentsUseCase::new(store, expander);

        let err = use_case
            .execute(MergeInput::new(patterns(&["inbox/*"])))
            .await
            .unwrap_err();

        assert!(matches!(err, MergeError::UndeterminedDate));
    }

    #[test]
    fn different_day_directories_fall_back_to_shared_date() {
        let segments: Vec<(PathBuf, SegmentName)> = [
            "x/2025/01/27/061901-111901.txt",
            "y/2025-01-27/112256-162256.txt",
        ]
        .iter()
        .map(|p| {
            let path = PathBuf::from(p);
            let name = SegmentName::from_path(&path).unwrap();
            (path, name)
        })
        .collect();

        let output = resolve_output_path(&segments, None).unwrap();
        assert_eq!(output, Path::new("x/2025/01/27/2025-01-27.txt"));
    }
}
