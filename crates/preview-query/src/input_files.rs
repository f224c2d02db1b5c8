use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Files found at or under a set of paths passed on the command line.
#[derive(Debug, Default)]
pub(crate) struct InputFiles {
    pub errors: Vec<walkdir::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Recursively collect every file at or under `paths` whose extension is one
/// of `file_exts` (with or without the leading `.`).
///
/// If nothing matched and a single file path was given, that file is used
/// anyway: the user evidently wants it processed.
pub(crate) fn collect(paths: &[PathBuf], file_exts: &[String]) -> InputFiles {
    let file_exts: HashSet<&str> =
        file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = InputFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }

                    let ext_matches =
                        path.extension()
                            .and_then(|ext| ext.to_str())
                            .is_some_and(|ext| file_exts.contains(ext));
                    if ext_matches {
                        log::trace!("Found file at {path:#?}.");
                        found.file_paths.push(path.to_path_buf());
                    } else {
                        log::trace!("Skipping file with unmatched extension: {path:#?}.");
                        found.num_skipped += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(e);
                },
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        log::warn!(
            "Proceeding with {first_path:#?} even though it doesn't match any \
            of the expected file extensions ({}).",
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.file_paths.push(first_path.to_owned());
    }

    log::debug!("Found {} input files.", found.file_paths.len());
    found
}
