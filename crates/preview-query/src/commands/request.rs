use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::file_reader;
use crate::input_files;
use anyhow::Context;
use preview_query_core::PreviewRequestManifest;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct RequestCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for request \
             manifests within a directory.",
        long,
        value_delimiter=',',
    )]
    manifest_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more JSON request manifests (or directories \
             containing them). Each manifest has a `query`, and optionally \
             `fragments`, `rootField` and `typePrefix`.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl RequestCmd {
    fn rewrite_manifest(&self, file_path: &Path) -> anyhow::Result<String> {
        let content = file_reader::read_content(file_path)?;
        let manifest = PreviewRequestManifest::from_json_str(&content)
            .context("Invalid request manifest")?;
        let outcome = manifest.rewriter().rewrite(&manifest.request()?)?;

        if let Some(diagnostic) = outcome.diagnostics().first() {
            anyhow::bail!("{diagnostic}");
        }
        let document = outcome
            .into_document()
            .context("Rewrite produced no document")?;
        Ok(format!("# {}\n{document}", file_path.display()))
    }
}

#[inherent::inherent]
impl RunnableCommand for RequestCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let inputs = input_files::collect(
            &self.file_or_dir_paths,
            &self.manifest_file_exts,
        );
        let mut failures: Vec<String> =
            inputs.errors
                .iter()
                .map(|err| err.to_string())
                .collect();

        let mut rewritten = vec![];
        for file_path in &inputs.file_paths {
            log::debug!("Rewriting request manifest {file_path:#?}...");
            match self.rewrite_manifest(file_path) {
                Ok(output) => rewritten.push(output),
                Err(err) => failures.push(format!("{}: {err:#}", file_path.display())),
            }
        }

        super::batch_result(rewritten, failures, inputs.num_skipped)
    }
}
