use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::file_reader;
use crate::input_files;
use crate::output_utils;
use anyhow::Context;
use preview_query_core::PreviewRequest;
use preview_query_core::ast;
use preview_query_core::QueryRewriter;
use preview_query_core::QuerySource;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct RewriteCmd {
    #[arg(
        help="Paths to GraphQL fragment files to append to every query before \
             rewriting.",
        long="fragment",
        value_delimiter=',',
    )]
    fragment_paths: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter=',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value="",
        help="Top-level field whose subtree becomes the re-fetch query. When \
             empty, the whole query is kept.",
        long,
    )]
    root_field: String,

    #[arg(
        default_value="",
        help="Namespace prefix (without the trailing `_`) to remove from type \
             references.",
        long,
    )]
    type_prefix: String,

    #[arg(
        help="Paths to one or more GraphQL query files or directories \
             containing GraphQL query files to rewrite.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl RewriteCmd {
    fn load_fragments(&self) -> anyhow::Result<Vec<QuerySource>> {
        self.fragment_paths
            .iter()
            .map(|path| {
                let content = file_reader::read_content(path)
                    .with_context(|| format!("Failed to load fragment {path:?}"))?;
                parse_query_file(&content, path)
            })
            .collect()
    }

    fn rewrite_file(
        &self,
        rewriter: &QueryRewriter,
        fragments: &[QuerySource],
        file_path: &Path,
    ) -> anyhow::Result<String> {
        let content = file_reader::read_content(file_path)?;
        rewrite_query_file(rewriter, fragments, &content, file_path)
    }
}

/// Parse a `.graphql` file as written.
///
/// Files routinely carry `#` comments, which only end at a newline. Handing
/// the content over as query text would collapse that newline and let the
/// comment swallow the rest of the document, so the file is parsed up front
/// and passed along as a pre-parsed document.
pub(super) fn parse_query_file(
    content: &str,
    file_path: &Path,
) -> anyhow::Result<QuerySource> {
    let document = ast::parse(content)
        .with_context(|| format!("Failed to parse GraphQL file {file_path:?}"))?;
    Ok(QuerySource::Document(document))
}

pub(super) fn rewrite_query_file(
    rewriter: &QueryRewriter,
    fragments: &[QuerySource],
    content: &str,
    file_path: &Path,
) -> anyhow::Result<String> {
    let request =
        fragments.iter()
            .cloned()
            .fold(
                PreviewRequest::new(parse_query_file(content, file_path)?),
                |request, fragment| request.add_fragment(fragment),
            );

    let outcome = rewriter.rewrite(&request)?;
    match outcome.document() {
        Some(document) => Ok(format!("# {}\n{document}", file_path.display())),
        None => anyhow::bail!(
            "{}",
            outcome.diagnostics()
                .iter()
                .map(|diagnostic| diagnostic.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        ),
    }
}

#[inherent::inherent]
impl RunnableCommand for RewriteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let fragments = match self.load_fragments() {
            Ok(fragments) => fragments,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let inputs = input_files::collect(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );
        let mut failures: Vec<String> =
            inputs.errors
                .iter()
                .map(|err| err.to_string())
                .collect();

        let rewriter = QueryRewriter::new()
            .root_field(self.root_field.as_str())
            .type_prefix(self.type_prefix.as_str());

        let mut rewritten = vec![];
        for file_path in &inputs.file_paths {
            log::debug!("Rewriting {file_path:#?}...");
            match self.rewrite_file(&rewriter, &fragments, file_path) {
                Ok(output) => rewritten.push(output),
                Err(err) => failures.push(format!("{}: {err:#}", file_path.display())),
            }
        }

        super::batch_result(rewritten, failures, inputs.num_skipped)
    }
}
