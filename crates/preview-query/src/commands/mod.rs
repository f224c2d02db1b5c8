mod request;
mod rewrite;

use crate::Cli;
use crate::CommandResult;
use request::RequestCmd;
use rewrite::RewriteCmd;


#[derive(Debug, clap::Parser)]
#[command(name = "preview-query")]
pub(crate) enum CommandEnum {
    /// Rewrite GraphQL query files into preview re-fetch queries.
    Rewrite(Box<RewriteCmd>),

    /// Rewrite the queries described by JSON request manifests.
    Request(Box<RequestCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Request(cmd) => cmd.run(cli).await,
            Self::Rewrite(cmd) => cmd.run(cli).await,
        }
    }
}

/// Render the outputs and failures collected while processing a batch of
/// input files.
fn batch_result(
    rewritten: Vec<String>,
    failures: Vec<String>,
    num_skipped: usize,
) -> CommandResult {
    let stdout = rewritten.join("\n");
    if !failures.is_empty() {
        return CommandResult::stderr(format_args!(
            "{} Failed to rewrite {} of {} inputs:\n{}",
            crate::output_utils::RED_X,
            failures.len(),
            failures.len() + rewritten.len(),
            failures.iter()
                .map(|failure| format!("  * {failure}"))
                .collect::<Vec<_>>()
                .join("\n"),
        )).with_stdout(stdout);
    }

    log::info!(
        "{} Rewrote {} inputs (skipped {} unmatched files).",
        crate::output_utils::GREEN_CHECK,
        rewritten.len(),
        num_skipped,
    );
    CommandResult::stdout(format_args!("{stdout}"))
}
