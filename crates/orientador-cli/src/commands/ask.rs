//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::Result;
use crate::output::Formatter;
use orientador_agent::Agent;
use orientador_domain::ChatModel;

/// Execute the ask command.
pub async fn execute_ask<M: ChatModel>(
    args: AskArgs,
    agent: &mut Agent<M>,
    formatter: &Formatter,
) -> Result<()> {
    let question = args.question.join(" ");
    let reply = agent.send(&question).await?;
    println!("{}", formatter.format_reply(&question, &reply)?);
    Ok(())
}
