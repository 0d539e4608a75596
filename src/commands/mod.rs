use crate::cli::Cmd;
use crate::core::context::AppCtx;

pub mod interactive;
pub mod layers;
pub mod phases;
pub mod project;
pub mod scenarios;
pub mod snippet;

/// Dispatches the parsed command to the appropriate handler.
///
/// `Cmd::Interactive` is handled by the caller, since the REPL itself
/// dispatches through here.
pub async fn dispatch(command: Cmd, ctx: &mut AppCtx) -> Result<(), String> {
    match command {
        Cmd::Phases { id } => phases::run(ctx, id),
        Cmd::Layers { layer, json } => layers::run(ctx, layer, json),
        Cmd::Snippet {
            layer,
            all_layers,
            description,
        } => snippet::run(ctx, layer, all_layers, &description).await,
        Cmd::Scenarios { feature } => scenarios::run(ctx, &feature).await,
        Cmd::Project { name } => project::run(ctx, &name),
        Cmd::Interactive => Err("Already in interactive mode".to_string()),
    }
}
