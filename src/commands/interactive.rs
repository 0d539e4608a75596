use crate::cli::Cli;
use crate::commands::dispatch;
use crate::core::context::AppCtx;
use clap::Parser;
use console::style;
use dialoguer::Input;

/// Run the CLI in interactive REPL mode.
pub async fn run(ctx: &mut AppCtx) -> Result<(), String> {
    println!("Entering interactive mode. Type 'exit' or 'quit' to leave.");
    loop {
        let prompt = format!(
            "{} {}",
            ctx.session.project.as_deref().unwrap_or("sdet"),
            style(format!("[{}] >", ctx.session.layer.short_name()))
                .blue()
                .bold()
        );
        let input: String = Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| format!("Input error: {}", e))?;

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let args = match shell_words::split(input) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("• Error parsing command: {}", e);
                continue;
            }
        };

        let full_args = std::iter::once("sdet-architect".to_string()).chain(args);

        match Cli::try_parse_from(full_args) {
            Ok(cli) => {
                if let Err(e) = dispatch(cli.command, ctx).await {
                    eprintln!("• {}", e);
                }
            }
            Err(e) => {
                e.print().unwrap_or(());
            }
        }
    }
    Ok(())
}
