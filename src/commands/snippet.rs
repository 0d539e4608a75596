use crate::api::{Snippet, SnippetRequest};
use crate::catalog::LayerKind;
use crate::core::context::AppCtx;
use console::style;
use spinners::{Spinner, Spinners};

/// Generate a code snippet for one layer, or for all of them.
pub async fn run(
    ctx: &AppCtx,
    layer: Option<LayerKind>,
    all_layers: bool,
    description: &[String],
) -> Result<(), String> {
    let description = description.join(" ");
    if description.trim().is_empty() {
        return Err(
            "Describe a scenario, e.g. 'A login page with dynamic wait for an error message'"
                .to_string(),
        );
    }

    if all_layers {
        let mut sp = Spinner::new(Spinners::Dots9, "Generating a snippet for every layer...".into());
        let snippets = ctx.adapter.generate_snippets_for_all_layers(&description).await;
        sp.stop_with_message("✔ Responses received.".into());
        for (kind, snippet) in &snippets {
            print_snippet(*kind, snippet);
        }
        return Ok(());
    }

    let layer = layer.unwrap_or(ctx.session.layer);
    let request = SnippetRequest::new(layer, description);

    let mut sp = Spinner::new(Spinners::Dots9, "Waiting for LLM response...".into());
    let snippet = ctx.adapter.generate_snippet(&request).await;
    sp.stop_with_message("✔ Response received.".into());

    print_snippet(layer, &snippet);
    Ok(())
}

fn print_snippet(layer: LayerKind, snippet: &Snippet) {
    println!("\n{}", style(layer.label()).green().bold());
    if snippet.is_fallback() {
        println!("{} {}", style("⚠").yellow(), style(snippet.text()).yellow());
    } else {
        println!("{}", snippet.text());
    }
}
