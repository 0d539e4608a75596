use crate::catalog::{layer, layers, Layer, LayerKind};
use crate::core::context::AppCtx;
use console::style;

/// Print the layer architecture, or one layer in detail and select it.
pub fn run(ctx: &mut AppCtx, kind: Option<LayerKind>, json: bool) -> Result<(), String> {
    if let Some(kind) = kind {
        ctx.session.select_layer(kind);
    }

    if json {
        let out = match kind {
            Some(kind) => serde_json::to_string_pretty(layer(kind)),
            None => serde_json::to_string_pretty(layers()),
        }
        .map_err(|e| format!("Serialization failed: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    match kind {
        Some(kind) => print_layer(layer(kind)),
        None => {
            println!("{}", style("Layer Architecture:").green().bold());
            for record in layers() {
                let marker = if record.kind == ctx.session.layer {
                    style("▶").blue()
                } else {
                    style("•").green()
                };
                println!(
                    "  {} {} - {}",
                    marker,
                    style(record.kind.label()).yellow(),
                    record.description
                );
            }
        }
    }
    Ok(())
}

fn print_layer(record: &Layer) {
    println!("{}", style(record.kind.label()).green().bold());
    println!("{}\n", record.description);
    println!("{} {}", style("Primary Purpose:").bold(), record.purpose);
    println!("{} {}", style("Hard Design Rule:").bold(), record.design_rule);
    println!("{} {}", style("Layer Artifacts:").bold(), record.content.join(", "));
    println!("\n{}", style("ExampleImplementation.java").dim());
    for line in record.example.lines() {
        println!("  {}", style(line).cyan());
    }
}
