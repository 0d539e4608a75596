use crate::catalog::{phases, Phase, PRINCIPLES};
use crate::core::context::AppCtx;
use console::style;

/// Print the roadmap, or one phase in detail and select it.
pub fn run(ctx: &mut AppCtx, id: Option<u32>) -> Result<(), String> {
    match id {
        None => {
            print_roadmap(ctx.session.phase);
            Ok(())
        }
        Some(id) => {
            let phase = ctx
                .session
                .select_phase(id)
                .ok_or_else(|| format!("No phase with ID '{}' (expected 1-{})", id, phases().len()))?;
            print_phase(phase);
            Ok(())
        }
    }
}

fn print_roadmap(selected: u32) {
    println!("{}", style("Platform over Scripts").green().bold());
    for p in PRINCIPLES {
        println!("  {} {}", style("•").green(), p);
    }

    println!("\n{}", style("Development Roadmap:").green().bold());
    for phase in phases() {
        let marker = if phase.id == selected {
            style("▶").blue()
        } else {
            style("•").green()
        };
        println!("  {} {} - {}", marker, style(phase.id).yellow(), phase.title);
    }
}

fn print_phase(phase: &Phase) {
    println!(
        "{}",
        style(format!("Phase {}: {}", phase.id, phase.title))
            .green()
            .bold()
    );
    println!("{}\n", phase.description);

    println!("{}", style("Core Requirements:").bold());
    for (i, detail) in phase.details.iter().enumerate() {
        let prefix = if i == phase.details.len() - 1 {
            "  └─"
        } else {
            "  ├─"
        };
        println!("{} {}", prefix, detail);
    }

    println!("{}", style("Tech Stack Tools:").bold());
    let tools: Vec<String> = phase
        .tools
        .iter()
        .map(|t| style(t).yellow().to_string())
        .collect();
    println!("  {}", tools.join(", "));
}
