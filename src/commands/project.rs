use crate::core::context::AppCtx;
use console::style;

/// Name the project being designed in this session.
pub fn run(ctx: &mut AppCtx, name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Project name cannot be empty".to_string());
    }
    ctx.session.project = Some(name.to_string());
    println!("{} Project set to '{}'", style("✔").green(), name);
    Ok(())
}
