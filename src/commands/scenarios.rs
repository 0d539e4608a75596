use crate::api::ScenarioRequest;
use crate::core::context::AppCtx;
use console::style;
use spinners::{Spinner, Spinners};

/// Generate Gherkin scenarios for a feature and print them.
pub async fn run(ctx: &AppCtx, feature: &[String]) -> Result<(), String> {
    let request = ScenarioRequest::new(feature.join(" "));

    let mut sp = Spinner::new(Spinners::Dots9, "Waiting for LLM response...".into());
    let result = ctx.adapter.generate_scenarios(&request).await;
    match &result {
        Ok(_) => sp.stop_with_message("✔ Response received.".into()),
        Err(_) => sp.stop_with_message("✖ Generation failed.".into()),
    }
    let scenarios = result.map_err(|e| e.to_string())?;

    if scenarios.is_empty() {
        println!("{}", style("The model returned no scenarios").yellow());
        return Ok(());
    }

    println!(
        "\n{}",
        style(format!("Scenarios for '{}':", request.feature))
            .green()
            .bold()
    );
    for (i, scenario) in scenarios.iter().enumerate() {
        println!("\n  {} {}", style(i + 1).yellow(), style(&scenario.title).bold());
        for line in scenario.narrative.lines() {
            println!("    {}", line);
        }
    }
    Ok(())
}
