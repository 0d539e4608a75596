//! Prompt templates and their rendering.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::catalog::{self, LayerKind};

const SNIPPET_TEMPLATE: &str = "Act as an expert SDET. Generate a professional Java Selenium code snippet for the {{layer}}.
Description/Requirement: {{description}}.
Respect the design rule of this layer: {{rule}}
The code should follow enterprise best practices: Page Object Model, Clean Code, and inline documentation.";

const SCENARIO_TEMPLATE: &str = "Generate 3 professional Gherkin scenarios for a feature named: {{feature}}. Focus on business value, not UI mechanics.
Answer with a JSON array of objects, each with a short \"title\" and the Gherkin text as \"narrative\".";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

/// Builds the instruction for a code snippet targeting `layer`.
pub fn snippet_prompt(layer: LayerKind, description: &str) -> String {
    let vars = HashMap::from([
        ("layer", layer.label()),
        ("rule", catalog::layer(layer).design_rule),
        ("description", description),
    ]);
    render_template(SNIPPET_TEMPLATE, &vars)
}

/// Builds the instruction for three scenarios about `feature`.
pub fn scenario_prompt(feature: &str) -> String {
    render_template(SCENARIO_TEMPLATE, &HashMap::from([("feature", feature)]))
}

/// Renders a template string with the given variables.
///
/// Substitution is a single pass over the template: values are inserted
/// verbatim, so placeholders inside a value stay as they are.
fn render_template(template: &str, vars: &HashMap<&str, &str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            vars.get(&caps[1]).copied().unwrap_or("").to_string()
        })
        .into_owned()
}
