use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The five responsibility tiers of a UI test-automation framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Feature files in business language.
    Business,
    /// Step definitions gluing business steps to page actions.
    Logic,
    /// Page objects abstracting the UI.
    Page,
    /// Shared technical helpers.
    Utility,
    /// Runners, suites and reporting.
    Execution,
}

impl LayerKind {
    /// Every layer, top of the stack first.
    pub const ALL: [LayerKind; 5] = [
        LayerKind::Business,
        LayerKind::Logic,
        LayerKind::Page,
        LayerKind::Utility,
        LayerKind::Execution,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayerKind::Business => "Business Layer",
            LayerKind::Logic => "Test Logic Layer",
            LayerKind::Page => "Page Object Layer",
            LayerKind::Utility => "Core Utilities Layer",
            LayerKind::Execution => "Execution & Reporting Layer",
        }
    }

    /// First word of the label, used for compact selectors.
    pub fn short_name(self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }

    fn variant_name(self) -> &'static str {
        match self {
            LayerKind::Business => "business",
            LayerKind::Logic => "logic",
            LayerKind::Page => "page",
            LayerKind::Utility => "utility",
            LayerKind::Execution => "execution",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayer(pub String);

impl fmt::Display for UnknownLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown layer '{}'. Expected one of: business, logic, page, utility, execution",
            self.0
        )
    }
}

impl std::error::Error for UnknownLayer {}

impl FromStr for LayerKind {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        LayerKind::ALL
            .into_iter()
            .find(|kind| {
                needle.eq_ignore_ascii_case(kind.variant_name())
                    || needle.eq_ignore_ascii_case(kind.short_name())
                    || needle.eq_ignore_ascii_case(kind.label())
            })
            .ok_or_else(|| UnknownLayer(s.to_string()))
    }
}

/// Reference record describing one architectural layer.
#[derive(Debug, Serialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub description: &'static str,
    pub purpose: &'static str,
    pub design_rule: &'static str,
    pub content: &'static [&'static str],
    pub example: &'static str,
}

static LAYERS: [Layer; 5] = [
    Layer {
        kind: LayerKind::Business,
        description: "Feature files written in plain business language (Gherkin).",
        purpose: "Allow non-technical stakeholders to understand and validate tests.",
        design_rule: "Strictly NO UI details, NO locators, NO code logic.",
        content: &["Feature Files", "Scenarios", "Backgrounds", "Scenario Outlines"],
        example: "Scenario: Verify successful login\n  Given I am on the login page\n  When I enter valid credentials\n  Then I should see the dashboard",
    },
    Layer {
        kind: LayerKind::Logic,
        description: "The glue between business language and POM actions.",
        purpose: "Translate high-level steps into actionable sequences.",
        design_rule: "Minimal logic; strictly calls Page methods. No hardcoded locators.",
        content: &["Step Definitions", "Hooks", "Cucumber Transformers"],
        example: "@When(\"I enter valid credentials\")\npublic void enterCredentials() {\n    loginPage.login(config.getUsername(), config.getPassword());\n}",
    },
    Layer {
        kind: LayerKind::Page,
        description: "Java classes representing application screens.",
        purpose: "Centralized location for UI element management.",
        design_rule: "No assertions (except for navigation checks). Only actions.",
        content: &["Locators", "Element Actions", "Page Initialization"],
        example: "public class LoginPage {\n    private By usernameField = By.id(\"user\");\n    public void typeUsername(String user) {\n        driver.findElement(usernameField).sendKeys(user);\n    }\n}",
    },
    Layer {
        kind: LayerKind::Utility,
        description: "Reusable core functions and technical helpers.",
        purpose: "Centralize complex Selenium logic and shared resources.",
        design_rule: "Independent of specific test cases; globally accessible.",
        content: &["Browser Factory", "Wait Helpers", "Prop Reader", "Screenshot Utils"],
        example: "public static void waitForElement(By locator) {\n    wait.until(ExpectedConditions.visibilityOfElementLocated(locator));\n}",
    },
    Layer {
        kind: LayerKind::Execution,
        description: "Configuration for running tests and generating output.",
        purpose: "Control parallelization, test sets, and reporting.",
        design_rule: "Execution control only. No test logic implementation.",
        content: &["TestNG XML", "Cucumber Runner", "Extent Reports", "CI/CD Yaml"],
        example: "<test name=\"Regression\">\n    <classes>\n        <class name=\"runner.TestRunner\" />\n    </classes>\n</test>",
    },
];

/// All layer records in `LayerKind::ALL` order.
pub fn layers() -> &'static [Layer] {
    &LAYERS
}

/// Looks up the record for a layer. Every `LayerKind` has exactly one.
pub fn layer(kind: LayerKind) -> &'static Layer {
    let index = match kind {
        LayerKind::Business => 0,
        LayerKind::Logic => 1,
        LayerKind::Page => 2,
        LayerKind::Utility => 3,
        LayerKind::Execution => 4,
    };
    &LAYERS[index]
}
