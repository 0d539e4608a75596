use serde::Serialize;

/// One step of the framework development roadmap.
#[derive(Debug, Serialize)]
pub struct Phase {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub tools: &'static [&'static str],
}

static PHASES: [Phase; 5] = [
    Phase {
        id: 1,
        title: "Language & Stack Selection",
        description: "Setting the foundation with Java, Selenium, and TestNG.",
        details: &["Java JDK 17+", "Maven/Gradle dependency management", "Selenium WebDriver 4.x"],
        tools: &["Java", "Selenium", "Maven"],
    },
    Phase {
        id: 2,
        title: "Framework Structure",
        description: "Designing the folder structure and package hierarchy.",
        details: &["Modular structure", "Separation of source and test code", "Config resource management"],
        tools: &["IntelliJ IDEA", "Package Explorer"],
    },
    Phase {
        id: 3,
        title: "BDD Implementation",
        description: "Bridging business intent and technical execution.",
        details: &["Gherkin syntax", "Feature file organization", "Cucumber hooks"],
        tools: &["Cucumber", "Gherkin"],
    },
    Phase {
        id: 4,
        title: "Page Object Model (POM)",
        description: "Abstracting UI elements from test logic.",
        details: &["Encapsulation of locators", "Fluent interface design", "Dynamic locators"],
        tools: &["PageFactory", "By Locators"],
    },
    Phase {
        id: 5,
        title: "Utility Development",
        description: "Building the engine: Waits, Browsers, and Screenshots.",
        details: &["Explicit/Fluent waits", "WebDriver Manager", "Cross-browser setup"],
        tools: &["WebDriverManager", "Robot Class"],
    },
];

/// The roadmap, in order.
pub fn phases() -> &'static [Phase] {
    &PHASES
}

pub fn phase(id: u32) -> Option<&'static Phase> {
    PHASES.iter().find(|p| p.id == id)
}
