//! Renders the business knowledge base into the fixed system instruction the
//! assistant is primed with in live mode.

use crate::content::{
    FAQS, HELLOFLINT_PACKAGES, MANAGED_SPRINTS, SERVICES, SITE_NAME, STANDARD_SPRINTS, TAGLINE,
    TEAM, TRUST_SIGNALS,
};

pub fn system_prompt() -> String {
    let team = TEAM
        .iter()
        .map(|t| format!("{} ({})", t.name, t.role))
        .collect::<Vec<_>>()
        .join(", ");
    let trust = TRUST_SIGNALS.join(", ");
    let services = SERVICES
        .iter()
        .map(|s| format!("- {}: {}", s.title, s.description))
        .collect::<Vec<_>>()
        .join("\n");
    let standard = STANDARD_SPRINTS
        .iter()
        .map(|p| {
            format!(
                "- {}: {}. {}. Features: {}",
                p.name,
                p.price,
                p.timeline,
                p.features.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let managed = MANAGED_SPRINTS
        .iter()
        .map(|p| format!("- {}: {} / {}. {}", p.name, p.setup_fee, p.monthly_fee, p.description))
        .collect::<Vec<_>>()
        .join("\n");
    let helloflint = HELLOFLINT_PACKAGES
        .iter()
        .map(|p| format!("- {}: {}. {}", p.name, p.price, p.description))
        .collect::<Vec<_>>()
        .join("\n");
    let faqs = FAQS
        .iter()
        .map(|f| format!("Q: {}\nA: {}", f.question, f.answer))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are HelloFlint, the AI Assistant for {SITE_NAME}.

BUSINESS KNOWLEDGE BASE:
Name: {SITE_NAME}
Tagline: {TAGLINE}
Team: {team}
Trust Signals: {trust}

SERVICES:
{services}

PACKAGES:
Standard Sprints:
{standard}

Managed Sprints:
{managed}

HelloFlint Packages:
{helloflint}

FAQS:
{faqs}

RULES:
- Use UK English strictly (favour, colour).
- NO hyphens in compound words or phrases.
- Be professional but approachable. Use plain English and avoid jargon.
- Use \"we\" for Bright Loop (Chris and Matthew). Use \"I\" for Chris when discussing HelloFlint.
- Never guess pricing. Quote exact pricing figures from packages listed above.
- Recommend a 15-minute discovery call for bespoke needs.
"
    )
}
