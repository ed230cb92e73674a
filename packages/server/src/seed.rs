use tracing::info;

use crate::models::about::About;
use crate::models::link::SocialLink;
use crate::models::project::Project;
use crate::store::{EntityId, Portfolio};

/// Default projects seeded on startup: (title, description, tags).
const DEFAULT_PROJECTS: &[(&str, &str, &[&str])] = &[
    (
        "AI-based Ticketing & Support Platform",
        "Enterprise ticketing system with brand-wise segregation, automated email-to-ticket \
         conversion, and intelligent chat support.",
        &["Java", "Spring Boot", "REST APIs", "OpenAI"],
    ),
    (
        "Real Estate Data & Mapping Platform",
        "Real estate platform integrating map providers and listing feeds to deliver \
         real-time property data and rich map visualisations.",
        &["Java", "Spring Boot", "Google Maps API", "MLS Feeds"],
    ),
    (
        "Logistics & Package Delivery System",
        "Logistics solution with real-time package tracking and integrations with \
         multiple third-party delivery partners.",
        &["Java", "Spring Boot", "REST APIs", "Logistics"],
    ),
];

/// Default social links seeded on startup: (label, url, icon).
const DEFAULT_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com/", "github"),
    ("LinkedIn", "https://www.linkedin.com/", "linkedin"),
];

/// Populate the about profile, projects and links.
///
/// Projects are created before links, so on a fresh sequence projects get ids
/// 1-3 and links continue at 4.
pub async fn seed_defaults(portfolio: &Portfolio) {
    portfolio
        .update_about(About {
            headline: "Software Developer".into(),
            summary: "Professional software developer building scalable, production-grade \
                      web services."
                .into(),
            location: "Bengaluru, India".into(),
            ..About::default()
        })
        .await;

    for &(title, description, tags) in DEFAULT_PROJECTS {
        portfolio
            .create_project(Project {
                id: EntityId::default(),
                title: title.into(),
                description: Some(description.into()),
                github_url: Some(String::new()),
                live_url: Some(String::new()),
                tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            })
            .await;
    }

    for &(label, url, icon) in DEFAULT_LINKS {
        portfolio
            .create_link(SocialLink {
                id: EntityId::default(),
                label: label.into(),
                url: url.into(),
                icon: Some(icon.into()),
            })
            .await;
    }

    info!(
        "Seeded {} projects and {} links",
        DEFAULT_PROJECTS.len(),
        DEFAULT_LINKS.len()
    );
}
