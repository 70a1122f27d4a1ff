//! The built-in role catalogue.
//!
//! Pure reference data: every profile carries the market fields shown on the
//! dashboard plus the criteria vector the match engine scores against.
//! Criteria ratings sit on the same 1–6 scale callers rate on, and each
//! vector covers only the traits that actually discriminate for the role.

use std::collections::BTreeMap;

use crate::models::role::{RoleProfile, SalaryRange};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn criteria(pairs: &[(&str, u8)]) -> BTreeMap<String, u8> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// The production catalogue, in display/tie-break order.
pub fn default_roles() -> Vec<RoleProfile> {
    vec![
        RoleProfile {
            id: "software-developer".to_string(),
            title: "Software Developer".to_string(),
            description: "Designs, builds, and maintains software systems across the stack."
                .to_string(),
            salary: SalaryRange {
                min: 70_000,
                max: 150_000,
                avg: 105_000,
                currency: "USD".to_string(),
            },
            demand_score: 92,
            growth_rate: 17.0,
            technical_skills: strings(&["Programming", "Data structures", "Testing", "Debugging"]),
            interpersonal_skills: strings(&["Collaboration", "Written communication"]),
            tools: strings(&["Git", "VS Code", "Docker"]),
            experience_band: "0-3 years".to_string(),
            education: strings(&["BS Computer Science", "Coding bootcamp", "Self-taught"]),
            example_employers: strings(&["Google", "Shopify", "Atlassian"]),
            industries: strings(&["Technology", "Finance", "Healthcare"]),
            remote_friendly: true,
            criteria: criteria(&[
                ("analytical_thinking", 6),
                ("problem_solving", 6),
                ("attention_to_detail", 5),
                ("persistence", 5),
                ("teamwork", 4),
                ("creativity", 3),
            ]),
        },
        RoleProfile {
            id: "data-scientist".to_string(),
            title: "Data Scientist".to_string(),
            description: "Builds statistical and machine-learning models to answer business questions."
                .to_string(),
            salary: SalaryRange {
                min: 90_000,
                max: 170_000,
                avg: 125_000,
                currency: "USD".to_string(),
            },
            demand_score: 88,
            growth_rate: 22.0,
            technical_skills: strings(&["Statistics", "Python", "Machine learning", "SQL"]),
            interpersonal_skills: strings(&["Storytelling with data", "Stakeholder management"]),
            tools: strings(&["Jupyter", "pandas", "scikit-learn"]),
            experience_band: "1-4 years".to_string(),
            education: strings(&["BS/MS in a quantitative field"]),
            example_employers: strings(&["Netflix", "Airbnb", "Spotify"]),
            industries: strings(&["Technology", "Retail", "Insurance"]),
            remote_friendly: true,
            criteria: criteria(&[
                ("analytical_thinking", 6),
                ("curiosity", 6),
                ("attention_to_detail", 5),
                ("problem_solving", 5),
                ("communication", 4),
            ]),
        },
        RoleProfile {
            id: "ux-designer".to_string(),
            title: "UX Designer".to_string(),
            description: "Researches user needs and designs intuitive product experiences."
                .to_string(),
            salary: SalaryRange {
                min: 65_000,
                max: 130_000,
                avg: 92_000,
                currency: "USD".to_string(),
            },
            demand_score: 74,
            growth_rate: 13.0,
            technical_skills: strings(&["User research", "Wireframing", "Prototyping", "Usability testing"]),
            interpersonal_skills: strings(&["Empathy", "Presentation", "Facilitation"]),
            tools: strings(&["Figma", "Miro", "Maze"]),
            experience_band: "0-3 years".to_string(),
            education: strings(&["Design degree", "UX certificate", "Portfolio-based entry"]),
            example_employers: strings(&["Adobe", "Canva", "IBM"]),
            industries: strings(&["Technology", "E-commerce", "Media"]),
            remote_friendly: true,
            criteria: criteria(&[
                ("creativity", 6),
                ("empathy", 6),
                ("communication", 5),
                ("attention_to_detail", 4),
                ("adaptability", 4),
            ]),
        },
        RoleProfile {
            id: "product-manager".to_string(),
            title: "Product Manager".to_string(),
            description: "Owns product direction, aligning user needs, business goals, and engineering effort."
                .to_string(),
            salary: SalaryRange {
                min: 85_000,
                max: 165_000,
                avg: 120_000,
                currency: "USD".to_string(),
            },
            demand_score: 80,
            growth_rate: 10.0,
            technical_skills: strings(&["Roadmapping", "Market analysis", "Metrics definition"]),
            interpersonal_skills: strings(&["Leadership", "Negotiation", "Communication"]),
            tools: strings(&["Jira", "Amplitude", "Notion"]),
            experience_band: "2-5 years".to_string(),
            education: strings(&["Any degree", "MBA helpful but optional"]),
            example_employers: strings(&["Microsoft", "Stripe", "Zendesk"]),
            industries: strings(&["Technology", "Finance", "Logistics"]),
            remote_friendly: true,
            criteria: criteria(&[
                ("leadership", 6),
                ("communication", 6),
                ("decision_making", 5),
                ("analytical_thinking", 4),
                ("empathy", 4),
                ("adaptability", 5),
            ]),
        },
        RoleProfile {
            id: "devops-engineer".to_string(),
            title: "DevOps Engineer".to_string(),
            description: "Automates build, deployment, and operations of production infrastructure."
                .to_string(),
            salary: SalaryRange {
                min: 85_000,
                max: 160_000,
                avg: 118_000,
                currency: "USD".to_string(),
            },
            demand_score: 86,
            growth_rate: 20.0,
            technical_skills: strings(&["Linux", "CI/CD", "Cloud infrastructure", "Scripting"]),
            interpersonal_skills: strings(&["Incident communication", "Cross-team collaboration"]),
            tools: strings(&["Kubernetes", "Terraform", "Prometheus"]),
            experience_band: "1-4 years".to_string(),
            education: strings(&["BS Computer Science", "Cloud certifications"]),
            example_employers: strings(&["Amazon", "Datadog", "Cloudflare"]),
            industries: strings(&["Technology", "Telecommunications", "Finance"]),
            remote_friendly: true,
            criteria: criteria(&[
                ("problem_solving", 6),
                ("attention_to_detail", 6),
                ("persistence", 5),
                ("analytical_thinking", 5),
                ("composure_under_pressure", 5),
            ]),
        },
        RoleProfile {
            id: "cybersecurity-analyst".to_string(),
            title: "Cybersecurity Analyst".to_string(),
            description: "Monitors, detects, and responds to threats against systems and data."
                .to_string(),
            salary: SalaryRange {
                min: 75_000,
                max: 145_000,
                avg: 102_000,
                currency: "USD".to_string(),
            },
            demand_score: 90,
            growth_rate: 32.0,
            technical_skills: strings(&["Network security", "Threat analysis", "Incident response"]),
            interpersonal_skills: strings(&["Report writing", "Risk communication"]),
            tools: strings(&["Splunk", "Wireshark", "Nessus"]),
            experience_band: "0-3 years".to_string(),
            education: strings(&["BS Cybersecurity", "Security+ certification"]),
            example_employers: strings(&["CrowdStrike", "Deloitte", "Bank of America"]),
            industries: strings(&["Finance", "Government", "Healthcare"]),
            remote_friendly: false,
            criteria: criteria(&[
                ("attention_to_detail", 6),
                ("analytical_thinking", 6),
                ("integrity", 6),
                ("composure_under_pressure", 5),
                ("persistence", 4),
            ]),
        },
        RoleProfile {
            id: "digital-marketer".to_string(),
            title: "Digital Marketing Specialist".to_string(),
            description: "Plans and optimizes campaigns across search, social, and email channels."
                .to_string(),
            salary: SalaryRange {
                min: 50_000,
                max: 100_000,
                avg: 68_000,
                currency: "USD".to_string(),
            },
            demand_score: 68,
            growth_rate: 8.0,
            technical_skills: strings(&["SEO", "Campaign analytics", "Copywriting", "A/B testing"]),
            interpersonal_skills: strings(&["Creativity", "Audience empathy"]),
            tools: strings(&["Google Analytics", "HubSpot", "Meta Ads Manager"]),
            experience_band: "0-2 years".to_string(),
            education: strings(&["Marketing degree", "Digital marketing certificate"]),
            example_employers: strings(&["HubSpot", "Ogilvy", "Wayfair"]),
            industries: strings(&["E-commerce", "Media", "Consumer goods"]),
            remote_friendly: true,
            criteria: criteria(&[
                ("creativity", 6),
                ("communication", 5),
                ("adaptability", 5),
                ("analytical_thinking", 4),
                ("risk_taking", 4),
            ]),
        },
        RoleProfile {
            id: "business-analyst".to_string(),
            title: "Business Analyst".to_string(),
            description: "Translates business problems into requirements and data-backed recommendations."
                .to_string(),
            salary: SalaryRange {
                min: 60_000,
                max: 120_000,
                avg: 85_000,
                currency: "USD".to_string(),
            },
            demand_score: 72,
            growth_rate: 11.0,
            technical_skills: strings(&["Requirements analysis", "SQL", "Process modeling"]),
            interpersonal_skills: strings(&["Stakeholder interviews", "Presentation"]),
            tools: strings(&["Excel", "Tableau", "Visio"]),
            experience_band: "0-3 years".to_string(),
            education: strings(&["Business or economics degree"]),
            example_employers: strings(&["Accenture", "EY", "JPMorgan Chase"]),
            industries: strings(&["Consulting", "Finance", "Public sector"]),
            remote_friendly: true,
            criteria: criteria(&[
                ("analytical_thinking", 6),
                ("communication", 6),
                ("organization", 5),
                ("attention_to_detail", 5),
                ("teamwork", 4),
            ]),
        },
    ]
}
