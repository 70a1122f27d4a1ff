//! Enrichment attached to surviving matches: a generic 4-step learning path
//! and three market-insight sentences built from the role's static data.

use crate::models::role::RoleProfile;

/// Demand-tier label derived from the match percentage. Presentation only;
/// it never feeds back into scoring.
pub fn demand_tier(match_score: u32) -> &'static str {
    if match_score > 80 {
        "extremely high"
    } else if match_score > 60 {
        "high"
    } else {
        "moderate"
    }
}

/// Fixed 4-step learning path: certification → portfolio → networking →
/// entry-level applications, personalized with the role's own skills.
pub fn build_learning_path(role: &RoleProfile) -> Vec<String> {
    let focus = role
        .technical_skills
        .first()
        .map(String::as_str)
        .unwrap_or(role.title.as_str());

    let showcase = if role.technical_skills.len() > 1 {
        role.technical_skills[..2].join(" and ")
    } else {
        focus.to_string()
    };

    vec![
        format!("Earn an entry-level certification covering {focus}"),
        format!("Build 2-3 portfolio projects that showcase {showcase}"),
        format!(
            "Network with {} professionals through meetups and online communities",
            role.title
        ),
        format!(
            "Apply for entry-level or internship {} positions",
            role.title
        ),
    ]
}

/// Three market-insight sentences: growth outlook, compensation, and the
/// demand tier for this particular match.
pub fn build_market_insights(role: &RoleProfile, match_score: u32) -> Vec<String> {
    vec![
        format!(
            "{} roles are projected to grow {}% annually",
            role.title, role.growth_rate
        ),
        format!(
            "Average compensation is {} {} per year",
            format_thousands(role.salary.avg),
            role.salary.currency
        ),
        format!(
            "Market demand for candidates with your profile is {}",
            demand_tier(match_score)
        ),
    ]
}

/// Inserts thousands separators: 125000 → "125,000".
fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
