use super::domain::{CompanyRecord, ProspectContact, ProspectProfile};
use super::scoring::LeadScoringEngine;

/// Derive a plausible web domain from a company name: ASCII alphanumerics
/// are kept, every other run of characters collapses to a single hyphen.
pub fn normalize_domain(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("example");
    }

    slug + ".com"
}

/// A declared website wins over the derived slug.
pub fn derive_domain(record: &CompanyRecord) -> String {
    let website = record.website.trim();
    if website.is_empty() {
        normalize_domain(&record.company_name)
    } else {
        website.to_string()
    }
}

/// Placeholder contacts on the derived domain, until a real enrichment
/// provider is wired in.
pub fn default_contacts(domain: &str) -> Vec<ProspectContact> {
    vec![
        ProspectContact {
            full_name: "Alex Carter".to_string(),
            role: "Director of Sales".to_string(),
            email: format!("alex.carter@{domain}"),
        },
        ProspectContact {
            full_name: "Jordan Lee".to_string(),
            role: "Events Manager".to_string(),
            email: format!("jordan.lee@{domain}"),
        },
    ]
}

/// Sanitize, score, and attach contacts to a raw company record.
pub fn enrich(engine: &LeadScoringEngine, record: &CompanyRecord) -> ProspectProfile {
    let company = record.sanitized();
    let domain = derive_domain(&company);
    let score = engine.score(&company);
    let contacts = default_contacts(&domain);

    ProspectProfile {
        company,
        domain,
        score,
        contacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::prospecting::scoring::LeadScoringConfig;

    #[test]
    fn normalize_domain_slugs_mixed_input() {
        assert_eq!(normalize_domain("Grand Pines Lodge"), "grand-pines-lodge.com");
        assert_eq!(normalize_domain("  A&B Events, Inc. "), "a-b-events-inc.com");
        assert_eq!(normalize_domain("Café Sol"), "caf-sol.com");
    }

    #[test]
    fn normalize_domain_falls_back_when_nothing_survives() {
        assert_eq!(normalize_domain(""), "example.com");
        assert_eq!(normalize_domain("---"), "example.com");
    }

    #[test]
    fn declared_website_wins_over_slug() {
        let record = CompanyRecord {
            company_name: "Grand Pines Lodge".to_string(),
            segment: "Lodge".to_string(),
            city: "Jackson".to_string(),
            state: "WY".to_string(),
            website: " grandpines.example ".to_string(),
        };
        assert_eq!(derive_domain(&record.sanitized()), "grandpines.example");
    }

    #[test]
    fn enrich_scores_the_sanitized_record() {
        let engine = LeadScoringEngine::new(LeadScoringConfig::us_mice_standard());
        let record = CompanyRecord {
            company_name: "Lone Star Convention Center".to_string(),
            segment: "Convention Center".to_string(),
            city: "Austin".to_string(),
            state: "tx".to_string(),
            website: String::new(),
        };

        let profile = enrich(&engine, &record);

        assert_eq!(profile.company.state, "TX");
        assert_eq!(profile.score.total, 83);
        assert_eq!(profile.domain, "lone-star-convention-center.com");
        assert_eq!(profile.contacts.len(), 2);
        assert!(profile.contacts[0]
            .email
            .ends_with("@lone-star-convention-center.com"));
    }
}
