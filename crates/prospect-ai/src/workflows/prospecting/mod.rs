//! Sales prospecting workflow: enrich a company portfolio, score each lead
//! against a configurable rubric, and roll qualified prospects up into a
//! dashboard-style report with canned outreach sequences.

pub mod domain;
pub mod enrichment;
pub mod outreach;
pub mod report;
pub mod scoring;

pub use domain::{CompanyRecord, ProspectContact, ProspectProfile};
pub use outreach::{outreach_sequence, OutreachStep};
pub use report::{ProspectFilter, ProspectReport};
pub use scoring::{
    AttributeSource, CategoricalRule, LeadScore, LeadScoringConfig, LeadScoringEngine,
    MembershipRule, ScoreComponent,
};
