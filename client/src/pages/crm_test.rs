use super::*;

#[test]
fn pipeline_advances_in_order() {
    assert_eq!(LeadStatus::New.advanced(), LeadStatus::Contacted);
    assert_eq!(LeadStatus::Contacted.advanced(), LeadStatus::Proposal);
    assert_eq!(LeadStatus::Proposal.advanced(), LeadStatus::Won);
}

#[test]
fn terminal_stages_stay_put() {
    assert_eq!(LeadStatus::Won.advanced(), LeadStatus::Won);
    assert_eq!(LeadStatus::Lost.advanced(), LeadStatus::Lost);
    assert!(LeadStatus::Won.is_terminal());
    assert!(LeadStatus::Lost.is_terminal());
    assert!(!LeadStatus::Proposal.is_terminal());
}

#[test]
fn every_stage_has_a_label() {
    for status in [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Proposal,
        LeadStatus::Won,
        LeadStatus::Lost,
    ] {
        assert!(!status.label().is_empty());
    }
}

#[test]
fn seed_leads_are_not_terminal() {
    for lead in seed_leads() {
        assert!(!lead.status.is_terminal(), "{} seeded terminal", lead.name);
    }
}
