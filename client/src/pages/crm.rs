//! CRM page: staff-only lead pipeline.
//!
//! DESIGN
//! ======
//! Leads live in page-local state; advancing a lead walks a fixed status
//! pipeline. Won and lost are terminal.

#[cfg(test)]
#[path = "crm_test.rs"]
mod crm_test;

use leptos::prelude::*;

/// Pipeline stages for a lead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LeadStatus {
    New,
    Contacted,
    Proposal,
    Won,
    Lost,
}

impl LeadStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Proposal => "Proposal sent",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// The next pipeline stage; terminal stages stay put.
    pub(crate) fn advanced(self) -> Self {
        match self {
            Self::New => Self::Contacted,
            Self::Contacted => Self::Proposal,
            Self::Proposal => Self::Won,
            Self::Won => Self::Won,
            Self::Lost => Self::Lost,
        }
    }

    pub(crate) fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Lead {
    pub name: String,
    pub email: String,
    pub status: LeadStatus,
}

/// Demo pipeline contents until the CRM gets a backing store.
pub(crate) fn seed_leads() -> Vec<Lead> {
    vec![
        Lead {
            name: "Harbor & Co".to_owned(),
            email: "ops@harborand.co".to_owned(),
            status: LeadStatus::Proposal,
        },
        Lead {
            name: "Fieldnote".to_owned(),
            email: "founders@fieldnote.app".to_owned(),
            status: LeadStatus::Contacted,
        },
        Lead {
            name: "Copperworks".to_owned(),
            email: "hello@copperworks.io".to_owned(),
            status: LeadStatus::New,
        },
    ]
}

#[component]
pub fn CrmPage() -> impl IntoView {
    let leads = RwSignal::new(seed_leads());

    view! {
        <section class="page page--crm">
            <h1 class="page__title">"CRM"</h1>
            <table class="crm-table">
                <thead>
                    <tr>
                        <th>"Lead"</th>
                        <th>"Email"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        leads
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, lead)| {
                                let terminal = lead.status.is_terminal();
                                view! {
                                    <tr>
                                        <td>{lead.name.clone()}</td>
                                        <td>{lead.email.clone()}</td>
                                        <td>{lead.status.label()}</td>
                                        <td>
                                            <button
                                                class="button button--quiet"
                                                disabled=terminal
                                                on:click=move |_| {
                                                    leads
                                                        .update(|all| {
                                                            if let Some(lead) = all.get_mut(index) {
                                                                lead.status = lead.status.advanced();
                                                            }
                                                        });
                                                }
                                            >
                                                "Advance"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
