//! Page selection state for the app shell.
//!
//! DESIGN
//! ======
//! The site never changes the URL; one shell component switches views by
//! page name. `PageState` is the single owner of that name plus the
//! pricing plan carried into the project brief, and `navigate` is its
//! only mutation path (besides the router's forced redirects).

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Known page names, plus a carrier for unrecognized ones.
///
/// Unknown names are kept verbatim: the view router renders them as the
/// home view without rewriting the stored name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Services,
    Pricing,
    About,
    Portfolio,
    StartProject,
    Admin,
    Crm,
    ClientPortal,
    Login,
    Signup,
    Other(String),
}

impl Page {
    /// Parse a page name. Never fails; unrecognized names land in
    /// [`Page::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "home" => Self::Home,
            "services" => Self::Services,
            "pricing" => Self::Pricing,
            "about" => Self::About,
            "portfolio" => Self::Portfolio,
            "start-project" => Self::StartProject,
            "admin" => Self::Admin,
            "crm" => Self::Crm,
            "client-portal" => Self::ClientPortal,
            "login" => Self::Login,
            "signup" => Self::Signup,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The page-name string this page is addressed by.
    #[must_use]
    pub fn as_name(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Pricing => "pricing",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::StartProject => "start-project",
            Self::Admin => "admin",
            Self::Crm => "crm",
            Self::ClientPortal => "client-portal",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Other(name) => name,
        }
    }
}

/// Shell page state: the current page and the plan picked on the pricing
/// page, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub current: Page,
    pub selected_plan: Option<String>,
}

impl PageState {
    /// Request a page transition, optionally carrying a pricing plan.
    ///
    /// The name is not validated; unknown names are absorbed by the view
    /// router's default arm. The plan is only overwritten when one is
    /// provided, so plain navigation keeps an earlier selection.
    pub fn navigate(&mut self, page: &str, plan: Option<&str>) {
        self.current = Page::parse(page);
        if let Some(plan) = plan {
            self.selected_plan = Some(plan.to_owned());
        }
    }
}
