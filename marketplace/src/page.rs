use crate::data::user::Role;

/// Client-side routes of the portal
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Login,
    TrainerDashboard,
    FreelanceDashboard,
    ClientDashboard,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::TrainerDashboard => "/formateur",
            Self::FreelanceDashboard => "/dashboard-freelance",
            Self::ClientDashboard => "/dashboard-client",
        }
    }

    /// Landing page after a successful login
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Formateur => Self::TrainerDashboard,
            Role::Candidat => Self::FreelanceDashboard,
            Role::Client => Self::ClientDashboard,
        }
    }
}
