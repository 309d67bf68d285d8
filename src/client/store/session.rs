use crate::model::api::ClientConfigDto;

/// Which side of the marketplace the dashboard is rendered for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    StoreOwner,
    Influencer,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::StoreOwner => "Store Owner",
            Role::Influencer => "Influencer",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Role::StoreOwner => Role::Influencer,
            Role::Influencer => Role::StoreOwner,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub role: Role,
    /// Public configuration from `GET /api/config`
    pub config: ClientConfigDto,
    /// Mobile sidebar drawer
    pub sidebar_open: bool,
}

impl SessionState {
    pub fn paypal_client_id(&self) -> Option<&str> {
        self.config
            .paypal_client_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_toggles_between_sides() {
        assert_eq!(Role::StoreOwner.toggled(), Role::Influencer);
        assert_eq!(Role::Influencer.toggled(), Role::StoreOwner);
    }

    #[test]
    fn blank_paypal_client_id_counts_as_unset() {
        let mut session = SessionState::default();
        assert_eq!(session.paypal_client_id(), None);

        session.config.paypal_client_id = Some(String::new());
        assert_eq!(session.paypal_client_id(), None);

        session.config.paypal_client_id = Some("sb".to_string());
        assert_eq!(session.paypal_client_id(), Some("sb"));
    }
}
