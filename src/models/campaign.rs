use time::OffsetDateTime;

/// A stored campaign as handed out by a campaign service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub from: Option<OffsetDateTime>,
    pub to: Option<OffsetDateTime>,
    pub picture_uri: Option<String>,
    pub details_uri: Option<String>,
}

/// Campaign fields before the store assigns an id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCampaign {
    pub name: String,
    pub description: Option<String>,
    pub from: Option<OffsetDateTime>,
    pub to: Option<OffsetDateTime>,
    pub picture_uri: Option<String>,
    pub details_uri: Option<String>,
}

impl NewCampaign {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Attach an identifier, producing the stored form
    pub fn with_id(self, id: i32) -> Campaign {
        Campaign {
            id,
            name: self.name,
            description: self.description,
            from: self.from,
            to: self.to,
            picture_uri: self.picture_uri,
            details_uri: self.details_uri,
        }
    }
}
