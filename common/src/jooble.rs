use serde::Serialize;

/// Search parameters accepted by the Jooble API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoobleQuery {
    pub keywords: String,
    pub location: String,
    /// Search radius in kilometers. `None` and `Some(0)` are both left out.
    pub radius: Option<u32>,
    pub page: u32,
    /// Also match `keywords` against company names.
    pub companysearch: bool,
}

impl Default for JoobleQuery {
    fn default() -> Self {
        JoobleQuery {
            keywords: "Python Developer".to_string(),
            location: "Chandigarh".to_string(),
            radius: None,
            page: 1,
            companysearch: false,
        }
    }
}

impl JoobleQuery {
    pub fn new(keywords: impl Into<String>, location: impl Into<String>) -> Self {
        JoobleQuery {
            keywords: keywords.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn companysearch(mut self, companysearch: bool) -> Self {
        self.companysearch = companysearch;
        self
    }
}

/// JSON body posted to Jooble. The API expects every value as a string.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct JoobleRequest {
    pub keywords: String,
    pub location: String,
    pub page: String,
    pub companysearch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
}

impl From<&JoobleQuery> for JoobleRequest {
    fn from(query: &JoobleQuery) -> Self {
        JoobleRequest {
            keywords: query.keywords.clone(),
            location: query.location.clone(),
            page: query.page.to_string(),
            companysearch: if query.companysearch { "true" } else { "false" }.to_string(),
            radius: query.radius.filter(|r| *r != 0).map(|r| r.to_string()),
        }
    }
}
