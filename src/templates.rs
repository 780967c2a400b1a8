use askama::Template;

use crate::services::QueryResult;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    /// Echoed back into the search field; empty for the default page
    pub requested: &'a str,
    pub results: &'a [QueryResult],
}

impl<'a> IndexTemplate<'a> {
    pub fn new(requested: Option<&'a str>, results: &'a [QueryResult]) -> Self {
        Self {
            requested: requested.unwrap_or_default(),
            results,
        }
    }
}
