/// A learning resource (article, video, course) shown on the resources page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub url: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
}

impl Resource {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            url: None,
            author: None,
            creator: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Author text shown in listings: `author` and `creator` joined by a space,
    /// skipping whichever is absent or blank
    pub fn author_text(&self) -> String {
        [self.author.as_deref(), self.creator.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<shared::ResourceRow> for Resource {
    fn from(row: shared::ResourceRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
            url: row.url,
            author: row.author,
            creator: row.creator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_text_joins_present_parts() {
        let both = Resource::new("r1", "x").with_author("Jane").with_creator("Doe");
        assert_eq!(both.author_text(), "Jane Doe");

        let creator_only = Resource::new("r2", "x").with_creator("John Roe");
        assert_eq!(creator_only.author_text(), "John Roe");

        assert_eq!(Resource::new("r3", "x").author_text(), "");
    }
}
