use crate::domain::entities::Resource;

/// Case-insensitive search over the resource listing.
///
/// A blank query keeps every item. Otherwise an item is kept when the query is
/// a substring of its title, description, category or author text, or when
/// every whitespace-separated word of the query appears in the author text.
/// Input order is preserved.
pub fn filter_resources<'a>(items: &'a [Resource], query: &str) -> Vec<&'a Resource> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }

    let words: Vec<&str> = query.split_whitespace().collect();
    items
        .iter()
        .filter(|resource| matches(resource, &query, &words))
        .collect()
}

fn matches(resource: &Resource, query: &str, words: &[&str]) -> bool {
    let author = resource.author_text().to_lowercase();

    let field_hit = [
        resource.title.as_str(),
        resource.description.as_str(),
        resource.category.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query));

    field_hit || author.contains(query) || words.iter().all(|word| author.contains(word))
}
