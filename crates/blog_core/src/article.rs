/// One blog post as displayed by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub author: String,
    pub published: String,
    pub tags: Vec<String>,
}
