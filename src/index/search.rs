use crate::index::Index;

/// Searches the index for a keyword
///
/// Returns, in index order, every address whose text contains `keyword`
/// after both are lowercased. There is no tokenization or ranking. An empty
/// keyword matches every entry and an empty index yields an empty result.
///
/// # Examples
///
/// ```
/// use site_indexer::index::{search, Index};
///
/// let index: Index = [("page1", "This has the keyword"), ("page2", "No relevant content")]
///     .into_iter()
///     .collect();
/// assert_eq!(search(&index, "KEYWORD"), vec!["page1".to_string()]);
/// ```
pub fn search(index: &Index, keyword: &str) -> Vec<String> {
    let needle = keyword.to_lowercase();

    index
        .iter()
        .filter(|entry| entry.text.to_lowercase().contains(&needle))
        .map(|entry| entry.address.clone())
        .collect()
}
