//! Forum topic list with search and paging.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::Paginator;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Decompose, drop combining marks, fold `đ` to `d` and lowercase, so
/// `"Phở"` matches `"pho"` and `"Crêpe"` matches `"crepe"`.
#[must_use]
pub fn fold_for_search(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| match c {
            'đ' | 'Đ' => 'd',
            c => c,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// A forum discussion topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub author: String,
}

/// Topics filtered by a search term and paged.
///
/// Changing the search term or replacing the topic list returns to page 1.
#[derive(Clone, Debug)]
pub struct TopicIndex {
    topics: Vec<ForumTopic>,
    search: String,
    pager: Paginator,
}

impl TopicIndex {
    #[must_use]
    pub fn new(topics: Vec<ForumTopic>, page_size: usize) -> Self {
        let mut index = Self {
            topics,
            search: String::new(),
            pager: Paginator::new(page_size),
        };
        index.refilter();
        index
    }

    pub fn set_topics(&mut self, topics: Vec<ForumTopic>) {
        self.topics = topics;
        self.pager.reset();
        self.refilter();
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = fold_for_search(term);
        self.pager.reset();
        self.refilter();
    }

    pub fn set_page(&mut self, page: usize) -> usize {
        self.pager.set_page(page)
    }

    fn refilter(&mut self) {
        let matching = self.filtered().count();
        self.pager.set_total(matching);
    }

    /// Topics matching the search term, in list order.
    pub fn filtered(&self) -> impl Iterator<Item = &ForumTopic> {
        self.topics
            .iter()
            .filter(move |t| fold_for_search(&t.name).contains(&self.search))
    }

    /// Topics on the current page.
    #[must_use]
    pub fn current_page(&self) -> Vec<&ForumTopic> {
        let range = self.pager.range();
        self.filtered().skip(range.start).take(range.len()).collect()
    }

    #[must_use]
    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(i: usize, name: &str) -> ForumTopic {
        ForumTopic {
            slug: format!("topic_{i}"),
            name: name.to_string(),
            author: "lan".to_string(),
        }
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold_for_search("Phở Bò"), "pho bo");
        assert_eq!(fold_for_search("Đặc sản"), "dac san");
        assert_eq!(fold_for_search("BÚN CHẢ"), "bun cha");
    }

    #[test]
    fn test_fold_other_latin_accents() {
        assert_eq!(fold_for_search("Müsli"), "musli");
        assert_eq!(fold_for_search("Crêpe ñ"), "crepe n");
        assert_eq!(fold_for_search("Ça va"), "ca va");
    }

    #[test]
    fn test_search_ignores_accents_and_resets_page() {
        let mut topics: Vec<_> = (0..25).map(|i| topic(i, &format!("Chuyện {i}"))).collect();
        topics.push(topic(25, "Quán phở ngon"));
        let mut index = TopicIndex::new(topics, 10);

        assert_eq!(index.pager().page_count(), 3);
        index.set_page(3);
        assert_eq!(index.current_page().len(), 6);

        index.set_search("PHO");
        assert_eq!(index.pager().page(), 1);
        let names: Vec<_> = index.current_page().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Quán phở ngon"]);
    }

    #[test]
    fn test_replacing_topics_resets_page() {
        let topics: Vec<_> = (0..30).map(|i| topic(i, "x")).collect();
        let mut index = TopicIndex::new(topics.clone(), 10);
        index.set_page(2);
        index.set_topics(topics);
        assert_eq!(index.pager().page(), 1);
    }
}
