// Integration tests for vocabulary invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use word_sort::{Category, VOCABULARY};

#[test]
fn vocabulary_entries_are_unique_and_nonempty() {
    let mut seen = HashSet::new();
    for entry in VOCABULARY {
        assert!(!entry.text.trim().is_empty(), "blank vocabulary entry");
        assert!(seen.insert(entry.text), "duplicate word '{}' in VOCABULARY", entry.text);
    }
}

#[test]
fn every_category_has_five_words() {
    for category in Category::ALL {
        let count = VOCABULARY.iter().filter(|e| e.category == category).count();
        assert_eq!(count, 5, "category {} has {} words", category.label(), count);
    }
    assert_eq!(VOCABULARY.len(), 15);
}

#[test]
fn category_labels_are_distinct() {
    let labels: HashSet<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels.len(), 3);
    assert!(labels.contains("工具"));
    assert!(labels.contains("數位科技"));
    assert!(labels.contains("學習理論"));
}

#[test]
fn no_word_is_its_own_category_label() {
    let labels: HashSet<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    for entry in VOCABULARY {
        assert!(!labels.contains(entry.text), "'{}' doubles as a label", entry.text);
    }
}
