use std::collections::HashMap;

use crate::model::{LanguageCount, Repository};

/// Repositories ordered by stars, most first. The sort is stable, so equal
/// star counts keep the order the API returned them in.
pub fn sort_by_stars(repos: &[Repository]) -> Vec<Repository> {
    let mut sorted = repos.to_vec();
    sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    sorted
}

/// The first `n` entries of an already sorted list (all of them if shorter).
pub fn top_n(sorted: &[Repository], n: usize) -> &[Repository] {
    &sorted[..sorted.len().min(n)]
}

/// Count repositories per language, skipping those without one.
pub fn language_histogram(repos: &[Repository]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for repo in repos {
        if let Some(lang) = repo.language.as_deref() {
            *counts.entry(lang.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Histogram entries in display order: most used first, ties by name.
pub fn ordered_languages(histogram: &HashMap<String, usize>) -> Vec<LanguageCount> {
    let mut entries: Vec<LanguageCount> = histogram
        .iter()
        .map(|(language, &repositories)| LanguageCount {
            language: language.clone(),
            repositories,
        })
        .collect();
    entries.sort_by(|a, b| {
        b.repositories
            .cmp(&a.repositories)
            .then_with(|| a.language.cmp(&b.language))
    });
    entries
}
