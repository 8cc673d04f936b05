//! Anagram clusters over the dictionary.
//!
//! Every dictionary word is filed under its [`LetterSignature`]. Finding the
//! sub-words of a root then means testing each *signature* once instead of each
//! word, since all words in a cluster share the same letters.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::signature::LetterSignature;

/// All dictionary words sharing one signature
#[derive(Debug, Clone)]
pub struct Cluster {
    pub signature: LetterSignature,
    pub words: Vec<String>,
}

/// Signature → words, iterated in order of first appearance in the dictionary.
#[derive(Debug, Clone, Default)]
pub struct ClusterIndex {
    clusters: Vec<Cluster>,
    positions: HashMap<LetterSignature, usize>,
}

impl ClusterIndex {
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut index = Self::default();
        for word in dictionary.words() {
            index.insert(word);
        }
        log::debug!(
            "cluster index: {} clusters over {} words",
            index.clusters.len(),
            dictionary.len()
        );
        index
    }

    fn insert(&mut self, word: &str) {
        let signature = LetterSignature::of(word);
        match self.positions.get(&signature) {
            Some(&pos) => self.clusters[pos].words.push(word.to_string()),
            None => {
                self.positions.insert(signature.clone(), self.clusters.len());
                self.clusters.push(Cluster {
                    signature,
                    words: vec![word.to_string()],
                });
            }
        }
    }

    /// Words filed under exactly this signature
    pub fn anagrams(&self, signature: &LetterSignature) -> &[String] {
        self.positions
            .get(signature)
            .map(|&pos| self.clusters[pos].words.as_slice())
            .unwrap_or(&[])
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Every word whose letters form a multiset subset of `root`, cluster by cluster
    /// in index order.
    pub fn sub_words(&self, root: &LetterSignature) -> Vec<&str> {
        self.clusters
            .par_iter()
            .filter(|cluster| cluster.signature.is_subset_of(root))
            .flat_map_iter(|cluster| cluster.words.iter().map(String::as_str))
            .collect()
    }
}
