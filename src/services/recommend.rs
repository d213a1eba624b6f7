use crate::models::book::{BookRecord, RecommendationEntry};
use crate::utils::text::{english_tokenizer, Tokenizer};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_TOP_N: usize = 5;

// Ordered so that floating point sums are reproducible run to run.
type SparseVector = BTreeMap<usize, f64>;

/// L2-normalised TF-IDF rows, one per document.
///
/// idf uses the smoothed form `ln((1 + n) / (1 + df)) + 1`, so a term present
/// in every title still carries weight.
pub fn tfidf_vectors(documents: &[&str], tokenizer: &Tokenizer) -> Vec<SparseVector> {
    let mut vocabulary: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<SparseVector> = Vec::with_capacity(documents.len());

    for doc in documents {
        let mut tf = SparseVector::new();
        for token in tokenizer.tokenize(doc) {
            let next_id = vocabulary.len();
            let id = *vocabulary.entry(token).or_insert(next_id);
            *tf.entry(id).or_insert(0.0) += 1.0;
        }
        counts.push(tf);
    }

    let mut doc_freq = vec![0usize; vocabulary.len()];
    for tf in &counts {
        for &id in tf.keys() {
            doc_freq[id] += 1;
        }
    }

    let n = documents.len() as f64;
    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    counts
        .into_iter()
        .map(|tf| {
            let mut row: SparseVector = tf
                .into_iter()
                .map(|(id, count)| (id, count * idf[id]))
                .collect();
            let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in row.values_mut() {
                    *weight /= norm;
                }
            }
            row
        })
        .collect()
}

fn dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(id, w)| large.get(id).map(|v| w * v))
        .sum()
}

/// Pairwise cosine similarity of the given titles. Rows are normalised, so
/// cosine reduces to a dot product; an all-zero row scores 0 everywhere.
pub fn similarity_matrix(titles: &[&str]) -> Vec<Vec<f64>> {
    let vectors = tfidf_vectors(titles, english_tokenizer());
    let n = vectors.len();

    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let score = dot(&vectors[i], &vectors[j]);
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
    }
    matrix
}

/// For each record, the `top_n` other titles with the most similar wording.
/// Ties keep input order.
pub fn recommend(records: &[BookRecord], top_n: usize) -> Vec<RecommendationEntry> {
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    if titles.is_empty() {
        return Vec::new();
    }

    let matrix = similarity_matrix(&titles);

    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let mut ranked: Vec<(usize, f64)> = matrix[i]
                .iter()
                .copied()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .collect();
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

            RecommendationEntry {
                title: title.to_string(),
                recs: ranked
                    .into_iter()
                    .take(top_n)
                    .map(|(j, _)| titles[j].to_string())
                    .collect(),
            }
        })
        .collect()
}
