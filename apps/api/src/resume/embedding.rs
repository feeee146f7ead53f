//! Deterministic bag-of-words vector. A stand-in for a semantic embedding: identical
//! text always yields an identical vector, nothing more is promised.

use crate::resume::models::EMBEDDING_DIMENSIONS;

pub fn embed_text(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0_f32; EMBEDDING_DIMENSIONS];
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    if words.is_empty() {
        return vector;
    }

    let weight = 1.0 / words.len() as f32;
    for word in &words {
        vector[bucket_for(word)] += weight;
    }

    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|v| *v /= norm);
    }
    vector
}

/// 31-multiplier rolling string hash over UTF-16 code units, reduced to a bucket.
fn bucket_for(word: &str) -> usize {
    let hash = word
        .encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32));
    hash.unsigned_abs() as usize % EMBEDDING_DIMENSIONS
}
