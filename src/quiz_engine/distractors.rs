use rand::Rng;

/// Strip the punctuation the whitespace tokenizer leaves attached to words.
/// Removes every `,` `;` `:`, wherever it sits in the token.
pub(crate) fn clean_token(token: &str) -> String {
    token.chars().filter(|c| !matches!(c, ',' | ';' | ':')).collect()
}

/// Produce exactly three wrong options for `keyword`.
///
/// Distractors come from the source sentence's own token list, not the whole
/// article, so a short sentence can starve the pool; remaining slots are
/// padded with `Option N` placeholders numbered by fill position. The result
/// never contains the keyword, but two distractors may share text when the
/// sentence repeats a word.
pub fn pick_distractors<R: Rng>(rng: &mut R, keyword: &str, tokens: &[&str]) -> Vec<String> {
    let filtered: Vec<String> = tokens
        .iter()
        .map(|t| clean_token(t))
        .filter(|t| t != keyword && t.chars().count() > 3)
        .collect();

    // Partial Fisher-Yates over an index pool: uniform sampling without
    // replacement, bounded work even on tiny pools.
    let mut pool: Vec<usize> = (0..filtered.len()).collect();
    let mut selected = Vec::with_capacity(3);
    while selected.len() < 3 && !pool.is_empty() {
        let j = rng.gen_range(0..pool.len());
        let idx = pool.swap_remove(j);
        selected.push(filtered[idx].clone());
    }

    while selected.len() < 3 {
        selected.push(format!("Option {}", selected.len() + 1));
    }

    selected
}
