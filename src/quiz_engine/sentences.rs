/// Break raw article text into candidate sentences.
///
/// Splits on sentence-terminal punctuation (`.`, `!`, `?`), trims each
/// fragment, and keeps only fragments longer than 20 characters. Runs of
/// terminators ("..", "?!") produce empty fragments in between, which the
/// length filter drops. Empty or too-short articles simply yield an empty
/// list — the assembler treats that as "cannot build a quiz".
pub fn split_sentences(content: &str) -> Vec<String> {
    content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > 20)
        .map(str::to_string)
        .collect()
}
