/// Splits text into lowercase terms of at least two word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().nth(1).is_some())
        .map(|token| token.to_lowercase())
        .collect()
}
