/// Join query words, unescape `\ ` and trim.
///
/// Launchers pass the query either as separate words or as one string with
/// escaped spaces; both end up as the same prefix.
pub fn normalize_query(words: &[String]) -> String {
    words.join(" ").replace("\\ ", " ").trim().to_string()
}
