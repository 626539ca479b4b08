use regex::Regex;

/// Extract the known symptom names present in `text` as whole words.
///
/// Matching is case-insensitive and word-boundary anchored on both sides,
/// so "ache" does not match inside "headaches". The result follows the
/// order of `known_names` (the store's iteration order), not the order of
/// appearance in the text, and store-unique names mean no duplicates.
pub fn extract_symptoms(text: &str, known_names: &[String]) -> Vec<String> {
    let lowered = text.to_lowercase();
    known_names
        .iter()
        .filter(|name| matches_whole_word(&lowered, name))
        .cloned()
        .collect()
}

fn matches_whole_word(lowered_text: &str, name: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(&name.to_lowercase()));
    Regex::new(&pattern)
        .map(|re| re.is_match(lowered_text))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extracts_single_known_symptom() {
        let known = names(&["headache", "fever"]);
        assert_eq!(extract_symptoms("I have a headache", &known), vec!["headache"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let known = names(&["headache"]);
        assert_eq!(
            extract_symptoms("Woke up with a HEADACHE today", &known),
            vec!["headache"]
        );
    }

    #[test]
    fn substring_of_longer_word_does_not_match() {
        let known = names(&["headache"]);
        assert!(extract_symptoms("chronic headaches lately", &known).is_empty());
    }

    #[test]
    fn multi_word_names_match_across_spaces() {
        let known = names(&["shortness of breath"]);
        assert_eq!(
            extract_symptoms("mild shortness of breath when climbing stairs", &known),
            vec!["shortness of breath"]
        );
    }

    #[test]
    fn result_follows_store_order_not_text_order() {
        let known = names(&["headache", "fever", "cough"]);
        assert_eq!(
            extract_symptoms("a cough and then a headache", &known),
            vec!["headache", "cough"]
        );
    }

    #[test]
    fn symptom_mentioned_twice_appears_once() {
        let known = names(&["fever"]);
        assert_eq!(
            extract_symptoms("fever in the morning, fever at night", &known),
            vec!["fever"]
        );
    }

    #[test]
    fn no_known_symptoms_yields_empty() {
        let known = names(&["headache"]);
        assert!(extract_symptoms("my knee clicks when I walk", &known).is_empty());
        assert!(extract_symptoms("", &known).is_empty());
    }
}
