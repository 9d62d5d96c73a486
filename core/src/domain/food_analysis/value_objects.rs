use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct AnalyzeUploadInput {
    pub filename: String,
    pub mime_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct InferAllergensInput {
    pub ingredients: String,
}

/// Best-effort split of a `{a, b, ...}` reply into its items.
///
/// Returns an empty list when no braced group is present. Text outside the
/// first `{` and the last `}` is ignored.
pub fn split_braced_list(text: &str) -> Vec<String> {
    let Some(start) = text.find('{') else {
        return Vec::new();
    };
    let Some(end) = text.rfind('}') else {
        return Vec::new();
    };
    if end <= start {
        return Vec::new();
    }

    text[start + 1..end]
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\''))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_list() {
        assert_eq!(
            split_braced_list("{bread, apple, milk}"),
            vec!["bread", "apple", "milk"]
        );
    }

    #[test]
    fn ignores_surrounding_text_and_quotes() {
        assert_eq!(
            split_braced_list("Sure! {\"peanuts\", 'shellfish' } hope that helps"),
            vec!["peanuts", "shellfish"]
        );
    }

    #[test]
    fn drops_empty_entries() {
        assert_eq!(split_braced_list("{egg,, ,soy,}"), vec!["egg", "soy"]);
        assert!(split_braced_list("{}").is_empty());
    }

    #[test]
    fn no_braces_means_no_items() {
        assert!(split_braced_list("bread and apples").is_empty());
        assert!(split_braced_list("} backwards {").is_empty());
    }
}
