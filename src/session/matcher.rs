/// Product mention heuristic used to decide whether to offer the lead form.
///
/// Case-insensitive; a product matches when its full name appears in the query,
/// the query appears in the name, or any whitespace-separated word of the name
/// with at least three characters appears in the query. Deliberately permissive.
pub fn matches<S: AsRef<str>>(query: &str, catalog: &[S]) -> bool {
    if catalog.is_empty() {
        log::debug!("No products available to match against");
        return false;
    }

    let query = query.to_lowercase();

    let found = catalog.iter().any(|product| {
        let product = product.as_ref().to_lowercase();

        if query.contains(&product) {
            log::debug!("Full product match: {}", product);
            return true;
        }

        if product.contains(&query) {
            log::debug!("Partial product match: {}", product);
            return true;
        }

        let word_match = product
            .split_whitespace()
            .filter(|word| word.chars().count() >= 3)
            .any(|word| query.contains(word));

        if word_match {
            log::debug!("Word product match: {}", product);
        }
        word_match
    });

    log::debug!("Product match for {:?}: {}", query, found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_in_query() {
        assert!(matches("I love the Widget Pro", &["Widget Pro", "Gadget"]));
    }

    #[test]
    fn query_inside_product_name() {
        assert!(matches("widget", &["Widget Pro"]));
        assert!(matches("DGE", &["Gadget"]));
    }

    #[test]
    fn long_word_of_product_in_query() {
        assert!(matches("does the pro version ship fast?", &["Widget Pro"]));
        assert!(matches("tell me about widgets", &["Widget Pro"]));
    }

    #[test]
    fn short_words_are_ignored() {
        // "X1" is below the three-character word threshold
        assert!(!matches("is the x1 any good", &["X1 Ultra"]));
    }

    #[test]
    fn empty_catalog_never_matches() {
        let empty: [&str; 0] = [];
        assert!(!matches("xyz", &empty));
        assert!(!matches("", &empty));
    }

    #[test]
    fn unrelated_query_does_not_match() {
        assert!(!matches("what are your opening hours", &["Widget Pro", "Gadget"]));
    }

    #[test]
    fn accepts_owned_strings() {
        let catalog = vec!["Solar Panel".to_string()];
        assert!(matches("SOLAR pricing", &catalog));
    }
}
