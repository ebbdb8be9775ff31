/// Transform an enumerated value name to upper-camel-case: split on
/// underscores, capitalize each segment (lowercasing the rest), and
/// concatenate.
///
/// Used for enum values that expose no identifier of their own, e.g.
/// `MULTI_WORD_VALUE` becomes `MultiWordValue`.
pub fn upper_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for c in chars {
                out.extend(c.to_lowercase());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(upper_camel_case("MULTI_WORD_VALUE"), "MultiWordValue");
        assert_eq!(upper_camel_case("WAITING"), "Waiting");
        assert_eq!(upper_camel_case("delivered"), "Delivered");
        assert_eq!(upper_camel_case("A"), "A");
    }

    #[test]
    fn test_upper_camel_case_degenerate_inputs() {
        assert_eq!(upper_camel_case(""), "");
        assert_eq!(upper_camel_case("_"), "");
        assert_eq!(upper_camel_case("__DOUBLE__GAP__"), "DoubleGap");
    }
}
