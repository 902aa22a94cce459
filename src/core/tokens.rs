//! Delimiter-based token splitting for list-valued options.

/// Delimiters accepted between `--src-specials` keywords.
pub const LIST_DELIMITERS: &[char] = &[',', ' '];

/// Lazy iterator over the non-empty tokens of a delimited string.
///
/// Runs of delimiters collapse, so no empty token is ever yielded. The input
/// is only borrowed; cloning the iterator restarts the scan from where the
/// clone was taken.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    delimiters: &'a [char],
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.trim_start_matches(self.delimiters);
        if start.is_empty() {
            self.rest = start;
            return None;
        }
        let end = start.find(self.delimiters).unwrap_or(start.len());
        let (token, rest) = start.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

pub fn split_tokens<'a>(input: &'a str, delimiters: &'a [char]) -> Tokens<'a> {
    Tokens {
        rest: input,
        delimiters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_consecutive_delimiters() {
        let tokens: Vec<_> = split_tokens(",,par, cr  ,math,", LIST_DELIMITERS).collect();
        assert_eq!(tokens, ["par", "cr", "math"]);
    }

    #[test]
    fn empty_and_delimiter_only_inputs_yield_nothing() {
        assert_eq!(split_tokens("", LIST_DELIMITERS).count(), 0);
        assert_eq!(split_tokens(" , ,", LIST_DELIMITERS).count(), 0);
    }

    #[test]
    fn clone_restarts_from_current_position() {
        let mut tokens = split_tokens("a,b,c", LIST_DELIMITERS);
        assert_eq!(tokens.next(), Some("a"));
        let replay: Vec<_> = tokens.clone().collect();
        assert_eq!(replay, ["b", "c"]);
        assert_eq!(tokens.collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let list = String::from("hbox vbox");
        let _ = split_tokens(&list, LIST_DELIMITERS).count();
        assert_eq!(list, "hbox vbox");
    }
}
