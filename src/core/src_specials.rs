//! Source-special insertion points and the `--src-specials=LIST` decoder.
use serde::{Deserialize, Serialize};

use crate::core::tokens::{LIST_DELIMITERS, split_tokens};
use crate::types::SrcSpecial;

/// Where the engine inserts source specials. `enabled` is derived: it is the
/// OR of the eight insertion flags after every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSpecials {
    pub auto: bool,
    pub every_par: bool,
    pub every_parend: bool,
    pub every_cr: bool,
    pub every_math: bool,
    pub every_hbox: bool,
    pub every_vbox: bool,
    pub every_display: bool,
    pub enabled: bool,
}

impl SourceSpecials {
    /// Bare `--src-specials`: auto mode. Other insertion points keep their
    /// current state.
    pub fn enable_auto(&mut self) {
        self.auto = true;
        self.every_par = true;
        self.enabled = true;
    }

    /// Clear all eight insertion flags.
    pub fn clear(&mut self) {
        *self = SourceSpecials::default();
    }

    pub fn any(&self) -> bool {
        self.auto
            || self.every_par
            || self.every_parend
            || self.every_cr
            || self.every_math
            || self.every_hbox
            || self.every_vbox
            || self.every_display
    }

    /// Decode a comma/space separated keyword list, starting from a cleared
    /// state. Unrecognized tokens are skipped and returned in order so the
    /// caller can warn about them.
    pub fn decode<'a>(&mut self, list: &'a str) -> Vec<&'a str> {
        let mut unknown = Vec::new();
        self.clear();

        for token in split_tokens(list, LIST_DELIMITERS) {
            match SrcSpecial::from_keyword(token) {
                Some(SrcSpecial::Par) => {
                    self.auto = true;
                    self.every_par = true;
                }
                Some(SrcSpecial::ParEnd) => self.every_parend = true,
                Some(SrcSpecial::Cr) => self.every_cr = true,
                Some(SrcSpecial::Math) => self.every_math = true,
                Some(SrcSpecial::HBox) => self.every_hbox = true,
                Some(SrcSpecial::VBox) => self.every_vbox = true,
                Some(SrcSpecial::Display) => self.every_display = true,
                Some(SrcSpecial::Reset) => self.clear(),
                None => unknown.push(token),
            }
        }

        self.enabled = self.any();
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par_and_cr() {
        let mut specials = SourceSpecials::default();
        assert!(specials.decode("par,cr").is_empty());
        assert_eq!(
            specials,
            SourceSpecials {
                auto: true,
                every_par: true,
                every_cr: true,
                enabled: true,
                ..SourceSpecials::default()
            }
        );
    }

    #[test]
    fn none_resets_a_previous_decode() {
        let mut specials = SourceSpecials::default();
        specials.decode("par,cr");
        specials.decode("none");
        assert_eq!(specials, SourceSpecials::default());
        assert!(!specials.enabled);
    }

    #[test]
    fn none_inside_a_list_only_clears_what_came_before() {
        let mut specials = SourceSpecials::default();
        specials.decode("math hbox,none,vbox");
        assert!(specials.every_vbox);
        assert!(!specials.every_math && !specials.every_hbox);
        assert!(specials.enabled);
    }

    #[test]
    fn unknown_tokens_are_reported_and_skipped() {
        let mut specials = SourceSpecials::default();
        let unknown = specials.decode("display,bogus,everymath,Par");
        assert_eq!(unknown, ["bogus", "Par"]);
        assert!(specials.every_display && specials.every_math);
        assert!(!specials.auto);
        assert!(specials.enabled);
    }

    #[test]
    fn decode_starts_from_cleared_state() {
        let mut specials = SourceSpecials::default();
        specials.enable_auto();
        specials.every_hbox = true;
        specials.decode("cr");
        assert!(specials.every_cr);
        assert!(!specials.auto && !specials.every_par && !specials.every_hbox);
    }

    #[test]
    fn bare_auto_keeps_other_points() {
        let mut specials = SourceSpecials::default();
        specials.decode("vbox");
        specials.enable_auto();
        assert!(specials.auto && specials.every_par && specials.every_vbox);
        assert!(specials.enabled);
    }

    #[test]
    fn empty_list_disables() {
        let mut specials = SourceSpecials::default();
        specials.enable_auto();
        assert!(specials.decode(" , ").is_empty());
        assert!(!specials.enabled);
    }
}
