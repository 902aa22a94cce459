//! Keyword enums shared by the option parser and the configuration.
//! Includes `InteractionMode` and the `--src-specials` keywords (`SrcSpecial`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the engine reacts to errors. The numeric codes are the ones the engine
/// expects on hand-off.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    #[value(name = "batchmode")]
    Batch,
    #[value(name = "nonstopmode")]
    Nonstop,
    #[value(name = "scrollmode")]
    Scroll,
    #[value(name = "errorstopmode")]
    ErrorStop,
}

impl InteractionMode {
    /// Code handed to the engine when no `--interaction` was given. It is
    /// outside 0..=3 on purpose; the engine picks its own default.
    pub const UNSET_CODE: i32 = 4;

    pub fn code(self) -> i32 {
        match self {
            InteractionMode::Batch => 0,
            InteractionMode::Nonstop => 1,
            InteractionMode::Scroll => 2,
            InteractionMode::ErrorStop => 3,
        }
    }
}

/// One keyword of a `--src-specials=LIST` value. The short form is the
/// canonical name; the `every*` long forms are aliases.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum SrcSpecial {
    #[value(name = "par", aliases = ["everypar", "auto"])]
    Par,
    #[value(name = "parend", alias = "everyparend")]
    ParEnd,
    #[value(name = "cr", alias = "everycr")]
    Cr,
    #[value(name = "math", alias = "everymath")]
    Math,
    #[value(name = "hbox", alias = "everyhbox")]
    HBox,
    #[value(name = "vbox", alias = "everyvbox")]
    VBox,
    #[value(name = "display", alias = "everydisplay")]
    Display,
    /// Clears every insertion point.
    #[value(name = "none")]
    Reset,
}

impl SrcSpecial {
    /// Case-sensitive keyword lookup, synonyms included.
    pub fn from_keyword(token: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(token, false).ok()
    }
}
