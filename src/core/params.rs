use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::format::resolve_format_path;
use crate::core::src_specials::SourceSpecials;
use crate::types::InteractionMode;

/// Value handed to the engine when `--synctex` was not given.
pub const SYNCTEX_NO_OPTION: i32 = i32::MAX;

/// Fully resolved settings for one engine run, suitable for presets
/// (deserialized before command-line flags are applied) and for handing to
/// the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfiguration {
    /// None until `--interaction` picks a mode.
    pub interaction: Option<InteractionMode>,
    pub halt_on_error: bool,
    /// None means never set. Collapsed to `Some(false)` once parsing ends.
    pub file_line_error: Option<bool>,
    pub eight_bit: bool,
    pub no_pdf: bool,
    pub etex: bool,
    pub mltex: bool,
    pub ini: bool,
    pub debug_format: bool,
    /// Format (dump) base name from `--fmt`.
    pub format_name: Option<String>,
    /// Resolved format path; filled in by [`RunConfiguration::resolve_format`].
    pub format_path: String,
    /// Raw comment bytes, never more than 255 of them.
    #[serde(with = "raw::opt_bytes")]
    pub output_comment: Option<Vec<u8>>,
    pub output_driver: Option<String>,
    pub papersize: Option<String>,
    pub synctex: Option<i32>,
    pub src_specials: SourceSpecials,
    /// The positional argument, exactly as given.
    #[serde(with = "raw::path")]
    pub input_file: PathBuf,
}

impl RunConfiguration {
    pub fn interaction_code(&self) -> i32 {
        self.interaction
            .map_or(InteractionMode::UNSET_CODE, InteractionMode::code)
    }

    pub fn synctex_code(&self) -> i32 {
        self.synctex.unwrap_or(SYNCTEX_NO_OPTION)
    }

    pub fn file_line_error_style(&self) -> bool {
        self.file_line_error.unwrap_or(false)
    }

    /// Derive `format_path` from `format_name`.
    pub fn resolve_format(&mut self) {
        self.format_path = resolve_format_path(self.format_name.as_deref());
    }

    pub fn format_path_len(&self) -> usize {
        self.format_path.len()
    }

    /// `--mltex` is only honoured together with `--ini`.
    pub fn mltex_without_ini(&self) -> bool {
        self.mltex && !self.ini
    }
}

/// Serde forms for byte strings that are usually, but not always, UTF-8:
/// a JSON string when the bytes are valid UTF-8, an array of bytes otherwise.
mod raw {
    use std::path::PathBuf;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    struct Raw<'a>(&'a [u8]);

    impl Serialize for Raw<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match std::str::from_utf8(self.0) {
                Ok(text) => serializer.serialize_str(text),
                Err(_) => serializer.collect_seq(self.0),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Bytes(Vec<u8>),
    }

    impl From<Repr> for Vec<u8> {
        fn from(repr: Repr) -> Self {
            match repr {
                Repr::Text(text) => text.into_bytes(),
                Repr::Bytes(bytes) => bytes,
            }
        }
    }

    pub mod opt_bytes {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<Vec<u8>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(bytes) => serializer.serialize_some(&Raw(bytes)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Vec<u8>>, D::Error> {
            Ok(Option::<Repr>::deserialize(deserializer)?.map(Vec::from))
        }
    }

    pub mod path {
        use super::*;

        pub fn serialize<S: Serializer>(path: &PathBuf, serializer: S) -> Result<S::Ok, S::Error> {
            Raw(path.as_os_str().as_encoded_bytes()).serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
            let bytes = Vec::from(Repr::deserialize(deserializer)?);
            Ok(path_from_bytes(bytes))
        }

        #[cfg(unix)]
        fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
            use std::os::unix::ffi::OsStringExt;
            PathBuf::from(std::ffi::OsString::from_vec(bytes))
        }

        #[cfg(not(unix))]
        fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
            PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_codes() {
        let config = RunConfiguration::default();
        assert_eq!(config.interaction_code(), 4);
        assert_eq!(config.synctex_code(), i32::MAX);
        assert!(!config.file_line_error_style());
    }

    #[test]
    fn resolves_default_format() {
        let mut config = RunConfiguration::default();
        config.resolve_format();
        assert_eq!(config.format_path, "xelatex.fmt");
        assert_eq!(config.format_path_len(), 11);
    }

    #[test]
    fn preset_from_json() {
        let config: RunConfiguration = serde_json::from_str(
            r#"{"interaction": "batch", "src_specials": {"every_cr": true, "enabled": true}}"#,
        )
        .unwrap();
        assert_eq!(config.interaction, Some(InteractionMode::Batch));
        assert!(config.src_specials.every_cr);
        assert_eq!(config.synctex, None);
        assert_eq!(config.input_file, PathBuf::new());
        assert_eq!(config.output_comment, None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_and_comment_survive_json() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let config = RunConfiguration {
            input_file: PathBuf::from(std::ffi::OsString::from_vec(
                b"r\xe9sum\xe9.tex".to_vec(),
            )),
            output_comment: Some(b"caf\xc3".to_vec()),
            ..RunConfiguration::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json["input_file"],
            serde_json::json!([114, 233, 115, 117, 109, 233, 46, 116, 101, 120])
        );
        assert_eq!(json["output_comment"], serde_json::json!([99, 97, 102, 195]));

        let back: RunConfiguration = serde_json::from_value(json).unwrap();
        assert_eq!(back.input_file.as_os_str().as_bytes(), b"r\xe9sum\xe9.tex");
        assert_eq!(back, config);
    }

    #[test]
    fn utf8_path_and_comment_serialize_as_strings() {
        let config = RunConfiguration {
            input_file: PathBuf::from("doc.tex"),
            output_comment: Some(b"hello".to_vec()),
            ..RunConfiguration::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["input_file"], "doc.tex");
        assert_eq!(json["output_comment"], "hello");
    }
}
