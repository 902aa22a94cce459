//! Version banner parsing and the `--version` notice.
use std::io::Write;

use crate::error::{Error, Result};

/// Engine banner. Its shape is fixed: `This is <PROGRAM>, Version <VERSION>`.
pub const BANNER: &str = "This is Tectonic, Version 3.14159265-2.6-0.99996";
pub const COPYRIGHT_HOLDER: &str = "The Tectonic Project";
pub const AUTHOR: &str = "The Tectonic Project";
pub const BUG_ADDRESS: &str = "https://github.com/pkgw/tectonic/issues";

const BANNER_PREFIX: &str = "This is ";
const VERSION_SUFFIX: &str = " (Tectonic)";

/// Program name and version pulled out of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner<'a> {
    pub program: &'a str,
    pub version: &'a str,
}

/// Split a banner into program name (between the prefix and the first comma)
/// and version (after the last space).
pub fn parse_banner(banner: &str) -> Result<Banner<'_>> {
    let malformed = || Error::MalformedBanner {
        banner: banner.to_string(),
    };

    let comma = banner.find(',').ok_or_else(malformed)?;
    let space = banner.rfind(' ').ok_or_else(malformed)?;
    let program = banner[..comma]
        .strip_prefix(BANNER_PREFIX)
        .ok_or_else(malformed)?;

    Ok(Banner {
        program,
        version: &banner[space + 1..],
    })
}

/// Everything printed by `--version`.
#[derive(Debug, Clone, Copy)]
pub struct VersionNotice<'a> {
    pub banner: &'a str,
    pub copyright_holder: Option<&'a str>,
    pub author: Option<&'a str>,
    /// Appended verbatim after the notice.
    pub extra_info: Option<&'a str>,
}

impl<'a> VersionNotice<'a> {
    /// The notice for this build.
    pub fn tectonic(extra_info: &'a str) -> Self {
        Self {
            banner: BANNER,
            copyright_holder: Some(COPYRIGHT_HOLDER),
            author: Some(AUTHOR),
            extra_info: Some(extra_info),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let Banner { program, version } = parse_banner(self.banner)?;
        let mut author = self.author;

        writeln!(out, "{} {}{}", program, version, VERSION_SUFFIX)?;

        if let Some(holder) = self.copyright_holder {
            writeln!(out, "Copyright 2016 {}.", holder)?;
            author = author.or(Some(holder));
        }

        writeln!(out, "There is NO warranty.  Redistribution of this software is")?;
        writeln!(out, "covered by the terms of both the {} copyright and", program)?;
        writeln!(out, "the Lesser GNU General Public License.")?;
        writeln!(out, "For more information about these matters, see the file")?;
        writeln!(out, "named COPYING and the {} source.", program)?;
        if let Some(author) = author {
            writeln!(out, "Primary author of {}: {}.", program, author)?;
        }

        if let Some(extra) = self.extra_info {
            out.write_all(extra.as_bytes())?;
        }
        Ok(())
    }
}

/// Component versions listed under the notice.
pub fn component_versions() -> String {
    format!(
        "Compiled with {} version {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
