//! Display options for the inspector.
//!
//! Options arrive in loose shapes: a single flag, a list of flags, or an
//! already normalized [`DisplayOptions`]. Every shape converts through
//! [`From`], and normalizing a normalized value is a no-op.

use std::collections::BTreeSet;
use std::fmt;

/// Emit console-log statements instead of markup.
pub const CONSOLE: &str = "console";

/// Use the typed recursive dump instead of the plain one.
pub const VARDUMP: &str = "vardump";

/// Marker carried by every normalized option set.
pub const PARSED: &str = "parsed";

/// A normalized set of display flags.
///
/// Unrecognized flags are kept but have no effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayOptions {
    flags: BTreeSet<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayOptions {
    /// Creates a normalized option set with no flags.
    #[must_use]
    pub fn new() -> Self {
        Self::parse(std::iter::empty::<&str>())
    }

    /// Normalizes raw flags into an option set.
    #[must_use]
    pub fn parse<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags: BTreeSet<String> = flags
            .into_iter()
            .map(|flag| flag.as_ref().trim().to_string())
            .filter(|flag| !flag.is_empty())
            .collect();
        flags.insert(PARSED.to_string());
        Self { flags }
    }

    /// Builder method to add a flag.
    #[must_use]
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.insert(flag.into());
        self
    }

    /// Builder method to enable console output.
    #[must_use]
    pub fn console(self) -> Self {
        self.with_flag(CONSOLE)
    }

    /// Builder method to enable the typed dump.
    #[must_use]
    pub fn vardump(self) -> Self {
        self.with_flag(VARDUMP)
    }

    /// Returns true if `flag` is set.
    #[must_use]
    pub fn has(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Returns true in console mode.
    #[must_use]
    pub fn is_console(&self) -> bool {
        self.has(CONSOLE)
    }

    /// Returns true when the typed dump is selected.
    #[must_use]
    pub fn is_vardump(&self) -> bool {
        self.has(VARDUMP)
    }

    /// Returns true once normalized. Always true for values of this type.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.has(PARSED)
    }

    /// Iterates the flags in sorted order, the parsed marker included.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }
}

/// Normalizes any accepted option shape.
///
/// `parse_options(parse_options(x)) == parse_options(x)` for every input.
pub fn parse_options(raw: impl Into<DisplayOptions>) -> DisplayOptions {
    raw.into()
}

impl fmt::Display for DisplayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<_> = self.flags().collect();
        write!(f, "[{}]", flags.join(", "))
    }
}

impl From<()> for DisplayOptions {
    fn from((): ()) -> Self {
        Self::new()
    }
}

impl From<&str> for DisplayOptions {
    fn from(flag: &str) -> Self {
        Self::parse([flag])
    }
}

impl From<String> for DisplayOptions {
    fn from(flag: String) -> Self {
        Self::parse([flag])
    }
}

impl From<&[&str]> for DisplayOptions {
    fn from(flags: &[&str]) -> Self {
        Self::parse(flags)
    }
}

impl<const N: usize> From<[&str; N]> for DisplayOptions {
    fn from(flags: [&str; N]) -> Self {
        Self::parse(flags)
    }
}

impl From<Vec<String>> for DisplayOptions {
    fn from(flags: Vec<String>) -> Self {
        Self::parse(flags)
    }
}

impl From<&DisplayOptions> for DisplayOptions {
    fn from(options: &DisplayOptions) -> Self {
        options.clone()
    }
}
