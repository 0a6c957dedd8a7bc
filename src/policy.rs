//! Safety levels and the string-level predicates.
//!
//! Identifier levels:
//! - `ascii`: every character is ASCII
//! - `programming`: the first character is XID_Start, the rest XID_Continue
//! - `idmod`: every character has identifier status `Allowed` (UTS #39 §3.1)
//!
//! String levels:
//! - `unrestricted`: anything goes
//! - `ascii`: every character is ASCII
//! - `latin`: every character is in Basic Latin or a Latin block
//! - `allowed`: every character has the `Allowed` identifier type
//!
//! At every level, characters on the caller's [`AllowList`] pass unconditionally.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::confusables::ConfusableFinding;
use crate::tables::CharEntry;
use crate::{SafetyChecker, SafetyError};

/// Extra characters a caller permits on top of a level's rules.
///
/// Kept sorted and de-duplicated; most lists hold a handful of characters and
/// never leave the inline buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct AllowList {
    chars: SmallVec<[char; 8]>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// Add a character. Returns false if it was already present.
    pub fn insert(&mut self, c: char) -> bool {
        match self.chars.binary_search(&c) {
            Ok(_) => false,
            Err(pos) => {
                self.chars.insert(pos, c);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Extend<char> for AllowList {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl FromIterator<char> for AllowList {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut chars: SmallVec<[char; 8]> = iter.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }
}

impl From<&str> for AllowList {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<String> for AllowList {
    fn from(s: String) -> Self {
        s.chars().collect()
    }
}

impl From<AllowList> for String {
    fn from(list: AllowList) -> Self {
        list.iter().collect()
    }
}

#[inline]
pub(crate) fn permits(allowed: Option<&AllowList>, c: char) -> bool {
    allowed.is_some_and(|list| list.contains(c))
}

/// Policy for checking identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum IdentifierLevel {
    #[default]
    Ascii,
    Programming,
    Idmod,
}

impl IdentifierLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierLevel::Ascii => "ascii",
            IdentifierLevel::Programming => "programming",
            IdentifierLevel::Idmod => "idmod",
        }
    }
}

impl FromStr for IdentifierLevel {
    type Err = SafetyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(IdentifierLevel::Ascii),
            "programming" => Ok(IdentifierLevel::Programming),
            "idmod" => Ok(IdentifierLevel::Idmod),
            _ => Err(SafetyError::InvalidLevel {
                kind: "identifier",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for IdentifierLevel {
    type Error = SafetyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for IdentifierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy for checking arbitrary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum StringLevel {
    Unrestricted,
    #[default]
    Ascii,
    Latin,
    Allowed,
}

impl StringLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            StringLevel::Unrestricted => "unrestricted",
            StringLevel::Ascii => "ascii",
            StringLevel::Latin => "latin",
            StringLevel::Allowed => "allowed",
        }
    }
}

impl FromStr for StringLevel {
    type Err = SafetyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unrestricted" => Ok(StringLevel::Unrestricted),
            "ascii" => Ok(StringLevel::Ascii),
            "latin" => Ok(StringLevel::Latin),
            "allowed" => Ok(StringLevel::Allowed),
            _ => Err(SafetyError::InvalidLevel {
                kind: "string",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for StringLevel {
    type Error = SafetyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for StringLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Levels and allow-list applied together by [`SafetyChecker::assess`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SafetyConfig {
    pub identifier: IdentifierLevel,
    pub string: StringLevel,
    pub allowed: AllowList,
}

impl SafetyConfig {
    pub fn new(identifier: IdentifierLevel, string: StringLevel) -> Self {
        Self {
            identifier,
            string,
            allowed: AllowList::new(),
        }
    }

    pub fn with_allowed(mut self, allowed: impl Into<AllowList>) -> Self {
        self.allowed = allowed.into();
        self
    }

    fn allow_list(&self) -> Option<&AllowList> {
        (!self.allowed.is_empty()).then_some(&self.allowed)
    }
}

/// The result of checking one string against a [`SafetyConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assessment<'t> {
    pub safe_identifier: bool,
    pub safe_string: bool,
    pub confusables: Vec<ConfusableFinding<'t>>,
}

impl Assessment<'_> {
    /// Safe at both levels and free of intentional confusables.
    pub fn is_safe(&self) -> bool {
        self.safe_identifier && self.safe_string && self.confusables.is_empty()
    }
}

impl<'t> SafetyChecker<'t> {
    /// Check `s` as an identifier at the given level.
    ///
    /// Fails only for an empty string at [`IdentifierLevel::Programming`], which
    /// has no first character to test against XID_Start.
    pub fn is_safe_identifier(
        &self,
        s: &str,
        level: IdentifierLevel,
        allowed: Option<&AllowList>,
    ) -> Result<bool, SafetyError> {
        let safe = match level {
            IdentifierLevel::Ascii => self.all_ascii(s, allowed),
            IdentifierLevel::Programming => self.is_programming_identifier(s, allowed)?,
            IdentifierLevel::Idmod => s
                .chars()
                .all(|c| self.in_identifier_range(c) || permits(allowed, c)),
        };
        if !safe {
            tracing::trace!(level = %level, input = ?s, "identifier rejected");
        }
        Ok(safe)
    }

    fn is_programming_identifier(
        &self,
        s: &str,
        allowed: Option<&AllowList>,
    ) -> Result<bool, SafetyError> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(SafetyError::EmptyIdentifier)?;

        let passes = |c: char, test: fn(&CharEntry) -> bool| {
            permits(allowed, c) || self.tables.char_entry(c).is_some_and(test)
        };

        Ok(passes(first, CharEntry::is_xid_start)
            && chars.all(|c| passes(c, CharEntry::is_xid_continue)))
    }

    /// Check `s` as free text at the given level.
    pub fn is_safe_string(&self, s: &str, level: StringLevel, allowed: Option<&AllowList>) -> bool {
        let safe = match level {
            StringLevel::Unrestricted => true,
            StringLevel::Ascii => self.all_ascii(s, allowed),
            StringLevel::Latin => self.all_latin(s, allowed),
            StringLevel::Allowed => self.all_allowed(s, allowed),
        };
        if !safe {
            tracing::trace!(level = %level, input = ?s, "string rejected");
        }
        safe
    }

    /// Run both predicates and the confusable scan under one configuration.
    pub fn assess(&self, s: &str, config: &SafetyConfig) -> Result<Assessment<'t>, SafetyError> {
        let allowed = config.allow_list();
        Ok(Assessment {
            safe_identifier: self.is_safe_identifier(s, config.identifier, allowed)?,
            safe_string: self.is_safe_string(s, config.string, allowed),
            confusables: self.show_intentional_confusion(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::tables::fixtures;
    use crate::*;

    #[test]
    fn test_allow_list_sorted_and_deduplicated() {
        let mut list: AllowList = "cabbage".chars().collect();
        assert_eq!(list.iter().collect::<String>(), "abceg");
        assert!(list.contains('g'));
        assert!(!list.contains('z'));
        assert!(list.insert('z'));
        assert!(!list.insert('a'));
        list.extend("yz".chars());
        assert_eq!(String::from(list), "abcegyz");
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("ascii".parse::<IdentifierLevel>(), Ok(IdentifierLevel::Ascii));
        assert_eq!("Programming".parse::<IdentifierLevel>(), Ok(IdentifierLevel::Programming));
        assert_eq!("idmod".parse::<IdentifierLevel>(), Ok(IdentifierLevel::Idmod));
        assert_eq!("unrestricted".parse::<StringLevel>(), Ok(StringLevel::Unrestricted));
        assert_eq!("LATIN".parse::<StringLevel>(), Ok(StringLevel::Latin));
        assert_eq!("allowed".parse::<StringLevel>(), Ok(StringLevel::Allowed));
        assert_eq!(StringLevel::try_from("Latin".to_string()), Ok(StringLevel::Latin));
        assert_eq!(
            IdentifierLevel::try_from("IDMOD".to_string()),
            Ok(IdentifierLevel::Idmod)
        );
    }

    #[test]
    fn test_level_parsing_rejects_unknown() {
        assert_eq!(
            "latin".parse::<IdentifierLevel>(),
            Err(SafetyError::InvalidLevel {
                kind: "identifier",
                value: "latin".to_string()
            })
        );
        assert_eq!(
            "idmod".parse::<StringLevel>(),
            Err(SafetyError::InvalidLevel {
                kind: "string",
                value: "idmod".to_string()
            })
        );
        assert!("".parse::<StringLevel>().is_err());
    }

    #[test]
    fn test_level_display_round_trips() {
        for level in [
            IdentifierLevel::Ascii,
            IdentifierLevel::Programming,
            IdentifierLevel::Idmod,
        ] {
            assert_eq!(level.to_string().parse::<IdentifierLevel>(), Ok(level));
        }
        for level in [
            StringLevel::Unrestricted,
            StringLevel::Ascii,
            StringLevel::Latin,
            StringLevel::Allowed,
        ] {
            assert_eq!(level.to_string().parse::<StringLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_programming_identifier() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        let level = IdentifierLevel::Programming;

        assert_eq!(checker.is_safe_identifier("a0", level, None), Ok(true));
        assert_eq!(checker.is_safe_identifier("\u{E9}\u{0300}", level, None), Ok(true));
        assert_eq!(
            checker.is_safe_identifier("0a", level, None),
            Ok(false),
            "digits continue but do not start"
        );
        assert_eq!(
            checker.is_safe_identifier("aB", level, None),
            Ok(false),
            "'B' has no repertoire entry"
        );

        let allowed = AllowList::from("0B");
        assert_eq!(checker.is_safe_identifier("0aB", level, Some(&allowed)), Ok(true));
    }

    #[test]
    fn test_programming_identifier_empty() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        assert_eq!(
            checker.is_safe_identifier("", IdentifierLevel::Programming, None),
            Err(SafetyError::EmptyIdentifier)
        );
        assert_eq!(checker.is_safe_identifier("", IdentifierLevel::Ascii, None), Ok(true));
        assert_eq!(checker.is_safe_identifier("", IdentifierLevel::Idmod, None), Ok(true));
    }

    #[test]
    fn test_idmod_identifier() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        let level = IdentifierLevel::Idmod;
        assert_eq!(checker.is_safe_identifier("snake_case9", level, None), Ok(true));
        assert_eq!(checker.is_safe_identifier("kebab-case", level, None), Ok(false));
        let allowed = AllowList::from("-");
        assert_eq!(checker.is_safe_identifier("kebab-case", level, Some(&allowed)), Ok(true));
    }

    #[test]
    fn test_ascii_identifier_honors_allow_list() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        let allowed = AllowList::from("\u{E9}");
        assert_eq!(
            checker.is_safe_identifier("caf\u{E9}", IdentifierLevel::Ascii, None),
            Ok(false)
        );
        assert_eq!(
            checker.is_safe_identifier("caf\u{E9}", IdentifierLevel::Ascii, Some(&allowed)),
            Ok(true)
        );
    }

    #[test]
    fn test_string_levels() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        let s = "a\u{E9}";
        assert!(checker.is_safe_string(s, StringLevel::Unrestricted, None));
        assert!(!checker.is_safe_string(s, StringLevel::Ascii, None));
        assert!(checker.is_safe_string(s, StringLevel::Latin, None));
        assert!(!checker.is_safe_string(s, StringLevel::Allowed, None));
        assert!(checker.is_safe_string("\u{0378}\u{FFFF}", StringLevel::Unrestricted, None));
    }

    #[test]
    fn test_assess() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);

        let config = SafetyConfig::new(IdentifierLevel::Programming, StringLevel::Latin);
        let clean = checker.assess("a\u{E9}", &config).unwrap();
        assert!(clean.is_safe());

        let spoofed = checker.assess("\u{0430}a", &config).unwrap();
        assert!(spoofed.safe_identifier);
        assert!(!spoofed.safe_string, "Cyrillic is not a Latin block");
        assert_eq!(spoofed.confusables.len(), 1);
        assert!(!spoofed.is_safe());

        assert_eq!(checker.assess("", &config), Err(SafetyError::EmptyIdentifier));
    }

    #[test]
    fn test_assess_uses_allow_list() {
        let tables = fixtures::tables();
        let checker = SafetyChecker::new(&tables);
        let config = SafetyConfig::default().with_allowed("\u{E9}");
        let assessment = checker.assess("caf\u{E9}", &config).unwrap();
        assert!(assessment.safe_identifier);
        assert!(assessment.safe_string);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: SafetyConfig = serde_json::from_str(
            r#"{"identifier": "idmod", "string": "latin", "allowed": "-."}"#,
        )
        .unwrap();
        assert_eq!(config.identifier, IdentifierLevel::Idmod);
        assert_eq!(config.string, StringLevel::Latin);
        assert!(config.allowed.contains('-'));
        assert!(config.allowed.contains('.'));

        let defaults: SafetyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, SafetyConfig::default());

        assert!(serde_json::from_str::<SafetyConfig>(r#"{"string": "klingon"}"#).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_levels_parse_like_from_str() {
        let config: SafetyConfig =
            serde_json::from_str(r#"{"identifier": "IdMod", "string": "Latin"}"#).unwrap();
        assert_eq!(config.identifier, IdentifierLevel::Idmod);
        assert_eq!(config.string, StringLevel::Latin);

        let err = serde_json::from_str::<StringLevel>(r#""Klingon""#).unwrap_err();
        assert!(err.to_string().contains("unsupported string level"), "{}", err);

        // Serialization always writes the lower-case name.
        assert_eq!(serde_json::to_string(&StringLevel::Latin).unwrap(), r#""latin""#);
        assert_eq!(
            serde_json::from_str::<StringLevel>(&serde_json::to_string(&StringLevel::Allowed).unwrap()).unwrap(),
            StringLevel::Allowed
        );
    }
}
