//! Language registration data.
//!
//! Editor hosts need a handful of facts to register DAN: its identifier,
//! file extensions, comment markers and bracket pairs. They are exposed here
//! as plain data so an adapter can serialize them into whatever format its
//! host expects.

use std::path::Path;

use serde::Serialize;

/// Identifier hosts register the language under.
pub const LANGUAGE_ID: &str = "dan";

/// Human readable language name.
pub const DISPLAY_NAME: &str = "DAN (Data Advanced Notation)";

/// Alternative names accepted by hosts.
pub const ALIASES: &[&str] = &["DAN", "dan"];

/// File extensions associated with DAN, dot included.
pub const FILE_EXTENSIONS: &[&str] = &[".dan"];

/// Markers that start a line comment. The first is used for toggling.
pub const LINE_COMMENTS: &[&str] = &["#", "//"];

/// TextMate root scope.
pub const SCOPE_NAME: &str = "source.dan";

/// Everything a host needs to register DAN.
///
/// ```
/// use dan_lex::LanguageConfiguration;
///
/// let config = LanguageConfiguration::dan();
/// assert_eq!(config.id, "dan");
/// assert_eq!(config.line_comment, "#");
/// assert!(config.brackets.contains(&["{", "}"]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfiguration {
    /// Language identifier.
    pub id: &'static str,
    /// Display name.
    pub display_name: &'static str,
    /// Alternative names.
    pub aliases: Vec<&'static str>,
    /// Associated file extensions.
    pub extensions: Vec<&'static str>,
    /// Marker inserted when toggling a line comment.
    pub line_comment: &'static str,
    /// Every marker that starts a line comment.
    pub line_comments: Vec<&'static str>,
    /// Bracket pairs used for matching and indentation.
    pub brackets: Vec<[&'static str; 2]>,
    /// Pairs closed automatically while typing.
    pub auto_closing_pairs: Vec<[&'static str; 2]>,
    /// Pairs that surround a selection.
    pub surrounding_pairs: Vec<[&'static str; 2]>,
    /// TextMate root scope.
    pub scope_name: &'static str,
}

impl LanguageConfiguration {
    /// The DAN registration.
    pub fn dan() -> Self {
        let brackets = vec![["{", "}"], ["[", "]"], ["(", ")"]];
        let mut auto_closing_pairs = brackets.clone();
        auto_closing_pairs.push(["\"", "\""]);

        Self {
            id: LANGUAGE_ID,
            display_name: DISPLAY_NAME,
            aliases: ALIASES.to_vec(),
            extensions: FILE_EXTENSIONS.to_vec(),
            line_comment: LINE_COMMENTS[0],
            line_comments: LINE_COMMENTS.to_vec(),
            surrounding_pairs: auto_closing_pairs.clone(),
            auto_closing_pairs,
            brackets,
            scope_name: SCOPE_NAME,
        }
    }
}

impl Default for LanguageConfiguration {
    fn default() -> Self {
        Self::dan()
    }
}

/// Returns true if `path` names a DAN document.
///
/// The extension is compared case-insensitively.
///
/// ```
/// use std::path::Path;
/// use dan_lex::is_dan_path;
///
/// assert!(is_dan_path(Path::new("config/app.dan")));
/// assert!(is_dan_path(Path::new("APP.DAN")));
/// assert!(!is_dan_path(Path::new("app.toml")));
/// assert!(!is_dan_path(Path::new("dan")));
/// ```
pub fn is_dan_path(path: &Path) -> bool {
    has_extension(path, FILE_EXTENSIONS)
}

/// Returns true if `path` ends in one of `extensions` (with or without
/// the leading dot), ignoring case.
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|candidate| candidate.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_facts() {
        let config = LanguageConfiguration::dan();
        assert_eq!(config.display_name, "DAN (Data Advanced Notation)");
        assert_eq!(config.aliases, vec!["DAN", "dan"]);
        assert_eq!(config.extensions, vec![".dan"]);
        assert_eq!(config.line_comments, vec!["#", "//"]);
        assert_eq!(config.brackets.len(), 3);
        assert!(config.auto_closing_pairs.contains(&["\"", "\""]));
        assert_eq!(config, LanguageConfiguration::default());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(LanguageConfiguration::dan()).unwrap();
        assert_eq!(json["id"], "dan");
        assert_eq!(json["displayName"], "DAN (Data Advanced Notation)");
        assert_eq!(json["lineComment"], "#");
        assert_eq!(json["brackets"][0][0], "{");
        assert_eq!(json["scopeName"], "source.dan");
    }

    #[test]
    fn test_is_dan_path() {
        assert!(is_dan_path(Path::new("a.dan")));
        assert!(is_dan_path(Path::new("/tmp/x/B.Dan")));
        assert!(!is_dan_path(Path::new("a.dan.bak")));
        assert!(!is_dan_path(Path::new(".dan")));
        assert!(!is_dan_path(Path::new("a")));
    }

    #[test]
    fn test_has_extension_accepts_bare_names() {
        assert!(has_extension(Path::new("x.cfg"), &["cfg"]));
        assert!(has_extension(Path::new("x.CFG"), &[".cfg".to_string()]));
        assert!(!has_extension(Path::new("x.cfg"), &["dan"]));
    }
}
