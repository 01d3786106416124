//! Waypoint name decomposition.
//!
//! Waypoint collections often encode extra data in the name, for example
//! `"2475 m - Rifugio Quintino Sella (IT)"`. Each source file can have a
//! regular expression with named groups that pulls these parts out:
//!
//! | group | use |
//! |---|---|
//! | `Prenom` | leading part of the cleaned name |
//! | `Name` | main part of the cleaned name |
//! | `Ele` | elevation in meters, used when the waypoint has none |
//! | `Countries` | extracted but not used |
//!
//! Patterns are keyed by source file name, with `"default"` as the fallback.

use std::collections::HashMap;

use regex::Regex;

use crate::waypoint::Waypoint;

/// Key of the pattern used when a file has no pattern of its own.
pub const DEFAULT_PATTERN_KEY: &str = "default";

/// Error compiling a configured pattern.
#[derive(Debug, thiserror::Error)]
#[error("Invalid regex for {key}: {source}")]
pub struct PatternError {
    pub key: String,
    #[source]
    pub source: regex::Error,
}

/// Parts extracted from a waypoint name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameParts {
    pub prenom: String,
    pub name: String,
    pub countries: String,
    /// Parsed `Ele` group; `None` when absent or not a number
    pub elevation: Option<f64>,
}

impl NameParts {
    /// `Prenom` and `Name` joined by a space, trimmed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.prenom, self.name).trim().to_string()
    }
}

/// Compiled per-file name patterns.
#[derive(Debug, Clone, Default)]
pub struct NamePatterns {
    patterns: HashMap<String, Regex>,
}

impl NamePatterns {
    /// Compile patterns from a file-name → regex map.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn compile<'a>(
        sources: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<Self, PatternError> {
        let mut patterns = HashMap::new();
        for (key, pattern) in sources {
            let regex = Regex::new(pattern).map_err(|source| PatternError {
                key: key.clone(),
                source,
            })?;
            patterns.insert(key.clone(), regex);
        }
        Ok(Self { patterns })
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern for a file, falling back to the default pattern.
    pub fn pattern_for(&self, file_name: &str) -> Option<&Regex> {
        self.patterns
            .get(file_name)
            .or_else(|| self.patterns.get(DEFAULT_PATTERN_KEY))
    }

    /// Split a name using the pattern for `file_name`.
    ///
    /// Returns `None` if there is no applicable pattern or it does not match.
    pub fn parse(&self, file_name: &str, text: &str) -> Option<NameParts> {
        let regex = self.pattern_for(file_name)?;
        let captures = regex.captures(text)?;
        let group = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        let ele = group("Ele");
        Some(NameParts {
            prenom: group("Prenom"),
            name: group("Name"),
            countries: group("Countries"),
            elevation: if ele.is_empty() {
                None
            } else {
                ele.trim().parse().ok()
            },
        })
    }

    /// Rewrite a waypoint using the pattern for its source file.
    ///
    /// On a match the name is replaced by [`NameParts::display_name`], and a
    /// positive `Ele` value fills in a missing elevation. Returns whether the
    /// pattern matched.
    pub fn apply(&self, file_name: &str, waypoint: &mut Waypoint) -> bool {
        let Some(parts) = self.parse(file_name, &waypoint.name) else {
            return false;
        };

        waypoint.name = parts.display_name();
        if waypoint.elevation.is_none() {
            if let Some(ele) = parts.elevation.filter(|e| *e > 0.0) {
                waypoint.elevation = Some(ele);
            }
        }
        true
    }

    /// Apply [`apply`](Self::apply) to every waypoint; returns the match count.
    pub fn apply_all(&self, file_name: &str, waypoints: &mut [Waypoint]) -> usize {
        waypoints
            .iter_mut()
            .map(|wp| self.apply(file_name, wp))
            .filter(|matched| *matched)
            .count()
    }
}
