//! Version comparison for ordering resolved artifacts.
//!
//! Dependency versions in the wild are rarely strict semantic versions
//! (`1.0`, `2.3-SNAPSHOT`, `1.0.0.RELEASE`, `3.2.1-rc1`), so this module
//! compares them the way conventional dependency tooling does: versions are
//! split into numeric and qualifier items, numbers compare numerically and
//! qualifiers by their conventional rank.
//!
//! # Rules
//!
//! - Items are separated by `.`, `-`, `_` and by every switch between digits
//!   and letters (`rc1` is `rc`, `1`). A leading `v` before a digit is ignored.
//! - Qualifiers are case-insensitive and rank
//!   `alpha < beta < milestone < rc < snapshot < (release) < sp`, with unknown
//!   qualifiers after `sp` in lexical order. `a`, `b`, `m` and `cr` are aliases
//!   of `alpha`, `beta`, `milestone` and `rc`; `ga`, `final` and `release`
//!   mean a plain release and are dropped.
//! - Any number is newer than any qualifier.
//! - Trailing zeros of a numeric run are insignificant: `1` equals `1.0.0` and
//!   `1.0-alpha` equals `1-alpha`.
//! - Versions that rank equal but differ textually fall back to plain string
//!   order, so [`VersionComparator::compare`] is a total order.
//!
//! # Examples
//!
//! ```rust
//! use deptemplate_cli::version::VersionComparator;
//! use std::cmp::Ordering;
//!
//! assert_eq!(VersionComparator::compare("1.9", "1.10"), Ordering::Less);
//! assert_eq!(VersionComparator::compare("2.0-SNAPSHOT", "2.0"), Ordering::Less);
//! assert_eq!(VersionComparator::compare("1.0-sp1", "1.0"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

const RELEASE_RANK: u8 = 5;
const UNKNOWN_RANK: u8 = 7;

/// Version comparison utilities for artifact ordering.
pub struct VersionComparator;

impl VersionComparator {
    /// Compare two version strings.
    ///
    /// Never fails: anything that is not a number is treated as a qualifier.
    pub fn compare(left: &str, right: &str) -> Ordering {
        let left_items = Self::parse_version(left);
        let right_items = Self::parse_version(right);

        Self::compare_items(&left_items, &right_items).then_with(|| left.cmp(right))
    }

    /// Returns `true` when `left` and `right` denote the same version, e.g.
    /// `1.0` and `1.0.0`.
    pub fn is_equivalent(left: &str, right: &str) -> bool {
        Self::compare_items(&Self::parse_version(left), &Self::parse_version(right))
            == Ordering::Equal
    }

    fn compare_items(left: &[Item], right: &[Item]) -> Ordering {
        let padding = Item::release();
        let len = left.len().max(right.len());

        for index in 0..len {
            let l = left.get(index).unwrap_or(&padding);
            let r = right.get(index).unwrap_or(&padding);
            match l.cmp(r) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        Ordering::Equal
    }

    /// Split a version into normalised items.
    fn parse_version(version_str: &str) -> Vec<Item> {
        let lowered = version_str.trim().to_lowercase();
        let clean_version = match lowered.strip_prefix('v') {
            Some(stripped) if stripped.starts_with(|c: char| c.is_ascii_digit()) => stripped,
            _ => lowered.as_str(),
        };

        let mut items = Vec::new();
        for token in tokenize(clean_version) {
            let item = Item::from_token(token);
            if item.is_release() {
                // Dropping the qualifier may leave a numeric run ending in zeros.
                trim_trailing_zeros(&mut items);
                continue;
            }
            if matches!(item, Item::Qualifier(..)) {
                trim_trailing_zeros(&mut items);
            }
            items.push(item);
        }
        trim_trailing_zeros(&mut items);

        items
    }
}

/// One component of a version.
///
/// The derived order is the comparison order: every qualifier sorts before
/// every number, qualifiers by rank then text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Item {
    Qualifier(u8, String),
    Number(Digits),
}

impl Item {
    fn release() -> Self {
        Self::Qualifier(RELEASE_RANK, String::new())
    }

    fn is_release(&self) -> bool {
        matches!(self, Self::Qualifier(RELEASE_RANK, _))
    }

    fn is_zero(&self) -> bool {
        matches!(self, Self::Number(digits) if digits.0.is_empty())
    }

    fn from_token(token: &str) -> Self {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Number(Digits(token.trim_start_matches('0').to_string()));
        }

        let (rank, text) = match token {
            "alpha" | "a" => (0, ""),
            "beta" | "b" => (1, ""),
            "milestone" | "m" => (2, ""),
            "rc" | "cr" => (3, ""),
            "snapshot" => (4, ""),
            "ga" | "final" | "release" => (RELEASE_RANK, ""),
            "sp" => (6, ""),
            other => (UNKNOWN_RANK, other),
        };
        Self::Qualifier(rank, text.to_string())
    }
}

/// Decimal digits without leading zeros; zero is the empty string.
///
/// Compared by length first so arbitrarily long numbers never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits(String);

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn trim_trailing_zeros(items: &mut Vec<Item>) {
    while items.last().is_some_and(Item::is_zero) {
        items.pop();
    }
}

/// Split on separators and on digit/letter boundaries. Empty tokens are skipped.
fn tokenize(version: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut previous_digit: Option<bool> = None;

    for (index, ch) in version.char_indices() {
        if matches!(ch, '.' | '-' | '_' | '+') {
            if start < index {
                tokens.push(&version[start..index]);
            }
            start = index + ch.len_utf8();
            previous_digit = None;
            continue;
        }

        let is_digit = ch.is_ascii_digit();
        if previous_digit.is_some_and(|previous| previous != is_digit) {
            tokens.push(&version[start..index]);
            start = index;
        }
        previous_digit = Some(is_digit);
    }

    if start < version.len() {
        tokens.push(&version[start..]);
    }

    tokens
}
