//! Output path selectors
//!
//! The placeholders an output template may use, kept as one table so the
//! token text, the enum and its meaning can't drift apart.

use std::fmt;

use crate::domain::entities::InputFile;
use crate::domain::value_objects::path;

/// Which part of an input path a placeholder stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `$(SRC:PKG/PATH/BASE.EXT)`
    PkgPathBaseExt,
    /// `$(SRC:PKG/PATH/BASE)`
    PkgPathBase,
    /// `$(SRC:PATH/BASE.EXT)`
    PathBaseExt,
    /// `$(SRC:PATH/BASE)`
    PathBase,
    /// `$(SRC:BASE.EXT)`
    BaseExt,
    /// `$(SRC:BASE)`
    Base,
    /// `$(SRC)`, alias for `PATH/BASE.EXT`
    Bare,
}

impl Selector {
    /// Every selector with its variable name, most specific first.
    ///
    /// No entry is a textual prefix of an entry before it.
    pub const TABLE: [(&'static str, Selector); 7] = [
        ("SRC:PKG/PATH/BASE.EXT", Selector::PkgPathBaseExt),
        ("SRC:PKG/PATH/BASE", Selector::PkgPathBase),
        ("SRC:PATH/BASE.EXT", Selector::PathBaseExt),
        ("SRC:PATH/BASE", Selector::PathBase),
        ("SRC:BASE.EXT", Selector::BaseExt),
        ("SRC:BASE", Selector::Base),
        ("SRC", Selector::Bare),
    ];

    /// Look up a variable name (the text between `$(` and `)`).
    pub fn from_name(name: &str) -> Option<Selector> {
        Self::TABLE
            .iter()
            .find(|(token, _)| *token == name)
            .map(|(_, selector)| *selector)
    }

    /// Variable name for this selector
    pub fn name(&self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(_, selector)| selector == self)
            .map(|(token, _)| *token)
            .unwrap_or("SRC")
    }

    /// Whether this selector removes the extension
    pub fn strips_extension(&self) -> bool {
        matches!(
            self,
            Selector::PkgPathBase | Selector::PathBase | Selector::Base
        )
    }

    /// The text this selector produces for `input`.
    pub fn apply(&self, input: &InputFile) -> String {
        let full = match self {
            Selector::PkgPathBaseExt | Selector::PkgPathBase => input.path(),
            Selector::PathBaseExt | Selector::PathBase | Selector::Bare => input.rel().to_string(),
            Selector::BaseExt | Selector::Base => input.base().to_string(),
        };
        if self.strips_extension() {
            path::strip_extension(&full).to_string()
        } else {
            full
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$({})", self.name())
    }
}
