//! Obfuscation dictionaries.
//!
//! Three independent last-write-wins slots (general, class, package), each
//! holding at most one resolved word list reference, and the name supplies
//! that stream candidate identifiers from them.

mod reference;
pub mod supply;

pub use reference::{DictionaryReference, DictionarySource};
pub use supply::{name_supply_for, take_names, DictionaryNameSupply, NameSupply, SimpleNameSupply};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::ConfigurationError;

/// Which renaming scope a dictionary feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryKind {
    /// Field and method names.
    General,
    Class,
    Package,
}

impl DictionaryKind {
    pub const ALL: [DictionaryKind; 3] = [
        DictionaryKind::General,
        DictionaryKind::Class,
        DictionaryKind::Package,
    ];

    /// Name of the task option that sets this slot.
    pub fn option_name(self) -> &'static str {
        match self {
            DictionaryKind::General => "obfuscationdictionary",
            DictionaryKind::Class => "classobfuscationdictionary",
            DictionaryKind::Package => "packageobfuscationdictionary",
        }
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DictionaryKind::General => "general",
            DictionaryKind::Class => "class",
            DictionaryKind::Package => "package",
        };
        f.write_str(s)
    }
}

/// The three dictionary slots of one configuration.
///
/// `None` in a slot selects the built-in naming strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dictionaries {
    general: Option<DictionaryReference>,
    class: Option<DictionaryReference>,
    package: Option<DictionaryReference>,
}

impl Dictionaries {
    /// Resolves `source` and stores it in the `kind` slot, replacing any
    /// previous reference. The other slots are untouched.
    pub fn set(
        &mut self,
        kind: DictionaryKind,
        source: impl Into<DictionarySource>,
        base_dir: &Path,
    ) -> Result<&DictionaryReference, ConfigurationError> {
        let reference = DictionaryReference::resolve(source, base_dir)?;
        let slot = self.slot_mut(kind);
        if let Some(previous) = slot.as_ref() {
            tracing::debug!(%kind, %previous, "replacing dictionary reference");
        }
        Ok(&*slot.insert(reference))
    }

    pub fn get(&self, kind: DictionaryKind) -> Option<&DictionaryReference> {
        match kind {
            DictionaryKind::General => self.general.as_ref(),
            DictionaryKind::Class => self.class.as_ref(),
            DictionaryKind::Package => self.package.as_ref(),
        }
    }

    /// Resets one slot back to the built-in naming strategy.
    pub fn clear(&mut self, kind: DictionaryKind) {
        *self.slot_mut(kind) = None;
    }

    /// A fresh name supply for `kind`; reading is deferred to the first name.
    pub fn supply(&self, kind: DictionaryKind) -> Box<dyn NameSupply> {
        name_supply_for(self.get(kind))
    }

    fn slot_mut(&mut self, kind: DictionaryKind) -> &mut Option<DictionaryReference> {
        match kind {
            DictionaryKind::General => &mut self.general,
            DictionaryKind::Class => &mut self.class,
            DictionaryKind::Package => &mut self.package,
        }
    }
}
