//! Option definitions, the assembly-time registry, and its frozen snapshot.

mod def;
pub mod registry;
mod snapshot;
pub mod validators;

pub use def::{ChoiceSpec, NamedRangeSpec, OptionDef, OptionKind, RangeSpec};
pub use registry::{InsertAction, OptionRegistry, Override, WriteCounts};
pub use snapshot::OptionCatalog;
pub use validators::Violation;
