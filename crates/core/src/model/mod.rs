pub mod collection;
pub mod snapshot;
pub mod variable;

pub use collection::{VariableCollection, VariableMode};
pub use snapshot::VariableSnapshot;
pub use variable::{RawColor, ResolvedType, Variable, VariableAlias, VariableValue};
