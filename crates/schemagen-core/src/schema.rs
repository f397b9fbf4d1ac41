mod field;
pub use field::ModelField;

mod marker;
pub use marker::{is_required, SkipMarkers, DEFAULT_SKIP_MARKERS, REQUIRED_TOKENS};

mod model;
pub use model::{Model, ModelIndex, ModelSet, DEFAULT_PACKAGE, MODEL_COUNT};

mod name;
pub use name::{Name, SENTINEL};

mod row;
pub use row::SchemaRow;

pub mod select;

mod ty;
pub use ty::{ResolvedType, TypeTable, DEFAULT_TYPE};
