pub mod flatten;
pub mod merge;
pub mod pipeline;
pub mod rebuild;
pub mod reconcile;
pub mod unify;

pub use flatten::{Flattened, flatten_options};
pub use merge::merge_groups;
pub use pipeline::{CanonicalOutput, Canonicalized, canonicalize, canonicalize_text, reconcile_texts};
pub use rebuild::{CANONICAL_ROOT_TAG, DEPENDENT_TYPE, XmlOptions, rebuild_xml};
pub use reconcile::{Reconciliation, reconcile};
pub use unify::unify_dependents;
