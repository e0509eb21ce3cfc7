/*! Dataset processing

Transformations on the in-memory dataset (derivation, merging)
and on block streams (splitting).

Nothing here touches the dataset file: loading and saving are in [crate::io],
and [crate::pipelines] chains both.
!*/
pub mod derive;
pub mod merge;
pub mod split;

pub use derive::{derive, derive_with_mode, DeriveMode, TranslationMap};
pub use merge::merge;
pub use split::{split, SplitReport};
