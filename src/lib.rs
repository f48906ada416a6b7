pub mod build_info;
pub mod categorize;
pub mod command;
pub mod context;
pub mod normalize;
pub mod normalizer;
pub mod process;
pub mod profile;
pub mod stage;
pub mod unicode;

pub use categorize::{categorize, categorize_code_points, categorize_str, category_names};
pub use command::{CommandError, CommandOutput, dispatch};
pub use context::{Context, Form, UnsupportedOption};
pub use normalize::{NormalizeError, is_normalized, normalize, normalize_str, normalize_with};
pub use normalizer::{Normalizer, NormalizerBuilder, NormalizerError};
pub use profile::{EncodingError, Profile};
pub use stage::StageError;
pub use unicode::{Category, unicode_version};

#[cfg(test)]
pub(crate) mod testing {
    pub(crate) mod stage_contract;
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
    include!("tests/conformance.rs");
}
