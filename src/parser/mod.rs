pub mod promo_matcher;

pub use promo_matcher::{ExhaustedMatcher, EXHAUSTED_MARKER};
