//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `mongo` (default): Enables MongoDB test infrastructure
//! - `all`: Enables all database test infrastructure
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestMongo, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let key = builder.key("product", "main");
//!     let object_id = builder.object_id_hex();
//! }
//! ```
//!
//! Tests that start containers need Docker; mark them `#[ignore]` so the
//! default `cargo test` run stays hermetic.

// Conditionally compile database modules based on features
#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_get_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic 24-character hex string, valid as a MongoDB ObjectId
    pub fn object_id_hex(&self) -> String {
        format!("{:016x}{:08x}", self.seed, self.seed as u32)
    }

    /// Generate a unique string key for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let key = builder.key("product", "main");
    /// // Returns: "test-product-12345-main"
    /// ```
    pub fn key(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `prefix` is a leading slice of `all`
    pub fn assert_prefix<T: PartialEq + std::fmt::Debug>(prefix: &[T], all: &[T], context: &str) {
        assert!(
            prefix.len() <= all.len() && prefix == &all[..prefix.len()],
            "{}: {:?} is not a prefix of {:?}",
            context,
            prefix,
            all
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.object_id_hex(), builder2.object_id_hex());
        assert_eq!(
            builder1.key("product", "test"),
            builder2.key("product", "test")
        );
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.object_id_hex(), builder2.object_id_hex());
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.object_id_hex(), builder2.object_id_hex());
    }

    #[test]
    fn test_object_id_hex_shape() {
        let hex = TestDataBuilder::new(7).object_id_hex();
        assert_eq!(hex.len(), 24);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_assert_prefix() {
        assertions::assert_prefix(&[1, 2], &[1, 2, 3], "leading");
        assertions::assert_prefix::<i32>(&[], &[1], "empty");
    }

    #[test]
    #[should_panic]
    fn test_assert_prefix_rejects_non_prefix() {
        assertions::assert_prefix(&[2], &[1, 2], "shifted");
    }
}
