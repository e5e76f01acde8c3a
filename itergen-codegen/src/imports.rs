//! Import aggregation for the generated file.

use std::collections::BTreeSet;

use crate::{GenerationPlan, TypeDescriptor};

/// Package providing `errors.New`, imported by every generated file.
pub const ERRORS_PACKAGE: &str = "errors";
/// Package providing `sync.WaitGroup`, needed by channel fan-in.
pub const SYNC_PACKAGE: &str = "sync";

/// Deduplicated, lexicographically ordered set of import paths.
///
/// # Example
///
/// ```
/// use itergen_codegen::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.add("os");
/// imports.add("os");
/// imports.add("");
///
/// assert_eq!(imports.to_vec(), vec!["errors", "os"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSet {
    packages: BTreeSet<String>,
}

impl ImportSet {
    /// Create a set holding only the errors package.
    pub fn new() -> Self {
        let mut packages = BTreeSet::new();
        packages.insert(ERRORS_PACKAGE.to_string());
        Self { packages }
    }

    /// Collect every package referenced by the rendered sections.
    ///
    /// `secondaries` are the map result and reduce accumulator descriptors.
    pub fn aggregate<'a>(
        primary: &TypeDescriptor,
        secondaries: impl IntoIterator<Item = &'a TypeDescriptor>,
        plan: &GenerationPlan,
    ) -> Self {
        let mut imports = Self::new();
        imports.add(&primary.package);
        for descriptor in secondaries {
            imports.add(&descriptor.package);
        }
        if plan.needs_sync() {
            imports.add(SYNC_PACKAGE);
        }
        imports
    }

    /// Add an import path. Empty paths are ignored.
    pub fn add(&mut self, package: &str) {
        if !package.is_empty() {
            self.packages.insert(package.to_string());
        }
    }

    /// Check if a package is imported.
    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains(package)
    }

    /// Iterate over import paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<&str> {
        self.iter().collect()
    }
}

impl Default for ImportSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationRequest;

    fn descriptor(raw: &str) -> TypeDescriptor {
        TypeDescriptor::parse(raw).unwrap()
    }

    fn plan_for(td: &TypeDescriptor, request: GenerationRequest) -> GenerationPlan {
        GenerationPlan::resolve(td, &request).unwrap()
    }

    #[test]
    fn test_always_contains_errors() {
        let td = descriptor("int");
        let plan = plan_for(&td, GenerationRequest::default());
        let imports = ImportSet::aggregate(&td, [], &plan);
        assert_eq!(imports.to_vec(), vec!["errors"]);
    }

    #[test]
    fn test_primary_package() {
        let td = descriptor("os:*os.File");
        let plan = plan_for(&td, GenerationRequest::default());
        let imports = ImportSet::aggregate(&td, [], &plan);
        assert_eq!(imports.to_vec(), vec!["errors", "os"]);
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let primary = descriptor("os:*os.File");
        let secondaries = [
            descriptor("os:os.FileMode"),
            descriptor("github.com/foo/bar:bar.Baz"),
            descriptor("foo:foo.Foo"),
            descriptor("int"),
        ];
        let plan = plan_for(&primary, GenerationRequest::default());

        let imports = ImportSet::aggregate(&primary, &secondaries, &plan);
        assert_eq!(
            imports.to_vec(),
            vec!["errors", "foo", "github.com/foo/bar", "os"]
        );

        // Input order does not matter
        let reversed: Vec<_> = secondaries.iter().rev().collect();
        assert_eq!(ImportSet::aggregate(&primary, reversed, &plan), imports);
    }

    #[test]
    fn test_sync_only_for_channel_concat() {
        let channel = descriptor("chan int");
        let concat = GenerationRequest {
            concat: true,
            ..Default::default()
        };

        let plan = plan_for(&channel, concat.clone());
        assert!(ImportSet::aggregate(&channel, [], &plan).contains(SYNC_PACKAGE));

        let plan = plan_for(&channel, GenerationRequest::default());
        assert!(!ImportSet::aggregate(&channel, [], &plan).contains(SYNC_PACKAGE));

        let plain = descriptor("int");
        let plan = plan_for(&plain, concat);
        assert!(!ImportSet::aggregate(&plain, [], &plan).contains(SYNC_PACKAGE));
    }

    #[test]
    fn test_add_ignores_empty() {
        let mut imports = ImportSet::new();
        imports.add("");
        assert_eq!(imports.to_vec(), vec![ERRORS_PACKAGE]);
    }
}
