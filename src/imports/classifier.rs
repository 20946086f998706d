//! Classification of import specifiers as production source or not.
//!
//! Only relative specifiers (`./`, `../`) can count as production code.
//! Test frameworks, mock/fixture paths and platform built-ins are rejected
//! first; bare package imports are rejected by default so third-party code
//! never earns a test "production reference" credit.

/// Test runners, assertion and mocking libraries. A specifier matches when it
/// equals an entry or continues it with `/`. Entries ending in `/` are scope
/// prefixes and match anything below them. Case-sensitive.
const TEST_FRAMEWORK_PACKAGES: &[&str] = &[
    "vitest",
    "@vitest/",
    "jest",
    "@jest/",
    "@testing-library/",
    "mocha",
    "chai",
    "chai-as-promised",
    "sinon",
    "sinon-chai",
    "jasmine",
    "ava",
    "tap",
    "uvu",
    "supertest",
    "nock",
    "msw",
    "playwright",
    "@playwright/test",
    "cypress",
    "expect",
    "assert",
];

/// Case-insensitive substrings marking mock or fixture modules.
const MOCK_PATH_MARKERS: &[&str] = &[
    "mock",
    "fixture",
    "stub",
    "fake",
    "__mocks__",
    "__fixtures__",
    "test-util",
    "test-helper",
];

/// Scheme prefixes of platform built-in modules.
const BUILTIN_PREFIXES: &[&str] = &["node:", "bun:", "deno:"];

/// True iff `path` denotes project source code.
pub fn is_source_module(path: &str) -> bool {
    if is_test_framework(path) || is_mock_path(path) || is_builtin(path) {
        return false;
    }
    is_relative(path)
}

fn is_test_framework(path: &str) -> bool {
    TEST_FRAMEWORK_PACKAGES.iter().any(|package| {
        if package.ends_with('/') {
            path.starts_with(package)
        } else {
            path == *package
                || path
                    .strip_prefix(package)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    })
}

fn is_mock_path(path: &str) -> bool {
    let lowered = path.to_lowercase();
    MOCK_PATH_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

fn is_builtin(path: &str) -> bool {
    BUILTIN_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

fn is_relative(path: &str) -> bool {
    path.starts_with("./") || path.starts_with("../")
}
