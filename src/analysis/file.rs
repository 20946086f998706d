//! Per-file tautology analysis.

use crate::analysis::references::references_production;
use crate::core::{FileResult, ImportedSymbol, Result, TestBlock};
use crate::extraction::extract_test_blocks;
use crate::imports::extract_imports;

/// Analyze one test file. Never fails: an extraction error is recorded on
/// the result as `parse_success = false` and contributes no tests.
pub fn analyze_file(path: &str, text: &str) -> FileResult {
    match classify_blocks(text) {
        Ok((blocks, imports)) => {
            let result = FileResult::from_blocks(path, blocks, imports);
            log::debug!(
                "{}: {} tests, {} tautological, {} production imports",
                path,
                result.total_tests,
                result.tautological_count,
                result.imported_symbols.len()
            );
            result
        }
        Err(e) => {
            log::warn!("Failed to analyze {}: {}", path, e);
            FileResult::parse_failure(path, e.to_string())
        }
    }
}

fn classify_blocks(text: &str) -> Result<(Vec<TestBlock>, Vec<ImportedSymbol>)> {
    let imports = extract_imports(text);
    let blocks = extract_test_blocks(text)?
        .into_iter()
        .map(|raw| TestBlock {
            is_tautological: !references_production(raw.body, &imports),
            description: raw.description,
            line_number: raw.line_number,
            style: raw.style,
        })
        .collect();

    Ok((blocks, imports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TestStyle;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_production_call_is_not_tautological() {
        let text = indoc! {r#"
            import { fn } from "./fn";
            it('calls fn', () => { fn(); });
        "#};
        let result = analyze_file("fn.test.ts", text);
        assert_eq!(result.total_tests, 1);
        assert_eq!(result.tautological_count, 0);
        assert_eq!(result.tautological_percentage, 0.0);
        assert!(result.parse_success);
    }

    #[test]
    fn test_self_assertion_is_tautological() {
        let text = indoc! {r#"
            import { fn } from "./fn";
            it('always passes', () => { expect(true).toBe(true); });
        "#};
        let result = analyze_file("fn.test.ts", text);
        assert_eq!(result.tautological_count, 1);
        assert_eq!(result.tautological_percentage, 100.0);
        assert_eq!(
            result.test_blocks,
            vec![TestBlock {
                description: "always passes".to_string(),
                line_number: 2,
                style: TestStyle::It,
                is_tautological: true,
            }]
        );
    }

    #[test]
    fn test_without_source_imports_every_block_is_tautological() {
        let text = indoc! {r#"
            import { describe, it, expect } from 'vitest';
            import lodash from 'lodash';
            describe('math', () => {
              it('adds', () => { expect(lodash.add(1, 2)).toBe(3); });
              test('subtracts', () => { expect(3 - 1).toBe(2); });
            });
        "#};
        let result = analyze_file("math.test.ts", text);
        assert!(result.imported_symbols.is_empty());
        assert_eq!(result.total_tests, 2);
        assert_eq!(result.tautological_count, 2);
    }

    #[test]
    fn test_mixed_file_counts() {
        let text = indoc! {r#"
            import * as cart from '../src/cart';
            import { makeItem } from './fixtures/items';

            describe('cart', () => {
              it('adds items', () => {
                const c = cart.create();
                c.add(makeItem());
                expect(c.size).toBe(1);
              });

              it('mocks everything', () => {
                const item = makeItem();
                expect(item).toEqual(item);
              });
            });
        "#};
        let result = analyze_file("cart.test.ts", text);
        assert_eq!(result.total_tests, 2);
        assert_eq!(result.tautological_count, 1);
        assert_eq!(result.tautological_percentage, 50.0);
        assert!(!result.test_blocks[0].is_tautological);
        assert!(result.test_blocks[1].is_tautological);
        assert_eq!(result.test_blocks[1].line_number, 11);
    }

    #[test]
    fn test_empty_file() {
        let result = analyze_file("empty.test.ts", "");
        assert_eq!(result.total_tests, 0);
        assert_eq!(result.tautological_percentage, 0.0);
        assert!(result.parse_success);
    }

    #[test]
    fn test_is_idempotent() {
        let text = "import a from './a';\nit('x', () => { a(); });\nit('y', () => {});";
        assert_eq!(analyze_file("p", text), analyze_file("p", text));
    }
}
