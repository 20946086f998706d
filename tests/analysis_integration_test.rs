//! End-to-end classification through the public library API.

use indoc::indoc;
use pretty_assertions::assert_eq;
use tautmap::{analyze_batch, analyze_file, verdict, ReportStatus, TestStyle, Verdict};

#[test]
fn test_block_calling_imported_function_is_not_tautological() {
    let text = indoc! {r#"
        import { fn } from "./fn";

        it("runs fn", () => {
          fn();
        });
    "#};
    let result = analyze_file("fn.test.ts", text);

    assert_eq!(result.total_tests, 1);
    assert_eq!(result.tautological_count, 0);
    assert_eq!(result.tautological_percentage, 0.0);
    assert!(result.parse_success);
}

#[test]
fn test_block_asserting_literals_is_tautological() {
    let text = indoc! {r#"
        import { fn } from "./fn";

        it("is true", () => {
          expect(true).toBe(true);
        });
    "#};
    let result = analyze_file("fn.test.ts", text);

    assert_eq!(result.tautological_count, 1);
    assert_eq!(result.tautological_percentage, 100.0);
    assert_eq!(result.test_blocks[0].line_number, 3);
    assert_eq!(result.test_blocks[0].style, TestStyle::It);
}

#[test]
fn test_half_tautological_batch_does_not_block() {
    let result = analyze_batch(&[
        (
            "a.test.ts",
            "import { fn } from './fn';\nit('x', () => { expect(1).toBe(1); });\n",
        ),
        (
            "b.test.ts",
            "import { fn } from './fn';\ntest('y', () => { expect(fn()).toBe(1); });\n",
        ),
    ]);

    assert_eq!(result.summary.total_files, 2);
    assert_eq!(result.summary.total_tests, 2);
    assert_eq!(result.summary.total_tautological, 1);
    assert_eq!(result.summary.overall_percentage, 50.0);
    assert!(!result.summary.exceeds_blocking_threshold);
    assert_eq!(verdict(&result), Verdict::Warning);
    assert_eq!(ReportStatus::from_result(&result), ReportStatus::Warn);
}

#[test]
fn test_test_framework_imports_do_not_count_as_production() {
    let text = indoc! {r#"
        import { describe, it, expect, vi } from "vitest";
        import { render } from "@testing-library/react";
        import data from "../__fixtures__/data.json";

        describe("suite", () => {
          it("mocks everything", () => {
            const spy = vi.fn();
            render(null);
            expect(data).toBeDefined();
            expect(spy).not.toHaveBeenCalled();
          });
        });
    "#};
    let result = analyze_file("suite.test.tsx", text);

    assert!(result.imported_symbols.is_empty());
    assert_eq!(result.tautological_count, 1);
}

#[test]
fn test_nested_template_literals_do_not_hide_later_tests() {
    let text = indoc! {r#"
        import { format } from "./format";

        const label = `outer ${`inner ${format(1)} it("fake", () => {})`} tail`;

        it("formats", () => {
          expect(format(2)).toBe("2");
        });
    "#};
    let result = analyze_file("format.test.ts", text);

    assert_eq!(result.total_tests, 1);
    assert_eq!(result.test_blocks[0].description, "formats");
    assert_eq!(result.test_blocks[0].line_number, 5);
    assert_eq!(result.tautological_count, 0);
}

#[test]
fn test_calls_in_strings_and_comments_are_ignored() {
    let text = indoc! {r#"
        import { parse } from "./parse";

        // it("commented out", () => { parse(); });
        const sample = "test('inside a string', () => {})";
        /* test("block comment", () => {}); */

        test("real", () => {
          expect(parse("1")).toEqual(1);
        });
    "#};
    let result = analyze_file("parse.test.ts", text);

    assert_eq!(result.total_tests, 1);
    assert_eq!(result.test_blocks[0].description, "real");
    assert_eq!(result.test_blocks[0].style, TestStyle::Test);
    assert_eq!(result.tautological_count, 0);
}

#[test]
fn test_stray_import_brace_in_string_keeps_real_import() {
    let text = indoc! {r#"
        const snippet = 'import {';
        import { fn } from './fn';
        it('a', () => { fn(); });
    "#};
    let result = analyze_file("fn.test.ts", text);

    assert_eq!(result.imported_symbols.len(), 1);
    assert_eq!(result.imported_symbols[0].name, "fn");
    assert_eq!(result.tautological_count, 0);
}

#[test]
fn test_stray_import_brace_in_comment_keeps_real_import() {
    let text = indoc! {r#"
        // usage: import {
        import { fn } from './fn';
        it('a', () => { fn(); });
    "#};
    let result = analyze_file("fn.test.ts", text);

    assert_eq!(result.imported_symbols.len(), 1);
    assert_eq!(result.tautological_count, 0);
}

#[test]
fn test_identifier_prefix_is_not_a_reference() {
    let text = indoc! {r#"
        import { sum } from "./sum";

        it("uses a lookalike", () => {
          const summary = 3;
          expect(summary).toBe(3);
        });
    "#};
    let result = analyze_file("sum.test.ts", text);

    assert_eq!(result.tautological_count, 1);
}

#[test]
fn test_namespace_and_default_imports_are_references() {
    let text = indoc! {r#"
        import api from "../src/api";
        import * as utils from "../lib/utils";

        it("default", () => { api.get(); });
        it("namespace", () => { utils.pad("a"); });
        it("neither", () => { expect(1).toBe(1); });
    "#};
    let result = analyze_file("api.test.ts", text);

    assert_eq!(result.total_tests, 3);
    assert_eq!(result.tautological_count, 1);
    assert_eq!(result.test_blocks[2].description, "neither");
}

#[test]
fn test_empty_batch_is_skipped_without_verdict() {
    let result = analyze_batch::<&str, &str>(&[]);

    assert_eq!(result.summary.total_tests, 0);
    assert_eq!(result.summary.overall_percentage, 0.0);
    assert_eq!(verdict(&result), Verdict::None);
    assert_eq!(ReportStatus::from_result(&result), ReportStatus::Skip);
}
