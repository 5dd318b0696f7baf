//! Sad path tests for error handling and edge cases.
//!
//! Tests unknown keys, missing files, invalid search arguments, and the
//! skip-and-continue policy for a partially broken corpus.

mod common;

use common::{full_corpus, TestEnv};
use standards_mcp::error::{RegistryError, SearchError, ServerError};
use standards_mcp::registry::Namespace;
use standards_mcp::tools::*;

// ============================================================================
// Unknown Key Tests
// ============================================================================

#[test]
fn unknown_core_key_enumerates_valid_keys() {
    let env = full_corpus();

    let err = execute_fetch(
        &env.registry,
        Namespace::Core,
        FetchInput {
            key: "does-not-exist".to_string(),
        },
    )
    .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("does-not-exist"));
    // The enumeration is part of the contract: callers self-correct from it.
    assert!(msg.contains("terminal-standards"));
    assert!(msg.contains("commit-standards"));
    assert!(msg.contains("agent-rules"));
}

#[test]
fn unknown_key_errors_are_namespace_scoped() {
    let env = full_corpus();

    // A valid workflow key is still unknown to the core namespace.
    let err = execute_fetch(
        &env.registry,
        Namespace::Core,
        FetchInput {
            key: "session-management".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ServerError::Registry(RegistryError::UnknownKey { .. })
    ));
    assert!(err.to_string().contains("core standard"));
}

#[test]
fn unknown_keys_fail_in_every_namespace() {
    let env = full_corpus();

    for namespace in Namespace::ALL {
        let err = execute_fetch(
            &env.registry,
            namespace,
            FetchInput {
                key: "nope".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ServerError::Registry(RegistryError::UnknownKey { .. })
        ));
    }
}

// ============================================================================
// Missing File Tests
// ============================================================================

#[test]
fn registered_key_with_missing_file_names_the_path() {
    let env = TestEnv::new(); // no files written

    let err = execute_fetch(
        &env.registry,
        Namespace::Integration,
        FetchInput {
            key: "aider".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ServerError::Registry(RegistryError::FileNotFound { .. })
    ));
    assert!(err.to_string().contains("integrations/aider.md"));
}

#[test]
fn missing_file_is_distinct_from_unknown_key() {
    let env = TestEnv::new();

    let missing = execute_fetch(
        &env.registry,
        Namespace::Core,
        FetchInput {
            key: "agent-rules".to_string(),
        },
    )
    .unwrap_err();
    let unknown = execute_fetch(
        &env.registry,
        Namespace::Core,
        FetchInput {
            key: "agent-rulez".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(
        missing,
        ServerError::Registry(RegistryError::FileNotFound { .. })
    ));
    assert!(matches!(
        unknown,
        ServerError::Registry(RegistryError::UnknownKey { .. })
    ));
}

// ============================================================================
// Invalid Search Argument Tests
// ============================================================================

#[test]
fn empty_keyword_is_rejected_not_matched() {
    let env = full_corpus();

    for keyword in ["", "   ", "\t\n"] {
        let err = execute_search(
            &env.engine,
            SearchInput {
                keyword: keyword.to_string(),
                max_results: 10,
                context_lines: 2,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ServerError::Search(SearchError::EmptyQuery)
        ));
    }
}

#[test]
fn no_match_is_a_success_not_an_error() {
    let env = full_corpus();

    let result = execute_search(
        &env.engine,
        SearchInput {
            keyword: "zzz_no_such_token_zzz".to_string(),
            max_results: 10,
            context_lines: 2,
        },
    );

    // Distinguishable from the empty-keyword case above: Ok, with an
    // explicit no-results payload.
    let out = result.unwrap();
    assert!(render_report(&out).contains("No results found"));
}

// ============================================================================
// Partially Broken Corpus Tests
// ============================================================================

#[test]
fn search_survives_a_deleted_document() {
    let env = TestEnv::new();
    env.write_key(Namespace::Core, "terminal-standards", "commit cleanly\n");
    env.write_key(Namespace::Core, "commit-standards", "commit messages\n");
    env.write_key(Namespace::Core, "agent-rules", "commit etiquette\n");

    // Delete the middle document after registration.
    env.delete_key(Namespace::Core, "commit-standards");

    let out = execute_search(
        &env.engine,
        SearchInput {
            keyword: "commit".to_string(),
            max_results: 10,
            context_lines: 2,
        },
    )
    .unwrap();

    let paths: Vec<_> = out.matches.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "standards/terminal-standards.md",
            "standards/agent-rules.md"
        ]
    );
}

#[test]
fn search_on_empty_root_returns_no_results() {
    let env = TestEnv::new();

    let out = execute_search(
        &env.engine,
        SearchInput {
            keyword: "anything".to_string(),
            max_results: 10,
            context_lines: 2,
        },
    )
    .unwrap();

    assert!(out.matches.is_empty());
}
