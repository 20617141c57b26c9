//! Integration tests for the memoizing selector compiler.

use std::sync::Arc;

use ladle_html::parse_document;
use ladle_select::{
    CacheStats, DEFAULT_CACHE_CAPACITY, LruCache, SelectorCompiler, compile, global, select,
};

#[test]
fn test_second_compile_is_a_hit() {
    let compiler = SelectorCompiler::new(8);
    let first = compiler.compile("div > p");
    let second = compiler.compile("div > p");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(
        compiler.stats(),
        CacheStats {
            hits: 1,
            misses: 1,
            entries: 1,
            capacity: 8,
        }
    );
}

#[test]
fn test_keys_are_exact_strings() {
    let compiler = SelectorCompiler::new(8);
    let _ = compiler.compile("p");
    let _ = compiler.compile(" p");
    let _ = compiler.compile("P");
    assert_eq!(compiler.stats().misses, 3);
    assert_eq!(compiler.stats().entries, 3);
}

#[test]
fn test_least_recently_used_is_evicted() {
    let compiler = SelectorCompiler::new(2);
    let _ = compiler.compile("a");
    let _ = compiler.compile("b");
    let _ = compiler.compile("a");
    let _ = compiler.compile("c");

    assert_eq!(compiler.stats().entries, 2);
    let _ = compiler.compile("a");
    assert_eq!(compiler.stats().hits, 2);
    let _ = compiler.compile("b");
    assert_eq!(compiler.stats().misses, 4);
}

#[test]
fn test_zero_capacity_is_clamped() {
    let compiler = SelectorCompiler::new(0);
    assert_eq!(compiler.capacity(), 1);
    let _ = compiler.compile("a");
    let _ = compiler.compile("b");
    assert_eq!(compiler.stats().entries, 1);
}

#[test]
fn test_clear_resets_entries_and_counters() {
    let compiler = SelectorCompiler::new(4);
    let _ = compiler.compile("a");
    let _ = compiler.compile("a");
    compiler.clear();
    assert_eq!(
        compiler.stats(),
        CacheStats {
            hits: 0,
            misses: 0,
            entries: 0,
            capacity: 4,
        }
    );
}

#[test]
fn test_default_compiler_capacity() {
    assert_eq!(SelectorCompiler::default().capacity(), DEFAULT_CACHE_CAPACITY);
}

#[test]
fn test_global_compile_shares_results() {
    let selector = "section.global-cache-test > h2";
    let first = compile(selector);
    let second = compile(selector);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_nested_arguments_use_the_owning_compiler() {
    let tree = parse_document(r#"<div><p class="own-a">x</p><p>y</p></div>"#);
    let paragraphs = select(&tree, tree.root(), "p", None);
    let div = select(&tree, tree.root(), "div", None)[0];
    let own = SelectorCompiler::new(8);

    assert!(own.matches(&tree, paragraphs[1], "p:not(.only-in-own-compiler)"));
    assert!(!own.matches(&tree, paragraphs[0], "p:is(.only-in-own-is)"));
    assert!(own.matches(&tree, div, "div:has(> .own-a)"));

    assert!(own.contains(".only-in-own-compiler"));
    assert!(own.contains(".only-in-own-is"));
    assert!(own.contains(".own-a"));
    assert_eq!(own.stats().entries, 6);
    assert!(!global().contains(".only-in-own-compiler"));
    assert!(!global().contains(".only-in-own-is"));
    assert!(!global().contains(".own-a"));
}

#[test]
fn test_lru_cache_directly() {
    let mut cache = LruCache::new(2);
    assert_eq!(cache.insert("a", 1), None);
    assert_eq!(cache.insert("b", 2), None);
    assert_eq!(cache.get(&"a"), Some(&1));

    assert!(cache.contains_key(&"b"));
    assert_eq!(cache.insert("c", 3), Some(("b", 2)));
    assert!(!cache.contains_key(&"b"));
    assert_eq!(cache.insert("a", 10), None);
    assert_eq!(cache.get(&"a"), Some(&10));
    assert_eq!(cache.len(), 2);
}
