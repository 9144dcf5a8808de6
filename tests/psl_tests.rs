//! Integration tests for suffix list parsing, loaders and the suffix trie

use std::fs;
use std::path::PathBuf;

use fasttld::trie::TrieNode;
use fasttld::{
    ExtractOptions, ExtractorOptions, FilePslLoader, MemoryPslLoader, PslErrorKind, PslLoader,
    SuffixList, SuffixTrie, TldExtractor,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/public_suffix_list.dat")
}

fn fixture_list() -> SuffixList {
    SuffixList::from_file(fixture_path()).unwrap()
}

fn fixture_trie(exclude_private: bool) -> SuffixTrie {
    SuffixTrie::new(fixture_list().rules(exclude_private))
}

fn contains(rules: &[String], rule: &str) -> bool {
    rules.iter().any(|r| r == rule)
}

#[test]
fn test_fixture_sections() {
    let list = fixture_list();
    assert_eq!(list.public().len(), 52);
    assert_eq!(list.private().len(), 11);
    assert_eq!(list.len(), 63);

    assert!(contains(list.public(), "k12.ak.us"));
    assert!(contains(list.public(), "!www.ck"));
    assert!(contains(list.private(), "*.0emm.com"));
    assert!(!contains(list.public(), "blogspot.com"));
    assert!(!contains(list.private(), "com"));
}

#[test]
fn test_unicode_rules_get_punycode_variants() {
    let list = fixture_list();
    for (unicode, ascii) in [
        ("敎育.hk", "xn--lcvr32d.hk"),
        ("обр.срб", "xn--90azh.xn--90a3ac"),
        ("ایران.ir", "xn--mgba3a4f16a.ir"),
        ("香港", "xn--j6w193g"),
        ("新加坡", "xn--yfro4i67o"),
    ] {
        assert!(contains(list.public(), unicode), "missing {unicode}");
        assert!(contains(list.public(), ascii), "missing {ascii}");
    }
}

#[test]
fn test_rules_respect_private_exclusion() {
    let list = fixture_list();
    assert_eq!(list.rules(true).count(), 52);
    assert_eq!(list.rules(false).count(), 63);
    assert!(!list.rules(true).any(|r| r == "github.io"));
    assert!(list.rules(false).any(|r| r == "github.io"));
}

#[test]
fn test_file_loader() {
    let loader = FilePslLoader::new().with_path(fixture_path());
    assert_eq!(loader.path(), Some(fixture_path().as_path()));

    let list = loader.load().unwrap();
    assert_eq!(list.public(), fixture_list().public());
    assert!(loader.refresh().is_ok());

    let err = FilePslLoader::new().load().unwrap_err();
    assert_eq!(err.psl_kind(), Some(PslErrorKind::NotConfigured));

    let err = FilePslLoader::new()
        .with_path("/nonexistent/fasttld.dat")
        .load()
        .unwrap_err();
    assert_eq!(err.psl_kind(), Some(PslErrorKind::FileError));
}

#[test]
fn test_verify_file() {
    assert!(SuffixList::verify_file(fixture_path()).is_ok());

    let dir = std::env::temp_dir().join("fasttld_test_verify");
    let _ = fs::create_dir_all(&dir);
    let path = dir.join("private_only.dat");
    fs::write(
        &path,
        "// ===BEGIN PRIVATE DOMAINS===\nblogspot.com\n// ===END PRIVATE DOMAINS===\n",
    )
    .unwrap();

    let err = SuffixList::verify_file(&path).unwrap_err();
    assert_eq!(err.psl_kind(), Some(PslErrorKind::InvalidData));

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir(&dir);
}

#[test]
fn test_trie_structure() {
    let trie = fixture_trie(false);

    let cn = trie.node(&["cn"]).unwrap();
    assert!(cn.is_end());
    assert!(matches!(cn.child("com"), Some(TrieNode::Leaf)));
    assert!(matches!(cn.child("gov"), Some(TrieNode::Leaf)));

    let co_uk = trie.node(&["uk", "co"]).unwrap();
    assert!(co_uk.is_end());
    assert!(co_uk.child("blogspot").is_some());
    assert!(co_uk.child("no-ip").is_some());

    let ck = trie.node(&["ck"]).unwrap();
    assert!(!ck.is_end());
    assert!(ck.has_wildcard());
    assert!(ck.is_exception("www"));
    assert!(!ck.is_exception("wwe"));

    assert!(matches!(
        trie.node(&["ir", "xn--mgba3a4f16a"]),
        Some(TrieNode::Leaf)
    ));
    assert!(trie.node(&["com", "0emm"]).unwrap().has_wildcard());
    assert!(trie.contains("公司.香港"));
    assert!(trie.contains("新加坡"));
    assert!(trie.contains("global.prod.fastly.net"));
    assert!(!trie.contains("prod.fastly.net"));
    assert!(!trie.contains("fastly.net"));
}

#[test]
fn test_public_only_trie() {
    let trie = fixture_trie(true);

    assert!(matches!(trie.node(&["io"]), Some(TrieNode::Leaf)));
    assert!(matches!(trie.node(&["biz"]), Some(TrieNode::Leaf)));
    assert!(matches!(trie.node(&["uk", "co"]), Some(TrieNode::Leaf)));
    assert!(trie.node(&["com", "0emm"]).is_none());
    assert!(trie.node(&["net", "fastly"]).is_none());
    assert!(!trie.contains("github.io"));
}

#[test]
fn test_extractor_from_parsed_text() {
    let loader = MemoryPslLoader::from_text(&fs::read_to_string(fixture_path()).unwrap());
    let extractor = TldExtractor::new(&loader, ExtractorOptions::default()).unwrap();

    let res = extractor.extract("https://octocat.github.io/", ExtractOptions::default());
    assert_eq!(res.domain, "octocat");
    assert_eq!(res.suffix, "github.io");
    assert_eq!(res.registrable_domain, "octocat.github.io");
}

#[test]
fn test_update_changes_private_rules() {
    let mut loader = MemoryPslLoader::new();
    loader.add_public("io");
    let extractor = TldExtractor::new(&loader, ExtractorOptions::default()).unwrap();
    assert_eq!(
        extractor
            .extract("octocat.github.io", ExtractOptions::default())
            .registrable_domain,
        "github.io"
    );

    loader.add_private("github.io");
    extractor.update(&loader).unwrap();
    assert_eq!(
        extractor
            .extract("octocat.github.io", ExtractOptions::default())
            .registrable_domain,
        "octocat.github.io"
    );
}
