//! 端到端语料：声调、大小写、u/ü、分隔符、前缀/长度、数字与非拼音字符。

use std::collections::BTreeMap;

use pinsort_core::sort::{KeySpec, PINYIN_FIELD, sort};

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[test]
fn corpus_sorts_into_abc_order() {
    let input = owned(&[
        "bàozi",
        "bāozi",
        "Bǎozi",
        "bǎozi",
        "baozi",
        "báozi",
        "BǍOZI",
        "lü",
        "Lǚ",
        "lù",
        "Lù",
        "bǎo-an",
        "bǎo'an",
        "bǎo",
        "bǎo an",
        "bǎozhàngjiāndū",
        "bǎozhàng",
        "bǎozhǎng",
        "bǎoyù",
        "Bǎoyǔ",
        "nǚ",
        "nǜrén",
        "bǎo©",
        "bǎo#",
        "0a",
        "àn",
    ]);
    let expected = owned(&[
        "0a",
        "àn",
        "baozi",
        "bāozi",
        "báozi",
        "bǎo",
        "Bǎoyǔ",
        "bǎoyù",
        "bǎozhǎng",
        "bǎozhàng",
        "bǎozhàngjiāndū",
        "bǎozi",
        "Bǎozi",
        "BǍOZI",
        "bǎo'an",
        "bǎo-an",
        "bǎo an",
        "bǎo#",
        "bǎo©",
        "bàozi",
        "lù",
        "Lù",
        "lü",
        "Lǚ",
        "nǚ",
        "nǜrén",
    ]);

    let sorted = sort(input, KeySpec::Whole, false).unwrap();
    assert_eq!(sorted, expected);
}

#[test]
fn fold_decides_before_case_does() {
    // ǔ < ù 在第一遍折叠比较就分出先后；大小写只决胜折叠后全等的一对
    let input = owned(&["bǎoyù", "Bǎoyù", "Bǎoyǔ", "bǎozhàng"]);
    let sorted = sort(input, KeySpec::Whole, false).unwrap();
    assert_eq!(sorted, owned(&["Bǎoyǔ", "bǎoyù", "Bǎoyù", "bǎozhàng"]));
}

#[test]
fn reverse_is_a_whole_sequence_flip() {
    let input = owned(&["bǎozhàng", "Bǎoyǔ", "bǎoyù"]);
    let ascending = sort(input.clone(), KeySpec::Whole, false).unwrap();
    let descending = sort(input, KeySpec::Whole, true).unwrap();

    assert_eq!(ascending, owned(&["Bǎoyǔ", "bǎoyù", "bǎozhàng"]));
    let mut flipped = ascending;
    flipped.reverse();
    assert_eq!(descending, flipped);
}

#[test]
fn records_sort_by_pinyin_field() {
    let entry = |pinyin: &str, meaning: &str| {
        BTreeMap::from([
            (PINYIN_FIELD.to_string(), pinyin.to_string()),
            ("meaning".to_string(), meaning.to_string()),
        ])
    };
    let input = vec![
        entry("bǎozhàng", "guarantee"),
        entry("Bǎoyǔ", "Bao Yu (name)"),
        entry("bǎoyù", "jade"),
    ];

    let sorted = sort(input, KeySpec::Field(PINYIN_FIELD), false).unwrap();
    let order: Vec<&str> = sorted.iter().map(|e| e[PINYIN_FIELD].as_str()).collect();
    assert_eq!(order, ["Bǎoyǔ", "bǎoyù", "bǎozhàng"]);
}
