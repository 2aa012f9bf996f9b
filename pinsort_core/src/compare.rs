//! `compare`：两遍拼音字母序比较。
//!
//! 第一遍对两串做大小写折叠（保留声调）后按权重逐位比较；
//! 完全相同时第二遍用原串权重决胜，小写在大写前。
//! 大小写永远只是最后的决胜条件，不会盖过字母/声调差异。

use std::cmp::Ordering;

use crate::collate::rank;

/// 拼音字母序比较。
///
/// 对任意字符串全定义，无错误路径；可直接作为 `sort_by`
/// 等通用排序设施的比较器。共同前缀全等时短串在前。
pub fn compare(a: &str, b: &str) -> Ordering {
    folded_ranks(a)
        .cmp(folded_ranks(b))
        .then_with(|| original_ranks(a).cmp(original_ranks(b)))
}

/// 折叠只动大小写；声调字母的小写映射仍带声调。
fn folded_ranks(s: &str) -> impl Iterator<Item = u32> + '_ {
    s.chars().flat_map(char::to_lowercase).map(rank)
}

fn original_ranks(s: &str) -> impl Iterator<Item = u32> + '_ {
    s.chars().map(rank)
}
