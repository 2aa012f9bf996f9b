//! `collate`：固定排序字母表与单字符权重。
//!
//! 规则（表内位置即权重）：
//! - 数字 `0`-`9` 最前
//! - 每个基础字母先小写一族、再大写一族；元音 `a e i o u ü`
//!   各带五个声调位，次序为 无调、ā、á、ǎ、à
//! - `v`/`V` 排在 `u` 族之后、`ü` 族之前
//! - 分隔符 `'` `-` 空格 排在所有字母之后
//! - 表外字符按码点加偏移，恒大于一切表内字符

use std::{collections::HashMap, sync::LazyLock};

/// 排序字母表：字符在串中的位置即其权重（0 起）。
const ALPHABET: &str = concat!(
    "0123456789",
    "aāáǎàAĀÁǍÀ",
    "bBcCdD",
    "eēéěèEĒÉĚÈ",
    "fFgGhH",
    "iīíǐìIĪÍǏÌ",
    "jJkKlLmMnN",
    "oōóǒòOŌÓǑÒ",
    "pPqQrRsStT",
    "uūúǔùUŪÚǓÙ",
    "vV",
    "üǖǘǚǜÜǕǗǙǛ",
    "wWxXyYzZ",
    "'- ",
);

struct Collation {
    weights: HashMap<char, u32>,
    /// 表外字符的权重偏移（= 表长）
    offset: u32,
}

/// 进程级一次构建，此后只读共享。
static COLLATION: LazyLock<Collation> = LazyLock::new(|| {
    let weights: HashMap<char, u32> = ALPHABET
        .chars()
        .enumerate()
        .map(|(i, c)| (c, i as u32))
        .collect();
    let offset = weights.len() as u32;
    Collation { weights, offset }
});

/// 单字符权重：表内取表位，表外按码点加偏移。
///
/// 对任意 `char` 全定义；表外字符之间按原始码点相对有序。
pub fn rank(c: char) -> u32 {
    let table = &*COLLATION;
    match table.weights.get(&c) {
        Some(&w) => w,
        None => c as u32 + table.offset,
    }
}
