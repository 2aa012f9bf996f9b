//! `sort`：把比较器应用到一列条目上（key 提取 + 稳定排序 + 可选倒序）。
//!
//! 约定：
//! - key 配置在排序前解析一次，比较阶段不再取 key
//! - 稳定排序：key 相等的条目保持输入顺序
//! - `reverse` 是对升序结果的整体翻转，不是取反比较器
//! - 任一条目取 key 失败即中止，不产生部分结果

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::compare::compare;

/// 记录按字段排序时的习惯字段名。
pub const PINYIN_FIELD: &str = "pinyin";

/// 取 key 抽象：排序器不关心条目是字符串、map 还是自定义结构。
///
/// 两个方法都默认返回 `None`：
/// - 字符串类条目实现 `whole`
/// - 记录类条目实现 `field`
/// - 只配合自定义提取函数使用的类型写 `impl KeySource for T {}` 即可
pub trait KeySource {
    /// 条目本身作为 key。
    fn whole(&self) -> Option<&str> {
        None
    }

    /// 条目的命名字段作为 key。
    fn field(&self, _name: &str) -> Option<&str> {
        None
    }
}

impl KeySource for String {
    fn whole(&self) -> Option<&str> {
        Some(self)
    }
}

impl KeySource for &str {
    fn whole(&self) -> Option<&str> {
        Some(*self)
    }
}

impl KeySource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl KeySource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// key 配置（排序前解析一次）。
pub enum KeySpec<'a, T> {
    /// 条目本身就是拼音串
    Whole,
    /// 取命名字段（记录类条目；习惯字段名见 [`PINYIN_FIELD`]）
    Field(&'a str),
    /// 调用方自备的提取函数；返回 `None` 视为该条目取 key 失败
    Extract(&'a dyn Fn(&T) -> Option<String>),
}

impl<T> Default for KeySpec<'_, T> {
    fn default() -> Self {
        KeySpec::Whole
    }
}

impl<T: KeySource> KeySpec<'_, T> {
    fn resolve(&self, item: &T) -> Result<String, ExtractionKind> {
        match self {
            KeySpec::Whole => item
                .whole()
                .map(str::to_owned)
                .ok_or(ExtractionKind::NotText),
            KeySpec::Field(name) => item
                .field(name)
                .map(str::to_owned)
                .ok_or_else(|| ExtractionKind::MissingField((*name).to_owned())),
            KeySpec::Extract(f) => f(item).ok_or(ExtractionKind::ExtractorFailed),
        }
    }
}

/// 取 key 失败的原因。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionKind {
    /// `Whole` 配置要求条目可直接作为拼音串
    #[error("条目不可直接作为拼音串")]
    NotText,
    /// 记录缺少命名字段
    #[error("缺少字段 `{0}`")]
    MissingField(String),
    /// 自定义提取函数未返回 key
    #[error("提取函数未返回 key")]
    ExtractorFailed,
}

/// 取 key 失败（整次排序中止）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("第 {index} 个条目取 key 失败：{kind}")]
pub struct ExtractionError {
    /// 出错条目在输入序列中的下标（0 起）
    pub index: usize,
    /// 失败原因
    pub kind: ExtractionKind,
}

/// 按拼音字母序排序，返回新序列。
///
/// - `key`：见 [`KeySpec`]，默认 `Whole`
/// - `reverse`：对升序结果整体翻转；key 相等的条目翻转后仍整体相邻
pub fn sort<T, I>(items: I, key: KeySpec<'_, T>, reverse: bool) -> Result<Vec<T>, ExtractionError>
where
    T: KeySource,
    I: IntoIterator<Item = T>,
{
    // 先解析全部 key；有失败就在排序开始前返回
    let mut decorated: Vec<(String, T)> = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match key.resolve(&item) {
            Ok(k) => decorated.push((k, item)),
            Err(kind) => return Err(ExtractionError { index, kind }),
        }
    }

    // Vec::sort_by 是稳定排序；比较只看预解析的 key
    decorated.sort_by(|x, y| compare(&x.0, &y.0));

    let mut out: Vec<T> = decorated.into_iter().map(|(_, item)| item).collect();
    if reverse {
        out.reverse();
    }
    Ok(out)
}
