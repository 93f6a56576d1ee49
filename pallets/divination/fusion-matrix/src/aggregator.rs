//! # 汇总
//!
//! 按层序 1..10、层内按键序遍历全部命中单元：
//! - 分值 ≥ 强项阈值记入 `strength_points`（降序）
//! - 分值 ≤ 警示阈值记入 `caution_points`（升序）
//! - 总分 = round((平均分 − 1) / 9 × 100)，整数运算，四舍五入
//!
//! 排序均为稳定排序，同分保持遍历顺序。

use alloc::{collections::BTreeSet, format, string::String, vec::Vec};
use serde::Serialize;

use crate::interaction::{Interaction, Layer, LayerResult};
use crate::types::Lang;

/// 默认强项阈值
pub const DEFAULT_STRENGTH_THRESHOLD: u8 = 7;
/// 默认警示阈值
pub const DEFAULT_CAUTION_THRESHOLD: u8 = 3;
/// 默认协同条数
pub const DEFAULT_MAX_SYNERGIES: u32 = 5;

/// 引擎参数
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EngineConfig {
    pub strength_threshold: u8,
    pub caution_threshold: u8,
    pub max_synergies: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strength_threshold: DEFAULT_STRENGTH_THRESHOLD,
            caution_threshold: DEFAULT_CAUTION_THRESHOLD,
            max_synergies: DEFAULT_MAX_SYNERGIES,
        }
    }
}

impl EngineConfig {
    /// 阈值须落在 1..=10 且警示阈值低于强项阈值
    pub fn is_valid(&self) -> bool {
        (1..=10).contains(&self.strength_threshold)
            && (1..=10).contains(&self.caution_threshold)
            && self.caution_threshold < self.strength_threshold
    }
}

/// 排名条目
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct RankedMatch {
    pub layer: Layer,
    #[serde(rename = "match")]
    pub match_key: String,
    pub cell: Interaction,
}

/// 汇总
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSummary {
    pub total_score: u8,
    pub strength_points: Vec<RankedMatch>,
    pub caution_points: Vec<RankedMatch>,
    pub top_synergies: Vec<String>,
}

/// 总分（0-100）
pub fn total_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let n = scores.len() as u64;
    let sum: u64 = scores.iter().map(|s| u64::from(*s)).sum();
    // round(100 × (sum − n) / 9n)
    let score = (200 * sum.saturating_sub(n) + 9 * n) / (18 * n);
    score.min(100) as u8
}

/// 协同摘要：按强项顺序取关键词不重复的前 `max` 条，形如 `"[层名] 行 × 列: 关键词"`
pub fn top_synergies(strength_points: &[RankedMatch], max: u32, lang: Lang) -> Vec<String> {
    let mut used = BTreeSet::new();
    strength_points
        .iter()
        .filter(|m| used.insert(m.cell.keyword))
        .take(max as usize)
        .map(|m| format!("[{}] {}: {}", m.layer.title_in(lang), m.cell.pair.render(lang), m.cell.keyword_in(lang)))
        .collect()
}

pub fn summarize(layers: &[(Layer, &LayerResult)], config: &EngineConfig, lang: Lang) -> MatrixSummary {
    let mut scores = Vec::new();
    let mut strength_points = Vec::new();
    let mut caution_points = Vec::new();

    for (layer, result) in layers {
        for (key, cell) in result.iter() {
            scores.push(cell.score);
            let ranked = || RankedMatch { layer: *layer, match_key: key.clone(), cell: cell.clone() };
            if cell.score >= config.strength_threshold {
                strength_points.push(ranked());
            } else if cell.score <= config.caution_threshold {
                caution_points.push(ranked());
            }
        }
    }

    strength_points.sort_by(|a, b| b.cell.score.cmp(&a.cell.score));
    caution_points.sort_by_key(|m| m.cell.score);

    let top_synergies = top_synergies(&strength_points, config.max_synergies, lang);
    let total_score = total_score(&scores);

    log::info!(
        "📊 融合矩阵汇总: {} 个单元，总分 {}，强项 {}，警示 {}",
        scores.len(),
        total_score,
        strength_points.len(),
        caution_points.len()
    );

    MatrixSummary { total_score, strength_points, caution_points, top_synergies }
}
