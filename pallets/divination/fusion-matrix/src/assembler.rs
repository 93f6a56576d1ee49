//! # 结果组装
//!
//! - [`FusionMatrixResult`]：十个具名层结果 + 汇总
//! - [`MatrixReport`]：计数、前三强项/警示、前三协同，仅由结果派生
//! - [`MatrixCatalog`]：各层单元数与等级表，由评分表实时统计

use alloc::{string::String, vec::Vec};
use serde::Serialize;

use crate::aggregator::{summarize, EngineConfig, MatrixSummary, RankedMatch};
use crate::input::MatrixInput;
use crate::interaction::{InteractionLevel, Layer, LayerResult};
use crate::matchers::{
    AdvancedMatcher, AsteroidHouseMatcher, ElementCoreMatcher, ExtraPointElementMatcher,
    LayerMatcher, RelationAspectMatcher, ShinsalPlanetMatcher, SibsinHouseMatcher,
    SibsinPlanetMatcher, StageHouseMatcher, TimingMatcher,
};
use crate::tables::FusionTables;

/// 报告中高亮条目数
pub const HIGHLIGHT_LIMIT: usize = 3;

/// 十层结果
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct LayerSet {
    #[serde(rename = "layer1_elementCore")]
    pub element_core: LayerResult,
    #[serde(rename = "layer2_sibsinPlanet")]
    pub sibsin_planet: LayerResult,
    #[serde(rename = "layer3_sibsinHouse")]
    pub sibsin_house: LayerResult,
    #[serde(rename = "layer4_timing")]
    pub timing: LayerResult,
    #[serde(rename = "layer5_relationAspect")]
    pub relation_aspect: LayerResult,
    #[serde(rename = "layer6_stageHouse")]
    pub stage_house: LayerResult,
    #[serde(rename = "layer7_advanced")]
    pub advanced: LayerResult,
    #[serde(rename = "layer8_shinsalPlanet")]
    pub shinsal_planet: LayerResult,
    #[serde(rename = "layer9_asteroidHouse")]
    pub asteroid_house: LayerResult,
    #[serde(rename = "layer10_extraPointElement")]
    pub extra_point_element: LayerResult,
}

impl LayerSet {
    pub fn evaluate(tables: &FusionTables, input: &MatrixInput) -> Self {
        Self {
            element_core: ElementCoreMatcher::evaluate(tables, input),
            sibsin_planet: SibsinPlanetMatcher::evaluate(tables, input),
            sibsin_house: SibsinHouseMatcher::evaluate(tables, input),
            timing: TimingMatcher::evaluate(tables, input),
            relation_aspect: RelationAspectMatcher::evaluate(tables, input),
            stage_house: StageHouseMatcher::evaluate(tables, input),
            advanced: AdvancedMatcher::evaluate(tables, input),
            shinsal_planet: ShinsalPlanetMatcher::evaluate(tables, input),
            asteroid_house: AsteroidHouseMatcher::evaluate(tables, input),
            extra_point_element: ExtraPointElementMatcher::evaluate(tables, input),
        }
    }

    pub fn get(&self, layer: Layer) -> &LayerResult {
        match layer {
            Layer::ElementCore => &self.element_core,
            Layer::SibsinPlanet => &self.sibsin_planet,
            Layer::SibsinHouse => &self.sibsin_house,
            Layer::Timing => &self.timing,
            Layer::RelationAspect => &self.relation_aspect,
            Layer::StageHouse => &self.stage_house,
            Layer::Advanced => &self.advanced,
            Layer::ShinsalPlanet => &self.shinsal_planet,
            Layer::AsteroidHouse => &self.asteroid_house,
            Layer::ExtraPointElement => &self.extra_point_element,
        }
    }

    /// 按层序列出
    pub fn ordered(&self) -> [(Layer, &LayerResult); 10] {
        Layer::ALL.map(|layer| (layer, self.get(layer)))
    }

    pub fn cells_matched(&self) -> usize {
        Layer::ALL.iter().map(|layer| self.get(*layer).len()).sum()
    }

    pub fn layers_processed(&self) -> usize {
        Layer::ALL.iter().filter(|layer| !self.get(**layer).is_empty()).count()
    }
}

/// 融合矩阵结果
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct FusionMatrixResult {
    #[serde(flatten)]
    pub layers: LayerSet,
    pub summary: MatrixSummary,
}

/// 计算融合矩阵
pub fn compute(tables: &FusionTables, input: &MatrixInput, config: &EngineConfig) -> FusionMatrixResult {
    let layers = LayerSet::evaluate(tables, input);
    let summary = summarize(&layers.ordered(), config, input.lang());
    log::info!(
        "✨ 融合矩阵完成: 日主 {:?}，{} 层有效，{} 个单元",
        input.day_master_element,
        layers.layers_processed(),
        layers.cells_matched()
    );
    FusionMatrixResult { layers, summary }
}

/// 报告计数
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_score: u8,
    pub cells_matched: u32,
    pub layers_processed: u8,
    pub strength_count: u32,
    pub caution_count: u32,
}

/// 高亮
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Highlights {
    pub strengths: Vec<RankedMatch>,
    pub cautions: Vec<RankedMatch>,
}

/// 展示用报告
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct MatrixReport {
    pub summary: ReportSummary,
    pub highlights: Highlights,
    pub synergies: Vec<String>,
}

impl MatrixReport {
    pub fn from_result(result: &FusionMatrixResult) -> Self {
        let summary = &result.summary;
        let first = |points: &[RankedMatch]| points.iter().take(HIGHLIGHT_LIMIT).cloned().collect::<Vec<_>>();
        Self {
            summary: ReportSummary {
                total_score: summary.total_score,
                cells_matched: result.layers.cells_matched() as u32,
                layers_processed: result.layers.layers_processed() as u8,
                strength_count: summary.strength_points.len() as u32,
                caution_count: summary.caution_points.len() as u32,
            },
            highlights: Highlights {
                strengths: first(&summary.strength_points),
                cautions: first(&summary.caution_points),
            },
            synergies: summary.top_synergies.iter().take(HIGHLIGHT_LIMIT).cloned().collect(),
        }
    }
}

/// 运行时 API 返回的完整响应
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct MatrixResponse {
    pub result: FusionMatrixResult,
    pub report: MatrixReport,
}

impl From<FusionMatrixResult> for MatrixResponse {
    fn from(result: FusionMatrixResult) -> Self {
        let report = MatrixReport::from_result(&result);
        Self { result, report }
    }
}

// ============================================================================
// 目录
// ============================================================================

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogLayer {
    pub number: u8,
    pub name: &'static str,
    pub title: &'static str,
    pub title_ko: &'static str,
    pub cells: u32,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogLevel {
    pub level: InteractionLevel,
    pub min_score: u8,
    pub max_score: u8,
}

/// 静态目录
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCatalog {
    pub layers: Vec<CatalogLayer>,
    pub total_cells: u32,
    pub interaction_levels: Vec<CatalogLevel>,
}

impl MatrixCatalog {
    pub fn from_tables(tables: &FusionTables) -> Self {
        let layers: Vec<CatalogLayer> = tables
            .cell_counts()
            .iter()
            .map(|(layer, cells)| CatalogLayer {
                number: layer.number(),
                name: layer.name(),
                title: layer.title(),
                title_ko: layer.title_ko(),
                cells: *cells as u32,
            })
            .collect();
        let total_cells = layers.iter().map(|l| l.cells).sum();
        let interaction_levels = InteractionLevel::ALL
            .iter()
            .map(|level| {
                let (min_score, max_score) = level.score_range();
                CatalogLevel { level: *level, min_score, max_score }
            })
            .collect();
        Self { layers, total_cells, interaction_levels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::STANDARD_TABLES;
    use crate::types::Element;

    fn filled(layer: Layer, scores: &[u8]) -> LayerResult {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| (alloc::format!("k{}", i), layer.interaction(*s)))
            .collect()
    }

    fn result_from(layers: LayerSet) -> FusionMatrixResult {
        let summary = summarize(&layers.ordered(), &EngineConfig::default(), Default::default());
        FusionMatrixResult { layers, summary }
    }

    #[test]
    fn test_report_counters() {
        // 各层单元数 [2,1,3,0,1,0,0,1,0,2]
        let layers = LayerSet {
            element_core: filled(Layer::ElementCore, &[5, 5]),
            sibsin_planet: filled(Layer::SibsinPlanet, &[5]),
            sibsin_house: filled(Layer::SibsinHouse, &[5, 5, 5]),
            relation_aspect: filled(Layer::RelationAspect, &[5]),
            shinsal_planet: filled(Layer::ShinsalPlanet, &[5]),
            extra_point_element: filled(Layer::ExtraPointElement, &[5, 5]),
            ..Default::default()
        };
        let report = MatrixReport::from_result(&result_from(layers));
        assert_eq!(report.summary.cells_matched, 10);
        assert_eq!(report.summary.layers_processed, 6);
        assert_eq!(report.summary.strength_count, 0);
        assert_eq!(report.summary.caution_count, 0);
    }

    #[test]
    fn test_report_highlights() {
        let layers = LayerSet {
            element_core: filled(Layer::ElementCore, &[7, 9, 3]),
            timing: filled(Layer::Timing, &[8, 2, 1]),
            advanced: filled(Layer::Advanced, &[8, 7, 2, 5]),
            ..Default::default()
        };
        let result = result_from(layers);
        let report = MatrixReport::from_result(&result);

        let strengths: Vec<u8> = report.highlights.strengths.iter().map(|m| m.cell.score).collect();
        let cautions: Vec<u8> = report.highlights.cautions.iter().map(|m| m.cell.score).collect();
        assert_eq!(strengths, vec![9, 8, 8]);
        assert_eq!(cautions, vec![1, 2, 2]);
        assert_eq!(report.summary.strength_count, 5);
        assert_eq!(report.summary.caution_count, 4);
        assert!(report.synergies.len() <= HIGHLIGHT_LIMIT);

        // 每个排名条目都指向其层内的真实单元
        for m in result.summary.strength_points.iter().chain(result.summary.caution_points.iter()) {
            assert_eq!(result.layers.get(m.layer).get(&m.match_key), Some(&m.cell));
        }
    }

    #[test]
    fn test_partial_input_only_first_layer() {
        let input = MatrixInput::new(Element::Wood, vec![Element::Wood, Element::Fire, Element::Earth, Element::Metal]);
        let result = compute(&STANDARD_TABLES, &input, &EngineConfig::default());
        assert_eq!(result.layers.element_core.len(), 3);
        for (layer, cells) in result.layers.ordered().iter().skip(1) {
            assert!(cells.is_empty(), "{:?} should be empty", layer);
        }
        assert_eq!(result.summary.total_score, 44);
        assert_eq!(result.summary.strength_points.len(), 1);
        assert_eq!(result.summary.caution_points.len(), 1);
    }

    #[test]
    fn test_json_is_deterministic() {
        let mut input = MatrixInput::new(Element::Earth, vec![Element::Earth, Element::Water, Element::Fire]);
        input.profile.current_daeun_element = Some(Element::Fire);
        let a = serde_json::to_vec(&compute(&STANDARD_TABLES, &input, &EngineConfig::default())).unwrap();
        let b = serde_json::to_vec(&compute(&STANDARD_TABLES, &input, &EngineConfig::default())).unwrap();
        assert_eq!(a, b);

        let json: serde_json::Value = serde_json::from_slice(&a).unwrap();
        assert!(json.get("layer1_elementCore").is_some());
        assert!(json.get("layer10_extraPointElement").is_some());
        assert!(json["summary"].get("totalScore").is_some());
    }

    #[test]
    fn test_catalog() {
        let catalog = MatrixCatalog::from_tables(&STANDARD_TABLES);
        let cells: Vec<u32> = catalog.layers.iter().map(|l| l.cells).collect();
        assert_eq!(cells, vec![20, 120, 120, 50, 132, 144, 50, 432, 48, 90]);
        assert_eq!(catalog.total_cells, 1206);
        assert_eq!(catalog.interaction_levels.len(), 5);
        assert_eq!(catalog.layers[3].name, "layer4_timing");
    }
}
