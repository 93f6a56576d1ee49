//! # 交互单元与评分表
//!
//! 每一层是一张 `行维度 × 列维度` 的静态评分网格：
//! - 网格值 1-10 为已编写的单元，0 表示该组合无解读
//! - 单元被查询时才组装成 [`Interaction`]，关键词取自该层的等级词表
//!
//! 网格长度在常量求值阶段校验，与维度大小不符则无法编译。

use alloc::{collections::BTreeMap, format, string::String};
use core::marker::PhantomData;
use serde::Serialize;

use crate::types::{Dimension, Lang};

/// 单层结果：复合键 → 交互单元
pub type LayerResult = BTreeMap<String, Interaction>;

/// 交互强度等级
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionLevel {
    /// 9-10
    Extreme,
    /// 7-8
    Amplify,
    /// 5-6
    Balance,
    /// 3-4
    Clash,
    /// 1-2
    Conflict,
}

impl InteractionLevel {
    pub const ALL: [InteractionLevel; 5] = [
        InteractionLevel::Extreme,
        InteractionLevel::Amplify,
        InteractionLevel::Balance,
        InteractionLevel::Clash,
        InteractionLevel::Conflict,
    ];

    pub fn from_score(score: u8) -> Self {
        match score {
            9..=u8::MAX => InteractionLevel::Extreme,
            7..=8 => InteractionLevel::Amplify,
            5..=6 => InteractionLevel::Balance,
            3..=4 => InteractionLevel::Clash,
            _ => InteractionLevel::Conflict,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            InteractionLevel::Extreme => "extreme",
            InteractionLevel::Amplify => "amplify",
            InteractionLevel::Balance => "balance",
            InteractionLevel::Clash => "clash",
            InteractionLevel::Conflict => "conflict",
        }
    }

    /// 分值区间（闭区间）
    pub fn score_range(&self) -> (u8, u8) {
        match self {
            InteractionLevel::Extreme => (9, 10),
            InteractionLevel::Amplify => (7, 8),
            InteractionLevel::Balance => (5, 6),
            InteractionLevel::Clash => (3, 4),
            InteractionLevel::Conflict => (1, 2),
        }
    }

    fn position(&self) -> usize {
        *self as usize
    }
}

/// 单元所在行列的英文 / 韩文名称
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PairLabel {
    pub row: (&'static str, &'static str),
    pub col: (&'static str, &'static str),
}

impl PairLabel {
    pub fn of<R: Dimension, C: Dimension>(row: R, col: C) -> Self {
        Self { row: (row.label(), row.label_ko()), col: (col.label(), col.label_ko()) }
    }

    /// `"{行} × {列}"`
    pub fn render(&self, lang: Lang) -> String {
        let pick = |(en, ko): (&'static str, &'static str)| match lang {
            Lang::Ko => ko,
            Lang::En => en,
        };
        format!("{} × {}", pick(self.row), pick(self.col))
    }
}

/// 交互单元
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub keyword: &'static str,
    pub keyword_ko: &'static str,
    pub score: u8,
    pub level: InteractionLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// 仅用于生成协同摘要，不输出
    #[serde(skip)]
    pub pair: PairLabel,
}

impl Interaction {
    /// 按语言取关键词
    pub fn keyword_in(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ko => self.keyword_ko,
            Lang::En => self.keyword,
        }
    }
}

/// 十个解读层
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
pub enum Layer {
    #[serde(rename = "layer1_elementCore")]
    ElementCore,
    #[serde(rename = "layer2_sibsinPlanet")]
    SibsinPlanet,
    #[serde(rename = "layer3_sibsinHouse")]
    SibsinHouse,
    #[serde(rename = "layer4_timing")]
    Timing,
    #[serde(rename = "layer5_relationAspect")]
    RelationAspect,
    #[serde(rename = "layer6_stageHouse")]
    StageHouse,
    #[serde(rename = "layer7_advanced")]
    Advanced,
    #[serde(rename = "layer8_shinsalPlanet")]
    ShinsalPlanet,
    #[serde(rename = "layer9_asteroidHouse")]
    AsteroidHouse,
    #[serde(rename = "layer10_extraPointElement")]
    ExtraPointElement,
}

/// 单层的等级词表（按 Extreme..Conflict 排列）
struct Vocabulary {
    title: &'static str,
    title_ko: &'static str,
    keywords: [(&'static str, &'static str); 5],
    descriptions: [Option<&'static str>; 5],
}

static VOCABULARIES: [Vocabulary; 10] = [
    Vocabulary {
        title: "Element Core",
        title_ko: "오행 핵심",
        keywords: [
            ("Elemental Resonance", "오행 공명"),
            ("Generative Flow", "상생의 흐름"),
            ("Steady Exchange", "균형 교류"),
            ("Elemental Friction", "오행 마찰"),
            ("Elemental Suppression", "오행 억압"),
        ],
        descriptions: [
            Some("The day master is fed directly by this element."),
            None,
            None,
            None,
            Some("This element overrides the day master."),
        ],
    },
    Vocabulary {
        title: "Sibsin × Planet",
        title_ko: "십신 × 행성",
        keywords: [
            ("Archetype Fusion", "십신-행성 융합"),
            ("Empowered Role", "역할 증폭"),
            ("Latent Role", "잠재된 역할"),
            ("Role Tension", "역할 긴장"),
            ("Role Collapse", "역할 충돌"),
        ],
        descriptions: [
            Some("The ten-god role and the planet express the same drive."),
            None,
            None,
            None,
            Some("The planet works against the ten-god role."),
        ],
    },
    Vocabulary {
        title: "Sibsin × House",
        title_ko: "십신 × 하우스",
        keywords: [
            ("Destined Arena", "운명의 무대"),
            ("Favoured Field", "유리한 영역"),
            ("Neutral Ground", "중립 영역"),
            ("Uneasy Field", "불편한 영역"),
            ("Hostile Arena", "험난한 무대"),
        ],
        descriptions: [
            Some("The life area is the natural stage of this ten-god."),
            None,
            None,
            None,
            Some("The life area resists this ten-god."),
        ],
    },
    Vocabulary {
        title: "Luck Timing",
        title_ko: "운세 타이밍",
        keywords: [
            ("Golden Window", "황금기"),
            ("Rising Tide", "상승 기류"),
            ("Even Season", "평온한 시기"),
            ("Headwind", "역풍"),
            ("Storm Season", "시련기"),
        ],
        descriptions: [
            Some("The current cycle strongly supports the day master."),
            None,
            None,
            None,
            Some("The current cycle drains or suppresses the day master."),
        ],
    },
    Vocabulary {
        title: "Relation × Aspect",
        title_ko: "합충 × 애스펙트",
        keywords: [
            ("Sealed Bond", "결속의 완성"),
            ("Echoed Harmony", "조화의 공명"),
            ("Mixed Signals", "혼재된 신호"),
            ("Echoed Tension", "긴장의 공명"),
            ("Double Rupture", "이중 충돌"),
        ],
        descriptions: [
            Some("The pillar relation and the aspect both bind."),
            None,
            None,
            None,
            Some("The pillar relation and the aspect both break."),
        ],
    },
    Vocabulary {
        title: "Stage × House",
        title_ko: "십이운성 × 하우스",
        keywords: [
            ("Peak Vitality", "기운의 절정"),
            ("Growing Vitality", "성장하는 기운"),
            ("Resting Vitality", "머무는 기운"),
            ("Waning Vitality", "쇠하는 기운"),
            ("Depleted Vitality", "소진된 기운"),
        ],
        descriptions: [
            Some("The life stage is at full strength in this house."),
            None,
            None,
            None,
            Some("The life stage is exhausted in this house."),
        ],
    },
    Vocabulary {
        title: "Pattern × Yongsin",
        title_ko: "격국 × 용신",
        keywords: [
            ("Perfect Pattern", "완성된 격국"),
            ("Supported Pattern", "격을 돕는 용신"),
            ("Tolerated Pattern", "무난한 배합"),
            ("Strained Pattern", "격을 흔드는 용신"),
            ("Broken Pattern", "파격"),
        ],
        descriptions: [
            Some("The useful god completes the chart pattern."),
            None,
            None,
            None,
            Some("The useful god breaks the chart pattern."),
        ],
    },
    Vocabulary {
        title: "Shinsal × Planet",
        title_ko: "신살 × 행성",
        keywords: [
            ("Blessed Star", "귀인의 별"),
            ("Favoured Star", "길성의 가호"),
            ("Dormant Star", "잠든 신살"),
            ("Restless Star", "흔들리는 신살"),
            ("Ominous Star", "흉성의 경고"),
        ],
        descriptions: [
            Some("The special star is activated by this planet."),
            None,
            None,
            None,
            Some("This planet inflames the special star."),
        ],
    },
    Vocabulary {
        title: "Asteroid × House",
        title_ko: "소행성 × 하우스",
        keywords: [
            ("Sacred Placement", "신성한 배치"),
            ("Nurtured Placement", "보살핌의 배치"),
            ("Quiet Placement", "조용한 배치"),
            ("Strained Placement", "부담스러운 배치"),
            ("Wounded Placement", "상처 입은 배치"),
        ],
        descriptions: [
            Some("The asteroid sits in its most natural house."),
            None,
            None,
            None,
            Some("The asteroid is uncomfortable in this house."),
        ],
    },
    Vocabulary {
        title: "Extra Point × Element",
        title_ko: "특수점 × 오행",
        keywords: [
            ("Hidden Gift", "숨은 선물"),
            ("Subtle Support", "은은한 지원"),
            ("Faint Trace", "희미한 흔적"),
            ("Hidden Friction", "숨은 마찰"),
            ("Hidden Wound", "숨은 상처"),
        ],
        descriptions: [
            Some("The sensitive point resonates with this element."),
            None,
            None,
            None,
            Some("The sensitive point is wounded by this element."),
        ],
    },
];

impl Layer {
    pub const ALL: [Layer; 10] = [
        Layer::ElementCore,
        Layer::SibsinPlanet,
        Layer::SibsinHouse,
        Layer::Timing,
        Layer::RelationAspect,
        Layer::StageHouse,
        Layer::Advanced,
        Layer::ShinsalPlanet,
        Layer::AsteroidHouse,
        Layer::ExtraPointElement,
    ];

    /// 层序号（1-10）
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// 结果中的字段名
    pub fn name(&self) -> &'static str {
        match self {
            Layer::ElementCore => "layer1_elementCore",
            Layer::SibsinPlanet => "layer2_sibsinPlanet",
            Layer::SibsinHouse => "layer3_sibsinHouse",
            Layer::Timing => "layer4_timing",
            Layer::RelationAspect => "layer5_relationAspect",
            Layer::StageHouse => "layer6_stageHouse",
            Layer::Advanced => "layer7_advanced",
            Layer::ShinsalPlanet => "layer8_shinsalPlanet",
            Layer::AsteroidHouse => "layer9_asteroidHouse",
            Layer::ExtraPointElement => "layer10_extraPointElement",
        }
    }

    pub fn title(&self) -> &'static str {
        self.vocabulary().title
    }

    pub fn title_ko(&self) -> &'static str {
        self.vocabulary().title_ko
    }

    pub fn title_in(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ko => self.title_ko(),
            Lang::En => self.title(),
        }
    }

    fn vocabulary(&self) -> &'static Vocabulary {
        &VOCABULARIES[*self as usize]
    }

    /// 由分值组装交互单元
    pub fn interaction(&self, score: u8) -> Interaction {
        let level = InteractionLevel::from_score(score);
        let vocabulary = self.vocabulary();
        let (keyword, keyword_ko) = vocabulary.keywords[level.position()];
        Interaction {
            keyword,
            keyword_ko,
            score,
            level,
            description: vocabulary.descriptions[level.position()],
            pair: PairLabel::default(),
        }
    }
}

/// 单层评分表
pub struct InteractionTable<R: Dimension, C: Dimension> {
    layer: Layer,
    grid: &'static [u8],
    _axes: PhantomData<(R, C)>,
}

impl<R: Dimension, C: Dimension> InteractionTable<R, C> {
    /// 按行主序构造；网格长度或分值越界时常量求值失败
    pub const fn new(layer: Layer, grid: &'static [u8]) -> Self {
        assert!(grid.len() == R::COUNT * C::COUNT, "grid size does not match dimensions");
        let mut i = 0;
        while i < grid.len() {
            assert!(grid[i] <= 10, "score out of range");
            i += 1;
        }
        Self { layer, grid, _axes: PhantomData }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// 查询单元，0 视为无解读
    pub fn lookup(&self, row: R, col: C) -> Option<Interaction> {
        let score = *self.grid.get(row.index() * C::COUNT + col.index())?;
        (score > 0).then(|| Interaction { pair: PairLabel::of(row, col), ..self.layer.interaction(score) })
    }

    /// 复合键 `"{row}-{col}"`
    pub fn composite_key(row: R, col: C) -> String {
        format!("{}-{}", row.key(), col.key())
    }

    /// 已编写单元数
    pub fn cell_count(&self) -> usize {
        self.grid.iter().filter(|score| **score > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Element, House, LuckCycle, Planet, Sibsin, TimingKey};

    const TINY: InteractionTable<Element, Element> = InteractionTable::new(
        Layer::ElementCore,
        &[
            0, 9, 0, 0, 0, //
            0, 0, 0, 0, 0, //
            0, 0, 0, 0, 0, //
            0, 0, 0, 0, 1, //
            0, 0, 0, 0, 0, //
        ],
    );

    #[test]
    fn test_level_boundaries() {
        assert_eq!(InteractionLevel::from_score(10), InteractionLevel::Extreme);
        assert_eq!(InteractionLevel::from_score(9), InteractionLevel::Extreme);
        assert_eq!(InteractionLevel::from_score(8), InteractionLevel::Amplify);
        assert_eq!(InteractionLevel::from_score(7), InteractionLevel::Amplify);
        assert_eq!(InteractionLevel::from_score(6), InteractionLevel::Balance);
        assert_eq!(InteractionLevel::from_score(5), InteractionLevel::Balance);
        assert_eq!(InteractionLevel::from_score(4), InteractionLevel::Clash);
        assert_eq!(InteractionLevel::from_score(3), InteractionLevel::Clash);
        assert_eq!(InteractionLevel::from_score(2), InteractionLevel::Conflict);
        assert_eq!(InteractionLevel::from_score(1), InteractionLevel::Conflict);
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let cell = TINY.lookup(Element::Wood, Element::Fire).unwrap();
        assert_eq!(cell.score, 9);
        assert_eq!(cell.level, InteractionLevel::Extreme);
        assert_eq!(cell.keyword, "Elemental Resonance");
        assert!(cell.description.is_some());

        assert_eq!(cell.pair.render(Lang::En), "Wood × Fire");
        assert_eq!(cell.pair.render(Lang::Ko), "목 × 화");

        assert!(TINY.lookup(Element::Fire, Element::Wood).is_none());
        assert_eq!(TINY.lookup(Element::Metal, Element::Water).unwrap().level, InteractionLevel::Conflict);
        assert_eq!(TINY.cell_count(), 2);
    }

    #[test]
    fn test_composite_key() {
        assert_eq!(InteractionTable::<Sibsin, Planet>::composite_key(Sibsin::Jeonggwan, Planet::Saturn), "jeonggwan-saturn");
    }

    #[test]
    fn test_pair_labels() {
        let daeun = TimingKey::new(LuckCycle::Daeun, Element::Water);
        assert_eq!(PairLabel::of(daeun, House::Tenth).render(Lang::Ko), "수 대운 × 10하우스");
        assert_eq!(PairLabel::of(Sibsin::Siksin, Planet::Venus).render(Lang::En), "Eating God × Venus");
    }

    #[test]
    fn test_layer_names_follow_numbering() {
        for (i, layer) in Layer::ALL.iter().enumerate() {
            assert_eq!(layer.number() as usize, i + 1);
            assert!(layer.name().starts_with(&format!("layer{}_", i + 1)));
        }
    }

    #[test]
    fn test_interaction_json_shape() {
        let cell = Layer::Timing.interaction(6);
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"keyword":"Even Season","keywordKo":"평온한 시기","score":6,"level":"balance"}"#);

        let looked_up = serde_json::to_string(&TINY.lookup(Element::Wood, Element::Fire).unwrap()).unwrap();
        assert!(!looked_up.contains("pair"));
    }
}
