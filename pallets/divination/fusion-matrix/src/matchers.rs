//! # 十层匹配器
//!
//! 每层匹配器只枚举当事人数据实际构成的键对，再到该层评分表中查询。
//! 依赖的可选输入缺失时直接返回空结果，不触碰评分表。
//!
//! | 层 | 行 | 列 | 依赖 |
//! |----|----|----|------|
//! | 1 | 日主 | 八字五行 / 主导西方元素 | 八字五行或主导西方元素 |
//! | 2 | 十神 | 行星 | 十神分布 + 行星宫位或星座 |
//! | 3 | 十神 | 宫位 | 十神分布 + 行星宫位 |
//! | 4 | 大运/岁运五行 | 日主 | 任一运 |
//! | 5 | 干支关系 | 相位 | 关系 + 本命或行运相位 |
//! | 6 | 十二运 | 宫位 | 十二运 + 行星宫位 |
//! | 7 | 格局 | 用神十神大类 | 格局 + 用神 |
//! | 8 | 神煞 | 行星 | 神煞 + 行星宫位或星座 |
//! | 9 | 小行星 | 宫位 | 小行星宫位 |
//! | 10 | 特殊点 | 五行 | 特殊点星座 |

use alloc::collections::BTreeSet;

use crate::input::{InputGroup, MatrixInput};
use crate::interaction::{InteractionTable, Layer, LayerResult};
use crate::tables::FusionTables;
use crate::types::{
    AspectType, AsteroidBody, Dimension, Element, ElementRole, ExtraPoint, Geokguk, House,
    LuckCycle, Planet, Relation, Shinsal, Sibsin, TimingKey, TwelveStage,
};

/// 输入依赖声明：`all_of` 全部有数据，且 `any_of` 为空或至少一项有数据
#[derive(Clone, Copy, Debug)]
pub struct InputRequirement {
    pub all_of: &'static [InputGroup],
    pub any_of: &'static [InputGroup],
}

impl InputRequirement {
    pub fn is_met(&self, input: &MatrixInput) -> bool {
        self.all_of.iter().all(|g| input.has(*g))
            && (self.any_of.is_empty() || self.any_of.iter().any(|g| input.has(*g)))
    }
}

/// 单层匹配器
pub trait LayerMatcher {
    type Row: Dimension;
    type Col: Dimension;

    const LAYER: Layer;
    const REQUIRES: InputRequirement;

    fn table(tables: &FusionTables) -> &InteractionTable<Self::Row, Self::Col>;

    /// 当事人数据构成的全部键对
    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(Self::Row, Self::Col)>;

    fn evaluate(tables: &FusionTables, input: &MatrixInput) -> LayerResult {
        let mut result = LayerResult::new();
        if !Self::REQUIRES.is_met(input) {
            log::debug!("🔍 融合矩阵: {} 输入缺失，跳过", Self::LAYER.name());
            return result;
        }

        let table = Self::table(tables);
        for (row, col) in Self::realized_pairs(input) {
            if let Some(cell) = table.lookup(row, col) {
                result.insert(InteractionTable::composite_key(row, col), cell);
            }
        }

        log::debug!("🔍 融合矩阵: {} 命中 {} 个单元", Self::LAYER.name(), result.len());
        result
    }
}

/// 第 1 层：五行核心
pub struct ElementCoreMatcher;

impl LayerMatcher for ElementCoreMatcher {
    type Row = Element;
    type Col = Element;

    const LAYER: Layer = Layer::ElementCore;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[],
        any_of: &[InputGroup::PillarElements, InputGroup::DominantWesternElement],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<Element, Element> {
        &tables.element_core
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(Element, Element)> {
        let dm = input.day_master_element;
        input
            .pillar_elements
            .iter()
            .copied()
            .chain(input.profile.dominant_western_element.map(|w| w.counterpart()))
            .map(|e| (dm, e))
            .collect()
    }
}

/// 第 2 层：十神 × 行星
pub struct SibsinPlanetMatcher;

impl LayerMatcher for SibsinPlanetMatcher {
    type Row = Sibsin;
    type Col = Planet;

    const LAYER: Layer = Layer::SibsinPlanet;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[InputGroup::SibsinDistribution],
        any_of: &[InputGroup::PlanetHouses, InputGroup::PlanetSigns],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<Sibsin, Planet> {
        &tables.sibsin_planet
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(Sibsin, Planet)> {
        let planets = input.placed_planets();
        input
            .present_sibsin()
            .flat_map(|s| planets.iter().map(move |p| (s, *p)))
            .collect()
    }
}

/// 第 3 层：十神 × 宫位
pub struct SibsinHouseMatcher;

impl LayerMatcher for SibsinHouseMatcher {
    type Row = Sibsin;
    type Col = House;

    const LAYER: Layer = Layer::SibsinHouse;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[InputGroup::SibsinDistribution, InputGroup::PlanetHouses],
        any_of: &[],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<Sibsin, House> {
        &tables.sibsin_house
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(Sibsin, House)> {
        let houses = input.occupied_houses();
        input
            .present_sibsin()
            .flat_map(|s| houses.iter().map(move |h| (s, *h)))
            .collect()
    }
}

/// 第 4 层：运程
pub struct TimingMatcher;

impl LayerMatcher for TimingMatcher {
    type Row = TimingKey;
    type Col = Element;

    const LAYER: Layer = Layer::Timing;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[],
        any_of: &[InputGroup::CurrentDaeun, InputGroup::CurrentSaeun],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<TimingKey, Element> {
        &tables.timing
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(TimingKey, Element)> {
        let dm = input.day_master_element;
        let daeun = input.profile.current_daeun_element.map(|e| TimingKey::new(LuckCycle::Daeun, e));
        let saeun = input.profile.current_saeun_element.map(|e| TimingKey::new(LuckCycle::Saeun, e));
        daeun.into_iter().chain(saeun).map(|key| (key, dm)).collect()
    }
}

/// 第 5 层：干支关系 × 相位
pub struct RelationAspectMatcher;

impl LayerMatcher for RelationAspectMatcher {
    type Row = Relation;
    type Col = AspectType;

    const LAYER: Layer = Layer::RelationAspect;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[InputGroup::Relations],
        any_of: &[InputGroup::Aspects, InputGroup::ActiveTransits],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<Relation, AspectType> {
        &tables.relation_aspect
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(Relation, AspectType)> {
        let aspect_types = input.aspect_types();
        input
            .profile
            .relations
            .iter()
            .flat_map(|r| aspect_types.iter().map(move |a| (*r, *a)))
            .collect()
    }
}

/// 第 6 层：十二运 × 宫位
pub struct StageHouseMatcher;

impl LayerMatcher for StageHouseMatcher {
    type Row = TwelveStage;
    type Col = House;

    const LAYER: Layer = Layer::StageHouse;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[InputGroup::TwelveStages, InputGroup::PlanetHouses],
        any_of: &[],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<TwelveStage, House> {
        &tables.stage_house
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(TwelveStage, House)> {
        let houses = input.occupied_houses();
        input
            .profile
            .twelve_stages
            .values()
            .flat_map(|stage| houses.iter().map(move |h| (*stage, *h)))
            .collect()
    }
}

/// 第 7 层：格局 × 用神
pub struct AdvancedMatcher;

impl LayerMatcher for AdvancedMatcher {
    type Row = Geokguk;
    type Col = ElementRole;

    const LAYER: Layer = Layer::Advanced;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[InputGroup::Geokguk, InputGroup::Yongsin],
        any_of: &[],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<Geokguk, ElementRole> {
        &tables.advanced
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(Geokguk, ElementRole)> {
        let geokguk = input.profile.geokguk.as_deref().and_then(Geokguk::from_tag);
        let role = input.primary_yongsin().map(|y| input.day_master_element.role_of(y));
        match (geokguk, role) {
            (Some(g), Some(r)) => BTreeSet::from([(g, r)]),
            _ => BTreeSet::new(),
        }
    }
}

/// 第 8 层：神煞 × 行星
pub struct ShinsalPlanetMatcher;

impl LayerMatcher for ShinsalPlanetMatcher {
    type Row = Shinsal;
    type Col = Planet;

    const LAYER: Layer = Layer::ShinsalPlanet;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[InputGroup::Shinsal],
        any_of: &[InputGroup::PlanetHouses, InputGroup::PlanetSigns],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<Shinsal, Planet> {
        &tables.shinsal_planet
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(Shinsal, Planet)> {
        let planets = input.placed_planets();
        input
            .profile
            .shinsal_list
            .iter()
            .flat_map(|s| planets.iter().map(move |p| (*s, *p)))
            .collect()
    }
}

/// 第 9 层：小行星 × 宫位
pub struct AsteroidHouseMatcher;

impl LayerMatcher for AsteroidHouseMatcher {
    type Row = AsteroidBody;
    type Col = House;

    const LAYER: Layer = Layer::AsteroidHouse;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[InputGroup::AsteroidHouses],
        any_of: &[],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<AsteroidBody, House> {
        &tables.asteroid_house
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(AsteroidBody, House)> {
        input.profile.asteroid_houses.iter().map(|(a, h)| (*a, *h)).collect()
    }
}

/// 第 10 层：特殊点 × 五行
pub struct ExtraPointElementMatcher;

impl LayerMatcher for ExtraPointElementMatcher {
    type Row = ExtraPoint;
    type Col = Element;

    const LAYER: Layer = Layer::ExtraPointElement;
    const REQUIRES: InputRequirement = InputRequirement {
        all_of: &[InputGroup::ExtraPointSigns],
        any_of: &[],
    };

    fn table(tables: &FusionTables) -> &InteractionTable<ExtraPoint, Element> {
        &tables.extra_point_element
    }

    fn realized_pairs(input: &MatrixInput) -> BTreeSet<(ExtraPoint, Element)> {
        let dm = input.day_master_element;
        input
            .profile
            .extra_point_signs
            .iter()
            .flat_map(|(point, sign)| [(*point, sign.element().counterpart()), (*point, dm)])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Aspect, Transit};
    use crate::tables::STANDARD_TABLES;
    use crate::types::{WesternElement, ZodiacSign};

    fn keys(result: &LayerResult) -> Vec<&str> {
        result.keys().map(|k| k.as_str()).collect()
    }

    fn wood_input() -> MatrixInput {
        MatrixInput::new(Element::Wood, vec![Element::Wood, Element::Fire, Element::Earth, Element::Metal])
    }

    #[test]
    fn test_element_core_realized_pairs_only() {
        let result = ElementCoreMatcher::evaluate(&STANDARD_TABLES, &wood_input());
        // wood-wood 为空单元
        assert_eq!(keys(&result), vec!["wood-earth", "wood-fire", "wood-metal"]);
        assert_eq!(result["wood-fire"].score, 7);
        assert_eq!(result["wood-metal"].score, 2);
    }

    #[test]
    fn test_element_core_with_western_counterpart() {
        let mut input = MatrixInput::new(Element::Fire, vec![Element::Fire]);
        input.profile.dominant_western_element = Some(WesternElement::Air);
        let result = ElementCoreMatcher::evaluate(&STANDARD_TABLES, &input);
        assert_eq!(keys(&result), vec!["fire-wood"]);
        assert_eq!(result["fire-wood"].score, 9);
    }

    #[test]
    fn test_element_core_needs_an_element_source() {
        let mut input = MatrixInput::new(Element::Fire, vec![]);
        assert!(!ElementCoreMatcher::REQUIRES.is_met(&input));
        assert!(ElementCoreMatcher::evaluate(&STANDARD_TABLES, &input).is_empty());

        input.profile.dominant_western_element = Some(WesternElement::Water);
        assert!(ElementCoreMatcher::REQUIRES.is_met(&input));
        assert_eq!(keys(&ElementCoreMatcher::evaluate(&STANDARD_TABLES, &input)), vec!["fire-water"]);
    }

    #[test]
    fn test_sibsin_planet_needs_both_groups() {
        let mut input = wood_input();
        input.profile.sibsin_distribution.insert(Sibsin::Jeonggwan, 1);
        assert!(SibsinPlanetMatcher::evaluate(&STANDARD_TABLES, &input).is_empty());

        input.profile.planet_signs.insert(Planet::Saturn, ZodiacSign::Capricorn);
        input.profile.planet_houses.insert(Planet::Sun, House::Tenth);
        let result = SibsinPlanetMatcher::evaluate(&STANDARD_TABLES, &input);
        assert_eq!(keys(&result), vec!["jeonggwan-saturn", "jeonggwan-sun"]);
    }

    #[test]
    fn test_sibsin_house_uses_occupied_houses() {
        let mut input = wood_input();
        input.profile.sibsin_distribution.insert(Sibsin::Siksin, 2);
        input.profile.sibsin_distribution.insert(Sibsin::Pyeonin, 0);
        input.profile.planet_houses.insert(Planet::Moon, House::Fifth);
        input.profile.planet_houses.insert(Planet::Venus, House::Fifth);
        let result = SibsinHouseMatcher::evaluate(&STANDARD_TABLES, &input);
        assert_eq!(keys(&result), vec!["siksin-house5"]);
    }

    #[test]
    fn test_timing_keys() {
        let mut input = wood_input();
        input.profile.current_daeun_element = Some(Element::Water);
        input.profile.current_saeun_element = Some(Element::Metal);
        let result = TimingMatcher::evaluate(&STANDARD_TABLES, &input);
        assert_eq!(keys(&result), vec!["daeun_water-wood", "saeun_metal-wood"]);
        assert_eq!(result["daeun_water-wood"].score, 9);
    }

    #[test]
    fn test_relation_aspect_merges_natal_and_transit() {
        let mut input = wood_input();
        input.profile.relations = vec![Relation::Clash];
        input.profile.aspects.push(Aspect {
            from: Planet::Sun,
            to: Planet::Moon,
            aspect_type: AspectType::Opposition,
            orb: 100,
        });
        input.profile.active_transits.push(Transit {
            transit_planet: Planet::Mars,
            natal_planet: Planet::Sun,
            aspect_type: AspectType::Square,
            orb: 20,
        });
        let result = RelationAspectMatcher::evaluate(&STANDARD_TABLES, &input);
        assert_eq!(keys(&result), vec!["clash-opposition", "clash-square"]);
    }

    #[test]
    fn test_advanced_uses_first_yongsin() {
        let mut input = wood_input();
        input.profile.geokguk = Some("정관격".into());
        input.profile.yongsin = vec![Element::Water, Element::Fire];
        let result = AdvancedMatcher::evaluate(&STANDARD_TABLES, &input);
        // 水生木，为印
        assert_eq!(keys(&result), vec!["jeonggwan-resource"]);
        assert_eq!(result["jeonggwan-resource"].score, 9);
    }

    #[test]
    fn test_advanced_unknown_geokguk_matches_nothing() {
        let mut input = wood_input();
        input.profile.geokguk = Some("종왕격".into());
        input.profile.yongsin = vec![Element::Water];
        assert!(AdvancedMatcher::evaluate(&STANDARD_TABLES, &input).is_empty());
    }

    #[test]
    fn test_shinsal_and_asteroids() {
        let mut input = wood_input();
        input.profile.shinsal_list = vec![Shinsal::Cheoneul, Shinsal::Baekho];
        input.profile.planet_houses.insert(Planet::Jupiter, House::Ninth);
        input.profile.asteroid_houses.insert(AsteroidBody::Juno, House::Seventh);
        let shinsal = ShinsalPlanetMatcher::evaluate(&STANDARD_TABLES, &input);
        assert_eq!(keys(&shinsal), vec!["baekho-jupiter", "cheoneul-jupiter"]);
        let asteroid = AsteroidHouseMatcher::evaluate(&STANDARD_TABLES, &input);
        assert_eq!(keys(&asteroid), vec!["juno-house7"]);
    }

    #[test]
    fn test_extra_point_pairs() {
        let mut input = wood_input();
        input.profile.extra_point_signs.insert(ExtraPoint::Chiron, ZodiacSign::Aries);
        input.profile.extra_point_signs.insert(ExtraPoint::Vertex, ZodiacSign::Gemini);
        let result = ExtraPointElementMatcher::evaluate(&STANDARD_TABLES, &input);
        // 双子座属风，对应木，与日主重合
        assert_eq!(keys(&result), vec!["chiron-fire", "chiron-wood", "vertex-wood"]);
    }

    #[test]
    fn test_requirement_logic() {
        let req = InputRequirement {
            all_of: &[InputGroup::PillarElements],
            any_of: &[InputGroup::Aspects, InputGroup::ActiveTransits],
        };
        assert!(!req.is_met(&wood_input()));

        let mut input = wood_input();
        input.profile.active_transits.push(Transit {
            transit_planet: Planet::Mars,
            natal_planet: Planet::Sun,
            aspect_type: AspectType::Trine,
            orb: 0,
        });
        assert!(req.is_met(&input));
        assert!(!req.is_met(&MatrixInput::new(Element::Wood, vec![])));
    }
}
