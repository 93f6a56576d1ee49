//! # 十层评分网格
//!
//! 行主序平铺，每行一条注释标明行维度取值。
//! 分值 1-10，0 表示该组合无解读。

use crate::interaction::{InteractionTable, Layer};
use crate::types::{
    AspectType, AsteroidBody, Element, ElementRole, ExtraPoint, Geokguk, House, Planet, Relation,
    Shinsal, Sibsin, TimingKey, TwelveStage,
};

/// 五行 × 五行（对角线为空）
///
/// 列：wood fire earth metal water
const ELEMENT_CORE: [u8; 25] = [
     0,  7,  6,  2,  9, // wood
     9,  0,  7,  6,  2, // fire
     3,  8,  0,  7,  5, // earth
     6,  2,  9,  0,  7, // metal
     7,  4,  1,  9,  0, // water
];

/// 十神 × 行星
///
/// 列：sun moon mercury venus mars jupiter saturn uranus neptune pluto northNode southNode
const SIBSIN_PLANET: [u8; 120] = [
     9,  6,  5,  7,  6,  7,  4,  5,  5,  4,  6,  4, // bigyeon
     7,  5,  4,  6,  6,  6,  3,  4,  4,  3,  5,  5, // geopjae
     7,  9,  9, 10,  5, 10,  5,  6,  6,  5,  7,  5, // siksin
     5,  5,  7,  6,  3,  6,  3,  7,  4,  3,  5,  3, // sanggwan
     6,  6,  7,  9,  4,  7,  4,  5,  5,  6,  6,  4, // pyeonjae
     7,  7,  6, 10,  5,  8,  5,  6,  6,  5, 10,  5, // jeongjae
     5,  5,  4,  6,  5,  6,  5,  4,  4,  6,  5,  3, // pyeongwan
    10,  7,  6,  8,  5, 10,  8,  6,  6,  5, 10,  5, // jeonggwan
     5,  7,  4,  6,  3,  6,  3,  6,  7,  3,  5,  6, // pyeonin
     7, 10,  6,  8,  5, 10,  5,  6,  8,  5,  7,  5, // jeongin
];

/// 十神 × 宫位
///
/// 列：1 2 3 4 5 6 7 8 9 10 11 12
const SIBSIN_HOUSE: [u8; 120] = [
     9,  5,  5,  6,  5,  4,  6,  4,  5,  6,  7,  4, // bigyeon
     7,  4,  4,  5,  4,  3,  5,  3,  4,  5,  4,  3, // geopjae
     7,  6,  8,  7,  9,  5,  7,  5,  6,  7,  6,  5, // siksin
     5,  4,  7,  5,  6,  3,  5,  3,  4,  5,  4,  3, // sanggwan
     6,  7,  5,  6,  5,  4,  6,  7,  5,  6,  8,  4, // pyeonjae
     7,  9,  6,  7,  6,  5, 10,  5,  6,  7,  6,  5, // jeongjae
     5,  4,  4,  5,  4,  6,  5,  5,  4,  7,  4,  3, // pyeongwan
     7,  6,  6,  7,  6,  7, 10,  5,  6, 10,  6,  5, // jeonggwan
     5,  4,  4,  7,  4,  3,  5,  3,  7,  5,  4,  6, // pyeonin
     7,  6,  6, 10,  6,  5,  7,  5,  8,  7,  6,  5, // jeongin
];

/// 运程 × 日主五行
///
/// 列：wood fire earth metal water
const TIMING: [u8; 50] = [
     6,  9,  2,  6,  8, // daeun_wood
     8,  6,  9,  2,  6, // daeun_fire
     6,  8,  6,  9,  2, // daeun_earth
     2,  6,  8,  6,  9, // daeun_metal
     9,  2,  6,  8,  6, // daeun_water
     6,  8,  3,  6,  7, // saeun_wood
     7,  6,  8,  3,  6, // saeun_fire
     6,  7,  6,  8,  3, // saeun_earth
     3,  6,  7,  6,  8, // saeun_metal
     8,  3,  6,  7,  6, // saeun_water
];

/// 干支关系 × 相位
///
/// 列：conjunction sextile square trine opposition quincunx semisextile semisquare sesquiquadrate quintile biquintile
const RELATION_ASPECT: [u8; 132] = [
     8,  8,  5,  9,  5,  5,  7,  5,  5,  8,  8, // stemCombine
     2,  5,  1,  5,  1,  2,  3,  2,  2,  5,  5, // stemClash
     8,  8,  5,  9,  5,  5,  7,  5,  5,  8,  8, // sixCombine
     9,  9,  5, 10,  5,  6,  8,  6,  6,  9,  9, // tripleCombine
     6,  7,  5,  8,  5,  5,  6,  5,  5,  7,  7, // halfCombine
     8,  8,  5,  9,  5,  5,  7,  5,  5,  8,  8, // directionalCombine
     6,  7,  5,  8,  5,  5,  6,  5,  5,  7,  7, // hiddenCombine
     1,  4,  1,  5,  1,  1,  2,  1,  1,  4,  4, // clash
     2,  5,  1,  5,  1,  2,  3,  2,  2,  5,  5, // punishment
     4,  5,  2,  5,  2,  3,  4,  3,  3,  5,  5, // destruction
     4,  5,  2,  5,  2,  3,  4,  3,  3,  5,  5, // harm
     2,  5,  1,  5,  1,  2,  3,  2,  2,  5,  5, // wonjin
];

/// 十二运 × 宫位
///
/// 列：1 2 3 4 5 6 7 8 9 10 11 12
const STAGE_HOUSE: [u8; 144] = [
     9,  7,  7,  8,  8,  6,  8,  6,  7,  8,  7,  6, // jangsaeng
     6,  5,  5,  6,  7,  4,  8,  4,  5,  6,  5,  4, // mokyok
     7,  6,  6,  7,  6,  5,  7,  5,  6,  7,  6,  5, // gwandae
     8,  7,  7,  8,  7,  6,  8,  6,  7,  8,  7,  6, // geonrok
     9,  8,  8,  9,  8,  7,  9,  7,  8,  9,  8,  7, // jewang
     5,  4,  4,  5,  4,  3,  5,  3,  4,  5,  4,  3, // soe
     4,  3,  3,  4,  3,  2,  4,  2,  3,  4,  3,  2, // byeong
     3,  2,  2,  3,  2,  1,  3,  1,  2,  3,  2,  1, // sa
     5,  7,  4,  5,  4,  3,  5,  6,  4,  5,  4,  3, // myo
     3,  2,  2,  3,  2,  1,  3,  1,  4,  3,  2,  3, // jeol
     6,  5,  5,  6,  5,  4,  6,  4,  5,  6,  5,  4, // tae
     7,  6,  6,  7,  6,  5,  7,  5,  6,  7,  6,  5, // yang
];

/// 格局 × 用神十神大类
///
/// 列：companion output wealth officer resource
const ADVANCED: [u8; 50] = [
     5,  2,  8,  6,  9, // jeonggwan
     6,  9,  2,  3,  8, // pyeongwan
     6,  5,  2,  9,  6, // jeongin
     5,  2,  8,  7,  4, // pyeonin
     7,  6,  9,  4,  2, // siksin
     5,  5,  8,  1,  9, // sanggwan
     2,  8,  6,  9,  4, // jeongjae
     2,  8,  6,  8,  5, // pyeonjae
     3,  7,  8,  8,  3, // geonrok
     2,  6,  6, 10,  3, // yangin
];

/// 神煞 × 行星
///
/// 列：sun moon mercury venus mars jupiter saturn uranus neptune pluto northNode southNode
const SHINSAL_PLANET: [u8; 432] = [
     5,  5,  4,  6,  1,  6,  3,  4,  4,  1,  5,  3, // geopsal
     5,  5,  4,  6,  3,  6,  1,  5,  4,  3,  5,  3, // jaesal
     5,  5,  4,  6,  3,  6,  1,  5,  4,  3,  5,  3, // cheonsal
     7,  9,  8,  8,  5,  8,  5,  6,  6,  5,  7,  5, // jisal
     5,  6,  4,  7,  3,  6,  3,  4,  4,  3,  5,  3, // yeonsal
     5,  6,  4,  6,  3,  6,  1,  4,  4,  3,  5,  3, // wolsal
     5,  5,  4,  6,  3,  6,  3,  4,  5,  3,  5,  1, // mangsin
     9,  7,  6,  8,  7,  8,  5,  6,  6,  5,  7,  5, // jangseong
     9,  7,  6,  8,  5, 10,  5,  6,  6,  5,  7,  5, // banan
     7,  7,  8,  8,  5,  8,  5,  8,  6,  5,  9,  5, // yeokma
     5,  5,  4,  6,  3,  6,  1,  4,  4,  3,  5,  1, // yukhae
     7,  7,  6,  8,  5, 10,  5,  6,  8,  5,  7,  5, // hwagae
     9,  7,  6,  8,  5, 10,  5,  6,  6,  5,  9,  5, // cheoneul
     7,  9,  6,  8,  5, 10,  5,  6,  6,  5,  7,  5, // cheondeok
     7,  9,  6, 10,  5,  8,  5,  6,  6,  5,  7,  5, // woldeok
     7,  7,  8,  8,  5,  8,  5,  6,  6,  5,  7,  5, // munchang
     7,  7,  8,  8,  5, 10,  5,  6,  6,  5,  7,  5, // hakdang
     7,  7,  6, 10,  5,  8,  5,  6,  6,  5,  7,  5, // geumyeo
     7,  7,  6, 10,  5, 10,  5,  6,  6,  5,  7,  5, // amrok
     9,  7,  6,  8,  5,  8,  5,  6,  6,  7,  7,  5, // taegeuk
     7,  9,  6, 10,  5,  8,  5,  6,  6,  5,  7,  5, // cheonju
     7,  7,  6,  8,  5, 10,  5,  6,  6,  5,  7,  5, // bokseong
     9,  7,  6,  8,  5,  8,  7,  6,  6,  5,  7,  5, // cheongwan
     7,  7,  8,  8,  5,  8,  5,  6,  8,  5,  7,  5, // mungok
     7,  7,  8,  8,  5,  8,  7,  6,  6,  5,  7,  5, // gwangwi
     7,  9,  6,  8,  5,  8,  5,  6,  8,  5,  7,  5, // cheonui
     5,  5,  4,  6,  1,  6,  3,  4,  4,  1,  5,  3, // yangin
     5,  5,  4,  6,  1,  6,  1,  4,  4,  1,  5,  3, // baekho
     5,  5,  4,  6,  1,  6,  1,  4,  4,  3,  5,  3, // goegang
     5,  5,  4,  7,  1,  6,  3,  4,  4,  3,  5,  3, // hongyeom
     5,  5,  4,  6,  3,  6,  3,  5,  5,  3,  5,  3, // gwimun
     5,  5,  4,  6,  3,  6,  1,  4,  4,  3,  5,  1, // gosin
     5,  6,  4,  6,  3,  6,  1,  4,  4,  3,  5,  3, // gwasuk
     5,  5,  5,  6,  1,  6,  3,  4,  4,  3,  5,  3, // hyeonchim
     5,  5,  4,  6,  3,  6,  1,  4,  4,  3,  5,  3, // geupgak
     5,  5,  4,  6,  1,  6,  3,  4,  4,  1,  5,  3, // wonjinsal
];

/// 小行星 × 宫位
///
/// 列：1 2 3 4 5 6 7 8 9 10 11 12
const ASTEROID_HOUSE: [u8; 48] = [
     6,  7,  5,  9,  5,  6,  6,  4,  5,  6,  5,  4, // ceres
     6,  5,  8,  6,  5,  4,  6,  4,  7,  8,  5,  4, // pallas
     6,  5,  5,  6,  7,  4,  9,  6,  5,  6,  5,  4, // juno
     6,  5,  5,  6,  5,  7,  6,  4,  7,  6,  5,  6, // vesta
];

/// 特殊点 × 五行
///
/// 列：wood fire earth metal water
const EXTRA_POINT_ELEMENT: [u8; 90] = [
     5,  5,  3,  6,  8, // chiron
     5,  7,  4,  4,  2, // pholus
     4,  4,  2,  5,  7, // lilith
     5,  7,  4,  4,  2, // trueLilith
     7,  5,  8, 10,  7, // selena
     5,  8, 10,  7,  7, // partOfFortune
     7,  9,  6,  6,  4, // partOfSpirit
     6,  8,  5,  5,  3, // partOfEros
     6,  4,  7,  9,  6, // partOfMarriage
     6,  6,  4,  7,  9, // vertex
     3,  6,  8,  5,  5, // antiVertex
     9,  6,  6,  4,  7, // eastPoint
     9,  6,  6,  4,  7, // ascendant
     6,  4,  7,  9,  6, // midheaven
     5,  3,  6,  8,  5, // descendant
     3,  6,  8,  5,  5, // imumCoeli
     5,  5,  3,  6,  8, // prenatalSyzygy
     5,  7,  4,  4,  2, // priapus
];

/// 十层评分表集合
pub struct FusionTables {
    pub element_core: InteractionTable<Element, Element>,
    pub sibsin_planet: InteractionTable<Sibsin, Planet>,
    pub sibsin_house: InteractionTable<Sibsin, House>,
    pub timing: InteractionTable<TimingKey, Element>,
    pub relation_aspect: InteractionTable<Relation, AspectType>,
    pub stage_house: InteractionTable<TwelveStage, House>,
    pub advanced: InteractionTable<Geokguk, ElementRole>,
    pub shinsal_planet: InteractionTable<Shinsal, Planet>,
    pub asteroid_house: InteractionTable<AsteroidBody, House>,
    pub extra_point_element: InteractionTable<ExtraPoint, Element>,
}

/// 内置评分表
pub static STANDARD_TABLES: FusionTables = FusionTables {
    element_core: InteractionTable::new(Layer::ElementCore, &ELEMENT_CORE),
    sibsin_planet: InteractionTable::new(Layer::SibsinPlanet, &SIBSIN_PLANET),
    sibsin_house: InteractionTable::new(Layer::SibsinHouse, &SIBSIN_HOUSE),
    timing: InteractionTable::new(Layer::Timing, &TIMING),
    relation_aspect: InteractionTable::new(Layer::RelationAspect, &RELATION_ASPECT),
    stage_house: InteractionTable::new(Layer::StageHouse, &STAGE_HOUSE),
    advanced: InteractionTable::new(Layer::Advanced, &ADVANCED),
    shinsal_planet: InteractionTable::new(Layer::ShinsalPlanet, &SHINSAL_PLANET),
    asteroid_house: InteractionTable::new(Layer::AsteroidHouse, &ASTEROID_HOUSE),
    extra_point_element: InteractionTable::new(Layer::ExtraPointElement, &EXTRA_POINT_ELEMENT),
};

impl FusionTables {
    pub fn standard() -> &'static FusionTables {
        &STANDARD_TABLES
    }

    /// 每层已编写单元数（按层序）
    pub fn cell_counts(&self) -> [(Layer, usize); 10] {
        [
            (Layer::ElementCore, self.element_core.cell_count()),
            (Layer::SibsinPlanet, self.sibsin_planet.cell_count()),
            (Layer::SibsinHouse, self.sibsin_house.cell_count()),
            (Layer::Timing, self.timing.cell_count()),
            (Layer::RelationAspect, self.relation_aspect.cell_count()),
            (Layer::StageHouse, self.stage_house.cell_count()),
            (Layer::Advanced, self.advanced.cell_count()),
            (Layer::ShinsalPlanet, self.shinsal_planet.cell_count()),
            (Layer::AsteroidHouse, self.asteroid_house.cell_count()),
            (Layer::ExtraPointElement, self.extra_point_element.cell_count()),
        ]
    }
}
