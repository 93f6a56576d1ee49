//! # 融合矩阵输入
//!
//! - [`MatrixInput`]：引擎唯一消费的符号化档案（日主 + 八字五行 + 可选字段）
//! - [`ProfileExtras`]：全部可选字段，派生模式下作为覆盖层随出生信息一同提交
//! - [`MatrixRequest`]：直接模式 / 派生模式
//!
//! 可选字段一律以空集合或 `None` 表示缺省，缺省永不报错。

use alloc::{collections::BTreeMap, collections::BTreeSet, string::String, vec::Vec};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::{
    AspectType, AsteroidBody, Element, ExtraPoint, Gender, House, Lang, PillarSlot, Planet,
    Relation, Shinsal, Sibsin, TwelveStage, WesternElement, ZodiacSign,
};

/// 本命相位（容许度以 1/100 度计）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub from: Planet,
    pub to: Planet,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    #[serde(default)]
    pub orb: u16,
}

/// 行运相位
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Transit {
    pub transit_planet: Planet,
    pub natal_planet: Planet,
    pub aspect_type: AspectType,
    #[serde(default)]
    pub orb: u16,
}

/// 可选档案字段
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug, Default,
    Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileExtras {
    /// 十神 → 出现次数
    pub sibsin_distribution: BTreeMap<Sibsin, u8>,
    /// 柱位 → 十二运
    pub twelve_stages: BTreeMap<PillarSlot, TwelveStage>,
    pub relations: Vec<Relation>,
    /// 格局标签（自由格式）
    pub geokguk: Option<String>,
    /// 用神列表，仅首项参与计算
    pub yongsin: Vec<Element>,
    pub current_daeun_element: Option<Element>,
    pub current_saeun_element: Option<Element>,
    pub shinsal_list: Vec<Shinsal>,
    pub dominant_western_element: Option<WesternElement>,
    pub planet_houses: BTreeMap<Planet, House>,
    pub planet_signs: BTreeMap<Planet, ZodiacSign>,
    pub aspects: Vec<Aspect>,
    pub active_transits: Vec<Transit>,
    pub asteroid_houses: BTreeMap<AsteroidBody, House>,
    pub extra_point_signs: BTreeMap<ExtraPoint, ZodiacSign>,
    pub lang: Lang,
}

/// 符号化档案
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct MatrixInput {
    pub day_master_element: Element,
    pub pillar_elements: Vec<Element>,
    #[serde(flatten)]
    pub profile: ProfileExtras,
}

/// 可选输入分组，用于声明各层的输入依赖
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputGroup {
    PillarElements,
    SibsinDistribution,
    TwelveStages,
    Relations,
    Geokguk,
    Yongsin,
    CurrentDaeun,
    CurrentSaeun,
    Shinsal,
    DominantWesternElement,
    PlanetHouses,
    PlanetSigns,
    Aspects,
    ActiveTransits,
    AsteroidHouses,
    ExtraPointSigns,
}

impl MatrixInput {
    pub fn new(day_master_element: Element, pillar_elements: Vec<Element>) -> Self {
        Self { day_master_element, pillar_elements, profile: ProfileExtras::default() }
    }

    pub fn lang(&self) -> Lang {
        self.profile.lang
    }

    /// 首位用神
    pub fn primary_yongsin(&self) -> Option<Element> {
        self.profile.yongsin.first().copied()
    }

    /// 分组是否有数据
    pub fn has(&self, group: InputGroup) -> bool {
        let p = &self.profile;
        match group {
            InputGroup::PillarElements => !self.pillar_elements.is_empty(),
            InputGroup::SibsinDistribution => p.sibsin_distribution.values().any(|n| *n > 0),
            InputGroup::TwelveStages => !p.twelve_stages.is_empty(),
            InputGroup::Relations => !p.relations.is_empty(),
            InputGroup::Geokguk => p.geokguk.as_deref().is_some_and(|g| !g.trim().is_empty()),
            InputGroup::Yongsin => !p.yongsin.is_empty(),
            InputGroup::CurrentDaeun => p.current_daeun_element.is_some(),
            InputGroup::CurrentSaeun => p.current_saeun_element.is_some(),
            InputGroup::Shinsal => !p.shinsal_list.is_empty(),
            InputGroup::DominantWesternElement => p.dominant_western_element.is_some(),
            InputGroup::PlanetHouses => !p.planet_houses.is_empty(),
            InputGroup::PlanetSigns => !p.planet_signs.is_empty(),
            InputGroup::Aspects => !p.aspects.is_empty(),
            InputGroup::ActiveTransits => !p.active_transits.is_empty(),
            InputGroup::AsteroidHouses => !p.asteroid_houses.is_empty(),
            InputGroup::ExtraPointSigns => !p.extra_point_signs.is_empty(),
        }
    }

    /// 出现次数大于 0 的十神
    pub fn present_sibsin(&self) -> impl Iterator<Item = Sibsin> + '_ {
        self.profile.sibsin_distribution.iter().filter(|(_, n)| **n > 0).map(|(s, _)| *s)
    }

    /// 在宫位表或星座表中出现的行星
    pub fn placed_planets(&self) -> BTreeSet<Planet> {
        self.profile
            .planet_houses
            .keys()
            .chain(self.profile.planet_signs.keys())
            .copied()
            .collect()
    }

    /// 有行星落入的宫位
    pub fn occupied_houses(&self) -> BTreeSet<House> {
        self.profile.planet_houses.values().copied().collect()
    }

    /// 本命与行运中出现的相位类型
    pub fn aspect_types(&self) -> BTreeSet<AspectType> {
        self.profile
            .aspects
            .iter()
            .map(|a| a.aspect_type)
            .chain(self.profile.active_transits.iter().map(|t| t.aspect_type))
            .collect()
    }
}

// ============================================================================
// 派生模式
// ============================================================================

/// 出生日期
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub struct BirthDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// 出生时刻（当地时间）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, Debug, Serialize, Deserialize,
)]
pub struct BirthClock {
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
}

/// 出生信息
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub birth_date: BirthDate,
    #[serde(default)]
    pub birth_time: Option<BirthClock>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// 相对 UTC 的分钟偏移
    #[serde(default)]
    pub timezone: Option<i16>,
}

/// 计算请求
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MatrixRequest {
    /// 直接提供符号化档案
    Direct(MatrixInput),
    /// 由出生信息推算八字，`extras` 提供其余可选字段
    Derived {
        birth: BirthInput,
        #[serde(default)]
        extras: ProfileExtras,
    },
}
