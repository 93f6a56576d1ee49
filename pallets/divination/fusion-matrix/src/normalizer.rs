//! # 档案归一化
//!
//! 直接模式原样透传；派生模式调用 [`SajuCalculator`] 推算四柱，
//! 再由命盘得出日主、八字五行与十神分布。
//!
//! 计算器失败映射为 [`ComputationError::Calculation`]，日主缺失映射为
//! [`ComputationError::MissingDayMaster`]，绝不以默认值代替。

use alloc::{collections::BTreeMap, vec::Vec};
use core::marker::PhantomData;
use codec::{Decode, DecodeWithMemTracking, Encode};
use scale_info::TypeInfo;

use crate::input::{BirthClock, BirthDate, BirthInput, MatrixInput, MatrixRequest, ProfileExtras};
use crate::types::{Element, Gender, PillarSlot, Relation, Sibsin, TwelveStage};

/// 未提供出生时刻时的默认值（正午）
pub const DEFAULT_BIRTH_TIME: BirthClock = BirthClock { hour: 12, minute: 0 };

/// 未提供时区时的默认偏移（UTC+09:00）
pub const DEFAULT_UTC_OFFSET_MINUTES: i16 = 540;

/// 计算器错误
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug)]
pub enum SajuError {
    /// 日期非法或超出支持范围
    InvalidDate,
    /// 时刻非法
    InvalidTime,
    /// 时区偏移超出 -12:00..=+14:00
    InvalidTimezone,
    /// 其他计算失败
    Unavailable,
}

/// 归一化错误
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug)]
pub enum ComputationError {
    Calculation(SajuError),
    MissingDayMaster,
}

impl From<SajuError> for ComputationError {
    fn from(e: SajuError) -> Self {
        ComputationError::Calculation(e)
    }
}

/// 补全默认值后的出生信息
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResolvedBirth {
    pub date: BirthDate,
    pub time: BirthClock,
    pub gender: Gender,
    pub utc_offset_minutes: i16,
}

/// 单个干或支的解读
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GlyphReading {
    pub element: Option<Element>,
    /// 相对日主的十神（日干本身为 `None`）
    pub sibsin: Option<Sibsin>,
}

/// 一柱
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PillarReading {
    pub stem: GlyphReading,
    pub branch: GlyphReading,
}

/// 计算器输出的命盘
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SajuChart {
    /// 年、月、日、时
    pub pillars: [PillarReading; 4],
    /// 可选：各柱十二运
    pub twelve_stages: BTreeMap<PillarSlot, TwelveStage>,
    /// 可选：命盘内的干支关系
    pub relations: Vec<Relation>,
}

impl SajuChart {
    pub fn pillar(&self, slot: PillarSlot) -> &PillarReading {
        &self.pillars[slot as usize]
    }

    pub fn day_master(&self) -> Option<Element> {
        self.pillar(PillarSlot::Day).stem.element
    }

    fn glyphs(&self) -> impl Iterator<Item = &GlyphReading> + '_ {
        self.pillars.iter().flat_map(|p| [&p.stem, &p.branch])
    }

    /// 八个干支的五行（缺失者略过）
    pub fn pillar_elements(&self) -> Vec<Element> {
        self.glyphs().filter_map(|g| g.element).collect()
    }

    /// 十神分布（缺失者略过）
    pub fn sibsin_distribution(&self) -> BTreeMap<Sibsin, u8> {
        let mut distribution = BTreeMap::new();
        for sibsin in self.glyphs().filter_map(|g| g.sibsin) {
            let count: &mut u8 = distribution.entry(sibsin).or_default();
            *count = count.saturating_add(1);
        }
        distribution
    }
}

/// 八字计算器
pub trait SajuCalculator {
    fn calculate(birth: &ResolvedBirth) -> Result<SajuChart, SajuError>;
}

/// 档案归一化器
pub struct ProfileNormalizer<C>(PhantomData<C>);

impl<C: SajuCalculator> ProfileNormalizer<C> {
    pub fn normalize(request: MatrixRequest) -> Result<MatrixInput, ComputationError> {
        match request {
            MatrixRequest::Direct(input) => Ok(input),
            MatrixRequest::Derived { birth, extras } => Self::derive(&birth, extras),
        }
    }

    pub fn resolve(birth: &BirthInput) -> ResolvedBirth {
        ResolvedBirth {
            date: birth.birth_date,
            time: birth.birth_time.unwrap_or(DEFAULT_BIRTH_TIME),
            gender: birth.gender.unwrap_or_default(),
            utc_offset_minutes: birth.timezone.unwrap_or(DEFAULT_UTC_OFFSET_MINUTES),
        }
    }

    /// 由出生信息推算档案，`extras` 中的二至十层字段原样保留
    pub fn derive(birth: &BirthInput, extras: ProfileExtras) -> Result<MatrixInput, ComputationError> {
        let resolved = Self::resolve(birth);
        let chart = C::calculate(&resolved).map_err(|e| {
            log::warn!("⚠️ 融合矩阵: 八字推算失败 {:?} ({:?})", e, resolved.date);
            ComputationError::Calculation(e)
        })?;

        let day_master = chart.day_master().ok_or_else(|| {
            log::warn!("⚠️ 融合矩阵: 命盘缺少日干 ({:?})", resolved.date);
            ComputationError::MissingDayMaster
        })?;

        let mut profile = extras;
        profile.sibsin_distribution = chart.sibsin_distribution();
        if profile.twelve_stages.is_empty() {
            profile.twelve_stages = chart.twelve_stages.clone();
        }
        if profile.relations.is_empty() {
            profile.relations = chart.relations.clone();
        }

        Ok(MatrixInput { day_master_element: day_master, pillar_elements: chart.pillar_elements(), profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Planet;
    use crate::types::House;

    fn glyph(element: Element, sibsin: Option<Sibsin>) -> GlyphReading {
        GlyphReading { element: Some(element), sibsin }
    }

    /// 固定命盘：丙午 庚寅 壬子 癸卯
    struct FixedChart;

    impl SajuCalculator for FixedChart {
        fn calculate(_birth: &ResolvedBirth) -> Result<SajuChart, SajuError> {
            let mut chart = SajuChart::default();
            chart.pillars = [
                PillarReading {
                    stem: glyph(Element::Fire, Some(Sibsin::Pyeonjae)),
                    branch: glyph(Element::Fire, Some(Sibsin::Jeongjae)),
                },
                PillarReading {
                    stem: glyph(Element::Metal, Some(Sibsin::Pyeonin)),
                    branch: glyph(Element::Wood, Some(Sibsin::Siksin)),
                },
                PillarReading {
                    stem: glyph(Element::Water, None),
                    branch: glyph(Element::Water, Some(Sibsin::Geopjae)),
                },
                PillarReading {
                    stem: glyph(Element::Water, Some(Sibsin::Geopjae)),
                    // 缺失的时支十神
                    branch: glyph(Element::Wood, None),
                },
            ];
            chart.relations = vec![Relation::Clash];
            Ok(chart)
        }
    }

    struct NoDayStem;

    impl SajuCalculator for NoDayStem {
        fn calculate(_birth: &ResolvedBirth) -> Result<SajuChart, SajuError> {
            Ok(SajuChart::default())
        }
    }

    struct Failing;

    impl SajuCalculator for Failing {
        fn calculate(_birth: &ResolvedBirth) -> Result<SajuChart, SajuError> {
            Err(SajuError::InvalidDate)
        }
    }

    /// 记录收到的出生信息
    struct Echo;

    impl SajuCalculator for Echo {
        fn calculate(birth: &ResolvedBirth) -> Result<SajuChart, SajuError> {
            assert_eq!(birth.time, DEFAULT_BIRTH_TIME);
            assert_eq!(birth.gender, Gender::Male);
            assert_eq!(birth.utc_offset_minutes, 540);
            FixedChart::calculate(birth)
        }
    }

    fn birth() -> BirthInput {
        BirthInput {
            birth_date: BirthDate { year: 1990, month: 5, day: 15 },
            birth_time: None,
            gender: None,
            timezone: None,
        }
    }

    #[test]
    fn test_direct_mode_passes_through() {
        let input = MatrixInput::new(Element::Wood, vec![Element::Wood]);
        let normalized = ProfileNormalizer::<Failing>::normalize(MatrixRequest::Direct(input.clone())).unwrap();
        assert_eq!(normalized, input);
    }

    #[test]
    fn test_derived_profile() {
        let input = ProfileNormalizer::<FixedChart>::derive(&birth(), ProfileExtras::default()).unwrap();
        assert_eq!(input.day_master_element, Element::Water);
        assert_eq!(input.pillar_elements.len(), 8);
        assert_eq!(input.profile.sibsin_distribution.get(&Sibsin::Geopjae), Some(&2));
        assert_eq!(input.profile.sibsin_distribution.values().map(|n| *n as u32).sum::<u32>(), 6);
        assert_eq!(input.profile.relations, vec![Relation::Clash]);
    }

    #[test]
    fn test_defaults_applied() {
        assert!(ProfileNormalizer::<Echo>::derive(&birth(), ProfileExtras::default()).is_ok());
    }

    #[test]
    fn test_overlay_is_kept() {
        let mut extras = ProfileExtras::default();
        extras.yongsin = vec![Element::Metal];
        extras.relations = vec![Relation::Harm];
        extras.planet_houses.insert(Planet::Sun, House::Fifth);
        let input = ProfileNormalizer::<FixedChart>::derive(&birth(), extras).unwrap();
        assert_eq!(input.primary_yongsin(), Some(Element::Metal));
        assert_eq!(input.profile.relations, vec![Relation::Harm]);
        assert_eq!(input.profile.planet_houses.len(), 1);
    }

    #[test]
    fn test_missing_day_master_is_an_error() {
        let result = ProfileNormalizer::<NoDayStem>::derive(&birth(), ProfileExtras::default());
        assert_eq!(result, Err(ComputationError::MissingDayMaster));
    }

    #[test]
    fn test_calculator_failure_maps() {
        let result = ProfileNormalizer::<Failing>::normalize(MatrixRequest::Derived {
            birth: birth(),
            extras: ProfileExtras::default(),
        });
        assert_eq!(result, Err(ComputationError::Calculation(SajuError::InvalidDate)));
    }
}
