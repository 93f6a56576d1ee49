//! # 节气四柱计算器
//!
//! [`SajuCalculator`] 的参考实现，供派生模式端到端使用。
//!
//! ## 规则
//!
//! - 年柱以立春交节时刻为界
//! - 月柱以各月“节”的交节时刻为界，五虎遁定月干
//! - 日柱由儒略日数推算：`(JDN + 49) mod 60`
//! - 时柱按现代子时（23:00 起算，不换日），五鼠遁定时干
//! - 出生时刻按时区折算为 UTC 后与节气时刻表比较，日柱、时柱取当地时间
//!
//! ## 天干地支索引
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)

use alloc::{collections::BTreeMap, collections::BTreeSet, vec::Vec};

use crate::input::{BirthClock, BirthDate};
use crate::normalizer::{GlyphReading, PillarReading, ResolvedBirth, SajuCalculator, SajuChart, SajuError};
use crate::solar_terms;
use crate::types::{Element, PillarSlot, Relation, Sibsin, TwelveStage};

/// 支持的年份范围
pub const MIN_YEAR: u16 = solar_terms::FIRST_YEAR;
pub const MAX_YEAR: u16 = solar_terms::LAST_YEAR;

/// 时区偏移范围（分钟）
pub const MIN_UTC_OFFSET: i16 = -720;
pub const MAX_UTC_OFFSET: i16 = 840;

const MINUTES_PER_DAY: i64 = 1440;

/// 地支五行
const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water, // 子
    Element::Earth, // 丑
    Element::Wood,  // 寅
    Element::Wood,  // 卯
    Element::Earth, // 辰
    Element::Fire,  // 巳
    Element::Fire,  // 午
    Element::Earth, // 未
    Element::Metal, // 申
    Element::Metal, // 酉
    Element::Earth, // 戌
    Element::Water, // 亥
];

/// 地支本气藏干
const BRANCH_MAIN_STEM: [u8; 12] = [9, 5, 0, 1, 4, 2, 3, 5, 6, 7, 4, 8];

/// 各天干长生所在地支
const CHANGSHENG_BRANCH: [u8; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

/// 天干五合
const STEM_COMBINE_PAIRS: [(u8, u8); 5] = [
    (0, 5), // 甲己合
    (1, 6), // 乙庚合
    (2, 7), // 丙辛合
    (3, 8), // 丁壬合
    (4, 9), // 戊癸合
];

/// 天干相冲
const STEM_CLASH_PAIRS: [(u8, u8); 4] = [
    (0, 6), // 甲庚冲
    (1, 7), // 乙辛冲
    (2, 8), // 丙壬冲
    (3, 9), // 丁癸冲
];

/// 地支六合
const BRANCH_SIX_COMBINE_PAIRS: [(u8, u8); 6] = [
    (0, 1),  // 子丑合
    (2, 11), // 寅亥合
    (3, 10), // 卯戌合
    (4, 9),  // 辰酉合
    (5, 8),  // 巳申合
    (6, 7),  // 午未合
];

/// 地支六冲
const BRANCH_CLASH_PAIRS: [(u8, u8); 6] = [
    (0, 6),  // 子午冲
    (1, 7),  // 丑未冲
    (2, 8),  // 寅申冲
    (3, 9),  // 卯酉冲
    (4, 10), // 辰戌冲
    (5, 11), // 巳亥冲
];

/// 地支相刑（含自刑）
const BRANCH_PUNISHMENT_PAIRS: [(u8, u8); 11] = [
    (2, 5),   // 寅刑巳
    (5, 8),   // 巳刑申
    (8, 2),   // 申刑寅
    (1, 10),  // 丑刑戌
    (10, 7),  // 戌刑未
    (7, 1),   // 未刑丑
    (0, 3),   // 子卯刑
    (4, 4),   // 辰自刑
    (6, 6),   // 午自刑
    (9, 9),   // 酉自刑
    (11, 11), // 亥自刑
];

/// 地支相破
const BRANCH_DESTRUCTION_PAIRS: [(u8, u8); 6] = [
    (0, 9),  // 子酉破
    (1, 4),  // 丑辰破
    (2, 11), // 寅亥破
    (3, 6),  // 卯午破
    (5, 8),  // 巳申破
    (7, 10), // 未戌破
];

/// 地支相害
const BRANCH_HARM_PAIRS: [(u8, u8); 6] = [
    (0, 7),  // 子未害
    (1, 6),  // 丑午害
    (2, 5),  // 寅巳害
    (3, 4),  // 卯辰害
    (8, 11), // 申亥害
    (9, 10), // 酉戌害
];

/// 地支元嗔
const BRANCH_WONJIN_PAIRS: [(u8, u8); 6] = [
    (0, 7),  // 子未
    (1, 6),  // 丑午
    (2, 9),  // 寅酉
    (3, 8),  // 卯申
    (4, 11), // 辰亥
    (5, 10), // 巳戌
];

/// 三合局（生、旺、墓），旺支在中
const TRIPLE_COMBINE_GROUPS: [[u8; 3]; 4] = [
    [8, 0, 4],  // 申子辰 水局
    [11, 3, 7], // 亥卯未 木局
    [2, 6, 10], // 寅午戌 火局
    [5, 9, 1],  // 巳酉丑 金局
];

/// 三会方局
const DIRECTIONAL_GROUPS: [[u8; 3]; 4] = [
    [2, 3, 4],   // 寅卯辰 东方
    [5, 6, 7],   // 巳午未 南方
    [8, 9, 10],  // 申酉戌 西方
    [11, 0, 1],  // 亥子丑 北方
];

/// 天干
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TianGan(pub u8);

impl TianGan {
    pub fn element(self) -> Element {
        match self.0 / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    pub fn is_yang(self) -> bool {
        self.0 % 2 == 0
    }
}

/// 地支
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DiZhi(pub u8);

impl DiZhi {
    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[usize::from(self.0 % 12)]
    }

    /// 本气藏干
    pub fn main_stem(self) -> TianGan {
        TianGan(BRANCH_MAIN_STEM[usize::from(self.0 % 12)])
    }
}

/// 干支
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GanZhi {
    pub gan: TianGan,
    pub zhi: DiZhi,
}

impl GanZhi {
    /// 由六十甲子序号构造
    pub fn from_index(index: u32) -> Self {
        Self { gan: TianGan((index % 10) as u8), zhi: DiZhi((index % 12) as u8) }
    }
}

/// 四柱（年、月、日、时）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FourPillars {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl FourPillars {
    pub fn as_array(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// 公历日期的儒略日数（日期须已校验）
fn julian_day_number(date: &BirthDate) -> u32 {
    let a = (14 - u32::from(date.month)) / 12;
    let y = u32::from(date.year) + 4800 - a;
    let m = u32::from(date.month) + 12 * a - 3;
    u32::from(date.day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

fn validate(birth: &ResolvedBirth) -> Result<(), SajuError> {
    let date = &birth.date;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year) {
        return Err(SajuError::InvalidDate);
    }
    if date.day == 0 || date.day > days_in_month(date.year, date.month) {
        return Err(SajuError::InvalidDate);
    }
    if birth.time.hour > 23 || birth.time.minute > 59 {
        return Err(SajuError::InvalidTime);
    }
    if !(MIN_UTC_OFFSET..=MAX_UTC_OFFSET).contains(&birth.utc_offset_minutes) {
        return Err(SajuError::InvalidTimezone);
    }
    Ok(())
}

/// 出生时刻（UTC 分钟，以儒略日数计）
fn utc_minutes(birth: &ResolvedBirth) -> i64 {
    i64::from(julian_day_number(&birth.date)) * MINUTES_PER_DAY
        + i64::from(birth.time.hour) * 60
        + i64::from(birth.time.minute)
        - i64::from(birth.utc_offset_minutes)
}

/// 出生时刻是否已过本月“节”
fn past_jie(birth: &ResolvedBirth) -> Result<bool, SajuError> {
    let date = &birth.date;
    let offset = solar_terms::jie_minute(date.year, date.month).ok_or(SajuError::InvalidDate)?;
    let month_start = BirthDate { day: 1, ..*date };
    let jie_at = i64::from(julian_day_number(&month_start)) * MINUTES_PER_DAY + i64::from(offset);
    Ok(utc_minutes(birth) >= jie_at)
}

/// 排四柱（输入须已校验）
fn four_pillars(birth: &ResolvedBirth) -> Result<FourPillars, SajuError> {
    let (date, time) = (&birth.date, &birth.time);
    let past_jie = past_jie(birth)?;

    // 立春前属上一年
    let before_lichun = date.month == 1 || (date.month == 2 && !past_jie);
    let solar_year = if before_lichun { date.year - 1 } else { date.year };
    let year = GanZhi::from_index((u32::from(solar_year) + 56) % 60);

    let month_branch = if past_jie { date.month % 12 } else { (date.month + 11) % 12 };
    let yin_stem = (year.gan.0 % 5) * 2 + 2;
    let month = GanZhi {
        gan: TianGan((yin_stem + (month_branch + 10) % 12) % 10),
        zhi: DiZhi(month_branch),
    };

    let day = GanZhi::from_index((julian_day_number(date) + 49) % 60);

    let hour_branch = ((time.hour + 1) / 2) % 12;
    let hour = GanZhi {
        gan: TianGan(((day.gan.0 % 5) * 2 + hour_branch) % 10),
        zhi: DiZhi(hour_branch),
    };

    Ok(FourPillars { year, month, day, hour })
}

/// 以日干为准的十神
pub fn sibsin_of(day: TianGan, other: TianGan) -> Sibsin {
    let role = day.element().role_of(other.element());
    Sibsin::from_role(role, day.is_yang() == other.is_yang())
}

/// 日干在某地支的十二运（阳干顺行，阴干逆行）
pub fn twelve_stage(day: TianGan, zhi: DiZhi) -> TwelveStage {
    let start = CHANGSHENG_BRANCH[usize::from(day.0 % 10)];
    let branch = zhi.0 % 12;
    let offset = if day.is_yang() { (branch + 12 - start) % 12 } else { (start + 12 - branch) % 12 };
    TwelveStage::ALL[usize::from(offset)]
}

fn in_pairs(pairs: &[(u8, u8)], a: u8, b: u8) -> bool {
    pairs.iter().any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

/// 命盘内的干支关系（去重，按枚举顺序）
pub fn detect_relations(pillars: &FourPillars) -> Vec<Relation> {
    let all = pillars.as_array();
    let mut found = BTreeSet::new();

    for i in 0..all.len() {
        for j in (i + 1)..all.len() {
            let (s1, s2) = (all[i].gan.0, all[j].gan.0);
            if in_pairs(&STEM_COMBINE_PAIRS, s1, s2) {
                found.insert(Relation::StemCombine);
            }
            if in_pairs(&STEM_CLASH_PAIRS, s1, s2) {
                found.insert(Relation::StemClash);
            }

            let (b1, b2) = (all[i].zhi, all[j].zhi);
            let checks = [
                (&BRANCH_SIX_COMBINE_PAIRS[..], Relation::SixCombine),
                (&BRANCH_CLASH_PAIRS[..], Relation::Clash),
                (&BRANCH_PUNISHMENT_PAIRS[..], Relation::Punishment),
                (&BRANCH_DESTRUCTION_PAIRS[..], Relation::Destruction),
                (&BRANCH_HARM_PAIRS[..], Relation::Harm),
                (&BRANCH_WONJIN_PAIRS[..], Relation::Wonjin),
            ];
            for (pairs, relation) in checks {
                if in_pairs(pairs, b1.0, b2.0) {
                    found.insert(relation);
                }
            }

            // 暗合：本气藏干相合而地支不六合
            if b1 != b2
                && !in_pairs(&BRANCH_SIX_COMBINE_PAIRS, b1.0, b2.0)
                && in_pairs(&STEM_COMBINE_PAIRS, b1.main_stem().0, b2.main_stem().0)
            {
                found.insert(Relation::HiddenCombine);
            }
        }
    }

    let branches: BTreeSet<u8> = all.iter().map(|p| p.zhi.0).collect();
    for group in TRIPLE_COMBINE_GROUPS {
        let present = group.iter().filter(|b| branches.contains(*b)).count();
        if present == 3 {
            found.insert(Relation::TripleCombine);
        } else if present == 2 && branches.contains(&group[1]) {
            found.insert(Relation::HalfCombine);
        }
    }
    for group in DIRECTIONAL_GROUPS {
        if group.iter().all(|b| branches.contains(b)) {
            found.insert(Relation::DirectionalCombine);
        }
    }

    found.into_iter().collect()
}

/// 节气四柱计算器
pub struct SolarTermCalculator;

impl SajuCalculator for SolarTermCalculator {
    fn calculate(birth: &ResolvedBirth) -> Result<SajuChart, SajuError> {
        validate(birth)?;

        let pillars = four_pillars(birth)?;
        let day_gan = pillars.day.gan;
        let mut chart = SajuChart::default();
        let mut stages = BTreeMap::new();

        for (slot, pillar) in PillarSlot::ALL.iter().zip(pillars.as_array()) {
            let stem_sibsin = (*slot != PillarSlot::Day).then(|| sibsin_of(day_gan, pillar.gan));
            chart.pillars[*slot as usize] = PillarReading {
                stem: GlyphReading { element: Some(pillar.gan.element()), sibsin: stem_sibsin },
                branch: GlyphReading {
                    element: Some(pillar.zhi.element()),
                    sibsin: Some(sibsin_of(day_gan, pillar.zhi.main_stem())),
                },
            };
            stages.insert(*slot, twelve_stage(day_gan, pillar.zhi));
        }

        chart.twelve_stages = stages;
        chart.relations = detect_relations(&pillars);

        log::debug!(
            "🔮 融合矩阵: 四柱 年{:?} 月{:?} 日{:?} 时{:?}",
            pillars.year,
            pillars.month,
            pillars.day,
            pillars.hour
        );

        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;

    fn date(year: u16, month: u8, day: u8) -> BirthDate {
        BirthDate { year, month, day }
    }

    fn noon() -> BirthClock {
        BirthClock { hour: 12, minute: 0 }
    }

    fn resolved(date: BirthDate, time: BirthClock, utc_offset_minutes: i16) -> ResolvedBirth {
        ResolvedBirth { date, time, gender: Gender::Male, utc_offset_minutes }
    }

    fn at(date: BirthDate, time: BirthClock, utc_offset_minutes: i16) -> FourPillars {
        four_pillars(&resolved(date, time, utc_offset_minutes)).unwrap()
    }

    fn pillars(date: BirthDate, time: BirthClock) -> FourPillars {
        at(date, time, 540)
    }

    fn clock(hour: u8, minute: u8) -> BirthClock {
        BirthClock { hour, minute }
    }

    fn gz(gan: u8, zhi: u8) -> GanZhi {
        GanZhi { gan: TianGan(gan), zhi: DiZhi(zhi) }
    }

    #[test]
    fn test_julian_day_number() {
        assert_eq!(julian_day_number(&date(2000, 1, 1)), 2451545);
    }

    #[test]
    fn test_known_day_pillar() {
        // 1949-10-01 甲子日
        let p = pillars(date(1949, 10, 1), noon());
        assert_eq!(p.day, gz(0, 0));
    }

    #[test]
    fn test_four_pillars_2000_01_01() {
        // 己卯 丙子 戊午 戊午
        let p = pillars(date(2000, 1, 1), noon());
        assert_eq!(p.year, gz(5, 3));
        assert_eq!(p.month, gz(2, 0));
        assert_eq!(p.day, gz(4, 6));
        assert_eq!(p.hour, gz(4, 6));
    }

    #[test]
    fn test_lichun_boundary() {
        // 2024 立春 02-04 17:27 (UTC+9)
        assert_eq!(pillars(date(2024, 2, 4), noon()).year, gz(9, 3));
        assert_eq!(pillars(date(2024, 2, 4), clock(17, 20)).year, gz(9, 3));
        assert_eq!(pillars(date(2024, 2, 4), clock(17, 30)).year, gz(0, 4));
        assert_eq!(pillars(date(2024, 2, 4), clock(17, 20)).month, gz(1, 1));
        assert_eq!(pillars(date(2024, 2, 4), clock(17, 30)).month, gz(2, 2));

        // 1990 立春 02-04 11:14 (UTC+9)
        assert_eq!(pillars(date(1990, 2, 3), noon()).year, gz(5, 5));
        assert_eq!(pillars(date(1990, 2, 4), clock(11, 0)).year, gz(5, 5));
        assert_eq!(pillars(date(1990, 2, 4), clock(11, 30)).year, gz(6, 6));

        // 立春当日为寅月，甲己之年丙作首
        assert_eq!(pillars(date(1994, 2, 4), noon()).month, gz(2, 2));
    }

    #[test]
    fn test_timezone_shifts_term_boundary() {
        // 同为当地 17:00：UTC+9 尚未立春，UTC+8 已过立春
        assert_eq!(at(date(2024, 2, 4), clock(17, 0), 540).year, gz(9, 3));
        assert_eq!(at(date(2024, 2, 4), clock(17, 0), 480).year, gz(0, 4));
        // 日柱、时柱取当地时间
        let east = at(date(2024, 2, 4), clock(17, 0), 540);
        let west = at(date(2024, 2, 4), clock(17, 0), 480);
        assert_eq!(east.day, west.day);
        assert_eq!(east.hour, west.hour);
    }

    #[test]
    fn test_month_terms() {
        // 2000 小寒 01-06 10:01 (UTC+9)：之前子月，之后丑月
        assert_eq!(pillars(date(2000, 1, 6), clock(9, 50)).month.zhi, DiZhi(0));
        assert_eq!(pillars(date(2000, 1, 6), clock(10, 10)).month.zhi, DiZhi(1));
        // 1900 年 1 月小寒前仍属己亥年子月
        let p = pillars(date(1900, 1, 1), noon());
        assert_eq!(p.year, gz(5, 11));
        assert_eq!(p.month.zhi, DiZhi(0));
    }

    #[test]
    fn test_hour_branch() {
        let p = pillars(date(2000, 1, 1), clock(23, 30));
        assert_eq!(p.hour.zhi, DiZhi(0));
        let p = pillars(date(2000, 1, 1), clock(0, 10));
        assert_eq!(p.hour.zhi, DiZhi(0));
        let p = pillars(date(2000, 1, 1), clock(1, 0));
        assert_eq!(p.hour.zhi, DiZhi(1));
    }

    #[test]
    fn test_sibsin_and_stage() {
        let wu = TianGan(4);
        assert_eq!(sibsin_of(wu, TianGan(1)), Sibsin::Jeonggwan);
        assert_eq!(sibsin_of(wu, TianGan(2)), Sibsin::Pyeonin);
        assert_eq!(sibsin_of(wu, TianGan(4)), Sibsin::Bigyeon);
        // 甲禄在寅，甲刃在卯
        assert_eq!(twelve_stage(TianGan(0), DiZhi(2)), TwelveStage::Geonrok);
        assert_eq!(twelve_stage(TianGan(0), DiZhi(3)), TwelveStage::Jewang);
        // 乙木长生在午
        assert_eq!(twelve_stage(TianGan(1), DiZhi(6)), TwelveStage::Jangsaeng);
        assert_eq!(twelve_stage(TianGan(1), DiZhi(5)), TwelveStage::Mokyok);
    }

    #[test]
    fn test_chart_2000_01_01() {
        let chart = SolarTermCalculator::calculate(&resolved(date(2000, 1, 1), noon(), 540)).unwrap();
        assert_eq!(chart.day_master(), Some(Element::Earth));
        assert_eq!(
            chart.pillar_elements(),
            vec![
                Element::Earth,
                Element::Wood,
                Element::Fire,
                Element::Water,
                Element::Earth,
                Element::Fire,
                Element::Earth,
                Element::Fire,
            ]
        );

        let distribution = chart.sibsin_distribution();
        assert_eq!(distribution.values().map(|n| *n as u32).sum::<u32>(), 7);
        assert_eq!(distribution.get(&Sibsin::Jeongin), Some(&2));
        assert_eq!(distribution.get(&Sibsin::Geopjae), Some(&1));
        assert_eq!(distribution.get(&Sibsin::Jeonggwan), Some(&1));
        assert!(chart.pillar(PillarSlot::Day).stem.sibsin.is_none());

        assert_eq!(chart.twelve_stages.get(&PillarSlot::Year), Some(&TwelveStage::Mokyok));
        assert_eq!(chart.twelve_stages.get(&PillarSlot::Month), Some(&TwelveStage::Tae));
        assert_eq!(chart.twelve_stages.get(&PillarSlot::Day), Some(&TwelveStage::Jewang));

        assert_eq!(chart.relations, vec![Relation::Clash, Relation::Punishment, Relation::Destruction]);
    }

    #[test]
    fn test_triple_and_half_combine() {
        let full = FourPillars { year: gz(0, 8), month: gz(2, 0), day: gz(4, 4), hour: gz(6, 2) };
        assert!(detect_relations(&full).contains(&Relation::TripleCombine));

        let half = FourPillars { year: gz(0, 8), month: gz(2, 0), day: gz(4, 2), hour: gz(6, 2) };
        let relations = detect_relations(&half);
        assert!(relations.contains(&Relation::HalfCombine));
        assert!(!relations.contains(&Relation::TripleCombine));
    }

    #[test]
    fn test_stem_relations() {
        // 甲 己 合，丙 壬 冲
        let p = FourPillars { year: gz(0, 0), month: gz(5, 1), day: gz(2, 2), hour: gz(8, 8) };
        let relations = detect_relations(&p);
        assert!(relations.contains(&Relation::StemCombine));
        assert!(relations.contains(&Relation::StemClash));
        assert!(relations.contains(&Relation::SixCombine));
    }

    #[test]
    fn test_validation() {
        let calc = |b| SolarTermCalculator::calculate(&b).map(|_| ());
        assert_eq!(calc(resolved(date(2001, 2, 29), noon(), 540)), Err(SajuError::InvalidDate));
        assert_eq!(calc(resolved(date(1899, 12, 31), noon(), 540)), Err(SajuError::InvalidDate));
        assert_eq!(calc(resolved(date(2000, 13, 1), noon(), 540)), Err(SajuError::InvalidDate));
        assert_eq!(calc(resolved(date(2000, 15, 1), noon(), 540)), Err(SajuError::InvalidDate));
        assert_eq!(calc(resolved(date(2000, 0, 1), noon(), 540)), Err(SajuError::InvalidDate));
        assert_eq!(
            calc(resolved(date(2000, 1, 1), BirthClock { hour: 255, minute: 0 }, 540)),
            Err(SajuError::InvalidTime)
        );
        assert_eq!(
            calc(resolved(date(2000, 1, 1), BirthClock { hour: 24, minute: 0 }, 540)),
            Err(SajuError::InvalidTime)
        );
        assert_eq!(calc(resolved(date(2000, 1, 1), noon(), 900)), Err(SajuError::InvalidTimezone));
        assert_eq!(calc(resolved(date(2000, 2, 29), noon(), -300)), Ok(()));
    }
}
