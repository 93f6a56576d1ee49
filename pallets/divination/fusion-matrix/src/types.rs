//! # 融合矩阵 - 维度注册表
//!
//! 定义十层交叉表使用的全部封闭枚举（东方八字侧与西方占星侧）。
//!
//! 每个维度实现 [`Dimension`]：
//! - `COUNT` / `index()`：在评分网格中的行列位置
//! - `key()`：JSON 与复合键使用的稳定 token
//! - `label()` / `label_ko()`：英文与韩文名称
//!
//! 所有维度同时派生 SCALE 编解码与 serde，未知 token 在解码阶段即被拒绝，
//! 引擎内部不会遇到非法取值。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// 评分网格的一个坐标轴
pub trait Dimension: Copy + Ord {
    /// 取值个数
    const COUNT: usize;

    /// 网格下标（0 起）
    fn index(&self) -> usize;

    /// 稳定 token
    fn key(&self) -> &'static str;

    /// 英文名称
    fn label(&self) -> &'static str;

    /// 韩文名称
    fn label_ko(&self) -> &'static str;
}

/// 生成一个无字段维度枚举及其 `Dimension` 实现
///
/// 变体声明顺序即网格下标顺序。
macro_rules! dimension {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($key:literal, $en:literal, $ko:literal),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
            PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// 全部取值（按网格顺序）
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];
        }

        impl Dimension for $name {
            const COUNT: usize = $name::ALL.len();

            fn index(&self) -> usize {
                *self as usize
            }

            fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $en,)+
                }
            }

            fn label_ko(&self) -> &'static str {
                match self {
                    $($name::$variant => $ko,)+
                }
            }
        }
    };
}

// ============================================================================
// 五行
// ============================================================================

dimension! {
    /// 五行
    pub enum Element {
        Wood => ("wood", "Wood", "목"),
        Fire => ("fire", "Fire", "화"),
        Earth => ("earth", "Earth", "토"),
        Metal => ("metal", "Metal", "금"),
        Water => ("water", "Water", "수"),
    }
}

impl Element {
    /// 我生者
    pub fn generates(&self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// 我克者
    pub fn controls(&self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Fire => Element::Metal,
            Element::Earth => Element::Water,
            Element::Metal => Element::Wood,
            Element::Water => Element::Fire,
        }
    }

    /// 以 `self` 为日主，`other` 所属的十神大类
    pub fn role_of(&self, other: Element) -> ElementRole {
        if *self == other {
            ElementRole::Companion
        } else if self.generates() == other {
            ElementRole::Output
        } else if self.controls() == other {
            ElementRole::Wealth
        } else if other.controls() == *self {
            ElementRole::Officer
        } else {
            ElementRole::Resource
        }
    }
}

dimension! {
    /// 西方四元素
    pub enum WesternElement {
        Fire => ("fire", "Fire", "불"),
        Earth => ("earth", "Earth", "흙"),
        Air => ("air", "Air", "공기"),
        Water => ("water", "Water", "물"),
    }
}

impl WesternElement {
    /// 对应的五行（风对应木，金无西方对应）
    pub fn counterpart(&self) -> Element {
        match self {
            WesternElement::Fire => Element::Fire,
            WesternElement::Earth => Element::Earth,
            WesternElement::Air => Element::Wood,
            WesternElement::Water => Element::Water,
        }
    }
}

// ============================================================================
// 十神 / 十二运 / 柱位
// ============================================================================

dimension! {
    /// 十神
    pub enum Sibsin {
        Bigyeon => ("bigyeon", "Companion", "비견"),
        Geopjae => ("geopjae", "Rob Wealth", "겁재"),
        Siksin => ("siksin", "Eating God", "식신"),
        Sanggwan => ("sanggwan", "Hurting Officer", "상관"),
        Pyeonjae => ("pyeonjae", "Indirect Wealth", "편재"),
        Jeongjae => ("jeongjae", "Direct Wealth", "정재"),
        Pyeongwan => ("pyeongwan", "Seven Killings", "편관"),
        Jeonggwan => ("jeonggwan", "Direct Officer", "정관"),
        Pyeonin => ("pyeonin", "Indirect Resource", "편인"),
        Jeongin => ("jeongin", "Direct Resource", "정인"),
    }
}

impl Sibsin {
    /// 由十神大类与阴阳异同确定十神（同性为偏，异性为正）
    pub fn from_role(role: ElementRole, same_polarity: bool) -> Sibsin {
        match (role, same_polarity) {
            (ElementRole::Companion, true) => Sibsin::Bigyeon,
            (ElementRole::Companion, false) => Sibsin::Geopjae,
            (ElementRole::Output, true) => Sibsin::Siksin,
            (ElementRole::Output, false) => Sibsin::Sanggwan,
            (ElementRole::Wealth, true) => Sibsin::Pyeonjae,
            (ElementRole::Wealth, false) => Sibsin::Jeongjae,
            (ElementRole::Officer, true) => Sibsin::Pyeongwan,
            (ElementRole::Officer, false) => Sibsin::Jeonggwan,
            (ElementRole::Resource, true) => Sibsin::Pyeonin,
            (ElementRole::Resource, false) => Sibsin::Jeongin,
        }
    }
}

dimension! {
    /// 十二运（长生十二宫）
    pub enum TwelveStage {
        Jangsaeng => ("jangsaeng", "Birth", "장생"),
        Mokyok => ("mokyok", "Bath", "목욕"),
        Gwandae => ("gwandae", "Capping", "관대"),
        Geonrok => ("geonrok", "Prosperity", "건록"),
        Jewang => ("jewang", "Peak", "제왕"),
        Soe => ("soe", "Decline", "쇠"),
        Byeong => ("byeong", "Sickness", "병"),
        Sa => ("sa", "Death", "사"),
        Myo => ("myo", "Tomb", "묘"),
        Jeol => ("jeol", "Extinction", "절"),
        Tae => ("tae", "Conception", "태"),
        Yang => ("yang", "Nurture", "양"),
    }
}

dimension! {
    /// 四柱位置
    pub enum PillarSlot {
        Year => ("year", "Year Pillar", "년주"),
        Month => ("month", "Month Pillar", "월주"),
        Day => ("day", "Day Pillar", "일주"),
        Time => ("time", "Time Pillar", "시주"),
    }
}

dimension! {
    /// 干支关系（合冲刑破害）
    pub enum Relation {
        StemCombine => ("stemCombine", "Stem Combination", "천간합"),
        StemClash => ("stemClash", "Stem Clash", "천간충"),
        SixCombine => ("sixCombine", "Six Combination", "육합"),
        TripleCombine => ("tripleCombine", "Triple Combination", "삼합"),
        HalfCombine => ("halfCombine", "Half Combination", "반합"),
        DirectionalCombine => ("directionalCombine", "Directional Combination", "방합"),
        HiddenCombine => ("hiddenCombine", "Hidden Combination", "암합"),
        Clash => ("clash", "Clash", "충"),
        Punishment => ("punishment", "Punishment", "형"),
        Destruction => ("destruction", "Destruction", "파"),
        Harm => ("harm", "Harm", "해"),
        Wonjin => ("wonjin", "Resentment", "원진"),
    }
}

// ============================================================================
// 神煞
// ============================================================================

dimension! {
    /// 神煞
    pub enum Shinsal {
        Geopsal => ("geopsal", "Robbery Star", "겁살"),
        Jaesal => ("jaesal", "Disaster Star", "재살"),
        Cheonsal => ("cheonsal", "Heaven Calamity", "천살"),
        Jisal => ("jisal", "Earth Star", "지살"),
        Yeonsal => ("yeonsal", "Peach Blossom", "연살"),
        Wolsal => ("wolsal", "Month Calamity", "월살"),
        Mangsin => ("mangsin", "Disgrace Star", "망신살"),
        Jangseong => ("jangseong", "General Star", "장성살"),
        Banan => ("banan", "Saddle Star", "반안살"),
        Yeokma => ("yeokma", "Travelling Horse", "역마살"),
        Yukhae => ("yukhae", "Six Harms Star", "육해살"),
        Hwagae => ("hwagae", "Canopy Star", "화개살"),
        Cheoneul => ("cheoneul", "Heavenly Noble", "천을귀인"),
        Cheondeok => ("cheondeok", "Heavenly Virtue", "천덕귀인"),
        Woldeok => ("woldeok", "Monthly Virtue", "월덕귀인"),
        Munchang => ("munchang", "Literary Star", "문창귀인"),
        Hakdang => ("hakdang", "Academy Star", "학당귀인"),
        Geumyeo => ("geumyeo", "Golden Carriage", "금여록"),
        Amrok => ("amrok", "Hidden Fortune", "암록"),
        Taegeuk => ("taegeuk", "Supreme Noble", "태극귀인"),
        Cheonju => ("cheonju", "Heavenly Kitchen", "천주귀인"),
        Bokseong => ("bokseong", "Fortune Star", "복성귀인"),
        Cheongwan => ("cheongwan", "Heavenly Official", "천관귀인"),
        Mungok => ("mungok", "Literary Curve", "문곡귀인"),
        Gwangwi => ("gwangwi", "Official Academy", "관귀학관"),
        Cheonui => ("cheonui", "Heavenly Doctor", "천의성"),
        Yangin => ("yangin", "Goat Blade", "양인살"),
        Baekho => ("baekho", "White Tiger", "백호살"),
        Goegang => ("goegang", "Kuigang Star", "괴강살"),
        Hongyeom => ("hongyeom", "Red Flame", "홍염살"),
        Gwimun => ("gwimun", "Ghost Gate", "귀문관살"),
        Gosin => ("gosin", "Lonely Star", "고신살"),
        Gwasuk => ("gwasuk", "Widow Star", "과숙살"),
        Hyeonchim => ("hyeonchim", "Hanging Needle", "현침살"),
        Geupgak => ("geupgak", "Broken Leg", "급각살"),
        Wonjinsal => ("wonjinsal", "Resentment Star", "원진살"),
    }
}

/// 神煞吉凶
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShinsalNature {
    Lucky,
    Unlucky,
}

impl Shinsal {
    pub fn nature(&self) -> ShinsalNature {
        use Shinsal::*;
        match self {
            Jisal | Jangseong | Banan | Yeokma | Hwagae | Cheoneul | Cheondeok | Woldeok
            | Munchang | Hakdang | Geumyeo | Amrok | Taegeuk | Cheonju | Bokseong | Cheongwan
            | Mungok | Gwangwi | Cheonui => ShinsalNature::Lucky,
            _ => ShinsalNature::Unlucky,
        }
    }

    pub fn is_lucky(&self) -> bool {
        self.nature() == ShinsalNature::Lucky
    }
}

// ============================================================================
// 占星侧
// ============================================================================

dimension! {
    /// 行星（含南北交点）
    pub enum Planet {
        Sun => ("sun", "Sun", "태양"),
        Moon => ("moon", "Moon", "달"),
        Mercury => ("mercury", "Mercury", "수성"),
        Venus => ("venus", "Venus", "금성"),
        Mars => ("mars", "Mars", "화성"),
        Jupiter => ("jupiter", "Jupiter", "목성"),
        Saturn => ("saturn", "Saturn", "토성"),
        Uranus => ("uranus", "Uranus", "천왕성"),
        Neptune => ("neptune", "Neptune", "해왕성"),
        Pluto => ("pluto", "Pluto", "명왕성"),
        NorthNode => ("northNode", "North Node", "북교점"),
        SouthNode => ("southNode", "South Node", "남교점"),
    }
}

dimension! {
    /// 黄道十二宫
    pub enum ZodiacSign {
        Aries => ("aries", "Aries", "양자리"),
        Taurus => ("taurus", "Taurus", "황소자리"),
        Gemini => ("gemini", "Gemini", "쌍둥이자리"),
        Cancer => ("cancer", "Cancer", "게자리"),
        Leo => ("leo", "Leo", "사자자리"),
        Virgo => ("virgo", "Virgo", "처녀자리"),
        Libra => ("libra", "Libra", "천칭자리"),
        Scorpio => ("scorpio", "Scorpio", "전갈자리"),
        Sagittarius => ("sagittarius", "Sagittarius", "궁수자리"),
        Capricorn => ("capricorn", "Capricorn", "염소자리"),
        Aquarius => ("aquarius", "Aquarius", "물병자리"),
        Pisces => ("pisces", "Pisces", "물고기자리"),
    }
}

impl ZodiacSign {
    /// 星座所属元素（火土风水循环）
    pub fn element(&self) -> WesternElement {
        match self.index() % 4 {
            0 => WesternElement::Fire,
            1 => WesternElement::Earth,
            2 => WesternElement::Air,
            _ => WesternElement::Water,
        }
    }
}

/// 宫位（1-12）
///
/// JSON 中以整数 1..=12 表示。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum House {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub const ALL: &'static [House] = &[
        House::First,
        House::Second,
        House::Third,
        House::Fourth,
        House::Fifth,
        House::Sixth,
        House::Seventh,
        House::Eighth,
        House::Ninth,
        House::Tenth,
        House::Eleventh,
        House::Twelfth,
    ];

    const KEYS: [&'static str; 12] = [
        "house1", "house2", "house3", "house4", "house5", "house6", "house7", "house8", "house9",
        "house10", "house11", "house12",
    ];

    const LABELS: [&'static str; 12] = [
        "1st House", "2nd House", "3rd House", "4th House", "5th House", "6th House",
        "7th House", "8th House", "9th House", "10th House", "11th House", "12th House",
    ];

    const LABELS_KO: [&'static str; 12] = [
        "1하우스", "2하우스", "3하우스", "4하우스", "5하우스", "6하우스", "7하우스", "8하우스",
        "9하우스", "10하우스", "11하우스", "12하우스",
    ];

    /// 宫位序号（1-12）
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<House> {
        House::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }
}

impl Dimension for House {
    const COUNT: usize = 12;

    fn index(&self) -> usize {
        *self as usize
    }

    fn key(&self) -> &'static str {
        House::KEYS[self.index()]
    }

    fn label(&self) -> &'static str {
        House::LABELS[self.index()]
    }

    fn label_ko(&self) -> &'static str {
        House::LABELS_KO[self.index()]
    }
}

impl TryFrom<u8> for House {
    type Error = &'static str;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        House::from_number(n).ok_or("house must be within 1..=12")
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.number()
    }
}

dimension! {
    /// 相位
    pub enum AspectType {
        Conjunction => ("conjunction", "Conjunction", "합"),
        Sextile => ("sextile", "Sextile", "섹스타일"),
        Square => ("square", "Square", "스퀘어"),
        Trine => ("trine", "Trine", "트라인"),
        Opposition => ("opposition", "Opposition", "오포지션"),
        Quincunx => ("quincunx", "Quincunx", "퀸컨스"),
        Semisextile => ("semisextile", "Semisextile", "세미섹스타일"),
        Semisquare => ("semisquare", "Semisquare", "세미스퀘어"),
        Sesquiquadrate => ("sesquiquadrate", "Sesquiquadrate", "세스퀴쿼드레이트"),
        Quintile => ("quintile", "Quintile", "퀸타일"),
        Biquintile => ("biquintile", "Biquintile", "바이퀸타일"),
    }
}

dimension! {
    /// 四大小行星
    pub enum AsteroidBody {
        Ceres => ("ceres", "Ceres", "세레스"),
        Pallas => ("pallas", "Pallas", "팔라스"),
        Juno => ("juno", "Juno", "주노"),
        Vesta => ("vesta", "Vesta", "베스타"),
    }
}

dimension! {
    /// 虚点与特殊点
    pub enum ExtraPoint {
        Chiron => ("chiron", "Chiron", "카이런"),
        Pholus => ("pholus", "Pholus", "폴루스"),
        Lilith => ("lilith", "Lilith", "릴리스"),
        TrueLilith => ("trueLilith", "True Lilith", "진릴리스"),
        Selena => ("selena", "Selena", "셀레나"),
        PartOfFortune => ("partOfFortune", "Part of Fortune", "행운점"),
        PartOfSpirit => ("partOfSpirit", "Part of Spirit", "정신점"),
        PartOfEros => ("partOfEros", "Part of Eros", "에로스점"),
        PartOfMarriage => ("partOfMarriage", "Part of Marriage", "결혼점"),
        Vertex => ("vertex", "Vertex", "버텍스"),
        AntiVertex => ("antiVertex", "Anti-Vertex", "안티버텍스"),
        EastPoint => ("eastPoint", "East Point", "이스트포인트"),
        Ascendant => ("ascendant", "Ascendant", "상승점"),
        Midheaven => ("midheaven", "Midheaven", "중천점"),
        Descendant => ("descendant", "Descendant", "하강점"),
        ImumCoeli => ("imumCoeli", "Imum Coeli", "천저"),
        PrenatalSyzygy => ("prenatalSyzygy", "Prenatal Syzygy", "출생전 삭망"),
        Priapus => ("priapus", "Priapus", "프리아푸스"),
    }
}

// ============================================================================
// 派生轴
// ============================================================================

dimension! {
    /// 运的周期
    pub enum LuckCycle {
        Daeun => ("daeun", "Decade Luck", "대운"),
        Saeun => ("saeun", "Annual Luck", "세운"),
    }
}

/// 当前运程键：周期 × 五行
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TimingKey {
    pub cycle: LuckCycle,
    pub element: Element,
}

impl TimingKey {
    const KEYS: [[&'static str; 5]; 2] = [
        ["daeun_wood", "daeun_fire", "daeun_earth", "daeun_metal", "daeun_water"],
        ["saeun_wood", "saeun_fire", "saeun_earth", "saeun_metal", "saeun_water"],
    ];

    const LABELS: [[&'static str; 5]; 2] = [
        ["Wood Decade", "Fire Decade", "Earth Decade", "Metal Decade", "Water Decade"],
        ["Wood Year", "Fire Year", "Earth Year", "Metal Year", "Water Year"],
    ];

    const LABELS_KO: [[&'static str; 5]; 2] = [
        ["목 대운", "화 대운", "토 대운", "금 대운", "수 대운"],
        ["목 세운", "화 세운", "토 세운", "금 세운", "수 세운"],
    ];

    pub fn new(cycle: LuckCycle, element: Element) -> Self {
        Self { cycle, element }
    }
}

impl Dimension for TimingKey {
    const COUNT: usize = LuckCycle::COUNT * Element::COUNT;

    fn index(&self) -> usize {
        self.cycle.index() * Element::COUNT + self.element.index()
    }

    fn key(&self) -> &'static str {
        TimingKey::KEYS[self.cycle.index()][self.element.index()]
    }

    fn label(&self) -> &'static str {
        TimingKey::LABELS[self.cycle.index()][self.element.index()]
    }

    fn label_ko(&self) -> &'static str {
        TimingKey::LABELS_KO[self.cycle.index()][self.element.index()]
    }
}

dimension! {
    /// 十神大类（相对日主）
    pub enum ElementRole {
        Companion => ("companion", "Companion", "비겁"),
        Output => ("output", "Output", "식상"),
        Wealth => ("wealth", "Wealth", "재성"),
        Officer => ("officer", "Officer", "관성"),
        Resource => ("resource", "Resource", "인성"),
    }
}

dimension! {
    /// 格局（正格十种）
    pub enum Geokguk {
        Jeonggwan => ("jeonggwan", "Direct Officer Pattern", "정관격"),
        Pyeongwan => ("pyeongwan", "Seven Killings Pattern", "편관격"),
        Jeongin => ("jeongin", "Direct Resource Pattern", "정인격"),
        Pyeonin => ("pyeonin", "Indirect Resource Pattern", "편인격"),
        Siksin => ("siksin", "Eating God Pattern", "식신격"),
        Sanggwan => ("sanggwan", "Hurting Officer Pattern", "상관격"),
        Jeongjae => ("jeongjae", "Direct Wealth Pattern", "정재격"),
        Pyeonjae => ("pyeonjae", "Indirect Wealth Pattern", "편재격"),
        Geonrok => ("geonrok", "Prosperity Pattern", "건록격"),
        Yangin => ("yangin", "Goat Blade Pattern", "양인격"),
    }
}

/// 格局别名（韩文、汉字，均不含“格”字）
const GEOKGUK_ALIASES: &[(&str, Geokguk)] = &[
    ("정관", Geokguk::Jeonggwan),
    ("正官", Geokguk::Jeonggwan),
    ("편관", Geokguk::Pyeongwan),
    ("칠살", Geokguk::Pyeongwan),
    ("偏官", Geokguk::Pyeongwan),
    ("七殺", Geokguk::Pyeongwan),
    ("七杀", Geokguk::Pyeongwan),
    ("정인", Geokguk::Jeongin),
    ("正印", Geokguk::Jeongin),
    ("편인", Geokguk::Pyeonin),
    ("偏印", Geokguk::Pyeonin),
    ("식신", Geokguk::Siksin),
    ("食神", Geokguk::Siksin),
    ("상관", Geokguk::Sanggwan),
    ("傷官", Geokguk::Sanggwan),
    ("伤官", Geokguk::Sanggwan),
    ("정재", Geokguk::Jeongjae),
    ("正財", Geokguk::Jeongjae),
    ("正财", Geokguk::Jeongjae),
    ("편재", Geokguk::Pyeonjae),
    ("偏財", Geokguk::Pyeonjae),
    ("偏财", Geokguk::Pyeonjae),
    ("건록", Geokguk::Geonrok),
    ("建祿", Geokguk::Geonrok),
    ("建禄", Geokguk::Geonrok),
    ("양인", Geokguk::Yangin),
    ("羊刃", Geokguk::Yangin),
    ("陽刃", Geokguk::Yangin),
    ("阳刃", Geokguk::Yangin),
];

impl Geokguk {
    /// 解析自由格式的格局标签
    ///
    /// 接受罗马字 token（大小写不敏感）、韩文或汉字写法，可带“격/格”后缀。
    /// 无法识别时返回 `None`。
    pub fn from_tag(tag: &str) -> Option<Geokguk> {
        let tag = tag.trim();
        if let Some(found) = Geokguk::ALL.iter().find(|g| g.key().eq_ignore_ascii_case(tag)) {
            return Some(*found);
        }

        let root = tag.trim_end_matches(['격', '格']).trim();
        GEOKGUK_ALIASES
            .iter()
            .find(|(alias, _)| *alias == root)
            .map(|(_, geokguk)| *geokguk)
    }
}

// ============================================================================
// 其他
// ============================================================================

/// 输出语言
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ko,
    En,
}

/// 性别
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_counts() {
        assert_eq!(Element::COUNT, 5);
        assert_eq!(WesternElement::COUNT, 4);
        assert_eq!(Sibsin::COUNT, 10);
        assert_eq!(TwelveStage::COUNT, 12);
        assert_eq!(Relation::COUNT, 12);
        assert_eq!(Shinsal::COUNT, 36);
        assert_eq!(Planet::COUNT, 12);
        assert_eq!(ZodiacSign::COUNT, 12);
        assert_eq!(House::COUNT, 12);
        assert_eq!(AspectType::COUNT, 11);
        assert_eq!(AsteroidBody::COUNT, 4);
        assert_eq!(ExtraPoint::COUNT, 18);
        assert_eq!(TimingKey::COUNT, 10);
        assert_eq!(ElementRole::COUNT, 5);
        assert_eq!(Geokguk::COUNT, 10);
    }

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, s) in Shinsal::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        for (i, h) in House::ALL.iter().enumerate() {
            assert_eq!(h.index(), i);
            assert_eq!(h.number() as usize, i + 1);
        }
    }

    #[test]
    fn test_element_roles() {
        // 戊土日主
        let dm = Element::Earth;
        assert_eq!(dm.role_of(Element::Earth), ElementRole::Companion);
        assert_eq!(dm.role_of(Element::Metal), ElementRole::Output);
        assert_eq!(dm.role_of(Element::Water), ElementRole::Wealth);
        assert_eq!(dm.role_of(Element::Wood), ElementRole::Officer);
        assert_eq!(dm.role_of(Element::Fire), ElementRole::Resource);
    }

    #[test]
    fn test_sibsin_from_role() {
        assert_eq!(Sibsin::from_role(ElementRole::Officer, true), Sibsin::Pyeongwan);
        assert_eq!(Sibsin::from_role(ElementRole::Officer, false), Sibsin::Jeonggwan);
        assert_eq!(Sibsin::from_role(ElementRole::Companion, false), Sibsin::Geopjae);
    }

    #[test]
    fn test_zodiac_elements() {
        assert_eq!(ZodiacSign::Aries.element(), WesternElement::Fire);
        assert_eq!(ZodiacSign::Virgo.element(), WesternElement::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), WesternElement::Air);
        assert_eq!(ZodiacSign::Scorpio.element(), WesternElement::Water);
        assert_eq!(WesternElement::Air.counterpart(), Element::Wood);
    }

    #[test]
    fn test_shinsal_nature() {
        assert!(Shinsal::Cheoneul.is_lucky());
        assert!(Shinsal::Yeokma.is_lucky());
        assert!(!Shinsal::Baekho.is_lucky());
        let lucky = Shinsal::ALL.iter().filter(|s| s.is_lucky()).count();
        assert_eq!(lucky, 19);
    }

    #[test]
    fn test_timing_keys() {
        let key = TimingKey::new(LuckCycle::Daeun, Element::Water);
        assert_eq!(key.key(), "daeun_water");
        assert_eq!(key.index(), 4);
        assert_eq!(TimingKey::new(LuckCycle::Saeun, Element::Wood).index(), 5);
    }

    #[test]
    fn test_geokguk_tags() {
        assert_eq!(Geokguk::from_tag("jeonggwan"), Some(Geokguk::Jeonggwan));
        assert_eq!(Geokguk::from_tag(" Pyeongwan "), Some(Geokguk::Pyeongwan));
        assert_eq!(Geokguk::from_tag("정관격"), Some(Geokguk::Jeonggwan));
        assert_eq!(Geokguk::from_tag("七殺格"), Some(Geokguk::Pyeongwan));
        assert_eq!(Geokguk::from_tag("식신"), Some(Geokguk::Siksin));
        assert_eq!(Geokguk::from_tag("종왕격"), None);
        assert_eq!(Geokguk::from_tag(""), None);
    }

    #[test]
    fn test_house_json_is_numeric() {
        assert_eq!(serde_json::to_string(&House::Tenth).unwrap(), "10");
        let h: House = serde_json::from_str("7").unwrap();
        assert_eq!(h, House::Seventh);
        assert!(serde_json::from_str::<House>("0").is_err());
        assert!(serde_json::from_str::<House>("13").is_err());
    }

    #[test]
    fn test_unknown_token_rejected() {
        let p: Planet = serde_json::from_str("\"northNode\"").unwrap();
        assert_eq!(p, Planet::NorthNode);
        assert!(serde_json::from_str::<Planet>("\"ceres\"").is_err());
        assert!(serde_json::from_str::<Element>("\"aether\"").is_err());
    }

    #[test]
    fn test_unknown_scale_index_rejected() {
        use codec::Decode;
        assert_eq!(Element::decode(&mut &[3u8][..]).unwrap(), Element::Metal);
        assert!(Element::decode(&mut &[5u8][..]).is_err());
    }
}
