//! # 命理融合矩阵 Pallet (Pallet Fusion Matrix)
//!
//! ## 概述
//!
//! 将东方四柱八字档案与西洋占星星盘在十个独立维度上交叉比对，
//! 输出逐层评分、排名与摘要：
//! - 第 1 层：五行核心（日主 × 八字五行 / 主导西方元素）
//! - 第 2-3 层：十神 × 行星、十神 × 宫位
//! - 第 4 层：大运/岁运 × 日主
//! - 第 5-6 层：干支关系 × 相位、十二运 × 宫位
//! - 第 7 层：格局 × 用神
//! - 第 8-10 层：神煞 × 行星、小行星 × 宫位、特殊点 × 五行
//!
//! ## 技术特性
//!
//! - ✅ **纯计算**: 无存储、无交易、无事件，经 Runtime API 免费调用
//! - ✅ **静态评分表**: 1206 个单元编译期校验，按引用传入匹配器
//! - ✅ **只查实有键对**: 每层仅枚举当事人数据构成的组合
//! - ✅ **确定性输出**: 有序映射 + 稳定排序，同一输入 JSON 字节一致
//! - ✅ **派生模式**: 由出生信息经 `SajuProvider` 推算日主与十神
//!
//! ## 使用示例
//!
//! ```ignore
//! let input = MatrixInput::new(Element::Wood, vec![Element::Wood, Element::Fire]);
//! let result = FusionMatrix::calculate_matrix(MatrixRequest::Direct(input))?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod aggregator;
pub mod assembler;
pub mod calculator;
pub mod input;
pub mod interaction;
pub mod matchers;
pub mod normalizer;
pub mod runtime_api;
pub mod solar_terms;
pub mod tables;
pub mod types;

#[cfg(test)]
mod mock;


pub use aggregator::{EngineConfig, MatrixSummary, RankedMatch};
pub use assembler::{FusionMatrixResult, MatrixCatalog, MatrixReport, MatrixResponse};
pub use calculator::SolarTermCalculator;
pub use input::{BirthInput, MatrixInput, MatrixRequest, ProfileExtras};
pub use interaction::{Interaction, InteractionLevel, Layer, LayerResult};
pub use normalizer::{ComputationError, SajuCalculator, SajuError};
pub use tables::FusionTables;

#[frame_support::pallet]
pub mod pallet {
	use alloc::vec::Vec;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	use crate::aggregator::EngineConfig;
	use crate::assembler::{self, FusionMatrixResult, MatrixCatalog, MatrixReport, MatrixResponse};
	use crate::input::MatrixRequest;
	use crate::normalizer::{ComputationError, ProfileNormalizer, SajuCalculator, SajuError};
	use crate::tables::FusionTables;

	/// Pallet 配置 Trait
	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// 派生模式使用的八字计算器
		type SajuProvider: SajuCalculator;

		/// 强项阈值（分值 ≥ 此值计入强项）
		#[pallet::constant]
		type StrengthThreshold: Get<u8>;

		/// 警示阈值（分值 ≤ 此值计入警示）
		#[pallet::constant]
		type CautionThreshold: Get<u8>;

		/// 协同摘要最大条数
		#[pallet::constant]
		type MaxSynergies: Get<u32>;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	/// Pallet 错误
	#[pallet::error]
	pub enum Error<T> {
		/// 出生日期无效或超出支持范围
		InvalidBirthDate,
		/// 出生时刻无效
		InvalidBirthTime,
		/// 时区偏移无效
		InvalidTimezone,
		/// 命盘缺少日干
		MissingDayMaster,
		/// 八字推算失败
		SajuCalculationFailed,
	}

	#[pallet::hooks]
	impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
		fn integrity_test() {
			assert!(
				Self::engine_config().is_valid(),
				"StrengthThreshold and CautionThreshold must lie in 1..=10 with CautionThreshold below StrengthThreshold"
			);
		}
	}

	impl<T: Config> From<ComputationError> for Error<T> {
		fn from(e: ComputationError) -> Self {
			match e {
				ComputationError::MissingDayMaster => Error::<T>::MissingDayMaster,
				ComputationError::Calculation(SajuError::InvalidDate) => Error::<T>::InvalidBirthDate,
				ComputationError::Calculation(SajuError::InvalidTime) => Error::<T>::InvalidBirthTime,
				ComputationError::Calculation(SajuError::InvalidTimezone) => Error::<T>::InvalidTimezone,
				ComputationError::Calculation(SajuError::Unavailable) => Error::<T>::SajuCalculationFailed,
			}
		}
	}

	impl<T: Config> Pallet<T> {
		/// 由链上常量构造引擎参数
		pub fn engine_config() -> EngineConfig {
			EngineConfig {
				strength_threshold: T::StrengthThreshold::get(),
				caution_threshold: T::CautionThreshold::get(),
				max_synergies: T::MaxSynergies::get(),
			}
		}

		/// 计算融合矩阵
		///
		/// # 参数
		/// - request: 直接模式或派生模式请求
		///
		/// # 返回
		/// - Ok(FusionMatrixResult): 十层结果 + 汇总
		/// - Err: 派生模式下出生信息无效或命盘缺少日干
		pub fn calculate_matrix(request: MatrixRequest) -> Result<FusionMatrixResult, Error<T>> {
			let input = ProfileNormalizer::<T::SajuProvider>::normalize(request)?;
			Ok(assembler::compute(FusionTables::standard(), &input, &Self::engine_config()))
		}

		/// 计算融合矩阵并生成展示报告
		pub fn calculate_matrix_report(request: MatrixRequest) -> Result<MatrixReport, Error<T>> {
			Self::calculate_matrix(request).map(|result| MatrixReport::from_result(&result))
		}

		/// RPC 接口：计算融合矩阵（不存储，免费）
		///
		/// 返回 `{ "result": ..., "report": ... }` 的 JSON 字节，失败返回 None
		pub fn calculate_matrix_json(request: MatrixRequest) -> Option<Vec<u8>> {
			let result = Self::calculate_matrix(request)
				.map_err(|e| log::warn!("⚠️ 融合矩阵计算失败: {:?}", e))
				.ok()?;
			serde_json::to_vec(&MatrixResponse::from(result)).ok()
		}

		/// 十层目录
		pub fn matrix_catalog() -> MatrixCatalog {
			MatrixCatalog::from_tables(FusionTables::standard())
		}

		/// RPC 接口：十层目录 JSON
		pub fn matrix_catalog_json() -> Vec<u8> {
			serde_json::to_vec(&Self::matrix_catalog()).unwrap_or_default()
		}
	}
}
