//! # 融合矩阵 Pallet 测试 Mock
//!
//! 本模块提供测试环境的 Mock Runtime 配置

use crate as pallet_fusion_matrix;
use frame_support::{derive_impl, parameter_types};
use sp_runtime::BuildStorage;

use crate::calculator::SolarTermCalculator;

type Block = frame_system::mocking::MockBlock<Test>;

// 构建 Mock Runtime
frame_support::construct_runtime!(
	pub enum Test {
		System: frame_system,
		FusionMatrix: pallet_fusion_matrix,
	}
);

/// 系统配置
#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
}

parameter_types! {
	pub const StrengthThreshold: u8 = 7;
	pub const CautionThreshold: u8 = 3;
	pub const MaxSynergies: u32 = 5;
}

/// 融合矩阵 Pallet 配置
impl pallet_fusion_matrix::Config for Test {
	type SajuProvider = SolarTermCalculator;
	type StrengthThreshold = StrengthThreshold;
	type CautionThreshold = CautionThreshold;
	type MaxSynergies = MaxSynergies;
}

/// 构建测试外部性
pub fn new_test_ext() -> sp_io::TestExternalities {
	let t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
	let mut ext = sp_io::TestExternalities::new(t);
	ext.execute_with(|| System::set_block_number(1));
	ext
}
