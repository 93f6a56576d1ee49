//! Runtime API 定义：融合矩阵免费计算接口
//!
//! 提供以下接口：
//! - `calculate_matrix`: 计算融合矩阵，返回结果与报告的 JSON
//! - `matrix_catalog`: 返回十层目录的 JSON

use crate::input::MatrixRequest;
use sp_std::vec::Vec;

sp_api::decl_runtime_apis! {
    /// 融合矩阵 Runtime API
    ///
    /// 不读写链上存储，纯计算
    pub trait FusionMatrixApi {
        /// 计算融合矩阵
        ///
        /// ### 参数
        /// - `request`: 直接模式（符号化档案）或派生模式（出生信息 + 附加字段）
        ///
        /// ### 返回
        /// - `Some(json)`: `{ "result": {...}, "report": {...} }`
        /// - `None`: 出生信息无效或命盘缺少日干
        fn calculate_matrix(request: MatrixRequest) -> Option<Vec<u8>>;

        /// 获取十层目录（各层单元数、等级区间）
        fn matrix_catalog() -> Vec<u8>;
    }
}
