//! Pickup Board Core - 快餐取餐看板核心
//!
//! # 架构概述
//!
//! 本 crate 是取餐看板的全部逻辑核心，不含任何界面代码：
//!
//! - **数据模型** (`board::types`): 两条有序订单号列表 PREPARING / READY
//! - **持久化** (`board::storage`): 单一 JSON 文件的读写与静默恢复
//! - **操作层** (`board::manager`): 全部变更操作、冲突检查与严重级别
//!
//! # 模块结构
//!
//! ```text
//! board-core/src/
//! └── board/
//!     ├── types.rs       # OrderBoard、Stage
//!     ├── storage.rs     # BoardStorage 文件持久化
//!     └── manager/       # BoardManager 操作层
//! ```

pub mod board;

// Re-export 公共类型
pub use board::{BoardManager, BoardStorage, OrderBoard, Stage};
pub use board::{BoardError, BoardResult, Severity};
pub use board::{StorageError, StorageResult};
