//! Reservation Admission & Table Assignment Engine
//!
//! Decides, for an incoming booking request, whether day-level policy
//! permits it, whether the slot is free, and which table(s) best fit
//! the party. Persistence, notifications and HTTP belong to the
//! caller; the engine consumes snapshots through a read seam and
//! returns decisions.
//!
//! # 模块结构
//!
//! ```text
//! booking-engine/src/
//! ├── slot/          # 时间区间与重叠判断
//! ├── availability/  # 空桌计算（冲突唯一真相源）
//! ├── scoring/       # 桌台评分
//! ├── assignment/    # 单桌分配
//! ├── combination/   # 多桌组合搜索
//! ├── admission/     # 按日准入控制
//! ├── status/        # 状态机与桌台状态投影
//! ├── engine/        # 编排
//! ├── store/         # 存储读取接口
//! ├── config/        # 引擎配置
//! └── logger/        # 日志
//! ```

pub mod admission;
pub mod assignment;
pub mod availability;
pub mod combination;
pub mod config;
pub mod engine;
pub mod logger;
pub mod scoring;
pub mod slot;
pub mod status;
pub mod store;

// Re-export 公共类型
pub use admission::{AdmissionDecision, AdmissionRejection, check_day_admission};
pub use assignment::{AssignmentOutcome, ScoredTable, assign_best_table};
pub use availability::{
    AvailabilityReport, DailyAvailability, find_availability_by_dates, find_available_tables,
};
pub use combination::{COMBINATION_LIMIT, find_table_combinations};
pub use config::EngineConfig;
pub use engine::{BookingOutcome, ReservationEngine};
pub use logger::{cleanup_old_logs, init_logger, init_logger_with_file};
pub use scoring::score_table;
pub use slot::{TimeSlot, ranges_overlap};
pub use status::{
    apply_reservation_transition, ensure_reservation_transition, ensure_table_transition,
    project_table_status,
};
pub use store::{BookingStore, StoreError, StoreResult};
