pub mod cfg;
pub mod compare;
pub mod rank;

pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use rank::handle_rank_command;
