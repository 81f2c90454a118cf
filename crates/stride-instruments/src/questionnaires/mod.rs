pub mod pcs;
pub mod tsk;
