pub mod check;
pub mod columns;
pub mod config;
pub mod dispatch;
pub mod process;
pub mod schema;
pub mod shared;
