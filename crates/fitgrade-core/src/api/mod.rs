//! Backend data collaborator: response shapes and the HTTP client.

pub mod client;
pub mod wire;

pub use client::{HttpStatsSource, StatsSource};
pub use wire::{DailyResponse, PushupStat, RunningStat, WeeklyResponse};
