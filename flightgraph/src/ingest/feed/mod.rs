mod client;
pub mod wire;

pub use client::{feed_date, FeedClient};
