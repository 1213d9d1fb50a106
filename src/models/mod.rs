pub mod coin;

pub use coin::CoinRecord;
