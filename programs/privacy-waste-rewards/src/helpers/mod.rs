pub mod ledger;
pub mod math;
