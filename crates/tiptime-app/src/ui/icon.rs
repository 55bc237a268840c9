pub(crate) const MONEY: &str = "💵";
pub(crate) const PERCENT: &str = "%";
