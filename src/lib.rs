//! coursesmith library exports

pub mod core;
pub mod publish;

#[cfg(test)]
pub mod test_support;
