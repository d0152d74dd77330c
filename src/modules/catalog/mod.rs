pub mod adapter;
pub mod application;
#[cfg(test)]
pub(crate) mod test_support;
