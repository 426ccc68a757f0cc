pub mod likes;
pub mod profile;
pub mod ratings;

#[cfg(test)]
pub(crate) mod testing;
