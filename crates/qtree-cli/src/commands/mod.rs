pub mod check;
pub mod dump;
pub mod input;

#[cfg(test)]
mod check_tests;
#[cfg(test)]
mod input_tests;
