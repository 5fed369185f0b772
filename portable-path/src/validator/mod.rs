pub mod illegal_chars;
pub mod root_length;

#[cfg(test)]
mod tests;
