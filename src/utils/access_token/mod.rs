pub mod access_token;

#[cfg(test)]
mod access_token_tests;
