//! Request guards applied inside controllers.

pub mod auth;

#[cfg(test)]
mod test;
