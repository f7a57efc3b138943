//! Request guards for authentication and authorization.

pub mod auth;

#[cfg(test)]
mod test;
